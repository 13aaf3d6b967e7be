/// Core type definitions used across the TUI
///
/// Views and the rows of the settings panel.

/// Which screen fills the body of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Calendar,
    Settings,
}

/// One row of the settings panel
///
/// The fixed preferences come first, followed by one row per calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    ShowAllDayEvents,
    MaxEvents,
    LaunchAtLogin,
    UseUnicode,
    Calendar(usize),
}

impl SettingsItem {
    /// Preferences that are always listed, in display order
    pub const FIXED: [SettingsItem; 4] = [
        SettingsItem::ShowAllDayEvents,
        SettingsItem::MaxEvents,
        SettingsItem::LaunchAtLogin,
        SettingsItem::UseUnicode,
    ];

    /// Number of rows for a given number of calendars
    pub fn count(calendar_count: usize) -> usize {
        Self::FIXED.len() + calendar_count
    }

    /// Row at `index`, or None past the last calendar
    pub fn at(index: usize, calendar_count: usize) -> Option<SettingsItem> {
        if index < Self::FIXED.len() {
            Some(Self::FIXED[index])
        } else if index < Self::count(calendar_count) {
            Some(SettingsItem::Calendar(index - Self::FIXED.len()))
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShowAllDayEvents => "Show all-day events",
            Self::MaxEvents => "Max events to show",
            Self::LaunchAtLogin => "Launch at login",
            Self::UseUnicode => "Use unicode",
            Self::Calendar(_) => "Calendar",
        }
    }
}
