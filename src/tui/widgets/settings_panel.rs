/// SettingsPanel widget - preferences and the calendar list
///
/// Boolean preferences and calendars show a checkbox; the max-events row
/// shows its value between arrows. The selected row carries the selector
/// marker and the selection color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::{parse_color, Config, DisplayConfig};
use crate::events::{Calendar, EventPreferences};
use crate::formatting::format_header;
use crate::tui::types::SettingsItem;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone)]
pub struct SettingsPanel<'a> {
    pub config: &'a Config,
    pub calendars: &'a [Calendar],
    pub selected_index: usize,
}

impl<'a> SettingsPanel<'a> {
    fn checkbox(&self, checked: bool, config: &DisplayConfig) -> String {
        if checked {
            config.box_chars.check_on.clone()
        } else {
            config.box_chars.check_off.clone()
        }
    }

    /// Text of one row, without the selector column
    fn row_text(&self, item: SettingsItem, prefs: &EventPreferences, config: &DisplayConfig) -> String {
        match item {
            SettingsItem::ShowAllDayEvents => format!(
                "{} {}",
                self.checkbox(self.config.show_all_day_events, config),
                item.label()
            ),
            SettingsItem::MaxEvents => {
                format!("{}: < {} >", item.label(), self.config.max_events())
            }
            SettingsItem::LaunchAtLogin => format!(
                "{} {}",
                self.checkbox(self.config.launch_at_login, config),
                item.label()
            ),
            SettingsItem::UseUnicode => format!(
                "{} {}",
                self.checkbox(self.config.display.use_unicode, config),
                item.label()
            ),
            SettingsItem::Calendar(index) => match self.calendars.get(index) {
                Some(calendar) => format!(
                    "{} {}",
                    self.checkbox(prefs.is_enabled(&calendar.id), config),
                    calendar.title
                ),
                None => String::new(),
            },
        }
    }
}

impl<'a> RenderableWidget for SettingsPanel<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        let prefs = EventPreferences::from_config(self.config);
        let header_style = Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD);
        let mut y = area.y;
        let put_header = |y: &mut u16, text: &str, buf: &mut Buffer| {
            for line in format_header(text, false, config).lines() {
                if *y >= area.bottom() {
                    return;
                }
                buf.set_string(area.x + 1, *y, line, header_style);
                *y += 1;
            }
        };

        put_header(&mut y, "Settings", buf);

        let count = SettingsItem::count(self.calendars.len());
        for index in 0..count {
            let Some(item) = SettingsItem::at(index, self.calendars.len()) else {
                break;
            };
            if index == SettingsItem::FIXED.len() {
                y += 1;
                put_header(&mut y, "Calendars", buf);
            }
            if y >= area.bottom() {
                return;
            }

            let selected = index == self.selected_index;
            let style = if selected {
                Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(config.text_fg)
            };
            if selected {
                buf.set_string(area.x + 1, y, &config.box_chars.selector, style);
            }
            buf.set_string(area.x + 3, y, self.row_text(item, &prefs, config), style);

            if let SettingsItem::Calendar(calendar_index) = item {
                if let Some(calendar) = self.calendars.get(calendar_index) {
                    let text_width = self.row_text(item, &prefs, config).chars().count() as u16;
                    let swatch_x = area.x + 4 + text_width;
                    if swatch_x < area.right() {
                        let color = parse_color(&calendar.color).unwrap_or(config.text_fg);
                        buf.set_string(swatch_x, y, &config.box_chars.bullet, Style::default().fg(color));
                    }
                }
            }
            y += 1;
        }

        if self.calendars.is_empty() {
            y += 1;
            put_header(&mut y, "Calendars", buf);
            if y < area.bottom() {
                buf.set_string(area.x + 3, y, "No calendars", Style::default().fg(config.muted_fg));
            }
        }
    }
}
