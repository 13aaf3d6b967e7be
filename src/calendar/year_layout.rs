use tracing::debug;

use super::date::CalendarDate;
use super::month_grid::{build_month_grid, MonthGridModel};

pub const MONTHS_PER_YEAR: u32 = 12;

pub const MONTH_NAMES: [&str; 12] = [
    "JANUARY", "FEBRUARY", "MARCH",
    "APRIL", "MAY", "JUNE",
    "JULY", "AUGUST", "SEPTEMBER",
    "OCTOBER", "NOVEMBER", "DECEMBER",
];

/// What a navigation call changed, so the host knows what to redo
///
/// `grids` means the month grids must be rebuilt; `selection` means the
/// selected date moved and the events list should be re-fetched and resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutChange {
    pub grids: bool,
    pub selection: bool,
}

impl LayoutChange {
    pub const NONE: Self = Self { grids: false, selection: false };

    pub fn is_none(&self) -> bool {
        !self.grids && !self.selection
    }
}

/// Navigation state of one year-view session
///
/// Starts on today's year with today selected. The display year moves
/// independently of the real current year; the grids are recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearLayout {
    display_year: i32,
    selected_date: CalendarDate,
    today: CalendarDate,
}

impl YearLayout {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            display_year: today.year(),
            selected_date: today,
            today,
        }
    }

    pub fn display_year(&self) -> i32 {
        self.display_year
    }

    pub fn selected_date(&self) -> CalendarDate {
        self.selected_date
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Move the displayed year by `delta`, leaving the selection alone
    pub fn change_year(&mut self, delta: i32) -> LayoutChange {
        let year = self.display_year.saturating_add(delta);
        if year == self.display_year {
            return LayoutChange::NONE;
        }
        debug!("LAYOUT: display year {} -> {}", self.display_year, year);
        self.display_year = year;
        LayoutChange { grids: true, selection: false }
    }

    /// Show today's year and select today
    pub fn go_to_today(&mut self) -> LayoutChange {
        debug!("LAYOUT: go to today ({})", self.today);
        let grids = self.display_year != self.today.year() || self.selected_date != self.today;
        self.display_year = self.today.year();
        self.selected_date = self.today;
        LayoutChange { grids, selection: true }
    }

    /// Select a date without navigating
    ///
    /// Selecting a leading/trailing cell can reference a neighbouring year;
    /// the display year still stays where it is.
    pub fn select_date(&mut self, date: CalendarDate) -> LayoutChange {
        if date == self.selected_date {
            return LayoutChange::NONE;
        }
        debug!("LAYOUT: selected {} -> {}", self.selected_date, date);
        self.selected_date = date;
        LayoutChange { grids: true, selection: true }
    }

    /// Move the selection by `days` for keyboard navigation
    ///
    /// Unlike `select_date`, the view follows the selection into another year.
    pub fn move_selection(&mut self, days: i64) -> LayoutChange {
        let Some(date) = self.selected_date.add_days(days) else {
            return LayoutChange::NONE;
        };
        let mut change = self.select_date(date);
        if date.year() != self.display_year {
            self.display_year = date.year();
            change.grids = true;
        }
        change
    }

    /// Update today from the host clock, e.g. after midnight
    pub fn set_today(&mut self, today: CalendarDate) -> LayoutChange {
        if today == self.today {
            return LayoutChange::NONE;
        }
        debug!("LAYOUT: today {} -> {}", self.today, today);
        self.today = today;
        LayoutChange { grids: true, selection: false }
    }

    /// Grids for January through December of the display year
    pub fn month_grids(&self) -> Vec<MonthGridModel> {
        (1..=MONTHS_PER_YEAR)
            .map(|month| self.month_grid(month))
            .collect()
    }

    /// Grid for a single month of the display year
    pub fn month_grid(&self, month: u32) -> MonthGridModel {
        build_month_grid(self.display_year, month, self.today, self.selected_date)
    }
}

/// Upper-case month name for `month` in 1..=12
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_new_starts_on_today() {
        let layout = YearLayout::new(date(2026, 10, 19));
        assert_eq!(layout.display_year(), 2026);
        assert_eq!(layout.selected_date(), date(2026, 10, 19));
    }

    #[test]
    fn test_change_year_is_its_own_inverse() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        for delta in [1, -1, 5, -30, 400] {
            let before = layout.clone();
            layout.change_year(delta);
            layout.change_year(-delta);
            assert_eq!(layout, before, "delta {}", delta);
        }
    }

    #[test]
    fn test_change_year_keeps_selection() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        let change = layout.change_year(-3);
        assert_eq!(change, LayoutChange { grids: true, selection: false });
        assert_eq!(layout.display_year(), 2023);
        assert_eq!(layout.selected_date(), date(2026, 10, 19));
        assert!(layout.change_year(0).is_none());
    }

    #[test]
    fn test_change_year_saturates() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        layout.change_year(i32::MAX);
        assert_eq!(layout.display_year(), i32::MAX);
        assert_eq!(layout.month_grids().len(), 12);
        assert!(layout.change_year(1).is_none());
    }

    #[test]
    fn test_go_to_today_resets_year_and_selection() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        layout.change_year(4);
        layout.select_date(date(2030, 3, 3));
        let change = layout.go_to_today();
        assert!(change.selection);
        assert_eq!(layout.display_year(), 2026);
        assert_eq!(layout.selected_date(), date(2026, 10, 19));
    }

    #[test]
    fn test_go_to_today_is_idempotent() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        layout.change_year(-2);
        layout.go_to_today();
        let once = layout.clone();
        layout.go_to_today();
        assert_eq!(layout, once);
    }

    #[test]
    fn test_select_trailing_cell_keeps_display_year() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        layout.change_year(-2);
        let december = layout.month_grid(12);
        // Last cell of December 2024 is a trailing January 2025 day
        let trailing = december.date_of(41).unwrap();
        assert_eq!((trailing.year(), trailing.month()), (2025, 1));

        let change = layout.select_date(trailing);
        assert!(change.selection);
        assert_eq!(layout.selected_date(), trailing);
        assert_eq!(layout.display_year(), 2024);
        assert!(layout.month_grid(12).cells[41].is_selected);
    }

    #[test]
    fn test_select_same_date_is_no_change() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        assert!(layout.select_date(date(2026, 10, 19)).is_none());
    }

    #[test]
    fn test_move_selection_follows_into_next_year() {
        let mut layout = YearLayout::new(date(2026, 12, 30));
        layout.move_selection(7);
        assert_eq!(layout.selected_date(), date(2027, 1, 6));
        assert_eq!(layout.display_year(), 2027);

        layout.move_selection(-1);
        assert_eq!(layout.selected_date(), date(2027, 1, 5));
        assert_eq!(layout.display_year(), 2027);
    }

    #[test]
    fn test_set_today_moves_highlight() {
        let mut layout = YearLayout::new(date(2026, 10, 19));
        let change = layout.set_today(date(2026, 10, 20));
        assert_eq!(change, LayoutChange { grids: true, selection: false });
        let grid = layout.month_grid(10);
        let today_cell = grid.cells.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today_cell.day_number, 20);
        // Selection stays on the old day
        assert_eq!(layout.selected_date(), date(2026, 10, 19));
    }

    #[test]
    fn test_month_grids_in_order() {
        let layout = YearLayout::new(date(2026, 10, 19));
        let grids = layout.month_grids();
        assert_eq!(grids.len(), 12);
        for (i, grid) in grids.iter().enumerate() {
            assert_eq!(grid.month, i as u32 + 1);
            assert_eq!(grid.year, 2026);
        }
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "JANUARY");
        assert_eq!(month_name(12), "DECEMBER");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
