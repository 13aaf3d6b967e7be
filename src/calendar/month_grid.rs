use super::date::CalendarDate;
use super::date_math;

/// Days per visual week row
pub const DAYS_PER_WEEK: usize = 7;

/// Week rows per month grid, fixed so every month has the same height
pub const WEEKS_PER_GRID: usize = 6;

/// Cells per month grid
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// One day slot in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day_number: u32,
    /// False for leading/trailing days borrowed from adjacent months
    pub belongs_to_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// How a cell should be emphasized when drawn
///
/// Today wins over selected: a cell that is both renders as today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEmphasis {
    Today,
    Selected,
    Muted,
    Normal,
}

impl DayCell {
    pub fn emphasis(&self) -> CellEmphasis {
        if self.is_today {
            CellEmphasis::Today
        } else if self.is_selected {
            CellEmphasis::Selected
        } else if !self.belongs_to_displayed_month {
            CellEmphasis::Muted
        } else {
            CellEmphasis::Normal
        }
    }
}

/// A 6×7 grid of day cells for one month of one year
///
/// Week 0 is the first calendar week of the month; column 0 is Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridModel {
    pub year: i32,
    pub month: u32,
    pub weekday_of_first: u32,
    pub days_in_month: u32,
    pub cells: [DayCell; CELLS_PER_GRID],
}

impl MonthGridModel {
    /// Cells of one week row
    pub fn week(&self, week: usize) -> &[DayCell] {
        let start = week * DAYS_PER_WEEK;
        &self.cells[start..start + DAYS_PER_WEEK]
    }

    /// Iterate over the six week rows in order
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Absolute date of the cell at `index`
    ///
    /// Leading cells resolve into the previous month and trailing cells into
    /// the next month, wrapping the year where needed.
    pub fn date_of(&self, index: usize) -> Option<CalendarDate> {
        let cell = self.cells.get(index)?;
        let (year, month) = if cell.belongs_to_displayed_month {
            (self.year, self.month)
        } else if index < self.weekday_of_first as usize {
            date_math::previous_month(self.year, self.month)
        } else {
            date_math::next_month(self.year, self.month)
        };
        CalendarDate::new(year, month, cell.day_number)
    }

    /// Index of the cell showing `date` as a current-month day
    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        if date.year() != self.year || date.month() != self.month {
            return None;
        }
        Some(self.weekday_of_first as usize + date.day() as usize - 1)
    }
}

/// Build the grid for `month` of `display_year`
///
/// `today` only marks a cell when the grid is the real current month of the
/// real current year; `selected` marks every cell, muted or not, whose
/// absolute date matches.
pub fn build_month_grid(
    display_year: i32,
    month: u32,
    today: CalendarDate,
    selected: CalendarDate,
) -> MonthGridModel {
    let weekday_of_first = date_math::weekday_of_first(display_year, month);
    let days_in_month = date_math::days_in_month(display_year, month);
    let (prev_year, prev_month) = date_math::previous_month(display_year, month);
    let (next_year, next_month) = date_math::next_month(display_year, month);
    let days_in_prev_month = date_math::days_in_month(prev_year, prev_month);

    let lead = weekday_of_first as usize;
    let is_current_month = today.year() == display_year && today.month() == month;

    let mut cells = [DayCell {
        day_number: 0,
        belongs_to_displayed_month: false,
        is_today: false,
        is_selected: false,
    }; CELLS_PER_GRID];

    let mut day = 1;
    let mut next_month_day = 1;

    for (index, cell) in cells.iter_mut().enumerate() {
        if index < lead {
            let value = days_in_prev_month - weekday_of_first + index as u32 + 1;
            *cell = DayCell {
                day_number: value,
                belongs_to_displayed_month: false,
                is_today: false,
                is_selected: selected.is(prev_year, prev_month, value),
            };
        } else if day <= days_in_month {
            *cell = DayCell {
                day_number: day,
                belongs_to_displayed_month: true,
                is_today: is_current_month && today.day() == day,
                is_selected: selected.is(display_year, month, day),
            };
            day += 1;
        } else {
            *cell = DayCell {
                day_number: next_month_day,
                belongs_to_displayed_month: false,
                is_today: false,
                is_selected: selected.is(next_year, next_month, next_month_day),
            };
            next_month_day += 1;
        }
    }

    MonthGridModel {
        year: display_year,
        month,
        weekday_of_first,
        days_in_month,
        cells,
    }
}
