//! Year-calendar layout and navigation model
//!
//! Pure, synchronous date math and grid layout. The host supplies `today`
//! and reads grids and panel geometry back on every redraw.

pub mod date;
pub mod date_math;
pub mod month_grid;
pub mod panel;
pub mod year_layout;

pub use date::{CalendarDate, DateParseError};
pub use month_grid::{build_month_grid, CellEmphasis, DayCell, MonthGridModel};
pub use panel::{panel_height, panel_rows};
pub use year_layout::{month_name, LayoutChange, YearLayout};
