/// YearGrid widget - twelve month blocks laid out in rows of up to three
///
/// Each block is a month name, a weekday header and six weeks of day cells.
/// Cell colors follow `CellEmphasis`: today wins over the selection, and days
/// of neighbouring months are muted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::calendar::{month_name, CellEmphasis, DayCell, MonthGridModel};
use crate::config::DisplayConfig;
use crate::layout_constants::{
    DAY_CELL_WIDTH, MONTH_BLOCK_HEIGHT, MONTH_BLOCK_WIDTH, MONTH_COLUMNS, MONTH_GAP,
};
use crate::tui::widgets::RenderableWidget;

const WEEKDAY_HEADER: &str = " Su Mo Tu We Th Fr Sa";

/// Blank line between rows of months
const MONTH_ROW_GAP: u16 = 1;

#[derive(Debug, Clone)]
pub struct YearGrid {
    pub grids: Vec<MonthGridModel>,
}

impl YearGrid {
    pub fn new(grids: Vec<MonthGridModel>) -> Self {
        Self { grids }
    }

    /// Months per row that fit in `width`, at most three
    pub fn columns_for_width(width: u16) -> u16 {
        ((width + MONTH_GAP) / (MONTH_BLOCK_WIDTH + MONTH_GAP)).clamp(1, MONTH_COLUMNS)
    }

    /// Left edge and column count of the month blocks inside `area`
    fn block_origin(area: Rect) -> (u16, u16) {
        let columns = Self::columns_for_width(area.width);
        let used_width = columns * MONTH_BLOCK_WIDTH + (columns - 1) * MONTH_GAP;
        (area.x + area.width.saturating_sub(used_width) / 2, columns)
    }

    /// Grid and cell index under the terminal position (`x`, `y`)
    ///
    /// Uses the same geometry as `render`; month names, weekday headers and
    /// gaps hit nothing.
    pub fn cell_at(&self, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
        if area.width < MONTH_BLOCK_WIDTH || y < area.y || y >= area.bottom() {
            return None;
        }
        let (left, columns) = Self::block_origin(area);
        if x < left {
            return None;
        }

        let rel_x = x - left;
        let column = rel_x / (MONTH_BLOCK_WIDTH + MONTH_GAP);
        let x_in_block = rel_x % (MONTH_BLOCK_WIDTH + MONTH_GAP);
        if column >= columns || x_in_block >= MONTH_BLOCK_WIDTH {
            return None;
        }

        let rel_y = y - area.y;
        let row = rel_y / (MONTH_BLOCK_HEIGHT + MONTH_ROW_GAP);
        let y_in_block = rel_y % (MONTH_BLOCK_HEIGHT + MONTH_ROW_GAP);
        // Name line and weekday header come before the six weeks
        if !(2..MONTH_BLOCK_HEIGHT).contains(&y_in_block) {
            return None;
        }

        let grid_index = (row * columns + column) as usize;
        if grid_index >= self.grids.len() {
            return None;
        }
        let week = (y_in_block - 2) as usize;
        let day = (x_in_block / DAY_CELL_WIDTH) as usize;
        Some((grid_index, week * 7 + day))
    }

    fn cell_style(cell: &DayCell, config: &DisplayConfig) -> Style {
        match cell.emphasis() {
            CellEmphasis::Today => Style::default()
                .fg(Color::White)
                .bg(config.accent_fg)
                .add_modifier(Modifier::BOLD),
            CellEmphasis::Selected => Style::default().fg(Color::Black).bg(config.selection_fg),
            CellEmphasis::Muted => Style::default().fg(config.muted_fg),
            CellEmphasis::Normal => Style::default().fg(config.text_fg),
        }
    }

    fn render_month(&self, grid: &MonthGridModel, x: u16, y: u16, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let name = month_name(grid.month);
        let name_x = x + (MONTH_BLOCK_WIDTH.saturating_sub(name.len() as u16)) / 2;
        buf.set_string(
            name_x,
            y,
            name,
            Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD),
        );

        if y + 1 < area.bottom() {
            buf.set_string(x, y + 1, WEEKDAY_HEADER, Style::default().fg(config.muted_fg));
        }

        for (week_index, week) in grid.weeks().enumerate() {
            let row_y = y + 2 + week_index as u16;
            if row_y >= area.bottom() {
                break;
            }
            for (day_index, cell) in week.iter().enumerate() {
                let cell_x = x + day_index as u16 * DAY_CELL_WIDTH;
                // Leading space stays unstyled so highlights cover just the digits
                buf.set_string(
                    cell_x + 1,
                    row_y,
                    format!("{:>2}", cell.day_number),
                    Self::cell_style(cell, config),
                );
            }
        }
    }
}

impl RenderableWidget for YearGrid {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < MONTH_BLOCK_WIDTH || area.height == 0 {
            return;
        }

        let (left, columns) = Self::block_origin(area);

        for (index, grid) in self.grids.iter().enumerate() {
            let column = index as u16 % columns;
            let row = index as u16 / columns;
            let x = left + column * (MONTH_BLOCK_WIDTH + MONTH_GAP);
            let y = area.y + row * (MONTH_BLOCK_HEIGHT + MONTH_ROW_GAP);
            if y >= area.bottom() {
                break;
            }
            self.render_month(grid, x, y, area, buf, config);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        let rows = (self.grids.len() as u16).div_ceil(MONTH_COLUMNS);
        Some(rows * (MONTH_BLOCK_HEIGHT + MONTH_ROW_GAP))
    }
}
