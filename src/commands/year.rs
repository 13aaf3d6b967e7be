use anyhow::Result;

use crate::calendar::{month_name, CellEmphasis, DayCell, MonthGridModel, YearLayout};
use crate::clock::Clock;
use crate::commands::parse_date;
use crate::config::DisplayConfig;
use crate::formatting::format_header;
use crate::layout_constants::{MONTH_BLOCK_WIDTH, MONTH_COLUMNS, MONTH_GAP};

const WEEKDAY_HEADER: &str = " Su Mo Tu We Th Fr Sa";

/// One 3-column day cell: marker plus right-aligned day number
///
/// Days of adjacent months are left blank in plain text, even when selected,
/// so a day is never printed in two month blocks.
fn format_cell(cell: &DayCell) -> String {
    if !cell.belongs_to_displayed_month {
        return "   ".to_string();
    }
    match cell.emphasis() {
        CellEmphasis::Today => format!("*{:>2}", cell.day_number),
        CellEmphasis::Selected => format!(">{:>2}", cell.day_number),
        CellEmphasis::Muted | CellEmphasis::Normal => format!(" {:>2}", cell.day_number),
    }
}

/// Lines of one month block: name, weekday header, six weeks
fn month_lines(grid: &MonthGridModel) -> Vec<String> {
    let width = MONTH_BLOCK_WIDTH as usize;
    let mut lines = Vec::with_capacity(8);
    lines.push(format!(" {:<w$}", month_name(grid.month), w = width - 1));
    lines.push(WEEKDAY_HEADER.to_string());
    for week in grid.weeks() {
        let line: String = week
            .iter()
            .map(format_cell)
            .collect();
        lines.push(line);
    }
    lines
}

/// Render the whole year as plain text, three months per row
pub fn format_year(layout: &YearLayout, display: &DisplayConfig) -> String {
    let mut output = format_header(&layout.display_year().to_string(), true, display);
    let gap = " ".repeat(MONTH_GAP as usize);
    let grids = layout.month_grids();

    for (row_index, row) in grids.chunks(MONTH_COLUMNS as usize).enumerate() {
        if row_index > 0 {
            output.push('\n');
        }
        let blocks: Vec<Vec<String>> = row.iter().map(month_lines).collect();
        for line_index in 0..blocks[0].len() {
            let line = blocks
                .iter()
                .map(|b| b[line_index].as_str())
                .collect::<Vec<_>>()
                .join(&gap);
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }
    output.push_str("\n* today   > selected\n");
    output
}

pub fn run(
    clock: &dyn Clock,
    display: &DisplayConfig,
    year: Option<i32>,
    date: Option<String>,
) -> Result<()> {
    let today = clock.today();
    let mut layout = YearLayout::new(today);

    if date.is_some() {
        let selected = parse_date(date, clock)?;
        layout.select_date(selected);
        layout.change_year(selected.year().saturating_sub(today.year()));
    }
    if let Some(year) = year {
        layout.change_year(year.saturating_sub(layout.display_year()));
    }

    print!("{}", format_year(&layout, display));
    Ok(())
}
