//! Pure text rendering helpers for the travel report.
//!
//! Plain table:
//!   | Start Date  | End Date    | Total Days Outside | Full Days Outside |
//!   | 05 Nov 2023 | 07 Nov 2023 |                  3 |                 1 |

use crate::travel_log::{TravelLog, TravelTotals};

/// Line printed above and below each report section.
pub const BANNER: &str = "=======================================================";

const START_HEADER: &str = "Start Date";
const END_HEADER: &str = "End Date";
const TOTAL_LABEL: &str = "Total Days Outside";
const FULL_LABEL: &str = "Full Days Outside";

pub type Row = [String; 4];

fn with_home(label: &str, home: Option<&str>) -> String {
    match home {
        Some(home) => format!("{label} {home}"),
        None => label.to_string(),
    }
}

/// `Start Date | End Date | Total Days Outside[ home] | Full Days Outside[ home]`
pub fn column_headers(home: Option<&str>) -> Row {
    [
        START_HEADER.to_string(),
        END_HEADER.to_string(),
        with_home(TOTAL_LABEL, home),
        with_home(FULL_LABEL, home),
    ]
}

/// One row of cells per log, dates rendered with `date_format`.
pub fn table_rows(logs: &[TravelLog], date_format: &str) -> Vec<Row> {
    logs.iter()
        .map(|log| {
            [
                log.start_date.format(date_format).to_string(),
                log.end_date.format(date_format).to_string(),
                log.total_days_outside.to_string(),
                log.full_days_outside.to_string(),
            ]
        })
        .collect()
}

/// Aligned text table. Headers and dates are left-aligned, day counts right-aligned.
pub fn plain_table(headers: &Row, rows: &[Row]) -> String {
    let mut widths = headers.clone().map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = plain_row(headers, &widths, false);
    for row in rows {
        out.push_str(&plain_row(row, &widths, true));
    }
    out
}

fn plain_row(cells: &Row, widths: &[usize; 4], numbers_right: bool) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if numbers_right && i >= 2 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect();
    format!("| {} |\n", cells.join(" | "))
}

/// The same table as Markdown, for a styled terminal renderer.
pub fn markdown_table(headers: &Row, rows: &[Row]) -> String {
    let mut md = String::from("|:-|:-|-:|-:|\n");
    md.push_str(&format!("|**{}**|\n", headers.join("**|**")));
    md.push_str("|-\n");
    for row in rows {
        md.push_str(&format!("|{}|\n", row.join("|")));
    }
    md.push_str("|-\n");
    md
}

/// `Total Days Outside[ home]: N` and `Full Days Outside[ home]: N`, one per line.
pub fn totals_lines(totals: &TravelTotals, home: Option<&str>) -> String {
    format!(
        "{}: {}\n{}: {}\n",
        with_home(TOTAL_LABEL, home),
        totals.total_days_outside,
        with_home(FULL_LABEL, home),
        totals.full_days_outside,
    )
}
