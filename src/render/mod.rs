mod chart;
mod table;

pub use chart::{chart_for_templates, maybe_chart, ChartSpec};
pub use table::render_table;

use crate::executor::QueryResult;
use colored::Colorize;

pub fn error_line(message: &str) -> String {
    format!("{} {}", "error:".red().bold(), message)
}

pub fn success_line(message: &str) -> String {
    format!("{} {}", "ok:".green().bold(), message)
}

pub fn row_caption(result: &QueryResult) -> String {
    match result.rows.len() {
        1 => "1 row".to_string(),
        n => format!("{n} rows"),
    }
}
