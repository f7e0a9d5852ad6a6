use crate::executor::QueryResult;
use crate::templates;
use colored::Colorize;

const MAX_BAR_WIDTH: usize = 40;

/// The fixed column pair a bar chart reads: one label column for the axis,
/// one numeric value column for the bars.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub label_column: &'static str,
    pub value_column: &'static str,
}

/// Render a bar chart of `spec.value_column` keyed by `spec.label_column`.
///
/// Produces `None` when the result is empty or the value column is absent.
/// That silence is deliberate: a custom query with other aliases simply gets
/// no chart. A missing label column falls back to 1-based row numbers.
pub fn maybe_chart(result: &QueryResult, spec: &ChartSpec) -> Option<String> {
    if result.is_empty() {
        return None;
    }
    let value_idx = result.column_index(spec.value_column)?;
    let label_idx = result.column_index(spec.label_column);

    let labels: Vec<String> = result
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| match label_idx {
            Some(idx) => row[idx].render(),
            None => (i + 1).to_string(),
        })
        .collect();
    let values: Vec<f64> = result
        .rows
        .iter()
        .map(|row| row[value_idx].as_f64().unwrap_or(0.0).max(0.0))
        .collect();

    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{} by {}\n", spec.value_column, spec.label_column));
    for (label, value) in labels.iter().zip(&values) {
        let width = if max > 0.0 {
            ((value / max) * MAX_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(width);
        out.push_str(&format!(
            "{:>label_width$}  {} {}\n",
            label,
            bar.as_str().cyan(),
            format_value(*value),
            label_width = label_width,
        ));
    }
    Some(out)
}

/// Chart for whichever shipped template the result came from, if any: the
/// first template whose value column appears in the result wins.
pub fn chart_for_templates(result: &QueryResult) -> Option<String> {
    templates::TEMPLATES
        .iter()
        .find_map(|t| maybe_chart(result, &t.chart_spec()))
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
