use crate::executor::QueryResult;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Full result as a bordered text table; the query itself is the only row
/// limit. An empty result still renders its header row.
pub fn render_table(result: &QueryResult) -> String {
    let mut builder = Builder::default();
    builder.push_record(result.columns.iter().map(|c| c.name.as_str()));
    for row in &result.rows {
        builder.push_record(row.iter().map(|cell| cell.render()));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
