mod result;
mod run;

pub use result::{CellValue, ColumnInfo, QueryResult};
pub use run::execute;
