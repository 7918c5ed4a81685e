mod csv_output;
mod driver;
mod error;
mod layout;
mod officer_names;
mod officer_page;
mod page_source;
mod page_type;
mod row_parse;
mod run;
mod sink;
mod store;
mod summary_page;
mod tokens;

pub use run::run;
pub use store::sql_column_for;

#[cfg(test)]
pub use store::{ExtractRunRecord, ensure_schema, insert_extract_run};
#[cfg(test)]
pub use model_fixtures::sample_record;
