pub mod concat;
pub mod extract;
pub mod status;
pub mod summarize;
