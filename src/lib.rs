pub mod entry;
pub mod error;
pub mod money;
pub mod parser;
pub mod statement;
