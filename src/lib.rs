pub mod analyzers;
pub mod config;
pub mod diagnostics;
pub mod gradebook;
pub mod loader;
pub mod logging;
pub mod output;
pub mod parser;
pub mod records;
pub mod writer;
