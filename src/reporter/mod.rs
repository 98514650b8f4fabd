//! Report output: human-readable console rendering and machine-readable JSON

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
