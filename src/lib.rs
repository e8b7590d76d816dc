//! Length Converter TUI Library
//!
//! Conversion engine, session history and the terminal screen built on them.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod converter;
pub mod error;
pub mod history;
pub mod input;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, ConverterState};
pub use config_file::ConverterConfig;
pub use converter::{convert, format_result, ConversionError, ConversionOutcome};
pub use error::LengthTuiError;
pub use history::{ConversionRecord, History};
pub use types::{Unit, UnitInfo};
