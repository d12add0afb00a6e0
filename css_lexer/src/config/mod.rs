//! Configuration module for the stylesheet lexer
//!
//! Compile-time limits live in [`constants`]; user preferences that may be
//! changed per run are read from `CSS_*` environment variables in
//! [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    FileProcessorPreferences, LexicalPreferences, LogLevel, LoggingPreferences, RuntimeConfig,
};

