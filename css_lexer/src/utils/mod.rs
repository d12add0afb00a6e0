//! Shared source-location types used by the lexer, the logging layer and
//! the CLI diagnostics.

pub mod span;

pub use span::{Position, SourceMap, Span};
