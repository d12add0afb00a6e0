//! Lexical analysis for stylesheet text
//!
//! The scanner is split into a [`cursor`] over the input, an [`emitter`]
//! that turns pending text into tokens, and the [`states`] machine that
//! decides where tokens begin and end. The same machine runs on a producer
//! thread behind [`crate::tokens::TokenStream`] or synchronously through
//! [`tokenize_all`].

pub mod cursor;
pub mod emitter;
pub mod error;
pub mod states;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::{Token, TokenKind};

pub use cursor::Cursor;
pub use emitter::{Emitter, Handoff, LexicalMetrics, SinkClosed, TokenSink};
pub use error::{LexerError, ScanError};
pub use states::{ScanOutcome, State};

/// Everything a synchronous scan produced
#[derive(Debug, Clone)]
pub struct TokenizeOutput {
    /// All tokens in emission order, terminal token included
    pub tokens: Vec<Token>,
    pub error: Option<ScanError>,
    pub metrics: LexicalMetrics,
}

impl TokenizeOutput {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.values_of(TokenKind::Comment)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.values_of(TokenKind::Text)
    }

    /// Concatenated source text of every non-signal token
    pub fn reconstruct(&self) -> String {
        self.tokens
            .iter()
            .filter(|t| t.kind.carries_source())
            .map(|t| t.value.as_str())
            .collect()
    }

    fn values_of(&self, kind: TokenKind) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(move |t| t.kind == kind)
            .map(|t| t.value.as_str())
    }
}

/// Scan `input` on the calling thread with preferences from the environment
pub fn tokenize_all(name: &str, input: &str) -> TokenizeOutput {
    tokenize_all_with_preferences(name, input, LexicalPreferences::default())
}

pub fn tokenize_all_with_preferences(
    name: &str,
    input: &str,
    preferences: LexicalPreferences,
) -> TokenizeOutput {
    let mut tokens = Vec::new();
    let mut emitter = Emitter::new(name, input, &mut tokens, preferences);
    let outcome = states::run(&mut emitter);
    let metrics = emitter.into_metrics();

    emitter::log_scan_finished(name, &metrics, outcome.is_cancelled());

    let error = match outcome {
        ScanOutcome::Failed(failure) => Some(failure),
        ScanOutcome::Completed | ScanOutcome::Cancelled => None,
    };

    TokenizeOutput {
        tokens,
        error,
        metrics,
    }
}

/// Check that every lexical code has registered metadata
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::INVALID_COMMENT,
        crate::logging::codes::lexical::UNCLOSED_COMMENT,
        crate::logging::codes::lexical::PRODUCER_TERMINATED,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
