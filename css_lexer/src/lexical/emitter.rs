//! Token emission: slices the cursor's pending text into tokens and hands
//! them to a sink.

use super::cursor::Cursor;
use super::error::{LexerError, ScanError};
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::{SourceMap, Span};
use crate::{log_debug, log_error};
use serde::Serialize;
use std::sync::mpsc::SyncSender;

/// What travels from the producer to the consumer
pub type Handoff = Result<Token, ScanError>;

/// The consumer stopped listening; the producer must stop scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("token consumer is gone")]
pub struct SinkClosed;

/// Destination for emitted tokens
pub trait TokenSink {
    fn deliver(&mut self, item: Handoff) -> Result<(), SinkClosed>;
}

/// Rendezvous handoff: blocks until the consumer takes the item
impl TokenSink for SyncSender<Handoff> {
    fn deliver(&mut self, item: Handoff) -> Result<(), SinkClosed> {
        self.send(item).map_err(|_| SinkClosed)
    }
}

/// Collects everything; failures become `Error` tokens
impl TokenSink for Vec<Token> {
    fn deliver(&mut self, item: Handoff) -> Result<(), SinkClosed> {
        self.push(item.unwrap_or_else(|e| e.to_token()));
        Ok(())
    }
}

impl<T: TokenSink + ?Sized> TokenSink for &mut T {
    fn deliver(&mut self, item: Handoff) -> Result<(), SinkClosed> {
        (**self).deliver(item)
    }
}

/// Counters gathered while emitting
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub text_tokens: usize,
    pub comment_tokens: usize,
    pub error_tokens: usize,
    /// Bytes covered by emitted text and comment tokens
    pub bytes_scanned: usize,
    pub max_comment_length: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.kind {
            TokenKind::Text => self.text_tokens += 1,
            TokenKind::Comment => {
                self.comment_tokens += 1;
                self.max_comment_length = self.max_comment_length.max(token.value.len());
            }
            TokenKind::Error => self.error_tokens += 1,
            TokenKind::EndOfStream | TokenKind::Space => {}
        }

        if token.kind.carries_source() {
            self.bytes_scanned += token.value.len();
        }
    }
}

/// Owns the cursor for one scan and writes tokens into `S`
pub struct Emitter<'a, S: TokenSink> {
    name: &'a str,
    cursor: Cursor<'a>,
    sink: S,
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
}

impl<'a, S: TokenSink> Emitter<'a, S> {
    pub fn new(name: &'a str, input: &'a str, sink: S, preferences: LexicalPreferences) -> Self {
        Self {
            name,
            cursor: Cursor::new(input),
            sink,
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn into_metrics(self) -> LexicalMetrics {
        self.metrics
    }

    /// Emit `[start, pos)` as `kind` and start the next token here
    pub fn emit(&mut self, kind: TokenKind) -> Result<(), SinkClosed> {
        let token = Token::new(kind, self.cursor.start(), self.cursor.pending());
        self.cursor.skip();
        self.send(token)
    }

    /// Step back over the last character, then emit what precedes it if
    /// anything does
    pub fn emit_excluding_last(&mut self, kind: TokenKind) -> Result<(), SinkClosed> {
        self.cursor.backtrack();
        if self.cursor.has_pending() {
            self.emit(kind)
        } else {
            Ok(())
        }
    }

    /// Send the single `Error` token for this scan. The caller must stop
    /// the state machine afterwards.
    pub fn fail(&mut self, error: LexerError) -> Result<ScanError, SinkClosed> {
        let failure = ScanError::new(error, self.cursor.start());
        self.metrics.record_token(&failure.to_token(), &self.preferences);

        match self.failure_span(failure.pos) {
            Some(span) => log_error!(error.error_code(), &error.to_string(), span = span,
                "lexer" => self.name
            ),
            None => log_error!(error.error_code(), &error.to_string(),
                "lexer" => self.name,
                "pos" => failure.pos
            ),
        }

        self.sink.deliver(Err(failure.clone()))?;
        Ok(failure)
    }

    /// Line/column context for a failure event. `None` when positions are
    /// disabled or no logger is installed, since the map copies the input.
    fn failure_span(&self, pos: usize) -> Option<Span> {
        if !self.preferences.include_position_in_errors || !crate::logging::is_initialized() {
            return None;
        }
        Some(SourceMap::new(self.cursor.input()).span_at(pos, 1))
    }

    fn send(&mut self, token: Token) -> Result<(), SinkClosed> {
        self.metrics.record_token(&token, &self.preferences);

        if self.preferences.trace_tokens {
            log_debug!("Token emitted",
                "lexer" => self.name,
                "kind" => token.kind,
                "pos" => token.pos,
                "len" => token.value.len()
            );
        }

        self.sink.deliver(Ok(token))
    }
}

/// Log the end of a scan; shared by the threaded and synchronous paths
pub(crate) fn log_scan_finished(name: &str, metrics: &LexicalMetrics, cancelled: bool) {
    if cancelled {
        crate::log_success!(codes::success::SCAN_CANCELLED, "Scan cancelled by consumer",
            "lexer" => name,
            "tokens" => metrics.total_tokens
        );
    } else {
        crate::log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization finished",
            "lexer" => name,
            "tokens" => metrics.total_tokens,
            "comments" => metrics.comment_tokens,
            "bytes" => metrics.bytes_scanned
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences() -> LexicalPreferences {
        LexicalPreferences {
            trace_tokens: false,
            collect_detailed_metrics: true,
            include_position_in_errors: true,
        }
    }

    #[test]
    fn test_emit_advances_token_start() {
        let mut tokens = Vec::new();
        let mut emitter = Emitter::new("t", "ab/*", &mut tokens, preferences());
        emitter.cursor().advance();
        emitter.cursor().advance();
        emitter.emit(TokenKind::Text).unwrap();
        assert_eq!(emitter.cursor().start(), 2);
        assert_eq!(emitter.metrics().text_tokens, 1);
        drop(emitter);

        assert_eq!(tokens, vec![Token::new(TokenKind::Text, 0, "ab")]);
    }

    #[test]
    fn test_emit_excluding_last_skips_empty_text() {
        let mut tokens = Vec::new();
        let mut emitter = Emitter::new("t", "/x", &mut tokens, preferences());
        assert_eq!(emitter.cursor().advance(), Some('/'));
        emitter.emit_excluding_last(TokenKind::Text).unwrap();
        assert_eq!(emitter.cursor().pos(), 0);
        drop(emitter);

        assert!(tokens.is_empty());
    }

    #[test]
    fn test_emit_excluding_last_drops_boundary_char() {
        let mut tokens = Vec::new();
        let mut emitter = Emitter::new("t", "ab/", &mut tokens, preferences());
        for _ in 0..3 {
            emitter.cursor().advance();
        }
        emitter.emit_excluding_last(TokenKind::Text).unwrap();
        assert_eq!(emitter.cursor().remaining(), "/");
        drop(emitter);

        assert_eq!(tokens, vec![Token::new(TokenKind::Text, 0, "ab")]);
    }

    #[test]
    fn test_fail_reports_token_start() {
        let mut tokens = Vec::new();
        let mut emitter = Emitter::new("t", "ab/ c", &mut tokens, preferences());
        emitter.cursor().jump(2);
        emitter.cursor().skip();
        let failure = emitter.fail(LexerError::InvalidComment).unwrap();
        assert_eq!(failure, ScanError::new(LexerError::InvalidComment, 2));
        assert_eq!(emitter.metrics().error_tokens, 1);
        drop(emitter);

        assert_eq!(tokens, vec![Token::new(TokenKind::Error, 2, "invalid comment")]);
    }

    #[test]
    fn test_failure_span_needs_a_logger() {
        let mut tokens = Vec::new();
        let emitter = Emitter::new("t", "a/", &mut tokens, preferences());
        // The library tests never install the global logger
        assert!(!crate::logging::is_initialized());
        assert_eq!(emitter.failure_span(1), None);
    }

    #[test]
    fn test_closed_channel_reports_sink_closed() {
        let (tx, rx) = std::sync::mpsc::sync_channel::<Handoff>(0);
        drop(rx);
        let mut emitter = Emitter::new("t", "a", tx, preferences());
        emitter.cursor().advance();
        assert_eq!(emitter.emit(TokenKind::Text), Err(SinkClosed));
    }

    #[test]
    fn test_metrics_skip_detail_when_disabled() {
        let mut metrics = LexicalMetrics::default();
        let prefs = LexicalPreferences {
            collect_detailed_metrics: false,
            ..preferences()
        };
        metrics.record_token(&Token::new(TokenKind::Comment, 0, "/**/"), &prefs);
        assert_eq!(metrics.total_tokens, 1);
        assert_eq!(metrics.comment_tokens, 0);
        assert_eq!(metrics.bytes_scanned, 0);
    }
}
