//! The scanning state machine
//!
//! `ScanText` is the initial state. It consumes characters until end of
//! input or a `/`; the `/` hands control to `ScanComment`, which either
//! emits a whole comment or fails the scan. There is no recovery: the
//! first failure is the last token.

use super::emitter::{Emitter, SinkClosed, TokenSink};
use super::error::{LexerError, ScanError};
use crate::config::constants::compile_time::lexical::{END_COMMENT, START_COMMENT};
use crate::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    ScanText,
    ScanComment,
}

/// How a scan ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// `EndOfStream` was delivered
    Completed,
    /// The `Error` token was delivered
    Failed(ScanError),
    /// The sink closed before a terminal token was delivered
    Cancelled,
}

impl ScanOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanOutcome::Cancelled)
    }
}

enum Step {
    Continue(State),
    Finished,
    Failed(ScanError),
}

/// Drive the state machine from `ScanText` until a terminal state
pub fn run<S: TokenSink>(emitter: &mut Emitter<'_, S>) -> ScanOutcome {
    let mut state = State::ScanText;

    loop {
        let step = match state {
            State::ScanText => scan_text(emitter),
            State::ScanComment => scan_comment(emitter),
        };

        match step {
            Ok(Step::Continue(next)) => state = next,
            Ok(Step::Finished) => return ScanOutcome::Completed,
            Ok(Step::Failed(failure)) => return ScanOutcome::Failed(failure),
            Err(SinkClosed) => return ScanOutcome::Cancelled,
        }
    }
}

fn scan_text<S: TokenSink>(emitter: &mut Emitter<'_, S>) -> Result<Step, SinkClosed> {
    loop {
        match emitter.cursor().advance() {
            None => break,
            Some('/') => {
                emitter.emit_excluding_last(TokenKind::Text)?;
                return Ok(Step::Continue(State::ScanComment));
            }
            Some(_) => {}
        }
    }

    if emitter.cursor().has_pending() {
        emitter.emit(TokenKind::Text)?;
    }
    emitter.emit(TokenKind::EndOfStream)?;

    Ok(Step::Finished)
}

/// Entered with the cursor on the `/` that ended the previous text run
fn scan_comment<S: TokenSink>(emitter: &mut Emitter<'_, S>) -> Result<Step, SinkClosed> {
    let remaining = emitter.cursor().remaining();

    if !remaining.starts_with(START_COMMENT) {
        return Ok(Step::Failed(emitter.fail(LexerError::InvalidComment)?));
    }

    // The close search includes the opener, so "/*/" is a whole comment
    let Some(close) = remaining.find(END_COMMENT) else {
        return Ok(Step::Failed(emitter.fail(LexerError::UnclosedComment)?));
    };

    emitter.cursor().jump(close + END_COMMENT.len());
    emitter.emit(TokenKind::Comment)?;

    Ok(Step::Continue(State::ScanText))
}
