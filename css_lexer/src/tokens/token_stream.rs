//! Streaming token handoff between a producer thread and its consumer
//!
//! The state machine runs on its own thread and hands each token over a
//! zero-capacity `sync_channel`, so the producer is never more than one
//! token ahead of the consumer. Dropping the stream closes the channel;
//! a producer blocked on a send then fails, stops scanning and is joined.

use crate::config::constants::compile_time::lexical::PRODUCER_THREAD_PREFIX;
use crate::config::runtime::LexicalPreferences;
use crate::lexical::emitter::log_scan_finished;
use crate::lexical::{states, Emitter, Handoff, LexerError, LexicalMetrics, ScanError};
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::{log_debug, log_error};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// Consumer handle for one scan
pub struct TokenStream {
    name: String,
    receiver: Option<Receiver<Handoff>>,
    producer: Option<JoinHandle<LexicalMetrics>>,
    last_pos: usize,
    finished: bool,
}

impl TokenStream {
    /// Start scanning `input` on a new producer thread. `name` is used in
    /// the thread name and in diagnostics only.
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> io::Result<Self> {
        Self::with_preferences(name, input, LexicalPreferences::default())
    }

    pub fn with_preferences(
        name: impl Into<String>,
        input: impl Into<String>,
        preferences: LexicalPreferences,
    ) -> io::Result<Self> {
        let name = name.into();
        let input = input.into();
        let (sender, receiver) = mpsc::sync_channel::<Handoff>(0);

        let producer_name = name.clone();
        let producer = thread::Builder::new()
            .name(format!("{}:{}", PRODUCER_THREAD_PREFIX, name))
            .spawn(move || {
                let mut emitter = Emitter::new(&producer_name, &input, sender, preferences);
                let outcome = states::run(&mut emitter);
                let metrics = emitter.into_metrics();
                log_scan_finished(&producer_name, &metrics, outcome.is_cancelled());
                metrics
            })?;

        log_debug!("Lexer started", "lexer" => &name);

        Ok(Self {
            name,
            receiver: Some(receiver),
            producer: Some(producer),
            last_pos: 0,
            finished: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the most recently returned token
    pub fn last_pos(&self) -> usize {
        self.last_pos
    }

    /// True once a terminal token was returned or the stream was cancelled
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Block until the producer hands over the next token.
    ///
    /// After a terminal token every call returns an `EndOfStream` token at
    /// the last position without blocking.
    pub fn next_token(&mut self) -> Token {
        match self.receive() {
            Some(Ok(token)) => token,
            Some(Err(failure)) => failure.to_token(),
            None => Token::end_of_stream(self.last_pos),
        }
    }

    /// Stop the scan. A producer blocked on a send wakes up and exits.
    pub fn cancel(&mut self) {
        self.finished = true;
        self.receiver = None;
    }

    /// Cancel if still running, join the producer and return its metrics
    pub fn finish(mut self) -> LexicalMetrics {
        self.cancel();
        self.join_producer().unwrap_or_default()
    }

    fn receive(&mut self) -> Option<Handoff> {
        if self.finished {
            return None;
        }

        let received = self.receiver.as_ref().and_then(|rx| rx.recv().ok());
        let item = match received {
            Some(item) => item,
            None => {
                log_error!(codes::lexical::PRODUCER_TERMINATED, "Token producer disconnected",
                    "lexer" => &self.name,
                    "last_pos" => self.last_pos
                );
                Err(ScanError::new(LexerError::ProducerTerminated, self.last_pos))
            }
        };

        let (pos, terminal) = match &item {
            Ok(token) => (token.pos, token.is_terminal()),
            Err(failure) => (failure.pos, true),
        };
        self.last_pos = pos;
        if terminal {
            self.finished = true;
            self.receiver = None;
        }

        Some(item)
    }

    fn join_producer(&mut self) -> Option<LexicalMetrics> {
        let handle = self.producer.take()?;
        match handle.join() {
            Ok(metrics) => Some(metrics),
            Err(_) => {
                log_error!(codes::system::INTERNAL_ERROR, "Lexer producer thread panicked",
                    "lexer" => &self.name
                );
                None
            }
        }
    }
}

/// Yields `Ok` for source tokens and at most one `Err`; ends after
/// `EndOfStream` or the failure.
impl Iterator for TokenStream {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.receive()? {
            Ok(token) if token.kind == TokenKind::EndOfStream => None,
            item => Some(item),
        }
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.cancel();
        self.join_producer();
    }
}

impl std::fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStream")
            .field("name", &self.name)
            .field("last_pos", &self.last_pos)
            .field("finished", &self.finished)
            .finish()
    }
}
