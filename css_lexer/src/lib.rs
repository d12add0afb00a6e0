//! Streaming tokenizer for stylesheet text
//!
//! The lexer splits input into `Text` and `Comment` tokens on a producer
//! thread and hands them to the caller one at a time:
//!
//! ```no_run
//! use css_lexer::{lex, TokenKind};
//!
//! let mut stream = lex("inline", "a { } /* note */").unwrap();
//! loop {
//!     let token = stream.next_token();
//!     if token.kind.is_terminal() {
//!         break;
//!     }
//!     println!("{}", token);
//! }
//! ```

pub mod config;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

pub use lexical::{tokenize_all, LexerError, LexicalMetrics, ScanError, TokenizeOutput};
pub use tokens::{lex, Token, TokenKind, TokenStream};
