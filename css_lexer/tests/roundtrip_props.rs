//! Property checks over generated stylesheet-like input

use css_lexer::{tokenize_all, TokenKind};
use proptest::prelude::*;

/// Text without '/', so it never opens or breaks a comment
fn text_piece() -> impl Strategy<Value = String> {
    "[a-z0-9 {}:;.#\\n\\t*é]{0,12}"
}

/// Comment body that cannot contain the closing delimiter. A leading '/'
/// would close the comment early against the opener's '*'.
fn comment_piece() -> impl Strategy<Value = String> {
    "([a-z0-9 \\n][a-z0-9 \\n/]{0,9})?".prop_map(|body| format!("/*{}*/", body))
}

fn piece() -> impl Strategy<Value = String> {
    prop_oneof![text_piece(), comment_piece()]
}

proptest! {
    #[test]
    fn well_formed_input_round_trips(pieces in prop::collection::vec(piece(), 0..16)) {
        let input: String = pieces.concat();
        let output = tokenize_all("prop", &input);

        prop_assert!(output.is_success());
        prop_assert_eq!(output.reconstruct(), input);
    }

    #[test]
    fn exactly_one_terminal_token_at_the_end(input in "[a-z/* \\n]{0,40}") {
        let output = tokenize_all("prop", &input);
        let terminals = output.tokens.iter().filter(|t| t.is_terminal()).count();

        prop_assert_eq!(terminals, 1);
        prop_assert!(output.tokens.last().is_some_and(|t| t.is_terminal()));
    }

    #[test]
    fn no_empty_text_tokens(input in "[a-z/* ]{0,40}") {
        let output = tokenize_all("prop", &input);
        prop_assert!(output
            .tokens
            .iter()
            .all(|t| t.kind != TokenKind::Text || !t.value.is_empty()));
    }

    #[test]
    fn emitted_prefix_matches_input(input in "[a-z/* ]{0,40}") {
        let output = tokenize_all("prop", &input);
        let prefix = output.reconstruct();

        prop_assert!(input.starts_with(&prefix));
        if let Some(error) = &output.error {
            prop_assert_eq!(error.pos, prefix.len());
        }
    }
}
