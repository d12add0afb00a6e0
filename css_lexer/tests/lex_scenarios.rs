//! End-to-end scans through the threaded token stream

use css_lexer::{lex, tokenize_all, LexerError, ScanError, Token, TokenKind, TokenStream};

#[derive(Debug, Default)]
struct Collected {
    texts: Vec<String>,
    comments: Vec<String>,
    errors: Vec<String>,
    terminal: Option<TokenKind>,
}

fn collect(name: &str, input: &str) -> Collected {
    let mut stream = lex(name, input).unwrap();
    let mut collected = Collected::default();

    loop {
        let token = stream.next_token();
        match token.kind {
            TokenKind::Text => collected.texts.push(token.value),
            TokenKind::Comment => collected.comments.push(token.value),
            TokenKind::Error => collected.errors.push(token.value),
            TokenKind::Space => panic!("space tokens are never produced"),
            TokenKind::EndOfStream => {}
        }
        if token.kind.is_terminal() {
            collected.terminal = Some(token.kind);
            break;
        }
    }

    collected
}

#[test]
fn well_formed_comments_and_text() {
    let input = "test\n\t/*** test1 ***/\n\ttest2\n\t/*** test2 **//*test3 */\n\t  test3\n\t";
    let collected = collect("LexCommentsTest", input);

    assert_eq!(
        collected.comments,
        vec!["/*** test1 ***/", "/*** test2 **/", "/*test3 */"]
    );
    assert_eq!(
        collected.texts,
        vec!["test\n\t", "\n\ttest2\n\t", "\n\t  test3\n\t"]
    );
    assert!(collected.errors.is_empty());
    assert_eq!(collected.terminal, Some(TokenKind::EndOfStream));
}

#[test]
fn unclosed_comment_stops_the_scan() {
    let input = "test\n\t\t\t/*** test1 ***/\n\t\t\ttest2\n\t\t\t/*** test2 **//*test3 *\n\t\t\t  test3\n\t\t\t";
    let collected = collect("unclosed", input);

    assert_eq!(collected.comments, vec!["/*** test1 ***/", "/*** test2 **/"]);
    assert_eq!(collected.texts, vec!["test\n\t\t\t", "\n\t\t\ttest2\n\t\t\t"]);
    assert_eq!(collected.errors, vec!["unclosed comment"]);
    assert_eq!(collected.terminal, Some(TokenKind::Error));
}

#[test]
fn lone_slash_is_an_invalid_comment() {
    let input = "test\n\t\t\t/*** test1 ***/\n\t\t\ttest2\n\t\t\t/*** test2 **//test3 *\n\t\t\t  test3\n\t\t\t";
    let collected = collect("invalid", input);

    assert_eq!(collected.comments, vec!["/*** test1 ***/", "/*** test2 **/"]);
    assert_eq!(collected.texts, vec!["test\n\t\t\t", "\n\t\t\ttest2\n\t\t\t"]);
    assert_eq!(collected.errors, vec!["invalid comment"]);
}

#[test]
fn empty_input_is_only_end_of_stream() {
    let mut stream = lex("empty", "").unwrap();
    assert_eq!(stream.next_token(), Token::end_of_stream(0));
    assert_eq!(stream.next_token(), Token::end_of_stream(0));
}

#[test]
fn single_comment_has_no_text_tokens() {
    let collected = collect("single", "/*x*/");
    assert_eq!(collected.comments, vec!["/*x*/"]);
    assert!(collected.texts.is_empty());
    assert_eq!(collected.terminal, Some(TokenKind::EndOfStream));
}

#[test]
fn adjacent_comments_have_nothing_between_them() {
    let collected = collect("adjacent", "/*a*//*b*/");
    assert_eq!(collected.comments, vec!["/*a*/", "/*b*/"]);
    assert!(collected.texts.is_empty());
}

#[test]
fn overlapping_delimiters_form_a_comment() {
    let collected = collect("overlap", "a/*/ b");
    assert_eq!(collected.comments, vec!["/*/"]);
    assert_eq!(collected.texts, vec!["a", " b"]);
    assert!(collected.errors.is_empty());
    assert_eq!(collected.terminal, Some(TokenKind::EndOfStream));
}

#[test]
fn error_position_points_at_the_slash() {
    let mut stream = lex("position", "a { b: c } / d").unwrap();
    assert_eq!(stream.next_token(), Token::new(TokenKind::Text, 0, "a { b: c } "));
    assert_eq!(stream.next_token(), Token::new(TokenKind::Error, 11, "invalid comment"));
    assert_eq!(stream.last_pos(), 11);
}

#[test]
fn threaded_and_synchronous_scans_agree() {
    let inputs = [
        "",
        "plain",
        "/* only */",
        "a/*b*/c/*d*/",
        "x/*unterminated",
        "p / q",
        "/*/",
        "ünï/*cödé*/",
    ];

    for input in inputs {
        let mut stream = TokenStream::new("threaded", input).unwrap();
        let mut threaded = Vec::new();
        loop {
            let token = stream.next_token();
            let terminal = token.is_terminal();
            threaded.push(token);
            if terminal {
                break;
            }
        }

        assert_eq!(threaded, tokenize_all("sync", input).tokens, "input {:?}", input);
    }
}

#[test]
fn iterator_surfaces_the_failure() {
    let result: Result<Vec<Token>, ScanError> = lex("iter", "a/*b*/ / c").unwrap().collect();
    assert_eq!(result, Err(ScanError::new(LexerError::InvalidComment, 7)));
}

#[test]
fn abandoning_many_streams_does_not_leak_blocked_producers() {
    let input = "/* c */ text ".repeat(500);
    for i in 0..32 {
        let mut stream = lex(format!("abandoned-{}", i), input.as_str()).unwrap();
        stream.next_token();
    }
}
