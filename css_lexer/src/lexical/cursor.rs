//! Byte-position cursor over the input, one UTF-8 character per step

/// Scan position plus the start of the token being built.
///
/// Holds `start <= pos <= input.len()`; both offsets always sit on char
/// boundaries. The width of the last step is kept only until it is used
/// by [`Cursor::backtrack`], so a step can be undone at most once.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
    last_width: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            last_width: None,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Offset where the in-progress token began
    pub fn start(&self) -> usize {
        self.start
    }

    /// Consume one character. At end of input returns `None` and records a
    /// zero-width step, so a following backtrack does not move.
    pub fn advance(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(ch) => {
                let width = ch.len_utf8();
                self.pos += width;
                self.last_width = Some(width);
                Some(ch)
            }
            None => {
                self.last_width = Some(0);
                None
            }
        }
    }

    /// Undo the most recent `advance`
    pub fn backtrack(&mut self) {
        debug_assert!(
            self.last_width.is_some(),
            "backtrack called twice without an intervening advance"
        );
        if let Some(width) = self.last_width.take() {
            self.pos -= width;
        }
    }

    pub fn can_backtrack(&self) -> bool {
        self.last_width.is_some()
    }

    pub fn peek(&mut self) -> Option<char> {
        let ch = self.advance();
        self.backtrack();
        ch
    }

    /// Drop the pending text: the next token starts here
    pub fn skip(&mut self) {
        self.start = self.pos;
    }

    /// Move forward `bytes` bytes, clamped to the end of input.
    /// Callers pass lengths of matched delimiters, so the target is a char
    /// boundary.
    pub fn jump(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.input.len());
        self.last_width = None;
    }

    /// Text between the token start and the current position
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_decodes_multibyte() {
        let mut cursor = Cursor::new("aé€");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.advance(), Some('€'));
        assert_eq!(cursor.pos(), 6);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), 6);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_backtrack_undoes_one_step() {
        let mut cursor = Cursor::new("é/");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pos(), 3);
        cursor.backtrack();
        assert_eq!(cursor.pos(), 2);
        assert!(!cursor.can_backtrack());
        assert_eq!(cursor.remaining(), "/");
    }

    #[test]
    fn test_backtrack_at_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert_eq!(cursor.advance(), None);
        cursor.backtrack();
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "backtrack called twice")]
    fn test_double_backtrack_is_a_logic_fault() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.backtrack();
        cursor.backtrack();
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new("xy");
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.advance(), Some('x'));
        assert_eq!(cursor.peek(), Some('y'));
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn test_pending_and_skip() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pending(), "ab");
        cursor.skip();
        assert!(!cursor.has_pending());
        cursor.advance();
        assert_eq!(cursor.pending(), "c");
    }

    #[test]
    fn test_jump_clamps_to_end() {
        let mut cursor = Cursor::new("/*x*/");
        cursor.jump(5);
        assert!(cursor.is_at_end());
        cursor.jump(3);
        assert_eq!(cursor.pos(), 5);
        assert_eq!(cursor.pending(), "/*x*/");
    }
}
