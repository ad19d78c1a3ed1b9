//! Position-tracking scanner over puzzle input

use crate::error::ParseError;
use crate::parse::Parseable;
use std::str::FromStr;

/// Characters that end an element list when no other stop set is given
pub const NEWLINES: &[char] = &['\n', '\r'];

/// A forward-only scanner over borrowed input text
///
/// The position is a byte offset that always sits on a char boundary. Nothing is skipped
/// implicitly: every separator, including whitespace, has to be consumed by the caller.
/// Failed primitives leave the position where it was.
///
/// # Example
///
/// ```
/// use aoc_solver::Cursor;
///
/// let mut cursor = Cursor::new("42,7");
/// assert_eq!(cursor.consume_integer::<i32>().unwrap(), 42);
/// assert_eq!(cursor.remaining(), ",7");
/// assert!(cursor.consume_literal(","));
/// assert_eq!(cursor.consume_integer::<i32>().unwrap(), 7);
/// assert!(cursor.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

/// A saved cursor position, restored with [`Cursor::rewind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// The full input this cursor scans
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the next unconsumed character
    pub fn position(&self) -> usize {
        self.position
    }

    /// Text from the current position to the end
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Snapshot the position for caller-side alternation
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    /// Restore a position taken earlier from this cursor
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0.min(self.input.len());
    }

    fn advance(&mut self, bytes: usize) -> &'a str {
        let start = self.position;
        self.position += bytes;
        &self.input[start..self.position]
    }

    /// Consume `literal` if the remaining text starts with it
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        if self.starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    /// Like [`consume_literal`](Self::consume_literal), but a mismatch is an error
    pub fn expect_literal(&mut self, literal: &str) -> Result<(), ParseError> {
        if self.consume_literal(literal) {
            Ok(())
        } else {
            Err(ParseError::unexpected(format!("{literal:?}"), self.remaining()))
        }
    }

    /// Consume all text strictly before the first occurrence of `delimiter`
    ///
    /// The delimiter itself stays in the input. Fails without advancing if the delimiter
    /// never occurs.
    pub fn consume_up_to(&mut self, delimiter: &str) -> Result<&'a str, ParseError> {
        match self.remaining().find(delimiter) {
            Some(offset) => Ok(self.advance(offset)),
            None => Err(ParseError::unexpected(
                format!("text followed by {delimiter:?}"),
                self.remaining(),
            )),
        }
    }

    /// Consume text up to the next newline or the end of input, newline excluded
    pub fn consume_line(&mut self) -> &'a str {
        let offset = self.remaining().find('\n').unwrap_or(self.remaining().len());
        self.advance(offset)
    }

    /// Consume the longest prefix whose characters all satisfy `predicate`
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let offset = self
            .remaining()
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(self.remaining().len(), |(i, _)| i);
        self.advance(offset)
    }

    /// Consume an optional sign followed by a maximal run of decimal digits
    ///
    /// A missing digit run is a token-shape error. A well-formed token that does not fit in
    /// `T` (overflow, or a sign on an unsigned type) is a domain error. Either way the
    /// position is unchanged.
    pub fn consume_integer<T: FromStr>(&mut self) -> Result<T, ParseError> {
        let remaining = self.remaining();
        let bytes = remaining.as_bytes();
        let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Err(ParseError::unexpected("integer", remaining));
        }

        let token = &remaining[..sign + digits];
        let value = token
            .parse::<T>()
            .map_err(|_| ParseError::invalid_value(std::any::type_name::<T>(), token))?;
        self.advance(token.len());
        Ok(value)
    }

    /// Consume a single character; fails only at the end of input
    pub fn consume_char(&mut self) -> Result<char, ParseError> {
        let c = self
            .peek()
            .ok_or_else(|| ParseError::unexpected("a character", ""))?;
        self.advance(c.len_utf8());
        Ok(c)
    }

    /// Consume exactly `width` hexadecimal digits
    pub fn consume_fixed_width_hex(&mut self, width: usize) -> Result<u64, ParseError> {
        let remaining = self.remaining();
        let end = match remaining.char_indices().nth(width) {
            Some((end, _)) => end,
            None if remaining.chars().count() == width => remaining.len(),
            None => {
                return Err(ParseError::unexpected(
                    format!("{width} hex digits"),
                    remaining,
                ));
            }
        };

        let token = &remaining[..end];
        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::unexpected(
                format!("{width} hex digits"),
                remaining,
            ));
        }
        let value = if token.is_empty() {
            0
        } else {
            u64::from_str_radix(token, 16)
                .map_err(|_| ParseError::invalid_value("u64", token))?
        };
        self.advance(end);
        Ok(value)
    }

    /// Parse one value of `T` at the current position
    pub fn parse<T: Parseable>(&mut self) -> Result<T, ParseError> {
        T::parse_one(self)
    }

    /// Parse `T` values until the next character is in `stop_at` or input runs out
    ///
    /// After each element the first separator that matches is consumed, so a trailing
    /// separator is optional.
    pub fn parse_all<T: Parseable>(
        &mut self,
        separators: &[&str],
        stop_at: &[char],
    ) -> Result<Vec<T>, ParseError> {
        self.parse_all_with(T::parse_one, separators, stop_at)
    }

    /// [`parse_all`](Self::parse_all) with the element parser given as a function
    pub fn parse_all_with<T, F>(
        &mut self,
        mut element: F,
        separators: &[&str],
        stop_at: &[char],
    ) -> Result<Vec<T>, ParseError>
    where
        F: FnMut(&mut Self) -> Result<T, ParseError>,
    {
        let mut items = Vec::new();
        while let Some(next) = self.peek() {
            if stop_at.contains(&next) {
                break;
            }

            let start = self.position;
            let item = element(self).map_err(|e| e.in_element(items.len()))?;
            if let Some(separator) = separators
                .iter()
                .find(|s| !s.is_empty() && self.starts_with(s))
            {
                self.advance(separator.len());
            }
            if self.position == start {
                return Err(ParseError::Malformed(format!(
                    "element {} consumed no input",
                    items.len()
                )));
            }
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_integer_then_literal() {
        let mut cursor = Cursor::new("42,7");
        assert_eq!(cursor.consume_integer::<i64>().unwrap(), 42);
        assert_eq!(cursor.remaining(), ",7");
        assert!(cursor.consume_literal(","));
        assert_eq!(cursor.consume_integer::<i64>().unwrap(), 7);
        assert_eq!(cursor.remaining(), "");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_integer_signs() {
        let mut cursor = Cursor::new("-12+5");
        assert_eq!(cursor.consume_integer::<i32>().unwrap(), -12);
        assert_eq!(cursor.consume_integer::<i32>().unwrap(), 5);
    }

    #[test]
    fn test_integer_failure_does_not_advance() {
        let mut cursor = Cursor::new("-x");
        let err = cursor.consume_integer::<i32>().unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::TokenShape);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_integer_overflow_is_domain_error() {
        let mut cursor = Cursor::new("300");
        let err = cursor.consume_integer::<u8>().unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Domain);
        assert_eq!(cursor.position(), 0);

        let err = Cursor::new("-3").consume_integer::<u32>().unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Domain);
    }

    #[test]
    fn test_literal_mismatch_does_not_advance() {
        let mut cursor = Cursor::new("abc");
        assert!(!cursor.consume_literal("abd"));
        assert_eq!(cursor.position(), 0);
        assert!(cursor.expect_literal("x").is_err());
        assert!(cursor.consume_literal("ab"));
        assert_eq!(cursor.remaining(), "c");
    }

    #[test]
    fn test_consume_up_to_keeps_delimiter() {
        let mut cursor = Cursor::new("light red bags contain");
        assert_eq!(cursor.consume_up_to(" bags").unwrap(), "light red");
        assert_eq!(cursor.remaining(), " bags contain");
        assert!(cursor.consume_up_to("!").is_err());
        assert_eq!(cursor.remaining(), " bags contain");
    }

    #[test]
    fn test_consume_char_and_line() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!(cursor.consume_char().unwrap(), 'a');
        assert_eq!(cursor.consume_line(), "b");
        assert_eq!(cursor.peek(), Some('\n'));
        cursor.consume_char().unwrap();
        assert_eq!(cursor.consume_line(), "cd");
        assert!(cursor.consume_char().is_err());
    }

    #[test]
    fn test_consume_while() {
        let mut cursor = Cursor::new("aaab");
        assert_eq!(cursor.consume_while(|c| c == 'a'), "aaa");
        assert_eq!(cursor.consume_while(|c| c == 'a'), "");
        assert_eq!(cursor.remaining(), "b");
    }

    #[test]
    fn test_fixed_width_hex() {
        let mut cursor = Cursor::new("1aF0zz");
        assert_eq!(cursor.consume_fixed_width_hex(4).unwrap(), 0x1af0);
        assert!(cursor.consume_fixed_width_hex(2).is_err());
        assert_eq!(cursor.remaining(), "zz");
        assert!(Cursor::new("abc").consume_fixed_width_hex(4).is_err());
    }

    #[test]
    fn test_checkpoint_rewind() {
        let mut cursor = Cursor::new("x,12");
        let checkpoint = cursor.checkpoint();
        cursor.consume_literal("x,");
        cursor.rewind(checkpoint);
        assert_eq!(cursor.remaining(), "x,12");
    }

    #[test]
    fn test_parse_all_stops_at_newline() {
        let mut cursor = Cursor::new("1,2,3\n");
        let values: Vec<i32> = cursor.parse_all(&[","], NEWLINES).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(cursor.remaining(), "\n");
    }

    #[test]
    fn test_parse_all_reports_failing_element() {
        let mut cursor = Cursor::new("1,x");
        let err = cursor.parse_all::<i32>(&[","], NEWLINES).unwrap_err();
        assert!(matches!(err, ParseError::Element { index: 1, .. }));
        assert_eq!(err.kind(), ParseErrorKind::TokenShape);
    }

    #[test]
    fn test_parse_all_with_rejects_stalled_parser() {
        let mut cursor = Cursor::new("abc");
        let err = cursor
            .parse_all_with(|_| Ok(()), &[], NEWLINES)
            .unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Structure);
    }
}
