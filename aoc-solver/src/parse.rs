//! The parseable-value protocol and its base conformances

use crate::cursor::{Cursor, NEWLINES};
use crate::error::ParseError;
use std::fmt::Debug;

/// A type that can be read from a [`Cursor`] and rendered back to text
///
/// `render` is the left inverse of `parse_one`: parsing the rendered text yields an
/// equal value, though not necessarily the exact source text.
///
/// # Example
///
/// ```
/// use aoc_solver::{Cursor, ParseError, Parseable};
///
/// #[derive(Debug, PartialEq)]
/// struct Range {
///     low: u32,
///     high: u32,
/// }
///
/// impl Parseable for Range {
///     fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
///         let low = cursor.consume_integer()?;
///         cursor.expect_literal("-")?;
///         let high = cursor.consume_integer()?;
///         Ok(Range { low, high })
///     }
///
///     fn render(&self) -> String {
///         format!("{}-{}", self.low, self.high)
///     }
/// }
///
/// let range = Range::parse_str("3-7").unwrap();
/// assert_eq!(range, Range { low: 3, high: 7 });
/// assert_eq!(Range::parse_str(&range.render()).unwrap(), range);
/// ```
pub trait Parseable: Sized {
    /// Parse one value at the cursor, leaving the cursor just past it
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError>;

    /// Render the value back to parseable text
    fn render(&self) -> String;

    /// Parse a whole string as exactly one value
    fn parse_str(text: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(text);
        let value = Self::parse_one(&mut cursor)?;
        if cursor.is_at_end() {
            Ok(value)
        } else {
            Err(ParseError::unexpected("end of input", cursor.remaining()))
        }
    }
}

macro_rules! impl_parseable_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Parseable for $ty {
                fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
                    cursor.consume_integer()
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_parseable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Parseable for char {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        cursor.consume_char()
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// A non-empty line of text; the newline is left in the input
impl Parseable for String {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let line = cursor.consume_line();
        if line.is_empty() {
            return Err(ParseError::unexpected("a non-empty line", cursor.remaining()));
        }
        Ok(line.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

/// A value written as exactly one character that is never a line break
///
/// A row of glyphs needs no separator between its elements. `#[derive(RawValueEnum)]`
/// implements this for character-backed enums.
pub trait Glyph: Parseable {}

/// A row of glyphs up to the end of the line, rendered by concatenation
impl<T: Glyph> Parseable for Vec<T> {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        cursor.parse_all(&[], NEWLINES)
    }

    fn render(&self) -> String {
        self.iter().map(Parseable::render).collect()
    }
}

/// Render values one per line
pub fn render_lines<T: Parseable>(items: &[T]) -> String {
    items
        .iter()
        .map(Parseable::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The token shape backing a raw-value enum
pub trait RawToken: Sized + PartialEq + Debug {
    /// Scan one token of this shape
    fn scan(cursor: &mut Cursor<'_>) -> Result<Self, ParseError>;

    fn render_token(&self) -> String;
}

impl RawToken for char {
    fn scan(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        cursor.consume_char()
    }

    fn render_token(&self) -> String {
        self.to_string()
    }
}

/// Characters a raw word may contain: anything but whitespace, `,`, `:` and `;`
pub fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ',' | ':' | ';')
}

/// A word: the longest run of [`is_word_char`] characters
impl RawToken for String {
    fn scan(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let word = cursor.consume_while(is_word_char);
        if word.is_empty() {
            return Err(ParseError::unexpected("a word", cursor.remaining()));
        }
        Ok(word.to_string())
    }

    fn render_token(&self) -> String {
        self.clone()
    }
}

impl RawToken for i64 {
    fn scan(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        cursor.consume_integer()
    }

    fn render_token(&self) -> String {
        self.to_string()
    }
}

/// An enum-like type whose cases map one-to-one onto raw tokens
///
/// Usually derived with `#[derive(RawValueEnum)]`.
pub trait RawValue: Sized {
    type Raw: RawToken;

    fn raw_value(&self) -> Self::Raw;

    /// The case for `raw`, if it is one of the legal values
    fn from_raw_value(raw: &Self::Raw) -> Option<Self>;
}

/// Scan a raw token and decode it as `T`
///
/// A token of the right shape that names no case is a domain error, distinct from the
/// token-shape error of the scan itself. The cursor is left unchanged on failure.
pub fn parse_raw_value<T: RawValue>(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
    let checkpoint = cursor.checkpoint();
    let raw = T::Raw::scan(cursor)?;
    match T::from_raw_value(&raw) {
        Some(value) => Ok(value),
        None => {
            cursor.rewind(checkpoint);
            Err(ParseError::invalid_value(short_type_name::<T>(), raw.render_token()))
        }
    }
}

pub fn render_raw_value<T: RawValue>(value: &T) -> String {
    value.raw_value().render_token()
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
