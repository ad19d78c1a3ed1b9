//! Input shapes: how raw puzzle text decomposes into parsed values

use crate::error::ParseError;
use crate::parse::Parseable;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::ops::Deref;

/// A separator string chosen at the type level
pub trait Separator {
    const SEPARATOR: &'static str;
}

/// One element per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Newline;

/// Records separated by an empty line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlankLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comma;

impl Separator for Newline {
    const SEPARATOR: &'static str = "\n";
}

impl Separator for BlankLine {
    const SEPARATOR: &'static str = "\n\n";
}

impl Separator for Comma {
    const SEPARATOR: &'static str = ",";
}

/// A structured puzzle input built from raw text
pub trait SolverInput: Sized {
    fn decompose(input: &str) -> Result<Self, ParseError>;
}

/// Normalize CRLF line endings so separators match on any platform
fn normalize(input: &str) -> Cow<'_, str> {
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(input)
    }
}

/// The whole input parsed as one value
///
/// Trailing whitespace after the value is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single<T>(pub T);

impl<T> Single<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Single<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Parseable> SolverInput for Single<T> {
    fn decompose(input: &str) -> Result<Self, ParseError> {
        let input = normalize(input);
        T::parse_str(input.trim_end()).map(Single)
    }
}

/// Many same-shaped elements split on `S`
///
/// Fragments that are empty or whitespace-only are dropped, element order is kept and the
/// first failing element aborts the whole decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elements<T, S = Newline> {
    items: Vec<T>,
    _separator: PhantomData<S>,
}

impl<T, S> Elements<T, S> {
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T, S> From<Vec<T>> for Elements<T, S> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            _separator: PhantomData,
        }
    }
}

impl<T, S> Deref for Elements<T, S> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Parseable, S: Separator> SolverInput for Elements<T, S> {
    fn decompose(input: &str) -> Result<Self, ParseError> {
        split_elements::<T>(&normalize(input), S::SEPARATOR).map(Self::from)
    }
}

fn split_elements<T: Parseable>(input: &str, separator: &str) -> Result<Vec<T>, ParseError> {
    input
        .split(separator)
        .filter(|fragment| !fragment.trim().is_empty())
        .enumerate()
        .map(|(index, fragment)| {
            T::parse_str(fragment.trim_matches('\n')).map_err(|e| e.in_element(index))
        })
        .collect()
}

/// A header value, then elements
///
/// The input is split once on `HS`; the header fragment is parsed as one value and the
/// rest is decomposed like [`Elements`] on `ES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithHeader<H, T, HS = BlankLine, ES = Newline> {
    pub header: H,
    pub elements: Vec<T>,
    _separators: PhantomData<(HS, ES)>,
}

impl<H, T, HS, ES> WithHeader<H, T, HS, ES> {
    pub fn new(header: H, elements: Vec<T>) -> Self {
        Self {
            header,
            elements,
            _separators: PhantomData,
        }
    }

    pub fn into_parts(self) -> (H, Vec<T>) {
        (self.header, self.elements)
    }
}

impl<H, T, HS, ES> SolverInput for WithHeader<H, T, HS, ES>
where
    H: Parseable,
    T: Parseable,
    HS: Separator,
    ES: Separator,
{
    fn decompose(input: &str) -> Result<Self, ParseError> {
        let input = normalize(input);
        let (header, rest) = input.split_once(HS::SEPARATOR).ok_or_else(|| {
            ParseError::Malformed(format!("missing header separator {:?}", HS::SEPARATOR))
        })?;
        let header = H::parse_str(header)?;
        let elements = split_elements(rest, ES::SEPARATOR)?;
        Ok(Self::new(header, elements))
    }
}
