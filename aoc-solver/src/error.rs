//! Error types for the solver library

use thiserror::Error;

/// Maximum number of characters of remaining input kept in an error message
const SNIPPET_LEN: usize = 32;

/// Error type for parsing input data
///
/// Every variant is fatal to the parse that produced it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The next input does not have the shape the primitive expects
    #[error("Expected {expected}, found {found:?}")]
    UnexpectedToken {
        /// Description of the expected token
        expected: String,
        /// Snippet of the remaining input at the failure point
        found: String,
    },
    /// The token has a valid shape but does not decode to a legal value
    #[error("{value:?} is not a valid {target}")]
    InvalidValue {
        /// Name of the type (or field) being decoded
        target: String,
        /// The offending raw token
        value: String,
    },
    /// Aggregate structure is violated (missing separators, bad dimensions, ...)
    #[error("Malformed input: {0}")]
    Malformed(String),
    /// An element of a list failed to parse
    #[error("Element {index}: {source}")]
    Element {
        /// Zero-based position of the element in its list
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// Coarse classification of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Token-shape mismatch
    TokenShape,
    /// Value-range or domain violation
    Domain,
    /// Structural or arity violation
    Structure,
}

impl ParseError {
    /// Build an [`UnexpectedToken`](ParseError::UnexpectedToken) from the remaining input
    pub fn unexpected(expected: impl Into<String>, remaining: &str) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: snippet(remaining),
        }
    }

    /// Build an [`InvalidValue`](ParseError::InvalidValue) for the given target
    pub fn invalid_value(target: impl Into<String>, value: impl Into<String>) -> Self {
        ParseError::InvalidValue {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Wrap this error as the failure of the element at `index`
    pub fn in_element(self, index: usize) -> Self {
        ParseError::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Classify this error, looking through element wrappers
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnexpectedToken { .. } => ParseErrorKind::TokenShape,
            ParseError::InvalidValue { .. } => ParseErrorKind::Domain,
            ParseError::Malformed(_) => ParseErrorKind::Structure,
            ParseError::Element { source, .. } => source.kind(),
        }
    }
}

/// Truncate remaining input for diagnostics
fn snippet(remaining: &str) -> String {
    match remaining.char_indices().nth(SNIPPET_LEN) {
        Some((end, _)) => format!("{}...", &remaining[..end]),
        None => remaining.to_string(),
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is out of range (only parts 1 and 2 exist)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle input admits no answer
    #[error("No solution: {0}")]
    NoSolution(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
}
