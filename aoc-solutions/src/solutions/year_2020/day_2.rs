use aoc_solver::{Cursor, DaySolver, Elements, ParseError, Parseable, SolveError};
use aoc_solver_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 2, tags = ["cursor"])]
pub struct Solver {
    entries: Vec<PasswordEntry>,
}

/// `low-high letter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub low: usize,
    pub high: usize,
    pub letter: char,
}

/// One database line, `1-3 a: abcde`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    pub policy: Policy,
    pub password: String,
}

impl Parseable for Policy {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let low = cursor.consume_integer::<usize>()?;
        cursor.expect_literal("-")?;
        let high = cursor.consume_integer::<usize>()?;
        if high < low {
            return Err(ParseError::invalid_value(
                "password policy",
                format!("{low}-{high}"),
            ));
        }
        cursor.expect_literal(" ")?;
        let letter = cursor.consume_char()?;
        Ok(Self { low, high, letter })
    }

    fn render(&self) -> String {
        format!("{}-{} {}", self.low, self.high, self.letter)
    }
}

impl Parseable for PasswordEntry {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let policy = cursor.parse::<Policy>()?;
        cursor.expect_literal(": ")?;
        let password = cursor.consume_line();
        if password.is_empty() {
            return Err(ParseError::unexpected("password", cursor.remaining()));
        }
        Ok(Self {
            policy,
            password: password.to_string(),
        })
    }

    fn render(&self) -> String {
        format!("{}: {}", self.policy.render(), self.password)
    }
}

impl PasswordEntry {
    /// The letter occurs between `low` and `high` times
    fn is_valid_by_count(&self) -> bool {
        let Policy { low, high, letter } = self.policy;
        let count = self.password.chars().filter(|&c| c == letter).count();
        (low..=high).contains(&count)
    }

    /// Exactly one of the 1-based positions `low` and `high` holds the letter
    fn is_valid_by_position(&self) -> bool {
        let Policy { low, high, letter } = self.policy;
        let holds_letter = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|index| self.password.chars().nth(index))
                == Some(letter)
        };
        holds_letter(low) != holds_letter(high)
    }
}

impl DaySolver for Solver {
    type Input = Elements<PasswordEntry>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Self {
            entries: input.into_inner(),
        })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        let valid = self.entries.iter().filter(|e| e.is_valid_by_count()).count();
        Ok(valid.to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        let valid = self
            .entries
            .iter()
            .filter(|e| e.is_valid_by_position())
            .count();
        Ok(valid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::ParseErrorKind;
    use proptest::prelude::*;

    const SAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

    #[test]
    fn test_parse_entry() {
        let entry = PasswordEntry::parse_str("1-3 a: abcde").unwrap();
        assert_eq!(
            entry.policy,
            Policy {
                low: 1,
                high: 3,
                letter: 'a'
            }
        );
        assert_eq!(entry.password, "abcde");
        assert_eq!(entry.render(), "1-3 a: abcde");
    }

    #[test]
    fn test_bounds_out_of_order() {
        let err = PasswordEntry::parse_str("3-1 a: abcde").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Domain);
    }

    #[test]
    fn test_missing_colon() {
        let err = PasswordEntry::parse_str("1-3 a abcde").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::TokenShape);
    }

    proptest! {
        #[test]
        fn prop_entry_round_trip(
            low in 0usize..50,
            extra in 0usize..50,
            letter in proptest::char::range('!', '~'),
            password in "[a-zA-Z0-9 #:-]{1,20}",
        ) {
            let entry = PasswordEntry {
                policy: Policy { low, high: low + extra, letter },
                password,
            };
            prop_assert_eq!(PasswordEntry::parse_str(&entry.render()).unwrap(), entry);
        }
    }

    #[test]
    fn test_part1() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part1().unwrap(), "2");
    }

    #[test]
    fn test_part2() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part2().unwrap(), "1");
    }
}
