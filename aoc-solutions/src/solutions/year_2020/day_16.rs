use aoc_solver::{Cursor, DaySolver, NEWLINES, ParseError, Parseable, Single, SolveError};
use aoc_solver_macros::AutoRegisterSolver;
use std::ops::RangeInclusive;

use crate::utils::matrix::Matrix2;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 16, tags = ["single", "deduction"])]
pub struct Solver {
    notes: Notes,
}

/// `departure location: 25-80 or 90-961`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: String,
    pub ranges: Vec<RangeInclusive<u64>>,
}

/// Field rules, your ticket and nearby tickets, each block separated by a blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    pub rules: Vec<FieldRule>,
    pub your_ticket: Vec<u64>,
    pub nearby_tickets: Vec<Vec<u64>>,
}

fn value_range(cursor: &mut Cursor<'_>) -> Result<RangeInclusive<u64>, ParseError> {
    let low = cursor.consume_integer::<u64>()?;
    cursor.expect_literal("-")?;
    let high = cursor.consume_integer::<u64>()?;
    if high < low {
        return Err(ParseError::invalid_value("range", format!("{low}-{high}")));
    }
    Ok(low..=high)
}

fn ticket(cursor: &mut Cursor<'_>) -> Result<Vec<u64>, ParseError> {
    cursor.parse_all(&[","], NEWLINES)
}

fn render_ticket(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl FieldRule {
    pub fn matches(&self, value: u64) -> bool {
        self.ranges.iter().any(|range| range.contains(&value))
    }
}

impl Parseable for FieldRule {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let name = cursor.consume_up_to(": ")?.to_string();
        cursor.expect_literal(": ")?;
        let ranges = cursor.parse_all_with(value_range, &[" or "], NEWLINES)?;
        if ranges.is_empty() {
            return Err(ParseError::unexpected("a value range", cursor.remaining()));
        }
        Ok(Self { name, ranges })
    }

    fn render(&self) -> String {
        let ranges = self
            .ranges
            .iter()
            .map(|range| format!("{}-{}", range.start(), range.end()))
            .collect::<Vec<_>>();
        format!("{}: {}", self.name, ranges.join(" or "))
    }
}

impl Parseable for Notes {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let rules = cursor.parse_all(&["\n"], &['\n'])?;
        cursor.expect_literal("\nyour ticket:\n")?;
        let your_ticket = ticket(cursor)?;
        cursor.expect_literal("\n\nnearby tickets:\n")?;
        let nearby_tickets = cursor.parse_all_with(ticket, &["\n"], &[])?;

        if let Some(index) = nearby_tickets
            .iter()
            .position(|t| t.len() != your_ticket.len())
        {
            return Err(ParseError::Malformed(format!(
                "nearby ticket {index} has {} fields, expected {}",
                nearby_tickets[index].len(),
                your_ticket.len()
            )));
        }
        Ok(Self {
            rules,
            your_ticket,
            nearby_tickets,
        })
    }

    fn render(&self) -> String {
        let rules = self
            .rules
            .iter()
            .map(Parseable::render)
            .collect::<Vec<_>>()
            .join("\n");
        let nearby = self
            .nearby_tickets
            .iter()
            .map(|t| render_ticket(t))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{rules}\n\nyour ticket:\n{}\n\nnearby tickets:\n{nearby}",
            render_ticket(&self.your_ticket)
        )
    }
}

impl Solver {
    fn matches_any_rule(&self, value: u64) -> bool {
        self.notes.rules.iter().any(|rule| rule.matches(value))
    }

    /// Rule names in ticket field order
    ///
    /// Columns of the valid nearby tickets narrow down the candidate rules per field; a
    /// field left with one candidate claims it and removes it from every other field.
    pub fn deduced_fields(&self) -> Result<Vec<&str>, SolveError> {
        let valid: Vec<Vec<u64>> = self
            .notes
            .nearby_tickets
            .iter()
            .filter(|t| t.iter().all(|&value| self.matches_any_rule(value)))
            .cloned()
            .collect();
        let grid = Matrix2::from_rows(valid)
            .map_err(|err| SolveError::NoSolution(format!("no valid nearby tickets: {err}")))?;

        let mut candidates: Vec<Vec<usize>> = grid
            .columns()
            .map(|column| {
                let column: Vec<u64> = column.copied().collect();
                (0..self.notes.rules.len())
                    .filter(|&rule| column.iter().all(|&v| self.notes.rules[rule].matches(v)))
                    .collect()
            })
            .collect();

        let mut picked: Vec<Option<usize>> = vec![None; candidates.len()];
        while picked.iter().any(Option::is_none) {
            let field = candidates
                .iter()
                .position(|rules| rules.len() == 1)
                .ok_or_else(|| SolveError::NoSolution("fields are ambiguous".to_string()))?;
            let rule = candidates[field][0];
            picked[field] = Some(rule);
            for rules in &mut candidates {
                rules.retain(|&r| r != rule);
            }
        }

        Ok(picked
            .into_iter()
            .flatten()
            .map(|rule| self.notes.rules[rule].name.as_str())
            .collect())
    }
}

impl DaySolver for Solver {
    type Input = Single<Notes>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Self {
            notes: input.into_inner(),
        })
    }

    /// Sum of nearby ticket values that match no rule at all
    fn solve_part1(&self) -> Result<String, SolveError> {
        let error_rate: u64 = self
            .notes
            .nearby_tickets
            .iter()
            .flatten()
            .filter(|&&value| !self.matches_any_rule(value))
            .sum();
        Ok(error_rate.to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        let fields = self.deduced_fields()?;
        let product: u64 = fields
            .iter()
            .zip(&self.notes.your_ticket)
            .filter(|(name, _)| name.starts_with("departure"))
            .map(|(_, &value)| value)
            .product();
        Ok(product.to_string())
    }
}
