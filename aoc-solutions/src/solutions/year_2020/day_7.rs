use aoc_solver::{Cursor, DaySolver, Elements, ParseError, Parseable, SolveError};
use aoc_solver_macros::AutoRegisterSolver;
use std::collections::HashMap;

use crate::utils::memo::Memoized;

const TARGET: &str = "shiny gold";

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 7, tags = ["graph", "memo"])]
pub struct Solver {
    colors: Vec<String>,
    /// Per color index, the `(count, color index)` pairs it directly contains
    contents: Vec<Vec<(u64, usize)>>,
}

/// `light red bags contain 1 bright white bag, 2 muted yellow bags.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub color: String,
    pub contents: Vec<(u64, String)>,
}

/// `<color> bag` or `<color> bags`
fn bag_color(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let color = cursor.consume_up_to(" bag")?;
    cursor.expect_literal(" bag")?;
    Ok(color.to_string())
}

fn bag_count(cursor: &mut Cursor<'_>) -> Result<(u64, String), ParseError> {
    let count = cursor.consume_integer::<u64>()?;
    cursor.expect_literal(" ")?;
    let color = bag_color(cursor)?;
    if count != 1 {
        cursor.expect_literal("s")?;
    }
    Ok((count, color))
}

fn render_bag_count((count, color): &(u64, String)) -> String {
    let plural = if *count == 1 { "" } else { "s" };
    format!("{count} {color} bag{plural}")
}

impl Parseable for Rule {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let color = bag_color(cursor)?;
        cursor.expect_literal("s contain ")?;
        if cursor.consume_literal("no other bags.") {
            return Ok(Self {
                color,
                contents: Vec::new(),
            });
        }
        let contents = cursor.parse_all_with(bag_count, &[", "], &['.'])?;
        cursor.expect_literal(".")?;
        Ok(Self { color, contents })
    }

    fn render(&self) -> String {
        let contents = if self.contents.is_empty() {
            "no other bags".to_string()
        } else {
            self.contents
                .iter()
                .map(render_bag_count)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} bags contain {contents}.", self.color)
    }
}

impl Solver {
    fn target(&self) -> Result<usize, SolveError> {
        self.colors
            .iter()
            .position(|color| color == TARGET)
            .ok_or_else(|| SolveError::NoSolution(format!("no rule mentions {TARGET}")))
    }
}

impl DaySolver for Solver {
    type Input = Elements<Rule>;

    /// Interns every color so the recursions below key their caches on indices
    fn new(input: Self::Input) -> Result<Self, ParseError> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut colors = Vec::new();
        let mut intern = |color: &str| {
            *index.entry(color.to_string()).or_insert_with(|| {
                colors.push(color.to_string());
                colors.len() - 1
            })
        };

        let mut rules = Vec::new();
        for rule in input.iter() {
            let outer = intern(rule.color.as_str());
            let inner = rule
                .contents
                .iter()
                .map(|(count, color)| (*count, intern(color.as_str())))
                .collect::<Vec<_>>();
            rules.push((outer, inner));
        }

        let mut contents: Vec<Option<Vec<(u64, usize)>>> = vec![None; colors.len()];
        for (outer, inner) in rules {
            if contents[outer].replace(inner).is_some() {
                return Err(ParseError::Malformed(format!(
                    "two rules for {} bags",
                    colors[outer]
                )));
            }
        }
        // Colors only ever seen inside other bags hold nothing
        let contents = contents.into_iter().map(Option::unwrap_or_default).collect();
        Ok(Self { colors, contents })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        let target = self.target()?;
        let holds_target = Memoized::recursive(|recurse: &dyn Fn(usize) -> bool, color: usize| {
            self.contents[color]
                .iter()
                .any(|&(_, inner)| inner == target || recurse(inner))
        });

        let count = (0..self.colors.len())
            .filter(|&color| holds_target.get(color))
            .count();
        Ok(count.to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        let target = self.target()?;
        let bags_inside = Memoized::recursive(|recurse: &dyn Fn(usize) -> u64, color: usize| {
            self.contents[color]
                .iter()
                .map(|&(count, inner)| count * (1 + recurse(inner)))
                .sum::<u64>()
        });
        Ok(bags_inside.get(target).to_string())
    }
}
