use aoc_solver::{Comma, Cursor, DaySolver, Newline, ParseError, Parseable, SolveError, WithHeader};
use aoc_solver_macros::AutoRegisterSolver;

use crate::utils::seq::lcm;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 13, tags = ["header", "number-theory"])]
pub struct Solver {
    earliest: u64,
    buses: Vec<Bus>,
}

/// One schedule slot: a bus id, or `x` when no bus runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Id(u64),
    OutOfService,
}

impl Parseable for Bus {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let checkpoint = cursor.checkpoint();
        match cursor.consume_integer::<u64>() {
            Ok(0) => {
                cursor.rewind(checkpoint);
                Err(ParseError::invalid_value("bus id", "0"))
            }
            Ok(id) => Ok(Bus::Id(id)),
            Err(err) => {
                cursor.rewind(checkpoint);
                if cursor.consume_literal("x") {
                    Ok(Bus::OutOfService)
                } else {
                    Err(err)
                }
            }
        }
    }

    fn render(&self) -> String {
        match self {
            Bus::Id(id) => id.to_string(),
            Bus::OutOfService => "x".to_string(),
        }
    }
}

impl Solver {
    /// `(offset, id)` of every running bus
    fn running(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        (0u64..).zip(&self.buses).filter_map(|(offset, bus)| match bus {
            Bus::Id(id) => Some((offset, *id)),
            Bus::OutOfService => None,
        })
    }
}

impl DaySolver for Solver {
    type Input = WithHeader<u64, Bus, Newline, Comma>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        let (earliest, buses) = input.into_parts();
        Ok(Self { earliest, buses })
    }

    /// Id of the first bus to leave at or after the earliest time, times the wait
    fn solve_part1(&self) -> Result<String, SolveError> {
        self.running()
            .map(|(_, id)| (id, (id - self.earliest % id) % id))
            .min_by_key(|&(_, wait)| wait)
            .map(|(id, wait)| (id * wait).to_string())
            .ok_or_else(|| SolveError::NoSolution("no bus is running".to_string()))
    }

    /// Earliest time at which every bus departs at its own offset
    ///
    /// Buses are folded in one at a time: once a time fits the buses so far, stepping by
    /// the lcm of their ids keeps it fitting.
    fn solve_part2(&self) -> Result<String, SolveError> {
        let (time, _) = self.running().fold((0u64, 1u64), |(mut time, step), (offset, id)| {
            while (time + offset) % id != 0 {
                time += step;
            }
            (time, lcm(step, id))
        });
        Ok(time.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{ParseErrorKind, SolverInput};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_bus_round_trip(bus in prop_oneof![
            (1u64..=u64::MAX).prop_map(Bus::Id),
            Just(Bus::OutOfService),
        ]) {
            prop_assert_eq!(Bus::parse_str(&bus.render()).unwrap(), bus);
        }
    }

    const SAMPLE: &str = "939\n7,13,x,x,59,x,31,19\n";

    #[test]
    fn test_schedule_shape() {
        let input = WithHeader::<u64, Bus, Newline, Comma>::decompose(SAMPLE).unwrap();
        assert_eq!(input.header, 939);
        assert_eq!(input.elements.len(), 8);
        assert_eq!(input.elements[2], Bus::OutOfService);
        assert_eq!(input.elements[7], Bus::Id(19));
        assert_eq!(input.elements[7].render(), "19");
    }

    #[test]
    fn test_bad_slot() {
        let err = Solver::from_input("939\n7,y,13\n").err().unwrap();
        assert_eq!(err.kind(), ParseErrorKind::TokenShape);
        assert!(matches!(err, ParseError::Element { index: 1, .. }));

        let err = Solver::from_input("939\n7,0\n").err().unwrap();
        assert_eq!(err.kind(), ParseErrorKind::Domain);
    }

    #[test]
    fn test_missing_header() {
        let err = Solver::from_input("939").err().unwrap();
        assert_eq!(err.kind(), ParseErrorKind::Structure);
    }

    #[test]
    fn test_part1() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part1().unwrap(), "295");
    }

    #[test]
    fn test_part2() {
        for (schedule, expected) in [
            ("7,13,x,x,59,x,31,19", "1068781"),
            ("17,x,13,19", "3417"),
            ("67,7,59,61", "754018"),
            ("67,x,7,59,61", "779210"),
            ("1789,37,47,1889", "1202161486"),
        ] {
            let solver = Solver::from_input(&format!("0\n{schedule}\n")).unwrap();
            assert_eq!(solver.solve_part2().unwrap(), expected, "{schedule}");
        }
    }
}
