//! `#[derive(AutoRegisterSolver)]` submits plugins the registry can collect

use aoc_solver::{
    AutoRegisterSolver, DaySolver, Elements, ParseError, RegistryBuilder, SolveError, Single,
};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2016, day = 3, tags = ["sum", "test"])]
struct Summer(Vec<u32>);

impl DaySolver for Summer {
    type Input = Elements<u32>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Summer(input.into_inner()))
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        Ok(self.0.iter().sum::<u32>().to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        Ok(self.0.len().to_string())
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2016, day = 4)]
struct Doubler(i64);

impl DaySolver for Doubler {
    type Input = Single<i64>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Doubler(input.into_inner()))
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        Ok((self.0 * 2).to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        Err(SolveError::NoSolution("nothing to do".to_string()))
    }
}

#[test]
fn test_plugins_are_collected() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    assert!(registry.contains(2016, 3));
    assert!(registry.contains(2016, 4));

    let solver = registry.create_solver(2016, 3, "1\n2\n3\n").unwrap();
    assert_eq!(solver.year(), 2016);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "3");
}

#[test]
fn test_tags_are_recorded() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let info = registry
        .iter_info()
        .find(|info| (info.year, info.day) == (2016, 3))
        .unwrap();
    assert_eq!(info.tags, &["sum", "test"]);

    let untagged = registry
        .iter_info()
        .find(|info| (info.year, info.day) == (2016, 4))
        .unwrap();
    assert!(untagged.tags.is_empty());
}

#[test]
fn test_filtered_registration() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"sum"))
        .unwrap()
        .build();
    assert!(registry.contains(2016, 3));
    assert!(!registry.contains(2016, 4));
}

#[test]
fn test_solve_errors_surface() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let solver = registry.create_solver(2016, 4, "21").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "42");
    assert!(matches!(solver.solve(2), Err(SolveError::NoSolution(_))));
}

#[test]
fn test_registering_plugins_twice_is_a_duplicate() {
    let result = RegistryBuilder::new()
        .register::<Summer>(2016, 3)
        .unwrap()
        .register_all_plugins();
    assert!(result.is_err());
}
