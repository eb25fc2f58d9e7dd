//! Integration tests for the day-keyed registry and plugin collection

use puzzle_solver::{
    AutoRegister, DaySolver, InputParser, ParseError, PartSolver, RegisterableSolver,
    RegistrationError, RegistryBuilder, SolveError, SolverError,
};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 25, tags = ["test", "sum"])]
struct SumSolver;

impl InputParser for SumSolver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int: {l}")))
            })
            .collect()
    }
}

impl PartSolver<1> for SumSolver {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(parsed.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumSolver {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(parsed.iter().max().copied().unwrap_or(0).to_string())
    }
}

#[test]
fn manual_registration_and_solving() {
    let registry = SumSolver
        .register_with(RegistryBuilder::new(), 3)
        .unwrap()
        .build();

    assert!(registry.contains(3));
    assert_eq!(registry.len(), 1);

    let mut solver = registry.create_solver(3, "1\n2\n3").unwrap();
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "3");
}

#[test]
fn duplicate_registration_rejected() {
    let builder = SumSolver.register_with(RegistryBuilder::new(), 3).unwrap();
    let result = SumSolver.register_with(builder, 3);
    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(3))));
}

#[test]
fn out_of_range_day_rejected() {
    let result = SumSolver.register_with(RegistryBuilder::new(), 26);
    assert!(matches!(result, Err(RegistrationError::InvalidDay(26))));

    let result = SumSolver.register_with(RegistryBuilder::new(), 0);
    assert!(matches!(result, Err(RegistrationError::InvalidDay(0))));
}

#[test]
fn missing_day_reported() {
    let registry = RegistryBuilder::new().build();
    assert!(registry.is_empty());

    match registry.create_solver(5, "") {
        Err(SolverError::NotFound(5)) => {}
        other => panic!("expected NotFound(5), got {:?}", other.map(|_| ())),
    }
}

#[test]
fn parse_failure_surfaces_as_solver_error() {
    let registry = SumSolver
        .register_with(RegistryBuilder::new(), 3)
        .unwrap()
        .build();

    match registry.create_solver(3, "1\nnot-a-number") {
        Err(SolverError::ParseError(ParseError::InvalidFormat(msg))) => {
            assert!(msg.contains("not-a-number"));
        }
        other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn plugin_auto_registration() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    // SumSolver self-registered for day 25 via the derive
    let info = registry.get_info(25).expect("plugin should be registered");
    assert_eq!(info.parts, 2);

    let mut solver = registry.create_solver(25, "4\n5").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "9");
}

#[test]
fn plugin_tag_filtering() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(!registry.contains(25));

    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"sum"))
        .unwrap()
        .build();
    assert!(registry.contains(25));
}

#[test]
fn iter_info_in_day_order() {
    let builder = SumSolver.register_with(RegistryBuilder::new(), 7).unwrap();
    let registry = SumSolver.register_with(builder, 2).unwrap().build();

    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![2, 7]);
}
