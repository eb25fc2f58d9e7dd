//! Day 1: fuel required to launch the modules

use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 1, tags = ["fuel"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(masses: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let total: i64 = masses.iter().map(|&m| fuel_for_mass(m)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(masses: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let total: i64 = masses.iter().map(|&m| fuel_for_mass_and_fuel(m)).sum();
        Ok(total.to_string())
    }
}

fn fuel_for_mass(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel also has mass; keep adding fuel until a step needs none
fn fuel_for_mass_and_fuel(mut mass: i64) -> i64 {
    let mut total = 0;
    while mass > 8 {
        mass = fuel_for_mass(mass);
        total += mass;
    }
    total
}
