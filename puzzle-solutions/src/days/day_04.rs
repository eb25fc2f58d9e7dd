//! Day 4: count passwords matching the digit rules

use itertools::Itertools;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 4, tags = ["digits"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = (u32, u32);

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let (low, high) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidFormat("expected LOW-HIGH".into()))?;
        let low = low
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("low bound: {e}")))?;
        let high = high
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("high bound: {e}")))?;
        Ok((low, high))
    }
}

impl PartSolver<1> for Solver {
    fn solve(range: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(count_matching(*range, has_pair).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(range: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(count_matching(*range, has_exact_pair).to_string())
    }
}

fn count_matching((low, high): (u32, u32), pair_rule: fn(&[u8]) -> bool) -> usize {
    (low..=high)
        .map(digits)
        .filter(|d| is_non_decreasing(d) && pair_rule(d))
        .count()
}

fn digits(mut n: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(6);
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

fn is_non_decreasing(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] <= w[1])
}

/// Some digit appears at least twice in a row
fn has_pair(digits: &[u8]) -> bool {
    digits.windows(2).any(|w| w[0] == w[1])
}

/// Some digit appears in a run of exactly two
fn has_exact_pair(digits: &[u8]) -> bool {
    digits
        .iter()
        .chunk_by(|&&d| d)
        .into_iter()
        .any(|(_, run)| run.count() == 2)
}
