//! Day 6: orbit map checksums and transfers

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};
use std::collections::HashMap;

const ROOT: &str = "COM";

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 6, tags = ["tree"])]
pub struct Solver;

impl InputParser for Solver {
    /// Each body mapped to the body it directly orbits
    type Parsed<'a> = HashMap<&'a str, &'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut parents = HashMap::new();
        for line in input.trim().lines() {
            let (parent, child) = line
                .trim()
                .split_once(')')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad orbit: {line:?}")))?;
            if parents.insert(child, parent).is_some() {
                return Err(ParseError::InvalidFormat(format!(
                    "{child} orbits two bodies"
                )));
            }
        }
        Ok(parents)
    }
}

impl PartSolver<1> for Solver {
    fn solve(parents: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for body in parents.keys() {
            total += chain_to_root(parents, body)?.len();
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(parents: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let ours = chain_to_root(parents, "YOU")?;
        let theirs = chain_to_root(parents, "SAN")?;

        // First shared ancestor; everything above it is common
        for (steps_up, body) in ours.iter().enumerate() {
            if let Some(steps_down) = theirs.iter().position(|b| b == body) {
                return Ok((steps_up + steps_down).to_string());
            }
        }
        Err(SolveError::SolveFailed(
            anyhow!("YOU and SAN share no ancestor").into(),
        ))
    }
}

/// Ancestors of `body` from its direct parent up to and including the root
fn chain_to_root<'a>(
    parents: &HashMap<&'a str, &'a str>,
    body: &str,
) -> Result<Vec<&'a str>, SolveError> {
    let mut chain = Vec::new();
    let mut current = *parents
        .get(body)
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("{body} is not on the map").into()))?;

    loop {
        chain.push(current);
        if current == ROOT {
            return Ok(chain);
        }
        if chain.len() > parents.len() {
            return Err(SolveError::SolveFailed(
                anyhow!("orbit map contains a cycle").into(),
            ));
        }
        current = *parents.get(current).ok_or_else(|| {
            SolveError::SolveFailed(anyhow!("{current} orbits nothing and is not {ROOT}").into())
        })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUM_MAP: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";

    #[test]
    fn total_orbit_count() {
        let mut parents = <Solver as InputParser>::parse(CHECKSUM_MAP).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut parents).unwrap(), "42");
    }

    #[test]
    fn transfers_between_you_and_santa() {
        let map = format!("{CHECKSUM_MAP}\nK)YOU\nI)SAN");
        let mut parents = <Solver as InputParser>::parse(&map).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut parents).unwrap(), "4");
    }

    #[test]
    fn missing_santa_is_an_error() {
        let map = format!("{CHECKSUM_MAP}\nK)YOU");
        let mut parents = <Solver as InputParser>::parse(&map).unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut parents).is_err());
    }

    #[test]
    fn detached_body_is_an_error() {
        let mut parents = <Solver as InputParser>::parse("COM)B\nX)Y").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut parents).is_err());
    }

    #[test]
    fn rejects_two_parents() {
        assert!(<Solver as InputParser>::parse("COM)B\nA)C\nB)C").is_err());
    }

    #[test]
    fn rejects_malformed_line() {
        assert!(<Solver as InputParser>::parse("COM-B").is_err());
    }
}
