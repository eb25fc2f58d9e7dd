//! Day 14: ore to fuel through the nanofactory

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};
use std::collections::{HashMap, VecDeque};

const ORE: &str = "ORE";
const FUEL: &str = "FUEL";
const ORE_BUDGET: u64 = 1_000_000_000_000;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 14, tags = ["chemistry"])]
pub struct Solver;

#[derive(Debug)]
pub struct Reaction<'a> {
    batch_size: u64,
    inputs: Vec<(u64, &'a str)>,
}

impl InputParser for Solver {
    /// Each chemical mapped to the only reaction that produces it
    type Parsed<'a> = HashMap<&'a str, Reaction<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut reactions = HashMap::new();
        for line in input.trim().lines() {
            let (inputs, output) = line
                .split_once("=>")
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad reaction: {line:?}")))?;

            let (batch_size, chemical) = parse_term(output)?;
            let inputs = inputs
                .split(',')
                .map(parse_term)
                .collect::<Result<Vec<_>, _>>()?;

            if reactions
                .insert(chemical, Reaction { batch_size, inputs })
                .is_some()
            {
                return Err(ParseError::InvalidFormat(format!(
                    "{chemical} is produced by two reactions"
                )));
            }
        }
        Ok(reactions)
    }
}

fn parse_term(term: &str) -> Result<(u64, &str), ParseError> {
    let (quantity, chemical) = term
        .trim()
        .split_once(' ')
        .ok_or_else(|| ParseError::InvalidFormat(format!("bad term: {term:?}")))?;
    let quantity: u64 = quantity
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("bad quantity in {term:?}")))?;
    if quantity == 0 {
        return Err(ParseError::InvalidFormat(format!(
            "zero quantity in {term:?}"
        )));
    }
    Ok((quantity, chemical))
}

impl PartSolver<1> for Solver {
    fn solve(reactions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(ore_needed(reactions, 1)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(reactions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        // Ore per fuel is monotone, so bracket the budget and bisect
        let mut low = 1u64;
        let mut high = 2u64;
        while ore_needed(reactions, high)? <= ORE_BUDGET {
            low = high;
            high *= 2;
        }
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if ore_needed(reactions, mid)? <= ORE_BUDGET {
                low = mid;
            } else {
                high = mid;
            }
        }
        Ok(low.to_string())
    }
}

/// Ore required to make the given amount of fuel, reusing surplus from
/// over-producing batches
fn ore_needed(reactions: &HashMap<&str, Reaction<'_>>, fuel: u64) -> Result<u64, SolveError> {
    let mut pending: VecDeque<(&str, u64)> = VecDeque::from([(FUEL, fuel)]);
    let mut surplus: HashMap<&str, u64> = HashMap::new();
    let mut ore = 0u64;

    while let Some((chemical, mut amount)) = pending.pop_front() {
        if chemical == ORE {
            ore += amount;
            continue;
        }

        let spare = surplus.entry(chemical).or_default();
        let reused = amount.min(*spare);
        *spare -= reused;
        amount -= reused;
        if amount == 0 {
            continue;
        }

        let reaction = reactions.get(chemical).ok_or_else(|| {
            SolveError::SolveFailed(anyhow!("nothing produces {chemical}").into())
        })?;
        let batches = amount.div_ceil(reaction.batch_size);
        *surplus.entry(chemical).or_default() += batches * reaction.batch_size - amount;

        for &(quantity, input) in &reaction.inputs {
            pending.push_back((input, quantity * batches));
        }
    }

    Ok(ore)
}
