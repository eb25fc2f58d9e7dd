//! Day 12: the four-moon n-body simulation

use crate::utils::math::lcm;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

const SIMULATION_STEPS: usize = 1000;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 12, tags = ["simulation"])]
pub struct Solver;

impl InputParser for Solver {
    /// Starting position of each moon
    type Parsed<'a> = Vec<[i64; 3]>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input.trim().lines().map(parse_moon).collect()
    }
}

fn parse_moon(line: &str) -> Result<[i64; 3], ParseError> {
    let bad = || ParseError::InvalidFormat(format!("bad moon: {line:?}"));

    let inner = line
        .trim()
        .strip_prefix('<')
        .and_then(|l| l.strip_suffix('>'))
        .ok_or_else(bad)?;

    let mut position = [0i64; 3];
    let mut seen = 0;
    for part in inner.split(',') {
        let (name, value) = part.trim().split_once('=').ok_or_else(bad)?;
        let axis = match name {
            "x" => 0,
            "y" => 1,
            "z" => 2,
            _ => return Err(bad()),
        };
        position[axis] = value.parse().map_err(|_| bad())?;
        seen += 1;
    }
    if seen != 3 {
        return Err(bad());
    }
    Ok(position)
}

impl PartSolver<1> for Solver {
    fn solve(positions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let mut system = System::new(positions);
        for _ in 0..SIMULATION_STEPS {
            system.step();
        }
        Ok(system.total_energy().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(positions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        // The axes never interact, so the full cycle is the lcm of the
        // three independent axis cycles
        let cycle = (0..3)
            .map(|axis| {
                let starts: Vec<i64> = positions.iter().map(|p| p[axis]).collect();
                axis_cycle(&starts)
            })
            .fold(1, lcm);
        Ok(cycle.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Moon {
    position: [i64; 3],
    velocity: [i64; 3],
}

#[derive(Debug, Clone)]
pub struct System {
    moons: Vec<Moon>,
}

impl System {
    fn new(positions: &[[i64; 3]]) -> Self {
        Self {
            moons: positions
                .iter()
                .map(|&position| Moon {
                    position,
                    velocity: [0; 3],
                })
                .collect(),
        }
    }

    /// Apply gravity to every pair, then velocity to every moon
    fn step(&mut self) {
        for i in 0..self.moons.len() {
            for j in 0..self.moons.len() {
                for axis in 0..3 {
                    let pull = (self.moons[j].position[axis] - self.moons[i].position[axis])
                        .signum();
                    self.moons[i].velocity[axis] += pull;
                }
            }
        }
        for moon in &mut self.moons {
            for axis in 0..3 {
                moon.position[axis] += moon.velocity[axis];
            }
        }
    }

    fn total_energy(&self) -> i64 {
        self.moons
            .iter()
            .map(|moon| {
                let potential: i64 = moon.position.iter().map(|p| p.abs()).sum();
                let kinetic: i64 = moon.velocity.iter().map(|v| v.abs()).sum();
                potential * kinetic
            })
            .sum()
    }
}

/// Steps until one axis returns to its starting positions with all
/// velocities back at zero
fn axis_cycle(starts: &[i64]) -> u64 {
    let initial: Vec<(i64, i64)> = starts.iter().map(|&p| (p, 0)).collect();
    let mut state = initial.clone();
    let mut steps = 0u64;

    loop {
        for i in 0..state.len() {
            for j in 0..state.len() {
                state[i].1 += (state[j].0 - state[i].0).signum();
            }
        }
        for (position, velocity) in &mut state {
            *position += *velocity;
        }

        steps += 1;
        if state == initial {
            return steps;
        }
    }
}
