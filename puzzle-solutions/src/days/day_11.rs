//! Day 11: the hull painting robot

use crate::utils::intcode::{Intcode, parse_program};
use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};
use std::collections::HashMap;

const BLACK: i64 = 0;
const WHITE: i64 = 1;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 11, tags = ["intcode", "grid"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        parse_program(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let painted = paint_hull(program, BLACK)?;
        Ok(painted.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let painted = paint_hull(program, WHITE)?;
        Ok(render(&painted))
    }
}

/// Run the robot until its brain halts; returns every panel it painted.
/// The y axis points down so the rendered rows read top to bottom.
fn paint_hull(
    program: &[i64],
    start_color: i64,
) -> Result<HashMap<(i64, i64), i64>, SolveError> {
    let mut brain = Intcode::new(program);
    let mut painted: HashMap<(i64, i64), i64> = HashMap::new();
    let mut position = (0i64, 0i64);
    let (mut dx, mut dy) = (0i64, -1i64);

    if start_color != BLACK {
        painted.insert(position, start_color);
    }

    loop {
        let current = painted.get(&position).copied().unwrap_or(BLACK);
        brain.push_input(current);

        let Some(color) = brain.run_until_output()? else {
            return Ok(painted);
        };
        let Some(turn) = brain.run_until_output()? else {
            return Err(SolveError::SolveFailed(
                anyhow!("robot halted between paint and turn").into(),
            ));
        };

        painted.insert(position, color);
        (dx, dy) = match turn {
            0 => (dy, -dx),
            1 => (-dy, dx),
            _ => {
                return Err(SolveError::SolveFailed(
                    anyhow!("robot produced invalid turn {turn}").into(),
                ));
            }
        };
        position = (position.0 + dx, position.1 + dy);
    }
}

fn render(painted: &HashMap<(i64, i64), i64>) -> String {
    let white = |x: i64, y: i64| painted.get(&(x, y)).copied().unwrap_or(BLACK) == WHITE;

    let xs = painted.keys().map(|&(x, _)| x);
    let ys = painted.keys().map(|&(_, y)| y);
    let (Some(x_min), Some(x_max)) = (xs.clone().min(), xs.max()) else {
        return String::new();
    };
    let (y_min, y_max) = (ys.clone().min().unwrap(), ys.max().unwrap());

    (y_min..=y_max)
        .map(|y| {
            (x_min..=x_max)
                .map(|x| if white(x, y) { '#' } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_walk_paints_six_panels() {
        // Fixed output pairs (1,0),(0,0),(1,0),(1,0),(0,1),(1,0),(1,0):
        // the robot crosses its own trail, so 7 paints hit 6 panels
        let program = parse_program(
            "104,1,104,0,104,0,104,0,104,1,104,0,104,1,104,0,\
             104,0,104,1,104,1,104,0,104,1,104,0,99",
        )
        .unwrap();
        assert_eq!(paint_hull(&program, BLACK).unwrap().len(), 6);
    }

    #[test]
    fn renders_painted_panels() {
        // Paint origin white, step right, paint white again
        let mut program = <Solver as InputParser>::parse("104,1,104,1,104,1,104,0,99").unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut program).unwrap(), "##");
    }

    #[test]
    fn part_two_starts_on_white() {
        // Brain reads the panel and echoes it as paint, then turns left
        let program = parse_program("3,100,4,100,104,0,99").unwrap();
        let painted = paint_hull(&program, WHITE).unwrap();
        assert_eq!(painted.get(&(0, 0)), Some(&WHITE));
    }

    #[test]
    fn halt_between_outputs_is_an_error() {
        let program = parse_program("104,1,99").unwrap();
        assert!(paint_hull(&program, BLACK).is_err());
    }

    #[test]
    fn invalid_turn_is_an_error() {
        let program = parse_program("104,1,104,7,99").unwrap();
        assert!(paint_hull(&program, BLACK).is_err());
    }
}
