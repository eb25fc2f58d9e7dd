//! Day 13: the breakout arcade cabinet

use crate::utils::intcode::{Intcode, parse_program};
use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};
use std::collections::HashMap;

const BLOCK: i64 = 2;
const PADDLE: i64 = 3;
const BALL: i64 = 4;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 13, tags = ["intcode"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        parse_program(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let mut vm = Intcode::new(program);
        let mut screen = Screen::default();
        for triple in vm.run_collect()?.chunks(3) {
            let &[x, y, id] = triple else {
                return Err(incomplete_triple());
            };
            screen.apply(x, y, id);
        }
        Ok(screen.count_tiles(BLOCK).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let mut vm = Intcode::new(program);
        // Two quarters to play for free
        vm.write(0, 2);
        vm.set_default_input(0);

        let mut screen = Screen::default();
        loop {
            let Some(x) = vm.run_until_output()? else {
                break;
            };
            let y = vm.run_until_output()?.ok_or_else(incomplete_triple)?;
            let id = vm.run_until_output()?.ok_or_else(incomplete_triple)?;
            screen.apply(x, y, id);

            // The joystick chases the ball; sticky so the game can poll
            // it between screen updates
            vm.set_default_input(screen.joystick());
        }
        Ok(screen.score.to_string())
    }
}

fn incomplete_triple() -> SolveError {
    SolveError::SolveFailed(anyhow!("cabinet halted mid draw instruction").into())
}

/// Screen state built from the cabinet's (x, y, tile) output triples
#[derive(Debug, Default)]
pub struct Screen {
    tiles: HashMap<(i64, i64), i64>,
    score: i64,
    ball_x: Option<i64>,
    paddle_x: Option<i64>,
}

impl Screen {
    fn apply(&mut self, x: i64, y: i64, id: i64) {
        if (x, y) == (-1, 0) {
            self.score = id;
            return;
        }
        match id {
            BALL => self.ball_x = Some(x),
            PADDLE => self.paddle_x = Some(x),
            _ => {}
        }
        self.tiles.insert((x, y), id);
    }

    fn count_tiles(&self, wanted: i64) -> usize {
        self.tiles.values().filter(|&&id| id == wanted).count()
    }

    /// -1, 0 or 1 to move the paddle under the ball
    fn joystick(&self) -> i64 {
        match (self.ball_x, self.paddle_x) {
            (Some(ball), Some(paddle)) => (ball - paddle).signum(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_tracks_tiles_and_score() {
        let mut screen = Screen::default();
        screen.apply(0, 0, BLOCK);
        screen.apply(1, 0, BLOCK);
        screen.apply(2, 0, 1);
        screen.apply(-1, 0, 12345);
        assert_eq!(screen.count_tiles(BLOCK), 2);
        assert_eq!(screen.score, 12345);
    }

    #[test]
    fn redrawn_tile_replaces_the_old_one() {
        let mut screen = Screen::default();
        screen.apply(4, 2, BLOCK);
        screen.apply(4, 2, 0);
        assert_eq!(screen.count_tiles(BLOCK), 0);
    }

    #[test]
    fn joystick_chases_the_ball() {
        let mut screen = Screen::default();
        assert_eq!(screen.joystick(), 0);
        screen.apply(6, 9, PADDLE);
        screen.apply(2, 3, BALL);
        assert_eq!(screen.joystick(), -1);
        screen.apply(8, 3, BALL);
        assert_eq!(screen.joystick(), 1);
        screen.apply(8, 9, PADDLE);
        assert_eq!(screen.joystick(), 0);
    }

    #[test]
    fn counts_blocks_on_the_drawn_screen() {
        let mut program = <Solver as InputParser>::parse(
            "104,0,104,0,104,2,104,1,104,0,104,2,104,2,104,0,104,1,99",
        )
        .unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut program).unwrap(), "2");
    }

    #[test]
    fn free_play_reports_final_score() {
        // First instruction is clobbered by the quarter patch, so the
        // program expects opcode 2 at cell 0
        let mut program =
            <Solver as InputParser>::parse("2,0,0,0,104,-1,104,0,104,12345,99").unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut program).unwrap(),
            "12345"
        );
    }

    #[test]
    fn incomplete_triple_is_an_error() {
        let mut program = <Solver as InputParser>::parse("104,1,104,2,99").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut program).is_err());
    }
}
