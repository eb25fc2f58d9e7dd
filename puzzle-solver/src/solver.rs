//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing raw puzzle input into a day's working data
///
/// Separates parsing from solving: each day defines one parsed
/// representation that every part of that day works on.
///
/// # Example
///
/// ```
/// use puzzle_solver::{InputParser, ParseError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Parsed<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait InputParser {
    /// The parsed input plus any intermediate results shared between parts.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or a custom struct for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type Parsed<'a>;

    /// Parse the raw input string.
    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), so each part
/// is a separate impl checked at compile time.
///
/// # Example
///
/// ```
/// use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Parsed<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
///         Ok(parsed.iter().sum::<i64>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: InputParser {
    /// Solve this part of the puzzle.
    ///
    /// Takes the parsed data mutably so parts can memoize shared work.
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError>;
}

/// Core trait the registry works with: part dispatch over one day.
///
/// Usually generated with `#[derive(DaySolver)]` from the `PartSolver<N>`
/// impls; can also be written by hand.
///
/// # Example
///
/// ```
/// use puzzle_solver::{InputParser, ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Parsed<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(parsed.iter().sum::<i64>().to_string()),
///             2 => Ok(parsed.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: InputParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the puzzle
    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError>;
}

/// Blanket extension validating the part number before dispatching.
pub trait SolverExt: Solver {
    fn solve_part_checked(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
