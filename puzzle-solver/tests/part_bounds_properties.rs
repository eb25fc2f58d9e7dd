//! Property-based tests for solver part bounds validation

use proptest::prelude::*;
use puzzle_solver::{InputParser, ParseError, SolveError, Solver, SolverExt};

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> InputParser for TestSolver<N> {
    type Parsed<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// For any solver with PARTS = N, `solve_part_checked(part)` where
    /// part = 0 or part > N returns `PartOutOfRange(part)`.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let mut parsed = ();

        let result = match max_parts {
            1 => TestSolver::<1>::solve_part_checked(&mut parsed, part),
            2 => TestSolver::<2>::solve_part_checked(&mut parsed, part),
            _ => TestSolver::<3>::solve_part_checked(&mut parsed, part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// For any part in 1..=PARTS, `solve_part_checked` delegates to `solve_part`.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let mut parsed = ();
        let mut parsed2 = ();

        let checked_result = TestSolver::<2>::solve_part_checked(&mut parsed, part);
        let direct_result = TestSolver::<2>::solve_part(&mut parsed2, part);

        prop_assert!(checked_result.is_ok());
        prop_assert!(direct_result.is_ok());
        prop_assert_eq!(checked_result.unwrap(), direct_result.unwrap());
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let mut parsed = ();
        let result = TestSolver::<2>::solve_part_checked(&mut parsed, 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        let mut parsed = ();
        let result = TestSolver::<2>::solve_part_checked(&mut parsed, 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        let mut parsed = ();
        let result = TestSolver::<2>::solve_part_checked(&mut parsed, 1);
        assert_eq!(result.unwrap(), "part1");
    }
}
