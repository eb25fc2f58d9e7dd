//! Sequential executor for running solvers

use crate::input::InputStore;
use chrono::TimeDelta;
use puzzle_solver::{SolverError, SolverRegistry};
use std::ops::RangeInclusive;

/// Result from a single solver execution
pub struct SolverResult {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Only set on the first part of a day; parsing happens once
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers in day order, one part at a time
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(
        registry: SolverRegistry,
        inputs: InputStore,
        day_filter: Option<u8>,
        part_filter: Option<u8>,
    ) -> Self {
        Self {
            registry,
            inputs,
            day_filter,
            part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on part_filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<u8> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.day))
            .map(|w| w.day)
            .collect()
    }

    /// Execute the work items, reporting each result as it completes
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F) -> Vec<SolverResult>
    where
        F: FnMut(&SolverResult),
    {
        let mut results = Vec::new();
        for work in work_items {
            for result in self.run_solver(work) {
                on_result(&result);
                results.push(result);
            }
        }
        results
    }

    /// Run a single day: read input, parse once, solve each part
    fn run_solver(&self, work: &WorkItem) -> Vec<SolverResult> {
        let input = match self.inputs.read(work.day) {
            Ok(input) => input,
            Err(e) => return self.error_results(work, e.to_string()),
        };

        let mut solver = match self.registry.create_solver(work.day, &input) {
            Ok(solver) => solver,
            Err(e) => return self.error_results(work, e.to_string()),
        };

        let mut parse_duration = Some(solver.parse_duration());
        work.parts
            .clone()
            .map(|part| {
                let (answer, solve_duration) = match solver.solve(part) {
                    Ok(result) => {
                        let duration = result.duration();
                        (Ok(result.answer), duration)
                    }
                    Err(e) => (Err(SolverError::SolveError(e)), TimeDelta::zero()),
                };
                SolverResult {
                    day: work.day,
                    part,
                    answer,
                    parse_duration: parse_duration.take(),
                    solve_duration,
                }
            })
            .collect()
    }

    /// One failed result per requested part
    fn error_results(&self, work: &WorkItem, message: String) -> Vec<SolverResult> {
        work.parts
            .clone()
            .map(|part| SolverResult {
                day: work.day,
                part,
                answer: Err(SolverError::ParseError(
                    puzzle_solver::ParseError::Other(message.clone()),
                )),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::{
        InputParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver,
    };
    use std::fs;
    use tempfile::TempDir;

    struct DoubleSolver;

    impl InputParser for DoubleSolver {
        type Parsed<'a> = i64;

        fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{e}")))
        }
    }

    impl Solver for DoubleSolver {
        const PARTS: u8 = 2;

        fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*parsed * 2).to_string()),
                2 => Ok((*parsed * 3).to_string()),
                p => Err(SolveError::PartNotImplemented(p)),
            }
        }
    }

    fn executor(
        temp: &TempDir,
        day_filter: Option<u8>,
        part_filter: Option<u8>,
    ) -> Executor {
        let registry = DoubleSolver
            .register_with(RegistryBuilder::new(), 4)
            .unwrap()
            .build();
        Executor::new(
            registry,
            InputStore::new(temp.path().to_path_buf()),
            day_filter,
            part_filter,
        )
    }

    #[test]
    fn collects_both_parts_by_default() {
        let temp = TempDir::new().unwrap();
        let items = executor(&temp, None, None).collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day, 4);
        assert_eq!(items[0].parts, 1..=2);
    }

    #[test]
    fn part_filter_narrows_the_range() {
        let temp = TempDir::new().unwrap();
        let items = executor(&temp, None, Some(2)).collect_work_items();
        assert_eq!(items[0].parts, 2..=2);
    }

    #[test]
    fn day_filter_can_empty_the_work_list() {
        let temp = TempDir::new().unwrap();
        assert!(executor(&temp, Some(9), None).collect_work_items().is_empty());
    }

    #[test]
    fn reports_missing_inputs() {
        let temp = TempDir::new().unwrap();
        let exec = executor(&temp, None, None);
        let items = exec.collect_work_items();
        assert_eq!(exec.missing_inputs(&items), vec![4]);
    }

    #[test]
    fn executes_parts_in_order() {
        let temp = TempDir::new().unwrap();
        let exec = executor(&temp, None, None);
        fs::write(exec.inputs().path(4), "21\n").unwrap();

        let items = exec.collect_work_items();
        let results = exec.execute(&items, |_| {});

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].answer.as_deref().unwrap(), "42");
        assert_eq!(results[1].answer.as_deref().unwrap(), "63");
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn unreadable_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let exec = executor(&temp, None, None);
        let items = exec.collect_work_items();
        let results = exec.execute(&items, |_| {});

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.answer.is_err()));
    }

    #[test]
    fn parse_failure_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let exec = executor(&temp, None, None);
        fs::write(exec.inputs().path(4), "not a number\n").unwrap();

        let items = exec.collect_work_items();
        let results = exec.execute(&items, |_| {});
        assert!(results.iter().all(|r| r.answer.is_err()));
    }
}
