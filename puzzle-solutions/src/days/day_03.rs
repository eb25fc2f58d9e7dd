//! Day 3: crossed wires on a grid

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 3, tags = ["grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    const ORIGIN: Point = Point { x: 0, y: 0 };

    fn manhattan_dist_to(&self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// One straight section of a wire
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    start: Point,
    end: Point,
    length: i64,
    horizontal: bool,
}

impl Segment {
    /// Intersection point with a perpendicular segment, if any.
    /// Parallel segments never count, matching the path inputs where
    /// overlaps only happen at right angles.
    fn intersects(&self, other: &Segment) -> Option<Point> {
        if self.horizontal == other.horizontal {
            return None;
        }

        let (h, v) = if self.horizontal {
            (self, other)
        } else {
            (other, self)
        };

        if is_between(h.start.y, v.start.y, v.end.y) && is_between(v.start.x, h.start.x, h.end.x) {
            Some(Point {
                x: v.start.x,
                y: h.start.y,
            })
        } else {
            None
        }
    }
}

fn is_between(x: i64, a: i64, b: i64) -> bool {
    if a >= b { b <= x && x <= a } else { a <= x && x <= b }
}

fn parse_wire(line: &str) -> Result<Vec<Segment>, anyhow::Error> {
    let mut cursor = Point::ORIGIN;
    let mut segments = Vec::new();

    for token in line.trim().split(',') {
        let Some((direction, distance)) = token.split_at_checked(1) else {
            return Err(anyhow!("empty path element"));
        };
        let distance: i64 = distance
            .parse()
            .map_err(|_| anyhow!("bad path element {token:?}"))?;
        let (dx, dy) = match direction {
            "U" => (0, 1),
            "D" => (0, -1),
            "R" => (1, 0),
            "L" => (-1, 0),
            _ => return Err(anyhow!("bad direction in {token:?}")),
        };

        let end = Point {
            x: cursor.x + dx * distance,
            y: cursor.y + dy * distance,
        };
        segments.push(Segment {
            start: cursor,
            end,
            length: distance,
            horizontal: dy == 0,
        });
        cursor = end;
    }

    Ok(segments)
}

impl InputParser for Solver {
    type Parsed<'a> = [Vec<Segment>; 2];

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut lines = input.trim().lines();
        let first = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("first wire".into()))?;
        let second = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("second wire".into()))?;

        Ok([
            parse_wire(first).map_err(|e| ParseError::InvalidFormat(format!("wire 1: {e}")))?,
            parse_wire(second).map_err(|e| ParseError::InvalidFormat(format!("wire 2: {e}")))?,
        ])
    }
}

impl PartSolver<1> for Solver {
    fn solve(wires: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let [first, second] = wires;
        first
            .iter()
            .flat_map(|s1| second.iter().filter_map(|s2| s1.intersects(s2)))
            .filter(|p| *p != Point::ORIGIN)
            .map(|p| p.manhattan_dist_to(Point::ORIGIN))
            .min()
            .map(|d| d.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("wires never cross").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(wires: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let [first, second] = wires;
        let mut shortest: Option<i64> = None;

        let mut steps1 = 0;
        for s1 in first.iter() {
            let mut steps2 = 0;
            for s2 in second.iter() {
                if let Some(p) = s1.intersects(s2)
                    && p != Point::ORIGIN
                {
                    let total = steps1
                        + s1.start.manhattan_dist_to(p)
                        + steps2
                        + s2.start.manhattan_dist_to(p);
                    shortest = Some(shortest.map_or(total, |s| s.min(total)));
                }
                steps2 += s2.length;
            }
            steps1 += s1.length;
        }

        shortest
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("wires never cross").into()))
    }
}
