//! Day 10: asteroid lines of sight and the vaporization order

use crate::utils::math::gcd;
use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};
use std::collections::{HashMap, HashSet};

const VAPORIZE_TARGET: usize = 200;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 10, tags = ["grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
}

impl InputParser for Solver {
    type Parsed<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut asteroids = Vec::new();
        for (y, line) in input.trim().lines().enumerate() {
            for (x, cell) in line.trim().chars().enumerate() {
                match cell {
                    '#' => asteroids.push(Point {
                        x: x as i64,
                        y: y as i64,
                    }),
                    '.' => {}
                    _ => {
                        return Err(ParseError::InvalidFormat(format!(
                            "bad map cell {cell:?} at ({x}, {y})"
                        )));
                    }
                }
            }
        }
        Ok(asteroids)
    }
}

impl PartSolver<1> for Solver {
    fn solve(asteroids: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let (_, visible) = best_station(asteroids)?;
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(asteroids: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let (station, _) = best_station(asteroids)?;
        let order = vaporize_order(asteroids, station);
        let target = order.get(VAPORIZE_TARGET - 1).ok_or_else(|| {
            SolveError::SolveFailed(
                anyhow!(
                    "only {} asteroids to vaporize, wanted the {VAPORIZE_TARGET}th",
                    order.len()
                )
                .into(),
            )
        })?;
        Ok((target.x * 100 + target.y).to_string())
    }
}

/// Direction to `to` reduced to its lowest terms
fn direction(from: Point, to: Point) -> (i64, i64) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let g = gcd(dx, dy);
    (dx / g, dy / g)
}

fn visible_from(asteroids: &[Point], origin: Point) -> usize {
    asteroids
        .iter()
        .filter(|&&a| a != origin)
        .map(|&a| direction(origin, a))
        .collect::<HashSet<_>>()
        .len()
}

/// The asteroid that can see the most others, with its count
fn best_station(asteroids: &[Point]) -> Result<(Point, usize), SolveError> {
    asteroids
        .iter()
        .map(|&a| (a, visible_from(asteroids, a)))
        .max_by_key(|&(_, visible)| visible)
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("map has no asteroids").into()))
}

/// Clockwise angle from straight up, in [0, 2π); the map's y axis
/// points down
fn clockwise_angle(dx: i64, dy: i64) -> f64 {
    let angle = (dx as f64).atan2(-dy as f64);
    if angle < 0.0 {
        angle + 2.0 * std::f64::consts::PI
    } else {
        angle
    }
}

/// Every asteroid except the station, in laser order: one hit per
/// direction per clockwise sweep, nearest first within a direction
fn vaporize_order(asteroids: &[Point], station: Point) -> Vec<Point> {
    let mut lines: HashMap<(i64, i64), Vec<Point>> = HashMap::new();
    for &a in asteroids.iter().filter(|&&a| a != station) {
        lines.entry(direction(station, a)).or_default().push(a);
    }

    let mut order: Vec<(usize, f64, Point)> = Vec::new();
    for ((dx, dy), mut in_line) in lines {
        in_line.sort_by_key(|a| (a.x - station.x).abs() + (a.y - station.y).abs());
        let angle = clockwise_angle(dx, dy);
        for (sweep, a) in in_line.into_iter().enumerate() {
            order.push((sweep, angle, a));
        }
    }

    order.sort_by(|(s1, a1, _), (s2, a2, _)| s1.cmp(s2).then(a1.total_cmp(a2)));
    order.into_iter().map(|(_, _, a)| a).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = ".#..#\n.....\n#####\n....#\n...##";

    const MEDIUM: &str = "......#.#.\n#..#.#....\n..#######.\n.#.#.###..\n.#..#.....\n\
                          ..#....#.#\n#..#....#.\n.##.#..###\n##...#..#.\n.#....####";

    const LARGE: &str = "\
        .#..##.###...#######\n##.############..##.\n.#.######.########.#\n\
        .###.#######.####.#.\n#####.##.#.##.###.##\n..#####..#.#########\n\
        ####################\n#.####....###.#.#.##\n##.#################\n\
        #####.##.###..####..\n..######..##.#######\n####.##.####...##..#\n\
        .#####..#.######.###\n##...#.##########...\n#.##########.#######\n\
        .####.#.###.###.#.##\n....##.##.###..#####\n.#.#.###########.###\n\
        #.#.#.#####.####.###\n###.##.####.##.#..##";

    #[test]
    fn best_station_small_maps() {
        let asteroids = <Solver as InputParser>::parse(SMALL).unwrap();
        let (station, visible) = best_station(&asteroids).unwrap();
        assert_eq!(station, Point { x: 3, y: 4 });
        assert_eq!(visible, 8);

        let asteroids = <Solver as InputParser>::parse(MEDIUM).unwrap();
        let (station, visible) = best_station(&asteroids).unwrap();
        assert_eq!(station, Point { x: 5, y: 8 });
        assert_eq!(visible, 33);
    }

    #[test]
    fn best_station_large_map() {
        let asteroids = <Solver as InputParser>::parse(LARGE).unwrap();
        let (station, visible) = best_station(&asteroids).unwrap();
        assert_eq!(station, Point { x: 11, y: 13 });
        assert_eq!(visible, 210);
    }

    #[test]
    fn laser_sweep_order() {
        let asteroids = <Solver as InputParser>::parse(LARGE).unwrap();
        let order = vaporize_order(&asteroids, Point { x: 11, y: 13 });
        assert_eq!(order[0], Point { x: 11, y: 12 });
        assert_eq!(order[1], Point { x: 12, y: 1 });
        assert_eq!(order[2], Point { x: 12, y: 2 });
        assert_eq!(order[9], Point { x: 12, y: 8 });
        assert_eq!(order[19], Point { x: 16, y: 0 });
        assert_eq!(order[49], Point { x: 16, y: 9 });
        assert_eq!(order[99], Point { x: 10, y: 16 });
        assert_eq!(order[198], Point { x: 9, y: 6 });
        assert_eq!(order[199], Point { x: 8, y: 2 });
        assert_eq!(order[200], Point { x: 10, y: 9 });
        assert_eq!(order.last(), Some(&Point { x: 11, y: 1 }));
    }

    #[test]
    fn two_hundredth_asteroid() {
        let mut asteroids = <Solver as InputParser>::parse(LARGE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut asteroids).unwrap(),
            "802"
        );
    }

    #[test]
    fn too_few_asteroids_for_part_two() {
        let mut asteroids = <Solver as InputParser>::parse(SMALL).unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut asteroids).is_err());
    }

    #[test]
    fn rejects_unknown_cell() {
        assert!(<Solver as InputParser>::parse(".#\n.x").is_err());
    }
}
