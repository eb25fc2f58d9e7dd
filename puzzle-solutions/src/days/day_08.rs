//! Day 8: decode the layered password image

use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

const WIDTH: usize = 25;
const HEIGHT: usize = 6;

const BLACK: u8 = 0;
const WHITE: u8 = 1;
const TRANSPARENT: u8 = 2;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 8, tags = ["image"])]
pub struct Solver;

#[derive(Debug)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Image {
    fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, ParseError> {
        let layer_size = width * height;
        if pixels.is_empty() || !pixels.len().is_multiple_of(layer_size) {
            return Err(ParseError::InvalidFormat(format!(
                "{} pixels do not fill {width}x{height} layers",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn layers(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.width * self.height)
    }

    /// Ones times twos on the layer with the fewest zeros
    fn checksum(&self) -> Result<usize, SolveError> {
        self.layers()
            .min_by_key(|layer| count_of(layer, 0))
            .map(|layer| count_of(layer, 1) * count_of(layer, 2))
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("image has no layers").into()))
    }

    /// Stack the layers, first opaque pixel wins
    fn flatten(&self) -> Vec<u8> {
        let layer_size = self.width * self.height;
        let mut flat = vec![TRANSPARENT; layer_size];
        for layer in self.layers() {
            for (out, &pixel) in flat.iter_mut().zip(layer) {
                if *out == TRANSPARENT {
                    *out = pixel;
                }
            }
        }
        flat
    }

    fn render(&self) -> String {
        self.flatten()
            .chunks_exact(self.width)
            .map(|row| {
                row.iter()
                    .map(|&p| if p == WHITE { '#' } else { ' ' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn count_of(layer: &[u8], value: u8) -> usize {
    layer.iter().filter(|&&p| p == value).count()
}

impl InputParser for Solver {
    type Parsed<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let pixels = input
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad pixel {c:?}")))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Image::new(WIDTH, HEIGHT, pixels)
    }
}

impl PartSolver<1> for Solver {
    fn solve(image: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(image.checksum()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(image: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(image.render())
    }
}
