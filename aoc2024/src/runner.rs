use crate::prelude::*;
use crate::{day1, day2, day3};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type Answer = i64;
pub type Solver = fn(Part, &str) -> std::result::Result<Answer, Error>;

const DAYS: [Solver; 3] = [day1::solve, day2::solve, day3::solve];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {One, Two}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {Part::One => 1, Part::Two => 2}
    }
}

impl TryFrom<u8> for Part {
    type Error = Error;

    fn try_from(n: u8) -> std::result::Result<Self, Error> {
        match n {1 => Ok(Part::One), 2 => Ok(Part::Two), _ => Err(Error::InvalidPart(n))}
    }
}

/// A puzzle day that has a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day(u8);

impl Day {
    pub fn number(self) -> u8 {self.0}

    fn solver(self) -> Solver {DAYS[self.0 as usize - 1]}
}

impl std::str::FromStr for Day {
    type Err = Error;

    /// Accepts `day01`, `day1`, `01` and `1`.
    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        let digits = s.trim().strip_prefix("day").unwrap_or(s.trim());
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnknownDay(s.to_owned()));
        }
        match digits.parse::<u8>() {
            Ok(n) if (1 ..= DAYS.len()).contains(&(n as usize)) => Ok(Day(n)),
            _ => Err(Error::UnknownDay(s.to_owned())),
        }
    }
}

/// `day3.in`, or `day3test1.in` for the first worked example.
pub fn input_path(dir: &Path, day: Day, test: Option<u32>) -> PathBuf {
    dir.join(match test {
        None => format!("day{}.in", day.number()),
        Some(test) => format!("day{}test{}.in", day.number(), test),
    })
}

pub fn format_answer(day: Day, part: Part, answer: Answer) -> String {
    format!("Day {:02}, Part {}: {}", day.number(), part.number(), answer)
}

pub fn solve(day: Day, part: Part, input: &str) -> Result<Answer> {
    let time = Instant::now();
    let answer = day.solver()(part, input)?;
    tracing::info!(day = day.number(), part = part.number(), elapsed_s = time.elapsed().as_secs_f32(), "solved");
    Ok(answer)
}

/// Read the day's input and solve each requested part in order.
pub fn run(day: Day, parts: &[Part], path: &Path) -> Result<Vec<String>> {
    tracing::debug!(day = day.number(), path = %path.display(), "reading input");
    let input = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read input file {}", path.display()))?;
    parts.iter().map(|&part|
        solve(day, part, &input).map(|answer| format_answer(day, part, answer))
    ).collect()
}
