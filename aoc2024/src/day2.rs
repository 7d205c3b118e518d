use crate::error::Error;
use crate::runner::{Answer, Part};
use itertools::Itertools;

const DAY: u8 = 2;

pub fn solve(part: Part, input: &str) -> Result<Answer, Error> {
    let reports = parse_reports(input)?;
    tracing::debug!(reports = reports.len(), "parsed reports");

    let check: fn(&[i64]) -> bool = match part {
        Part::One => is_strictly_safe,
        Part::Two => is_safe_with_dampener,
    };
    Ok(reports.iter().filter(|levels| check(levels.as_slice())).count() as Answer)
}

pub fn parse_reports(input: &str) -> Result<Vec<Vec<i64>>, Error> {
    input.lines().enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)|
            line.split_whitespace().map(|token|
                token.parse::<i64>().map_err(|_| Error::InvalidNumber {
                    day: DAY, line_no: i + 1, token: token.to_owned()
                })
            ).collect()
        ).collect()
}

/// Levels all rise or all fall, by 1 to 3 at each step.
pub fn is_strictly_safe(levels: &[i64]) -> bool {
    let [first, second, ..] = levels[..] else {return true};
    let trend = second.cmp(&first);
    levels.iter().tuple_windows().all(|(&x, &y)|
        y.cmp(&x) == trend && (1 ..= 3).contains(&x.abs_diff(y))
    )
}

/// Safe outright, or safe once any one level is dropped.
pub fn is_safe_with_dampener(levels: &[i64]) -> bool {
    is_strictly_safe(levels) || (0 .. levels.len()).any(|skip| {
        let dampened = levels.iter().enumerate()
            .filter_map(|(i, &level)| (i != skip).then_some(level))
            .collect::<Vec<_>>();
        is_strictly_safe(&dampened)
    })
}
