use crate::error::Error;
use crate::runner::{Answer, Part};
use rustc_hash::FxHashMap;
use std::iter::zip;

const DAY: u8 = 1;

pub fn solve(part: Part, input: &str) -> Result<Answer, Error> {
    let (lefts, rights) = parse_lists(input)?;
    tracing::debug!(pairs = lefts.len(), "parsed location lists");

    match part {
        Part::One => total_distance(lefts, rights),
        Part::Two => similarity_score(&lefts, &rights),
    }
}

/// Split each non-blank line into a left and a right location id.
pub fn parse_lists(input: &str) -> Result<(Vec<i64>, Vec<i64>), Error> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for (line_no, line) in input.lines().enumerate().map(|(i, line)| (i + 1, line.trim())) {
        if line.is_empty() {continue};
        let [left, right] = line.split_whitespace().collect::<Vec<_>>()[..] else {
            return Err(Error::MalformedLine {day: DAY, line_no, line: line.to_owned()});
        };
        lefts.push(parse_id(left, line_no)?);
        rights.push(parse_id(right, line_no)?);
    }
    Ok((lefts, rights))
}

fn parse_id(token: &str, line_no: usize) -> Result<i64, Error> {
    token.parse().map_err(|_| Error::InvalidNumber {day: DAY, line_no, token: token.to_owned()})
}

/// Pair the lists smallest-to-smallest and add up how far apart each pair is.
pub fn total_distance(mut lefts: Vec<i64>, mut rights: Vec<i64>) -> Result<Answer, Error> {
    lefts.sort_unstable();
    rights.sort_unstable();
    zip(lefts, rights)
        .try_fold(0 as Answer, |total, (left, right)|
            Answer::try_from(left.abs_diff(right)).ok().and_then(|diff| total.checked_add(diff))
        )
        .ok_or(Error::Overflow {day: DAY})
}

/// Sum of every left id weighted by how often it shows up on the right.
pub fn similarity_score(lefts: &[i64], rights: &[i64]) -> Result<Answer, Error> {
    let mut memo: FxHashMap<i64, Option<i64>> = FxHashMap::default();
    lefts.iter()
        .try_fold(0 as Answer, |total, &left| {
            let similarity = *memo.entry(left).or_insert_with(|| {
                let count = rights.iter().filter(|&&right| right == left).count();
                i64::try_from(count).ok().and_then(|count| left.checked_mul(count))
            });
            similarity.and_then(|similarity| total.checked_add(similarity))
        })
        .ok_or(Error::Overflow {day: DAY})
}
