use crate::error::Error;
use crate::runner::{Answer, Part};
use regex::Regex;
use std::sync::LazyLock;

const DAY: u8 = 3;

static MUL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)").unwrap());
static TOGGLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"do\(\)|don't\(\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {Multiply(u64, u64), Enable, Disable}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {pub kind: OpKind, pub position: usize}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fold {pub total: u64, pub enabled: bool}

pub fn solve(part: Part, input: &str) -> Result<Answer, Error> {
    let lines = input.lines().map(str::trim).filter(|line| !line.is_empty());
    let total = match part {
        Part::One => lines.map(sum_products).sum::<u64>(),
        Part::Two => {
            // do()/don't() state carries over from one line into the next
            let mut enabled = true;
            lines.map(|line| {
                let fold = fold_operations(line, enabled);
                enabled = fold.enabled;
                fold.total
            }).sum::<u64>()
        }
    };
    Answer::try_from(total).map_err(|_| Error::Overflow {day: DAY})
}

fn operands(caps: &regex::Captures) -> (u64, u64) {
    (
        caps[1].parse().expect("operand is 1-3 digits"),
        caps[2].parse().expect("operand is 1-3 digits"),
    )
}

/// Every `mul(X,Y)` in the text, toggles ignored.
pub fn sum_products(text: &str) -> u64 {
    MUL_RE.captures_iter(text).map(|caps| {
        let (x, y) = operands(&caps);
        x * y
    }).sum()
}

/// All multiplies and toggles in the text, ordered by where they start.
pub fn scan_operations(text: &str) -> Vec<Operation> {
    let multiplies = MUL_RE.captures_iter(text).map(|caps| {
        let (x, y) = operands(&caps);
        Operation {kind: OpKind::Multiply(x, y), position: caps.get(0).map_or(0, |m| m.start())}
    });
    let toggles = TOGGLE_RE.find_iter(text).map(|m| Operation {
        kind: if m.as_str() == "do()" {OpKind::Enable} else {OpKind::Disable},
        position: m.start(),
    });
    let mut ops = multiplies.chain(toggles).collect::<Vec<_>>();
    ops.sort_by_key(|op| op.position);
    ops
}

pub fn fold_operations(text: &str, enabled: bool) -> Fold {
    scan_operations(text).into_iter().fold(Fold {total: 0, enabled}, |mut fold, op| {
        match op.kind {
            OpKind::Enable => fold.enabled = true,
            OpKind::Disable => fold.enabled = false,
            OpKind::Multiply(x, y) => if fold.enabled {fold.total += x * y},
        }
        fold
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "mul(2,4)don't()mul(5,5)mul(11,8)do()mul(8,5)";

    #[test]
    fn test_toggled_fold() {
        assert_eq!(fold_operations(EXAMPLE, true), Fold {total: 48, enabled: true});
        assert_eq!(solve(Part::Two, EXAMPLE), Ok(48));
    }

    #[test]
    fn test_untoggled_sum() {
        assert_eq!(sum_products(EXAMPLE), 161);
        assert_eq!(
            solve(Part::One, "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))"),
            Ok(161)
        );
    }

    #[test]
    fn test_operand_width() {
        assert_eq!(sum_products("mul(1234,5)mul(123,4)mul( 2,3)mul(2,3 )"), 492);
    }

    #[test]
    fn test_scan_orders_by_position() {
        let ops = scan_operations("don't()mul(1,2)do()");
        assert_eq!(ops, vec![
            Operation {kind: OpKind::Disable, position: 0},
            Operation {kind: OpKind::Multiply(1, 2), position: 7},
            Operation {kind: OpKind::Enable, position: 15},
        ]);
    }

    #[test]
    fn test_fold_starts_from_given_state() {
        assert_eq!(fold_operations("mul(3,3)", false), Fold {total: 0, enabled: false});
        assert_eq!(fold_operations("mul(3,3)do()mul(2,2)", false), Fold {total: 4, enabled: true});
    }

    #[test]
    fn test_disable_carries_across_lines() {
        let input = "mul(1,1)don't()\n\nmul(5,5)\ndo()mul(2,3)\n";
        assert_eq!(solve(Part::One, input), Ok(32));
        assert_eq!(solve(Part::Two, input), Ok(7));
    }
}
