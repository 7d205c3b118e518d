#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("day {day}, line {line_no}: expected two numbers, got {line:?}")]
    MalformedLine {
        day: u8,
        line_no: usize,
        line: String,
    },

    #[error("day {day}, line {line_no}: {token:?} is not an integer")]
    InvalidNumber {
        day: u8,
        line_no: usize,
        token: String,
    },

    #[error("day {day}: answer does not fit in a signed 64-bit integer")]
    Overflow {day: u8},

    #[error("unknown day {0:?}")]
    UnknownDay(String),

    #[error("part must be 1 or 2, got {0}")]
    InvalidPart(u8),
}
