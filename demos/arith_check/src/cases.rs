use std::fmt;

use bitarith_math::{add, divide, subtract, ArithmeticError};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Op {
    Add,
    Sub,
    Div,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Div => '/',
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Op::Add => "Testing addition without '+' operator:",
            Op::Sub => "Testing subtraction without '-' operator:",
            Op::Div => "Testing division without '/' operator:",
        }
    }
}

/// Table switches for the `suite` subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteOptions {
    pub include_zero_divisor: bool,
    pub boundaries: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub op: Op,
    pub a: i32,
    pub b: i32,
}

/// Result of running one case against the native operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct(i32),
    /// Both sides rejected the input (zero divisor)
    Rejected(ArithmeticError),
    Incorrect {
        result: Result<i32, ArithmeticError>,
        expected: Option<i32>,
    },
}

impl Outcome {
    pub fn is_expected(&self) -> bool {
        !matches!(self, Outcome::Incorrect { .. })
    }
}

impl Case {
    pub fn new(op: Op, a: i32, b: i32) -> Self {
        Self { op, a, b }
    }

    pub fn evaluate(&self) -> Outcome {
        let (result, expected) = match self.op {
            Op::Add => (Ok(add(self.a, self.b)), Some(self.a.wrapping_add(self.b))),
            Op::Sub => (Ok(subtract(self.a, self.b)), Some(self.a.wrapping_sub(self.b))),
            Op::Div => {
                let native = if self.b == 0 {
                    None
                } else {
                    Some(self.a.wrapping_div(self.b))
                };
                (divide(self.a, self.b), native)
            }
        };

        match (result, expected) {
            (Ok(r), Some(e)) if r == e => Outcome::Correct(r),
            (Err(err), None) => Outcome::Rejected(err),
            (result, expected) => Outcome::Incorrect { result, expected },
        }
    }

    /// Renders a line like `7 / 2 = 3 (Correct)`.
    pub fn report(&self, outcome: &Outcome) -> String {
        let lhs = format!("{} {} {} =", self.a, self.op.symbol(), self.b);
        match outcome {
            Outcome::Correct(r) => format!("{} {} (Correct)", lhs, r),
            Outcome::Rejected(err) => format!("{} {}", lhs, err),
            Outcome::Incorrect { result, expected } => {
                let got = match result {
                    Ok(r) => r.to_string(),
                    Err(err) => err.to_string(),
                };
                let want = match expected {
                    Some(e) => e.to_string(),
                    None => ArithmeticError::DivisionByZero.to_string(),
                };
                format!("{} {} (Incorrect, expected {})", lhs, got, want)
            }
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.op.symbol(), self.b)
    }
}

/// Built-in cases for one operation, in the order they are printed.
pub fn table(op: Op, opts: SuiteOptions) -> Vec<Case> {
    let mut pairs: Vec<(i32, i32)> = match op {
        Op::Add => vec![
            (5, 3),
            (-2, 7),
            (0, 0),
            (-5, -3),
            (100, 200),
            (i32::MAX, 1),
            (-100, 100),
        ],
        Op::Div => vec![
            (10, 2),
            (15, 3),
            (8, 4),
            (7, 2),
            (100, 10),
            (-15, 3),
            (15, -3),
            (0, 5),
            (1024, 2),
        ],
        Op::Sub => vec![(10, 3), (5, 8), (0, 0), (-5, -3), (100, 50)],
    };

    if op == Op::Div && opts.include_zero_divisor {
        pairs.push((10, 0));
    }

    if opts.boundaries {
        pairs.extend_from_slice(match op {
            Op::Add => &[(i32::MIN, -1), (i32::MAX, i32::MAX), (i32::MIN, i32::MIN)][..],
            Op::Div => &[
                (i32::MIN, -1),
                (i32::MIN, 2),
                (i32::MIN, i32::MIN),
                (i32::MAX, i32::MIN),
                (i32::MAX, -1),
            ][..],
            Op::Sub => &[(0, i32::MIN), (-1, i32::MIN), (i32::MIN, 1), (i32::MIN, i32::MIN)][..],
        });
    }

    pairs.into_iter().map(|(a, b)| Case::new(op, a, b)).collect()
}
