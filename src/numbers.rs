//! Operand sampling: draws `(a, b)` pairs and rejects any pair whose answer
//! falls outside the configured answer range.

use crate::error::SheetError;
use crate::problem::Operator;
use rand::Rng;

/// How many rejected pairs the sampler tolerates before concluding the
/// configured ranges are unsatisfiable.
const MAX_ATTEMPTS: u32 = 10_000;

/// The configured operand and answer bounds, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRange {
    min_number: i64,
    max_number: i64,
    min_answer: i64,
    max_answer: i64,
}

impl OperandRange {
    /// Validate the bounds. Fails with [SheetError::InvalidRange] when a
    /// minimum exceeds its maximum.
    pub fn new(
        min_number: i64,
        max_number: i64,
        min_answer: i64,
        max_answer: i64,
    ) -> Result<OperandRange, SheetError> {
        if min_number > max_number {
            return Err(SheetError::InvalidRange {
                what: "operand",
                min: min_number,
                max: max_number,
            });
        }
        if min_answer > max_answer {
            return Err(SheetError::InvalidRange {
                what: "answer",
                min: min_answer,
                max: max_answer,
            });
        }
        Ok(OperandRange {
            min_number,
            max_number,
            min_answer,
            max_answer,
        })
    }

    pub fn min_number(&self) -> i64 {
        self.min_number
    }

    pub fn max_number(&self) -> i64 {
        self.max_number
    }

    /// Whether an evaluated answer is acceptable
    pub fn accepts_answer(&self, answer: i64) -> bool {
        (self.min_answer..=self.max_answer).contains(&answer)
    }
}

/// Draw an operand pair for `operator`, resampling until the evaluated answer
/// lands within the configured answer range. Divisors are kept strictly
/// positive.
///
/// Gives up with [SheetError::ExhaustedSampling] if no acceptable pair turns
/// up within the attempt budget.
pub fn sample_pair<R: Rng + ?Sized>(
    rng: &mut R,
    range: &OperandRange,
    operator: Operator,
) -> Result<(i64, i64), SheetError> {
    let b_min = if operator == Operator::Div {
        range.min_number.max(1)
    } else {
        range.min_number
    };
    if b_min > range.max_number {
        return Err(SheetError::InvalidRange {
            what: "divisor",
            min: b_min,
            max: range.max_number,
        });
    }

    for _ in 0..MAX_ATTEMPTS {
        let a = rng.random_range(range.min_number..=range.max_number);
        let b = rng.random_range(b_min..=range.max_number);
        if let Some(answer) = operator.apply(a, b) {
            if range.accepts_answer(answer) {
                return Ok((a, b));
            }
        }
    }

    Err(SheetError::ExhaustedSampling {
        attempts: MAX_ATTEMPTS,
    })
}
