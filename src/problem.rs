//! The arithmetic problem model: one fact per worksheet slot, plus a
//! difficulty ranking over problems.

use crate::error::SheetError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One of the four recognized arithmetic operators.
///
/// The derived order doubles as the difficulty precedence: any addition
/// problem ranks easier than any subtraction problem, and so on through
/// multiplication and division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The glyph drawn on the worksheet for this operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// The full operation name, e.g. for document metadata
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Sub => "subtraction",
            Operator::Mul => "multiplication",
            Operator::Div => "division",
        }
    }

    /// Evaluate `a <op> b`, or [None] on overflow or division by zero.
    /// Division is integer division; the remainder is the problem's to keep.
    pub fn apply(&self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => a.checked_div(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(SheetError::InvalidOperator(other.to_string())),
        }
    }
}

/// A single arithmetic fact: two operands and an operator.
///
/// Operands come from an injected factory at construction time, which keeps
/// the problem's identity separate from how the numbers were chosen and makes
/// construction deterministic under test. Problems are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathProblem {
    a: i64,
    b: i64,
    operator: Operator,
}

impl MathProblem {
    /// Build a problem from a factory producing the `(a, b)` operand pair.
    /// The factory is trusted: validating operand ranges is the sampler's
    /// job, not the problem's.
    pub fn new(number_factory: impl FnOnce() -> (i64, i64), operator: Operator) -> MathProblem {
        let (a, b) = number_factory();
        MathProblem { a, b, operator }
    }

    /// Build a problem from a factory and an operator symbol such as `"+"`.
    /// Fails with [SheetError::InvalidOperator] for any unrecognized symbol.
    pub fn from_symbol(
        number_factory: impl FnOnce() -> (i64, i64),
        symbol: &str,
    ) -> Result<MathProblem, SheetError> {
        let operator = symbol.parse()?;
        Ok(MathProblem::new(number_factory, operator))
    }

    /// The left operand
    pub fn a(&self) -> i64 {
        self.a
    }

    /// The right operand
    pub fn b(&self) -> i64 {
        self.b
    }

    /// The operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The evaluated answer, or [None] on overflow or division by zero
    pub fn answer(&self) -> Option<i64> {
        self.operator.apply(self.a, self.b)
    }

    /// Whether this division problem leaves a remainder. Only meaningful for
    /// division; any other operator fails with [SheetError::NotApplicable].
    pub fn has_remainder(&self) -> Result<bool, SheetError> {
        if self.operator != Operator::Div {
            return Err(SheetError::NotApplicable {
                operator: self.operator,
            });
        }
        // division by zero has no whole answer, so rank it with the
        // remainder-bearing problems
        Ok(self.a.checked_rem(self.b).map_or(true, |r| r != 0))
    }

    /// The problem's difficulty rank. Comparing ranks yields a strict weak
    /// ordering over any set of problems:
    ///
    /// * different operators compare by `+ < - < * < /`;
    /// * within `+`, by `min(a, b)`;
    /// * within `-`, by `max(a, b)`;
    /// * within `*`, by the product `a * b`;
    /// * within `/`, a non-zero remainder always ranks harder than a zero
    ///   remainder, then by the combined digit count of the operands.
    pub fn difficulty(&self) -> Difficulty {
        let (major, minor) = match self.operator {
            Operator::Add => (self.a.min(self.b), 0),
            Operator::Sub => (self.a.max(self.b), 0),
            Operator::Mul => (self.a.saturating_mul(self.b), 0),
            Operator::Div => {
                let remainder = self.a.checked_rem(self.b).map_or(true, |r| r != 0);
                (remainder as i64, digits(self.a) + digits(self.b))
            }
        };
        Difficulty {
            operator: self.operator,
            major,
            minor,
        }
    }

    /// Compare two problems by difficulty; usable directly with
    /// `sort_by(MathProblem::cmp_difficulty)`
    pub fn cmp_difficulty(&self, other: &MathProblem) -> Ordering {
        self.difficulty().cmp(&other.difficulty())
    }
}

impl fmt::Display for MathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.operator, self.b)
    }
}

/// An opaque, totally ordered difficulty rank. Two distinct problems may
/// share a rank (e.g. `2 + 3` and `3 + 2`), which is what makes the induced
/// problem ordering weak rather than total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty {
    operator: Operator,
    major: i64,
    minor: i64,
}

/// The number of decimal digits in `n`, ignoring any sign
fn digits(n: i64) -> i64 {
    let mut n = n.unsigned_abs();
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(a: i64, b: i64, operator: Operator) -> MathProblem {
        MathProblem::new(|| (a, b), operator)
    }

    #[test]
    fn exposes_the_factory_operands_for_every_operator() {
        for operator in Operator::ALL {
            let p = MathProblem::new(|| (1, 2), operator);
            assert_eq!(p.a(), 1);
            assert_eq!(p.b(), 2);
            assert_eq!(p.operator(), operator);
        }
    }

    #[test]
    fn parses_the_four_operator_symbols() {
        for (symbol, operator) in [
            ("+", Operator::Add),
            ("-", Operator::Sub),
            ("*", Operator::Mul),
            ("/", Operator::Div),
        ] {
            let p = MathProblem::from_symbol(|| (1, 2), symbol).expect("valid symbol");
            assert_eq!(p.operator(), operator);
        }
    }

    #[test]
    fn names_every_operator() {
        assert_eq!(Operator::Add.name(), "addition");
        assert_eq!(Operator::Sub.name(), "subtraction");
        assert_eq!(Operator::Mul.name(), "multiplication");
        assert_eq!(Operator::Div.name(), "division");
    }

    #[test]
    fn rejects_unknown_operator_symbols() {
        for symbol in ["x", "%", "", "plus", "÷"] {
            assert!(matches!(
                MathProblem::from_symbol(|| (1, 2), symbol),
                Err(SheetError::InvalidOperator(_))
            ));
        }
    }

    #[test]
    fn operators_rank_addition_easiest_and_division_hardest() {
        // irrespective of operand values
        let add = problem(999, 999, Operator::Add);
        let sub = problem(1, 1, Operator::Sub);
        let mul = problem(1, 1, Operator::Mul);
        let div = problem(1, 1, Operator::Div);
        assert_eq!(add.cmp_difficulty(&sub), Ordering::Less);
        assert_eq!(sub.cmp_difficulty(&mul), Ordering::Less);
        assert_eq!(mul.cmp_difficulty(&div), Ordering::Less);
    }

    #[test]
    fn addition_ranks_by_the_smaller_operand() {
        let easy = problem(2, 3, Operator::Add);
        let hard = problem(5, 5, Operator::Add);
        assert_eq!(easy.cmp_difficulty(&hard), Ordering::Less);
    }

    #[test]
    fn subtraction_ranks_by_the_larger_operand() {
        let easy = problem(9, 3, Operator::Sub);
        let hard = problem(10, 1, Operator::Sub);
        assert_eq!(easy.cmp_difficulty(&hard), Ordering::Less);
    }

    #[test]
    fn multiplication_ranks_by_the_product() {
        let easy = problem(2, 9, Operator::Mul);
        let hard = problem(4, 5, Operator::Mul);
        assert_eq!(easy.cmp_difficulty(&hard), Ordering::Less);
    }

    #[test]
    fn division_remainder_dominates_magnitude() {
        let uneven = problem(7, 2, Operator::Div);
        let even = problem(100, 10, Operator::Div);
        assert_eq!(even.cmp_difficulty(&uneven), Ordering::Less);
    }

    #[test]
    fn division_ties_break_on_digit_count() {
        let small = problem(8, 2, Operator::Div);
        let large = problem(100, 10, Operator::Div);
        assert_eq!(small.cmp_difficulty(&large), Ordering::Less);
    }

    #[test]
    fn remainder_check_applies_to_division_only() {
        assert!(problem(7, 2, Operator::Div).has_remainder().expect("division"));
        assert!(!problem(8, 2, Operator::Div).has_remainder().expect("division"));
        for operator in [Operator::Add, Operator::Sub, Operator::Mul] {
            assert!(matches!(
                problem(7, 2, operator).has_remainder(),
                Err(SheetError::NotApplicable { .. })
            ));
        }
    }

    #[test]
    fn difficulty_is_a_strict_weak_ordering() {
        let mut problems = Vec::new();
        for operator in Operator::ALL {
            for a in 1..=12 {
                for b in 1..=12 {
                    problems.push(problem(a, b, operator));
                }
            }
        }

        // irreflexive
        for p in &problems {
            assert_eq!(p.cmp_difficulty(p), Ordering::Equal);
        }

        // ranks are totally ordered, so comparing through them is transitive;
        // spot-check the induced relation anyway on a coarse grid
        for p1 in problems.iter().step_by(7) {
            for p2 in problems.iter().step_by(11) {
                for p3 in problems.iter().step_by(13) {
                    if p1.cmp_difficulty(p2) == Ordering::Less
                        && p2.cmp_difficulty(p3) == Ordering::Less
                    {
                        assert_eq!(p1.cmp_difficulty(p3), Ordering::Less);
                    }
                }
            }
        }

        // sorting must be consistent with pairwise comparison
        let mut sorted = problems.clone();
        sorted.sort_by(MathProblem::cmp_difficulty);
        for pair in sorted.windows(2) {
            assert_ne!(pair[0].cmp_difficulty(&pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn displays_as_the_rendered_problem_text() {
        assert_eq!(problem(12, 3, Operator::Add).to_string(), "12 + 3");
        assert_eq!(problem(9, 4, Operator::Div).to_string(), "9 / 4");
    }
}
