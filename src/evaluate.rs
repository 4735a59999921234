//! Numeric evaluation of expression trees
use crate::token::{Function, Operator};
use crate::tree::Node;
use rust_decimal::{Decimal, RoundingStrategy};

impl Operator {
    /// Apply the operator to two operands
    ///
    /// Division by zero follows IEEE-754, so `1 / 0` is infinite and `0 / 0` is NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Pow => left.powf(right),
        }
    }
}

impl Function {
    /// Apply the function to its argument
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Sin => arg.sin(),
            Function::Cos => arg.cos(),
            Function::Tan => arg.tan(),
            Function::Asin => arg.asin(),
            Function::Acos => arg.acos(),
            Function::Atan => arg.atan(),
            Function::Sinh => arg.sinh(),
            Function::Cosh => arg.cosh(),
            Function::Tanh => arg.tanh(),
            Function::Sqrt => arg.sqrt(),
            Function::Cbrt => arg.cbrt(),
            Function::Log => arg.log10(),
            Function::Ln => arg.ln(),
            Function::Abs => arg.abs(),
        }
    }
}

impl Node {
    /// Evaluate the subtree with `x` bound to the given value, without rounding
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Node::Literal(lit) => lit.value,
            Node::Constant(constant) => constant.value(),
            Node::Variable => x,
            Node::Binary(binary) => binary
                .op
                .apply(binary.left().evaluate(x), binary.right().evaluate(x)),
            Node::Func(func) => func.func.apply(func.arg().evaluate(x)),
        }
    }
}

/// Round to three decimal places, with ties away from zero
///
/// The rounding happens on the exact binary value of the input. Values that are infinite or NaN,
/// and values too large to carry a fraction, are returned unchanged.
///
/// ```
/// use exprtree::round3;
///
/// assert_eq!(round3(12.2 / 9.0), 1.356);
/// assert_eq!(round3(-0.0625), -0.063);
/// ```
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64_retain(value)
        .map(|dec| dec.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|dec| dec.to_string().parse().ok())
        .unwrap_or(value)
}
