use thiserror::Error;

/// An error raised while turning an infix string into an expression tree
///
/// All of these are raised at construction time; evaluating a built tree never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside of the recognized grammar
    #[error("unknown character '{0}'")]
    UnknownCharacter(char),
    /// A run of letters that doesn't name a known function
    #[error("unknown function \"{0}\"")]
    UnknownFunction(String),
    /// Unbalanced parentheses, a function without its argument, or a dangling operator
    #[error("invalid expression format")]
    InvalidExpressionFormat,
    /// A reassembled numeric literal that isn't a valid number, e.g. `1.2.3`
    #[error("invalid numeric literal \"{0}\"")]
    InvalidLiteral(String),
}
