use crate::error::ParseError;
use crate::token::{Function, Operator, Token};
use std::mem;

/// An entry on an operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stacked {
    Operator(Operator),
    Open,
}

/// Shunting-yard state
///
/// Every open function gets its own operator stack, so precedence never reaches across the
/// boundary of a function's argument. There is always one more operator stack than open
/// functions; the first belongs to the outer expression.
#[derive(Debug, Default)]
struct Converter {
    output: Vec<Token>,
    functions: Vec<(Function, Vec<Token>)>,
    operators: Vec<Vec<Stacked>>,
    coefficient: bool,
}

impl Converter {
    fn new() -> Self {
        Converter {
            operators: vec![Vec::new()],
            ..Converter::default()
        }
    }

    /// Append to the innermost function's argument, or the output outside of any function
    fn emit(&mut self, token: Token) {
        match self.functions.last_mut() {
            Some((_, subtokens)) => subtokens.push(token),
            None => self.output.push(token),
        }
    }

    fn active(&mut self) -> Result<&mut Vec<Stacked>, ParseError> {
        self.operators
            .last_mut()
            .ok_or(ParseError::InvalidExpressionFormat)
    }

    /// Push the multiplication implied by a preceding coefficient, e.g. `2x`
    fn push_coefficient(&mut self) -> Result<(), ParseError> {
        if mem::take(&mut self.coefficient) {
            self.active()?.push(Stacked::Operator(Operator::Mul));
        }
        Ok(())
    }

    fn push_operator(&mut self, op: Operator) -> Result<(), ParseError> {
        loop {
            let stack = self.active()?;
            match stack.last() {
                Some(&Stacked::Operator(top)) if top.precedence() >= op.precedence() => {
                    stack.pop();
                    self.emit(Token::Operator(top));
                }
                _ => break,
            }
        }
        self.active()?.push(Stacked::Operator(op));
        Ok(())
    }

    /// Emit operators until an open parenthesis, returning whether one was found
    fn drain_until_open(&mut self) -> Result<bool, ParseError> {
        while let Some(top) = self.active()?.pop() {
            match top {
                Stacked::Operator(op) => self.emit(Token::Operator(op)),
                Stacked::Open => return Ok(true),
            }
        }
        Ok(false)
    }

    fn open_function(&mut self, func: Function) -> Result<(), ParseError> {
        self.push_coefficient()?;
        self.functions.push((func, Vec::new()));
        Ok(())
    }

    fn close_function(&mut self) -> Result<(), ParseError> {
        if self.drain_until_open()? || self.operators.len() < 2 {
            return Err(ParseError::InvalidExpressionFormat);
        }
        self.operators.pop();
        let (func, subtokens) = self
            .functions
            .pop()
            .ok_or(ParseError::InvalidExpressionFormat)?;
        self.emit(Token::Function(func, subtokens));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        if self.operators.len() != 1 || !self.functions.is_empty() || self.drain_until_open()? {
            Err(ParseError::InvalidExpressionFormat)
        } else {
            Ok(self.output)
        }
    }
}

/// Whether a `-` after this token negates rather than subtracts
fn is_prefix_position(prev: Option<&Token>) -> bool {
    matches!(
        prev,
        None | Some(Token::Operator(_) | Token::OpenParen | Token::FunctionOpen)
    )
}

/// Convert a tokenized infix expression into postfix order
///
/// Function arguments are not part of the returned sequence; each function token carries its own
/// argument in postfix order. Digits stay separate: every run of digits and decimal points is
/// terminated by a [Space][Token::Space] so that [condense][crate::condense()] can reassemble the
/// literals. Implicit multiplications after a coefficient (`2x`, `3(x + 1)`, `2sin(x)`) and
/// negations in prefix position (`-5`, `-(x + 1)`) are made explicit.
///
/// ```
/// use exprtree::{to_postfix, tokenize, Operator, Token};
///
/// let postfix = to_postfix(&tokenize("1 + 2 * 3").unwrap()).unwrap();
/// let shown: Vec<_> = postfix.iter().map(Token::show).collect();
/// assert_eq!(shown, ["1", " ", "2", " ", "3", " ", "*", "+"]);
/// ```
pub fn to_postfix(infix: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut conv = Converter::new();
    let mut prev: Option<&Token> = None;
    for (idx, token) in infix.iter().enumerate() {
        let next = infix.get(idx + 1);
        match token {
            Token::Space => continue,
            Token::Digit(_) | Token::Decimal => {
                if matches!(
                    next,
                    Some(Token::Variable | Token::OpenParen | Token::Constant(_) | Token::Function(..))
                ) {
                    conv.coefficient = true;
                }
                conv.emit(token.clone());
                if !next.map_or(false, Token::is_literal_part) {
                    conv.emit(Token::Space);
                }
            }
            Token::Negative | Token::Literal { .. } => conv.emit(token.clone()),
            Token::Constant(_) | Token::Variable => {
                conv.push_coefficient()?;
                conv.emit(token.clone());
            }
            &Token::Operator(Operator::Sub) if is_prefix_position(prev) => {
                let operand = infix[idx + 1..].iter().find(|token| **token != Token::Space);
                match operand {
                    Some(Token::Digit(_) | Token::Decimal) => conv.emit(Token::Negative),
                    Some(
                        Token::Function(..)
                        | Token::Constant(_)
                        | Token::Variable
                        | Token::OpenParen,
                    ) => {
                        conv.emit(Token::Negative);
                        conv.emit(Token::Digit(1));
                        conv.emit(Token::Space);
                        conv.active()?.push(Stacked::Operator(Operator::Mul));
                    }
                    _ => conv.push_operator(Operator::Sub)?,
                }
            }
            &Token::Operator(op) => conv.push_operator(op)?,
            &Token::Function(func, _) => conv.open_function(func)?,
            Token::FunctionOpen => conv.operators.push(Vec::new()),
            Token::FunctionClose => conv.close_function()?,
            Token::OpenParen => {
                conv.push_coefficient()?;
                conv.active()?.push(Stacked::Open);
            }
            Token::CloseParen => {
                if !conv.drain_until_open()? {
                    return Err(ParseError::InvalidExpressionFormat);
                }
            }
        }
        prev = Some(token);
    }
    conv.finish()
}

#[cfg(test)]
mod tests {
    use super::to_postfix;
    use crate::{tokenize, Function, Operator, ParseError, Token};

    fn shown(tokens: &[Token]) -> String {
        tokens.iter().map(Token::show).collect()
    }

    fn postfix(inp: &str) -> Result<Vec<Token>, ParseError> {
        to_postfix(&tokenize(inp)?)
    }

    #[test]
    fn precedence() {
        assert_eq!(shown(&postfix("1 + 2 * 3").unwrap()), "1 2 3 *+");
        assert_eq!(shown(&postfix("1 * 2 + 3").unwrap()), "1 2 *3 +");
        assert_eq!(shown(&postfix("2 ^ 3 * 4").unwrap()), "2 3 ^4 *");
    }

    #[test]
    fn left_associative() {
        assert_eq!(shown(&postfix("8 - 2 - 1").unwrap()), "8 2 -1 -");
        assert_eq!(shown(&postfix("8 / 2 / 2").unwrap()), "8 2 /2 /");
    }

    #[test]
    fn parentheses() {
        assert_eq!(shown(&postfix("(1 + 2) * 3").unwrap()), "1 2 +3 *");
    }

    #[test]
    fn multi_digit_literals() {
        assert_eq!(shown(&postfix("12.25+3").unwrap()), "12.25 3 +");
        assert_eq!(shown(&postfix("5. + 3").unwrap()), "5. 3 +");
    }

    #[test]
    fn coefficients() {
        assert_eq!(shown(&postfix("2x").unwrap()), "2 x*");
        assert_eq!(shown(&postfix("3(x + 1)").unwrap()), "3 x1 +*");
        assert_eq!(shown(&postfix("2pi").unwrap()), "2 pi*");
        let tokens = postfix("2sin(x)").unwrap();
        assert_eq!(
            tokens,
            [
                Token::Digit(2),
                Token::Space,
                Token::Function(Function::Sin, vec![Token::Variable]),
                Token::Operator(Operator::Mul),
            ]
        );
    }

    #[test]
    fn negation() {
        assert_eq!(shown(&postfix("-5 + 1").unwrap()), "-5 1 +");
        assert_eq!(shown(&postfix("3 - -5").unwrap()), "3 -5 -");
        assert_eq!(shown(&postfix("2^-1").unwrap()), "2 -1 ^");
        assert_eq!(shown(&postfix("5-4").unwrap()), "5 4 -");
    }

    #[test]
    fn distributed_negation() {
        assert_eq!(shown(&postfix("-(100 - -5)").unwrap()), "-1 100 -5 -*");
        assert_eq!(shown(&postfix("-x^2").unwrap()), "-1 x2 ^*");
    }

    #[test]
    fn function_scopes() {
        let tokens = postfix("sin(cos(x) + 4) * 2").unwrap();
        let cos = Token::Function(Function::Cos, vec![Token::Variable]);
        let sin = Token::Function(
            Function::Sin,
            vec![
                cos,
                Token::Digit(4),
                Token::Space,
                Token::Operator(Operator::Add),
            ],
        );
        assert_eq!(
            tokens,
            [
                sin,
                Token::Digit(2),
                Token::Space,
                Token::Operator(Operator::Mul),
            ]
        );
    }

    #[test]
    fn precedence_stays_in_scope() {
        // the outer `*` must not be emitted into the argument of `sqrt`
        let tokens = postfix("2 * sqrt(1 + x)").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(shown(tokens[2].subtokens().unwrap()), "1 x+");
        assert_eq!(tokens[3], Token::Operator(Operator::Mul));
    }

    #[test]
    fn unbalanced() {
        assert_eq!(postfix("(1 + 2"), Err(ParseError::InvalidExpressionFormat));
        assert_eq!(
            to_postfix(&[Token::Digit(1), Token::CloseParen]),
            Err(ParseError::InvalidExpressionFormat)
        );
        assert_eq!(
            to_postfix(&[Token::function(Function::Abs), Token::FunctionOpen]),
            Err(ParseError::InvalidExpressionFormat)
        );
    }
}
