use crate::error::ParseError;
use crate::token::Token;
use std::mem;

/// Whether a postfix sequence has no grouping spaces left, including in function arguments
pub fn is_condensed(tokens: &[Token]) -> bool {
    tokens.iter().all(|token| match token {
        Token::Space => false,
        Token::Function(_, subtokens) => is_condensed(subtokens),
        _ => true,
    })
}

/// Fold runs of digits, decimal points and signs into single literals and drop grouping spaces
///
/// This recurses into the argument of every function. Sequences that are already condensed are
/// left untouched. On error the contents of `tokens` are unspecified.
///
/// ```
/// use exprtree::{condense, to_postfix, tokenize, Token};
///
/// let mut tokens = to_postfix(&tokenize("12.5 + 3").unwrap()).unwrap();
/// condense(&mut tokens).unwrap();
/// let shown: Vec<_> = tokens.iter().map(Token::show).collect();
/// assert_eq!(shown, ["12.5", "3", "+"]);
/// ```
pub fn condense(tokens: &mut Vec<Token>) -> Result<(), ParseError> {
    if is_condensed(tokens) {
        return Ok(());
    }
    let mut condensed = Vec::with_capacity(tokens.len());
    let mut text = String::new();
    let mut remaining = mem::take(tokens).into_iter().peekable();
    while let Some(token) = remaining.next() {
        match token {
            Token::Digit(_) | Token::Decimal | Token::Negative => {
                text.push_str(token.show());
                if !remaining.peek().map_or(false, Token::is_literal_part) {
                    condensed.push(literal(mem::take(&mut text))?);
                }
            }
            Token::Function(func, mut subtokens) => {
                condense(&mut subtokens)?;
                condensed.push(Token::Function(func, subtokens));
            }
            Token::Space => {}
            other => condensed.push(other),
        }
    }
    *tokens = condensed;
    Ok(())
}

fn literal(text: String) -> Result<Token, ParseError> {
    match text.parse() {
        Ok(value) => Ok(Token::Literal { value, text }),
        Err(_) => Err(ParseError::InvalidLiteral(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::{condense, is_condensed};
    use crate::{to_postfix, tokenize, Function, Operator, ParseError, Token};

    fn condensed(inp: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = to_postfix(&tokenize(inp)?)?;
        condense(&mut tokens)?;
        Ok(tokens)
    }

    fn lit(text: &str) -> Token {
        Token::literal(text).unwrap()
    }

    #[test]
    fn multi_digit() {
        assert_eq!(
            condensed("106.8 * 14.9").unwrap(),
            [lit("106.8"), lit("14.9"), Token::Operator(Operator::Mul)]
        );
    }

    #[test]
    fn negative_literal() {
        assert_eq!(
            condensed("3 - -5.5").unwrap(),
            [lit("3"), lit("-5.5"), Token::Operator(Operator::Sub)]
        );
    }

    #[test]
    fn inside_functions() {
        let tokens = condensed("sqrt(cbrt(27) + 12)").unwrap();
        let cbrt = Token::Function(Function::Cbrt, vec![lit("27")]);
        assert_eq!(
            tokens,
            [Token::Function(
                Function::Sqrt,
                vec![cbrt, lit("12"), Token::Operator(Operator::Add)]
            )]
        );
        assert!(is_condensed(&tokens));
    }

    #[test]
    fn idempotent() {
        let once = condensed("2x + sin(1.5)").unwrap();
        let mut twice = once.clone();
        condense(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn detects_nested_spaces() {
        let nested = [Token::Function(
            Function::Abs,
            vec![Token::Digit(1), Token::Space],
        )];
        assert!(!is_condensed(&nested));
        assert!(is_condensed(&[Token::Variable]));
    }

    #[test]
    fn invalid_literal() {
        assert_eq!(
            condensed("1.2.3 + 1"),
            Err(ParseError::InvalidLiteral("1.2.3".into()))
        );
        assert_eq!(condensed(". + 1"), Err(ParseError::InvalidLiteral(".".into())));
    }
}
