use crate::error::ParseError;
#[cfg(not(feature = "qp-trie"))]
use crate::prefix_map::HashPrefixMap;
use crate::prefix_map::PrefixMap;
#[cfg(feature = "qp-trie")]
use crate::prefix_map::QpTriePrefixMap;
use crate::token::{Constant, Function, Operator, Token, FUNCTIONS};
use lazy_static::lazy_static;
use std::iter::FusedIterator;

/// The prefix map holding the standard function names
#[cfg(feature = "qp-trie")]
pub type DefaultFunctions = QpTriePrefixMap<&'static str, Function>;
/// The prefix map holding the standard function names
#[cfg(not(feature = "qp-trie"))]
pub type DefaultFunctions = HashPrefixMap<&'static str, Function>;

lazy_static! {
    static ref DEFAULT_FUNCTIONS: DefaultFunctions = DefaultFunctions::from_iter(FUNCTIONS);
}

/// A tokenizer over an infix expression
///
/// Each character becomes one token, except `pi` and function names. A function name is always
/// followed by a [FunctionOpen][Token::FunctionOpen] token standing for its parenthesis. Function
/// closes are only known once the whole input has been read, so use
/// [tokenize][Tokenizer::tokenize] to get a complete token sequence.
///
/// The iterator stops after the first error.
///
/// # Example
/// ```
/// use exprtree::{Token, Tokenizer};
///
/// let tokens: Result<Vec<_>, _> = Tokenizer::new("2x").collect();
/// assert_eq!(tokens.unwrap(), [Token::Digit(2), Token::Variable]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer<'a, 'b, T> {
    remaining: &'a str,
    functions: &'b T,
    open_pending: bool,
}

impl<'a> Tokenizer<'a, 'static, DefaultFunctions> {
    /// Create a new tokenizer that recognizes the standard [FUNCTIONS]
    pub fn new(inp: &'a str) -> Self {
        Self::with_functions(inp, &DEFAULT_FUNCTIONS)
    }
}

impl<'a, 'b, T> Tokenizer<'a, 'b, T> {
    /// Create a new tokenizer with a custom function table
    ///
    /// ```
    /// use exprtree::prefix_map::HashPrefixMap;
    /// use exprtree::{Function, Token, Tokenizer};
    ///
    /// let functions = HashPrefixMap::from_iter([("sen", Function::Sin)]);
    /// let tokens = Tokenizer::with_functions("sen(x)", &functions).tokenize().unwrap();
    /// assert_eq!(tokens[0], Token::function(Function::Sin));
    /// ```
    pub fn with_functions(inp: &'a str, functions: &'b T) -> Self {
        Tokenizer {
            remaining: inp,
            functions,
            open_pending: false,
        }
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<Token, ParseError>> {
        self.remaining = "";
        self.open_pending = false;
        Some(Err(err))
    }
}

impl<'a, 'b, T> Tokenizer<'a, 'b, T>
where
    T: PrefixMap<Function>,
{
    /// Tokenize all remaining input and mark every function's closing parenthesis
    pub fn tokenize(self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = self.collect::<Result<Vec<_>, _>>()?;
        mark_function_closes(&mut tokens)?;
        Ok(tokens)
    }

    fn next_function(&self) -> Result<(Function, &'a str), ParseError> {
        let inp = self.remaining;
        match self.functions.get_longest_prefix(inp) {
            Some((len, &func)) if len > 0 => inp[len..]
                .strip_prefix('(')
                .map(|rest| (func, rest))
                .ok_or(ParseError::InvalidExpressionFormat),
            _ => {
                let name = inp.chars().take_while(char::is_ascii_alphabetic).collect();
                Err(ParseError::UnknownFunction(name))
            }
        }
    }
}

impl<'a, 'b, T> Iterator for Tokenizer<'a, 'b, T>
where
    T: PrefixMap<Function>,
{
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.open_pending {
            self.open_pending = false;
            return Some(Ok(Token::FunctionOpen));
        }
        let remaining = self.remaining;
        let mut chars = remaining.chars();
        let chr = chars.next()?;
        let rest = chars.as_str();
        let (token, rest) = match chr {
            ws if ws.is_whitespace() => (Token::Space, rest),
            '0'..='9' => (Token::Digit(chr as u8 - b'0'), rest),
            '.' => (Token::Decimal, rest),
            '(' => (Token::OpenParen, rest),
            ')' => (Token::CloseParen, rest),
            'x' => (Token::Variable, rest),
            'e' => (Token::Constant(Constant::E), rest),
            'p' if rest.starts_with('i') => (Token::Constant(Constant::Pi), &rest[1..]),
            letter if letter.is_ascii_alphabetic() => match self.next_function() {
                Ok((func, rest)) => {
                    self.open_pending = true;
                    (Token::function(func), rest)
                }
                Err(err) => return self.fail(err),
            },
            other => match Operator::from_char(other) {
                Some(op) => (Token::Operator(op), rest),
                None => return self.fail(ParseError::UnknownCharacter(other)),
            },
        };
        self.remaining = rest;
        Some(Ok(token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.open_pending);
        (pending, Some(self.remaining.len() + pending))
    }
}

impl<'a, 'b, T> FusedIterator for Tokenizer<'a, 'b, T> where T: PrefixMap<Function> {}

/// Retag the parenthesis balancing each function open as a function close
fn mark_function_closes(tokens: &mut [Token]) -> Result<(), ParseError> {
    // true for a function's parenthesis
    let mut opened = Vec::new();
    for token in tokens.iter_mut() {
        match token {
            Token::FunctionOpen => opened.push(true),
            Token::OpenParen => opened.push(false),
            Token::CloseParen => match opened.pop() {
                Some(true) => *token = Token::FunctionClose,
                Some(false) => {}
                None => return Err(ParseError::InvalidExpressionFormat),
            },
            _ => {}
        }
    }
    if opened.contains(&true) {
        Err(ParseError::InvalidExpressionFormat)
    } else {
        Ok(())
    }
}

/// Tokenize an infix expression with the standard functions
///
/// ```
/// use exprtree::{tokenize, Token};
///
/// let tokens = tokenize("(1)").unwrap();
/// assert_eq!(tokens, [Token::OpenParen, Token::Digit(1), Token::CloseParen]);
/// ```
pub fn tokenize(inp: &str) -> Result<Vec<Token>, ParseError> {
    Tokenizer::new(inp).tokenize()
}
