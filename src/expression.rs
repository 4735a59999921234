use crate::condense::condense;
use crate::error::ParseError;
use crate::evaluate::round3;
use crate::postfix::to_postfix;
use crate::prefix_map::PrefixMap;
use crate::token::{Function, Token};
use crate::tokenizer::Tokenizer;
use crate::tree::{build_tree, Node};
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// A parsed single-variable expression, ready to be evaluated
///
/// Construction runs the whole pipeline: tokenizing, conversion to postfix, condensing of
/// literals, and building of the tree. It either succeeds with a complete tree or fails with the
/// first [ParseError]. The result is immutable.
///
/// ```
/// use exprtree::ExpressionTree;
///
/// let tree = ExpressionTree::new("2x + sin(pi / 2)").unwrap();
/// assert_eq!(tree.solve(), 1.0);
/// assert_eq!(tree.solve_at(3.0), 7.0);
/// assert_eq!(tree.print_tokens(), "2 x * pi 2 / sin +");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    expression: String,
    tokens: Vec<Token>,
    root: Node,
}

impl ExpressionTree {
    /// Parse an expression with the standard functions
    pub fn new<S: Into<String>>(expression: S) -> Result<Self, ParseError> {
        let expression = expression.into();
        let infix = Tokenizer::new(&expression).tokenize();
        Self::from_infix(expression, infix)
    }

    /// Parse an expression, resolving function names with a custom table
    ///
    /// ```
    /// use exprtree::prefix_map::LinearPrefixMap;
    /// use exprtree::{ExpressionTree, Function};
    ///
    /// let functions = LinearPrefixMap::from_iter([("raiz", Function::Sqrt)]);
    /// let tree = ExpressionTree::with_functions("raiz(16)", &functions).unwrap();
    /// assert_eq!(tree.solve(), 4.0);
    /// ```
    pub fn with_functions<S, T>(expression: S, functions: &T) -> Result<Self, ParseError>
    where
        S: Into<String>,
        T: PrefixMap<Function>,
    {
        let expression = expression.into();
        let infix = Tokenizer::with_functions(&expression, functions).tokenize();
        Self::from_infix(expression, infix)
    }

    fn from_infix(
        expression: String,
        infix: Result<Vec<Token>, ParseError>,
    ) -> Result<Self, ParseError> {
        let built = infix.and_then(|infix| {
            trace!("tokenized {:?} into {} tokens", expression, infix.len());
            let mut tokens = to_postfix(&infix)?;
            trace!("postfix {:?}", tokens.iter().map(Token::show).collect::<String>());
            condense(&mut tokens)?;
            trace!("condensed into {} tokens", tokens.len());
            let root = build_tree(&tokens)?;
            Ok((tokens, root))
        });
        match built {
            Ok((tokens, root)) => Ok(ExpressionTree {
                expression,
                tokens,
                root,
            }),
            Err(err) => {
                debug!("failed to parse {:?}: {}", expression, err);
                Err(err)
            }
        }
    }

    /// Evaluate with `x = 0`, rounded to three decimal places
    pub fn solve(&self) -> f64 {
        self.solve_at(0.0)
    }

    /// Evaluate at `x`, rounded to three decimal places
    pub fn solve_at(&self, x: f64) -> f64 {
        round3(self.root.evaluate(x))
    }

    /// A function evaluating the expression at a point, without rounding
    ///
    /// ```
    /// use exprtree::ExpressionTree;
    ///
    /// let tree = ExpressionTree::new("x^2").unwrap();
    /// let square = tree.to_fn();
    /// let points: Vec<_> = [0.5, 1.0, 3.0].into_iter().map(square).collect();
    /// assert_eq!(points, [0.25, 1.0, 9.0]);
    /// ```
    pub fn to_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.root.evaluate(x)
    }

    /// The root of the tree
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The expression as it was given
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The condensed postfix sequence the tree was built from
    pub fn postfix(&self) -> &[Token] {
        &self.tokens
    }

    /// The postfix sequence in reverse Polish notation, separated by spaces
    ///
    /// Function arguments are written out before the function name.
    pub fn print_tokens(&self) -> String {
        let mut shown = Vec::new();
        push_shown(&self.tokens, &mut shown);
        shown.join(" ")
    }
}

fn push_shown<'a>(tokens: &'a [Token], shown: &mut Vec<&'a str>) {
    for token in tokens {
        if let Token::Function(_, subtokens) = token {
            push_shown(subtokens, shown);
        }
        shown.push(token.show());
    }
}

impl FromStr for ExpressionTree {
    type Err = ParseError;

    fn from_str(inp: &str) -> Result<Self, Self::Err> {
        ExpressionTree::new(inp)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
