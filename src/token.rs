use std::fmt;

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition `+`
    Add,
    /// Subtraction `-`
    Sub,
    /// Multiplication `*`
    Mul,
    /// Division `/`
    Div,
    /// Exponentiation `^`
    Pow,
}

impl Operator {
    /// The operator for an ascii character
    pub fn from_char(chr: char) -> Option<Self> {
        match chr {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Binding strength when converting to postfix, higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    /// The operator's symbol
    pub fn show(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }
}

/// A named unary function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Inverse sine
    Asin,
    /// Inverse cosine
    Acos,
    /// Inverse tangent
    Atan,
    /// Hyperbolic sine
    Sinh,
    /// Hyperbolic cosine
    Cosh,
    /// Hyperbolic tangent
    Tanh,
    /// Square root
    Sqrt,
    /// Cube root
    Cbrt,
    /// Base 10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Absolute value
    Abs,
}

macro_rules! functions {
    ($($name:expr => $func:ident,)+) => {
        [$(($name, Function::$func),)+]
    };
}

/// Every recognized function name
///
/// This is exported so that custom [PrefixMap][crate::prefix_map::PrefixMap]s can be built from
/// the same table, e.g. to add aliases.
pub const FUNCTIONS: [(&str, Function); 14] = functions!(
    "sin" => Sin,
    "cos" => Cos,
    "tan" => Tan,
    "asin" => Asin,
    "acos" => Acos,
    "atan" => Atan,
    "sinh" => Sinh,
    "cosh" => Cosh,
    "tanh" => Tanh,
    "sqrt" => Sqrt,
    "cbrt" => Cbrt,
    "log" => Log,
    "ln" => Ln,
    "abs" => Abs,
);

impl Function {
    /// The function's name as written in an expression
    pub fn show(self) -> &'static str {
        FUNCTIONS
            .iter()
            .find(|(_, func)| *func == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

/// A named mathematical constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// The constant's value
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    /// The constant's name as written in an expression
    pub fn show(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A lexical unit of an expression
///
/// The tokenizer produces single digits, decimal points and grouping spaces. Those only live until
/// [condense][crate::condense()] folds them into [Literal][Token::Literal]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A single digit 0-9
    Digit(u8),
    /// A binary operator
    Operator(Operator),
    /// A sign attached to the literal that follows it
    Negative,
    /// A function and its argument in postfix order
    ///
    /// The argument list is empty until [to_postfix][crate::to_postfix] fills it.
    Function(Function, Vec<Token>),
    /// A named constant
    Constant(Constant),
    /// The variable `x`
    Variable,
    /// A complete numeric literal
    Literal {
        /// The parsed value
        value: f64,
        /// The literal as it was written
        text: String,
    },
    /// A decimal point
    Decimal,
    /// Whitespace, or the end of a run of digits
    Space,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// The `(` that directly follows a function name
    FunctionOpen,
    /// The `)` that balances a [FunctionOpen][Token::FunctionOpen]
    FunctionClose,
}

impl Token {
    /// Create a literal from its text
    ///
    /// Returns `None` if the text isn't a valid number.
    pub fn literal<S: Into<String>>(text: S) -> Option<Self> {
        let text = text.into();
        let value = text.parse().ok()?;
        Some(Token::Literal { value, text })
    }

    /// Create a function token with an empty argument
    pub fn function(func: Function) -> Self {
        Token::Function(func, Vec::new())
    }

    /// The numeric value for digits, literals and constants
    pub fn value(&self) -> Option<f64> {
        match self {
            &Token::Digit(digit) => Some(digit.into()),
            &Token::Literal { value, .. } => Some(value),
            &Token::Constant(constant) => Some(constant.value()),
            _ => None,
        }
    }

    /// The private postfix argument of a function token
    pub fn subtokens(&self) -> Option<&[Token]> {
        match self {
            Token::Function(_, subtokens) => Some(subtokens.as_slice()),
            _ => None,
        }
    }

    /// The text this token renders as
    pub fn show(&self) -> &str {
        match self {
            &Token::Digit(digit) => DIGITS[usize::from(digit)],
            &Token::Operator(op) => op.show(),
            Token::Negative => "-",
            &Token::Function(func, _) => func.show(),
            &Token::Constant(constant) => constant.show(),
            Token::Variable => "x",
            Token::Literal { text, .. } => text.as_str(),
            Token::Decimal => ".",
            Token::Space => " ",
            Token::OpenParen | Token::FunctionOpen => "(",
            Token::CloseParen | Token::FunctionClose => ")",
        }
    }

    /// Whether this is part of a numeric literal that hasn't been condensed yet
    pub(crate) fn is_literal_part(&self) -> bool {
        matches!(self, Token::Digit(_) | Token::Decimal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.show())
    }
}
