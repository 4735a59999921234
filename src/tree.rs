//! The expression tree built from a postfix token sequence
//!
//! - [`Node`] - Any node of the tree
//! - [`Binary`] - A binary operator applied to a left and right operand
//! - [`Func`] - A named function applied to its argument
//! - [`Literal`] - A numeric literal as it was written
//!
//! Every node owns its children outright, so a tree is built once and only read afterwards. Nodes
//! implement [Display][fmt::Display] as a box-drawing, pre-order rendering of their subtree.
use crate::error::ParseError;
use crate::token::{Constant, Function, Operator, Token};
use std::fmt;

/// A numeric literal
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The value
    pub value: f64,
    /// The literal as written in the expression
    pub text: String,
}

impl Literal {
    /// Create a literal from its value and how it was written
    pub fn new<S: Into<String>>(value: f64, text: S) -> Self {
        Literal {
            value,
            text: text.into(),
        }
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::new(value, value.to_string())
    }
}

/// A binary operator and its operands
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The operator
    pub op: Operator,
    left: Box<Node>,
    right: Box<Node>,
}

impl Binary {
    /// Create a binary operation
    pub fn new<L, R>(op: Operator, left: L, right: R) -> Self
    where
        L: Into<Node>,
        R: Into<Node>,
    {
        Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// The left operand
    pub fn left(&self) -> &Node {
        &self.left
    }

    /// The right operand
    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// A function and its argument
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    /// The function
    pub func: Function,
    arg: Box<Node>,
}

impl Func {
    /// Create a function application
    pub fn new<A: Into<Node>>(func: Function, arg: A) -> Self {
        Func {
            func,
            arg: Box::new(arg.into()),
        }
    }

    /// The function argument
    pub fn arg(&self) -> &Node {
        &self.arg
    }
}

/// A node of an expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal
    Literal(Literal),
    /// A named constant
    Constant(Constant),
    /// The variable `x`
    Variable,
    /// A binary operation
    Binary(Binary),
    /// A function application
    Func(Func),
}

macro_rules! node_from {
    ($from:ty => $to:ident) => {
        impl From<$from> for Node {
            fn from(inp: $from) -> Self {
                Node::$to(inp)
            }
        }
    };
}

node_from!(Literal => Literal);
node_from!(Constant => Constant);
node_from!(Binary => Binary);
node_from!(Func => Func);

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Literal(value.into())
    }
}

impl Node {
    /// The text this node renders as
    pub fn show(&self) -> &str {
        match self {
            Node::Literal(lit) => lit.text.as_str(),
            &Node::Constant(constant) => constant.show(),
            Node::Variable => "x",
            Node::Binary(binary) => binary.op.show(),
            Node::Func(func) => func.func.show(),
        }
    }

    /// The left child, or the argument of a function
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Binary(binary) => Some(binary.left()),
            Node::Func(func) => Some(func.arg()),
            _ => None,
        }
    }

    /// The right child
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Binary(binary) => Some(binary.right()),
            _ => None,
        }
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::Constant(_) | Node::Variable)
    }

    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, padding: &str) -> fmt::Result {
        let right = self.right();
        if let Some(left) = self.left() {
            left.fmt_branch(f, padding, right.is_none())?;
        }
        if let Some(right) = right {
            right.fmt_branch(f, padding, true)?;
        }
        Ok(())
    }

    fn fmt_branch(&self, f: &mut fmt::Formatter<'_>, padding: &str, last: bool) -> fmt::Result {
        let (pointer, indent) = if last {
            ("└──", "   ")
        } else {
            ("├──", "│  ")
        };
        write!(f, "\n{padding}{pointer}{}", self.show())?;
        self.fmt_children(f, &format!("{padding}{indent}"))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.show())?;
        self.fmt_children(f, "")
    }
}

/// Build a tree from a condensed postfix sequence
///
/// Function tokens are built from their own argument sequence. Any token that should have been
/// removed by [condense][crate::condense()], an operator missing an operand, or operands left
/// over at the end are reported as [InvalidExpressionFormat][ParseError::InvalidExpressionFormat].
pub fn build_tree(postfix: &[Token]) -> Result<Node, ParseError> {
    let mut stack: Vec<Node> = Vec::new();
    for token in postfix {
        let node: Node = match token {
            Token::Literal { value, text } => Literal::new(*value, text.as_str()).into(),
            &Token::Constant(constant) => constant.into(),
            Token::Variable => Node::Variable,
            &Token::Operator(op) => {
                let right = stack.pop().ok_or(ParseError::InvalidExpressionFormat)?;
                let left = stack.pop().ok_or(ParseError::InvalidExpressionFormat)?;
                Binary::new(op, left, right).into()
            }
            Token::Function(func, subtokens) => Func::new(*func, build_tree(subtokens)?).into(),
            _ => return Err(ParseError::InvalidExpressionFormat),
        };
        stack.push(node);
    }
    match (stack.pop(), stack.is_empty()) {
        (Some(root), true) => Ok(root),
        _ => Err(ParseError::InvalidExpressionFormat),
    }
}
