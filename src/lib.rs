//! A small parser and evaluator for single-variable infix expressions
//!
//! An expression such as `2x + sin(pi / 2)` is parsed once into an [`ExpressionTree`], which can
//! then be evaluated at any value of `x`. Results of [`solve`][ExpressionTree::solve] are rounded
//! to three decimal places; [`to_fn`][ExpressionTree::to_fn] gives the unrounded function, e.g.
//! for plotting.
//!
//! ## Usage
//!
//! ```sh
//! cargo add exprtree
//! ```
//!
//! then
//!
//! ```
//! use exprtree::ExpressionTree;
//!
//! let tree: ExpressionTree = "sin(cos(x) + 4)".parse().unwrap();
//! let at_pi = tree.solve_at(std::f64::consts::PI);
//! assert_eq!(at_pi, 0.141);
//! ```
//!
//! ## Grammar
//!
//! Input is plain ascii. Whitespace separates tokens but is otherwise ignored.
//!
//! ```txt
//! n ::= digits with an optional decimal point, e.g. 12, 4.5, 5.
//! c ::= pi | e
//! f ::= sin | cos | tan | asin | acos | atan | sinh | cosh | tanh
//!     | sqrt | cbrt | log | ln | abs
//! o ::= + | - | * | / | ^
//! V ::= n | c | x | (E) | f(E)
//! T ::= V | nV | -T                   coefficients and negation
//! E ::= T | E o E
//! ```
//!
//! - `^` binds tighter than `*` and `/`, which bind tighter than `+` and `-`. All operators are
//!   left associative, so `2^3^2` is `(2^3)^2`.
//! - A number directly followed by `x`, a constant, a parenthesis or a function multiplies it,
//!   e.g. `2x`, `3(x + 1)`, `2pi`, `4sqrt(x)`. The number and the factor may not be separated by
//!   whitespace.
//! - A `-` at the start of the input, after an operator, or after an opening parenthesis negates
//!   what follows: `-5`, `2^-1`, `-(x + 1)`, `-x^2` (which is `-1 * x^2`).
//! - Function names must be followed directly by `(`. The longest matching name wins, so `sinh`
//!   is the hyperbolic sine, not `sin` followed by `h`.
//! - `log` is the base 10 logarithm, `ln` the natural one.
//!
//! ## Design
//!
//! Construction is a pipeline of small passes, each of which is public for diagnostics:
//!
//! 1. [`tokenize`] turns the input into single-character [`Token`]s, with function names as one
//!    token, and marks the parenthesis closing each function.
//! 2. [`to_postfix`] reorders them with the shunting-yard algorithm. Every function keeps its own
//!    operator stack, and its argument is stored inside the function token rather than inline.
//! 3. [`condense`] folds runs of digits and signs back into literals.
//! 4. [`build_tree`] assembles the [`Node`][tree::Node] tree.
//!
//! Evaluation is a recursive walk of the tree and can't fail: division by zero or a logarithm of
//! a negative number produce an infinity or NaN as with any other float.
//!
//! ```
//! use exprtree::{build_tree, condense, to_postfix, tokenize};
//!
//! let mut postfix = to_postfix(&tokenize("1.5 * (2 + x)").unwrap()).unwrap();
//! condense(&mut postfix).unwrap();
//! let root = build_tree(&postfix).unwrap();
//! assert_eq!(root.evaluate(2.0), 6.0);
//! ```
//!
//! ### Function names
//!
//! Function names are recognized with a [`PrefixMap`][prefix_map::PrefixMap]. The standard names
//! are in [`FUNCTIONS`], and a custom map can be used to add aliases or other languages:
//!
//! ```
//! use exprtree::prefix_map::HashPrefixMap;
//! use exprtree::{ExpressionTree, Function, FUNCTIONS};
//!
//! let functions = HashPrefixMap::from_iter(FUNCTIONS.into_iter().chain([("sen", Function::Sin)]));
//! let tree = ExpressionTree::with_functions("sen(x) + cos(x)", &functions).unwrap();
//! assert_eq!(tree.solve(), 1.0);
//! ```
//!
//! ## Features
//!
//! - `qp-trie` (default): look up function names in a qp-trie. Without it a hash map is used.
//! - `fnv`: export [`FnvHashPrefixMap`][prefix_map::FnvHashPrefixMap].
//!
//! ## Logging
//!
//! Construction logs each pipeline stage at `trace` level and failures at `debug` level through
//! the [`log`](https://docs.rs/log) facade. No logger is installed by this crate.
#![warn(missing_docs)]
mod condense;
mod error;
mod evaluate;
mod expression;
mod postfix;
pub mod prefix_map;
mod token;
mod tokenizer;
pub mod tree;

pub use condense::{condense, is_condensed};
pub use error::ParseError;
pub use evaluate::round3;
pub use expression::ExpressionTree;
pub use postfix::to_postfix;
pub use token::{Constant, Function, Operator, Token, FUNCTIONS};
pub use tokenizer::{tokenize, DefaultFunctions, Tokenizer};
pub use tree::build_tree;
