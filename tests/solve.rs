use exprtree::{condense, is_condensed, round3, to_postfix, tokenize};
use exprtree::{ExpressionTree, Operator, ParseError};
use rand::distributions::{Distribution, Slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::WeightedIndex;
use std::f64::consts::PI;

fn solve(inp: &str) -> f64 {
    ExpressionTree::new(inp).unwrap().solve()
}

fn solve_at(inp: &str, x: f64) -> f64 {
    ExpressionTree::new(inp).unwrap().solve_at(x)
}

fn random_literal(rng: &mut impl Rng) -> String {
    let sign = if rng.gen_bool(0.2) { "-" } else { "" };
    let whole: u32 = rng.gen_range(0..1000);
    match WeightedIndex::new([2, 1, 1]).unwrap().sample(rng) {
        0 => format!("{sign}{whole}"),
        1 => format!("{sign}{whole}.{}", rng.gen_range(0..10)),
        _ => format!("{sign}{whole}.{:02}", rng.gen_range(0..100)),
    }
}

#[test]
fn random_binary_operations() {
    let ops = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];
    let op_dist = Slice::new(&ops).unwrap();
    let mut rng = StdRng::from_seed([0; 32]);
    for _ in 0..200 {
        let left = random_literal(&mut rng);
        let right = random_literal(&mut rng);
        let op = *rng.sample(&op_dist);
        let inp = format!("{left} {} {right}", op.show());

        let expected = round3(op.apply(left.parse().unwrap(), right.parse().unwrap()));
        let actual = solve(&inp);
        if expected.is_nan() {
            assert!(actual.is_nan(), "{inp} = {actual}");
        } else {
            assert_eq!(actual, expected, "{inp}");
        }
    }
}

#[test]
fn literals() {
    assert_eq!(solve("12.2 + 9"), 21.2);
    assert_eq!(solve("12.2 / 9"), 1.356);
    assert_eq!(solve("5.7 * 4.63"), 26.391);
    assert_eq!(solve("106.8 * 14.9"), 1591.32);
    assert_eq!(solve("2^10.1"), 1097.496);
    assert_eq!(solve("007.50"), 7.5);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(solve("2 + 3 * 4"), 14.0);
    assert_eq!(solve("(2 + 3) * 4"), 20.0);
    assert_eq!(solve("2 * 3^2"), 18.0);
    assert_eq!(solve("2^3^2"), 64.0);
    assert_eq!(solve("10 - 4 - 3"), 3.0);
    assert_eq!(solve("5-4"), 1.0);
    assert_eq!(solve("64 / 4 / 2"), 8.0);
    assert_eq!(solve("((((1))))"), 1.0);
}

#[test]
fn coefficients() {
    assert_eq!(solve_at("2x", 3.0), 6.0);
    assert_eq!(solve_at("3(x + 1)", 2.0), 9.0);
    assert_eq!(solve_at("2sqrt(x)", 16.0), 8.0);
    assert_eq!(solve("2pi"), 6.283);
    assert_eq!(solve("2e"), 5.437);
}

#[test]
fn negation() {
    assert_eq!(solve("-(100 - -5)"), -105.0);
    assert_eq!(solve("-5 + 1"), -4.0);
    assert_eq!(solve("2^-1"), 0.5);
    assert_eq!(solve("abs(-3)"), 3.0);
    assert_eq!(solve_at("-x^2", 3.0), -9.0);
    assert_eq!(solve("-pi"), -3.142);
    assert_eq!(solve("-sqrt(4)"), -2.0);
}

#[test]
fn functions() {
    assert_eq!(solve("tan(pi / 4)"), 1.0);
    assert_eq!(solve("ln(e)"), 1.0);
    assert_eq!(solve("log(100)"), 2.0);
    assert_eq!(solve("sqrt(16) + cbrt(27)"), 7.0);
    assert_eq!(solve("sinh(0) + cosh(0) + tanh(0)"), 1.0);
    assert_eq!(solve("asin(1) * 2"), 3.142);
    assert_eq!(solve("acos(0) + atan(1)"), 2.356);
    assert_eq!(solve("e^2"), 7.389);
}

#[test]
fn nested_functions() {
    let expected = round3((PI.cos() + 4.0).sin());
    assert_eq!(solve_at("sin(cos(x) + 4)", PI), expected);

    let deep = ExpressionTree::new("sin(cos(tan(acos(1))) + pi)").unwrap();
    let value = deep.solve_at(2.0);
    assert!(value.is_finite());
    assert_eq!(value, round3((1.0 + PI).sin()));
    assert_eq!(deep.print_tokens(), "1 acos tan cos pi + sin");
}

#[test]
fn condense_is_idempotent() {
    let mut tokens = to_postfix(&tokenize("12.5x - sqrt(2.25 + x) / 3").unwrap()).unwrap();
    assert!(!is_condensed(&tokens));
    condense(&mut tokens).unwrap();
    assert!(is_condensed(&tokens));
    let once = tokens.clone();
    condense(&mut tokens).unwrap();
    assert_eq!(tokens, once);
}

#[test]
fn malformed_input() {
    assert_eq!(
        ExpressionTree::new("(1 + 2"),
        Err(ParseError::InvalidExpressionFormat)
    );
    assert_eq!(
        ExpressionTree::new("1 + 2)"),
        Err(ParseError::InvalidExpressionFormat)
    );
    assert_eq!(
        ExpressionTree::new("foo(x)"),
        Err(ParseError::UnknownFunction("foo".into()))
    );
    assert_eq!(
        ExpressionTree::new("sin(x"),
        Err(ParseError::InvalidExpressionFormat)
    );
    assert_eq!(
        ExpressionTree::new("1 + * 2"),
        Err(ParseError::InvalidExpressionFormat)
    );
    assert_eq!(
        ExpressionTree::new("2 # 3"),
        Err(ParseError::UnknownCharacter('#'))
    );
    assert_eq!(ExpressionTree::new(""), Err(ParseError::InvalidExpressionFormat));
}

#[test]
fn error_messages() {
    let err = ExpressionTree::new("y + 1").unwrap_err();
    assert_eq!(err, ParseError::UnknownFunction("y".into()));
    assert_eq!(err.to_string(), "unknown function \"y\"");
    assert_eq!(
        ParseError::UnknownCharacter('@').to_string(),
        "unknown character '@'"
    );
}

#[test]
fn evaluation_never_fails() {
    assert_eq!(solve("1 / 0"), f64::INFINITY);
    assert_eq!(solve("0 - 1 / 0"), f64::NEG_INFINITY);
    assert!(solve("0 / 0").is_nan());
    assert!(solve("sqrt(0 - 4)").is_nan());
    assert!(solve("asin(2)").is_nan());
    assert_eq!(solve("log(0)"), f64::NEG_INFINITY);
}
