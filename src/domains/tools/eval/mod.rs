//! Restricted expression evaluator.
//!
//! Evaluates a textual formula using only numeric literals, the binary
//! operators `+ - * /` and exponentiation (`**` or `^`), parentheses, and a
//! fixed whitelist of named functions: `abs`, `max`, `min`, `pow`, `round`.
//!
//! The vocabulary is closed by construction: the lexer only produces
//! numbers, operators, and identifiers; identifiers are resolved against
//! the whitelist and nothing else. There is no variable binding, attribute
//! access, indexing, or statement form, so hostile inputs fail to parse or
//! fail the whitelist rather than reaching any runtime capability.
//!
//! ## Architecture
//!
//! - `lexer.rs` - tokenizer
//! - `parser.rs` - recursive-descent parser building the expression tree
//! - this module - recursive tree evaluation and the function whitelist

mod error;
mod lexer;
mod parser;

pub use error::EvalError;

use parser::{BinaryOp, Expr};

/// Names the evaluator is permitted to resolve. Anything else is a hard
/// failure.
pub const FUNCTION_WHITELIST: &[&str] = &["abs", "max", "min", "pow", "round"];

/// Evaluate an expression string to a finite number.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expression)?;
    let expr = parser::parse(&tokens)?;
    eval_expr(&expr)
}

/// Recursively evaluate an expression tree.
///
/// Every intermediate value is checked for finiteness so overflow surfaces
/// as an error instead of propagating an infinity.
fn eval_expr(expr: &Expr) -> Result<f64, EvalError> {
    let value = match expr {
        Expr::Number(value) => *value,
        Expr::Neg(operand) => -eval_expr(operand)?,
        Expr::Binary { op, lhs, rhs } => {
            let lhs = eval_expr(lhs)?;
            let rhs = eval_expr(rhs)?;
            match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => {
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    lhs / rhs
                }
                BinaryOp::Pow => lhs.powf(rhs),
            }
        }
        Expr::Call { function, args } => {
            let args = args
                .iter()
                .map(eval_expr)
                .collect::<Result<Vec<_>, _>>()?;
            apply_function(function, &args)?
        }
    };

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(value)
}

/// Apply a whitelisted function to already-evaluated arguments.
fn apply_function(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    match name {
        "abs" => {
            let [x] = args else {
                return Err(EvalError::arity(name, "exactly 1", args.len()));
            };
            Ok(x.abs())
        }
        "max" => {
            if args.len() < 2 {
                return Err(EvalError::arity(name, "at least 2", args.len()));
            }
            Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        }
        "min" => {
            if args.len() < 2 {
                return Err(EvalError::arity(name, "at least 2", args.len()));
            }
            Ok(args.iter().copied().fold(f64::INFINITY, f64::min))
        }
        "pow" => {
            let [base, exponent] = args else {
                return Err(EvalError::arity(name, "exactly 2", args.len()));
            };
            Ok(base.powf(*exponent))
        }
        "round" => match args {
            [x] => Ok(x.round()),
            [x, ndigits] => {
                if ndigits.fract() != 0.0 {
                    return Err(EvalError::invalid_argument(
                        name,
                        "number of digits must be an integer",
                    ));
                }
                let factor = 10f64.powi(*ndigits as i32);
                Ok((x * factor).round() / factor)
            }
            _ => Err(EvalError::arity(name, "1 or 2", args.len())),
        },
        _ => Err(EvalError::unknown_identifier(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_close(evaluate("10 + 5 * 2").unwrap(), 20.0);
        assert_close(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_close(evaluate("(2 + 3) * 4").unwrap(), 20.0);
    }

    #[test]
    fn test_evaluate_division() {
        assert_close(evaluate("10 / 4").unwrap(), 2.5);
    }

    #[test]
    fn test_evaluate_power() {
        assert_close(evaluate("2 ** 3").unwrap(), 8.0);
        assert_close(evaluate("2 ^ 3").unwrap(), 8.0);
        assert_close(evaluate("2 ** 3 ** 2").unwrap(), 512.0);
        assert_close(evaluate("25 ** 0.5").unwrap(), 5.0);
    }

    #[test]
    fn test_evaluate_unary_minus() {
        assert_close(evaluate("-3 + 5").unwrap(), 2.0);
        assert_close(evaluate("2 - -3").unwrap(), 5.0);
        // Unary minus binds tighter than exponentiation.
        assert_close(evaluate("-2 ** 2").unwrap(), 4.0);
    }

    #[test]
    fn test_evaluate_functions() {
        assert_close(evaluate("abs(-10)").unwrap(), 10.0);
        assert_close(evaluate("max(3, 7) - min(1, 2)").unwrap(), 6.0);
        assert_close(evaluate("max(1, 2, 3, 4)").unwrap(), 4.0);
        assert_close(evaluate("pow(2, 10)").unwrap(), 1024.0);
        assert_close(evaluate("round(2.6)").unwrap(), 3.0);
        assert_close(evaluate("round(2.567, 2)").unwrap(), 2.57);
    }

    #[test]
    fn test_evaluate_nested_calls() {
        assert_close(evaluate("max(abs(-5), 3)").unwrap(), 5.0);
        assert_close(evaluate("round(10 / 3, 2)").unwrap(), 3.33);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate("1 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_non_finite_result() {
        // Overflows to infinity without the finiteness check.
        assert_eq!(evaluate("10 ** 400"), Err(EvalError::NonFinite));
        // Negative base with fractional exponent is undefined over the reals.
        assert_eq!(evaluate("(-2) ** 0.5"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_evaluate_rejects_unknown_identifiers() {
        assert_eq!(
            evaluate("__import__(1)"),
            Err(EvalError::UnknownIdentifier("__import__".to_string()))
        );
        assert_eq!(
            evaluate("sqrt(4)"),
            Err(EvalError::UnknownIdentifier("sqrt".to_string()))
        );
    }

    #[test]
    fn test_evaluate_rejects_code_injection_shapes() {
        // String literals and attribute access never lex.
        assert!(matches!(
            evaluate("__import__('os')"),
            Err(EvalError::Syntax(_))
        ));
        assert!(matches!(
            evaluate("os.system('x')"),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn test_evaluate_arity_errors() {
        assert!(matches!(evaluate("abs(1, 2)"), Err(EvalError::Arity { .. })));
        assert!(matches!(evaluate("max(1)"), Err(EvalError::Arity { .. })));
        assert!(matches!(evaluate("pow(2)"), Err(EvalError::Arity { .. })));
        assert!(matches!(
            evaluate("round(1, 2, 3)"),
            Err(EvalError::Arity { .. })
        ));
    }

    #[test]
    fn test_evaluate_round_rejects_fractional_digit_count() {
        assert!(matches!(
            evaluate("round(2.5, 1.5)"),
            Err(EvalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_whitelist_names_resolve() {
        for name in FUNCTION_WHITELIST {
            // Every whitelisted name resolves; arity may still reject it.
            match evaluate(&format!("{}(2, 2)", name)) {
                Ok(_) | Err(EvalError::Arity { .. }) => {}
                Err(other) => panic!("{} failed unexpectedly: {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_evaluate_malformed_input() {
        assert!(matches!(evaluate(""), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("2 +"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("(2 + 3"), Err(EvalError::Syntax(_))));
    }
}
