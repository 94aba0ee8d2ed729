//! Recursive-descent parser producing an expression tree.
//!
//! Grammar, loosest to tightest binding:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := power (('*' | '/') power)*
//! power   := unary ('**' power)?          (right-associative)
//! unary   := ('-' | '+') unary | primary
//! primary := NUMBER | IDENT '(' args ')' | '(' expr ')'
//! args    := expr (',' expr)*
//! ```
//!
//! Unary minus binds tighter than exponentiation, so `-2 ** 2` is `(-2)^2`.

use super::error::EvalError;
use super::lexer::Token;

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),

    /// Unary negation.
    Neg(Box<Expr>),

    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// A call to a named function.
    Call { function: String, args: Vec<Expr> },
}

/// Binary operators supported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Parse a token stream into an expression tree.
///
/// Fails if the tokens do not form exactly one well-formed expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(EvalError::syntax(format!(
            "unexpected trailing input at '{:?}'",
            token
        )));
    }

    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token, context: &str) -> Result<(), EvalError> {
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(EvalError::syntax(format!(
                "expected {} {}, found '{:?}'",
                describe(expected),
                context,
                token
            ))),
            None => Err(EvalError::syntax(format!(
                "expected {} {}, found end of expression",
                describe(expected),
                context
            ))),
        }
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.term()?;

        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinaryOp::Add),
            Some(Token::Minus) => Some(BinaryOp::Sub),
            _ => None,
        } {
            self.advance();
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.power()?;

        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinaryOp::Mul),
            Some(Token::Slash) => Some(BinaryOp::Div),
            _ => None,
        } {
            self.advance();
            let rhs = self.power()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.unary()?;

        if matches!(self.peek(), Some(Token::Pow)) {
            self.advance();
            // Right-associative: the exponent may itself be a power.
            let exponent = self.power()?;
            return Ok(Expr::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }

        Ok(base)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        match self.advance().cloned() {
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Ident(name)) => {
                self.expect(&Token::LParen, &format!("after function name '{}'", name))?;
                let args = self.args()?;
                self.expect(&Token::RParen, "after function arguments")?;
                Ok(Expr::Call {
                    function: name,
                    args,
                })
            }
            Some(Token::LParen) => {
                let expr = self.expr()?;
                self.expect(&Token::RParen, "to close group")?;
                Ok(expr)
            }
            Some(token) => Err(EvalError::syntax(format!(
                "unexpected token '{:?}'",
                token
            ))),
            None => Err(EvalError::syntax("unexpected end of expression")),
        }
    }

    fn args(&mut self) -> Result<Vec<Expr>, EvalError> {
        if matches!(self.peek(), Some(Token::RParen)) {
            return Ok(Vec::new());
        }

        let mut args = vec![self.expr()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            args.push(self.expr()?);
        }

        Ok(args)
    }
}

fn describe(token: &Token) -> &'static str {
    match token {
        Token::LParen => "'('",
        Token::RParen => "')'",
        Token::Comma => "','",
        _ => "token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::eval::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Expr, EvalError> {
        parse(&tokenize(input)?)
    }

    #[test]
    fn test_parse_precedence() {
        // 10 + (5 * 2), not (10 + 5) * 2
        let expr = parse_str("10 + 5 * 2").unwrap();
        match expr {
            Expr::Binary {
                op: BinaryOp::Add,
                rhs,
                ..
            } => {
                assert!(matches!(
                    *rhs,
                    Expr::Binary {
                        op: BinaryOp::Mul,
                        ..
                    }
                ));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn test_parse_grouping() {
        // (10 + 5) * 2
        let expr = parse_str("(10 + 5) * 2").unwrap();
        match expr {
            Expr::Binary {
                op: BinaryOp::Mul,
                lhs,
                ..
            } => {
                assert!(matches!(
                    *lhs,
                    Expr::Binary {
                        op: BinaryOp::Add,
                        ..
                    }
                ));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn test_parse_power_right_associative() {
        // 2 ** (3 ** 2)
        let expr = parse_str("2 ** 3 ** 2").unwrap();
        match expr {
            Expr::Binary {
                op: BinaryOp::Pow,
                lhs,
                rhs,
            } => {
                assert_eq!(*lhs, Expr::Number(2.0));
                assert!(matches!(
                    *rhs,
                    Expr::Binary {
                        op: BinaryOp::Pow,
                        ..
                    }
                ));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unary_minus_binds_tighter_than_power() {
        // (-2) ** 2
        let expr = parse_str("-2 ** 2").unwrap();
        match expr {
            Expr::Binary {
                op: BinaryOp::Pow,
                lhs,
                ..
            } => {
                assert!(matches!(*lhs, Expr::Neg(_)));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn test_parse_call_with_args() {
        let expr = parse_str("max(3, 7)").unwrap();
        assert_eq!(
            expr,
            Expr::Call {
                function: "max".to_string(),
                args: vec![Expr::Number(3.0), Expr::Number(7.0)],
            }
        );
    }

    #[test]
    fn test_parse_bare_identifier_is_rejected() {
        // Identifiers only appear as function calls; a bare name is not a value.
        assert!(parse_str("x + 1").is_err());
    }

    #[test]
    fn test_parse_incomplete_expression() {
        assert!(parse_str("2 +").is_err());
        assert!(parse_str("(2 + 3").is_err());
        assert!(parse_str("max(3, ").is_err());
        assert!(parse_str("").is_err());
    }

    #[test]
    fn test_parse_trailing_input() {
        assert!(parse_str("2 3").is_err());
        assert!(parse_str("2 + 3)").is_err());
    }
}
