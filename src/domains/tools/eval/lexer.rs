//! Tokenizer for calculator expressions.
//!
//! Splits an input string into numbers, operators, parentheses, identifiers,
//! and commas. Anything outside that vocabulary is a syntax error, so inputs
//! like attribute access or string literals never reach the parser.

use super::error::EvalError;

/// A single token of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal (integer, decimal, or scientific notation).
    Number(f64),

    /// A candidate function name. Resolved against the whitelist at
    /// evaluation time.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,

    /// Exponentiation, spelled either `**` or `^`.
    Pow,

    LParen,
    RParen,
    Comma,
}

/// Tokenize an expression string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                tokens.push(Token::Number(lex_number(&mut chars)?));
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Pow);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Pow);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                tokens.push(Token::Ident(lex_identifier(&mut chars)));
            }
            c => {
                return Err(EvalError::syntax(format!("unexpected character '{}'", c)));
            }
        }
    }

    Ok(tokens)
}

/// Lex a numeric literal: digits, optional fraction, optional exponent.
fn lex_number(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<f64, EvalError> {
    let mut literal = String::new();
    let mut has_dot = false;

    while let Some(&ch) = chars.peek() {
        match ch {
            '0'..='9' => {
                literal.push(ch);
                chars.next();
            }
            '.' if !has_dot => {
                has_dot = true;
                literal.push(ch);
                chars.next();
            }
            'e' | 'E' => {
                literal.push(ch);
                chars.next();
                if let Some(&sign) = chars.peek() {
                    if sign == '+' || sign == '-' {
                        literal.push(sign);
                        chars.next();
                    }
                }
                while let Some(&digit) = chars.peek() {
                    if !digit.is_ascii_digit() {
                        break;
                    }
                    literal.push(digit);
                    chars.next();
                }
                break;
            }
            _ => break,
        }
    }

    // A bare '.' is not a number, and 1e400 parses to infinity.
    let value: f64 = literal
        .parse()
        .map_err(|_| EvalError::syntax(format!("malformed number '{}'", literal)))?;
    if !value.is_finite() {
        return Err(EvalError::syntax(format!(
            "numeric literal '{}' out of range",
            literal
        )));
    }

    Ok(value)
}

/// Lex an identifier: letters, digits, and underscores.
fn lex_identifier(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut identifier = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            identifier.push(ch);
            chars.next();
        } else {
            break;
        }
    }

    identifier
}
