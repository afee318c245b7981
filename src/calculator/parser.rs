//! Restricted arithmetic parser.
//!
//! Accepts digits, decimal points, `+ - * /` and whitespace. Unary minus is
//! only legal as the first symbol of the whole expression; everything else
//! that is not `number (op number)*` is rejected rather than guessed at.
//!
//! ```text
//! expr   := ['-'] term (('+' | '-') term)*
//! term   := number (('*' | '/') number)*
//! number := digit* ['.'] digit*      (at least one digit)
//! ```

use crate::calculator::Operator;
use thiserror::Error;

/// Why an expression could not be turned into a finite number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Nothing left to evaluate.
    #[error("empty expression")]
    Empty,

    /// A character outside the accepted alphabet.
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    /// A numeric literal that is not a valid decimal number.
    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    /// An operator where a number was required.
    #[error("expected a number at position {position}, found '{found}'")]
    ExpectedNumber { found: char, position: usize },

    /// The input ended where a number was required.
    #[error("expression ends with an operator")]
    UnexpectedEnd,

    /// A number directly followed by another number.
    #[error("expected an operator at position {position}")]
    ExpectedOperator { position: usize },

    /// Well-formed, but the value is infinite or NaN.
    #[error("result is not a finite number ({0})")]
    NonFinite(f64),
}

impl EvalError {
    /// True for failures of arithmetic (e.g. division by zero) as opposed to syntax.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::NonFinite(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Lexeme {
    Number(f64),
    Op(Operator),
}

#[derive(Clone, Copy, Debug)]
struct Spanned {
    lexeme: Lexeme,
    position: usize,
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if let Some(op) = Operator::from_native(c) {
            out.push(Spanned {
                lexeme: Lexeme::Op(op),
                position: i,
            });
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            out.push(Spanned {
                lexeme: Lexeme::Number(parse_literal(&literal, start)?),
                position: start,
            });
            continue;
        }

        return Err(EvalError::UnexpectedChar { ch: c, position: i });
    }

    Ok(out)
}

fn parse_literal(literal: &str, position: usize) -> Result<f64, EvalError> {
    let malformed = || EvalError::MalformedNumber {
        literal: literal.to_string(),
        position,
    };

    let points = literal.matches('.').count();
    let has_digit = literal.chars().any(|c| c.is_ascii_digit());
    if points > 1 || !has_digit {
        return Err(malformed());
    }

    literal.parse::<f64>().map_err(|_| malformed())
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek_op(&self) -> Option<Operator> {
        match self.tokens.get(self.pos) {
            Some(Spanned {
                lexeme: Lexeme::Op(op),
                ..
            }) => Some(*op),
            _ => None,
        }
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let negate = self.peek_op() == Some(Operator::Subtract);
        if negate {
            self.pos += 1;
        }

        let mut value = self.term()?;
        if negate {
            value = -value;
        }

        while let Some(op @ (Operator::Add | Operator::Subtract)) = self.peek_op() {
            self.pos += 1;
            let rhs = self.term()?;
            value = match op {
                Operator::Add => value + rhs,
                _ => value - rhs,
            };
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.number()?;

        while let Some(op @ (Operator::Multiply | Operator::Divide)) = self.peek_op() {
            self.pos += 1;
            let rhs = self.number()?;
            value = match op {
                Operator::Multiply => value * rhs,
                _ => value / rhs,
            };
        }

        Ok(value)
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let token = self.tokens.get(self.pos).ok_or(EvalError::UnexpectedEnd)?;
        match token.lexeme {
            Lexeme::Number(n) => {
                self.pos += 1;
                Ok(n)
            }
            Lexeme::Op(op) => Err(EvalError::ExpectedNumber {
                found: op.native(),
                position: token.position,
            }),
        }
    }
}

/// Parse and evaluate `input` with conventional precedence.
///
/// The returned value may be infinite or NaN; finiteness is the caller's concern.
pub fn parse_and_eval(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;

    if let Some(rest) = parser.tokens.get(parser.pos) {
        return Err(EvalError::ExpectedOperator {
            position: rest.position,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(parse_and_eval("2+3*4"), Ok(14.0));
        assert_eq!(parse_and_eval("10-4/2"), Ok(8.0));
        assert_eq!(parse_and_eval("8/4/2"), Ok(1.0));
        assert_eq!(parse_and_eval("10-3-2"), Ok(5.0));
    }

    #[test]
    fn test_leading_minus() {
        assert_eq!(parse_and_eval("-5+3"), Ok(-2.0));
        assert_eq!(parse_and_eval("-2*3"), Ok(-6.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(parse_and_eval("1.5*2"), Ok(3.0));
        assert_eq!(parse_and_eval("5."), Ok(5.0));
        assert_eq!(parse_and_eval(" 2 + 2 "), Ok(4.0));
    }

    #[test]
    fn test_consecutive_operators_rejected() {
        assert!(matches!(
            parse_and_eval("2+*3"),
            Err(EvalError::ExpectedNumber { found: '*', .. })
        ));
        assert!(parse_and_eval("5*-3").is_err());
        assert!(parse_and_eval("--5").is_err());
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(parse_and_eval(""), Err(EvalError::Empty));
        assert_eq!(parse_and_eval("3+"), Err(EvalError::UnexpectedEnd));
        assert!(matches!(
            parse_and_eval("1.2.3"),
            Err(EvalError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_and_eval("2^3"),
            Err(EvalError::UnexpectedChar { ch: '^', position: 1 })
        ));
        assert!(matches!(
            parse_and_eval("alert(1)"),
            Err(EvalError::UnexpectedChar { ch: 'a', .. })
        ));
        assert!(matches!(
            parse_and_eval("1 2"),
            Err(EvalError::ExpectedOperator { position: 2 })
        ));
    }

    #[test]
    fn test_division_by_zero_is_not_a_parse_error() {
        let value = parse_and_eval("7/0").unwrap();
        assert!(value.is_infinite());
        assert!(parse_and_eval("0/0").unwrap().is_nan());
    }
}
