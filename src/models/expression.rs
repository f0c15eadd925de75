//! Expression lines and answer formatting.

use crate::constants::ANSWER_PRECISION;
use crate::evaluator::EvalError;

/// One `operand operator operand` line, split and parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub operator: String,
    pub rhs: f64,
}

impl Expression {
    /// Parse a line of exactly three whitespace-separated tokens.
    ///
    /// Operator validity is not checked here; that is the operator table's job.
    pub fn parse(line: &str) -> Result<Self, EvalError> {
        let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
        let [lhs, operator, rhs] = tokens.as_slice() else {
            return Err(EvalError::MalformedExpression {
                line: line.to_string(),
                reason: format!("expected 3 tokens, found {}", tokens.len()),
            });
        };

        Ok(Self {
            lhs: parse_operand(line, lhs)?,
            operator: (*operator).to_string(),
            rhs: parse_operand(line, rhs)?,
        })
    }
}

fn parse_operand(line: &str, token: &str) -> Result<f64, EvalError> {
    token
        .parse::<f64>()
        .map_err(|e| EvalError::MalformedExpression {
            line: line.to_string(),
            reason: format!("operand `{token}` is not a number: {e}"),
        })
}


/// Render a result the way the answers and checker files store it: fixed
/// point with exactly three fractional digits.
pub fn format_answer(value: f64) -> String {
    format!("{value:.prec$}", prec = ANSWER_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_expression() {
        let expr = Expression::parse("1 + 2").unwrap();
        assert_eq!(expr.lhs, 1.0);
        assert_eq!(expr.operator, "+");
        assert_eq!(expr.rhs, 2.0);
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let expr = Expression::parse("  -3.5\t*   4 ").unwrap();
        assert_eq!(expr.lhs, -3.5);
        assert_eq!(expr.operator, "*");
        assert_eq!(expr.rhs, 4.0);
    }

    #[test]
    fn parse_accepts_exponent_notation() {
        let expr = Expression::parse("1e3 / 2.5E-1").unwrap();
        assert_eq!(expr.lhs, 1000.0);
        assert_eq!(expr.rhs, 0.25);
    }

    #[test]
    fn parse_keeps_unknown_operator_text() {
        let expr = Expression::parse("2 & 3").unwrap();
        assert_eq!(expr.operator, "&");
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        for line in ["", "   ", "1", "1 +", "1 + 2 3", "1+2"] {
            let err = Expression::parse(line).unwrap_err();
            assert!(
                matches!(err, EvalError::MalformedExpression { .. }),
                "expected malformed for {line:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn non_numeric_operand_is_malformed() {
        let err = Expression::parse("abc + 1").unwrap_err();
        match err {
            EvalError::MalformedExpression { reason, .. } => {
                assert!(reason.contains("abc"), "got: {reason}");
            }
            other => panic!("expected malformed, got {other:?}"),
        }
        assert!(Expression::parse("1 + two").is_err());
    }

    #[test]
    fn format_answer_uses_three_decimals() {
        assert_eq!(format_answer(7.0), "7.000");
        assert_eq!(format_answer(2.5), "2.500");
        assert_eq!(format_answer(-0.5), "-0.500");
        assert_eq!(format_answer(1.0 / 3.0), "0.333");
        assert_eq!(format_answer(2.0_f64.sqrt()), "1.414");
        assert_eq!(format_answer(1024.0), "1024.000");
    }
}
