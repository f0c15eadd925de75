//! Expression evaluator: one line in, one number (or a typed error) out.

use thiserror::Error;

use crate::models::Expression;
use crate::operators::OperatorTable;

/// Errors from evaluating a single expression line.
///
/// Every variant is recoverable: the pipeline reports it on the calculation
/// channel and moves on to the next line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("malformed expression `{line}`: {reason}")]
    MalformedExpression { line: String, reason: String },

    #[error("unknown operator `{symbol}` (supported: {supported})")]
    UnknownOperator { symbol: String, supported: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("`{lhs} {symbol} {rhs}` has no finite result")]
    NonFiniteResult { symbol: String, lhs: f64, rhs: f64 },
}

/// Evaluates expression lines against an operator table.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    table: &'a OperatorTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(table: &'a OperatorTable) -> Self {
        Self { table }
    }

    /// Parse and compute `line`. No side effects.
    pub fn evaluate(&self, line: &str) -> Result<f64, EvalError> {
        let expr = Expression::parse(line)?;
        self.evaluate_expression(&expr)
    }

    /// Compute an already parsed expression.
    pub fn evaluate_expression(&self, expr: &Expression) -> Result<f64, EvalError> {
        self.table.apply(&expr.operator, expr.lhs, expr.rhs)
    }
}
