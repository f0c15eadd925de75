//! Operator table: the fixed set of binary operators an expression may use.
//!
//! Built once at startup and handed to the evaluator by reference. Entries
//! keep their registration order so help text and listings are stable.

use indexmap::IndexMap;

use crate::evaluator::EvalError;

/// A pure binary numeric function.
pub type BinaryFn = fn(f64, f64) -> f64;

/// Symbol of the division operator, the only entry with a divisor guard.
const DIVISION: &str = "/";

/// Mapping from operator symbol to its binary function.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    ops: IndexMap<String, BinaryFn>,
}

impl OperatorTable {
    /// The five supported operators: `+ - * / ^`.
    pub fn standard() -> Self {
        Self::empty()
            .with("+", |a, b| a + b)
            .with("-", |a, b| a - b)
            .with("*", |a, b| a * b)
            .with(DIVISION, |a, b| a / b)
            .with("^", f64::powf)
    }

    /// A table with no operators.
    pub fn empty() -> Self {
        Self {
            ops: IndexMap::new(),
        }
    }

    /// Register `symbol`, replacing any previous entry for it.
    pub fn with(mut self, symbol: impl Into<String>, func: BinaryFn) -> Self {
        self.ops.insert(symbol.into(), func);
        self
    }

    /// Look up the function for `symbol`.
    pub fn get(&self, symbol: &str) -> Option<BinaryFn> {
        self.ops.get(symbol).copied()
    }

    /// Returns `true` if `symbol` is registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.ops.contains_key(symbol)
    }

    /// Registered symbols in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply `symbol` to `lhs` and `rhs`.
    ///
    /// Division by zero (either sign) is rejected before the function runs.
    /// Any NaN or infinite result is rejected afterwards.
    pub fn apply(&self, symbol: &str, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let func = self.get(symbol).ok_or_else(|| EvalError::UnknownOperator {
            symbol: symbol.to_string(),
            supported: self.symbols().collect::<Vec<_>>().join(" "),
        })?;

        if symbol == DIVISION && rhs == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        let value = func(lhs, rhs);
        if !value.is_finite() {
            return Err(EvalError::NonFiniteResult {
                symbol: symbol.to_string(),
                lhs,
                rhs,
            });
        }

        Ok(value)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}
