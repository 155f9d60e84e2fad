//! Predicate — boolean expression trees describing when a trigger fires.
//!
//! Predicates are built from comparisons over key-paths, function calls,
//! and constants, optionally combined with a logical combinator. They are
//! plain data: building one never evaluates anything. Classification into
//! a recognized [`Condition`](crate::condition::Condition) shape lives in
//! the `classify` submodule.

mod classify;

use serde::{Deserialize, Serialize};

use crate::characteristic::Characteristic;
use crate::condition::SolarEvent;
use crate::time::TimeOfDay;
use crate::value::Value;

/// Key-path binding the characteristic half of a characteristic pair.
pub const CHARACTERISTIC_KEY_PATH: &str = "characteristic";

/// Key-path binding the value half of a characteristic pair.
pub const CHARACTERISTIC_VALUE_KEY_PATH: &str = "characteristic_value";

/// Key-path of the sunrise solar event.
pub const SUNRISE_KEY_PATH: &str = "sunrise";

/// Key-path of the sunset solar event.
pub const SUNSET_KEY_PATH: &str = "sunset";

/// Name of the current-time function call.
pub const NOW_FUNCTION: &str = "now";

/// A boolean expression tree over home state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// A single comparison between two expressions.
    Comparison {
        left: Expression,
        operator: Operator,
        right: Expression,
    },
    /// Subpredicates joined by a logical combinator.
    Compound {
        combinator: Combinator,
        subpredicates: Vec<Predicate>,
    },
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// Dotted reference to a property, e.g. `sunrise`.
    KeyPath { path: String },
    /// A function call, e.g. `now()`.
    Function {
        name: String,
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    /// A literal operand.
    Constant { constant: Constant },
}

/// A literal operand in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constant {
    Characteristic { characteristic: Characteristic },
    Value { value: Value },
    Time { time: TimeOfDay },
}

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
}

/// Logical combinator for compound predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    And,
    Or,
    Not,
}

impl Predicate {
    /// A single comparison.
    #[must_use]
    pub fn comparison(left: Expression, operator: Operator, right: Expression) -> Self {
        Self::Comparison {
            left,
            operator,
            right,
        }
    }

    /// Join subpredicates with a logical AND.
    #[must_use]
    pub fn and(subpredicates: Vec<Predicate>) -> Self {
        Self::Compound {
            combinator: Combinator::And,
            subpredicates,
        }
    }

    /// The canonical "characteristic equals value" pair: an AND of one
    /// comparison binding the characteristic and one binding its value.
    #[must_use]
    pub fn characteristic_is(characteristic: Characteristic, value: impl Into<Value>) -> Self {
        Self::and(vec![
            Self::comparison(
                Expression::key_path(CHARACTERISTIC_KEY_PATH),
                Operator::Equal,
                Expression::from(characteristic),
            ),
            Self::comparison(
                Expression::key_path(CHARACTERISTIC_VALUE_KEY_PATH),
                Operator::Equal,
                Expression::from(value.into()),
            ),
        ])
    }

    /// True once the solar event has passed: `event < now()`.
    #[must_use]
    pub fn after_solar(event: SolarEvent) -> Self {
        Self::comparison(
            Expression::key_path(event.key_path()),
            Operator::LessThan,
            Expression::now(),
        )
    }

    /// True while the solar event is still ahead: `event > now()`.
    #[must_use]
    pub fn before_solar(event: SolarEvent) -> Self {
        Self::comparison(
            Expression::key_path(event.key_path()),
            Operator::GreaterThan,
            Expression::now(),
        )
    }

    /// True before the given wall-clock time: `now() < time`.
    #[must_use]
    pub fn before_time(time: TimeOfDay) -> Self {
        Self::comparison(Expression::now(), Operator::LessThan, Expression::from(time))
    }

    /// True at the given wall-clock time: `now() = time`.
    #[must_use]
    pub fn at_time(time: TimeOfDay) -> Self {
        Self::comparison(Expression::now(), Operator::Equal, Expression::from(time))
    }

    /// True after the given wall-clock time: `now() > time`.
    #[must_use]
    pub fn after_time(time: TimeOfDay) -> Self {
        Self::comparison(Expression::now(), Operator::GreaterThan, Expression::from(time))
    }
}

impl Expression {
    /// Reference a property by key-path.
    #[must_use]
    pub fn key_path(path: impl Into<String>) -> Self {
        Self::KeyPath { path: path.into() }
    }

    /// The zero-argument current-time function call.
    #[must_use]
    pub fn now() -> Self {
        Self::Function {
            name: NOW_FUNCTION.to_string(),
            arguments: Vec::new(),
        }
    }

    /// Whether this expression is the zero-argument `now()` call.
    #[must_use]
    pub fn is_now_call(&self) -> bool {
        matches!(
            self,
            Self::Function { name, arguments } if name == NOW_FUNCTION && arguments.is_empty()
        )
    }
}

impl From<Characteristic> for Expression {
    fn from(characteristic: Characteristic) -> Self {
        Self::Constant {
            constant: Constant::Characteristic { characteristic },
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Constant {
            constant: Constant::Value { value },
        }
    }
}

impl From<TimeOfDay> for Expression {
    fn from(time: TimeOfDay) -> Self {
        Self::Constant {
            constant: Constant::Time { time },
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comparison {
                left,
                operator,
                right,
            } => write!(f, "{left} {operator} {right}"),
            Self::Compound {
                combinator: Combinator::Not,
                subpredicates,
            } => {
                write!(f, "NOT (")?;
                for (index, sub) in subpredicates.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{sub}")?;
                }
                write!(f, ")")
            }
            Self::Compound {
                combinator,
                subpredicates,
            } => {
                write!(f, "(")?;
                for (index, sub) in subpredicates.iter().enumerate() {
                    if index > 0 {
                        write!(f, " {combinator} ")?;
                    }
                    write!(f, "{sub}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyPath { path } => path.fmt(f),
            Self::Function { name, arguments } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }
            Self::Constant { constant } => constant.fmt(f),
        }
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Characteristic { characteristic } => characteristic.fmt(f),
            Self::Value { value } => value.fmt(f),
            Self::Time { time } => time.fmt(f),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Equal => "=",
            Self::NotEqual => "!=",
        };
        f.write_str(symbol)
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        };
        f.write_str(word)
    }
}
