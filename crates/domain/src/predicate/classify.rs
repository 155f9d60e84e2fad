//! Classification of predicates into recognized condition shapes.

use crate::condition::{Condition, SolarEvent, TimeOrder};

use super::{
    CHARACTERISTIC_KEY_PATH, CHARACTERISTIC_VALUE_KEY_PATH, Combinator, Constant, Expression,
    Operator, Predicate, SUNRISE_KEY_PATH, SUNSET_KEY_PATH,
};

impl Predicate {
    /// Classify this predicate into its recognized condition shape.
    ///
    /// Shapes are tried in a fixed order: characteristic pair, then solar
    /// comparison, then exact-time comparison. The first match wins and
    /// everything else is [`Condition::Unrecognized`]. Classification is
    /// pure: no state, no errors, identical input gives identical output.
    #[must_use]
    pub fn classify(&self) -> Condition {
        self.characteristic_pair()
            .or_else(|| self.solar_pair())
            .or_else(|| self.exact_time_pair())
            .unwrap_or(Condition::Unrecognized)
    }

    /// An AND of exactly two comparisons, one binding the characteristic
    /// key-path to a characteristic constant and the other binding the
    /// value key-path to a value constant, in either order.
    fn characteristic_pair(&self) -> Option<Condition> {
        let Self::Compound {
            combinator: Combinator::And,
            subpredicates,
        } = self
        else {
            return None;
        };
        let [first, second] = subpredicates.as_slice() else {
            return None;
        };

        let mut characteristic = None;
        let mut value = None;
        for sub in [first, second] {
            // Only `key_path <op> constant` comparisons can bind a half of
            // the pair. The operator itself is not inspected.
            let Self::Comparison {
                left: Expression::KeyPath { path },
                operator: _,
                right: Expression::Constant { constant },
            } = sub
            else {
                continue;
            };
            match (path.as_str(), constant) {
                (
                    CHARACTERISTIC_KEY_PATH,
                    Constant::Characteristic {
                        characteristic: found,
                    },
                ) => characteristic = Some(found.clone()),
                (CHARACTERISTIC_VALUE_KEY_PATH, Constant::Value { value: found }) => {
                    value = Some(found.clone());
                }
                _ => {}
            }
        }

        Some(Condition::Characteristic {
            characteristic: characteristic?,
            value: value?,
        })
    }

    /// A single comparison of a solar key-path against the zero-argument
    /// `now()` call.
    fn solar_pair(&self) -> Option<Condition> {
        let Self::Comparison {
            left: Expression::KeyPath { path },
            operator,
            right,
        } = self
        else {
            return None;
        };
        if !right.is_now_call() {
            return None;
        }
        // `<` and `<=` collapse to the same ordering, as do `>` and `>=`.
        // The boundary-inclusive distinction is discarded at this layer.
        let (order, event) = match (path.as_str(), operator) {
            (SUNRISE_KEY_PATH, Operator::LessThan | Operator::LessThanOrEqual) => {
                (TimeOrder::After, SolarEvent::Sunrise)
            }
            (SUNRISE_KEY_PATH, Operator::GreaterThan | Operator::GreaterThanOrEqual) => {
                (TimeOrder::Before, SolarEvent::Sunrise)
            }
            (SUNSET_KEY_PATH, Operator::LessThan | Operator::LessThanOrEqual) => {
                (TimeOrder::After, SolarEvent::Sunset)
            }
            (SUNSET_KEY_PATH, Operator::GreaterThan | Operator::GreaterThanOrEqual) => {
                (TimeOrder::Before, SolarEvent::Sunset)
            }
            _ => return None,
        };
        Some(Condition::Solar { order, event })
    }

    /// A single comparison of the zero-argument `now()` call against a
    /// time-of-day constant.
    fn exact_time_pair(&self) -> Option<Condition> {
        let Self::Comparison {
            left,
            operator,
            right:
                Expression::Constant {
                    constant: Constant::Time { time },
                },
        } = self
        else {
            return None;
        };
        if !left.is_now_call() {
            return None;
        }
        let order = match operator {
            Operator::LessThan | Operator::LessThanOrEqual => TimeOrder::Before,
            Operator::GreaterThan | Operator::GreaterThanOrEqual => TimeOrder::After,
            Operator::Equal => TimeOrder::At,
            Operator::NotEqual => return None,
        };
        Some(Condition::ExactTime { order, time: *time })
    }
}
