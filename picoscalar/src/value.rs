// SPDX-License-Identifier: Apache-2.0

/// A decoded JSON scalar.
///
/// Only [`Value::Number`] carries a payload, so a number can never be read
/// out of a value that does not hold one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// `null`, also the state of a value before (or after a failed) parse.
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A number, always finite.
    Number(f64),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    True,
    False,
    Number,
}

impl Value {
    /// Returns the active variant.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::True => ValueType::True,
            Value::False => ValueType::False,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// Get the number if this value is one.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean if this value is `true` or `false`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}
