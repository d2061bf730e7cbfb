//! Parameter type tags, typed values, and coercion.
//!
//! Every parameter declares one of a fixed set of types. Raw tokens from the
//! command line (or prompt responses) are converted with [`ParamType::coerce`].

use std::fmt;

/// Type tag for a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Any token, taken verbatim.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Presence flag.
    Boolean,
}

impl ParamType {
    /// Returns the short type name shown in help and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
        }
    }

    /// Name shown in per-command help. Booleans render as an empty column
    /// because they take no value.
    pub fn help_name(&self) -> &'static str {
        match self {
            Self::Boolean => "",
            other => other.name(),
        }
    }

    /// Converts a raw token into a value of this type.
    ///
    /// Returns `None` when the token does not represent a value of this type.
    /// Numeric parsing ignores surrounding whitespace; strings are kept as-is.
    pub fn coerce(&self, raw: &str) -> Option<Value> {
        match self {
            Self::String => Some(Value::Str(raw.to_string())),
            Self::Integer => raw.trim().parse().ok().map(Value::Int),
            Self::Float => raw.trim().parse().ok().map(Value::Float),
            Self::Boolean => parse_bool(raw.trim()).map(Value::Bool),
        }
    }

    /// Converts the token that follows a flag on the command line.
    ///
    /// A boolean flag given an explicit value is set by any non-empty token,
    /// so `-help 0` still asks for help. Other types coerce as in [`coerce`].
    ///
    /// [`coerce`]: ParamType::coerce
    pub fn coerce_flag_value(&self, raw: &str) -> Option<Value> {
        match self {
            Self::Boolean => Some(Value::Bool(!raw.is_empty())),
            other => other.coerce(raw),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Returns the type tag matching this value.
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Str(_) => ParamType::String,
            Self::Int(_) => ParamType::Integer,
            Self::Float(_) => ParamType::Float,
            Self::Bool(_) => ParamType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
