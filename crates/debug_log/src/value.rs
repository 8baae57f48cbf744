//! Loosely-typed extra values attached to a log call.

use serde_json::Value;

/// A contextual value appended to a log message.
///
/// Structured values are serialized to compact JSON; everything else
/// renders its plain textual form. Values are appended to the formatted
/// line in the order they were given, separated by single spaces.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// Plain text
    Text(String),
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Boolean flag
    Bool(bool),
    /// Structured record, rendered as canonical JSON
    Structured(Value),
}

impl LogValue {
    /// Renders the value for inclusion in a formatted log line.
    pub fn render(&self) -> String {
        match self {
            LogValue::Text(text) => text.clone(),
            LogValue::Int(n) => n.to_string(),
            LogValue::Float(n) => n.to_string(),
            LogValue::Bool(b) => b.to_string(),
            LogValue::Structured(value) => {
                serde_json::to_string(value).unwrap_or_else(|_| "<unrenderable>".to_string())
            }
        }
    }
}

impl std::fmt::Display for LogValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Text(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Text(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Int(value as i64)
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Int(value)
    }
}

impl From<u32> for LogValue {
    fn from(value: u32) -> Self {
        LogValue::Int(value as i64)
    }
}

impl From<u64> for LogValue {
    fn from(value: u64) -> Self {
        LogValue::Int(value as i64)
    }
}

impl From<f32> for LogValue {
    fn from(value: f32) -> Self {
        LogValue::Float(value as f64)
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        LogValue::Structured(value)
    }
}

/// Builds a `Vec<LogValue>` from a mixed argument list.
///
/// # Examples
///
/// ```rust
/// use debug_log::log_values;
/// use serde_json::json;
///
/// let extras = log_values!["shutdown", 42, json!({"code": 7})];
/// assert_eq!(extras.len(), 3);
/// ```
#[macro_export]
macro_rules! log_values {
    () => {
        ::std::vec::Vec::<$crate::LogValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogValue::from($value)),+]
    };
}
