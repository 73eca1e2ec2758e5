//! Values stored on the blackboard.

/// A value held in a blackboard slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer-based value
    Integer(i64),
    /// Float-based value
    Float(f64),
    /// String value
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Collection of `Value`s
    Vec(Vec<Value>),
}

impl Value {
    /// Returns the string representation of the value.
    pub fn as_string(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::String(value) => value.clone(),
            Value::Boolean(value) => value.to_string(),
            Value::Vec(vec) => {
                let mut output = String::from("[");

                for (i, item) in vec.iter().enumerate() {
                    output.push_str(&item.as_string());

                    if i < vec.len() - 1 {
                        output.push(',');
                    }
                }

                output.push(']');

                output
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($int:ty)+) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Value {
                    Value::Integer(value as i64)
                }
            }
        )+
    };
}

impl_from_int! { i8 u8 i16 u16 i32 u32 i64 u64 }

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Value {
        Value::Float(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::String(value.to_string())
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Value {
        Value::Vec(value.into_iter().map(Into::into).collect())
    }
}

/// Typed extraction from a blackboard [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value_int {
    ($($int:ty)+) => {
        $(
            impl FromValue for $int {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Integer(i) => <$int>::try_from(*i).ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_from_value_int! { i8 u8 i16 u16 i32 u32 i64 u64 }

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for Vec<i64> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Vec(items) => items
                .iter()
                .map(|item| match item {
                    Value::Integer(i) => Some(*i),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::integer(Value::Integer(128), "128")]
    #[case::float(Value::Float(1.23), "1.23")]
    #[case::string(Value::String("hello".into()), "hello")]
    #[case::boolean(Value::Boolean(true), "true")]
    #[case::vec_ints(Value::Vec(vec![1.into(), 2.into(), 3.into()]), "[1,2,3]")]
    fn as_string(#[case] value: Value, #[case] output: &str) {
        assert_eq!(value.as_string(), output);
    }

    #[test]
    fn vec_conversion_roundtrip() {
        let value = Value::from(vec![1i64, 2, 3]);
        assert_eq!(
            value,
            Value::Vec(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3)
            ])
        );
        assert_eq!(Vec::<i64>::from_value(&value), Some(vec![1, 2, 3]));
    }

    #[rstest]
    #[case::int_as_string(Value::Integer(1), None)]
    #[case::string(Value::String("x".into()), Some("x".to_string()))]
    fn typed_extraction_is_strict(#[case] value: Value, #[case] expected: Option<String>) {
        assert_eq!(String::from_value(&value), expected);
    }

    #[test]
    fn narrowing_extraction_checks_range() {
        assert_eq!(u8::from_value(&Value::Integer(300)), None);
        assert_eq!(u8::from_value(&Value::Integer(42)), Some(42));
    }
}
