//! Value conversions between Rust types and Turso column values

pub use turso::Value;

use crate::error::Error;
use crate::error::Result;

/// Conversion of a Rust value into a bound query parameter.
///
/// Patterns and records store [`Value`]s, so anything implementing this
/// trait can be placed in a [`Pattern`](crate::Pattern) or a
/// [`Record`](crate::Record).
///
/// ```ignore
/// let value: Value = 42i64.into_value();
/// let text: Value = "hello".into_value();
/// ```
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Conversion of a column value read from a row into a Rust type.
pub trait FromValue: Sized {
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedNull`] for a NULL read into a non-nullable
    /// type and [`Error::TypeConversion`] when the storage class does not fit.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch(expected: &'static str, actual: Value) -> Error {
    match actual {
        Value::Null => Error::UnexpectedNull,
        other => Error::TypeConversion { expected, actual: format!("{:?}", other) },
    }
}

macro_rules! integer_value {
    ($($ty:ty),*) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Integer(self as i64)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    let wide = i64::from_value(value)?;
                    <$ty>::try_from(wide).map_err(|_| Error::TypeConversion {
                        expected: stringify!($ty),
                        actual:   wide.to_string(),
                    })
                }
            }
        )*
    };
}

integer_value!(i32, i16, i8, u32, u16, u8);

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(v) => Ok(v),
            Value::Real(v) => Ok(v as i64),
            other => Err(mismatch("Integer", other)),
        }
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Real(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Real(self as f64)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Real(v) => Ok(v),
            Value::Integer(v) => Ok(v as f64),
            other => Err(mismatch("Real", other)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Integer(if self { 1 } else { 0 })
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(v) => Ok(v != 0),
            other => Err(mismatch("Integer (boolean)", other)),
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(mismatch("Text", other)),
        }
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Blob(self)
    }
}

impl IntoValue for &[u8] {
    fn into_value(self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v),
            other => Err(mismatch("Blob", other)),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for &Value {
    fn into_value(self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

#[cfg(feature = "with-chrono")]
mod chrono_impl {
    use chrono::DateTime;
    use chrono::NaiveDate;
    use chrono::NaiveDateTime;
    use chrono::Utc;

    use super::*;

    const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    impl IntoValue for NaiveDateTime {
        fn into_value(self) -> Value {
            Value::Text(self.format(DATETIME_FORMAT).to_string())
        }
    }

    impl FromValue for NaiveDateTime {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
                    .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
                    .map_err(|_| Error::TypeConversion { expected: "NaiveDateTime", actual: s }),
                other => Err(mismatch("Text (datetime)", other)),
            }
        }
    }

    impl IntoValue for DateTime<Utc> {
        fn into_value(self) -> Value {
            self.naive_utc().into_value()
        }
    }

    impl FromValue for DateTime<Utc> {
        fn from_value(value: Value) -> Result<Self> {
            NaiveDateTime::from_value(value).map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
        }
    }

    impl IntoValue for NaiveDate {
        fn into_value(self) -> Value {
            Value::Text(self.format("%Y-%m-%d").to_string())
        }
    }

    impl FromValue for NaiveDate {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|_| Error::TypeConversion { expected: "NaiveDate", actual: s }),
                other => Err(mismatch("Text (date)", other)),
            }
        }
    }
}

#[cfg(feature = "with-uuid")]
mod uuid_impl {
    use uuid::Uuid;

    use super::*;

    impl IntoValue for Uuid {
        fn into_value(self) -> Value {
            Value::Text(self.to_string())
        }
    }

    impl FromValue for Uuid {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => {
                    Uuid::parse_str(&s).map_err(|_| Error::TypeConversion { expected: "UUID", actual: s })
                }
                Value::Blob(b) => Uuid::from_slice(&b)
                    .map_err(|_| Error::TypeConversion { expected: "UUID", actual: format!("{:?}", b) }),
                other => Err(mismatch("Text or Blob (UUID)", other)),
            }
        }
    }
}

#[cfg(feature = "with-json")]
pub use json_impl::Json;

#[cfg(feature = "with-json")]
mod json_impl {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::*;

    /// Stores `T` as JSON text.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Json<T>(pub T);

    impl<T: Serialize> IntoValue for Json<T> {
        fn into_value(self) -> Value {
            match serde_json::to_string(&self.0) {
                Ok(s) => Value::Text(s),
                Err(_) => Value::Null,
            }
        }
    }

    impl<T: DeserializeOwned> FromValue for Json<T> {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => Ok(Json(serde_json::from_str(&s)?)),
                other => Err(mismatch("Text (JSON)", other)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_into_value() {
        assert_eq!(42i64.into_value(), Value::Integer(42));
        assert_eq!(7i32.into_value(), Value::Integer(7));
        assert_eq!(255u8.into_value(), Value::Integer(255));
    }

    #[test]
    fn test_narrow_integer_overflow_is_an_error() {
        let result = u8::from_value(Value::Integer(300));
        assert!(matches!(result, Err(Error::TypeConversion { expected: "u8", .. })));
    }

    #[test]
    fn test_i64_from_real_truncates() {
        assert_eq!(i64::from_value(Value::Real(3.9)).unwrap(), 3);
    }

    #[test]
    fn test_null_into_non_nullable() {
        assert!(matches!(String::from_value(Value::Null), Err(Error::UnexpectedNull)));
        assert!(matches!(i64::from_value(Value::Null), Err(Error::UnexpectedNull)));
    }

    #[test]
    fn test_text_into_integer_is_type_conversion() {
        let err = i64::from_value(Value::Text("abc".to_string())).unwrap_err();
        assert!(matches!(err, Error::TypeConversion { expected: "Integer", .. }));
    }

    #[test]
    fn test_option_round_trip_null() {
        assert_eq!(None::<i64>.into_value(), Value::Null);
        assert_eq!(Option::<i64>::from_value(Value::Null).unwrap(), None);
        assert_eq!(Option::<i64>::from_value(Value::Integer(5)).unwrap(), Some(5));
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(true.into_value(), Value::Integer(1));
        assert!(!bool::from_value(Value::Integer(0)).unwrap());
        assert!(bool::from_value(Value::Integer(2)).unwrap());
    }

    #[test]
    fn test_blob_conversions() {
        let bytes: &[u8] = &[1, 2, 3];
        assert_eq!(bytes.into_value(), Value::Blob(vec![1, 2, 3]));
        assert_eq!(Vec::<u8>::from_value(Value::Blob(vec![9])).unwrap(), vec![9]);
    }

    #[test]
    fn test_f64_from_integer() {
        assert_eq!(f64::from_value(Value::Integer(2)).unwrap(), 2.0);
    }

    #[cfg(feature = "with-chrono")]
    #[test]
    fn test_naive_date_round_trip() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let value = date.into_value();
        assert_eq!(value, Value::Text("2024-02-29".to_string()));
        assert_eq!(chrono::NaiveDate::from_value(value).unwrap(), date);
    }

    #[cfg(feature = "with-uuid")]
    #[test]
    fn test_uuid_from_text() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(uuid::Uuid::from_value(Value::Text(id.to_string())).unwrap(), id);
    }

    #[cfg(feature = "with-json")]
    #[test]
    fn test_json_round_trip() {
        let tags: std::collections::BTreeMap<String, Vec<i64>> =
            [("a".to_string(), vec![1, 2]), ("b".to_string(), vec![])].into_iter().collect();

        let value = Json(tags.clone()).into_value();
        assert_eq!(value, Value::Text(r#"{"a":[1,2],"b":[]}"#.to_string()));

        let Json(back) = Json::<std::collections::BTreeMap<String, Vec<i64>>>::from_value(value).unwrap();
        assert_eq!(back, tags);
    }

    #[cfg(feature = "with-json")]
    #[test]
    fn test_json_rejects_malformed_text() {
        let err = Json::<Vec<i64>>::from_value(Value::Text("[1,".to_string())).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(matches!(Json::<Vec<i64>>::from_value(Value::Null), Err(Error::UnexpectedNull)));
    }
}
