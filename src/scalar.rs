//! Cell values and element-type metadata.
//!
//! [`Scalar`] is the value stored in every cell of a [`Series`](crate::Series)
//! or [`Table`](crate::Table). [`Dtype`] is the element-type metadata inferred
//! from a run of scalars, the way a column knows whether it holds integers,
//! floats or arbitrary objects.
//!
//! ```rust
//! use fancy_collections::{Dtype, Scalar};
//!
//! let cells = [Scalar::from(1), Scalar::Null, Scalar::from(3)];
//! assert_eq!(Dtype::infer(&cells), Dtype::Float64);
//! assert!(Scalar::Null.equivalent(&Scalar::Float(f64::NAN)));
//! ```

use chrono::{DateTime, Timelike, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value.
///
/// `Null` and a NaN `Float` are both treated as missing.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(DateTime<Utc>),
    BigInt(BigInt),
}

/// Element-type metadata of a column of scalars or of a label sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dtype {
    Bool,
    Int64,
    Float64,
    Object,
    Datetime,
}

impl Dtype {
    /// Returns the conventional name of this dtype.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dtype::Bool => "bool",
            Dtype::Int64 => "int64",
            Dtype::Float64 => "float64",
            Dtype::Object => "object",
            Dtype::Datetime => "datetime64[ns]",
        }
    }

    /// Infers the dtype of a run of scalars.
    ///
    /// Integers mixed with floats or missing values widen to `Float64`.
    /// Dates tolerate missing values. An empty run is `Object`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::{Dtype, Scalar};
    ///
    /// assert_eq!(Dtype::infer(&[Scalar::from(1), Scalar::from(2)]), Dtype::Int64);
    /// assert_eq!(Dtype::infer(&[Scalar::from(1), Scalar::from(2.5)]), Dtype::Float64);
    /// assert_eq!(Dtype::infer(&[Scalar::from(1), Scalar::from("x")]), Dtype::Object);
    /// assert_eq!(Dtype::infer(&[]), Dtype::Object);
    /// ```
    #[must_use]
    pub fn infer<'a, I>(scalars: I) -> Dtype
    where
        I: IntoIterator<Item = &'a Scalar>,
    {
        let (mut bools, mut ints, mut floats, mut dates, mut nulls, mut others) =
            (0usize, 0usize, 0usize, 0usize, 0usize, 0usize);
        for scalar in scalars {
            match scalar {
                Scalar::Null => nulls += 1,
                Scalar::Bool(_) => bools += 1,
                Scalar::Int(_) => ints += 1,
                Scalar::Float(_) => floats += 1,
                Scalar::Date(_) => dates += 1,
                Scalar::Str(_) | Scalar::BigInt(_) => others += 1,
            }
        }
        let total = bools + ints + floats + dates + nulls + others;
        if total == 0 || others > 0 {
            return Dtype::Object;
        }
        if bools == total {
            Dtype::Bool
        } else if ints == total {
            Dtype::Int64
        } else if ints + floats + nulls == total {
            Dtype::Float64
        } else if dates + nulls == total && dates > 0 {
            Dtype::Datetime
        } else {
            Dtype::Object
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Scalar {
    /// Returns `true` for `Null` and NaN floats.
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// If the value is numeric, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Element-wise equivalence: equal values, or both missing.
    ///
    /// Integers and floats compare numerically. Values of incomparable kinds
    /// are simply not equivalent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::Scalar;
    ///
    /// assert!(Scalar::from(1).equivalent(&Scalar::from(1.0)));
    /// assert!(Scalar::Null.equivalent(&Scalar::Null));
    /// assert!(!Scalar::from(1).equivalent(&Scalar::from("1")));
    /// ```
    #[must_use]
    pub fn equivalent(&self, other: &Scalar) -> bool {
        if self.is_missing() || other.is_missing() {
            return self.is_missing() && other.is_missing();
        }
        match (self, other) {
            (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => {
                (*a as f64) == *b
            }
            (Scalar::Int(a), Scalar::BigInt(b)) | (Scalar::BigInt(b), Scalar::Int(a)) => {
                BigInt::from(*a) == *b
            }
            (a, b) => a == b,
        }
    }
}

pub(crate) fn fmt_datetime(dt: &DateTime<Utc>) -> String {
    if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("NaN"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(fl) if fl.is_nan() => f.write_str("NaN"),
            Scalar::Float(fl) if fl.is_infinite() => {
                f.write_str(if *fl > 0.0 { "inf" } else { "-inf" })
            }
            Scalar::Float(fl) if fl.fract() == 0.0 && fl.abs() < 1e16 => write!(f, "{:.1}", fl),
            Scalar::Float(fl) => write!(f, "{}", fl),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Date(dt) => f.write_str(&fmt_datetime(dt)),
            Scalar::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i8> for Scalar {
    fn from(value: i8) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i16> for Scalar {
    fn from(value: i16) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u16> for Scalar {
    fn from(value: u16) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value as f64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::Date(value)
    }
}

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Self {
        Scalar::BigInt(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_infer_dtypes() {
        assert_eq!(Dtype::infer(&[Scalar::Bool(true)]), Dtype::Bool);
        assert_eq!(Dtype::infer(&[Scalar::Int(1), Scalar::Null]), Dtype::Float64);
        assert_eq!(Dtype::infer(&[Scalar::Null]), Dtype::Float64);
        let day = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            Dtype::infer(&[Scalar::Date(day), Scalar::Null]),
            Dtype::Datetime
        );
        assert_eq!(
            Dtype::infer(&[Scalar::BigInt(BigInt::from(7))]),
            Dtype::Object
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Int(11).to_string(), "11");
        assert_eq!(Scalar::Float(11.0).to_string(), "11.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");
        assert_eq!(Scalar::Null.to_string(), "NaN");
        let noon = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap();
        assert_eq!(Scalar::Date(noon).to_string(), "2024-03-05 12:30:00");
    }

    #[test]
    fn test_equivalence_is_total() {
        assert!(Scalar::Float(f64::NAN).equivalent(&Scalar::Null));
        assert!(!Scalar::Null.equivalent(&Scalar::Int(0)));
        assert!(Scalar::BigInt(BigInt::from(5)).equivalent(&Scalar::Int(5)));
        assert!(!Scalar::Bool(true).equivalent(&Scalar::Int(1)));
    }
}
