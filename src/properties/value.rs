//! Conversions used by the typed accessors of [`ConfigLoader`].
//!
//! [`ConfigLoader`]: super::ConfigLoader

/// A type that can be read from a stored property value.
pub trait PropertyValue: Sized {
    /// Human readable name used in conversion warnings.
    const KIND: &'static str;

    /// Converts the stored text, or returns `None` when it is not well formed.
    fn from_property(raw: &str) -> Option<Self>;
}

impl PropertyValue for String {
    const KIND: &'static str = "a string";

    fn from_property(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

impl PropertyValue for i64 {
    const KIND: &'static str = "a long";

    fn from_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl PropertyValue for i32 {
    const KIND: &'static str = "an integer";

    fn from_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

// Narrow integers are read as 32-bit and truncated.
impl PropertyValue for i16 {
    const KIND: &'static str = "an integer";

    fn from_property(raw: &str) -> Option<Self> {
        i32::from_property(raw).map(|v| v as i16)
    }
}

impl PropertyValue for i8 {
    const KIND: &'static str = "an integer";

    fn from_property(raw: &str) -> Option<Self> {
        i32::from_property(raw).map(|v| v as i8)
    }
}

impl PropertyValue for f64 {
    const KIND: &'static str = "a double";

    fn from_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl PropertyValue for f32 {
    const KIND: &'static str = "a float";

    fn from_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(i64::from_property("-9000000000"), Some(-9_000_000_000));
        assert_eq!(i32::from_property("42"), Some(42));
        assert_eq!(i32::from_property("4.2"), None);
        assert_eq!(i32::from_property(" 42"), None);
        assert_eq!(i32::from_property("9000000000"), None);
    }

    #[test]
    fn test_narrow_integers_truncate() {
        assert_eq!(i16::from_property("70000"), Some(70000_i32 as i16));
        assert_eq!(i8::from_property("300"), Some(44));
        assert_eq!(i8::from_property("-1"), Some(-1));
        assert_eq!(i16::from_property("nope"), None);
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_property("2.5"), Some(2.5));
        assert_eq!(f64::from_property("1e3"), Some(1000.0));
        assert_eq!(f32::from_property("0.25"), Some(0.25));
        assert_eq!(f64::from_property("two"), None);
    }
}
