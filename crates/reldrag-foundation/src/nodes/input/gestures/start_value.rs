//! Coercion of caller-supplied start values.
//!
//! Callers hand over whatever their model stores: integers, floats, optional
//! values or raw text from an input field. Anything that does not describe a
//! number becomes `0.0`.
//!
//! Text follows the DOM `Number()` grammar: surrounding whitespace is
//! ignored, `Infinity` may be signed, and unsigned `0x`, `0o` and `0b`
//! literals are read in their radix. Rust-only spellings such as `inf` or
//! `nan` are not numbers.

pub trait IntoStartValue {
    fn into_start_value(self) -> f64;
}

impl IntoStartValue for f64 {
    fn into_start_value(self) -> f64 {
        if self.is_nan() {
            0.0
        } else {
            self
        }
    }
}

impl IntoStartValue for f32 {
    fn into_start_value(self) -> f64 {
        f64::from(self).into_start_value()
    }
}

macro_rules! impl_lossless_start_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoStartValue for $ty {
                fn into_start_value(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_lossless_start_value!(u8, i8, u16, i16, u32, i32);

impl IntoStartValue for i64 {
    fn into_start_value(self) -> f64 {
        self as f64
    }
}

impl IntoStartValue for u64 {
    fn into_start_value(self) -> f64 {
        self as f64
    }
}

impl IntoStartValue for usize {
    fn into_start_value(self) -> f64 {
        self as f64
    }
}

impl IntoStartValue for bool {
    fn into_start_value(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

fn parse_number_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(prefix) = text.get(..2) {
        let radix = match prefix {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&text[2..], radix);
        }
    }
    let decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return None;
    }
    text.parse::<f64>().ok()
}

impl IntoStartValue for &str {
    fn into_start_value(self) -> f64 {
        parse_number_text(self)
            .map(IntoStartValue::into_start_value)
            .unwrap_or(0.0)
    }
}

impl IntoStartValue for &String {
    fn into_start_value(self) -> f64 {
        self.as_str().into_start_value()
    }
}

impl IntoStartValue for String {
    fn into_start_value(self) -> f64 {
        self.as_str().into_start_value()
    }
}

impl<T: IntoStartValue> IntoStartValue for Option<T> {
    fn into_start_value(self) -> f64 {
        self.map(IntoStartValue::into_start_value).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(64u8.into_start_value(), 64.0);
        assert_eq!((-3i32).into_start_value(), -3.0);
        assert_eq!(12.25f32.into_start_value(), 12.25);
    }

    #[test]
    fn nan_and_missing_become_zero() {
        assert_eq!(f64::NAN.into_start_value(), 0.0);
        assert_eq!(None::<f64>.into_start_value(), 0.0);
        assert_eq!(Some(5u8).into_start_value(), 5.0);
    }

    #[test]
    fn text_is_parsed_or_zeroed() {
        assert_eq!(" 42 ".into_start_value(), 42.0);
        assert_eq!("".into_start_value(), 0.0);
        assert_eq!("fader".into_start_value(), 0.0);
        assert_eq!("NaN".into_start_value(), 0.0);
        assert_eq!(String::from("-7.5").into_start_value(), -7.5);
        assert_eq!(".5".into_start_value(), 0.5);
        assert_eq!("1e2".into_start_value(), 100.0);
    }

    #[test]
    fn text_follows_dom_number_grammar() {
        assert_eq!("0x10".into_start_value(), 16.0);
        assert_eq!("0o17".into_start_value(), 15.0);
        assert_eq!("0B101".into_start_value(), 5.0);
        assert_eq!("0x".into_start_value(), 0.0);
        assert_eq!("-0x10".into_start_value(), 0.0);
        assert_eq!("0x1g".into_start_value(), 0.0);
        assert_eq!("Infinity".into_start_value(), f64::INFINITY);
        assert_eq!("-Infinity".into_start_value(), f64::NEG_INFINITY);
        assert_eq!("inf".into_start_value(), 0.0);
        assert_eq!("infinity".into_start_value(), 0.0);
        assert_eq!("nan".into_start_value(), 0.0);
        assert_eq!("1_000".into_start_value(), 0.0);
    }
}
