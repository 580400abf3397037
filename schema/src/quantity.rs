use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const BINARY_SUFFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];
// index 0 is the milli suffix, index 1 the plain number
const DECIMAL_SUFFIXES: [&str; 8] = ["m", "", "k", "M", "G", "T", "P", "E"];

#[derive(Error, Debug, PartialEq)]
pub enum ParseQuantityError {
    #[error("quantity is empty")]
    Empty,
    #[error("quantity \"{0}\" has no numeric part")]
    MissingNumber(String),
    #[error("quantity \"{0}\" has an unknown suffix")]
    UnknownSuffix(String),
    #[error("quantity \"{0}\" is too large")]
    Overflow(String),
}

///notation family a quantity was written in, kept so it prints back the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    ///Ki, Mi, Gi ...
    BinarySI,
    ///m, k, M, G ...
    DecimalSI,
    ///1e3, 5E6 ...
    DecimalExponent,
}

///Quantity a resource amount such as `128Mi` or `500m`.
///
/// The value is kept in thousandths of the base unit; anything finer is rounded up.
/// Two quantities are equal when they hold the same value in the same notation family,
/// so `1Gi` equals `1024Mi` but not `1073741824`.
///
/// A value that has no exact binary or exponent spelling is kept as DecimalSI,
/// so `1.953125Ki` is `2k` and the printed form always parses back to the same quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    milli: i128,
    format: Format,
}

impl Quantity {
    pub fn parse(s: &str) -> Result<Quantity, ParseQuantityError> {
        s.parse()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    ///value in thousandths of the base unit
    pub fn milli_value(&self) -> i128 {
        self.milli
    }

    ///value in base units, rounded up
    pub fn value(&self) -> i128 {
        div_ceil(self.milli, 1000)
    }
}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ParseQuantityError::Empty);
        }

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let number_len = unsigned
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or_else(|| unsigned.len());
        let (number, suffix) = unsigned.split_at(number_len);

        let (whole, fraction) = match number.find('.') {
            Some(i) => (&number[..i], &number[i + 1..]),
            None => (number, ""),
        };
        if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
            return Err(ParseQuantityError::MissingNumber(input.to_string()));
        }

        let overflow = || ParseQuantityError::Overflow(input.to_string());
        let mut mantissa: i128 = 0;
        for digit in whole.bytes().chain(fraction.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit - b'0')))
                .ok_or_else(overflow)?;
        }
        let fraction_digits = fraction.len() as i32;

        let (format, milli) = if let Some(power) = BINARY_SUFFIXES
            .iter()
            .skip(1)
            .position(|&b| b == suffix)
        {
            let multiplier = 1024i128.pow(power as u32 + 1);
            let scaled = mantissa
                .checked_mul(multiplier)
                .and_then(|m| m.checked_mul(1000))
                .ok_or_else(overflow)?;
            (Format::BinarySI, div_ceil(scaled, pow10(fraction_digits).ok_or_else(overflow)?))
        } else if let Some(exponent) = decimal_si_exponent(suffix) {
            let exponent = milli_exponent(exponent, fraction_digits).ok_or_else(overflow)?;
            (Format::DecimalSI, scale(mantissa, exponent).ok_or_else(overflow)?)
        } else {
            let exponent = decimal_exponent(suffix)
                .ok_or_else(|| ParseQuantityError::UnknownSuffix(input.to_string()))?;
            let exponent = milli_exponent(exponent, fraction_digits).ok_or_else(overflow)?;
            (Format::DecimalExponent, scale(mantissa, exponent).ok_or_else(overflow)?)
        };

        Ok(Quantity {
            milli: if negative { -milli } else { milli },
            format: printable_format(format, milli),
        })
    }
}

fn decimal_si_exponent(suffix: &str) -> Option<i32> {
    let exponent = match suffix {
        "n" => -9,
        "u" => -6,
        "m" => -3,
        "" => 0,
        "k" => 3,
        "M" => 6,
        "G" => 9,
        "T" => 12,
        "P" => 15,
        "E" => 18,
        _ => return None,
    };
    Some(exponent)
}

///power of ten written as `e<int>` or `E<int>`
fn decimal_exponent(suffix: &str) -> Option<i32> {
    let rest = suffix
        .strip_prefix('e')
        .or_else(|| suffix.strip_prefix('E'))?;
    rest.parse::<i32>().ok()
}

///power of ten that turns the written mantissa into thousandths
fn milli_exponent(exponent: i32, fraction_digits: i32) -> Option<i32> {
    exponent.checked_add(3)?.checked_sub(fraction_digits)
}

///index into DECIMAL_SUFFIXES of the largest power of 1000 dividing the value
fn decimal_index(milli: i128) -> usize {
    if milli == 0 {
        return 1;
    }
    let mut index = 0;
    while index + 1 < DECIMAL_SUFFIXES.len() && milli % 1000i128.pow(index as u32 + 1) == 0
    {
        index += 1;
    }
    index
}

///falls back to DecimalSI when the value cannot be written in the requested family
fn printable_format(format: Format, milli: i128) -> Format {
    match format {
        Format::BinarySI if milli != 0 && milli % (1000 * 1024) == 0 => Format::BinarySI,
        Format::DecimalExponent if decimal_index(milli) != 1 => Format::DecimalExponent,
        _ => Format::DecimalSI,
    }
}

fn pow10(exponent: i32) -> Option<i128> {
    if exponent < 0 {
        return None;
    }
    10i128.checked_pow(exponent as u32)
}

///multiplies by 10^exponent, rounding up when the exponent is negative
fn scale(value: i128, exponent: i32) -> Option<i128> {
    if exponent >= 0 {
        value.checked_mul(pow10(exponent)?)
    } else {
        // anything beyond 38 digits rounds a non-zero value up to one
        match exponent.checked_neg().and_then(pow10) {
            Some(divisor) => Some(div_ceil(value, divisor)),
            None => Some(if value == 0 { 0 } else { 1 }),
        }
    }
}

fn div_ceil(value: i128, divisor: i128) -> i128 {
    let quotient = value / divisor;
    if value % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milli < 0 {
            f.write_str("-")?;
        }
        let milli = self.milli.abs();

        if printable_format(self.format, milli) == Format::BinarySI {
            let value = milli / 1000;
            let mut power = 0;
            while power + 1 < BINARY_SUFFIXES.len()
                && value != 0
                && value % 1024i128.pow(power as u32 + 1) == 0
            {
                power += 1;
            }
            return write!(
                f,
                "{}{}",
                value / 1024i128.pow(power as u32),
                BINARY_SUFFIXES[power]
            );
        }

        let index = decimal_index(milli);
        let value = milli / 1000i128.pow(index as u32);
        match printable_format(self.format, milli) {
            Format::DecimalExponent if index == 1 => write!(f, "{}", value),
            Format::DecimalExponent => write!(f, "{}e{}", value, 3 * (index as i32 - 1)),
            _ => write!(f, "{}{}", value, DECIMAL_SUFFIXES[index]),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a quantity such as \"128Mi\" or a number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Quantity {
            milli: i128::from(v) * 1000,
            format: Format::DecimalSI,
        })
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Quantity {
            milli: i128::from(v) * 1000,
            format: Format::DecimalSI,
        })
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.to_string().parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor)
    }
}
