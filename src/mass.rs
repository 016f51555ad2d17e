//! Normalization of the catalog mass field.
//!
//! Catalogs report planet mass (in Earth masses) as a plain number, a numeric
//! string, an upper bound such as `"< 3.5"` or `"≤1,2"`, free text, or not at
//! all. [`MassValue`] classifies the raw field and [`ParsedMass`] is what the
//! scene consumes. Nothing here fails: odd input degrades to a label.

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_LABEL;
use crate::helpers::number_label;

/// Mass field as it appears on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawMass {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MassValue {
    Numeric(f64),
    /// Upper limit; the number is used as the mass.
    Bounded(f64),
    Unparseable(String),
    Missing,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParsedMass {
    pub mass_earth: Option<f64>,
    pub label: String,
}

impl MassValue {
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() {
            MassValue::Numeric(value)
        } else {
            MassValue::Missing
        }
    }

    pub fn from_text(raw: &str) -> Self {
        let normalized = raw.trim().replacen(',', ".", 1);
        match split_bound(&normalized) {
            Some((bounded, value)) if value.is_finite() => {
                if bounded {
                    MassValue::Bounded(value)
                } else {
                    MassValue::Numeric(value)
                }
            }
            _ => MassValue::Unparseable(raw.to_string()),
        }
    }

    pub fn mass_earth(&self) -> Option<f64> {
        match self {
            MassValue::Numeric(v) | MassValue::Bounded(v) => Some(*v),
            MassValue::Unparseable(_) | MassValue::Missing => None,
        }
    }
}

impl From<Option<RawMass>> for MassValue {
    fn from(raw: Option<RawMass>) -> Self {
        match raw {
            None => MassValue::Missing,
            Some(RawMass::Number(v)) => MassValue::from_number(v),
            Some(RawMass::Text(s)) => MassValue::from_text(&s),
        }
    }
}

impl From<MassValue> for ParsedMass {
    fn from(value: MassValue) -> Self {
        let mass_earth = value.mass_earth();
        let label = match value {
            MassValue::Numeric(v) => number_label(v),
            MassValue::Bounded(v) => format!("< {}", number_label(v)),
            MassValue::Unparseable(raw) if !raw.trim().is_empty() => raw,
            MassValue::Unparseable(_) | MassValue::Missing => UNKNOWN_LABEL.to_string(),
        };
        ParsedMass { mass_earth, label }
    }
}

impl ParsedMass {
    pub fn unknown() -> Self {
        MassValue::Missing.into()
    }

    pub fn is_known(&self) -> bool {
        self.mass_earth.is_some()
    }
}

pub fn parse_mass(raw: Option<RawMass>) -> ParsedMass {
    MassValue::from(raw).into()
}

pub fn parse_mass_f64(value: f64) -> ParsedMass {
    MassValue::from_number(value).into()
}

pub fn parse_mass_str(value: &str) -> ParsedMass {
    MassValue::from_text(value).into()
}

/// Leading `[<≤]\s*` marker followed by `\d+(\.\d+)?`. Anything after the
/// number is ignored.
fn split_bound(text: &str) -> Option<(bool, f64)> {
    let (bounded, rest) = match text.strip_prefix(['<', '≤']) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }
    let mut end = int_len;
    if let Some(after_dot) = rest[int_len..].strip_prefix('.') {
        let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    rest[..end].parse::<f64>().ok().map(|v| (bounded, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_non_finite() {
        let expected = ParsedMass {
            mass_earth: None,
            label: "—".to_string(),
        };
        assert_eq!(parse_mass(None), expected);
        assert_eq!(parse_mass_f64(f64::NAN), expected);
        assert_eq!(parse_mass_f64(f64::INFINITY), expected);
        assert_eq!(ParsedMass::unknown(), expected);
    }

    #[test]
    fn test_numeric() {
        let parsed = parse_mass_f64(5.0);
        assert_eq!(parsed.mass_earth, Some(5.0));
        assert_eq!(parsed.label, "5");

        let parsed = parse_mass(Some(RawMass::Number(0.77)));
        assert_eq!(parsed.mass_earth, Some(0.77));
        assert_eq!(parsed.label, "0.77");
    }

    #[test]
    fn test_bounded_strings() {
        let parsed = parse_mass_str("< 3.5");
        assert_eq!(parsed.mass_earth, Some(3.5));
        assert_eq!(parsed.label, "< 3.5");

        let parsed = parse_mass_str("≤1,2");
        assert_eq!(parsed.mass_earth, Some(1.2));
        assert_eq!(parsed.label, "< 1.2");

        let parsed = parse_mass_str("  <0.80 ");
        assert_eq!(parsed.mass_earth, Some(0.8));
        assert_eq!(parsed.label, "< 0.8");
    }

    #[test]
    fn test_plain_numeric_string() {
        let parsed = parse_mass_str("1.8");
        assert_eq!(parsed.mass_earth, Some(1.8));
        assert_eq!(parsed.label, "1.8");

        // trailing text after the number is ignored
        let parsed = parse_mass_str("12 ± 3");
        assert_eq!(parsed.mass_earth, Some(12.0));
        assert_eq!(parsed.label, "12");

        // a dangling dot is not part of the number
        let parsed = parse_mass_str("7.");
        assert_eq!(parsed.mass_earth, Some(7.0));
    }

    #[test]
    fn test_unparseable_keeps_raw_label() {
        let parsed = parse_mass_str("abc");
        assert_eq!(parsed.mass_earth, None);
        assert_eq!(parsed.label, "abc");

        let parsed = parse_mass_str(" >5 ");
        assert_eq!(parsed.mass_earth, None);
        assert_eq!(parsed.label, " >5 ");

        let parsed = parse_mass_str(".5");
        assert_eq!(parsed.mass_earth, None);
    }

    #[test]
    fn test_empty_string_label_is_never_empty() {
        let parsed = parse_mass_str("   ");
        assert_eq!(parsed.mass_earth, None);
        assert_eq!(parsed.label, "—");

        let parsed = parse_mass_str("");
        assert_eq!(parsed.label, "—");
    }

    #[test]
    fn test_classification() {
        assert_eq!(MassValue::from_text("< 2"), MassValue::Bounded(2.0));
        assert_eq!(MassValue::from_text("2"), MassValue::Numeric(2.0));
        assert_eq!(
            MassValue::from_text("n/a"),
            MassValue::Unparseable("n/a".to_string())
        );
        assert_eq!(MassValue::from(None), MassValue::Missing);
    }

    #[test]
    fn test_raw_mass_deserializes_both_shapes() {
        let n: RawMass = serde_json::from_str("5.5").unwrap();
        assert_eq!(n, RawMass::Number(5.5));
        let s: RawMass = serde_json::from_str("\"< 3.5\"").unwrap();
        assert_eq!(s, RawMass::Text("< 3.5".to_string()));
    }
}
