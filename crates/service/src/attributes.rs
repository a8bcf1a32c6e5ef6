//! Attribute extraction and display formatting for population features.
//!
//! The World Population 2015 layer stores population in thousands under
//! `pop2015`; the display rule is to append three zero digits and re-parse
//! before comma-grouping, so `35000` renders as `"35,000,000"`.

use serde_json::Value;

use crate::models::Feature;

/// Attribute name of the country.
pub const FIELD_COUNTRY: &str = "Country";
/// Attribute name of the UN major region.
pub const FIELD_REGION: &str = "Major_Region";
/// Attribute name of the 2015 population, in thousands.
pub const FIELD_POPULATION: &str = "pop2015";

/// The three display attributes of an identified feature.
///
/// A field is `None` when the feature carries no attribute of that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSummary {
    pub country: Option<String>,
    pub region: Option<String>,
    /// Already display-formatted, e.g. `"35,000,000"`.
    pub population: Option<String>,
}

/// Extract the country / region / population display values of a feature.
pub fn summarize(feature: &Feature) -> FeatureSummary {
    FeatureSummary {
        country: feature.attribute(FIELD_COUNTRY).map(value_text),
        region: feature.attribute(FIELD_REGION).map(value_text),
        population: feature.attribute(FIELD_POPULATION).map(format_population),
    }
}

/// Format a raw `pop2015` value for display.
///
/// The raw value is rendered as text, concatenated with `"000"`, parsed back
/// as an integer (falling back to 0 on parse failure), then comma-grouped.
pub fn format_population(raw: &Value) -> String {
    let thousands = format!("{}000", value_text(raw));
    let total: i64 = thousands.parse().unwrap_or(0);
    group_thousands(total)
}

/// Comma-group a non-negative integer: `35000000` -> `"35,000,000"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render an attribute value as plain text.
///
/// Strings come through unquoted; whole-number floats drop the fraction so
/// a `35000.0` from JSON still concatenates into a parseable integer.
fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(attrs: serde_json::Value) -> Feature {
        serde_json::from_value(json!({ "attributes": attrs })).unwrap()
    }

    #[test]
    fn canada_population_display() {
        let f = feature(json!({
            "Country": "Canada",
            "Major_Region": "North America",
            "pop2015": 35000
        }));
        let summary = summarize(&f);
        assert_eq!(summary.country.as_deref(), Some("Canada"));
        assert_eq!(summary.region.as_deref(), Some("North America"));
        assert_eq!(summary.population.as_deref(), Some("35,000,000"));
    }

    #[test]
    fn missing_attributes_stay_none() {
        let f = feature(json!({ "Country": "Iceland" }));
        let summary = summarize(&f);
        assert_eq!(summary.country.as_deref(), Some("Iceland"));
        assert!(summary.region.is_none());
        assert!(summary.population.is_none());
    }

    #[test]
    fn population_from_whole_float() {
        assert_eq!(format_population(&json!(35000.0)), "35,000,000");
    }

    #[test]
    fn population_from_numeric_string() {
        assert_eq!(format_population(&json!("1234")), "1,234,000");
    }

    #[test]
    fn unparseable_population_falls_back_to_zero() {
        assert_eq!(format_population(&json!("n/a")), "0");
        assert_eq!(format_population(&json!(12.5)), "0");
        assert_eq!(format_population(&Value::Null), "0");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(35000000), "35,000,000");
        assert_eq!(group_thousands(1407563842), "1,407,563,842");
        assert_eq!(group_thousands(-52000), "-52,000");
    }
}
