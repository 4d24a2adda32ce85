//! Helpers for flattening nested backend payloads into table rows.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder for missing text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Variant label for a model row that has no variant breakdown.
pub const ALL_VARIANTS: &str = "All Variants";

/// Missing or blank text becomes `"N/A"`.
pub fn text_or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Missing numbers become zero.
pub fn number_or_zero<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// One row per variant when the parent has a non-empty variant list,
/// otherwise one row for the whole parent.
pub fn flatten_variants<P, V, R>(
    parents: &[P],
    variants: impl Fn(&P) -> Option<&[V]>,
    per_variant: impl Fn(&P, &V) -> R,
    whole: impl Fn(&P) -> R,
) -> Vec<R> {
    let mut rows = Vec::with_capacity(parents.len());
    for parent in parents {
        match variants(parent) {
            Some(list) if !list.is_empty() => {
                rows.extend(list.iter().map(|variant| per_variant(parent, variant)));
            }
            _ => rows.push(whole(parent)),
        }
    }
    rows
}

fn value_to_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Backend ids arrive as strings or numbers; keep them as strings.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_id(value).unwrap_or_default())
}

pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_id))
}

/// Lenient number: accepts JSON numbers and numeric strings ("12", "3.5").
pub fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Text that may be null, missing or a number; anything else is empty.
/// Display it through [`text_or_na`].
pub fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_id).unwrap_or_default())
}

/// Code-like enum that must not fail the row: unknown or non-string codes
/// become `None`.
pub fn de_opt_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<String>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => T::try_from(s).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_or_na() {
        assert_eq!(text_or_na(Some("VF 8")), "VF 8");
        assert_eq!(text_or_na(Some("  ")), "N/A");
        assert_eq!(text_or_na(None), "N/A");
    }

    #[test]
    fn test_number_or_zero() {
        assert_eq!(number_or_zero(Some(5_i64)), 5);
        assert_eq!(number_or_zero::<i64>(None), 0);
        assert_eq!(number_or_zero::<f64>(None), 0.0);
    }

    #[test]
    fn test_flatten_variants() {
        struct Model {
            name: &'static str,
            variants: Option<Vec<&'static str>>,
        }

        let models = vec![
            Model { name: "VF 8", variants: Some(vec!["Eco", "Plus"]) },
            Model { name: "VF 9", variants: None },
            Model { name: "VF 5", variants: Some(vec![]) },
        ];

        let rows = flatten_variants(
            &models,
            |m| m.variants.as_deref(),
            |m, v| format!("{} / {}", m.name, v),
            |m| format!("{} / {}", m.name, ALL_VARIANTS),
        );

        assert_eq!(
            rows,
            vec![
                "VF 8 / Eco",
                "VF 8 / Plus",
                "VF 9 / All Variants",
                "VF 5 / All Variants",
            ]
        );
    }

    #[test]
    fn test_lenient_ids_and_numbers() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(deserialize_with = "de_id")]
            id: String,
            #[serde(default, deserialize_with = "de_opt_f64")]
            price: Option<f64>,
            #[serde(default, deserialize_with = "de_opt_i64")]
            qty: Option<i64>,
        }

        let p: Probe = serde_json::from_str(r#"{"id":42,"price":"1.5","qty":3}"#).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.price, Some(1.5));
        assert_eq!(p.qty, Some(3));

        let p: Probe = serde_json::from_str(r#"{"id":"a-1"}"#).unwrap();
        assert_eq!(p.id, "a-1");
        assert_eq!(p.price, None);
        assert_eq!(p.qty, None);
    }

    #[test]
    fn test_lenient_text_and_codes() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "de_text")]
            name: String,
            #[serde(default, deserialize_with = "de_opt_code")]
            role: Option<crate::system::auth::UserRole>,
        }

        let r: Row = serde_json::from_str(r#"{"name":null,"role":"PILOT"}"#).unwrap();
        assert_eq!(r.name, "");
        assert_eq!(text_or_na(Some(&r.name)), "N/A");
        assert_eq!(r.role, None);

        let r: Row = serde_json::from_str(r#"{"name":7,"role":"evm"}"#).unwrap();
        assert_eq!(r.name, "7");
        assert_eq!(r.role, Some(crate::system::auth::UserRole::EvmStaff));

        let r: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(r.name, "");
        assert_eq!(r.role, None);
    }
}
