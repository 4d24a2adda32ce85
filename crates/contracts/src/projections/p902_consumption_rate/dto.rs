use serde::{Deserialize, Serialize};

use crate::shared::normalize::{
    de_opt_f64, de_opt_i64, de_opt_id, flatten_variants, number_or_zero, text_or_na, ALL_VARIANTS,
};
use crate::shared::summary::{average_rounded, percent};
use crate::shared::table_view::{SortValue, TableRow};

/// Model entry of `evm/consumption-rate/view`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionModelDto {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub model_id: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub imported_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub sold_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub consumption_rate: Option<f64>,
    #[serde(default)]
    pub variants: Option<Vec<ConsumptionVariantDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionVariantDto {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub imported_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub sold_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub consumption_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRow {
    pub id: String,
    pub dealer: String,
    pub model: String,
    pub variant: String,
    pub imported: i64,
    pub sold: i64,
    /// Percent of imported units sold.
    pub rate: f64,
}

/// Rate sent by the backend, or sold/imported when it is missing.
fn rate_or_computed(rate: Option<f64>, imported: i64, sold: i64) -> f64 {
    rate.unwrap_or_else(|| percent(sold as f64, imported as f64))
}

impl TableRow for ConsumptionRow {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.model, self.variant, self.dealer)
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "dealer" => Some(self.dealer.clone()),
            "model" => Some(self.model.clone()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "dealer" => SortValue::from(self.dealer.as_str()),
            "model" => SortValue::from(self.model.as_str()),
            "variant" => SortValue::from(self.variant.as_str()),
            "imported" => SortValue::from(self.imported),
            "sold" => SortValue::from(self.sold),
            "rate" => SortValue::from(self.rate),
            _ => SortValue::from(""),
        }
    }
}

pub fn normalize_consumption(models: &[ConsumptionModelDto]) -> Vec<ConsumptionRow> {
    flatten_variants(
        models,
        |m| m.variants.as_deref(),
        |m, v| {
            let imported = number_or_zero(v.imported_quantity);
            let sold = number_or_zero(v.sold_quantity);
            ConsumptionRow {
                id: format!(
                    "{}-{}",
                    m.model_id.as_deref().unwrap_or("0"),
                    v.variant_id.as_deref().unwrap_or("0")
                ),
                dealer: text_or_na(m.dealer_name.as_deref()),
                model: text_or_na(m.model_name.as_deref()),
                variant: text_or_na(v.variant_name.as_deref()),
                imported,
                sold,
                rate: rate_or_computed(v.consumption_rate, imported, sold),
            }
        },
        |m| {
            let imported = number_or_zero(m.imported_quantity);
            let sold = number_or_zero(m.sold_quantity);
            ConsumptionRow {
                id: m.model_id.clone().unwrap_or_else(|| "0".to_string()),
                dealer: text_or_na(m.dealer_name.as_deref()),
                model: text_or_na(m.model_name.as_deref()),
                variant: ALL_VARIANTS.to_string(),
                imported,
                sold,
                rate: rate_or_computed(m.consumption_rate, imported, sold),
            }
        },
    )
}

/// Mean consumption rate of the filtered rows, rounded.
pub fn average_rate(rows: &[&ConsumptionRow]) -> i64 {
    average_rounded(rows.iter().map(|r| r.rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_and_average() {
        let models: Vec<ConsumptionModelDto> = serde_json::from_str(
            r#"[
                {"modelId":5,"modelName":"VF 6","dealerName":"Can Tho EV","variants":[
                    {"variantId":1,"variantName":"Eco","importedQuantity":10,"soldQuantity":5},
                    {"variantId":2,"variantName":"Plus","importedQuantity":4,"soldQuantity":1,"consumptionRate":"30"}
                ]},
                {"modelId":6,"modelName":"VF 7"}
            ]"#,
        )
        .unwrap();
        let rows = normalize_consumption(&models);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rate, 50.0);
        assert_eq!(rows[1].rate, 30.0);
        assert_eq!(rows[2].variant, ALL_VARIANTS);
        assert_eq!(rows[2].dealer, "N/A");
        assert_eq!(rows[2].rate, 0.0);

        let refs: Vec<&ConsumptionRow> = rows.iter().collect();
        // (50 + 30 + 0) / 3 = 26.67
        assert_eq!(average_rate(&refs), 27);
        assert_eq!(average_rate(&[]), 0);
    }
}
