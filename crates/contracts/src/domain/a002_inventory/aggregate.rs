use serde::{Deserialize, Serialize};

use crate::shared::normalize::{
    de_opt_f64, de_opt_i64, de_opt_id, flatten_variants, number_or_zero, text_or_na, ALL_VARIANTS,
};
use crate::shared::summary::{count_where, distinct_count, sum_int_by};
use crate::shared::table_view::{SortValue, TableRow};

// ============================================================================
// Backend shape
// ============================================================================

/// One vehicle model as returned by `<scope>/inventory/view`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryModelDto {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub model_id: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub variants: Option<Vec<InventoryVariantDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryVariantDto {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

// ============================================================================
// Row
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: String,
    pub dealer: String,
    pub model: String,
    pub variant: String,
    pub color: String,
    pub quantity: i64,
    pub price: f64,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    pub fn of(quantity: i64, low_stock_threshold: i64) -> Self {
        if quantity <= 0 {
            StockLevel::OutOfStock
        } else if quantity <= low_stock_threshold {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::InStock => "In Stock",
        }
    }
}

impl InventoryRow {
    pub fn stock_level(&self, low_stock_threshold: i64) -> StockLevel {
        StockLevel::of(self.quantity, low_stock_threshold)
    }
}

impl TableRow for InventoryRow {
    fn search_text(&self) -> String {
        format!("{} {} {} {}", self.model, self.variant, self.color, self.dealer)
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "dealer" => Some(self.dealer.clone()),
            "model" => Some(self.model.clone()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "dealer" => SortValue::from(self.dealer.as_str()),
            "model" => SortValue::from(self.model.as_str()),
            "variant" => SortValue::from(self.variant.as_str()),
            "color" => SortValue::from(self.color.as_str()),
            "quantity" => SortValue::from(self.quantity),
            "price" => SortValue::from(self.price),
            "status" => SortValue::from(self.status.as_str()),
            _ => SortValue::from(""),
        }
    }
}

/// Flattens models into one row per variant, or one "All Variants" row for
/// a model without a variant list. Missing numbers become 0 and missing text
/// becomes "N/A"; a variant inherits the model's price and status when it
/// has none of its own.
pub fn normalize_inventory(models: &[InventoryModelDto]) -> Vec<InventoryRow> {
    flatten_variants(
        models,
        |m| m.variants.as_deref(),
        |m, v| InventoryRow {
            id: format!(
                "{}-{}",
                m.model_id.as_deref().unwrap_or("0"),
                v.variant_id.as_deref().unwrap_or("0")
            ),
            dealer: text_or_na(m.dealer_name.as_deref()),
            model: text_or_na(m.model_name.as_deref()),
            variant: text_or_na(v.variant_name.as_deref()),
            color: text_or_na(v.color.as_deref()),
            quantity: number_or_zero(v.quantity),
            price: number_or_zero(v.price.or(m.price)),
            status: text_or_na(v.status.as_deref().or(m.status.as_deref())),
        },
        |m| InventoryRow {
            id: m.model_id.clone().unwrap_or_else(|| "0".to_string()),
            dealer: text_or_na(m.dealer_name.as_deref()),
            model: text_or_na(m.model_name.as_deref()),
            variant: ALL_VARIANTS.to_string(),
            color: text_or_na(None),
            quantity: number_or_zero(m.quantity),
            price: number_or_zero(m.price),
            status: text_or_na(m.status.as_deref()),
        },
    )
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InventorySummary {
    pub total_units: i64,
    pub distinct_models: usize,
    pub low_stock_rows: usize,
    pub stock_value: f64,
}

/// Low stock counts rows at or below the threshold, out-of-stock rows included.
pub fn summarize_inventory(rows: &[&InventoryRow], low_stock_threshold: i64) -> InventorySummary {
    InventorySummary {
        total_units: sum_int_by(rows, |r| r.quantity),
        distinct_models: distinct_count(rows, |r| r.model.to_lowercase()),
        low_stock_rows: count_where(rows, |r| r.quantity <= low_stock_threshold),
        stock_value: rows.iter().map(|r| r.price * r.quantity as f64).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{SortState, TableView};

    fn models() -> Vec<InventoryModelDto> {
        serde_json::from_str(
            r#"[
                {"modelId":1,"modelName":"VF 8","dealerName":"Hanoi Central","price":1200000000,
                 "variants":[
                    {"variantId":11,"variantName":"Eco","color":"White","quantity":4},
                    {"variantId":12,"variantName":"Plus","quantity":"2","price":1350000000,"status":"AVAILABLE"}
                 ]},
                {"modelId":2,"modelName":"VF 9","quantity":7,"status":"AVAILABLE"},
                {"modelId":3,"modelName":"VF 5","variants":[]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_flattens_variants() {
        let rows = normalize_inventory(&models());
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].id, "1-11");
        assert_eq!(rows[0].variant, "Eco");
        assert_eq!(rows[0].price, 1_200_000_000.0);
        assert_eq!(rows[0].status, "N/A");

        assert_eq!(rows[1].quantity, 2);
        assert_eq!(rows[1].color, "N/A");
        assert_eq!(rows[1].price, 1_350_000_000.0);

        assert_eq!(rows[2].variant, ALL_VARIANTS);
        assert_eq!(rows[2].dealer, "N/A");
        assert_eq!(rows[2].quantity, 7);

        assert_eq!(rows[3].model, "VF 5");
        assert_eq!(rows[3].quantity, 0);
        assert_eq!(rows[3].price, 0.0);
    }

    #[test]
    fn test_summary_over_filtered_rows() {
        let mut view = TableView::new(2).with_sort(SortState::desc("quantity"));
        view.set_rows(normalize_inventory(&models()));

        let summary = view.summarize(|rows| summarize_inventory(rows, 3));
        assert_eq!(summary.total_units, 13);
        assert_eq!(summary.distinct_models, 3);
        assert_eq!(summary.low_stock_rows, 2);

        view.set_category("model", "VF 8");
        let summary = view.summarize(|rows| summarize_inventory(rows, 3));
        assert_eq!(summary.total_units, 6);
        assert_eq!(summary.distinct_models, 1);
        assert_eq!(view.page_rows()[0].variant, "Eco");
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(StockLevel::of(0, 5), StockLevel::OutOfStock);
        assert_eq!(StockLevel::of(5, 5), StockLevel::Low);
        assert_eq!(StockLevel::of(6, 5).label(), "In Stock");
    }
}
