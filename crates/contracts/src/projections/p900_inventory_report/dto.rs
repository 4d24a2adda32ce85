use serde::{Deserialize, Serialize};

use crate::shared::normalize::{
    de_opt_i64, de_opt_id, flatten_variants, number_or_zero, text_or_na, ALL_VARIANTS,
};
use crate::shared::summary::{average_rounded, percent, sum_int_by};
use crate::shared::table_view::{SortValue, TableRow};

/// Model entry of `evm/inventory/report`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReportDto {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub model_id: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub stock_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub sold_quantity: Option<i64>,
    #[serde(default)]
    pub variants: Option<Vec<InventoryReportVariantDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReportVariantDto {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub stock_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub sold_quantity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReportRow {
    pub id: String,
    pub dealer: String,
    pub model: String,
    pub variant: String,
    pub stock: i64,
    pub sold: i64,
    pub turnover: f64,
}

/// Share of units sold out of everything that passed through stock.
pub fn turnover_percent(stock: i64, sold: i64) -> f64 {
    percent(sold as f64, (stock + sold) as f64)
}

impl TableRow for InventoryReportRow {
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
            "stock" => SortValue::from(self.stock),
            "sold" => SortValue::from(self.sold),
            "turnover" => SortValue::from(self.turnover),
            _ => SortValue::from(""),
        }
    }
}

pub fn normalize_inventory_report(models: &[InventoryReportDto]) -> Vec<InventoryReportRow> {
    flatten_variants(
        models,
        |m| m.variants.as_deref(),
        |m, v| {
            let stock = number_or_zero(v.stock_quantity);
            let sold = number_or_zero(v.sold_quantity);
            InventoryReportRow {
                id: format!(
                    "{}-{}",
                    m.model_id.as_deref().unwrap_or("0"),
                    v.variant_id.as_deref().unwrap_or("0")
                ),
                dealer: text_or_na(m.dealer_name.as_deref()),
                model: text_or_na(m.model_name.as_deref()),
                variant: text_or_na(v.variant_name.as_deref()),
                stock,
                sold,
                turnover: turnover_percent(stock, sold),
            }
        },
        |m| {
            let stock = number_or_zero(m.stock_quantity);
            let sold = number_or_zero(m.sold_quantity);
            InventoryReportRow {
                id: m.model_id.clone().unwrap_or_else(|| "0".to_string()),
                dealer: text_or_na(m.dealer_name.as_deref()),
                model: text_or_na(m.model_name.as_deref()),
                variant: ALL_VARIANTS.to_string(),
                stock,
                sold,
                turnover: turnover_percent(stock, sold),
            }
        },
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryReportSummary {
    pub total_stock: i64,
    pub total_sold: i64,
    /// Mean of the row turnovers, rounded to a whole percent.
    pub average_turnover: i64,
}

pub fn summarize_report(rows: &[&InventoryReportRow]) -> InventoryReportSummary {
    InventoryReportSummary {
        total_stock: sum_int_by(rows, |r| r.stock),
        total_sold: sum_int_by(rows, |r| r.sold),
        average_turnover: average_rounded(rows.iter().map(|r| r.turnover)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::TableView;

    #[test]
    fn test_report_rows_and_summary() {
        let models: Vec<InventoryReportDto> = serde_json::from_str(
            r#"[
                {"modelId":1,"modelName":"VF 8","variants":[
                    {"variantId":1,"variantName":"Eco","stockQuantity":6,"soldQuantity":4},
                    {"variantId":2,"variantName":"Plus","stockQuantity":0,"soldQuantity":3}
                ]},
                {"modelId":2,"modelName":"VF 3","stockQuantity":10}
            ]"#,
        )
        .unwrap();
        let rows = normalize_inventory_report(&models);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].turnover, 40.0);
        assert_eq!(rows[1].turnover, 100.0);
        assert_eq!(rows[2].variant, ALL_VARIANTS);
        assert_eq!(rows[2].turnover, 0.0);

        let mut view = TableView::new(10);
        view.set_rows(rows);
        let s = view.summarize(summarize_report);
        assert_eq!(s.total_stock, 16);
        assert_eq!(s.total_sold, 7);
        // (40 + 100 + 0) / 3 = 46.67
        assert_eq!(s.average_turnover, 47);

        view.set_query("nothing matches");
        assert_eq!(view.summarize(summarize_report), InventoryReportSummary::default());
    }

    #[test]
    fn test_turnover_of_empty_row() {
        assert_eq!(turnover_percent(0, 0), 0.0);
    }
}
