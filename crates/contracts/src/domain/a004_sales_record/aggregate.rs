use serde::{Deserialize, Serialize};

use crate::shared::normalize::{de_id, de_opt_f64, de_opt_i64, de_opt_id, text_or_na};
use crate::shared::table_view::{SortValue, TableRow};

/// One sale (order line) recorded by a dealer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    #[serde(alias = "orderId", deserialize_with = "de_id")]
    pub sale_id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub sale_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl SalesRecord {
    pub fn dealer(&self) -> String {
        text_or_na(self.dealer_name.as_deref())
    }

    pub fn model(&self) -> String {
        text_or_na(self.model_name.as_deref())
    }

    pub fn units(&self) -> i64 {
        self.quantity.unwrap_or_default()
    }

    pub fn amount(&self) -> f64 {
        self.total_amount.unwrap_or_default()
    }

    /// `YYYY-MM` of the sale date, if it has one.
    pub fn period(&self) -> Option<String> {
        self.sale_date
            .as_deref()
            .and_then(|d| d.get(..7))
            .map(str::to_string)
    }
}

impl TableRow for SalesRecord {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.sale_id,
            self.dealer_name.as_deref().unwrap_or_default(),
            self.customer_name.as_deref().unwrap_or_default(),
            self.model_name.as_deref().unwrap_or_default(),
            self.variant_name.as_deref().unwrap_or_default()
        )
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "dealer" => Some(self.dealer()),
            "model" => Some(self.model()),
            "status" => Some(text_or_na(self.status.as_deref())),
            "period" => self.period(),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "sale_id" => SortValue::from(self.sale_id.as_str()),
            "dealer" => SortValue::from(self.dealer_name.as_deref()),
            "customer" => SortValue::from(self.customer_name.as_deref()),
            "model" => SortValue::from(self.model_name.as_deref()),
            "quantity" => SortValue::from(self.units()),
            "total_amount" => SortValue::from(self.amount()),
            "sale_date" => SortValue::from(self.sale_date.as_deref()),
            _ => SortValue::from(""),
        }
    }
}

/// Body of `evm/sales-records/by-dealer`; no dealer means every dealer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecordsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_backend_json() {
        let r: SalesRecord = serde_json::from_str(
            r#"{"orderId":"SO-7","dealerName":"Da Nang EV","modelName":"VF 6","quantity":2,"totalAmount":"1500000000","saleDate":"2026-04-03"}"#,
        )
        .unwrap();
        assert_eq!(r.sale_id, "SO-7");
        assert_eq!(r.units(), 2);
        assert_eq!(r.amount(), 1_500_000_000.0);
        assert_eq!(r.period().as_deref(), Some("2026-04"));
        assert_eq!(r.category("status").as_deref(), Some("N/A"));
    }

    #[test]
    fn test_request_omits_missing_dealer() {
        let all = serde_json::to_string(&SalesRecordsRequest::default()).unwrap();
        assert_eq!(all, "{}");
        let one = serde_json::to_value(SalesRecordsRequest { dealer_id: Some("3".into()) }).unwrap();
        assert_eq!(one["dealerId"], "3");
    }
}
