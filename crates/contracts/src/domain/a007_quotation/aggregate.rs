use serde::{Deserialize, Serialize};

use crate::shared::table_view::{SortValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

impl QuotationStatus {
    pub const ALL: [QuotationStatus; 5] = [
        QuotationStatus::Draft,
        QuotationStatus::Sent,
        QuotationStatus::Accepted,
        QuotationStatus::Rejected,
        QuotationStatus::Expired,
    ];

    pub fn code(self) -> &'static str {
        match self {
            QuotationStatus::Draft => "DRAFT",
            QuotationStatus::Sent => "SENT",
            QuotationStatus::Accepted => "ACCEPTED",
            QuotationStatus::Rejected => "REJECTED",
            QuotationStatus::Expired => "EXPIRED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuotationStatus::Draft => "Draft",
            QuotationStatus::Sent => "Sent",
            QuotationStatus::Accepted => "Accepted",
            QuotationStatus::Rejected => "Rejected",
            QuotationStatus::Expired => "Expired",
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, QuotationStatus::Draft | QuotationStatus::Sent)
    }
}

/// Price quote prepared for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub quotation_id: String,
    pub customer_name: String,
    pub model_name: String,
    pub variant_name: String,
    pub base_price: f64,
    /// Percent, 0..=100.
    pub discount_percent: f64,
    pub created_date: String,
    pub valid_until: String,
    pub status: QuotationStatus,
}

impl Quotation {
    pub fn final_price(&self) -> f64 {
        let discount = self.discount_percent.clamp(0.0, 100.0);
        (self.base_price * (100.0 - discount) / 100.0).round()
    }

    /// Draft → Sent → Accepted/Rejected; closed quotations do not change.
    pub fn change_status(&mut self, next: QuotationStatus) -> Result<(), String> {
        let allowed = match self.status {
            QuotationStatus::Draft => next == QuotationStatus::Sent,
            QuotationStatus::Sent => {
                matches!(next, QuotationStatus::Accepted | QuotationStatus::Rejected | QuotationStatus::Expired)
            }
            _ => false,
        };
        if !allowed {
            return Err(format!(
                "Quotation {} is {} and cannot become {}",
                self.quotation_id,
                self.status.label().to_lowercase(),
                next.label().to_lowercase()
            ));
        }
        self.status = next;
        Ok(())
    }
}

impl TableRow for Quotation {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.quotation_id, self.customer_name, self.model_name, self.variant_name
        )
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "model" => Some(self.model_name.clone()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "quotation_id" => SortValue::from(self.quotation_id.as_str()),
            "customer" => SortValue::from(self.customer_name.as_str()),
            "model" => SortValue::from(self.model_name.as_str()),
            "final_price" => SortValue::from(self.final_price()),
            "created_date" => SortValue::from(self.created_date.as_str()),
            "valid_until" => SortValue::from(self.valid_until.as_str()),
            "status" => SortValue::from(self.status.label()),
            _ => SortValue::from(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_quotation::sample_quotations;

    #[test]
    fn test_final_price() {
        let mut q = sample_quotations().remove(0);
        q.base_price = 1_000_000_000.0;
        q.discount_percent = 5.0;
        assert_eq!(q.final_price(), 950_000_000.0);
        q.discount_percent = 150.0;
        assert_eq!(q.final_price(), 0.0);
    }

    #[test]
    fn test_status_flow() {
        let mut q = sample_quotations()
            .into_iter()
            .find(|q| q.status == QuotationStatus::Draft)
            .unwrap();
        assert!(q.change_status(QuotationStatus::Accepted).is_err());
        q.change_status(QuotationStatus::Sent).unwrap();
        q.change_status(QuotationStatus::Accepted).unwrap();
        assert!(!q.status.is_open());
        assert!(q.change_status(QuotationStatus::Rejected).is_err());
    }
}
