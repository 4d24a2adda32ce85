use serde::{Deserialize, Serialize};

use crate::shared::table_view::{SortValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    Draft,
    PendingSignature,
    Signed,
    Completed,
    Cancelled,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 5] = [
        ContractStatus::Draft,
        ContractStatus::PendingSignature,
        ContractStatus::Signed,
        ContractStatus::Completed,
        ContractStatus::Cancelled,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ContractStatus::Draft => "DRAFT",
            ContractStatus::PendingSignature => "PENDING_SIGNATURE",
            ContractStatus::Signed => "SIGNED",
            ContractStatus::Completed => "COMPLETED",
            ContractStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::Draft => "Draft",
            ContractStatus::PendingSignature => "Pending signature",
            ContractStatus::Signed => "Signed",
            ContractStatus::Completed => "Completed",
            ContractStatus::Cancelled => "Cancelled",
        }
    }

    pub fn next_statuses(self) -> &'static [ContractStatus] {
        match self {
            ContractStatus::Draft => &[ContractStatus::PendingSignature, ContractStatus::Cancelled],
            ContractStatus::PendingSignature => &[ContractStatus::Signed, ContractStatus::Cancelled],
            ContractStatus::Signed => &[ContractStatus::Completed],
            ContractStatus::Completed | ContractStatus::Cancelled => &[],
        }
    }
}

/// Sales contract between the dealer and a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub contract_id: String,
    pub customer_name: String,
    pub model_name: String,
    pub variant_name: String,
    pub total_amount: f64,
    pub deposit: f64,
    pub signed_date: Option<String>,
    pub status: ContractStatus,
}

impl Contract {
    pub fn remaining(&self) -> f64 {
        (self.total_amount - self.deposit).max(0.0)
    }

    /// Moves to `next` when the transition is allowed.
    pub fn change_status(&mut self, next: ContractStatus, today: &str) -> Result<(), String> {
        if !self.status.next_statuses().contains(&next) {
            return Err(format!(
                "Contract {} cannot move from {} to {}",
                self.contract_id,
                self.status.label(),
                next.label()
            ));
        }
        if next == ContractStatus::Signed {
            self.signed_date = Some(today.to_string());
        }
        self.status = next;
        Ok(())
    }
}

impl TableRow for Contract {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.contract_id, self.customer_name, self.model_name, self.variant_name
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
            "contract_id" => SortValue::from(self.contract_id.as_str()),
            "customer" => SortValue::from(self.customer_name.as_str()),
            "model" => SortValue::from(self.model_name.as_str()),
            "total_amount" => SortValue::from(self.total_amount),
            "remaining" => SortValue::from(self.remaining()),
            "signed_date" => SortValue::from(self.signed_date.as_deref()),
            "status" => SortValue::from(self.status.label()),
            _ => SortValue::from(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_contract::sample_contracts;

    #[test]
    fn test_signing_sets_date() {
        let mut c = sample_contracts()
            .into_iter()
            .find(|c| c.status == ContractStatus::PendingSignature)
            .unwrap();
        c.change_status(ContractStatus::Signed, "2026-10-17").unwrap();
        assert_eq!(c.signed_date.as_deref(), Some("2026-10-17"));
        assert!(c.change_status(ContractStatus::Draft, "2026-10-18").is_err());
        assert_eq!(c.status, ContractStatus::Signed);
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut c = sample_contracts().remove(0);
        c.deposit = c.total_amount + 1.0;
        assert_eq!(c.remaining(), 0.0);
    }
}
