use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::normalize::{de_id, de_opt_code, de_opt_id, de_text, text_or_na, NOT_AVAILABLE};
use crate::shared::table_view::{SortValue, TableRow};
use crate::system::auth::UserRole;

/// Account of a dealer manager or dealer staff member, managed from the EVM portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerAccount {
    #[serde(deserialize_with = "de_id")]
    pub account_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// `None` when the backend sends a role this portal does not know.
    #[serde(default, deserialize_with = "de_opt_code")]
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl DealerAccount {
    pub fn display_name(&self) -> String {
        text_or_na(Some(&self.full_name))
    }

    pub fn display_email(&self) -> String {
        text_or_na(Some(&self.email))
    }

    pub fn role_label(&self) -> &'static str {
        self.role.map_or(NOT_AVAILABLE, UserRole::label)
    }
}

impl TableRow for DealerAccount {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.full_name,
            self.email,
            self.phone.as_deref().unwrap_or_default(),
            self.dealer_name.as_deref().unwrap_or_default()
        )
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "role" => Some(self.role.map_or(NOT_AVAILABLE, UserRole::code).to_string()),
            "dealer" => self.dealer_name.clone(),
            "status" => Some(if self.is_active { "active" } else { "inactive" }.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "full_name" => SortValue::from(self.full_name.as_str()),
            "email" => SortValue::from(self.email.as_str()),
            "role" => SortValue::from(self.role_label()),
            "dealer" => SortValue::from(self.dealer_name.as_deref()),
            "is_active" => SortValue::from(self.is_active),
            "created_at" => SortValue::from(self.created_at.as_deref()),
            _ => SortValue::from(""),
        }
    }
}

/// A dealer known from its accounts: `(dealer_id, dealer_name)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DealerRef {
    pub dealer_id: String,
    pub dealer_name: String,
}

/// Distinct dealers referenced by the accounts, sorted by name. There is no
/// dealer directory endpoint, so pickers are filled from this.
pub fn known_dealers(accounts: &[DealerAccount]) -> Vec<DealerRef> {
    let mut by_id: BTreeMap<String, String> = BTreeMap::new();
    for account in accounts {
        if let Some(id) = &account.dealer_id {
            let name = account.dealer_name.clone().unwrap_or_else(|| id.clone());
            by_id.entry(id.clone()).or_insert(name);
        }
    }
    let mut dealers: Vec<DealerRef> = by_id
        .into_iter()
        .map(|(dealer_id, dealer_name)| DealerRef { dealer_id, dealer_name })
        .collect();
    dealers.sort_by_key(|d| d.dealer_name.to_lowercase());
    dealers
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealerAccountDto {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<String>,
}

impl CreateDealerAccountDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if !self.email.contains('@') {
            return Err("A valid email is required".into());
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters".into());
        }
        if self.role.is_dealer() && self.dealer_id.as_deref().unwrap_or("").trim().is_empty() {
            return Err("Dealer accounts must belong to a dealer".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealerAccountDto {
    pub account_id: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDealerAccountRequest {
    pub account_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::FilterState;

    fn account(json: &str) -> DealerAccount {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_and_categories() {
        let a = account(r#"{"accountId":9,"fullName":"Minh Do","email":"minh@d.vn","role":"DEALER_STAFF","dealerName":"Saigon EV"}"#);
        assert!(a.is_active);
        assert_eq!(a.category("status").as_deref(), Some("active"));
        assert_eq!(a.category("role").as_deref(), Some("DEALER_STAFF"));

        let mut filter = FilterState::with_query("saigon");
        filter.set_category("role", "DEALER_STAFF");
        assert!(filter.matches(&a));
    }

    #[test]
    fn test_bad_account_row_keeps_the_list() {
        use crate::shared::envelope::decode_list_response;

        let body = r#"{"status":"success","message":"ok","data":[
            {"accountId":1,"fullName":"Minh Do","email":"minh@d.vn","role":"DEALER_STAFF"},
            {"accountId":2,"fullName":null,"role":"AUDITOR"}
        ]}"#;
        let accounts: Vec<DealerAccount> = decode_list_response(200, body).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].role, Some(UserRole::DealerStaff));
        assert_eq!(accounts[0].role_label(), UserRole::DealerStaff.label());

        let odd = &accounts[1];
        assert_eq!(odd.role, None);
        assert_eq!(odd.role_label(), "N/A");
        assert_eq!(odd.display_name(), "N/A");
        assert_eq!(odd.display_email(), "N/A");
        assert_eq!(odd.category("role").as_deref(), Some("N/A"));
    }

    #[test]
    fn test_known_dealers_distinct_by_id() {
        let accounts = vec![
            account(r#"{"accountId":1,"fullName":"A","email":"a@x","role":"DEALER_STAFF","dealerId":2,"dealerName":"Saigon EV"}"#),
            account(r#"{"accountId":2,"fullName":"B","email":"b@x","role":"DEALER_MANAGER","dealerId":2,"dealerName":"Saigon EV"}"#),
            account(r#"{"accountId":3,"fullName":"C","email":"c@x","role":"DEALER_STAFF","dealerId":"7"}"#),
            account(r#"{"accountId":4,"fullName":"D","email":"d@x","role":"EVM_STAFF"}"#),
        ];
        let dealers = known_dealers(&accounts);
        assert_eq!(dealers.len(), 2);
        assert_eq!(dealers[0].dealer_name, "7");
        assert_eq!(dealers[1].dealer_id, "2");
    }

    #[test]
    fn test_create_validation() {
        let mut dto = CreateDealerAccountDto {
            full_name: "Minh Do".into(),
            email: "minh@d.vn".into(),
            password: "secret1".into(),
            phone: None,
            role: UserRole::DealerStaff,
            dealer_id: None,
        };
        assert!(dto.validate().is_err());
        dto.dealer_id = Some("4".into());
        assert!(dto.validate().is_ok());
        dto.role = UserRole::EvmStaff;
        dto.dealer_id = None;
        assert!(dto.validate().is_ok());
        dto.password = "123".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_wire_format() {
        let dto = CreateDealerAccountDto {
            full_name: "A".into(),
            email: "a@b.c".into(),
            password: "secret1".into(),
            phone: None,
            role: UserRole::DealerManager,
            dealer_id: Some("1".into()),
        };
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["fullName"], "A");
        assert_eq!(v["role"], "DEALER_MANAGER");
        assert!(v.get("phone").is_none());
    }
}
