use serde::{Deserialize, Serialize};

use crate::shared::normalize::{de_id, de_opt_id, de_text, text_or_na};
use crate::shared::table_view::{SortValue, TableRow};

/// Dealer-side customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(deserialize_with = "de_id")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Customer {
    pub fn display_name(&self) -> String {
        text_or_na(Some(&self.full_name))
    }
}

impl TableRow for Customer {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.full_name,
            self.phone.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.id_number.as_deref().unwrap_or_default()
        )
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "full_name" => SortValue::from(self.full_name.as_str()),
            "phone" => SortValue::from(self.phone.as_deref()),
            "email" => SortValue::from(self.email.as_deref()),
            "created_at" => SortValue::from(self.created_at.as_deref()),
            _ => SortValue::from(""),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
}

impl CreateCustomerDto {
    /// Empty optional inputs are sent as absent fields.
    pub fn from_form(
        full_name: &str,
        phone: &str,
        email: &str,
        address: &str,
        id_number: &str,
    ) -> Self {
        fn opt(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            full_name: full_name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: opt(email),
            address: opt(address),
            id_number: opt(id_number),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.is_empty() {
            return Err("Customer name is required".into());
        }
        if self.phone.len() < 9 || !self.phone.chars().all(|c| c.is_ascii_digit() || c == '+') {
            return Err("Phone number must have at least 9 digits".into());
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err("Email is not valid".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSearchRequest {
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_backend_json() {
        let json = r#"{"customerId":12,"fullName":"Nguyen Van An","phone":"0901234567","dealerId":"3"}"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.customer_id, "12");
        assert_eq!(c.dealer_id.as_deref(), Some("3"));
        assert!(c.search_text().contains("0901234567"));
        assert_eq!(c.email, None);
    }

    #[test]
    fn test_nameless_row_keeps_the_list() {
        use crate::shared::envelope::decode_list_response;

        let body = r#"{"status":"success","message":"ok","data":[
            {"customerId":1,"fullName":"Tran Minh","phone":"0901000001"},
            {"customerId":2,"fullName":null,"phone":"0901000002"},
            {"customerId":3}
        ]}"#;
        let customers: Vec<Customer> = decode_list_response(200, body).unwrap();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].display_name(), "Tran Minh");
        assert_eq!(customers[1].display_name(), "N/A");
        assert_eq!(customers[2].full_name, "");
        assert_eq!(customers[2].phone, None);
    }

    #[test]
    fn test_form_trims_and_drops_empty_fields() {
        let dto = CreateCustomerDto::from_form(" Le Thi B ", "0912345678", "", "  ", "079123");
        assert_eq!(dto.full_name, "Le Thi B");
        assert_eq!(dto.email, None);
        assert_eq!(dto.address, None);
        assert_eq!(dto.id_number.as_deref(), Some("079123"));
        assert!(dto.validate().is_ok());

        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["fullName"], "Le Thi B");
        assert!(v.get("email").is_none());
    }

    #[test]
    fn test_validation_errors() {
        assert!(CreateCustomerDto::from_form("", "0912345678", "", "", "").validate().is_err());
        assert!(CreateCustomerDto::from_form("A", "12ab", "", "", "").validate().is_err());
        assert!(CreateCustomerDto::from_form("A", "0912345678", "nope", "", "").validate().is_err());
    }
}
