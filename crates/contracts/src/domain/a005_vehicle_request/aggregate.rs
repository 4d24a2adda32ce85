use serde::{Deserialize, Serialize};

use crate::shared::normalize::{
    de_id, de_opt_code, de_opt_i64, de_opt_id, text_or_na, NOT_AVAILABLE,
};
use crate::shared::table_view::{SortValue, TableRow};

/// Lifecycle of a dealer's request for vehicles from the manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Shipping,
    Delivered,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 6] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Shipping,
        RequestStatus::Delivered,
        RequestStatus::Cancelled,
    ];

    pub fn code(self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Shipping => "SHIPPING",
            RequestStatus::Delivered => "DELIVERED",
            RequestStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Shipping => "Shipping",
            RequestStatus::Delivered => "Delivered",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "PENDING" | "NEW" => Some(RequestStatus::Pending),
            "APPROVED" => Some(RequestStatus::Approved),
            "REJECTED" | "DENIED" => Some(RequestStatus::Rejected),
            "SHIPPING" | "IN_TRANSIT" | "SHIPPED" => Some(RequestStatus::Shipping),
            "DELIVERED" | "COMPLETED" => Some(RequestStatus::Delivered),
            "CANCELLED" | "CANCELED" => Some(RequestStatus::Cancelled),
            _ => None,
        }
    }

    /// Statuses the EVM staff may move a request to from this one.
    pub fn next_statuses(self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::Pending => &[RequestStatus::Approved, RequestStatus::Rejected],
            RequestStatus::Approved => &[RequestStatus::Shipping, RequestStatus::Cancelled],
            RequestStatus::Shipping => &[RequestStatus::Delivered],
            RequestStatus::Rejected | RequestStatus::Delivered | RequestStatus::Cancelled => &[],
        }
    }

    pub fn can_move_to(self, next: RequestStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn badge_color(self) -> &'static str {
        match self {
            RequestStatus::Pending => "warning",
            RequestStatus::Approved | RequestStatus::Delivered => "success",
            RequestStatus::Shipping => "brand",
            RequestStatus::Rejected | RequestStatus::Cancelled => "danger",
        }
    }
}

impl TryFrom<String> for RequestStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RequestStatus::parse(&value).ok_or_else(|| format!("Unknown request status: {}", value))
    }
}

impl From<RequestStatus> for String {
    fn from(value: RequestStatus) -> Self {
        value.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    #[serde(deserialize_with = "de_id")]
    pub request_id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub request_date: Option<String>,
    /// `None` for a status this client does not know; such requests are read-only.
    #[serde(default, deserialize_with = "de_opt_code")]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub note: Option<String>,
}

impl VehicleRequest {
    pub fn units(&self) -> i64 {
        self.quantity.unwrap_or_default()
    }

    pub fn next_statuses(&self) -> &'static [RequestStatus] {
        match self.status {
            Some(status) => status.next_statuses(),
            None => &[],
        }
    }

    pub fn status_code(&self) -> &'static str {
        self.status.map_or(NOT_AVAILABLE, RequestStatus::code)
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or(NOT_AVAILABLE, RequestStatus::label)
    }

    pub fn status_color(&self) -> &'static str {
        self.status.map_or("subtle", RequestStatus::badge_color)
    }
}

impl TableRow for VehicleRequest {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.request_id,
            self.dealer_name.as_deref().unwrap_or_default(),
            self.model_name.as_deref().unwrap_or_default(),
            self.variant_name.as_deref().unwrap_or_default(),
            self.color.as_deref().unwrap_or_default()
        )
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "dealer" => Some(text_or_na(self.dealer_name.as_deref())),
            "model" => Some(text_or_na(self.model_name.as_deref())),
            "status" => Some(self.status_code().to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "request_id" => SortValue::from(self.request_id.as_str()),
            "dealer" => SortValue::from(self.dealer_name.as_deref()),
            "model" => SortValue::from(self.model_name.as_deref()),
            "quantity" => SortValue::from(self.units()),
            "request_date" => SortValue::from(self.request_date.as_deref()),
            "status" => SortValue::from(self.status_label()),
            _ => SortValue::from(""),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatusDto {
    pub request_id: String,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl UpdateRequestStatusDto {
    /// Checks the move against the current status of the request.
    pub fn for_request(
        request: &VehicleRequest,
        status: RequestStatus,
        note: &str,
    ) -> Result<Self, String> {
        if !request.next_statuses().contains(&status) {
            return Err(format!(
                "Cannot change a {} request to {}",
                request.status_label().to_lowercase(),
                status.label().to_lowercase()
            ));
        }
        let note = note.trim();
        Ok(Self {
            request_id: request.request_id.clone(),
            status,
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: &str) -> VehicleRequest {
        serde_json::from_str(&format!(
            r#"{{"requestId":31,"dealerName":"Hue Motors","modelName":"VF 7","quantity":5,"status":"{}"}}"#,
            status
        ))
        .unwrap()
    }

    #[test]
    fn test_status_parse_and_wire() {
        assert_eq!(request("pending").status, Some(RequestStatus::Pending));
        assert_eq!(request("in-transit").status, Some(RequestStatus::Shipping));
        assert_eq!(request("CANCELED").status, Some(RequestStatus::Cancelled));
        assert_eq!(String::from(RequestStatus::Delivered), "DELIVERED");
    }

    #[test]
    fn test_transitions() {
        let pending = request("PENDING");
        let dto = UpdateRequestStatusDto::for_request(&pending, RequestStatus::Approved, "  ").unwrap();
        assert_eq!(dto.request_id, "31");
        assert_eq!(dto.note, None);

        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["status"], "APPROVED");
        assert_eq!(v["requestId"], "31");

        assert!(UpdateRequestStatusDto::for_request(&pending, RequestStatus::Delivered, "").is_err());
        assert!(RequestStatus::Delivered.next_statuses().is_empty());
    }

    #[test]
    fn test_row_categories() {
        let r = request("APPROVED");
        assert_eq!(r.category("status").as_deref(), Some("APPROVED"));
        assert_eq!(r.category("model").as_deref(), Some("VF 7"));
        assert_eq!(r.units(), 5);
    }

    #[test]
    fn test_unknown_status_keeps_the_row() {
        use crate::shared::envelope::decode_list_response;

        let body = r#"{"status":"success","message":"ok","data":[
            {"requestId":1,"modelName":"VF 8","quantity":2,"status":"PENDING"},
            {"requestId":2,"modelName":null,"status":"ON_HOLD"}
        ]}"#;
        let list: Vec<VehicleRequest> = decode_list_response(200, body).unwrap();
        assert_eq!(list.len(), 2);

        let odd = &list[1];
        assert_eq!(odd.status, None);
        assert_eq!(odd.status_label(), "N/A");
        assert_eq!(odd.category("status").as_deref(), Some("N/A"));
        assert_eq!(odd.category("model").as_deref(), Some("N/A"));
        assert!(odd.next_statuses().is_empty());
        assert!(UpdateRequestStatusDto::for_request(odd, RequestStatus::Approved, "").is_err());
    }
}
