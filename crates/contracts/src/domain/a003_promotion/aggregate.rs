use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::normalize::{de_id, de_opt_code, de_opt_f64, de_text, text_or_na, NOT_AVAILABLE};
use crate::shared::summary::count_where;
use crate::shared::table_view::{SortValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiscountType {
    Percentage,
    FixedAmount,
}

impl DiscountType {
    pub fn code(self) -> &'static str {
        match self {
            DiscountType::Percentage => "PERCENTAGE",
            DiscountType::FixedAmount => "FIXED_AMOUNT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::FixedAmount => "Fixed amount",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "PERCENTAGE" | "PERCENT" | "%" => Some(DiscountType::Percentage),
            "FIXED_AMOUNT" | "FIXED" | "AMOUNT" => Some(DiscountType::FixedAmount),
            _ => None,
        }
    }
}

impl TryFrom<String> for DiscountType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DiscountType::parse(&value).ok_or_else(|| format!("Unknown discount type: {}", value))
    }
}

impl From<DiscountType> for String {
    fn from(value: DiscountType) -> Self {
        value.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(deserialize_with = "de_id")]
    pub promotion_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` when the backend sends a type this client does not know.
    #[serde(default, deserialize_with = "de_opt_code")]
    pub discount_type: Option<DiscountType>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub discount_value: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Administrative switch; `false` overrides the date window.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub dealer_names: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Accepts `YYYY-MM-DD` and anything starting with it (ISO datetimes).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionStatus {
    Upcoming,
    Active,
    Expired,
    Inactive,
}

impl PromotionStatus {
    pub fn code(self) -> &'static str {
        match self {
            PromotionStatus::Upcoming => "upcoming",
            PromotionStatus::Active => "active",
            PromotionStatus::Expired => "expired",
            PromotionStatus::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromotionStatus::Upcoming => "Upcoming",
            PromotionStatus::Active => "Active",
            PromotionStatus::Expired => "Expired",
            PromotionStatus::Inactive => "Inactive",
        }
    }
}

impl Promotion {
    /// Status on `today`. Open-ended windows are allowed on either side.
    pub fn status_on(&self, today: NaiveDate) -> PromotionStatus {
        if !self.is_active {
            return PromotionStatus::Inactive;
        }
        let start = self.start_date.as_deref().and_then(parse_date);
        let end = self.end_date.as_deref().and_then(parse_date);
        match (start, end) {
            (Some(start), _) if today < start => PromotionStatus::Upcoming,
            (_, Some(end)) if today > end => PromotionStatus::Expired,
            _ => PromotionStatus::Active,
        }
    }

    pub fn value(&self) -> f64 {
        self.discount_value.unwrap_or_default()
    }

    pub fn display_name(&self) -> String {
        text_or_na(Some(&self.name))
    }
}

/// Promotion plus its status for the day the list was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRow {
    pub promotion: Promotion,
    pub status: PromotionStatus,
}

impl PromotionRow {
    pub fn new(promotion: Promotion, today: NaiveDate) -> Self {
        let status = promotion.status_on(today);
        Self { promotion, status }
    }

    pub fn rows(promotions: Vec<Promotion>, today: NaiveDate) -> Vec<Self> {
        promotions.into_iter().map(|p| Self::new(p, today)).collect()
    }

    pub fn dealers_label(&self) -> String {
        if self.promotion.dealer_names.is_empty() {
            text_or_na(None)
        } else {
            self.promotion.dealer_names.join(", ")
        }
    }
}

impl TableRow for PromotionRow {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.promotion.name,
            self.promotion.description.as_deref().unwrap_or_default(),
            self.promotion.dealer_names.join(" ")
        )
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "discount_type" => Some(
                self.promotion
                    .discount_type
                    .map_or(NOT_AVAILABLE, DiscountType::code)
                    .to_string(),
            ),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::from(self.promotion.name.as_str()),
            "discount_value" => SortValue::from(self.promotion.value()),
            "start_date" => SortValue::from(self.promotion.start_date.as_deref()),
            "end_date" => SortValue::from(self.promotion.end_date.as_deref()),
            "status" => SortValue::from(self.status.label()),
            _ => SortValue::from(""),
        }
    }
}

pub fn count_active(rows: &[&PromotionRow]) -> usize {
    count_where(rows, |r| r.status == PromotionStatus::Active)
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromotionDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: String,
    pub end_date: String,
}

fn validate_terms(
    name: &str,
    discount_type: DiscountType,
    discount_value: f64,
    start_date: &str,
    end_date: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Promotion name is required".into());
    }
    if !(discount_value > 0.0) {
        return Err("Discount value must be greater than 0".into());
    }
    if discount_type == DiscountType::Percentage && discount_value > 100.0 {
        return Err("Percentage discount cannot exceed 100".into());
    }
    let start = parse_date(start_date).ok_or("Start date is not valid")?;
    let end = parse_date(end_date).ok_or("End date is not valid")?;
    if end < start {
        return Err("End date must not be before the start date".into());
    }
    Ok(())
}

impl CreatePromotionDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_terms(
            &self.name,
            self.discount_type,
            self.discount_value,
            &self.start_date,
            &self.end_date,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromotionDto {
    pub promotion_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl UpdatePromotionDto {
    /// Edit form defaults; an unknown discount type starts as a percentage.
    pub fn from_promotion(p: &Promotion) -> Self {
        Self {
            promotion_id: p.promotion_id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            discount_type: p.discount_type.unwrap_or(DiscountType::Percentage),
            discount_value: p.value(),
            start_date: p.start_date.as_deref().unwrap_or_default().chars().take(10).collect(),
            end_date: p.end_date.as_deref().unwrap_or_default().chars().take(10).collect(),
            is_active: p.is_active,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_terms(
            &self.name,
            self.discount_type,
            self.discount_value,
            &self.start_date,
            &self.end_date,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePromotionRequest {
    pub promotion_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPromotionDto {
    pub promotion_id: String,
    pub dealer_ids: Vec<String>,
}

impl AssignPromotionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.dealer_ids.is_empty() {
            return Err("Select at least one dealer".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn promo(start: Option<&str>, end: Option<&str>) -> Promotion {
        Promotion {
            promotion_id: "1".into(),
            name: "Tet sale".into(),
            description: None,
            discount_type: Some(DiscountType::Percentage),
            discount_value: Some(10.0),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
            is_active: true,
            dealer_names: vec![],
        }
    }

    #[test]
    fn test_status_from_date_window() {
        let p = promo(Some("2026-01-10"), Some("2026-02-10T23:59:59Z"));
        assert_eq!(p.status_on(day("2026-01-01")), PromotionStatus::Upcoming);
        assert_eq!(p.status_on(day("2026-01-10")), PromotionStatus::Active);
        assert_eq!(p.status_on(day("2026-02-10")), PromotionStatus::Active);
        assert_eq!(p.status_on(day("2026-02-11")), PromotionStatus::Expired);

        assert_eq!(promo(None, None).status_on(day("2030-01-01")), PromotionStatus::Active);

        let mut off = promo(None, None);
        off.is_active = false;
        assert_eq!(off.status_on(day("2026-01-15")), PromotionStatus::Inactive);
    }

    #[test]
    fn test_active_count() {
        let today = day("2026-03-01");
        let rows = PromotionRow::rows(
            vec![
                promo(Some("2026-02-01"), Some("2026-04-01")),
                promo(Some("2026-05-01"), None),
                promo(None, Some("2026-02-28")),
            ],
            today,
        );
        let refs: Vec<&PromotionRow> = rows.iter().collect();
        assert_eq!(count_active(&refs), 1);
        assert_eq!(rows[1].category("status").as_deref(), Some("upcoming"));
    }

    #[test]
    fn test_discount_type_wire_format() {
        let p: Promotion = serde_json::from_str(
            r#"{"promotionId":4,"name":"X","discountType":"percent","discountValue":"5"}"#,
        )
        .unwrap();
        assert_eq!(p.discount_type, Some(DiscountType::Percentage));
        assert_eq!(p.value(), 5.0);
        assert!(p.is_active);
        let v = serde_json::to_value(UpdatePromotionDto::from_promotion(&p)).unwrap();
        assert_eq!(v["discountType"], "PERCENTAGE");
        assert_eq!(v["promotionId"], "4");
    }

    #[test]
    fn test_create_validation() {
        let mut dto = CreatePromotionDto {
            name: "Summer".into(),
            description: None,
            discount_type: DiscountType::Percentage,
            discount_value: 15.0,
            start_date: "2026-06-01".into(),
            end_date: "2026-06-30".into(),
        };
        assert!(dto.validate().is_ok());

        dto.discount_value = 120.0;
        assert!(dto.validate().is_err());
        dto.discount_type = DiscountType::FixedAmount;
        assert!(dto.validate().is_ok());

        dto.end_date = "2026-05-01".into();
        assert!(dto.validate().is_err());
        dto.end_date = "soon".into();
        assert!(dto.validate().is_err());

        let assign = AssignPromotionDto { promotion_id: "1".into(), dealer_ids: vec![] };
        assert!(assign.validate().is_err());
    }

    #[test]
    fn test_bad_row_does_not_fail_the_list() {
        use crate::shared::envelope::decode_list_response;

        let body = r#"{"status":"success","message":"ok","data":[
            {"promotionId":1,"name":"Tet sale","discountType":"PERCENTAGE","discountValue":10},
            {"promotionId":2,"name":null,"discountType":"BUNDLE"}
        ]}"#;
        let list: Vec<Promotion> = decode_list_response(200, body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].display_name(), "Tet sale");
        assert_eq!(list[1].display_name(), "N/A");
        assert_eq!(list[1].discount_type, None);

        let row = PromotionRow::new(list[1].clone(), day("2026-01-01"));
        assert_eq!(row.category("discount_type").as_deref(), Some("N/A"));
        let dto = UpdatePromotionDto::from_promotion(&list[1]);
        assert_eq!(dto.discount_type, DiscountType::Percentage);
    }
}
