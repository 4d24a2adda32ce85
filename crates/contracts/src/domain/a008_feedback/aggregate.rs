use serde::{Deserialize, Serialize};

use crate::shared::table_view::{SortValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackKind {
    Feedback,
    Complaint,
}

impl FeedbackKind {
    pub fn code(self) -> &'static str {
        match self {
            FeedbackKind::Feedback => "FEEDBACK",
            FeedbackKind::Complaint => "COMPLAINT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackKind::Feedback => "Feedback",
            FeedbackKind::Complaint => "Complaint",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    New,
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    pub fn code(self) -> &'static str {
        match self {
            FeedbackStatus::New => "NEW",
            FeedbackStatus::InProgress => "IN_PROGRESS",
            FeedbackStatus::Resolved => "RESOLVED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackStatus::New => "New",
            FeedbackStatus::InProgress => "In progress",
            FeedbackStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub feedback_id: String,
    pub customer_name: String,
    pub kind: FeedbackKind,
    pub subject: String,
    pub content: String,
    /// 1..=5, complaints usually carry none.
    pub rating: Option<u8>,
    pub created_date: String,
    pub status: FeedbackStatus,
    pub response: Option<String>,
}

impl Feedback {
    /// Records the dealer's reply and closes the item.
    pub fn resolve(&mut self, response: &str) -> Result<(), String> {
        let response = response.trim();
        if response.is_empty() {
            return Err("Response text is required".into());
        }
        if self.status == FeedbackStatus::Resolved {
            return Err(format!("{} is already resolved", self.feedback_id));
        }
        self.response = Some(response.to_string());
        self.status = FeedbackStatus::Resolved;
        Ok(())
    }

    pub fn start(&mut self) {
        if self.status == FeedbackStatus::New {
            self.status = FeedbackStatus::InProgress;
        }
    }
}

impl TableRow for Feedback {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.feedback_id, self.customer_name, self.subject, self.content
        )
    }

    fn category(&self, field: &str) -> Option<String> {
        match field {
            "kind" => Some(self.kind.code().to_string()),
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "feedback_id" => SortValue::from(self.feedback_id.as_str()),
            "customer" => SortValue::from(self.customer_name.as_str()),
            "subject" => SortValue::from(self.subject.as_str()),
            "rating" => SortValue::from(self.rating.map(i64::from).unwrap_or_default()),
            "created_date" => SortValue::from(self.created_date.as_str()),
            "status" => SortValue::from(self.status.label()),
            _ => SortValue::from(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_feedback::sample_feedback;
    use crate::shared::summary::average;
    use crate::shared::table_view::TableView;

    #[test]
    fn test_resolve_flow() {
        let mut f = sample_feedback()
            .into_iter()
            .find(|f| f.status == FeedbackStatus::New)
            .unwrap();
        assert!(f.resolve("  ").is_err());
        f.start();
        assert_eq!(f.status, FeedbackStatus::InProgress);
        f.resolve("Called the customer back").unwrap();
        assert_eq!(f.status, FeedbackStatus::Resolved);
        assert!(f.resolve("again").is_err());
    }

    #[test]
    fn test_filter_complaints() {
        let mut view = TableView::new(10);
        view.set_rows(sample_feedback());
        view.set_category("kind", "COMPLAINT");
        assert!(view.filtered().iter().all(|f| f.kind == FeedbackKind::Complaint));

        view.set_category("kind", "all");
        let avg = view.summarize(|rows| average(rows.iter().filter_map(|f| f.rating.map(f64::from))));
        assert!(avg.is_some());
    }
}
