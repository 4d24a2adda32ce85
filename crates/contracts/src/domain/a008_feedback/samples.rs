use super::aggregate::{Feedback, FeedbackKind, FeedbackStatus};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    customer: &str,
    kind: FeedbackKind,
    subject: &str,
    content: &str,
    rating: Option<u8>,
    created: &str,
    status: FeedbackStatus,
) -> Feedback {
    Feedback {
        feedback_id: id.to_string(),
        customer_name: customer.to_string(),
        kind,
        subject: subject.to_string(),
        content: content.to_string(),
        rating,
        created_date: created.to_string(),
        status,
        response: None,
    }
}

/// Feedback shown while the feedback endpoints are not wired to the backend.
pub fn sample_feedback() -> Vec<Feedback> {
    vec![
        item("FB-301", "Nguyen Van An", FeedbackKind::Feedback, "Smooth handover", "Delivery was on time and the car was spotless.", Some(5), "2026-09-05", FeedbackStatus::Resolved),
        item("FB-302", "Tran Thi Bich", FeedbackKind::Complaint, "Charging cable missing", "The portable charger was not in the trunk at delivery.", None, "2026-09-21", FeedbackStatus::InProgress),
        item("FB-303", "Le Hoang Nam", FeedbackKind::Feedback, "Test drive", "Sales staff explained the ADAS features clearly.", Some(4), "2026-10-02", FeedbackStatus::New),
        item("FB-304", "Vo Quoc Huy", FeedbackKind::Complaint, "Contract delay", "Still waiting for the contract to be prepared.", None, "2026-10-09", FeedbackStatus::New),
        item("FB-305", "Dang Thu Ha", FeedbackKind::Feedback, "Showroom", "Comfortable waiting area, coffee could be better.", Some(3), "2026-10-15", FeedbackStatus::New),
    ]
}
