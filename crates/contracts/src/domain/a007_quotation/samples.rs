use super::aggregate::{Quotation, QuotationStatus};

#[allow(clippy::too_many_arguments)]
fn quotation(
    id: &str,
    customer: &str,
    model: &str,
    variant: &str,
    base_price: f64,
    discount_percent: f64,
    created: &str,
    valid_until: &str,
    status: QuotationStatus,
) -> Quotation {
    Quotation {
        quotation_id: id.to_string(),
        customer_name: customer.to_string(),
        model_name: model.to_string(),
        variant_name: variant.to_string(),
        base_price,
        discount_percent,
        created_date: created.to_string(),
        valid_until: valid_until.to_string(),
        status,
    }
}

/// Quotations shown while the quotation endpoints are not wired to the backend.
pub fn sample_quotations() -> Vec<Quotation> {
    vec![
        quotation("BG-1001", "Nguyen Van An", "VF 8", "Plus", 1_350_000_000.0, 3.0, "2026-09-02", "2026-09-30", QuotationStatus::Accepted),
        quotation("BG-1002", "Hoang Gia Bao", "VF 9", "Eco", 1_999_000_000.0, 5.0, "2026-09-10", "2026-10-10", QuotationStatus::Expired),
        quotation("BG-1003", "Tran Thi Bich", "VF 6", "Plus", 835_000_000.0, 0.0, "2026-10-01", "2026-10-31", QuotationStatus::Sent),
        quotation("BG-1004", "Ly Minh Khoa", "VF 5", "Plus", 529_000_000.0, 2.5, "2026-10-08", "2026-11-07", QuotationStatus::Draft),
        quotation("BG-1005", "Do Thanh Tam", "VF 7", "Plus", 1_199_000_000.0, 4.0, "2026-10-12", "2026-11-11", QuotationStatus::Sent),
        quotation("BG-1006", "Bui Ngoc Lan", "VF 3", "Standard", 315_000_000.0, 0.0, "2026-10-14", "2026-11-13", QuotationStatus::Rejected),
    ]
}
