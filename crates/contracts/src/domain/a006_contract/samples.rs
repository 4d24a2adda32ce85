use super::aggregate::{Contract, ContractStatus};

#[allow(clippy::too_many_arguments)]
fn contract(
    id: &str,
    customer: &str,
    model: &str,
    variant: &str,
    total: f64,
    deposit: f64,
    signed: Option<&str>,
    status: ContractStatus,
) -> Contract {
    Contract {
        contract_id: id.to_string(),
        customer_name: customer.to_string(),
        model_name: model.to_string(),
        variant_name: variant.to_string(),
        total_amount: total,
        deposit,
        signed_date: signed.map(str::to_string),
        status,
    }
}

/// Contracts shown while the contract endpoints are not wired to the backend.
pub fn sample_contracts() -> Vec<Contract> {
    vec![
        contract("HD-2026-001", "Nguyen Van An", "VF 8", "Plus", 1_350_000_000.0, 200_000_000.0, Some("2026-08-02"), ContractStatus::Completed),
        contract("HD-2026-002", "Tran Thi Bich", "VF 6", "Eco", 765_000_000.0, 100_000_000.0, Some("2026-08-19"), ContractStatus::Signed),
        contract("HD-2026-003", "Le Hoang Nam", "VF 9", "Plus", 2_131_000_000.0, 300_000_000.0, None, ContractStatus::PendingSignature),
        contract("HD-2026-004", "Pham Minh Chau", "VF 5", "Plus", 529_000_000.0, 50_000_000.0, None, ContractStatus::Draft),
        contract("HD-2026-005", "Vo Quoc Huy", "VF 7", "Eco", 999_000_000.0, 0.0, None, ContractStatus::Cancelled),
        contract("HD-2026-006", "Dang Thu Ha", "VF 8", "Eco", 1_170_000_000.0, 150_000_000.0, None, ContractStatus::PendingSignature),
    ]
}
