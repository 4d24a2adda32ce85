use contracts::domain::a001_customer::{CreateCustomerDto, Customer, CustomerSearchRequest};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::{post_ack, post_list, NoBody};

/// Customers of the logged-in dealer
pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    post_list(&ApiScope::Dealer.endpoint("customers/list"), &NoBody {}).await
}

/// Server-side search by name, phone or id number. An empty keyword lists all.
pub async fn search_customers(keyword: &str) -> Result<Vec<Customer>, ApiError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return fetch_customers().await;
    }
    let request = CustomerSearchRequest {
        keyword: keyword.to_string(),
    };
    post_list(&ApiScope::Dealer.endpoint("customers/search"), &request).await
}

pub async fn create_customer(dto: &CreateCustomerDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Dealer.endpoint("customers/create"), dto).await
}
