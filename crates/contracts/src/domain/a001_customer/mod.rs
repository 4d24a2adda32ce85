pub mod aggregate;

pub use aggregate::{CreateCustomerDto, Customer, CustomerSearchRequest};
