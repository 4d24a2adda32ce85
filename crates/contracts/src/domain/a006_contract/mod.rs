pub mod aggregate;
pub mod samples;

pub use aggregate::{Contract, ContractStatus};
pub use samples::sample_contracts;
