pub mod aggregate;
pub mod samples;

pub use aggregate::{Quotation, QuotationStatus};
pub use samples::sample_quotations;
