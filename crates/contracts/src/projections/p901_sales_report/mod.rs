pub mod dto;

pub use dto::{rollup_by_dealer, summarize_sales, DealerSalesRow, SalesSummary};
