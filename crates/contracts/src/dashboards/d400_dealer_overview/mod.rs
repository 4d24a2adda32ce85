pub mod dto;

pub use dto::{build_overview, DealerOverview, ModelSales, MonthlyRevenue};
