pub mod dto;

pub use dto::{
    normalize_inventory_report, summarize_report, turnover_percent, InventoryReportDto,
    InventoryReportRow, InventoryReportSummary, InventoryReportVariantDto,
};
