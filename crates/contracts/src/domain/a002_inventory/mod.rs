pub mod aggregate;

pub use aggregate::{
    normalize_inventory, summarize_inventory, InventoryModelDto, InventoryRow, InventorySummary,
    InventoryVariantDto, StockLevel,
};
