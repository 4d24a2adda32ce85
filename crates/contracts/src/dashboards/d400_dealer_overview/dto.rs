use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a002_inventory::{summarize_inventory, InventoryRow, InventorySummary};
use crate::domain::a004_sales_record::SalesRecord;
use crate::projections::p901_sales_report::{summarize_sales, SalesSummary};

/// Number of best-selling models shown on the dashboard.
pub const TOP_MODELS: usize = 5;

/// Units sold per model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSales {
    pub model: String,
    pub units: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// "YYYY-MM"
    pub period: String,
    pub revenue: f64,
    pub units: i64,
}

/// KPI cards and small tables of the dealer landing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealerOverview {
    pub inventory: InventorySummary,
    pub sales: SalesSummary,
    pub top_models: Vec<ModelSales>,
    /// Oldest period first.
    pub monthly: Vec<MonthlyRevenue>,
}

pub fn build_overview(
    inventory: &[InventoryRow],
    sales: &[SalesRecord],
    low_stock_threshold: i64,
) -> DealerOverview {
    let inventory_refs: Vec<&InventoryRow> = inventory.iter().collect();
    let sales_refs: Vec<&SalesRecord> = sales.iter().collect();

    let mut by_model: BTreeMap<String, ModelSales> = BTreeMap::new();
    let mut by_month: BTreeMap<String, MonthlyRevenue> = BTreeMap::new();

    for record in sales {
        let model = record.model();
        let entry = by_model.entry(model.clone()).or_insert_with(|| ModelSales {
            model,
            units: 0,
            revenue: 0.0,
        });
        entry.units += record.units();
        entry.revenue += record.amount();

        if let Some(period) = record.period() {
            let month = by_month.entry(period.clone()).or_insert_with(|| MonthlyRevenue {
                period,
                revenue: 0.0,
                units: 0,
            });
            month.revenue += record.amount();
            month.units += record.units();
        }
    }

    let mut top_models: Vec<ModelSales> = by_model.into_values().collect();
    // stable: ties keep alphabetical order from the map
    top_models.sort_by(|a, b| b.units.cmp(&a.units));
    top_models.truncate(TOP_MODELS);

    DealerOverview {
        inventory: summarize_inventory(&inventory_refs, low_stock_threshold),
        sales: summarize_sales(&sales_refs),
        top_models,
        monthly: by_month.into_values().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inventory::{normalize_inventory, InventoryModelDto};

    #[test]
    fn test_overview() {
        let models: Vec<InventoryModelDto> = serde_json::from_str(
            r#"[{"modelName":"VF 8","quantity":2},{"modelName":"VF 5","quantity":9}]"#,
        )
        .unwrap();
        let inventory = normalize_inventory(&models);
        let sales: Vec<SalesRecord> = serde_json::from_str(
            r#"[
                {"saleId":1,"modelName":"VF 5","quantity":1,"totalAmount":500,"saleDate":"2026-09-03"},
                {"saleId":2,"modelName":"VF 8","quantity":2,"totalAmount":2400,"saleDate":"2026-10-01"},
                {"saleId":3,"modelName":"VF 5","quantity":2,"totalAmount":1000,"saleDate":"2026-10-11T08:00:00"},
                {"saleId":4,"modelName":"VF 3","quantity":1,"totalAmount":300}
            ]"#,
        )
        .unwrap();

        let o = build_overview(&inventory, &sales, 3);
        assert_eq!(o.inventory.total_units, 11);
        assert_eq!(o.inventory.low_stock_rows, 1);
        assert_eq!(o.sales.orders, 4);
        assert_eq!(o.sales.revenue, 4200.0);

        assert_eq!(o.top_models[0].model, "VF 5");
        assert_eq!(o.top_models[0].units, 3);
        assert_eq!(o.top_models.len(), 3);

        assert_eq!(o.monthly.len(), 2);
        assert_eq!(o.monthly[0].period, "2026-09");
        assert_eq!(o.monthly[1].revenue, 3400.0);
    }

    #[test]
    fn test_empty_overview() {
        let o = build_overview(&[], &[], 5);
        assert_eq!(o, DealerOverview::default());
    }
}
