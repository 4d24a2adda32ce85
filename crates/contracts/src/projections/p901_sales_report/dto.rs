use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a004_sales_record::SalesRecord;
use crate::shared::summary::{sum_by, sum_int_by};
use crate::shared::table_view::{SortValue, TableRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub orders: usize,
    pub units: i64,
    pub revenue: f64,
    /// Revenue per order, rounded; 0 without orders.
    pub average_order_value: i64,
}

pub fn summarize_sales(rows: &[&SalesRecord]) -> SalesSummary {
    let revenue = sum_by(rows, SalesRecord::amount);
    let average_order_value = if rows.is_empty() {
        0
    } else {
        (revenue / rows.len() as f64).round() as i64
    };
    SalesSummary {
        orders: rows.len(),
        units: sum_int_by(rows, SalesRecord::units),
        revenue,
        average_order_value,
    }
}

/// Per-dealer totals for the sales report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerSalesRow {
    pub dealer: String,
    pub orders: usize,
    pub units: i64,
    pub revenue: f64,
}

impl TableRow for DealerSalesRow {
    fn search_text(&self) -> String {
        self.dealer.clone()
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "dealer" => SortValue::from(self.dealer.as_str()),
            "orders" => SortValue::from(self.orders),
            "units" => SortValue::from(self.units),
            "revenue" => SortValue::from(self.revenue),
            _ => SortValue::from(""),
        }
    }
}

/// Groups records by dealer name; largest revenue first.
pub fn rollup_by_dealer(rows: &[&SalesRecord]) -> Vec<DealerSalesRow> {
    let mut groups: BTreeMap<String, DealerSalesRow> = BTreeMap::new();
    for record in rows {
        let dealer = record.dealer();
        let entry = groups.entry(dealer.clone()).or_insert_with(|| DealerSalesRow {
            dealer,
            orders: 0,
            units: 0,
            revenue: 0.0,
        });
        entry.orders += 1;
        entry.units += record.units();
        entry.revenue += record.amount();
    }

    let mut result: Vec<DealerSalesRow> = groups.into_values().collect();
    result.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(std::cmp::Ordering::Equal));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SalesRecord> {
        serde_json::from_str(
            r#"[
                {"saleId":1,"dealerName":"Hanoi Central","quantity":1,"totalAmount":800},
                {"saleId":2,"dealerName":"Saigon EV","quantity":2,"totalAmount":1500},
                {"saleId":3,"dealerName":"Hanoi Central","quantity":1,"totalAmount":900},
                {"saleId":4,"quantity":1}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary() {
        let data = records();
        let rows: Vec<&SalesRecord> = data.iter().collect();
        let s = summarize_sales(&rows);
        assert_eq!(s.orders, 4);
        assert_eq!(s.units, 5);
        assert_eq!(s.revenue, 3200.0);
        assert_eq!(s.average_order_value, 800);
        assert_eq!(summarize_sales(&[]).average_order_value, 0);
    }

    #[test]
    fn test_rollup_by_dealer() {
        let data = records();
        let rows: Vec<&SalesRecord> = data.iter().collect();
        let rollup = rollup_by_dealer(&rows);
        assert_eq!(rollup.len(), 3);
        assert_eq!(rollup[0].dealer, "Hanoi Central");
        assert_eq!(rollup[0].orders, 2);
        assert_eq!(rollup[0].revenue, 1700.0);
        assert_eq!(rollup[2].dealer, "N/A");
    }
}
