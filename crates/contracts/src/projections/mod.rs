pub mod p900_inventory_report;
pub mod p901_sales_report;
pub mod p902_consumption_rate;
