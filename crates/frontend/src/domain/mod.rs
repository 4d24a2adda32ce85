pub mod a001_customer;
pub mod a002_inventory;
pub mod a003_promotion;
pub mod a004_sales_record;
pub mod a005_vehicle_request;
pub mod a006_contract;
pub mod a007_quotation;
pub mod a008_feedback;
