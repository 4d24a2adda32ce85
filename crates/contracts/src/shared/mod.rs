pub mod envelope;
pub mod jwt;
pub mod normalize;
pub mod summary;
pub mod table_view;
