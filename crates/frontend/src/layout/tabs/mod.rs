//! Tab management
//!
//! - `page`: TabPage wrapper for one tab's content
//! - `registry`: tab key → view and the roles allowed to open it
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use registry::roles_for_key;
pub use tab_labels::tab_label_for_key;
