//! Promotion dialogs: create/edit form, delete confirmation, dealer assignment.

mod assign;
mod form;

pub use assign::AssignDealersForm;
pub use form::{DeletePromotionConfirm, PromotionForm};
