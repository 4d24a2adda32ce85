pub mod aggregate;

pub use aggregate::{
    count_active, parse_date, AssignPromotionDto, CreatePromotionDto, DeletePromotionRequest,
    DiscountType, Promotion, PromotionRow, PromotionStatus, UpdatePromotionDto,
};
