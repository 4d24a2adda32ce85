pub mod dto;

pub use dto::{
    average_rate, normalize_consumption, ConsumptionModelDto, ConsumptionRow,
    ConsumptionVariantDto,
};
