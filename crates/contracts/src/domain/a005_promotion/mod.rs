pub mod aggregate;
pub mod form;
pub mod seed;

pub use aggregate::{
    Discount, DiscountKind, Promotion, PromotionFilter, PromotionKind, PromotionStatus,
    PromotionType,
};
pub use form::PromotionDraft;
