pub mod a001_product;
pub mod a002_category;
pub mod a003_order;
pub mod a004_user;
pub mod a005_promotion;
