pub mod article;
pub mod category;
pub mod dto;
pub mod filter;
pub mod product;
