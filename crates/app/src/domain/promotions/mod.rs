//! Promotions

pub mod data;
mod errors;
pub mod models;
pub mod service;

pub use errors::PromotionsServiceError;
pub use service::*;
