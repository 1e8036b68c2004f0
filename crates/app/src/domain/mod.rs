//! Spotlight Domain Concerns

pub mod products;
pub mod promotions;
pub mod settings;
