//! Products

pub mod models;
