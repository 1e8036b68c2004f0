//! Promotion service and storage collaborators.

pub mod context;
pub mod domain;
pub mod sanitize;
pub mod stores;

#[cfg(test)]
mod test;
