//! # Commands Module
//!
//! The operations the presentation layer invokes. Every command takes the
//! state handles it needs, logs what it is doing, and returns either an
//! updated snapshot (DTO) or a typed [`crate::error::ApiError`].

pub mod cart;
pub mod product;
pub mod table;
