//! Utility helpers shared across the domain

pub mod datetime;
