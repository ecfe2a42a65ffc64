//! Data models for the benchmark rows.
//!
//! This module contains the row structure written to both benchmark tables
//! and the deterministic generator that produces it.

pub mod item;

pub use item::{expected_special_count, Item, ItemGenerator};
