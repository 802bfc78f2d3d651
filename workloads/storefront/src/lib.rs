//! Product catalog storefront - Reference workload.
//!
//! Client-side rendered storefront demonstrating the vitrine stack:
//! - Catalog loading from an embedded JSON fixture
//! - Product grid with per-card selection state
//! - Shared confirmation toast with auto-dismiss

pub mod app;
