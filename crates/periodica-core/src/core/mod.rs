//! # Core Module
//!
//! Stateless building blocks shared by the rest of the library.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Elements, compounds, compositions and the user selection
//! - **Reference Data** ([`catalog`]) - Immutable element and compound catalogs with their loaders
//! - **Chemistry Helpers** ([`utils`]) - Static naming tables for hypothetical compounds
//!
//! Nothing in this module performs matching; it only describes and loads the data the
//! [`crate::engine`] works on.

pub mod catalog;
pub mod models;
pub mod utils;
