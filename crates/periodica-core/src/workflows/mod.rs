//! # Workflows Module
//!
//! The public entry points of the library. Each workflow ties the [`crate::core`]
//! catalogs and the [`crate::engine`] logic together into one call that a
//! front-end can make without knowing the details.
//!
//! - **Catalog Loading** ([`load`]) - Reads the element and compound catalogs
//!   (bundled or from files) with progress reporting and integrity warnings.
//! - **Mixing** ([`mix`]) - Matches a selection and wraps the result in a
//!   user-facing report.

pub mod load;
pub mod mix;
