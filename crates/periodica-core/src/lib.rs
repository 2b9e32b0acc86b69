//! # Periodica Core Library
//!
//! Chemical element reference data, a compound-formation matcher and a quiz
//! generator for an educational periodic-table explorer.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer architecture so that each concern can
//! be tested on its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Element`, `Compound`,
//!   `Composition`, `Selection`) and the immutable catalogs they are loaded into.
//!
//! - **[`engine`]: The Logic Core.** The matcher that decides whether a selection
//!   of elements forms a known compound, the synthesizer that describes a
//!   hypothetical one when it does not, and the quiz question selector.
//!
//! - **[`workflows`]: The Public API.** Catalog loading and mixing, packaged as
//!   single calls for a presentation layer.
//!
//! ## Example
//!
//! ```
//! use periodica::core::catalog::Catalog;
//! use periodica::core::models::selection::Selection;
//! use periodica::workflows::mix;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let selection: Selection = ["H", "H", "O"].into_iter().collect();
//! let report = mix::run(&selection, &catalog).unwrap();
//! assert_eq!(report.result.compound().name, "Water");
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
