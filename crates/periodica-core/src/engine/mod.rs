//! # Engine Module
//!
//! The logic layer: everything that turns catalog data into answers.
//!
//! - **Matching** ([`matcher`]) - Exact, ratio and hypothetical compound matching
//! - **Synthesis** ([`synthesis`]) - Descriptions for compounds the catalog does not know
//! - **Quiz** ([`quiz`]) - Generated and static multiple-choice questions
//! - **Configuration** ([`config`]) - Where catalogs are loaded from
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Matching and quiz errors
//!
//! Every operation here is a pure function of its inputs and the catalogs it
//! borrows; nothing in the engine performs I/O except loading a question bank.

pub mod config;
pub mod error;
pub mod matcher;
pub mod progress;
pub mod quiz;
pub mod synthesis;
