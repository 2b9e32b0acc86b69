//! Immutable data models for elements and compounds, plus the `Selection`
//! multiset that the presentation layer fills before asking for a match.

pub mod composition;
pub mod compound;
pub mod element;
pub mod selection;
