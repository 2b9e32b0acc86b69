pub mod cards;
pub mod tables;
