//! Core types and traits for reading-sync
//!
//! This crate contains domain types shared across all other crates.

mod book;
mod event;
mod record;
mod table;

pub use book::*;
pub use event::*;
pub use record::*;
pub use table::*;
