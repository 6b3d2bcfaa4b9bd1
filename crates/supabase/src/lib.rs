//! Supabase table access for reading-sync
//!
//! `SupabaseClient` talks to the hosted PostgREST API; `MemoryTables` is a
//! process-local stand-in with the same `TableClient` surface.

mod client;
mod error;
mod memory;

pub use client::SupabaseClient;
pub use error::ClientError;
pub use memory::MemoryTables;
