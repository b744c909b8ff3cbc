// Adapters layer: concrete observation stores and the HTTP surface.

pub mod http;
pub mod memory_store;
pub mod sqlite_store;
