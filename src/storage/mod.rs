// src/storage/mod.rs — String-keyed persistent storage
//
// The favorites store only needs get/set of string values under string
// keys. SQLite backs it on disk; the in-memory map backs it in tests.

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
