pub mod connection;
pub mod memory_store;
pub mod record_store;

pub use connection::{create_pool, create_record_store, run_migrations};
pub use memory_store::MemoryRecordStore;
pub use record_store::{RecordStore, SeaOrmRecordStore};
