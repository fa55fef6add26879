pub mod record_store;
pub mod storage;
pub mod supabase;

pub use record_store::RecordStore;
pub use storage::{open_storage, FileStorage, KeyValueStorage, MemoryStorage};
pub use supabase::{SupabaseClient, TableResponse};
