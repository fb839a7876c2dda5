//! fincat-file - Filesystem-backed product catalog for fincat.

mod repository;
mod store;

pub use repository::FileRepository;
pub use store::FileStore;
