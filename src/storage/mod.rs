//! Persistence layer: whole-store load and save

mod file;
mod repository;

pub use file::FileStore;
pub use repository::StoreRepository;

#[cfg(test)]
pub use repository::memory::MemoryStore;
