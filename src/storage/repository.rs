use crate::core::Store;
use crate::error::Result;

/// Repository trait for whole-store persistence
///
/// The store is always read and written in full. This trait is the seam
/// between the lifecycle manager and the backing medium, allowing different
/// storage implementations.
pub trait StoreRepository {
    /// Loads the full store, returning an empty store if nothing has been
    /// persisted yet
    fn load(&self) -> Result<Store>;

    /// Persists the full store, replacing whatever was written before
    fn save(&self, store: &Store) -> Result<()>;
}

#[cfg(test)]
pub mod memory {
    //! In-memory repository for tests that don't need a filesystem

    use super::{Result, Store, StoreRepository};
    use std::cell::RefCell;

    /// Repository backed by process memory only
    #[derive(Default)]
    pub struct MemoryStore {
        store: RefCell<Store>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl StoreRepository for MemoryStore {
        fn load(&self) -> Result<Store> {
            Ok(self.store.borrow().clone())
        }

        fn save(&self, store: &Store) -> Result<()> {
            *self.store.borrow_mut() = store.clone();
            Ok(())
        }
    }
}
