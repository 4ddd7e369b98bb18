use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::MealCatalog;

/// Shared handle to the current catalog snapshot.
///
/// Reloads replace the whole table; a reader holding an older snapshot keeps
/// a complete, consistent view of it.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<MealCatalog>>,
}

impl CatalogStore {
    pub fn new(catalog: MealCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<MealCatalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in a new catalog, returning the previous snapshot.
    pub fn replace(&self, catalog: MealCatalog) -> Arc<MealCatalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}
