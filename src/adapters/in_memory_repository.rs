//! In-memory model repository for testing.
//!
//! This adapter keeps serialized models in a shared HashMap, enabling fast
//! tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, ports::ModelRepository, session::Session};

/// In-memory repository for testing.
///
/// All clones share the same underlying storage, so a repository can be
/// handed to code under test while the test keeps a handle for assertions.
///
/// # Examples
///
/// ```
/// use riposte::adapters::InMemoryRepository;
/// use riposte::ports::ModelRepository;
/// use riposte::Session;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let session = Session::new(1)?;
///
/// repo.save(&session, Path::new("slot"))?;
/// let restored = repo.load(Path::new("slot"))?;
/// # Ok::<(), riposte::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of models currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Remove all stored models.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Whether a model exists under the given path key.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl ModelRepository for InMemoryRepository {
    fn save(&self, session: &Session, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        let bytes = session.save_model()?;
        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Session> {
        let key = path.to_string_lossy().to_string();
        let bytes = self
            .storage
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| crate::Error::Io {
                operation: format!("load model '{key}' from memory"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such model"),
            })?;
        Session::load_model(&bytes)
    }
}
