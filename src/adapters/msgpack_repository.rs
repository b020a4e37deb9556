//! MessagePack implementation of the model repository.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::{Result, error::Error, ports::ModelRepository, session::Session};

/// File-backed model repository using the MessagePack binary format.
///
/// # Examples
///
/// ```no_run
/// use riposte::adapters::MsgPackRepository;
/// use riposte::ports::ModelRepository;
/// use riposte::Session;
/// use std::path::Path;
///
/// let repo = MsgPackRepository::new();
/// let session = Session::new(1)?;
///
/// repo.save(&session, Path::new("trained.rps"))?;
/// let restored = repo.load(Path::new("trained.rps"))?;
/// # Ok::<(), riposte::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl ModelRepository for MsgPackRepository {
    fn save(&self, session: &Session, path: &Path) -> Result<()> {
        let bytes = session.save_model()?;

        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| Error::Io {
            operation: format!("write model to {path:?}"),
            source,
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Session> {
        let mut file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|source| Error::Io {
            operation: format!("read model from {path:?}"),
            source,
        })?;

        Session::load_model(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::moves::Move;

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("model.rps");

        let mut session = Session::new(1).expect("Failed to create session");
        session.record_opponent_move(Move::Rock).unwrap();
        session.record_opponent_move(Move::Paper).unwrap();

        let repo = MsgPackRepository::new();
        repo.save(&session, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded.model(), session.model());
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.load(Path::new("/tmp/nonexistent_riposte_12345.rps"));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let repo = MsgPackRepository::new();
        let session = Session::new(1).expect("Failed to create session");
        let result = repo.save(&session, Path::new("/invalid_dir_12345/model.rps"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_garbage_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("garbage.rps");
        std::fs::write(&file_path, b"not a model").unwrap();

        let repo = MsgPackRepository::new();
        assert!(repo.load(&file_path).is_err());
    }
}
