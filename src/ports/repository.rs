//! Repository port for model persistence.
//!
//! This module defines the trait boundary between the domain and
//! infrastructure layers for storing and retrieving learned models.

use std::path::Path;

use crate::{Result, session::Session};

/// Port for persisting and loading session models.
///
/// The trait abstracts the storage mechanism so different implementations
/// (MessagePack files, in-memory stores, databases) can be swapped without
/// coupling the domain logic to a serialization format. Only the learned
/// model travels through a repository; policies and in-flight match state do
/// not.
///
/// # Examples
///
/// ```no_run
/// use riposte::ports::ModelRepository;
/// use riposte::Session;
/// use std::path::Path;
///
/// fn checkpoint<R: ModelRepository>(
///     repo: &R,
///     session: &Session,
///     path: &Path,
/// ) -> riposte::Result<()> {
///     repo.save(session, path)
/// }
/// ```
pub trait ModelRepository {
    /// Save a session's learned model to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or encoding fails.
    fn save(&self, session: &Session, path: &Path) -> Result<()>;

    /// Load a session from persistent storage.
    ///
    /// The restored session uses the default counter policy and starts with
    /// an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be read, or the stored model is
    /// undecodable or structurally invalid.
    fn load(&self, path: &Path) -> Result<Session>;
}
