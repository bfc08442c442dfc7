use monthbook_domain::Store;

use crate::error::CoreError;

/// Abstraction over persistence backends holding the store snapshot.
///
/// Implementations treat a missing or unparseable snapshot as "no prior
/// data" and return an empty store; only a genuinely unavailable backend
/// should error. Save failures are reported but never fatal to the caller.
pub trait SnapshotStorage: Send + Sync {
    fn load(&self) -> Result<Store, CoreError>;
    fn save(&self, store: &Store) -> Result<(), CoreError>;
}
