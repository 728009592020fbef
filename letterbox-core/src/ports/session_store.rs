//! Session store port - the single bearer token slot

use crate::domain::result::Result;
use crate::domain::SessionToken;

/// Holds at most one session token
///
/// Each call is a single atomic access to the underlying storage; callers
/// never read-modify-write.
pub trait SessionStore: Send + Sync {
    /// Current token, if one is stored
    fn get(&self) -> Result<Option<SessionToken>>;

    /// Store a token, replacing any previous one
    fn set(&self, token: &SessionToken) -> Result<()>;

    /// Remove the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
