//! Typed ID wrapper for stored images.
//!
//! Newtype around a v4 UUID so image identifiers cannot be confused with
//! other strings. 128 bits of randomness makes collisions negligible, so
//! a fresh ID never targets an existing record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored image record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(Uuid);

impl ImageId {
    /// Generate a new random image ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its canonical string form.
    ///
    /// Returns `None` for anything that is not a valid UUID; callers
    /// treat that as an ordinary negative lookup.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Uuid>().ok().map(Self)
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ImageId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ImageId> for Uuid {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
