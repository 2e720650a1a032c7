pub mod models;

use chrono::{DateTime, Utc};

use crate::error::DecodeError;

pub use models::{Manifest, Step};

impl Manifest {
    /// Decode a steplib spec body and stamp every step with its map key.
    ///
    /// # Errors
    /// Returns [`DecodeError`] when the body is not JSON or a known field has
    /// the wrong type. Unknown fields are ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut de = serde_json::Deserializer::from_slice(bytes);
        let mut manifest: Manifest = serde_path_to_error::deserialize(&mut de)?;
        de.end().map_err(DecodeError::trailing)?;
        manifest.assign_step_ids();
        Ok(manifest)
    }

    /// Copy each map key into the matching [`Step::id`]. Safe to call repeatedly.
    pub fn assign_step_ids(&mut self) {
        for (id, step) in &mut self.steps {
            if step.id != *id {
                step.id.clone_from(id);
            }
        }
    }

    /// Generation time of the spec, `None` when the timestamp is out of range.
    #[must_use]
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.generated_at_timestamp, 0)
    }
}
