//! Domain factories for creating domain entities and value objects.

use super::ProjectId;

/// Factory for generating ProjectId instances.
///
/// This factory encapsulates the logic for generating new project identifiers,
/// separating the generation concern from the validation logic in ProjectId.
pub struct ProjectIdFactory;

impl ProjectIdFactory {
    /// Generate a new ProjectId with a random UUID v4.
    ///
    /// Collisions are not checked here; the repository rejects duplicates.
    pub fn generate() -> ProjectId {
        ProjectId::from_uuid(uuid::Uuid::new_v4())
    }
}
