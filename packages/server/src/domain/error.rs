//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ProjectId is empty
    #[error("The 'id' param is required")]
    IdRequired,

    /// ProjectId is not a canonical UUID
    #[error("The 'id' param is invalid")]
    IdInvalid,

    /// Title is missing or empty
    #[error("The 'title' param is required")]
    TitleRequired,

    /// Title is present but not a string
    #[error("The 'title' param must be a string")]
    TitleInvalidType,

    /// Url is missing or empty
    #[error("The 'url' param is required")]
    UrlRequired,

    /// Url is present but not a string
    #[error("The 'url' param must be a string")]
    UrlInvalidType,

    /// Techs is missing or has no elements
    #[error("The 'techs' param is required")]
    TechsRequired,

    /// Techs is present but not an array of strings
    #[error("The 'techs' param must be an Array of strings")]
    TechsInvalidType,
}

impl ValueObjectError {
    /// Whether the error concerns the path identifier rather than the body.
    pub fn is_id_error(&self) -> bool {
        matches!(self, Self::IdRequired | Self::IdInvalid)
    }
}

/// Errors raised by `ProjectRepository` implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No project with the given id
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// A project with the given id is already stored
    #[error("Project id already exists: {0}")]
    DuplicateId(String),
}
