//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Length of a hyphenated UUID, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
const HYPHENATED_UUID_LEN: usize = 36;

/// Project identifier value object.
///
/// Wraps a UUID; the canonical text form is hyphenated lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Create a new ProjectId from its text form.
    ///
    /// Only the hyphenated form is accepted (case-insensitive). Braced,
    /// URN and simple forms are rejected.
    ///
    /// # Arguments
    ///
    /// * `id` - The project identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the ProjectId or an error if validation fails
    pub fn new(id: &str) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::IdRequired);
        }
        if id.len() != HYPHENATED_UUID_LEN {
            return Err(ValueObjectError::IdInvalid);
        }
        Uuid::try_parse(id)
            .map(Self)
            .map_err(|_| ValueObjectError::IdInvalid)
    }

    /// Create a ProjectId from an already generated UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Project title value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Create a new Title.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::TitleRequired` if the title is empty
    pub fn new(title: String) -> Result<Self, ValueObjectError> {
        if title.is_empty() {
            return Err(ValueObjectError::TitleRequired);
        }
        Ok(Self(title))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project URL value object.
///
/// Any non-empty text is accepted; the format is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUrl(String);

impl ProjectUrl {
    /// Create a new ProjectUrl.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::UrlRequired` if the url is empty
    pub fn new(url: String) -> Result<Self, ValueObjectError> {
        if url.is_empty() {
            return Err(ValueObjectError::UrlRequired);
        }
        Ok(Self(url))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, non-empty list of technologies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Techs(Vec<String>);

impl Techs {
    /// Create a new Techs list.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::TechsRequired` if the list is empty
    pub fn new(techs: Vec<String>) -> Result<Self, ValueObjectError> {
        if techs.is_empty() {
            return Err(ValueObjectError::TechsRequired);
        }
        Ok(Self(techs))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// The client-writable part of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: Title,
    pub url: ProjectUrl,
    pub techs: Techs,
}

impl ProjectDetails {
    pub fn new(title: Title, url: ProjectUrl, techs: Techs) -> Self {
        Self { title, url, techs }
    }
}
