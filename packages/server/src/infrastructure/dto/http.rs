//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::Project;

/// Project representation on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.as_str().to_string(),
            url: project.url.as_str().to_string(),
            techs: project.techs.as_slice().to_vec(),
            likes: project.likes(),
        }
    }
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        let likes = project.likes();
        Self {
            id: project.id.to_string(),
            title: project.title.into_string(),
            url: project.url.into_string(),
            techs: project.techs.into_vec(),
            likes,
        }
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

impl ErrorResponseDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// Number of stored repositories
    pub repositories: usize,
}
