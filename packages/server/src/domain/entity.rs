//! Core domain models for the repository tracker.

use super::value_object::{ProjectDetails, ProjectId, ProjectUrl, Techs, Title};

/// A tracked source repository: project metadata plus a like counter.
///
/// `id` is fixed at creation. `likes` starts at 0 and only grows through
/// [`Project::like`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project identifier
    pub id: ProjectId,
    /// Human readable title
    pub title: Title,
    /// Location of the repository
    pub url: ProjectUrl,
    /// Technologies used by the project
    pub techs: Techs,
    likes: u64,
}

impl Project {
    /// Create a new project with no likes
    pub fn new(id: ProjectId, details: ProjectDetails) -> Self {
        let ProjectDetails { title, url, techs } = details;
        Self {
            id,
            title,
            url,
            techs,
            likes: 0,
        }
    }

    /// Number of likes received so far
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Register one like
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    /// Replace title, url and techs, keeping `id` and `likes`
    pub fn replace_details(&mut self, details: ProjectDetails) {
        let ProjectDetails { title, url, techs } = details;
        self.title = title;
        self.url = url;
        self.techs = techs;
    }
}
