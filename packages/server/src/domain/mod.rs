//! Domain layer for the repository tracker.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::Project;
pub use error::{RepositoryError, ValueObjectError};
pub use factory::ProjectIdFactory;
pub use repository::ProjectRepository;
pub use value_object::{ProjectDetails, ProjectId, ProjectUrl, Techs, Title};
