//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{
    create_project, delete_project, get_project, health_check, like_project, list_projects,
    method_not_allowed, missing_project_id, route_not_found, update_project,
};
