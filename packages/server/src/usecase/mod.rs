//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_project;
pub mod delete_project;
pub mod error;
pub mod get_project;
pub mod like_project;
pub mod list_projects;
pub mod update_project;

pub use create_project::CreateProjectUseCase;
pub use delete_project::DeleteProjectUseCase;
pub use error::ProjectError;
pub use get_project::GetProjectUseCase;
pub use like_project::LikeProjectUseCase;
pub use list_projects::ListProjectsUseCase;
pub use update_project::UpdateProjectUseCase;
