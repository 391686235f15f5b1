//! HTTP API endpoint handlers.
//!
//! Each handler runs the validators, then the matching use case, and maps
//! the result to a DTO.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{Method, StatusCode, Uri},
};
use serde_json::Value;

use crate::{
    domain::{ProjectDetails, ValueObjectError},
    infrastructure::dto::http::{HealthDto, ProjectDto},
    ui::{
        error::{ApiError, ApiResult},
        state::AppState,
        validator::{validate_body, validate_id},
    },
    usecase::{
        CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, LikeProjectUseCase,
        ListProjectsUseCase, UpdateProjectUseCase,
    },
};

type IdPath = Result<Path<String>, PathRejection>;
type JsonBody = Result<Json<Value>, JsonRejection>;

fn read_id(path: IdPath) -> ApiResult<String> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn read_details(body: JsonBody) -> ApiResult<ProjectDetails> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(validate_body(&body)?)
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        repositories: state.repository.count_projects().await,
    })
}

/// GET /repositories
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Json<Vec<ProjectDto>> {
    let projects = ListProjectsUseCase::new(state.repository.clone())
        .execute()
        .await;

    Json(projects.into_iter().map(ProjectDto::from).collect())
}

/// GET /repositories/{id}
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    path: IdPath,
) -> ApiResult<Json<ProjectDto>> {
    let id = validate_id(&read_id(path)?)?;

    let project = GetProjectUseCase::new(state.repository.clone())
        .execute(&id)
        .await?;

    Ok(Json(project.into()))
}

/// POST /repositories
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    body: JsonBody,
) -> ApiResult<Json<ProjectDto>> {
    let details = read_details(body)?;

    let project = CreateProjectUseCase::new(state.repository.clone())
        .execute(details)
        .await?;

    tracing::info!("Created project '{}'", project.id);
    Ok(Json(project.into()))
}

/// PUT /repositories/{id}
///
/// Checks run in order: id format, body, existence.
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    path: IdPath,
    body: JsonBody,
) -> ApiResult<Json<ProjectDto>> {
    let id = validate_id(&read_id(path)?)?;
    let details = read_details(body)?;

    let project = UpdateProjectUseCase::new(state.repository.clone())
        .execute(&id, details)
        .await?;

    Ok(Json(project.into()))
}

/// DELETE /repositories/{id}
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    path: IdPath,
) -> ApiResult<StatusCode> {
    let id = validate_id(&read_id(path)?)?;

    DeleteProjectUseCase::new(state.repository.clone())
        .execute(&id)
        .await?;

    tracing::info!("Deleted project '{}'", id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /repositories/{id}/like
pub async fn like_project(
    State(state): State<Arc<AppState>>,
    path: IdPath,
) -> ApiResult<Json<ProjectDto>> {
    let id = validate_id(&read_id(path)?)?;

    let project = LikeProjectUseCase::new(state.repository.clone())
        .execute(&id)
        .await?;

    Ok(Json(project.into()))
}

/// PUT / DELETE /repositories/ with an empty id segment
///
/// Same rejection `validate_id` gives an empty id.
pub async fn missing_project_id() -> ApiError {
    ValueObjectError::IdRequired.into()
}

/// Fallback for unmatched routes
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for known routes called with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
