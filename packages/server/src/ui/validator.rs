//! Request validators.
//!
//! Each validator turns raw request input into domain value objects. Handlers
//! run them before invoking a use case.

use serde_json::Value;

use crate::domain::{ProjectDetails, ProjectId, ProjectUrl, Techs, Title, ValueObjectError};

/// Validate the `:id` path parameter.
pub fn validate_id(raw: &str) -> Result<ProjectId, ValueObjectError> {
    ProjectId::new(raw)
}

/// Validate a create/update body.
///
/// Fields are checked in order `title`, `url`, `techs`; the first failure is
/// returned. A body that is not a JSON object has no fields.
pub fn validate_body(body: &Value) -> Result<ProjectDetails, ValueObjectError> {
    let title = required_string(
        body.get("title"),
        ValueObjectError::TitleRequired,
        ValueObjectError::TitleInvalidType,
    )?;
    let url = required_string(
        body.get("url"),
        ValueObjectError::UrlRequired,
        ValueObjectError::UrlInvalidType,
    )?;
    let techs = required_techs(body.get("techs"))?;

    Ok(ProjectDetails::new(
        Title::new(title)?,
        ProjectUrl::new(url)?,
        Techs::new(techs)?,
    ))
}

fn required_string(
    value: Option<&Value>,
    required: ValueObjectError,
    invalid_type: ValueObjectError,
) -> Result<String, ValueObjectError> {
    match value {
        None | Some(Value::Null) => Err(required),
        Some(Value::String(s)) if s.is_empty() => Err(required),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(invalid_type),
    }
}

fn required_techs(value: Option<&Value>) -> Result<Vec<String>, ValueObjectError> {
    match value {
        None | Some(Value::Null) => Err(ValueObjectError::TechsRequired),
        Some(Value::Array(items)) if items.is_empty() => Err(ValueObjectError::TechsRequired),
        // an empty string has no elements either
        Some(Value::String(s)) if s.is_empty() => Err(ValueObjectError::TechsRequired),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or(ValueObjectError::TechsInvalidType)
            })
            .collect(),
        Some(_) => Err(ValueObjectError::TechsInvalidType),
    }
}
