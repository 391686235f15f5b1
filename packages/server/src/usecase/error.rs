//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// プロジェクト操作のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// 指定された ID のプロジェクトが存在しない
    #[error("Project '{0}' could not be found")]
    NotFound(String),

    /// 同じ ID のプロジェクトが既に存在する
    #[error("Project '{0}' already exists")]
    Conflict(String),
}

impl From<RepositoryError> for ProjectError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ProjectNotFound(id) => Self::NotFound(id),
            RepositoryError::DuplicateId(id) => Self::Conflict(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        // テスト項目: NotFound のメッセージに ID が含まれる
        // when (操作):
        let err = ProjectError::from(RepositoryError::ProjectNotFound("abc".to_string()));

        // then (期待する結果):
        assert_eq!(err.to_string(), "Project 'abc' could not be found");
    }

    #[test]
    fn test_duplicate_id_maps_to_conflict() {
        // テスト項目: DuplicateId は Conflict に変換される
        // when (操作):
        let err = ProjectError::from(RepositoryError::DuplicateId("abc".to_string()));

        // then (期待する結果):
        assert_eq!(err, ProjectError::Conflict("abc".to_string()));
    }
}
