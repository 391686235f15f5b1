//! UseCase: プロジェクト削除

use std::sync::Arc;

use crate::domain::{ProjectId, ProjectRepository};

use super::error::ProjectError;

/// プロジェクト削除のユースケース
pub struct DeleteProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProjectRepository>,
}

impl DeleteProjectUseCase {
    /// 新しい DeleteProjectUseCase を作成
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// プロジェクトを 1 件削除する
    pub async fn execute(&self, id: &ProjectId) -> Result<(), ProjectError> {
        self.repository.remove_project(id).await?;

        tracing::debug!("Project '{}' deleted", id);
        Ok(())
    }
}
