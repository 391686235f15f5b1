//! UseCase: プロジェクト一覧取得

use std::sync::Arc;

use crate::domain::{Project, ProjectRepository};

/// プロジェクト一覧取得のユースケース
pub struct ListProjectsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProjectRepository>,
}

impl ListProjectsUseCase {
    /// 新しい ListProjectsUseCase を作成
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// 全プロジェクトを挿入順で返す（常に成功）
    pub async fn execute(&self) -> Vec<Project> {
        self.repository.list_projects().await
    }
}
