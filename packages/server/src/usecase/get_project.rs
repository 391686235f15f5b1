//! UseCase: プロジェクト取得

use std::sync::Arc;

use crate::domain::{Project, ProjectId, ProjectRepository};

use super::error::ProjectError;

/// プロジェクト取得のユースケース
pub struct GetProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProjectRepository>,
}

impl GetProjectUseCase {
    /// 新しい GetProjectUseCase を作成
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// ID でプロジェクトを取得
    ///
    /// # Returns
    ///
    /// * `Ok(Project)` - 見つかったプロジェクト
    /// * `Err(ProjectError::NotFound)` - 該当なし
    pub async fn execute(&self, id: &ProjectId) -> Result<Project, ProjectError> {
        Ok(self.repository.find_project(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ProjectIdFactory, RepositoryError, repository::MockProjectRepository,
    };

    #[tokio::test]
    async fn test_get_project_not_found() {
        // テスト項目: Repository の ProjectNotFound が NotFound に変換される
        // given (前提条件):
        let id = ProjectIdFactory::generate();
        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_project()
            .withf(move |requested| requested == &id)
            .times(1)
            .returning(|requested| Err(RepositoryError::ProjectNotFound(requested.to_string())));
        let usecase = GetProjectUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute(&id).await;

        // then (期待する結果):
        assert_eq!(result, Err(ProjectError::NotFound(id.to_string())));
    }
}
