//! UseCase: いいね
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LikeProjectUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - いいね数が 1 回につきちょうど 1 増えることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 回いいねすると 2 になる
//! - 異常系：存在しない ID

use std::sync::Arc;

use crate::domain::{Project, ProjectId, ProjectRepository};

use super::error::ProjectError;

/// いいねのユースケース
pub struct LikeProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProjectRepository>,
}

impl LikeProjectUseCase {
    /// 新しい LikeProjectUseCase を作成
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// いいね数を 1 増やし、更新後のプロジェクトを返す
    pub async fn execute(&self, id: &ProjectId) -> Result<Project, ProjectError> {
        let project = self.repository.like_project(id).await?;

        tracing::debug!("Project '{}' liked ({} likes)", project.id, project.likes());
        Ok(project)
    }
}
