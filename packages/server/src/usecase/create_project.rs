//! UseCase: プロジェクト作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateProjectUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 新しい ID が採番され、いいね数 0 で末尾に追加されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成したプロジェクトが一覧の末尾に並ぶ
//! - 異常系：ID の重複（Repository が拒否した場合）

use std::sync::Arc;

use crate::domain::{Project, ProjectDetails, ProjectIdFactory, ProjectRepository};

use super::error::ProjectError;

/// プロジェクト作成のユースケース
pub struct CreateProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProjectRepository>,
}

impl CreateProjectUseCase {
    /// 新しい CreateProjectUseCase を作成
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// プロジェクト作成を実行
    ///
    /// # Arguments
    ///
    /// * `details` - 検証済みの title / url / techs（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Project)` - 作成されたプロジェクト
    /// * `Err(ProjectError)` - 作成失敗
    pub async fn execute(&self, details: ProjectDetails) -> Result<Project, ProjectError> {
        let project = Project::new(ProjectIdFactory::generate(), details);
        self.repository.add_project(project.clone()).await?;

        tracing::debug!("Project '{}' created", project.id);
        Ok(project)
    }
}
