//! UseCase: プロジェクト更新（全置換）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateProjectUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 更新で id といいね数が変わらないこと（クライアントから設定できない）を保証
//! - 一覧内の位置が変わらないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：いいね済みのプロジェクトを更新
//! - 異常系：存在しない ID

use std::sync::Arc;

use crate::domain::{Project, ProjectDetails, ProjectId, ProjectRepository};

use super::error::ProjectError;

/// プロジェクト更新のユースケース
pub struct UpdateProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProjectRepository>,
}

impl UpdateProjectUseCase {
    /// 新しい UpdateProjectUseCase を作成
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// title / url / techs を置き換える
    ///
    /// 読み取りと書き込みは Repository 内の 1 回のロックで行われるため、
    /// 並行するいいねが失われることはありません。
    pub async fn execute(
        &self,
        id: &ProjectId,
        details: ProjectDetails,
    ) -> Result<Project, ProjectError> {
        let project = self.repository.update_project_details(id, details).await?;

        tracing::debug!("Project '{}' updated", project.id);
        Ok(project)
    }
}
