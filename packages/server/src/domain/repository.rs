//! Repository trait（データアクセス層の抽象化）
//!
//! ドメイン層がインターフェースを定義し、インフラ層が実装します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    entity::Project,
    error::RepositoryError,
    value_object::{ProjectDetails, ProjectId},
};

/// Project の永続化を抽象化する trait
///
/// 読み取り・更新はそれぞれ 1 回のロック取得内で完結することを実装に求めます。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// 全プロジェクトを挿入順で取得
    async fn list_projects(&self) -> Vec<Project>;

    /// ID でプロジェクトを取得
    async fn find_project(&self, id: &ProjectId) -> Result<Project, RepositoryError>;

    /// プロジェクトを末尾に追加
    async fn add_project(&self, project: Project) -> Result<(), RepositoryError>;

    /// title / url / techs を置き換え、更新後のプロジェクトを返す
    async fn update_project_details(
        &self,
        id: &ProjectId,
        details: ProjectDetails,
    ) -> Result<Project, RepositoryError>;

    /// プロジェクトを 1 件削除
    async fn remove_project(&self, id: &ProjectId) -> Result<(), RepositoryError>;

    /// いいね数を 1 増やし、更新後のプロジェクトを返す
    async fn like_project(&self, id: &ProjectId) -> Result<Project, RepositoryError>;

    /// 保持しているプロジェクト数
    async fn count_projects(&self) -> usize;
}
