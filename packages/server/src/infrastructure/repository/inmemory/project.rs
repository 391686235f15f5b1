//! InMemory Project Repository 実装
//!
//! ドメイン層が定義する ProjectRepository trait の具体的な実装。
//! 挿入順を保つため Vec をインメモリ DB として使用します。
//! 件数は少ない前提のため、検索は線形走査です。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Project, ProjectDetails, ProjectId, ProjectRepository, RepositoryError};

/// インメモリ Project Repository 実装
///
/// 全ての読み書きは単一の Mutex で保護されます。
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    /// Project ドメインモデル（挿入順）
    projects: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    /// 空の InMemoryProjectRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    fn position(projects: &[Project], id: &ProjectId) -> Result<usize, RepositoryError> {
        projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| RepositoryError::ProjectNotFound(id.to_string()))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_projects(&self) -> Vec<Project> {
        let projects = self.projects.lock().await;
        projects.clone()
    }

    async fn find_project(&self, id: &ProjectId) -> Result<Project, RepositoryError> {
        let projects = self.projects.lock().await;
        let index = Self::position(&projects, id)?;
        Ok(projects[index].clone())
    }

    async fn add_project(&self, project: Project) -> Result<(), RepositoryError> {
        let mut projects = self.projects.lock().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(RepositoryError::DuplicateId(project.id.to_string()));
        }
        projects.push(project);
        Ok(())
    }

    async fn update_project_details(
        &self,
        id: &ProjectId,
        details: ProjectDetails,
    ) -> Result<Project, RepositoryError> {
        let mut projects = self.projects.lock().await;
        let index = Self::position(&projects, id)?;
        let project = &mut projects[index];
        project.replace_details(details);
        Ok(project.clone())
    }

    async fn remove_project(&self, id: &ProjectId) -> Result<(), RepositoryError> {
        let mut projects = self.projects.lock().await;
        let index = Self::position(&projects, id)?;
        projects.remove(index);
        Ok(())
    }

    async fn like_project(&self, id: &ProjectId) -> Result<Project, RepositoryError> {
        let mut projects = self.projects.lock().await;
        let index = Self::position(&projects, id)?;
        let project = &mut projects[index];
        project.like();
        Ok(project.clone())
    }

    async fn count_projects(&self) -> usize {
        let projects = self.projects.lock().await;
        projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectIdFactory, ProjectUrl, Techs, Title};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryProjectRepository の基本的な CRUD 操作
    // - 更新・いいね・削除で挿入順が保たれること
    // - エラーハンドリング（存在しない ID、重複 ID）
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - ID の一意性といいね数の単調増加を保証する必要がある
    //
    // 【どのようなシナリオをテストするか】
    // 1. 追加と一覧取得（挿入順）
    // 2. 重複 ID の追加（エラーケース）
    // 3. 更新で位置・いいね数が保たれる
    // 4. 削除で残りの順序が保たれる
    // 5. 存在しない ID への操作（エラーケース）
    // 6. 並行いいねで取りこぼしがない
    // ========================================

    fn project(title: &str) -> Project {
        Project::new(ProjectIdFactory::generate(), details(title))
    }

    fn details(title: &str) -> ProjectDetails {
        ProjectDetails::new(
            Title::new(title.to_string()).unwrap(),
            ProjectUrl::new(format!("https://github.com/example/{title}")).unwrap(),
            Techs::new(vec!["rust".to_string()]).unwrap(),
        )
    }

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_add_and_list_keeps_insertion_order() {
        // テスト項目: 追加した順に一覧が返される
        // given (前提条件):
        let repo = InMemoryProjectRepository::new();

        // when (操作):
        for title in ["a", "b", "c"] {
            repo.add_project(project(title)).await.unwrap();
        }

        // then (期待する結果):
        let projects = repo.list_projects().await;
        assert_eq!(titles(&projects), vec!["a", "b", "c"]);
        assert_eq!(repo.count_projects().await, 3);
    }

    #[tokio::test]
    async fn test_add_duplicate_id_fails() {
        // テスト項目: 同じ ID のプロジェクトは追加できない
        // given (前提条件):
        let repo = InMemoryProjectRepository::new();
        let first = project("a");
        let mut second = project("b");
        second.id = first.id;
        repo.add_project(first).await.unwrap();

        // when (操作):
        let result = repo.add_project(second).await;

        // then (期待する結果):
        assert!(matches!(result, Err(RepositoryError::DuplicateId(_))));
        assert_eq!(repo.count_projects().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_likes() {
        // テスト項目: 更新しても位置・ID・いいね数は変わらない
        // given (前提条件):
        let repo = InMemoryProjectRepository::new();
        let target = project("b");
        let target_id = target.id;
        repo.add_project(project("a")).await.unwrap();
        repo.add_project(target).await.unwrap();
        repo.add_project(project("c")).await.unwrap();
        repo.like_project(&target_id).await.unwrap();

        // when (操作):
        let updated = repo
            .update_project_details(&target_id, details("b2"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(updated.id, target_id);
        assert_eq!(updated.likes(), 1);
        assert_eq!(updated.title.as_str(), "b2");
        let projects = repo.list_projects().await;
        assert_eq!(titles(&projects), vec!["a", "b2", "c"]);
    }

    #[tokio::test]
    async fn test_remove_keeps_order_of_remaining() {
        // テスト項目: 削除は 1 件だけで、残りの順序は保たれる
        // given (前提条件):
        let repo = InMemoryProjectRepository::new();
        let target = project("b");
        let target_id = target.id;
        repo.add_project(project("a")).await.unwrap();
        repo.add_project(target).await.unwrap();
        repo.add_project(project("c")).await.unwrap();

        // when (操作):
        let result = repo.remove_project(&target_id).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let projects = repo.list_projects().await;
        assert_eq!(titles(&projects), vec!["a", "c"]);
        assert!(matches!(
            repo.find_project(&target_id).await,
            Err(RepositoryError::ProjectNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_operations_on_unknown_id_fail() {
        // テスト項目: 存在しない ID への操作は ProjectNotFound になる
        // given (前提条件):
        let repo = InMemoryProjectRepository::new();
        repo.add_project(project("a")).await.unwrap();
        let unknown = ProjectIdFactory::generate();

        // when (操作) / then (期待する結果):
        assert_eq!(
            repo.find_project(&unknown).await,
            Err(RepositoryError::ProjectNotFound(unknown.to_string()))
        );
        assert!(repo.like_project(&unknown).await.is_err());
        assert!(repo.remove_project(&unknown).await.is_err());
        assert!(
            repo.update_project_details(&unknown, details("x"))
                .await
                .is_err()
        );
        assert_eq!(repo.count_projects().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_likes_are_not_lost() {
        // テスト項目: 並行していいねしても取りこぼしがない
        // given (前提条件):
        let repo = InMemoryProjectRepository::new();
        let target = project("a");
        let target_id = target.id;
        repo.add_project(target).await.unwrap();

        // when (操作):
        let handles: Vec<_> = (0..50)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.like_project(&target_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // then (期待する結果):
        let project = repo.find_project(&target_id).await.unwrap();
        assert_eq!(project.likes(), 50);
    }
}
