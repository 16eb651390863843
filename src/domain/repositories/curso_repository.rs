// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::curso::Curso;
use async_trait::async_trait;

/// 课程仓库特质
///
/// 返回的课程总是带有完整的科目列表
#[async_trait]
pub trait CursoRepository: Send + Sync {
    /// 查询全部课程
    async fn find_all(&self) -> Result<Vec<Curso>, RepositoryError>;

    /// 根据ID查找课程
    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, RepositoryError>;

    /// 保存课程（插入或按ID更新）
    ///
    /// 课程的科目关联会被整体替换为 `curso.asignatura_ids()`，
    /// 替换在同一个数据库事务内完成
    async fn save(&self, curso: &Curso) -> Result<Curso, RepositoryError>;

    /// 根据ID删除课程（关联行随之删除）
    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError>;

    /// 关联科目，已关联时不做任何操作
    async fn add_asignatura(&self, curso_id: i64, asignatura_id: i64)
        -> Result<(), RepositoryError>;

    /// 取消关联科目，返回删除的关联行数
    async fn remove_asignatura(
        &self,
        curso_id: i64,
        asignatura_id: i64,
    ) -> Result<u64, RepositoryError>;
}
