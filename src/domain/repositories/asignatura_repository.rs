// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::asignatura::Asignatura;
use async_trait::async_trait;

/// 科目仓库特质
#[async_trait]
pub trait AsignaturaRepository: Send + Sync {
    /// 查询全部科目
    async fn find_all(&self) -> Result<Vec<Asignatura>, RepositoryError>;
    /// 根据ID查找科目
    async fn find_by_id(&self, id: i64) -> Result<Option<Asignatura>, RepositoryError>;
    /// 批量查找科目，不存在的ID被忽略
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Asignatura>, RepositoryError>;
    /// 保存科目（插入或按ID更新）
    async fn save(&self, asignatura: &Asignatura) -> Result<Asignatura, RepositoryError>;
    /// 根据ID删除科目
    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError>;
}
