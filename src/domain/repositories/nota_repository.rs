// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::nota::Nota;
use async_trait::async_trait;

/// 成绩仓库特质
#[async_trait]
pub trait NotaRepository: Send + Sync {
    /// 查询全部成绩
    async fn find_all(&self) -> Result<Vec<Nota>, RepositoryError>;
    /// 根据ID查找成绩
    async fn find_by_id(&self, id: i64) -> Result<Option<Nota>, RepositoryError>;
    /// 查询某个学生的全部成绩
    async fn find_by_alumno(&self, alumno_id: i64) -> Result<Vec<Nota>, RepositoryError>;
    /// 保存成绩（插入或按ID更新）
    async fn save(&self, nota: &Nota) -> Result<Nota, RepositoryError>;
    /// 根据ID删除成绩
    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError>;
}
