// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::alumno::Alumno;
use async_trait::async_trait;

/// 学生仓库特质
///
/// 定义学生数据访问接口
#[async_trait]
pub trait AlumnoRepository: Send + Sync {
    /// 查询全部学生
    async fn find_all(&self) -> Result<Vec<Alumno>, RepositoryError>;

    /// 根据ID查找学生
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Alumno))` - 找到时返回学生
    /// * `Ok(None)` - 未找到
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i64) -> Result<Option<Alumno>, RepositoryError>;

    /// 保存学生（插入或按ID更新）
    ///
    /// `id` 为空或不存在时插入新记录并分配新ID，否则更新已有记录
    async fn save(&self, alumno: &Alumno) -> Result<Alumno, RepositoryError>;

    /// 根据ID删除学生，返回受影响的行数（ID不存在时为0）
    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError>;
}
