// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::ServiceError;
use crate::domain::models::alumno::Alumno;
use crate::domain::repositories::alumno_repository::AlumnoRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// 学生服务
///
/// 对学生仓库的直接委托
pub struct AlumnoService<R: AlumnoRepository> {
    repo: Arc<R>,
}

impl<R: AlumnoRepository> AlumnoService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 查询全部学生
    pub async fn find_all(&self) -> Result<Vec<Alumno>, ServiceError> {
        let alumnos = self.repo.find_all().await?;
        debug!(count = alumnos.len(), "Listed alumnos");
        Ok(alumnos)
    }

    /// 根据ID查询学生，不存在时返回 `ServiceError::NotFound`
    pub async fn find_by_id(&self, id: i64) -> Result<Alumno, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("alumno", id))
    }

    /// 保存学生（插入或更新）
    pub async fn save(&self, alumno: Alumno) -> Result<Alumno, ServiceError> {
        let saved = self.repo.save(&alumno).await?;
        metrics::counter!("escuela_alumnos_saved_total").increment(1);
        info!(alumno_id = ?saved.id, "Alumno saved");
        Ok(saved)
    }

    /// 更新已存在的学生，ID 以路径为准
    pub async fn update(&self, id: i64, mut alumno: Alumno) -> Result<Alumno, ServiceError> {
        self.find_by_id(id).await?;
        alumno.id = Some(id);
        self.save(alumno).await
    }

    /// 删除学生，ID 不存在时不做任何操作
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let rows = self.repo.delete_by_id(id).await?;
        metrics::counter!("escuela_alumnos_deleted_total").increment(rows);
        debug!(alumno_id = id, rows, "Alumno delete executed");
        Ok(())
    }
}
