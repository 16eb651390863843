// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::ServiceError;
use crate::domain::models::nota::Nota;
use crate::domain::repositories::alumno_repository::AlumnoRepository;
use crate::domain::repositories::asignatura_repository::AsignaturaRepository;
use crate::domain::repositories::nota_repository::NotaRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// 成绩服务
///
/// 保存成绩前校验其引用的学生与科目存在
pub struct NotaService<NR, AR, SR>
where
    NR: NotaRepository,
    AR: AlumnoRepository,
    SR: AsignaturaRepository,
{
    nota_repo: Arc<NR>,
    alumno_repo: Arc<AR>,
    asignatura_repo: Arc<SR>,
}

impl<NR, AR, SR> NotaService<NR, AR, SR>
where
    NR: NotaRepository,
    AR: AlumnoRepository,
    SR: AsignaturaRepository,
{
    pub fn new(nota_repo: Arc<NR>, alumno_repo: Arc<AR>, asignatura_repo: Arc<SR>) -> Self {
        Self {
            nota_repo,
            alumno_repo,
            asignatura_repo,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Nota>, ServiceError> {
        Ok(self.nota_repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Nota, ServiceError> {
        self.nota_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("nota", id))
    }

    /// 查询某个学生的全部成绩，学生不存在时返回 NotFound
    pub async fn find_by_alumno(&self, alumno_id: i64) -> Result<Vec<Nota>, ServiceError> {
        if self.alumno_repo.find_by_id(alumno_id).await?.is_none() {
            return Err(ServiceError::not_found("alumno", alumno_id));
        }
        Ok(self.nota_repo.find_by_alumno(alumno_id).await?)
    }

    pub async fn save(&self, nota: Nota) -> Result<Nota, ServiceError> {
        if self.alumno_repo.find_by_id(nota.alumno_id).await?.is_none() {
            return Err(ServiceError::InvalidReference(format!(
                "alumno {} does not exist",
                nota.alumno_id
            )));
        }
        if self
            .asignatura_repo
            .find_by_id(nota.asignatura_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::InvalidReference(format!(
                "asignatura {} does not exist",
                nota.asignatura_id
            )));
        }

        let saved = self.nota_repo.save(&nota).await?;
        metrics::counter!("escuela_notas_saved_total").increment(1);
        info!(
            nota_id = ?saved.id,
            alumno_id = saved.alumno_id,
            asignatura_id = saved.asignatura_id,
            "Nota saved"
        );
        Ok(saved)
    }

    pub async fn update(&self, id: i64, mut nota: Nota) -> Result<Nota, ServiceError> {
        self.find_by_id(id).await?;
        nota.id = Some(id);
        self.save(nota).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let rows = self.nota_repo.delete_by_id(id).await?;
        metrics::counter!("escuela_notas_deleted_total").increment(rows);
        debug!(nota_id = id, rows, "Nota delete executed");
        Ok(())
    }
}
