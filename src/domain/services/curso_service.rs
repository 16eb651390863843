// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::ServiceError;
use crate::domain::models::curso::Curso;
use crate::domain::repositories::asignatura_repository::AsignaturaRepository;
use crate::domain::repositories::curso_repository::CursoRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// 课程服务
///
/// 负责课程的 CRUD 以及课程与科目之间的关联管理
pub struct CursoService<CR: CursoRepository, AR: AsignaturaRepository> {
    curso_repo: Arc<CR>,
    asignatura_repo: Arc<AR>,
}

impl<CR: CursoRepository, AR: AsignaturaRepository> CursoService<CR, AR> {
    pub fn new(curso_repo: Arc<CR>, asignatura_repo: Arc<AR>) -> Self {
        Self {
            curso_repo,
            asignatura_repo,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Curso>, ServiceError> {
        Ok(self.curso_repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Curso, ServiceError> {
        self.curso_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("curso", id))
    }

    /// 保存课程，所有引用的科目必须带有ID且已存在
    pub async fn save(&self, curso: Curso) -> Result<Curso, ServiceError> {
        self.check_asignaturas(&curso).await?;
        let saved = self.curso_repo.save(&curso).await?;
        metrics::counter!("escuela_cursos_saved_total").increment(1);
        info!(
            curso_id = ?saved.id,
            asignaturas = saved.asignaturas.len(),
            "Curso saved"
        );
        Ok(saved)
    }

    pub async fn update(&self, id: i64, mut curso: Curso) -> Result<Curso, ServiceError> {
        self.find_by_id(id).await?;
        curso.id = Some(id);
        self.save(curso).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let rows = self.curso_repo.delete_by_id(id).await?;
        metrics::counter!("escuela_cursos_deleted_total").increment(rows);
        debug!(curso_id = id, rows, "Curso delete executed");
        Ok(())
    }

    /// 为课程关联一个科目，重复关联无副作用
    pub async fn add_asignatura(
        &self,
        curso_id: i64,
        asignatura_id: i64,
    ) -> Result<Curso, ServiceError> {
        self.find_by_id(curso_id).await?;
        if self.asignatura_repo.find_by_id(asignatura_id).await?.is_none() {
            return Err(ServiceError::not_found("asignatura", asignatura_id));
        }

        self.curso_repo
            .add_asignatura(curso_id, asignatura_id)
            .await?;
        debug!(curso_id, asignatura_id, "Asignatura linked to curso");
        self.find_by_id(curso_id).await
    }

    /// 取消课程与科目的关联，未关联时不做任何操作
    pub async fn remove_asignatura(
        &self,
        curso_id: i64,
        asignatura_id: i64,
    ) -> Result<Curso, ServiceError> {
        self.find_by_id(curso_id).await?;
        let rows = self
            .curso_repo
            .remove_asignatura(curso_id, asignatura_id)
            .await?;
        debug!(curso_id, asignatura_id, rows, "Asignatura unlinked from curso");
        self.find_by_id(curso_id).await
    }

    async fn check_asignaturas(&self, curso: &Curso) -> Result<(), ServiceError> {
        if curso.asignaturas.iter().any(|a| a.id.is_none()) {
            return Err(ServiceError::InvalidReference(
                "asignatura without id".to_string(),
            ));
        }

        let ids: Vec<i64> = curso.asignatura_ids().into_iter().collect();
        if ids.is_empty() {
            return Ok(());
        }

        let found = self.asignatura_repo.find_by_ids(&ids).await?;
        if let Some(missing) = ids
            .iter()
            .find(|id| !found.iter().any(|a| a.id == Some(**id)))
        {
            return Err(ServiceError::InvalidReference(format!(
                "asignatura {} does not exist",
                missing
            )));
        }
        Ok(())
    }
}
