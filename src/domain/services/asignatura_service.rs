// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::ServiceError;
use crate::domain::models::asignatura::Asignatura;
use crate::domain::repositories::asignatura_repository::AsignaturaRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// 科目服务
pub struct AsignaturaService<R: AsignaturaRepository> {
    repo: Arc<R>,
}

impl<R: AsignaturaRepository> AsignaturaService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Asignatura>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Asignatura, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("asignatura", id))
    }

    pub async fn save(&self, asignatura: Asignatura) -> Result<Asignatura, ServiceError> {
        let saved = self.repo.save(&asignatura).await?;
        metrics::counter!("escuela_asignaturas_saved_total").increment(1);
        info!(asignatura_id = ?saved.id, "Asignatura saved");
        Ok(saved)
    }

    pub async fn update(
        &self,
        id: i64,
        mut asignatura: Asignatura,
    ) -> Result<Asignatura, ServiceError> {
        self.find_by_id(id).await?;
        asignatura.id = Some(id);
        self.save(asignatura).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let rows = self.repo.delete_by_id(id).await?;
        metrics::counter!("escuela_asignaturas_deleted_total").increment(rows);
        debug!(asignatura_id = id, rows, "Asignatura delete executed");
        Ok(())
    }
}
