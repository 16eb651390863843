// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::nota::Nota;
use crate::domain::repositories::nota_repository::NotaRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::nota as nota_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 成绩仓库实现
pub struct NotaRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl NotaRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<nota_entity::Model> for Nota {
    fn from(m: nota_entity::Model) -> Self {
        Nota {
            id: Some(m.id),
            alumno_id: m.alumno_id,
            asignatura_id: m.asignatura_id,
            nota: m.nota,
        }
    }
}

#[async_trait]
impl NotaRepository for NotaRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Nota>, RepositoryError> {
        let models = nota_entity::Entity::find()
            .order_by_asc(nota_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Nota>, RepositoryError> {
        let model = nota_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_alumno(&self, alumno_id: i64) -> Result<Vec<Nota>, RepositoryError> {
        let models = nota_entity::Entity::find()
            .filter(nota_entity::Column::AlumnoId.eq(alumno_id))
            .order_by_asc(nota_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, nota: &Nota) -> Result<Nota, RepositoryError> {
        if let Some(id) = nota.id {
            if let Some(existing) = nota_entity::Entity::find_by_id(id)
                .one(self.db.as_ref())
                .await?
            {
                let mut model: nota_entity::ActiveModel = existing.into();
                model.alumno_id = Set(nota.alumno_id);
                model.asignatura_id = Set(nota.asignatura_id);
                model.nota = Set(nota.nota);
                let updated = model.update(self.db.as_ref()).await?;
                return Ok(updated.into());
            }
        }

        let model = nota_entity::ActiveModel {
            alumno_id: Set(nota.alumno_id),
            asignatura_id: Set(nota.asignatura_id),
            nota: Set(nota.nota),
            ..Default::default()
        };
        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = nota_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
