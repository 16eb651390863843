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

use crate::domain::models::asignatura::Asignatura;
use crate::domain::repositories::asignatura_repository::AsignaturaRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::asignatura as asignatura_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 科目仓库实现
pub struct AsignaturaRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl AsignaturaRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<asignatura_entity::Model> for Asignatura {
    fn from(m: asignatura_entity::Model) -> Self {
        Asignatura {
            id: Some(m.id),
            nombre: m.nombre,
        }
    }
}

#[async_trait]
impl AsignaturaRepository for AsignaturaRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Asignatura>, RepositoryError> {
        let models = asignatura_entity::Entity::find()
            .order_by_asc(asignatura_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Asignatura>, RepositoryError> {
        let model = asignatura_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Asignatura>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = asignatura_entity::Entity::find()
            .filter(asignatura_entity::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(asignatura_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, asignatura: &Asignatura) -> Result<Asignatura, RepositoryError> {
        if let Some(id) = asignatura.id {
            if let Some(existing) = asignatura_entity::Entity::find_by_id(id)
                .one(self.db.as_ref())
                .await?
            {
                let mut model: asignatura_entity::ActiveModel = existing.into();
                model.nombre = Set(asignatura.nombre.clone());
                let updated = model.update(self.db.as_ref()).await?;
                return Ok(updated.into());
            }
        }

        let model = asignatura_entity::ActiveModel {
            nombre: Set(asignatura.nombre.clone()),
            ..Default::default()
        };
        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = asignatura_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
