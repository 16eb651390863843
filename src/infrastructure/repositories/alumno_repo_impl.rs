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

use crate::domain::models::alumno::Alumno;
use crate::domain::repositories::alumno_repository::AlumnoRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::alumno as alumno_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 学生仓库实现
pub struct AlumnoRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AlumnoRepositoryImpl {
    /// 创建新的学生仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<alumno_entity::Model> for Alumno {
    fn from(m: alumno_entity::Model) -> Self {
        Alumno {
            id: Some(m.id),
            nombre: m.nombre,
        }
    }
}

#[async_trait]
impl AlumnoRepository for AlumnoRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Alumno>, RepositoryError> {
        let models = alumno_entity::Entity::find()
            .order_by_asc(alumno_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Alumno>, RepositoryError> {
        let model = alumno_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, alumno: &Alumno) -> Result<Alumno, RepositoryError> {
        if let Some(id) = alumno.id {
            if let Some(existing) = alumno_entity::Entity::find_by_id(id)
                .one(self.db.as_ref())
                .await?
            {
                let mut model: alumno_entity::ActiveModel = existing.into();
                model.nombre = Set(alumno.nombre.clone());
                let updated = model.update(self.db.as_ref()).await?;
                return Ok(updated.into());
            }
        }

        // Unknown ids are not reused, the store assigns a fresh one
        let model = alumno_entity::ActiveModel {
            nombre: Set(alumno.nombre.clone()),
            ..Default::default()
        };
        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = alumno_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
