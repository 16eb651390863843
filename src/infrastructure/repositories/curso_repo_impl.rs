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
use crate::domain::models::curso::Curso;
use crate::domain::repositories::curso_repository::CursoRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::asignatura as asignatura_entity;
use crate::infrastructure::database::entities::curso as curso_entity;
use crate::infrastructure::database::entities::curso_asignatura as link_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 课程仓库实现
///
/// 课程与科目的关联保存在 cursos_asignaturas 表中
pub struct CursoRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CursoRepositoryImpl {
    /// 创建新的课程仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(
        curso: curso_entity::Model,
        mut asignaturas: Vec<asignatura_entity::Model>,
    ) -> Curso {
        asignaturas.sort_by_key(|a| a.id);
        Curso {
            id: Some(curso.id),
            nombre: curso.nombre,
            asignaturas: asignaturas.into_iter().map(Asignatura::from).collect(),
        }
    }
}

#[async_trait]
impl CursoRepository for CursoRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Curso>, RepositoryError> {
        let rows = curso_entity::Entity::find()
            .order_by_asc(curso_entity::Column::Id)
            .find_with_related(asignatura_entity::Entity)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(curso, asignaturas)| Self::to_domain(curso, asignaturas))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, RepositoryError> {
        let Some(curso) = curso_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let asignaturas = curso
            .find_related(asignatura_entity::Entity)
            .all(self.db.as_ref())
            .await?;
        Ok(Some(Self::to_domain(curso, asignaturas)))
    }

    async fn save(&self, curso: &Curso) -> Result<Curso, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = match curso.id {
            Some(id) => curso_entity::Entity::find_by_id(id).one(&txn).await?,
            None => None,
        };

        let saved = match existing {
            Some(model) => {
                let mut model: curso_entity::ActiveModel = model.into();
                model.nombre = Set(curso.nombre.clone());
                model.update(&txn).await?
            }
            None => {
                curso_entity::ActiveModel {
                    nombre: Set(curso.nombre.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        // Replace the whole link set
        link_entity::Entity::delete_many()
            .filter(link_entity::Column::CursoId.eq(saved.id))
            .exec(&txn)
            .await?;

        let links: Vec<link_entity::ActiveModel> = curso
            .asignatura_ids()
            .into_iter()
            .map(|asignatura_id| link_entity::ActiveModel {
                curso_id: Set(saved.id),
                asignatura_id: Set(asignatura_id),
            })
            .collect();
        if !links.is_empty() {
            link_entity::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        self.find_by_id(saved.id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = curso_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }

    async fn add_asignatura(
        &self,
        curso_id: i64,
        asignatura_id: i64,
    ) -> Result<(), RepositoryError> {
        let existing = link_entity::Entity::find_by_id((curso_id, asignatura_id))
            .one(self.db.as_ref())
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        link_entity::ActiveModel {
            curso_id: Set(curso_id),
            asignatura_id: Set(asignatura_id),
        }
        .insert(self.db.as_ref())
        .await?;
        Ok(())
    }

    async fn remove_asignatura(
        &self,
        curso_id: i64,
        asignatura_id: i64,
    ) -> Result<u64, RepositoryError> {
        let result = link_entity::Entity::delete_by_id((curso_id, asignatura_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
