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
use crate::domain::services::asignatura_service::AsignaturaService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

pub async fn list_asignaturas<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Asignatura>>, AppError>
where
    R: AsignaturaRepository + 'static,
{
    let service = AsignaturaService::new(repo);
    Ok(Json(service.find_all().await?))
}

pub async fn get_asignatura<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Asignatura>, AppError>
where
    R: AsignaturaRepository + 'static,
{
    let service = AsignaturaService::new(repo);
    Ok(Json(service.find_by_id(id).await?))
}

pub async fn create_asignatura<R>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<Asignatura>,
) -> Result<Json<Asignatura>, AppError>
where
    R: AsignaturaRepository + 'static,
{
    let service = AsignaturaService::new(repo);
    Ok(Json(service.save(payload).await?))
}

pub async fn update_asignatura<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
    Json(payload): Json<Asignatura>,
) -> Result<Json<Asignatura>, AppError>
where
    R: AsignaturaRepository + 'static,
{
    let service = AsignaturaService::new(repo);
    Ok(Json(service.update(id, payload).await?))
}

pub async fn delete_asignatura<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    R: AsignaturaRepository + 'static,
{
    let service = AsignaturaService::new(repo);
    service.delete(id).await?;
    Ok(StatusCode::OK)
}
