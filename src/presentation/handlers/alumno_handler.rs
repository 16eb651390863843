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
use crate::domain::services::alumno_service::AlumnoService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// 获取全部学生
pub async fn list_alumnos<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Alumno>>, AppError>
where
    R: AlumnoRepository + 'static,
{
    let service = AlumnoService::new(repo);
    Ok(Json(service.find_all().await?))
}

/// 按ID获取学生
pub async fn get_alumno<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Alumno>, AppError>
where
    R: AlumnoRepository + 'static,
{
    let service = AlumnoService::new(repo);
    Ok(Json(service.find_by_id(id).await?))
}

/// 创建学生
///
/// 返回 200 与保存后的学生（含分配的ID）
pub async fn create_alumno<R>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<Alumno>,
) -> Result<Json<Alumno>, AppError>
where
    R: AlumnoRepository + 'static,
{
    let service = AlumnoService::new(repo);
    Ok(Json(service.save(payload).await?))
}

/// 更新学生
pub async fn update_alumno<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
    Json(payload): Json<Alumno>,
) -> Result<Json<Alumno>, AppError>
where
    R: AlumnoRepository + 'static,
{
    let service = AlumnoService::new(repo);
    Ok(Json(service.update(id, payload).await?))
}

/// 删除学生
///
/// 无论ID是否存在都返回 200 与空响应体
pub async fn delete_alumno<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    R: AlumnoRepository + 'static,
{
    let service = AlumnoService::new(repo);
    service.delete(id).await?;
    Ok(StatusCode::OK)
}
