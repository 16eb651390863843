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

use crate::domain::models::curso::Curso;
use crate::domain::repositories::{
    asignatura_repository::AsignaturaRepository, curso_repository::CursoRepository,
};
use crate::domain::services::curso_service::CursoService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// 获取全部课程（含科目）
pub async fn list_cursos<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
) -> Result<Json<Vec<Curso>>, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    Ok(Json(service.find_all().await?))
}

/// 按ID获取课程
pub async fn get_curso<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
    Path(id): Path<i64>,
) -> Result<Json<Curso>, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    Ok(Json(service.find_by_id(id).await?))
}

/// 创建课程
pub async fn create_curso<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
    Json(payload): Json<Curso>,
) -> Result<Json<Curso>, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    Ok(Json(service.save(payload).await?))
}

/// 更新课程，科目关联按请求体整体替换
pub async fn update_curso<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
    Path(id): Path<i64>,
    Json(payload): Json<Curso>,
) -> Result<Json<Curso>, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    Ok(Json(service.update(id, payload).await?))
}

/// 删除课程
pub async fn delete_curso<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// 为课程关联科目
pub async fn add_asignatura<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
    Path((curso_id, asignatura_id)): Path<(i64, i64)>,
) -> Result<Json<Curso>, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    Ok(Json(service.add_asignatura(curso_id, asignatura_id).await?))
}

/// 取消课程与科目的关联
pub async fn remove_asignatura<CR, AR>(
    Extension(curso_repo): Extension<Arc<CR>>,
    Extension(asignatura_repo): Extension<Arc<AR>>,
    Path((curso_id, asignatura_id)): Path<(i64, i64)>,
) -> Result<Json<Curso>, AppError>
where
    CR: CursoRepository + 'static,
    AR: AsignaturaRepository + 'static,
{
    let service = CursoService::new(curso_repo, asignatura_repo);
    Ok(Json(
        service.remove_asignatura(curso_id, asignatura_id).await?,
    ))
}
