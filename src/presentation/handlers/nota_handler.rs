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
use crate::domain::repositories::{
    alumno_repository::AlumnoRepository, asignatura_repository::AsignaturaRepository,
    nota_repository::NotaRepository,
};
use crate::domain::services::nota_service::NotaService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// 获取全部成绩
pub async fn list_notas<NR, AR, SR>(
    Extension(nota_repo): Extension<Arc<NR>>,
    Extension(alumno_repo): Extension<Arc<AR>>,
    Extension(asignatura_repo): Extension<Arc<SR>>,
) -> Result<Json<Vec<Nota>>, AppError>
where
    NR: NotaRepository + 'static,
    AR: AlumnoRepository + 'static,
    SR: AsignaturaRepository + 'static,
{
    let service = NotaService::new(nota_repo, alumno_repo, asignatura_repo);
    Ok(Json(service.find_all().await?))
}

/// 按ID获取成绩
pub async fn get_nota<NR, AR, SR>(
    Extension(nota_repo): Extension<Arc<NR>>,
    Extension(alumno_repo): Extension<Arc<AR>>,
    Extension(asignatura_repo): Extension<Arc<SR>>,
    Path(id): Path<i64>,
) -> Result<Json<Nota>, AppError>
where
    NR: NotaRepository + 'static,
    AR: AlumnoRepository + 'static,
    SR: AsignaturaRepository + 'static,
{
    let service = NotaService::new(nota_repo, alumno_repo, asignatura_repo);
    Ok(Json(service.find_by_id(id).await?))
}

/// 获取某个学生的全部成绩
pub async fn list_notas_by_alumno<NR, AR, SR>(
    Extension(nota_repo): Extension<Arc<NR>>,
    Extension(alumno_repo): Extension<Arc<AR>>,
    Extension(asignatura_repo): Extension<Arc<SR>>,
    Path(alumno_id): Path<i64>,
) -> Result<Json<Vec<Nota>>, AppError>
where
    NR: NotaRepository + 'static,
    AR: AlumnoRepository + 'static,
    SR: AsignaturaRepository + 'static,
{
    let service = NotaService::new(nota_repo, alumno_repo, asignatura_repo);
    Ok(Json(service.find_by_alumno(alumno_id).await?))
}

/// 创建成绩
///
/// 引用的学生或科目不存在时返回 400
pub async fn create_nota<NR, AR, SR>(
    Extension(nota_repo): Extension<Arc<NR>>,
    Extension(alumno_repo): Extension<Arc<AR>>,
    Extension(asignatura_repo): Extension<Arc<SR>>,
    Json(payload): Json<Nota>,
) -> Result<Json<Nota>, AppError>
where
    NR: NotaRepository + 'static,
    AR: AlumnoRepository + 'static,
    SR: AsignaturaRepository + 'static,
{
    let service = NotaService::new(nota_repo, alumno_repo, asignatura_repo);
    Ok(Json(service.save(payload).await?))
}

/// 更新成绩
pub async fn update_nota<NR, AR, SR>(
    Extension(nota_repo): Extension<Arc<NR>>,
    Extension(alumno_repo): Extension<Arc<AR>>,
    Extension(asignatura_repo): Extension<Arc<SR>>,
    Path(id): Path<i64>,
    Json(payload): Json<Nota>,
) -> Result<Json<Nota>, AppError>
where
    NR: NotaRepository + 'static,
    AR: AlumnoRepository + 'static,
    SR: AsignaturaRepository + 'static,
{
    let service = NotaService::new(nota_repo, alumno_repo, asignatura_repo);
    Ok(Json(service.update(id, payload).await?))
}

/// 删除成绩
pub async fn delete_nota<NR, AR, SR>(
    Extension(nota_repo): Extension<Arc<NR>>,
    Extension(alumno_repo): Extension<Arc<AR>>,
    Extension(asignatura_repo): Extension<Arc<SR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    NR: NotaRepository + 'static,
    AR: AlumnoRepository + 'static,
    SR: AsignaturaRepository + 'static,
{
    let service = NotaService::new(nota_repo, alumno_repo, asignatura_repo);
    service.delete(id).await?;
    Ok(StatusCode::OK)
}
