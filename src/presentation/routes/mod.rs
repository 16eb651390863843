// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::alumno_repo_impl::AlumnoRepositoryImpl;
use crate::infrastructure::repositories::asignatura_repo_impl::AsignaturaRepositoryImpl;
use crate::infrastructure::repositories::curso_repo_impl::CursoRepositoryImpl;
use crate::infrastructure::repositories::nota_repo_impl::NotaRepositoryImpl;
use crate::presentation::handlers::{
    alumno_handler, asignatura_handler, curso_handler, nota_handler,
};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 仓库实现需由调用方通过 `Extension` 注入，参见 [`app`]
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let alumno_routes = Router::new()
        .route(
            "/alumnos",
            get(alumno_handler::list_alumnos::<AlumnoRepositoryImpl>)
                .post(alumno_handler::create_alumno::<AlumnoRepositoryImpl>),
        )
        .route(
            "/alumnos/{id}",
            get(alumno_handler::get_alumno::<AlumnoRepositoryImpl>)
                .put(alumno_handler::update_alumno::<AlumnoRepositoryImpl>)
                .delete(alumno_handler::delete_alumno::<AlumnoRepositoryImpl>),
        )
        .route(
            "/alumnos/{id}/notas",
            get(nota_handler::list_notas_by_alumno::<
                NotaRepositoryImpl,
                AlumnoRepositoryImpl,
                AsignaturaRepositoryImpl,
            >),
        );

    let asignatura_routes = Router::new()
        .route(
            "/asignaturas",
            get(asignatura_handler::list_asignaturas::<AsignaturaRepositoryImpl>)
                .post(asignatura_handler::create_asignatura::<AsignaturaRepositoryImpl>),
        )
        .route(
            "/asignaturas/{id}",
            get(asignatura_handler::get_asignatura::<AsignaturaRepositoryImpl>)
                .put(asignatura_handler::update_asignatura::<AsignaturaRepositoryImpl>)
                .delete(asignatura_handler::delete_asignatura::<AsignaturaRepositoryImpl>),
        );

    let curso_routes = Router::new()
        .route(
            "/cursos",
            get(curso_handler::list_cursos::<CursoRepositoryImpl, AsignaturaRepositoryImpl>)
                .post(curso_handler::create_curso::<CursoRepositoryImpl, AsignaturaRepositoryImpl>),
        )
        .route(
            "/cursos/{id}",
            get(curso_handler::get_curso::<CursoRepositoryImpl, AsignaturaRepositoryImpl>)
                .put(curso_handler::update_curso::<CursoRepositoryImpl, AsignaturaRepositoryImpl>)
                .delete(
                    curso_handler::delete_curso::<CursoRepositoryImpl, AsignaturaRepositoryImpl>,
                ),
        )
        .route(
            "/cursos/{id}/asignaturas/{asignatura_id}",
            post(curso_handler::add_asignatura::<CursoRepositoryImpl, AsignaturaRepositoryImpl>)
                .delete(
                    curso_handler::remove_asignatura::<
                        CursoRepositoryImpl,
                        AsignaturaRepositoryImpl,
                    >,
                ),
        );

    let nota_routes = Router::new()
        .route(
            "/notas",
            get(nota_handler::list_notas::<
                NotaRepositoryImpl,
                AlumnoRepositoryImpl,
                AsignaturaRepositoryImpl,
            >)
            .post(
                nota_handler::create_nota::<
                    NotaRepositoryImpl,
                    AlumnoRepositoryImpl,
                    AsignaturaRepositoryImpl,
                >,
            ),
        )
        .route(
            "/notas/{id}",
            get(nota_handler::get_nota::<
                NotaRepositoryImpl,
                AlumnoRepositoryImpl,
                AsignaturaRepositoryImpl,
            >)
            .put(
                nota_handler::update_nota::<
                    NotaRepositoryImpl,
                    AlumnoRepositoryImpl,
                    AsignaturaRepositoryImpl,
                >,
            )
            .delete(
                nota_handler::delete_nota::<
                    NotaRepositoryImpl,
                    AlumnoRepositoryImpl,
                    AsignaturaRepositoryImpl,
                >,
            ),
        );

    Router::new()
        .merge(public_routes)
        .merge(alumno_routes)
        .merge(asignatura_routes)
        .merge(curso_routes)
        .merge(nota_routes)
}

/// 创建完整应用
///
/// 基于数据库连接构造全部仓库，注入到路由并挂载请求追踪
pub fn app(db: Arc<DatabaseConnection>) -> Router {
    let alumno_repo = Arc::new(AlumnoRepositoryImpl::new(db.clone()));
    let asignatura_repo = Arc::new(AsignaturaRepositoryImpl::new(db.clone()));
    let curso_repo = Arc::new(CursoRepositoryImpl::new(db.clone()));
    let nota_repo = Arc::new(NotaRepositoryImpl::new(db));

    routes()
        .layer(Extension(alumno_repo))
        .layer(Extension(asignatura_repo))
        .layer(Extension(curso_repo))
        .layer(Extension(nota_repo))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
