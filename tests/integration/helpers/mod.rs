// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use escuela::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{json, Value};
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
}

/// 创建已迁移的内存数据库
///
/// 内存 SQLite 每个连接都是独立的数据库，因此连接池固定为一个连接
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory SQLite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let server =
        TestServer::new(routes::app(db_pool.clone())).expect("Failed to build test server");
    TestApp { server, db_pool }
}

impl TestApp {
    pub async fn create_alumno(&self, nombre: &str) -> i64 {
        let response = self
            .server
            .post("/alumnos")
            .json(&json!({ "nombre": nombre }))
            .await;
        response.assert_status_ok();
        response.json::<Value>()["id"].as_i64().unwrap()
    }

    pub async fn create_asignatura(&self, nombre: &str) -> i64 {
        let response = self
            .server
            .post("/asignaturas")
            .json(&json!({ "nombre": nombre }))
            .await;
        response.assert_status_ok();
        response.json::<Value>()["id"].as_i64().unwrap()
    }
}
