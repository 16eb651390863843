// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_asignatura_crud() {
    let app = create_test_app().await;

    let id = app.create_asignatura("Química").await;

    let response = app.server.get(&format!("/asignaturas/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "id": id, "nombre": "Química" }));

    let response = app
        .server
        .put(&format!("/asignaturas/{}", id))
        .json(&json!({ "nombre": "Química orgánica" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["nombre"], "Química orgánica");

    let listed: Vec<Value> = app.server.get("/asignaturas").await.json();
    assert_eq!(listed.len(), 1);

    app.server
        .delete(&format!("/asignaturas/{}", id))
        .await
        .assert_status_ok();

    let response = app
        .server
        .get(&format!("/asignaturas/{}", id))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_linked_asignatura_is_conflict() {
    let app = create_test_app().await;
    let asignatura_id = app.create_asignatura("Arte").await;

    app.server
        .post("/cursos")
        .json(&json!({ "nombre": "3º C", "asignaturas": [{ "id": asignatura_id, "nombre": "Arte" }] }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .delete(&format!("/asignaturas/{}", asignatura_id))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}
