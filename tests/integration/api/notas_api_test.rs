// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_and_list_notas() {
    let app = create_test_app().await;
    let ana = app.create_alumno("Ana").await;
    let bruno = app.create_alumno("Bruno").await;
    let historia = app.create_asignatura("Historia").await;

    let response = app
        .server
        .post("/notas")
        .json(&json!({ "alumno_id": ana, "asignatura_id": historia, "nota": 9 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let nota: Value = response.json();
    assert_eq!(
        nota,
        json!({ "id": 1, "alumno_id": ana, "asignatura_id": historia, "nota": 9 })
    );

    app.server
        .post("/notas")
        .json(&json!({ "alumno_id": bruno, "asignatura_id": historia, "nota": 5 }))
        .await
        .assert_status_ok();

    let all: Vec<Value> = app.server.get("/notas").await.json();
    assert_eq!(all.len(), 2);

    let de_ana: Vec<Value> = app
        .server
        .get(&format!("/alumnos/{}/notas", ana))
        .await
        .json();
    assert_eq!(de_ana, vec![nota]);
}

#[tokio::test]
async fn test_nota_with_missing_alumno_is_rejected() {
    let app = create_test_app().await;
    let historia = app.create_asignatura("Historia").await;

    let response = app
        .server
        .post("/notas")
        .json(&json!({ "alumno_id": 404, "asignatura_id": historia, "nota": 6 }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("alumno 404"));

    let all: Vec<Value> = app.server.get("/notas").await.json();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_nota_with_missing_asignatura_is_rejected() {
    let app = create_test_app().await;
    let ana = app.create_alumno("Ana").await;

    let response = app
        .server
        .post("/notas")
        .json(&json!({ "alumno_id": ana, "asignatura_id": 404, "nota": 6 }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_nota() {
    let app = create_test_app().await;
    let ana = app.create_alumno("Ana").await;
    let arte = app.create_asignatura("Arte").await;

    let nota: Value = app
        .server
        .post("/notas")
        .json(&json!({ "alumno_id": ana, "asignatura_id": arte, "nota": 4 }))
        .await
        .json();
    let nota_id = nota["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/notas/{}", nota_id))
        .json(&json!({ "alumno_id": ana, "asignatura_id": arte, "nota": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["nota"], 10);

    let fetched: Value = app.server.get(&format!("/notas/{}", nota_id)).await.json();
    assert_eq!(fetched["nota"], 10);

    app.server
        .delete(&format!("/notas/{}", nota_id))
        .await
        .assert_status_ok();
    app.server
        .delete(&format!("/notas/{}", nota_id))
        .await
        .assert_status_ok();

    let response = app
        .server
        .get(&format!("/notas/{}", nota_id))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notas_of_missing_alumno_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/alumnos/31/notas")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
