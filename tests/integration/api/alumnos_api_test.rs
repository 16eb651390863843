// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::collections::HashSet;

/// 完整的创建-查询-删除流程
#[tokio::test]
async fn test_create_list_delete_scenario() {
    let app = create_test_app().await;

    // Given: 空数据库
    // When: POST /alumnos
    let response = app
        .server
        .post("/alumnos")
        .json(&json!({ "nombre": "Ana" }))
        .await;

    // Then: 返回带有分配ID的学生
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "id": 1, "nombre": "Ana" }));

    let response = app.server.get("/alumnos").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([{ "id": 1, "nombre": "Ana" }]));

    let response = app.server.delete("/alumnos/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());

    let response = app.server.get("/alumnos").await;
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_created_ids_are_unique_and_listed() {
    let app = create_test_app().await;

    let nombres = ["Ana", "Bruno", "Carla"];
    let mut ids = HashSet::new();
    for nombre in nombres {
        ids.insert(app.create_alumno(nombre).await);
    }
    assert_eq!(ids.len(), nombres.len());

    let listed: Vec<Value> = app.server.get("/alumnos").await.json();
    assert_eq!(listed.len(), nombres.len());

    let listed_names: HashSet<String> = listed
        .iter()
        .map(|a| a["nombre"].as_str().unwrap().to_string())
        .collect();
    let expected: HashSet<String> = nombres.iter().map(|n| n.to_string()).collect();
    assert_eq!(listed_names, expected);

    let listed_ids: HashSet<i64> = listed.iter().map(|a| a["id"].as_i64().unwrap()).collect();
    assert_eq!(listed_ids, ids);
}

#[tokio::test]
async fn test_delete_unknown_id_is_ok_and_store_unchanged() {
    let app = create_test_app().await;
    app.create_alumno("Ana").await;

    let response = app.server.delete("/alumnos/999").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listed: Vec<Value> = app.server.get("/alumnos").await.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_post_with_existing_id_updates() {
    let app = create_test_app().await;
    let id = app.create_alumno("Ana").await;

    let response = app
        .server
        .post("/alumnos")
        .json(&json!({ "id": id, "nombre": "Ana María" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": id, "nombre": "Ana María" })
    );

    let listed: Vec<Value> = app.server.get("/alumnos").await.json();
    assert_eq!(listed, vec![json!({ "id": id, "nombre": "Ana María" })]);
}

#[tokio::test]
async fn test_post_with_unknown_id_creates_new_record() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/alumnos")
        .json(&json!({ "id": 77, "nombre": "Diego" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["nombre"], "Diego");
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_get_by_id_and_not_found() {
    let app = create_test_app().await;
    let id = app.create_alumno("Elena").await;

    let response = app.server.get(&format!("/alumnos/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["nombre"], "Elena");

    let response = app.server.get("/alumnos/12345").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("not found"));
}

#[tokio::test]
async fn test_put_updates_existing_and_rejects_missing() {
    let app = create_test_app().await;
    let id = app.create_alumno("Fede").await;

    let response = app
        .server
        .put(&format!("/alumnos/{}", id))
        .json(&json!({ "nombre": "Federico" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": id, "nombre": "Federico" })
    );

    let response = app
        .server
        .put("/alumnos/4242")
        .json(&json!({ "nombre": "Nadie" }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let listed: Vec<Value> = app.server.get("/alumnos").await.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/alumnos")
        .json(&json!({ "apellido": "sin nombre" }))
        .expect_failure()
        .await;
    assert!(response.status_code().is_client_error());

    let listed: Vec<Value> = app.server.get("/alumnos").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_delete_alumno_with_notas_is_conflict() {
    let app = create_test_app().await;
    let alumno_id = app.create_alumno("Gabriela").await;
    let asignatura_id = app.create_asignatura("Física").await;

    app.server
        .post("/notas")
        .json(&json!({ "alumno_id": alumno_id, "asignatura_id": asignatura_id, "nota": 7 }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .delete(&format!("/alumnos/{}", alumno_id))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = app.server.get(&format!("/alumnos/{}", alumno_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
