// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use escuela::domain::models::alumno::Alumno;
use escuela::domain::models::asignatura::Asignatura;
use escuela::domain::models::nota::Nota;
use escuela::domain::repositories::alumno_repository::AlumnoRepository;
use escuela::domain::repositories::asignatura_repository::AsignaturaRepository;
use escuela::domain::repositories::nota_repository::NotaRepository;
use escuela::domain::repositories::RepositoryError;
use escuela::infrastructure::repositories::alumno_repo_impl::AlumnoRepositoryImpl;
use escuela::infrastructure::repositories::asignatura_repo_impl::AsignaturaRepositoryImpl;
use escuela::infrastructure::repositories::nota_repo_impl::NotaRepositoryImpl;

/// 测试保存的插入或更新语义
#[tokio::test]
async fn test_save_inserts_then_updates() {
    let repo = AlumnoRepositoryImpl::new(create_test_db().await);

    let inserted = repo.save(&Alumno::new("Ana")).await.unwrap();
    let id = inserted.id.expect("id assigned on insert");

    let updated = repo
        .save(&Alumno {
            id: Some(id),
            nombre: "Ana Belén".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.id, Some(id));

    let all = repo.find_all().await.unwrap();
    assert_eq!(
        all,
        vec![Alumno {
            id: Some(id),
            nombre: "Ana Belén".to_string()
        }]
    );
}

#[tokio::test]
async fn test_find_by_id_and_delete() {
    let repo = AlumnoRepositoryImpl::new(create_test_db().await);

    let a = repo.save(&Alumno::new("Luis")).await.unwrap();
    let b = repo.save(&Alumno::new("Marta")).await.unwrap();
    assert_ne!(a.id, b.id);

    let found = repo.find_by_id(b.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(b.clone()));

    assert_eq!(repo.delete_by_id(a.id.unwrap()).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(a.id.unwrap()).await.unwrap(), 0);
    assert_eq!(repo.find_by_id(a.id.unwrap()).await.unwrap(), None);
    assert_eq!(repo.find_all().await.unwrap(), vec![b]);
}

/// 被成绩引用的学生不可删除
#[tokio::test]
async fn test_delete_referenced_alumno_is_constraint_violation() {
    let db = create_test_db().await;
    let alumnos = AlumnoRepositoryImpl::new(db.clone());
    let asignaturas = AsignaturaRepositoryImpl::new(db.clone());
    let notas = NotaRepositoryImpl::new(db);

    let alumno_id = alumnos.save(&Alumno::new("Ana")).await.unwrap().id.unwrap();
    let asignatura_id = asignaturas
        .save(&Asignatura::new("Química"))
        .await
        .unwrap()
        .id
        .unwrap();
    notas
        .save(&Nota::new(alumno_id, asignatura_id, 8))
        .await
        .unwrap();

    let err = alumnos.delete_by_id(alumno_id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let err = asignaturas.delete_by_id(asignatura_id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    assert!(alumnos.find_by_id(alumno_id).await.unwrap().is_some());
}
