// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use escuela::domain::models::asignatura::Asignatura;
use escuela::domain::models::curso::Curso;
use escuela::domain::repositories::asignatura_repository::AsignaturaRepository;
use escuela::domain::repositories::curso_repository::CursoRepository;
use escuela::domain::repositories::RepositoryError;
use escuela::infrastructure::repositories::asignatura_repo_impl::AsignaturaRepositoryImpl;
use escuela::infrastructure::repositories::curso_repo_impl::CursoRepositoryImpl;

#[tokio::test]
async fn test_save_rewrites_links_and_manages_single_links() {
    let db = create_test_db().await;
    let asignaturas = AsignaturaRepositoryImpl::new(db.clone());
    let cursos = CursoRepositoryImpl::new(db);

    let mates = asignaturas.save(&Asignatura::new("Matemáticas")).await.unwrap();
    let fisica = asignaturas.save(&Asignatura::new("Física")).await.unwrap();

    let mut curso = Curso::new("1º Bachillerato");
    curso.asignaturas = vec![mates.clone(), fisica.clone()];
    let saved = cursos.save(&curso).await.unwrap();
    assert_eq!(saved.asignaturas, vec![mates.clone(), fisica.clone()]);

    let curso_id = saved.id.unwrap();
    let mut replaced = saved.clone();
    replaced.asignaturas = vec![fisica.clone()];
    let saved = cursos.save(&replaced).await.unwrap();
    assert_eq!(saved.id, Some(curso_id));
    assert_eq!(saved.asignaturas, vec![fisica.clone()]);

    cursos
        .add_asignatura(curso_id, mates.id.unwrap())
        .await
        .unwrap();
    cursos
        .add_asignatura(curso_id, mates.id.unwrap())
        .await
        .unwrap();
    let reloaded = cursos.find_by_id(curso_id).await.unwrap().unwrap();
    assert_eq!(reloaded.asignaturas, vec![mates.clone(), fisica.clone()]);

    let removed = cursos
        .remove_asignatura(curso_id, fisica.id.unwrap())
        .await
        .unwrap();
    assert_eq!(removed, 1);
    let reloaded = cursos.find_by_id(curso_id).await.unwrap().unwrap();
    assert_eq!(reloaded.asignaturas, vec![mates]);
}

#[tokio::test]
async fn test_find_all_includes_cursos_without_asignaturas() {
    let db = create_test_db().await;
    let cursos = CursoRepositoryImpl::new(db);

    cursos.save(&Curso::new("Vacío")).await.unwrap();
    let all = cursos.find_all().await.unwrap();

    assert_eq!(all.len(), 1);
    assert!(all[0].asignaturas.is_empty());
}

#[tokio::test]
async fn test_delete_linked_asignatura_fails_and_curso_delete_cascades() {
    let db = create_test_db().await;
    let asignaturas = AsignaturaRepositoryImpl::new(db.clone());
    let cursos = CursoRepositoryImpl::new(db);

    let historia = asignaturas.save(&Asignatura::new("Historia")).await.unwrap();
    let mut curso = Curso::new("2º ESO");
    curso.asignaturas = vec![historia.clone()];
    let curso_id = cursos.save(&curso).await.unwrap().id.unwrap();

    let err = asignaturas
        .delete_by_id(historia.id.unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    assert_eq!(cursos.delete_by_id(curso_id).await.unwrap(), 1);
    assert_eq!(
        asignaturas.delete_by_id(historia.id.unwrap()).await.unwrap(),
        1
    );
}
