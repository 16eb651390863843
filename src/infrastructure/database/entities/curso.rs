// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 课程数据库实体模型
///
/// 与科目的多对多关系通过 cursos_asignaturas 关联表实现
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cursos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::curso_asignatura::Entity")]
    CursosAsignaturas,
}

impl Related<super::asignatura::Entity> for Entity {
    fn to() -> RelationDef {
        super::curso_asignatura::Relation::Asignatura.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::curso_asignatura::Relation::Curso.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
