// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 科目数据库实体模型
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "asignaturas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nota::Entity")]
    Notas,
    #[sea_orm(has_many = "super::curso_asignatura::Entity")]
    CursosAsignaturas,
}

impl Related<super::nota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notas.def()
    }
}

impl Related<super::curso::Entity> for Entity {
    fn to() -> RelationDef {
        super::curso_asignatura::Relation::Curso.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::curso_asignatura::Relation::Asignatura.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
