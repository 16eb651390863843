// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 课程-科目关联表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cursos_asignaturas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub curso_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub asignatura_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curso::Entity",
        from = "Column::CursoId",
        to = "super::curso::Column::Id",
        on_delete = "Cascade"
    )]
    Curso,
    #[sea_orm(
        belongs_to = "super::asignatura::Entity",
        from = "Column::AsignaturaId",
        to = "super::asignatura::Column::Id"
    )]
    Asignatura,
}

impl Related<super::curso::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curso.def()
    }
}

impl Related<super::asignatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignatura.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
