// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 成绩数据库实体模型
///
/// 对应数据库中的 notas 表，多对一关联 alumnos 与 asignaturas
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub alumno_id: i64,
    pub asignatura_id: i64,
    pub nota: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alumno::Entity",
        from = "Column::AlumnoId",
        to = "super::alumno::Column::Id"
    )]
    Alumno,
    #[sea_orm(
        belongs_to = "super::asignatura::Entity",
        from = "Column::AsignaturaId",
        to = "super::asignatura::Column::Id"
    )]
    Asignatura,
}

impl Related<super::alumno::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alumno.def()
    }
}

impl Related<super::asignatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignatura.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
