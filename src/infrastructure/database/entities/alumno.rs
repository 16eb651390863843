// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 学生数据库实体模型
///
/// 对应数据库中的 alumnos 表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alumnos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nota::Entity")]
    Notas,
}

impl Related<super::nota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
