// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_alumnos;
mod m20240101_000002_create_asignaturas;
mod m20240101_000003_create_cursos;
mod m20240101_000004_create_notas;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// 顺序很重要：notas 与 cursos_asignaturas 的外键依赖前面创建的表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_alumnos::Migration),
            Box::new(m20240101_000002_create_asignaturas::Migration),
            Box::new(m20240101_000003_create_cursos::Migration),
            Box::new(m20240101_000004_create_notas::Migration),
        ]
    }
}
