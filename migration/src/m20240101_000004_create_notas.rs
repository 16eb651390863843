use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_alumnos::Alumnos;
use super::m20240101_000002_create_asignaturas::Asignaturas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notas::AlumnoId).big_integer().not_null())
                    .col(ColumnDef::new(Notas::AsignaturaId).big_integer().not_null())
                    .col(ColumnDef::new(Notas::Nota).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notas_alumno")
                            .from(Notas::Table, Notas::AlumnoId)
                            .to(Alumnos::Table, Alumnos::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notas_asignatura")
                            .from(Notas::Table, Notas::AsignaturaId)
                            .to(Asignaturas::Table, Asignaturas::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notas_alumno")
                    .table(Notas::Table)
                    .col(Notas::AlumnoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notas {
    Table,
    Id,
    AlumnoId,
    AsignaturaId,
    Nota,
}
