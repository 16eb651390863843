use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_asignaturas::Asignaturas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cursos table
        manager
            .create_table(
                Table::create()
                    .table(Cursos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cursos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cursos::Nombre).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create the cursos <-> asignaturas join table
        manager
            .create_table(
                Table::create()
                    .table(CursosAsignaturas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CursosAsignaturas::CursoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CursosAsignaturas::AsignaturaId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CursosAsignaturas::CursoId)
                            .col(CursosAsignaturas::AsignaturaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cursos_asignaturas_curso")
                            .from(CursosAsignaturas::Table, CursosAsignaturas::CursoId)
                            .to(Cursos::Table, Cursos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cursos_asignaturas_asignatura")
                            .from(CursosAsignaturas::Table, CursosAsignaturas::AsignaturaId)
                            .to(Asignaturas::Table, Asignaturas::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cursos_asignaturas_asignatura")
                    .table(CursosAsignaturas::Table)
                    .col(CursosAsignaturas::AsignaturaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CursosAsignaturas::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cursos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cursos {
    Table,
    Id,
    Nombre,
}

#[derive(DeriveIden)]
enum CursosAsignaturas {
    Table,
    CursoId,
    AsignaturaId,
}
