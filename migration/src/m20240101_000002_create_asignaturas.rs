use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asignaturas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Asignaturas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Asignaturas::Nombre).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asignaturas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Asignaturas {
    Table,
    Id,
    Nombre,
}
