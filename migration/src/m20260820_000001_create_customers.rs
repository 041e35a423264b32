use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Customers::Table)
          .if_not_exists()
          .col(ColumnDef::new(Customers::Id).uuid().not_null().primary_key())
          .col(
            ColumnDef::new(Customers::Email)
              .string()
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Customers::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Customers::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Customers {
  Table,
  Id,
  Email,
  CreatedAt,
}
