use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Papers::Table)
          .if_not_exists()
          .col(ColumnDef::new(Papers::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Papers::Name).string().not_null())
          .col(
            ColumnDef::new(Papers::SortOrder)
              .small_integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Papers::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(Levels::Table)
          .if_not_exists()
          .col(ColumnDef::new(Levels::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Levels::Name).string().not_null())
          .col(
            ColumnDef::new(Levels::SortOrder)
              .small_integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Levels::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(Deadlines::Table)
          .if_not_exists()
          .col(ColumnDef::new(Deadlines::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Deadlines::Value).small_integer().not_null())
          .col(ColumnDef::new(Deadlines::DeadlineType).text().not_null())
          .col(
            ColumnDef::new(Deadlines::SortOrder)
              .small_integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Deadlines::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_deadlines_value_type")
          .table(Deadlines::Table)
          .col(Deadlines::Value)
          .col(Deadlines::DeadlineType)
          .unique()
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(WriterTypes::Table)
          .if_not_exists()
          .col(ColumnDef::new(WriterTypes::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(WriterTypes::Name).string().not_null())
          .col(ColumnDef::new(WriterTypes::Description).string().null())
          .col(
            ColumnDef::new(WriterTypes::SortOrder)
              .small_integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(WriterTypes::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(WriterTypes::Table).to_owned())
      .await?;
    manager
      .drop_table(Table::drop().table(Deadlines::Table).to_owned())
      .await?;
    manager
      .drop_table(Table::drop().table(Levels::Table).to_owned())
      .await?;
    manager
      .drop_table(Table::drop().table(Papers::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Papers {
  Table,
  Id,
  Name,
  SortOrder,
  CreatedAt,
}

#[derive(DeriveIden)]
pub enum Levels {
  Table,
  Id,
  Name,
  SortOrder,
  CreatedAt,
}

#[derive(DeriveIden)]
pub enum Deadlines {
  Table,
  Id,
  Value,
  DeadlineType,
  SortOrder,
  CreatedAt,
}

#[derive(DeriveIden)]
pub enum WriterTypes {
  Table,
  Id,
  Name,
  Description,
  SortOrder,
  CreatedAt,
}
