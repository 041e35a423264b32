use sea_orm_migration::prelude::*;

use super::m20260820_000002_create_catalog::{
  Deadlines, Levels, Papers, WriterTypes,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Services::Table)
          .if_not_exists()
          .col(ColumnDef::new(Services::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Services::PaperId).uuid().not_null())
          .col(ColumnDef::new(Services::DeadlineId).uuid().not_null())
          .col(ColumnDef::new(Services::LevelId).uuid().null())
          .col(
            ColumnDef::new(Services::Amount).decimal_len(15, 2).not_null(),
          )
          .col(ColumnDef::new(Services::CreatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_services_paper")
              .from(Services::Table, Services::PaperId)
              .to(Papers::Table, Papers::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_services_deadline")
              .from(Services::Table, Services::DeadlineId)
              .to(Deadlines::Table, Deadlines::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_services_level")
              .from(Services::Table, Services::LevelId)
              .to(Levels::Table, Levels::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_services_paper_deadline_level")
          .table(Services::Table)
          .col(Services::PaperId)
          .col(Services::DeadlineId)
          .col(Services::LevelId)
          .unique()
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(WriterTypeServices::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(WriterTypeServices::Id)
              .uuid()
              .not_null()
              .primary_key(),
          )
          .col(
            ColumnDef::new(WriterTypeServices::WriterTypeId).uuid().not_null(),
          )
          .col(ColumnDef::new(WriterTypeServices::ServiceId).uuid().not_null())
          .col(
            ColumnDef::new(WriterTypeServices::Amount)
              .decimal_len(15, 2)
              .not_null(),
          )
          .col(
            ColumnDef::new(WriterTypeServices::CreatedAt)
              .date_time()
              .not_null(),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_writer_type_services_writer_type")
              .from(WriterTypeServices::Table, WriterTypeServices::WriterTypeId)
              .to(WriterTypes::Table, WriterTypes::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_writer_type_services_service")
              .from(WriterTypeServices::Table, WriterTypeServices::ServiceId)
              .to(Services::Table, Services::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_writer_type_services_pair")
          .table(WriterTypeServices::Table)
          .col(WriterTypeServices::WriterTypeId)
          .col(WriterTypeServices::ServiceId)
          .unique()
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(WriterTypeServices::Table).to_owned())
      .await?;
    manager
      .drop_table(Table::drop().table(Services::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Services {
  Table,
  Id,
  PaperId,
  DeadlineId,
  LevelId,
  Amount,
  CreatedAt,
}

#[derive(DeriveIden)]
pub enum WriterTypeServices {
  Table,
  Id,
  WriterTypeId,
  ServiceId,
  Amount,
  CreatedAt,
}
