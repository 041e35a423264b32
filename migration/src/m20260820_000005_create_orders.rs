use sea_orm_migration::prelude::*;

use super::m20260820_000001_create_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Orders::Table)
          .if_not_exists()
          .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Orders::CustomerId).uuid().not_null())
          .col(ColumnDef::new(Orders::Status).text().not_null())
          .col(ColumnDef::new(Orders::Total).decimal_len(15, 2).not_null())
          .col(ColumnDef::new(Orders::CreatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_orders_customer")
              .from(Orders::Table, Orders::CustomerId)
              .to(Customers::Table, Customers::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_orders_customer_status")
          .table(Orders::Table)
          .col(Orders::CustomerId)
          .col(Orders::Status)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Orders {
  Table,
  Id,
  CustomerId,
  Status,
  Total,
  CreatedAt,
}
