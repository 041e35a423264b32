use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Coupons::Table)
          .if_not_exists()
          .col(ColumnDef::new(Coupons::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Coupons::Code).string().not_null().unique_key())
          .col(ColumnDef::new(Coupons::CouponType).text().not_null())
          .col(ColumnDef::new(Coupons::PercentOff).small_integer().not_null())
          .col(ColumnDef::new(Coupons::Minimum).decimal_len(15, 2).null())
          .col(ColumnDef::new(Coupons::StartDate).date_time().not_null())
          .col(ColumnDef::new(Coupons::EndDate).date_time().not_null())
          .col(ColumnDef::new(Coupons::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_coupons_window")
          .table(Coupons::Table)
          .col(Coupons::StartDate)
          .col(Coupons::EndDate)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Coupons::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Coupons {
  Table,
  Id,
  Code,
  CouponType,
  PercentOff,
  Minimum,
  StartDate,
  EndDate,
  CreatedAt,
}
