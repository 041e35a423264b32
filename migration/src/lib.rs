pub use sea_orm_migration::prelude::*;

mod m20260820_000001_create_customers;
mod m20260820_000002_create_catalog;
mod m20260820_000003_create_services;
mod m20260820_000004_create_coupons;
mod m20260820_000005_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260820_000001_create_customers::Migration),
      Box::new(m20260820_000002_create_catalog::Migration),
      Box::new(m20260820_000003_create_services::Migration),
      Box::new(m20260820_000004_create_coupons::Migration),
      Box::new(m20260820_000005_create_orders::Migration),
    ]
  }
}
