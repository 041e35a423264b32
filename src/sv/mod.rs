pub mod calculator;
pub mod catalog;
pub mod coupon;
pub mod customer;
pub mod order;
pub mod pricing;
#[cfg(test)]
pub mod test_utils;

pub use calculator::Calculator;
pub use catalog::Catalog;
pub use coupon::Coupons;
pub use customer::Customers;
pub use order::Orders;
pub use pricing::Pricing;
