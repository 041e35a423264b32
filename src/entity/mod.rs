pub mod coupon;
pub mod customer;
pub mod deadline;
pub mod level;
pub mod order;
pub mod paper;
pub mod service;
pub mod writer_type;
pub mod writer_type_service;

pub use coupon::CouponType;
pub use deadline::DeadlineType;
pub use order::OrderStatus;
