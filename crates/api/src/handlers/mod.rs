pub mod account;
pub mod addresses;
pub mod admin;
pub mod admin_catalog;
pub mod admin_rbac;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod wishlist;
