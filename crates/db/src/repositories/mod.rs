//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement operations
//! (signup, wishlist move, order placement) open their own transactions.

pub mod address_repo;
pub mod cart_repo;
pub mod customer_repo;
pub mod employee_repo;
pub mod inventory_repo;
pub mod order_repo;
pub mod permission_repo;
pub mod product_image_repo;
pub mod product_repo;
pub mod resource_repo;
pub mod role_repo;
pub mod size_repo;
pub mod wishlist_repo;

pub use address_repo::AddressRepo;
pub use cart_repo::CartRepo;
pub use customer_repo::CustomerRepo;
pub use employee_repo::EmployeeRepo;
pub use inventory_repo::InventoryRepo;
pub use order_repo::OrderRepo;
pub use permission_repo::PermissionRepo;
pub use product_image_repo::ProductImageRepo;
pub use product_repo::ProductRepo;
pub use resource_repo::ResourceRepo;
pub use role_repo::RoleRepo;
pub use size_repo::SizeRepo;
pub use wishlist_repo::WishlistRepo;
