pub mod order_items;
pub mod orders;
pub mod products;
pub mod user_addresses;
pub mod users;

pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use user_addresses::Entity as UserAddresses;
pub use users::Entity as Users;
