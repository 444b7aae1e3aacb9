//! Domain models for the record store.
//!
//! Each entity has a stored form (with its store-assigned id) and a `New*`
//! form carrying the caller-supplied fields. The stored forms are what the
//! HTTP layer serializes; the `New*` forms are what it deserializes.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
