//! Product domain types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use storekeeper_core::ProductId;

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Store-assigned identity.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Expected to be non-negative; not enforced.
    pub price: f64,
}

/// Fields supplied when creating a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl NewProduct {
    /// The stored representation once the store has assigned an id.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}
