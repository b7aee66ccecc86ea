//! Product shapes exchanged with clients.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reply body for update and delete when the id does not exist.
pub const NOT_FOUND_MESSAGE: &str = "No Product Found";

/// Create-shape: the client-supplied fields of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProductCreate {
    /// Display name of the product.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: i64,
}

/// Full-shape: a stored product including its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Display name of the product.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: i64,
}

impl Product {
    /// Combine a storage-assigned id with client-supplied fields.
    pub fn from_create(id: i64, input: ProductCreate) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }

    /// The all-zero product returned by a lookup that finds nothing.
    pub fn sentinel() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            quantity: 0,
        }
    }

    /// Whether this is the lookup sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

/// Reply to an update: the replaced product, or the not-found message.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum UpdateReply {
    Updated(Product),
    NotFound(String),
}

impl UpdateReply {
    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_string())
    }
}

/// Confirmation returned by a successful delete.
pub fn deleted_message(id: i64) -> String {
    format!("ID-'{id}' has been Deleted!")
}
