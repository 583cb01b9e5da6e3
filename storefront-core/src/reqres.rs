//! Structs for all http requests and responses
//!
//! Request bodies derive both `Deserialize` and `FromForm` so the
//! same shape is accepted as json or as an urlencoded form.

use rocket::FromForm;
use serde::{
    Deserialize,
    Serialize,
};

/// Body for `POST /users`
#[derive(Debug, Default, Deserialize, Serialize, FromForm)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
}

/// Body for `POST /products`
#[derive(Debug, Default, Deserialize, Serialize, FromForm)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub qty: u64,
}

/// Body of every non-2xx response
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
