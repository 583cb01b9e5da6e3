//! Records kept in the store and returned over http

use rocket::serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub created: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Product {
    pub pid: String,
    pub name: String,
    pub description: String,
    /// Price in minor currency units
    pub price: u64,
    pub qty: u64,
    pub in_stock: bool,
    pub created: i64,
}
