pub mod args;
pub mod db;
pub mod error;
pub mod models;
pub mod product;
pub mod reqres;
pub mod user;
pub mod utils;

pub const APP_NAME: &str = "storefront";

// Store Keys
pub const PRODUCT_DB_KEY:       &str = "p";
pub const USER_DB_KEY:          &str = "u";
pub const PRODUCT_LIST_DB_KEY:  &str = "pl";
pub const USER_LIST_DB_KEY:     &str = "ul";
// End Store Keys

/// Environment variable for the listening port
pub const STOREFRONT_PORT: &str = "PORT";
/// Environment variable for the listening address
pub const STOREFRONT_HOST: &str = "STOREFRONT_HOST";
/// Environment variable for the release environment
pub const STOREFRONT_RELEASE_ENV: &str = "STOREFRONT_RELEASE_ENV";

/// Default app port
pub const DEFAULT_APP_PORT: u16 = 3000;
/// Separator for the id lists kept under the list keys
pub const INDEX_SEPARATOR: &str = ",";
// DO NOT EDIT BELOW THIS LINE
