use log::error;
use rocket::{
    catch,
    form::Form,
    get,
    http::Status,
    post,
    response::status::Custom,
    serde::json::Json,
    State,
};

use storefront_core::{
    error::StorefrontError,
    *,
};

type ApiResult<T> = Result<Custom<Json<T>>, Custom<Json<reqres::ErrorResponse>>>;

fn error_response(e: StorefrontError) -> Custom<Json<reqres::ErrorResponse>> {
    let status = match e {
        StorefrontError::Validation(_) => Status::BadRequest,
        StorefrontError::NotFound => Status::NotFound,
        _ => {
            error!("request failed: {:?}", e);
            Status::InternalServerError
        }
    };
    Custom(
        status,
        Json(reqres::ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// JSON APIs

/// Return all users
#[get("/")]
pub async fn get_users(db: &State<db::DatabaseEnvironment>) -> ApiResult<Vec<models::User>> {
    let m_users = user::find_all(db).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(m_users)))
}

/// Get a user by passing id
#[get("/<uid>")]
pub async fn get_user(uid: &str, db: &State<db::DatabaseEnvironment>) -> ApiResult<models::User> {
    let m_user = user::find(db, uid).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(m_user)))
}

/// Create a user by passing json
#[post("/", format = "json", data = "<r_user>")]
pub async fn post_users(
    r_user: Json<reqres::UserRequest>,
    db: &State<db::DatabaseEnvironment>,
) -> ApiResult<models::User> {
    let m_user = user::create(db, &r_user).map_err(error_response)?;
    Ok(Custom(Status::Created, Json(m_user)))
}

/// Create a user from an urlencoded form
#[post("/", format = "form", data = "<r_user>")]
pub async fn post_users_form(
    r_user: Form<reqres::UserRequest>,
    db: &State<db::DatabaseEnvironment>,
) -> ApiResult<models::User> {
    let m_user = user::create(db, &r_user).map_err(error_response)?;
    Ok(Custom(Status::Created, Json(m_user)))
}

/// Return all products
#[get("/")]
pub async fn get_products(
    db: &State<db::DatabaseEnvironment>,
) -> ApiResult<Vec<models::Product>> {
    let m_products = product::find_all(db).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(m_products)))
}

/// Get a product by passing id
#[get("/<pid>")]
pub async fn get_product(
    pid: &str,
    db: &State<db::DatabaseEnvironment>,
) -> ApiResult<models::Product> {
    let m_product = product::find(db, pid).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(m_product)))
}

/// Create a product by passing json
#[post("/", format = "json", data = "<r_product>")]
pub async fn post_products(
    r_product: Json<reqres::ProductRequest>,
    db: &State<db::DatabaseEnvironment>,
) -> ApiResult<models::Product> {
    let m_product = product::create(db, &r_product).map_err(error_response)?;
    Ok(Custom(Status::Created, Json(m_product)))
}

/// Create a product from an urlencoded form
#[post("/", format = "form", data = "<r_product>")]
pub async fn post_products_form(
    r_product: Form<reqres::ProductRequest>,
    db: &State<db::DatabaseEnvironment>,
) -> ApiResult<models::Product> {
    let m_product = product::create(db, &r_product).map_err(error_response)?;
    Ok(Custom(Status::Created, Json(m_product)))
}

/// Bodies that are neither json nor a form land here
#[post("/", rank = 3)]
pub async fn post_unsupported() -> Custom<Json<reqres::ErrorResponse>> {
    Custom(
        Status::UnsupportedMediaType,
        Json(reqres::ErrorResponse {
            error: String::from("Expected a json or urlencoded form body"),
        }),
    )
}
// END JSON APIs

// Catchers
//----------------------------------------------------------------

#[catch(400)]
pub fn bad_request() -> Custom<Json<reqres::ErrorResponse>> {
    Custom(
        Status::BadRequest,
        Json(reqres::ErrorResponse {
            error: String::from("Malformed request body"),
        }),
    )
}

#[catch(404)]
pub fn not_found() -> Custom<Json<reqres::ErrorResponse>> {
    Custom(
        Status::NotFound,
        Json(reqres::ErrorResponse {
            error: String::from("Resource does not exist"),
        }),
    )
}

#[catch(415)]
pub fn unsupported_media_type() -> Custom<Json<reqres::ErrorResponse>> {
    Custom(
        Status::UnsupportedMediaType,
        Json(reqres::ErrorResponse {
            error: String::from("Unsupported media type"),
        }),
    )
}

#[catch(422)]
pub fn unprocessable_entity() -> Custom<Json<reqres::ErrorResponse>> {
    Custom(
        Status::UnprocessableEntity,
        Json(reqres::ErrorResponse {
            error: String::from("Request body is missing fields or has the wrong types"),
        }),
    )
}

#[catch(500)]
pub fn internal_error() -> Custom<Json<reqres::ErrorResponse>> {
    Custom(
        Status::InternalServerError,
        Json(reqres::ErrorResponse {
            error: String::from("Internal server error"),
        }),
    )
}

// Tests
//-------------------------------------------------------------------------------
