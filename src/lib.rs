#[macro_use]
extern crate rocket;

pub mod controller;

use rocket::{
    Build,
    Rocket,
};
use storefront_core::db;

/// Mount the user and product routers and the json catchers
pub fn build(config: &rocket::Config) -> Rocket<Build> {
    rocket::custom(config)
        .manage(db::DatabaseEnvironment::open())
        .mount(
            "/users",
            routes![
                controller::get_users,
                controller::get_user,
                controller::post_users,
                controller::post_users_form,
                controller::post_unsupported,
            ],
        )
        .mount(
            "/products",
            routes![
                controller::get_products,
                controller::get_product,
                controller::post_products,
                controller::post_products_form,
                controller::post_unsupported,
            ],
        )
        .register(
            "/",
            catchers![
                controller::bad_request,
                controller::not_found,
                controller::unsupported_media_type,
                controller::unprocessable_entity,
                controller::internal_error,
            ],
        )
}
