#[macro_use]
extern crate rocket;

use storefront_core::*;

// The only changes in here should be mounting new controller methods
#[launch]
async fn rocket() -> _ {
    env_logger::init();
    // .env is optional
    dotenvy::dotenv().ok();
    let args = args::Args::load();
    let config = utils::rocket_config(&args);
    log::info!("{} is online on port {}", APP_NAME, config.port);
    storefront::build(&config)
}
