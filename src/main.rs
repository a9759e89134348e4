mod api;
mod cors;
mod db;
mod error;
mod lifecycle;
mod schema;
mod settings;


#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate diesel_migrations;

use cors::CORS;
use error::StartupError;
use rocket::{Build, Rocket};
use settings::Settings;

pub(crate) fn build_rocket(settings: Settings) -> Rocket<Build> {
    let policy = settings.startup_policy;

    rocket::build()
        .attach(CORS)
        .attach(db::provider(settings))
        .attach(lifecycle::on_start(policy))
        .attach(lifecycle::on_stop())
        .mount(
            "/",
            routes![
                crate::api::health::health_check,
                crate::api::item_management::list::get_items,
                crate::api::item_management::create::create_item,
                crate::cors::preflight,
            ],
        )
        .register("/", catchers![crate::error::default_catcher])
}

#[rocket::main]
async fn main() -> Result<(), StartupError> {
    dotenv::dotenv().ok();

    let settings = Settings::new()?;

    let _rocket = build_rocket(settings).launch().await?;

    Ok(())
}
