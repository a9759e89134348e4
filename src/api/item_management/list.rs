use crate::api::item_management::models::{Item, ItemRow};
use crate::db::{self, Pool};
use crate::error::ErrorResponse;
use crate::schema::item;
use diesel::prelude::*;
use log::error;
use rocket::serde::json::Json;
use rocket::State;

#[get("/items")]
pub(crate) async fn get_items(pool: &State<Pool>) -> Result<Json<Vec<Item>>, ErrorResponse> {
    let rows = db::run(pool, |c| {
        item::table.load::<ItemRow>(c).map_err(|err| {
            error!("Couldn't load items: {}", err);
            ErrorResponse::internal("Couldn't load items".to_string())
        })
    })
    .await?;

    Ok(Json(rows.into_iter().map(Item::from).collect()))
}
