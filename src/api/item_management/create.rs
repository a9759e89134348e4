use crate::api::item_management::models::{Item, ItemRow, NewItem, NewItemRow};
use crate::db::{self, Pool};
use crate::error::ErrorResponse;
use crate::schema::item;
use diesel::prelude::*;
use log::error;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::State;

fn reject(payload_error: json::Error<'_>) -> ErrorResponse {
    match payload_error {
        json::Error::Parse(_, err) => ErrorResponse::new(Status { code: 422 }, err.to_string()),
        json::Error::Io(err) => {
            ErrorResponse::new(Status { code: 400 }, format!("Couldn't read body: {}", err))
        }
    }
}

#[post("/items", data = "<payload>")]
pub(crate) async fn create_item(
    payload: Result<Json<NewItem>, json::Error<'_>>,
    pool: &State<Pool>,
) -> Result<Json<Item>, ErrorResponse> {
    let new_item = NewItemRow::from(payload.map_err(reject)?.into_inner());

    // RETURNING hands back the generated id along with the stored row.
    let row = db::run(pool, move |c| {
        diesel::insert_into(item::table)
            .values(&new_item)
            .get_result::<ItemRow>(c)
            .map_err(|err| {
                error!("Couldn't insert item: {}", err);
                ErrorResponse::internal("Couldn't create item".to_string())
            })
    })
    .await?;

    Ok(Json(Item::from(row)))
}
