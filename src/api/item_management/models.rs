use crate::schema::item;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Body accepted by `POST /items`. A client supplied `id` must still be an
/// integer, but the database assigns the real one.
#[derive(Deserialize, Debug)]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

#[derive(Queryable, Debug)]
pub struct ItemRow {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[table_name = "item"]
pub struct NewItemRow {
    pub name: String,
}

impl From<NewItem> for NewItemRow {
    fn from(new_item: NewItem) -> Self {
        if let Some(id) = new_item.id {
            debug!("Ignoring client supplied id {}", id);
        }

        NewItemRow {
            name: new_item.name,
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
        }
    }
}
