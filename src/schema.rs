table! {
    item (id) {
        id -> Int4,
        name -> Varchar,
    }
}
