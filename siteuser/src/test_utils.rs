use crate::storage::Stores;

/// Fresh, isolated stores with every table created
pub(crate) async fn init_test_stores() -> Stores {
    let stores = Stores::in_memory().expect("Failed to create in-memory stores");
    crate::init(&stores)
        .await
        .expect("Failed to initialize test stores");
    stores
}
