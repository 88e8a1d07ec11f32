//! Client endpoints (`/laboratories/{lab_id}/clients`)

use contracts::domain::a002_client::aggregate::{Client, CreateClientRequest, UpdateClientRequest};

use crate::shared::api_client::{ApiClient, ApiResult};
use crate::shared::api_utils::{scoped_collection_path, scoped_item_path};

pub async fn list(api: &ApiClient, lab_id: &str) -> ApiResult<Vec<Client>> {
    api.get(&scoped_collection_path::<Client>(lab_id)).await
}

pub async fn get(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<Client> {
    api.get(&scoped_item_path::<Client>(lab_id, id)).await
}

pub async fn create(
    api: &ApiClient,
    lab_id: &str,
    payload: &CreateClientRequest,
) -> ApiResult<Client> {
    api.post(&scoped_collection_path::<Client>(lab_id), payload).await
}

pub async fn update(
    api: &ApiClient,
    lab_id: &str,
    id: &str,
    payload: &UpdateClientRequest,
) -> ApiResult<Client> {
    api.put(&scoped_item_path::<Client>(lab_id, id), payload).await
}

pub async fn delete(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<()> {
    api.delete(&scoped_item_path::<Client>(lab_id, id)).await
}
