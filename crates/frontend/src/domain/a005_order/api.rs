//! Order endpoints (`/laboratories/{lab_id}/orders`)
//!
//! `update_status` submits whatever status it is given; the backend decides
//! whether the transition is allowed.

use contracts::domain::a005_order::aggregate::{
    CreateOrderRequest, Order, UpdateOrderRequest, UpdateOrderStatusRequest,
};

use crate::shared::api_client::{ApiClient, ApiResult};
use crate::shared::api_utils::{scoped_collection_path, scoped_item_path};

pub async fn list(api: &ApiClient, lab_id: &str) -> ApiResult<Vec<Order>> {
    api.get(&scoped_collection_path::<Order>(lab_id)).await
}

pub async fn get(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<Order> {
    api.get(&scoped_item_path::<Order>(lab_id, id)).await
}

pub async fn create(api: &ApiClient, lab_id: &str, payload: &CreateOrderRequest) -> ApiResult<Order> {
    api.post(&scoped_collection_path::<Order>(lab_id), payload).await
}

pub async fn update(
    api: &ApiClient,
    lab_id: &str,
    id: &str,
    payload: &UpdateOrderRequest,
) -> ApiResult<Order> {
    api.put(&scoped_item_path::<Order>(lab_id, id), payload).await
}

pub async fn update_status(
    api: &ApiClient,
    lab_id: &str,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> ApiResult<Order> {
    let path = format!("{}/status", scoped_item_path::<Order>(lab_id, id));
    api.patch(&path, &payload).await
}

/// Cancels the order (`DELETE`)
pub async fn cancel(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<()> {
    api.delete(&scoped_item_path::<Order>(lab_id, id)).await
}
