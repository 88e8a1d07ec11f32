//! Prosthesis catalog endpoints (`/laboratories/{lab_id}/prostheses`)

use contracts::domain::a004_prosthesis::aggregate::{
    CreateProsthesisRequest, Prosthesis, UpdateProsthesisRequest,
};

use crate::shared::api_client::{ApiClient, ApiResult};
use crate::shared::api_utils::{scoped_collection_path, scoped_item_path};

pub async fn list(api: &ApiClient, lab_id: &str) -> ApiResult<Vec<Prosthesis>> {
    api.get(&scoped_collection_path::<Prosthesis>(lab_id)).await
}

pub async fn get(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<Prosthesis> {
    api.get(&scoped_item_path::<Prosthesis>(lab_id, id)).await
}

pub async fn create(
    api: &ApiClient,
    lab_id: &str,
    payload: &CreateProsthesisRequest,
) -> ApiResult<Prosthesis> {
    api.post(&scoped_collection_path::<Prosthesis>(lab_id), payload)
        .await
}

pub async fn update(
    api: &ApiClient,
    lab_id: &str,
    id: &str,
    payload: &UpdateProsthesisRequest,
) -> ApiResult<Prosthesis> {
    api.put(&scoped_item_path::<Prosthesis>(lab_id, id), payload)
        .await
}

pub async fn delete(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<()> {
    api.delete(&scoped_item_path::<Prosthesis>(lab_id, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_laboratory::api::tests::seed_lab;
    use crate::shared::api_client::test_server::FakeBackend;
    use contracts::domain::common::AggregateRoot;

    fn crown() -> CreateProsthesisRequest {
        CreateProsthesisRequest {
            kind: "crown".to_string(),
            material: "zirconia".to_string(),
            shade: Some("A2".to_string()),
            specifications: Some("monolithic".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let lab_id = seed_lab(&api).await;

        let created = create(&api, &lab_id, &crown()).await.unwrap();
        assert_eq!(created.id(), "pro_1");

        let fetched = get(&api, &lab_id, created.id()).await.unwrap();
        assert_eq!(fetched.kind, "crown");
        assert_eq!(fetched.shade, "A2");
        assert_eq!(fetched.notes, "");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_drops_omitted_optionals() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let lab_id = seed_lab(&api).await;
        let created = create(&api, &lab_id, &crown()).await.unwrap();

        let payload = UpdateProsthesisRequest {
            kind: "bridge".to_string(),
            material: "e.max".to_string(),
            ..UpdateProsthesisRequest::default()
        };
        update(&api, &lab_id, created.id(), &payload).await.unwrap();

        let fetched = get(&api, &lab_id, created.id()).await.unwrap();
        assert_eq!(fetched.kind, "bridge");
        assert_eq!(fetched.shade, "");
        assert_eq!(fetched.specifications, "");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let lab_id = seed_lab(&api).await;
        let created = create(&api, &lab_id, &crown()).await.unwrap();

        delete(&api, &lab_id, created.id()).await.unwrap();
        assert!(get(&api, &lab_id, created.id()).await.unwrap_err().is_not_found());
        assert!(list(&api, &lab_id).await.unwrap().is_empty());
    }
}
