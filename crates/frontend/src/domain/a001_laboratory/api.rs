//! Laboratory endpoints (`/laboratories`)

use contracts::domain::a001_laboratory::aggregate::{
    CreateLaboratoryRequest, Laboratory, UpdateLaboratoryRequest,
};

use crate::shared::api_client::{ApiClient, ApiResult};
use crate::shared::api_utils::{collection_path, item_path};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Laboratory>> {
    api.get(&collection_path::<Laboratory>()).await
}

pub async fn get(api: &ApiClient, id: &str) -> ApiResult<Laboratory> {
    api.get(&item_path::<Laboratory>(id)).await
}

pub async fn create(api: &ApiClient, payload: &CreateLaboratoryRequest) -> ApiResult<Laboratory> {
    api.post(&collection_path::<Laboratory>(), payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &UpdateLaboratoryRequest,
) -> ApiResult<Laboratory> {
    api.put(&item_path::<Laboratory>(id), payload).await
}

pub async fn delete(api: &ApiClient, id: &str) -> ApiResult<()> {
    api.delete(&item_path::<Laboratory>(id)).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::api_client::test_server::FakeBackend;
    use contracts::domain::common::{Address, AggregateRoot};

    pub(crate) fn acme() -> CreateLaboratoryRequest {
        CreateLaboratoryRequest {
            name: "Acme Dental".to_string(),
            email: "contact@acme.test".to_string(),
            phone: "+55 11 5555-0000".to_string(),
            address: Address {
                street: "Rua A, 1".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                postal_code: "01000-000".to_string(),
                country: "BR".to_string(),
            },
        }
    }

    /// Creates Acme Dental and returns its id
    pub(crate) async fn seed_lab(api: &ApiClient) -> String {
        create(api, &acme()).await.unwrap().id().to_string()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(Some("tok"));

        let lab = create(&api, &acme()).await.unwrap();
        assert_eq!(lab.id(), "lab_1");
        assert_eq!(lab.name, "Acme Dental");
        assert_eq!(lab.address.city, "São Paulo");

        let labs = list(&api).await.unwrap();
        assert!(labs.iter().any(|l| l.id() == "lab_1"));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);

        let created = create(&api, &acme()).await.unwrap();
        let fetched = get(&api, created.id()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.base.created_at, fetched.base.updated_at);
        assert_eq!(backend.last_request().unwrap().path, "/laboratories/lab_1");
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let created = create(&api, &acme()).await.unwrap();

        let mut payload = UpdateLaboratoryRequest::from(&created);
        payload.name = "Acme Dental Prime".to_string();
        payload.phone = String::new();
        payload.address = Address::default();
        update(&api, created.id(), &payload).await.unwrap();

        let fetched = get(&api, created.id()).await.unwrap();
        assert_eq!(fetched.name, "Acme Dental Prime");
        assert_eq!(fetched.phone, "");
        assert_eq!(fetched.address, Address::default());
        assert_eq!(fetched.base.created_at, created.base.created_at);
        assert_eq!(backend.last_request().unwrap().method, "GET");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let id = seed_lab(&api).await;

        delete(&api, &id).await.unwrap();
        let request = backend.last_request().unwrap();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/laboratories/lab_1");

        let err = get(&api, &id).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(list(&api).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_id_is_percent_encoded() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);

        let err = get(&api, "lab 1/x").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            backend.last_request().unwrap().path,
            format!("/{}/lab%201%2Fx", Laboratory::collection_name())
        );
    }
}
