//! Technician endpoints (`/laboratories/{lab_id}/technicians`)

use contracts::domain::a003_technician::aggregate::{
    CreateTechnicianRequest, Technician, UpdateTechnicianRequest,
};

use crate::shared::api_client::{ApiClient, ApiResult};
use crate::shared::api_utils::{scoped_collection_path, scoped_item_path};

pub async fn list(api: &ApiClient, lab_id: &str) -> ApiResult<Vec<Technician>> {
    api.get(&scoped_collection_path::<Technician>(lab_id)).await
}

pub async fn get(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<Technician> {
    api.get(&scoped_item_path::<Technician>(lab_id, id)).await
}

pub async fn create(
    api: &ApiClient,
    lab_id: &str,
    payload: &CreateTechnicianRequest,
) -> ApiResult<Technician> {
    api.post(&scoped_collection_path::<Technician>(lab_id), payload)
        .await
}

pub async fn update(
    api: &ApiClient,
    lab_id: &str,
    id: &str,
    payload: &UpdateTechnicianRequest,
) -> ApiResult<Technician> {
    api.put(&scoped_item_path::<Technician>(lab_id, id), payload)
        .await
}

pub async fn delete(api: &ApiClient, lab_id: &str, id: &str) -> ApiResult<()> {
    api.delete(&scoped_item_path::<Technician>(lab_id, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_laboratory::api::tests::seed_lab;
    use crate::shared::api_client::test_server::FakeBackend;
    use contracts::domain::common::AggregateRoot;
    use contracts::enums::TechnicianRole;

    fn technician(role: TechnicianRole, specializations: &[&str]) -> CreateTechnicianRequest {
        CreateTechnicianRequest {
            name: "Carlos Souza".to_string(),
            email: "carlos@acme.test".to_string(),
            phone: "555-0199".to_string(),
            role,
            specializations: specializations.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(Some("tok"));
        let lab_id = seed_lab(&api).await;

        let created = create(
            &api,
            &lab_id,
            &technician(TechnicianRole::Senior, &["ceramics", "implants"]),
        )
        .await
        .unwrap();
        assert_eq!(created.id(), "tec_1");

        let fetched = get(&api, &lab_id, created.id()).await.unwrap();
        assert_eq!(fetched.role, TechnicianRole::Senior);
        assert_eq!(fetched.specializations_label(), "ceramics, implants");
        assert_eq!(fetched.laboratory_id, lab_id);
    }

    #[tokio::test]
    async fn test_update_replaces_specializations() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let lab_id = seed_lab(&api).await;
        let created = create(&api, &lab_id, &technician(TechnicianRole::Junior, &["ceramics"]))
            .await
            .unwrap();

        let payload = UpdateTechnicianRequest {
            name: created.name.clone(),
            email: created.email.clone(),
            phone: created.phone.clone(),
            role: TechnicianRole::Lead,
            specializations: Vec::new(),
        };
        let updated = update(&api, &lab_id, created.id(), &payload).await.unwrap();

        assert_eq!(updated.role, TechnicianRole::Lead);
        assert!(updated.specializations.is_empty());
        assert_eq!(list(&api, &lab_id).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);
        let lab_id = seed_lab(&api).await;
        let created = create(&api, &lab_id, &technician(TechnicianRole::Manager, &[]))
            .await
            .unwrap();

        delete(&api, &lab_id, created.id()).await.unwrap();
        assert!(get(&api, &lab_id, created.id()).await.unwrap_err().is_not_found());
    }
}
