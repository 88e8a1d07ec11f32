use std::collections::BTreeMap;

use contracts::domain::a001_laboratory::aggregate::{CreateLaboratoryRequest, Laboratory};
use leptos::prelude::*;

use crate::domain::a001_laboratory::api;
use crate::shared::api_client::{ApiClient, ApiClientError};

/// Field name → label key of the validation message
pub type FieldErrors = BTreeMap<String, String>;

/// Local checks before submitting; the backend validates the rest
pub fn validate(form: &CreateLaboratoryRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.name.trim().is_empty() {
        errors.insert("name".to_string(), "laboratories.name_required".to_string());
    }
    errors
}

#[derive(Clone, Copy)]
pub struct LaboratoryDetailsViewModel {
    pub form: RwSignal<CreateLaboratoryRequest>,
    pub error: RwSignal<Option<String>>,
    /// Field messages, either label keys from `validate` or backend text
    pub field_errors: RwSignal<FieldErrors>,
    pub is_saving: RwSignal<bool>,
}

impl LaboratoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CreateLaboratoryRequest::default()),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(FieldErrors::new()),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn reset_form(&self) {
        self.form.set(CreateLaboratoryRequest::default());
        self.error.set(None);
        self.field_errors.set(FieldErrors::new());
        self.is_saving.set(false);
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors.with(|errors| errors.get(field).cloned())
    }

    /// Validate and create the laboratory
    pub fn save_command(&self, api: ApiClient, on_saved: Callback<Laboratory>) {
        let current = self.form.get_untracked();

        let errors = validate(&current);
        if !errors.is_empty() {
            self.field_errors.set(errors);
            return;
        }

        let this = *self;
        this.is_saving.set(true);
        this.error.set(None);
        this.field_errors.set(FieldErrors::new());

        leptos::task::spawn_local(async move {
            match api::create(&api, &current).await {
                Ok(lab) => {
                    this.reset_form();
                    on_saved.run(lab);
                }
                Err(e) => {
                    this.apply_error(&e);
                    this.is_saving.set(false);
                }
            }
        });
    }

    fn apply_error(&self, e: &ApiClientError) {
        if let Some(details) = e.api_error().and_then(|err| err.details.clone()) {
            self.field_errors.set(details.into_iter().collect());
        }
        self.error.set(Some(e.message()));
    }
}
