use std::sync::Arc;

use laundry_service_client::LaundryServiceClient;
use models_catalog::{Category, CategoryPayload};

use crate::form::{toggle_id, FormOutcome};
use crate::notify::Notifier;

/// Draft state for the create/edit category dialog. Feature selection is a
/// toggle set over the wholesale features list.
pub struct CategoryForm {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    editing: Option<i64>,
    pub name: String,
    pub description: String,
    feature_ids: Vec<i64>,
}

impl CategoryForm {
    pub fn create(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            editing: None,
            name: String::new(),
            description: String::new(),
            feature_ids: Vec::new(),
        }
    }

    /// Edit mode. `category` is the normalized record, so embedded feature
    /// objects from legacy responses have already been flattened to ids.
    pub fn edit(
        client: Arc<LaundryServiceClient>,
        notifier: Notifier,
        category: &Category,
    ) -> Self {
        Self {
            client,
            notifier,
            editing: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone(),
            feature_ids: category.feature_ids.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_feature(&mut self, id: i64) {
        toggle_id(&mut self.feature_ids, id);
    }

    pub fn feature_ids(&self) -> &[i64] {
        &self.feature_ids
    }

    pub async fn submit(&mut self) -> FormOutcome {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            self.notifier
                .error("Error", "Please fill in all required fields");
            return FormOutcome::Invalid;
        }

        let payload = CategoryPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            feature_ids: self.feature_ids.clone(),
        };
        let saved = match self.editing {
            Some(id) => self.client.update_category(id, &payload).await,
            None => self.client.create_category(&payload).await,
        };

        match saved {
            Ok(Some(_)) => {
                let description = if self.is_editing() {
                    "Category updated successfully"
                } else {
                    "Category created successfully"
                };
                self.notifier.success("Success", description);
                FormOutcome::Saved
            }
            Ok(None) => FormOutcome::SessionEnded,
            Err(error) => {
                tracing::error!(%error, "failed to save category");
                let description = if self.is_editing() {
                    "Failed to update category"
                } else {
                    "Failed to create category"
                };
                self.notifier.error("Error", description);
                FormOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_session::Session;

    fn client() -> Arc<LaundryServiceClient> {
        Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ))
    }

    #[test]
    fn edit_seeds_ids_from_embedded_feature_objects() {
        // legacy wire shape: embedded feature objects, no featureIds
        let category: Category = serde_json::from_str(
            r#"{"id": 4, "name": "Wash", "features": [{"id": 1, "name": "Eco"}]}"#,
        )
        .unwrap();

        let (notifier, _toasts) = Notifier::channel();
        let form = CategoryForm::edit(client(), notifier, &category);
        assert_eq!(form.feature_ids(), &[1]);
    }

    #[tokio::test]
    async fn missing_required_fields_block_submission() {
        let (notifier, mut toasts) = Notifier::channel();
        let mut form = CategoryForm::create(client(), notifier);
        form.name = "Wash".to_string();

        assert_eq!(form.submit().await, FormOutcome::Invalid);
        assert_eq!(toasts.try_recv().unwrap().title, "Error");
    }

    #[test]
    fn toggle_set_semantics() {
        let (notifier, _toasts) = Notifier::channel();
        let mut form = CategoryForm::create(client(), notifier);
        form.toggle_feature(2);
        form.toggle_feature(3);
        form.toggle_feature(2);
        assert_eq!(form.feature_ids(), &[3]);
    }
}
