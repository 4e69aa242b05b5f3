use std::sync::Arc;

use laundry_service_client::LaundryServiceClient;
use models_catalog::{Category, Product, ProductPayload};

use crate::form::{toggle_id, FormOutcome};
use crate::notify::Notifier;

/// Draft state for the create/edit product dialog.
pub struct ProductForm {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    editing: Option<i64>,
    pub name: String,
    pub description: String,
    pub price_per_kg: f64,
    pub savings: String,
    pub popular: bool,
    pub category_id: i64,
    feature_ids: Vec<i64>,
    include_ids: Vec<i64>,
}

impl ProductForm {
    /// Create mode: empty draft seeded with the first available category.
    pub fn create(
        client: Arc<LaundryServiceClient>,
        notifier: Notifier,
        categories: &[Category],
    ) -> Self {
        Self {
            client,
            notifier,
            editing: None,
            name: String::new(),
            description: String::new(),
            price_per_kg: 0.0,
            savings: String::new(),
            popular: false,
            category_id: categories.first().map(|category| category.id).unwrap_or(0),
            feature_ids: Vec::new(),
            include_ids: Vec::new(),
        }
    }

    /// Edit mode: draft seeded from the existing product.
    pub fn edit(client: Arc<LaundryServiceClient>, notifier: Notifier, product: &Product) -> Self {
        Self {
            client,
            notifier,
            editing: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price_per_kg: product.price_per_kg.unwrap_or(0.0),
            savings: product.savings.clone().unwrap_or_default(),
            popular: product.popular,
            category_id: product.category_id,
            feature_ids: product.feature_ids.clone(),
            include_ids: product.include_ids.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_feature(&mut self, id: i64) {
        toggle_id(&mut self.feature_ids, id);
    }

    pub fn toggle_include(&mut self, id: i64) {
        toggle_id(&mut self.include_ids, id);
    }

    pub fn feature_ids(&self) -> &[i64] {
        &self.feature_ids
    }

    pub fn include_ids(&self) -> &[i64] {
        &self.include_ids
    }

    fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price_per_kg: (self.price_per_kg > 0.0).then_some(self.price_per_kg),
            savings: (!self.savings.is_empty()).then(|| self.savings.clone()),
            popular: self.popular,
            category_id: self.category_id,
            feature_ids: self.feature_ids.clone(),
            include_ids: self.include_ids.clone(),
        }
    }

    /// Validates, then performs exactly one create-or-update call.
    pub async fn submit(&mut self) -> FormOutcome {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            self.notifier
                .error("Error", "Please fill in all required fields");
            return FormOutcome::Invalid;
        }

        let payload = self.payload();
        let saved = match self.editing {
            Some(id) => self.client.update_product(id, &payload).await,
            None => self.client.create_product(&payload).await,
        };

        match saved {
            Ok(Some(_)) => {
                let description = if self.is_editing() {
                    "Product updated successfully"
                } else {
                    "Product created successfully"
                };
                self.notifier.success("Success", description);
                FormOutcome::Saved
            }
            Ok(None) => FormOutcome::SessionEnded,
            Err(error) => {
                tracing::error!(%error, "failed to save product");
                let description = if self.is_editing() {
                    "Failed to update product"
                } else {
                    "Failed to create product"
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
        // unroutable; validation failures must never get as far as the wire
        Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ))
    }

    fn category(id: i64, name: &str) -> Category {
        serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    #[tokio::test]
    async fn empty_description_blocks_submission() {
        let (notifier, mut toasts) = Notifier::channel();
        let mut form = ProductForm::create(client(), notifier, &[category(3, "Wash")]);
        form.name = "Shirt Wash".to_string();
        form.price_per_kg = 10.0;

        let outcome = form.submit().await;

        assert_eq!(outcome, FormOutcome::Invalid);
        let toast = toasts.try_recv().unwrap();
        assert_eq!(toast.description, "Please fill in all required fields");
        assert!(toasts.try_recv().is_err());
    }

    #[test]
    fn create_mode_seeds_first_category() {
        let (notifier, _toasts) = Notifier::channel();
        let form = ProductForm::create(
            client(),
            notifier,
            &[category(3, "Wash"), category(9, "Iron")],
        );
        assert_eq!(form.category_id, 3);
        assert!(!form.is_editing());
    }

    #[test]
    fn create_mode_without_categories_defaults_to_zero() {
        let (notifier, _toasts) = Notifier::channel();
        let form = ProductForm::create(client(), notifier, &[]);
        assert_eq!(form.category_id, 0);
    }

    #[test]
    fn edit_mode_seeds_from_product() {
        let (notifier, _toasts) = Notifier::channel();
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Duvet Clean",
            "description": "bulky",
            "pricePerKg": 14.5,
            "categoryId": 3,
            "featureIds": [1, 4],
        }))
        .unwrap();

        let form = ProductForm::edit(client(), notifier, &product);
        assert!(form.is_editing());
        assert_eq!(form.price_per_kg, 14.5);
        assert_eq!(form.feature_ids(), &[1, 4]);
    }

    #[test]
    fn feature_toggle_round_trips() {
        let (notifier, _toasts) = Notifier::channel();
        let mut form = ProductForm::create(client(), notifier, &[]);
        form.toggle_feature(5);
        form.toggle_include(6);
        assert_eq!(form.feature_ids(), &[5]);
        form.toggle_feature(5);
        assert!(form.feature_ids().is_empty());
        assert_eq!(form.include_ids(), &[6]);
    }
}
