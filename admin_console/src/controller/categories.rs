use std::sync::Arc;

use laundry_service_client::error::ClientError;
use laundry_service_client::LaundryServiceClient;
use models_catalog::{Category, Feature};
use models_pagination::Page;

use crate::confirm::ConfirmPrompt;
use crate::controller::{LoadTicket, Phase, PAGE_SIZE};
use crate::notify::Notifier;

/// Data behind the categories page: one page of categories plus the
/// wholesale features list used to print feature names.
pub struct CategoriesController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    categories: Vec<Category>,
    features: Vec<Feature>,
    search_term: String,
    current_page: u32,
    total_pages: u32,
    load_seq: u64,
}

impl CategoriesController {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            categories: Vec::new(),
            features: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            total_pages: 0,
            load_seq: 0,
        }
    }

    pub async fn refresh(&mut self) {
        self.load_features().await;
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let ticket = self.begin_load(page);
        let outcome = self.client.list_categories(page, PAGE_SIZE).await;
        self.apply_load(ticket, outcome);
    }

    pub(crate) fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.load_seq += 1;
        self.phase = Phase::Loading;
        LoadTicket {
            seq: self.load_seq,
            page,
        }
    }

    pub(crate) fn apply_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Option<Page<Category>>, ClientError>,
    ) {
        if ticket.seq != self.load_seq {
            return;
        }
        match outcome {
            Ok(Some(page)) => {
                self.categories = page.data;
                self.total_pages = page.total_pages;
                self.current_page = ticket.page;
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to load categories");
                self.categories.clear();
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to load categories");
            }
        }
    }

    async fn load_features(&mut self) {
        match self.client.list_features().await {
            Ok(Some(features)) => self.features = features,
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "failed to load features"),
        }
    }

    pub async fn delete(&mut self, id: i64, prompt: &impl ConfirmPrompt) {
        if !prompt
            .confirm("Are you sure you want to delete this category?")
            .await
        {
            return;
        }
        match self.client.delete_category(id).await {
            Ok(Some(())) => {
                self.notifier
                    .success("Success", "Category deleted successfully");
                self.load_page(self.current_page).await;
            }
            Ok(None) => {}
            Err(error) => {
                tracing::error!(%error, "failed to delete category");
                self.notifier.error("Error", "Failed to delete category");
            }
        }
    }

    pub async fn reload_after_save(&mut self, created: bool) {
        let page = if created { 1 } else { self.current_page };
        self.load_page(page).await;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn visible(&self) -> Vec<&Category> {
        let needle = self.search_term.to_lowercase();
        self.categories
            .iter()
            .filter(|category| {
                category.name.to_lowercase().contains(&needle)
                    || category.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Comma-joined feature names for a category card, `"None"` when the
    /// category references nothing resolvable.
    pub fn feature_names(&self, category: &Category) -> String {
        let names: Vec<&str> = category
            .feature_ids
            .iter()
            .filter_map(|id| {
                self.features
                    .iter()
                    .find(|feature| feature.id == *id)
                    .map(|feature| feature.name.as_str())
            })
            .collect();
        if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_session::Session;

    fn controller() -> CategoriesController {
        let client = Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ));
        let (notifier, _toasts) = Notifier::channel();
        CategoriesController::new(client, notifier)
    }

    fn category(id: i64, name: &str, feature_ids: Vec<i64>) -> Category {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "featureIds": feature_ids,
        }))
        .unwrap()
    }

    #[test]
    fn feature_names_resolve_against_reference_list() {
        let mut controller = controller();
        controller.features = vec![
            Feature {
                id: 4,
                name: "Eco".to_string(),
                description: None,
            },
            Feature {
                id: 5,
                name: "Fast".to_string(),
                description: None,
            },
        ];

        let with_features = category(1, "Wash", vec![4, 5]);
        assert_eq!(controller.feature_names(&with_features), "Eco, Fast");

        let unresolvable = category(2, "Iron", vec![99]);
        assert_eq!(controller.feature_names(&unresolvable), "None");
    }

    #[test]
    fn search_matches_name_and_description() {
        let mut controller = controller();
        let ticket = controller.begin_load(1);
        controller.apply_load(
            ticket,
            Ok(Some(Page {
                data: vec![category(1, "Wash", vec![]), category(2, "Iron", vec![])],
                total: 2,
                page: 1,
                limit: PAGE_SIZE,
                total_pages: 1,
            })),
        );

        controller.set_search_term("iron");
        let visible = controller.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }
}
