use std::sync::Arc;

use laundry_service_client::error::ClientError;
use laundry_service_client::LaundryServiceClient;
use models_catalog::{Category, Feature, Include, Product};
use models_pagination::Page;

use crate::confirm::ConfirmPrompt;
use crate::controller::{LoadTicket, Phase, PAGE_SIZE};
use crate::notify::Notifier;

/// Data behind the products page: one page of products plus the reference
/// lists the product dialog renders its pickers from.
pub struct ProductsController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    products: Vec<Product>,
    categories: Vec<Category>,
    features: Vec<Feature>,
    includes: Vec<Include>,
    search_term: String,
    current_page: u32,
    total_pages: u32,
    load_seq: u64,
}

impl ProductsController {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            products: Vec::new(),
            categories: Vec::new(),
            features: Vec::new(),
            includes: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            total_pages: 0,
            load_seq: 0,
        }
    }

    /// Initial mount: reference data, then page 1.
    pub async fn refresh(&mut self) {
        self.load_reference_data().await;
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let ticket = self.begin_load(page);
        let outcome = self.client.list_products(page, PAGE_SIZE).await;
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
        outcome: Result<Option<Page<Product>>, ClientError>,
    ) {
        if ticket.seq != self.load_seq {
            // superseded by a newer request
            return;
        }
        match outcome {
            Ok(Some(page)) => {
                self.products = page.data;
                self.total_pages = page.total_pages;
                self.current_page = ticket.page;
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                // session ended mid-load; keep whatever was on screen
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to load products");
                self.products.clear();
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to load products");
            }
        }
    }

    /// Dropdown and lookup data. Failures here are logged but not toasted;
    /// the page itself stays usable and falls back to "Unknown" labels.
    pub async fn load_reference_data(&mut self) {
        match self.client.list_categories_simple().await {
            Ok(Some(categories)) => self.categories = categories,
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "failed to load categories"),
        }
        match self.client.list_features().await {
            Ok(Some(features)) => self.features = features,
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "failed to load features"),
        }
        match self.client.list_includes().await {
            Ok(Some(includes)) => self.includes = includes,
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "failed to load includes"),
        }
    }

    /// Confirms, deletes, reloads the current page. Declining issues no
    /// network call.
    pub async fn delete(&mut self, id: i64, prompt: &impl ConfirmPrompt) {
        if !prompt
            .confirm("Are you sure you want to delete this product?")
            .await
        {
            return;
        }
        match self.client.delete_product(id).await {
            Ok(Some(())) => {
                self.notifier.success("Success", "Product deleted successfully");
                self.load_page(self.current_page).await;
            }
            Ok(None) => {}
            Err(error) => {
                tracing::error!(%error, "failed to delete product");
                self.notifier.error("Error", "Failed to delete product");
            }
        }
    }

    /// Reload after a dialog saves: creations land on page 1, edits stay
    /// where the user was.
    pub async fn reload_after_save(&mut self, created: bool) {
        let page = if created { 1 } else { self.current_page };
        self.load_page(page).await;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The loaded page narrowed by the search box. Matches on name or
    /// description, case-insensitively, against the current page only.
    pub fn visible(&self) -> Vec<&Product> {
        let needle = self.search_term.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn category_name(&self, category_id: i64) -> &str {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn includes(&self) -> &[Include] {
        &self.includes
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}
