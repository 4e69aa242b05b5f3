use std::sync::Arc;

use laundry_service_client::error::ClientError;
use laundry_service_client::LaundryServiceClient;
use models_customer::Customer;
use models_pagination::Page;

use crate::controller::{LoadTicket, Phase, PAGE_SIZE};
use crate::notify::Notifier;

/// Data behind the customers page. Customers are read-only from the
/// dashboard; the detail view re-fetches the full record because the list
/// rows omit the latest bookings.
pub struct CustomersController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    customers: Vec<Customer>,
    search_term: String,
    detail: Option<Customer>,
    current_page: u32,
    total_pages: u32,
    load_seq: u64,
}

impl CustomersController {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            customers: Vec::new(),
            search_term: String::new(),
            detail: None,
            current_page: 1,
            total_pages: 0,
            load_seq: 0,
        }
    }

    pub async fn refresh(&mut self) {
        self.load_page(1).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        let ticket = self.begin_load(page);
        let outcome = self.client.list_customers(page, PAGE_SIZE).await;
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
        outcome: Result<Option<Page<Customer>>, ClientError>,
    ) {
        if ticket.seq != self.load_seq {
            return;
        }
        match outcome {
            Ok(Some(page)) => {
                self.customers = page.data;
                self.total_pages = page.total_pages;
                self.current_page = ticket.page;
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to load customers");
                self.customers.clear();
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to load customers");
            }
        }
    }

    /// Fetches the full record for the detail dialog.
    pub async fn open_detail(&mut self, id: i64) {
        match self.client.get_customer(id).await {
            Ok(Some(customer)) => self.detail = Some(customer),
            Ok(None) => {}
            Err(error) => {
                tracing::error!(%error, "failed to load customer details");
                self.notifier
                    .error("Error", "Failed to load customer details");
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Customer> {
        self.detail.as_ref()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn visible(&self) -> Vec<&Customer> {
        let needle = self.search_term.to_lowercase();
        self.customers
            .iter()
            .filter(|customer| {
                customer.name.to_lowercase().contains(&needle)
                    || customer.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
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

    fn controller() -> CustomersController {
        let client = Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ));
        let (notifier, _toasts) = Notifier::channel();
        CustomersController::new(client, notifier)
    }

    fn customer(id: i64, name: &str, email: &str) -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "email": email,
        }))
        .unwrap()
    }

    #[test]
    fn search_matches_name_or_email() {
        let mut controller = controller();
        let ticket = controller.begin_load(1);
        controller.apply_load(
            ticket,
            Ok(Some(Page {
                data: vec![
                    customer(1, "Asha", "asha@example.com"),
                    customer(2, "Ravi", "ravi@example.com"),
                ],
                total: 2,
                page: 1,
                limit: PAGE_SIZE,
                total_pages: 1,
            })),
        );

        controller.set_search_term("RAVI@");
        let visible = controller.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn wire_status_defaults_to_inactive() {
        let customer = customer(1, "Asha", "asha@example.com");
        assert!(!customer.status);
    }
}
