use std::sync::Arc;

use laundry_service_client::error::ClientError;
use laundry_service_client::LaundryServiceClient;
use models_booking::Booking;
use models_pagination::Page;

use crate::controller::{LoadTicket, Phase, PAGE_SIZE};
use crate::notify::Notifier;

/// Data behind the bookings page. Bookings are read-mostly: the only
/// mutation is the status form, which reports back through
/// [`BookingsController::reload_current`].
pub struct BookingsController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    bookings: Vec<Booking>,
    search_term: String,
    selected: Option<Booking>,
    current_page: u32,
    total_pages: u32,
    load_seq: u64,
}

impl BookingsController {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            bookings: Vec::new(),
            search_term: String::new(),
            selected: None,
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
        let outcome = self.client.list_bookings(page, PAGE_SIZE).await;
        self.apply_load(ticket, outcome);
    }

    pub async fn reload_current(&mut self) {
        self.load_page(self.current_page).await;
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
        outcome: Result<Option<Page<Booking>>, ClientError>,
    ) {
        if ticket.seq != self.load_seq {
            return;
        }
        match outcome {
            Ok(Some(page)) => {
                self.bookings = page.data;
                // this endpoint's envelope has been seen with a stale
                // totalPages, so derive the count from total/limit
                self.total_pages = if page.limit > 0 {
                    page.total.div_ceil(page.limit as u64) as u32
                } else {
                    page.total_pages
                };
                self.current_page = ticket.page;
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to load bookings");
                self.bookings.clear();
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to load bookings");
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Matches the customer name case-insensitively, or the booking id as a
    /// digit substring.
    pub fn visible(&self) -> Vec<&Booking> {
        let needle = self.search_term.to_lowercase();
        self.bookings
            .iter()
            .filter(|booking| {
                booking.user.name.to_lowercase().contains(&needle)
                    || booking.id.to_string().contains(&self.search_term)
            })
            .collect()
    }

    /// Opens the detail view for a loaded row. No fetch: the list row
    /// already carries the full record.
    pub fn open_detail(&mut self, id: i64) {
        self.selected = self
            .bookings
            .iter()
            .find(|booking| booking.id == id)
            .cloned();
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Booking> {
        self.selected.as_ref()
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
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
    use models_booking::{BookingStatus, BookingUser};

    fn controller() -> BookingsController {
        let client = Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ));
        let (notifier, _toasts) = Notifier::channel();
        BookingsController::new(client, notifier)
    }

    fn booking(id: i64, customer: &str) -> Booking {
        Booking {
            id,
            user: BookingUser {
                name: customer.to_string(),
                phone: None,
                email: None,
            },
            pickup_date: chrono::Utc::now(),
            delivery_date: chrono::Utc::now(),
            full_address: String::new(),
            area: String::new(),
            pincode: String::new(),
            payment_method: None,
            payment_status: None,
            is_paid: false,
            items: Vec::new(),
            amount: 10.0,
            status: BookingStatus::Pending,
            created_at: chrono::Utc::now(),
        }
    }

    fn loaded(controller: &mut BookingsController, bookings: Vec<Booking>, total: u64, limit: u32) {
        let ticket = controller.begin_load(1);
        controller.apply_load(
            ticket,
            Ok(Some(Page {
                data: bookings,
                total,
                page: 1,
                limit,
                total_pages: 0,
            })),
        );
    }

    #[test]
    fn total_pages_derived_from_total_and_limit() {
        let mut controller = controller();
        loaded(&mut controller, vec![booking(1, "Asha")], 23, 10);
        assert_eq!(controller.total_pages(), 3);
        assert!(controller.show_pagination());
    }

    #[test]
    fn search_matches_name_or_id() {
        let mut controller = controller();
        loaded(
            &mut controller,
            vec![booking(101, "Asha"), booking(205, "Ravi")],
            2,
            10,
        );

        controller.set_search_term("asha");
        assert_eq!(controller.visible().len(), 1);

        controller.set_search_term("205");
        let visible = controller.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 205);
    }

    #[test]
    fn detail_selection_comes_from_loaded_rows() {
        let mut controller = controller();
        loaded(&mut controller, vec![booking(7, "Asha")], 1, 10);

        controller.open_detail(7);
        assert_eq!(controller.selected().unwrap().id, 7);

        controller.open_detail(99);
        assert!(controller.selected().is_none());

        controller.open_detail(7);
        controller.close_detail();
        assert!(controller.selected().is_none());
    }

    #[test]
    fn session_end_leaves_bookings_untouched() {
        let mut controller = controller();
        let ticket = controller.begin_load(1);
        controller.apply_load(ticket, Ok(None));
        assert!(controller.bookings().is_empty());
        assert_eq!(controller.phase(), Phase::Loaded);
    }
}
