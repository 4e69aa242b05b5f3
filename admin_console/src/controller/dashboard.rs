use std::sync::Arc;

use chrono::Datelike;
use laundry_service_client::LaundryServiceClient;
use models_analytics::{AnalyticsQuery, AnalyticsReport};

use crate::controller::{LoadTicket, Phase};
use crate::notify::Notifier;

/// Data behind the analytics overview. Every filter change triggers a
/// reload; the filters themselves are plain query parameters.
pub struct DashboardController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    report: Option<AnalyticsReport>,
    query: AnalyticsQuery,
    load_seq: u64,
}

impl DashboardController {
    /// Starts filtered to the current year, matching what the overview
    /// shows first.
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            report: None,
            query: AnalyticsQuery {
                year: Some(chrono::Utc::now().year()),
                ..Default::default()
            },
            load_seq: 0,
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let outcome = self.client.dashboard_report(&self.query).await;
        self.apply_load(ticket, outcome);
    }

    pub(crate) fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.phase = Phase::Loading;
        LoadTicket {
            seq: self.load_seq,
            page: 1,
        }
    }

    pub(crate) fn apply_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Option<AnalyticsReport>, laundry_service_client::error::ClientError>,
    ) {
        if ticket.seq != self.load_seq {
            return;
        }
        match outcome {
            Ok(Some(report)) => {
                self.report = Some(report);
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to load analytics");
                self.report = None;
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to load analytics");
            }
        }
    }

    pub async fn set_year(&mut self, year: Option<i32>) {
        self.query.year = year;
        self.load().await;
    }

    pub async fn set_month(&mut self, month: Option<u32>) {
        self.query.month = month;
        self.load().await;
    }

    pub async fn set_date_range(&mut self, start: Option<String>, end: Option<String>) {
        self.query.start_date = start;
        self.query.end_date = end;
        self.load().await;
    }

    pub fn query(&self) -> &AnalyticsQuery {
        &self.query
    }

    pub fn report(&self) -> Option<&AnalyticsReport> {
        self.report.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_session::Session;

    fn controller() -> DashboardController {
        let client = Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ));
        let (notifier, _toasts) = Notifier::channel();
        DashboardController::new(client, notifier)
    }

    #[test]
    fn starts_filtered_to_the_current_year() {
        let controller = controller();
        assert_eq!(
            controller.query().year,
            Some(chrono::Utc::now().year())
        );
        assert!(controller.query().month.is_none());
    }

    #[test]
    fn failed_load_clears_the_report() {
        let mut controller = controller();
        let ticket = controller.begin_load();
        controller.apply_load(ticket, Ok(Some(AnalyticsReport::default())));
        assert!(controller.report().is_some());

        let ticket = controller.begin_load();
        controller.apply_load(
            ticket,
            Err(laundry_service_client::error::ClientError::Http {
                status: laundry_service_client::StatusCode::INTERNAL_SERVER_ERROR,
                message: "HTTP error! status: 500".to_string(),
            }),
        );
        assert!(controller.report().is_none());
        assert_eq!(controller.phase(), Phase::Errored);
    }
}
