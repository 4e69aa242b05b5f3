use std::sync::Arc;

use laundry_service_client::error::ClientError;
use laundry_service_client::LaundryServiceClient;
use models_service_area::ServiceArea;

use crate::confirm::ConfirmPrompt;
use crate::controller::{LoadTicket, Phase};
use crate::notify::Notifier;

/// Data behind the service-areas page. The list is flat (a business serves
/// tens of pincodes, not thousands), so there is no pagination; deletes
/// drop the row locally instead of re-fetching.
pub struct ServiceAreasController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    areas: Vec<ServiceArea>,
    selected: Option<ServiceArea>,
    load_seq: u64,
}

impl ServiceAreasController {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            areas: Vec::new(),
            selected: None,
            load_seq: 0,
        }
    }

    pub async fn refresh(&mut self) {
        let ticket = self.begin_load();
        let outcome = self.client.list_service_areas().await;
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
        outcome: Result<Option<Vec<ServiceArea>>, ClientError>,
    ) {
        if ticket.seq != self.load_seq {
            return;
        }
        match outcome {
            Ok(Some(areas)) => {
                self.areas = areas;
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to fetch service areas");
                self.areas.clear();
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to fetch service areas");
            }
        }
    }

    /// Confirms and deletes. On success the row is removed from local state;
    /// the flat list needs no reload to stay consistent.
    pub async fn delete(&mut self, id: i64, prompt: &impl ConfirmPrompt) {
        if !prompt
            .confirm("Are you sure you want to delete this service area?")
            .await
        {
            return;
        }
        match self.client.delete_service_area(id).await {
            Ok(Some(())) => {
                self.areas.retain(|area| area.id != id);
                if self.selected.as_ref().is_some_and(|area| area.id == id) {
                    self.selected = None;
                }
                self.notifier
                    .success("Success", "Service area deleted successfully");
            }
            Ok(None) => {}
            Err(error) => {
                tracing::error!(%error, "failed to delete service area");
                self.notifier.error("Error", "Failed to delete service area");
            }
        }
    }

    /// Opens the detail dialog via the by-pincode lookup, falling back to
    /// the already-loaded row when the backend has no richer record.
    pub async fn open_detail(&mut self, area: &ServiceArea) {
        match self.client.service_area_by_pincode(&area.pincode).await {
            Ok(Some(detail)) => {
                self.selected = Some(detail.unwrap_or_else(|| area.clone()));
            }
            Ok(None) => {}
            Err(error) => {
                tracing::error!(%error, "failed to fetch service area details");
                self.notifier
                    .error("Error", "Failed to fetch service area details");
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&ServiceArea> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn areas(&self) -> &[ServiceArea] {
        &self.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_session::Session;

    fn controller() -> ServiceAreasController {
        let client = Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ));
        let (notifier, _toasts) = Notifier::channel();
        ServiceAreasController::new(client, notifier)
    }

    fn area(id: i64, pincode: &str) -> ServiceArea {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "pincode": pincode,
            "areas": ["Central"],
            "createdAt": "2025-03-01T10:00:00Z",
            "updatedAt": "2025-03-01T10:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn load_replaces_the_list() {
        let mut controller = controller();
        let ticket = controller.begin_load();
        controller.apply_load(ticket, Ok(Some(vec![area(1, "560001"), area(2, "560002")])));
        assert_eq!(controller.areas().len(), 2);
        assert_eq!(controller.phase(), Phase::Loaded);
    }

    #[test]
    fn failed_load_resets_and_errors() {
        let mut controller = controller();
        let ticket = controller.begin_load();
        controller.apply_load(ticket, Ok(Some(vec![area(1, "560001")])));

        let ticket = controller.begin_load();
        controller.apply_load(
            ticket,
            Err(ClientError::Http {
                status: laundry_service_client::StatusCode::BAD_GATEWAY,
                message: "HTTP error! status: 502".to_string(),
            }),
        );
        assert!(controller.areas().is_empty());
        assert_eq!(controller.phase(), Phase::Errored);
    }
}
