use std::sync::Arc;

use laundry_service_client::LaundryServiceClient;
use models_service_area::{valid_pincode, CreateServiceArea};

use crate::form::FormOutcome;
use crate::notify::Notifier;

/// Draft state for the add-service-area dialog: a pincode plus the named
/// areas it covers.
pub struct ServiceAreaForm {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    pub pincode: String,
    areas: Vec<String>,
}

impl ServiceAreaForm {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            pincode: String::new(),
            areas: Vec::new(),
        }
    }

    /// Adds a named area to the draft; blank and duplicate entries are
    /// dropped silently.
    pub fn add_area(&mut self, area: impl Into<String>) {
        let area = area.into().trim().to_string();
        if !area.is_empty() && !self.areas.contains(&area) {
            self.areas.push(area);
        }
    }

    pub fn remove_area(&mut self, area: &str) {
        self.areas.retain(|existing| existing != area);
    }

    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    pub async fn submit(&mut self) -> FormOutcome {
        let pincode = self.pincode.trim();
        if !valid_pincode(pincode) {
            self.notifier
                .error("Error", "Please enter a valid 6-digit pincode");
            return FormOutcome::Invalid;
        }

        let body = CreateServiceArea {
            pincode: pincode.to_string(),
            areas: self.areas.clone(),
        };
        match self.client.create_service_area(&body).await {
            Ok(Some(_)) => {
                self.notifier
                    .success("Success", "Service area added successfully");
                FormOutcome::Saved
            }
            Ok(None) => FormOutcome::SessionEnded,
            Err(error) => {
                tracing::error!(%error, "failed to save service area");
                self.notifier.error("Error", "Failed to save service area");
                FormOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_session::Session;

    fn form() -> (ServiceAreaForm, crate::notify::ToastStream) {
        let client = Arc::new(LaundryServiceClient::new(
            "http://127.0.0.1:1/v1",
            Session::new(),
        ));
        let (notifier, toasts) = Notifier::channel();
        (ServiceAreaForm::new(client, notifier), toasts)
    }

    #[tokio::test]
    async fn bad_pincode_blocks_submission() {
        let (mut form, mut toasts) = form();
        form.pincode = "5600".to_string();

        assert_eq!(form.submit().await, FormOutcome::Invalid);
        assert_eq!(
            toasts.try_recv().unwrap().description,
            "Please enter a valid 6-digit pincode"
        );
    }

    #[test]
    fn area_list_dedupes_and_trims() {
        let (mut form, _toasts) = form();
        form.add_area("  Central  ");
        form.add_area("Central");
        form.add_area("");
        form.add_area("North");
        assert_eq!(form.areas(), &["Central", "North"]);

        form.remove_area("Central");
        assert_eq!(form.areas(), &["North"]);
    }
}
