use std::sync::Arc;

use laundry_service_client::LaundryServiceClient;
use models_customer::{Profile, UpdateProfile};

use crate::controller::Phase;
use crate::notify::Notifier;

/// The signed-in admin's own profile, shown in the navbar dialog.
pub struct ProfileController {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    phase: Phase,
    profile: Option<Profile>,
}

impl ProfileController {
    pub fn new(client: Arc<LaundryServiceClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            phase: Phase::Idle,
            profile: None,
        }
    }

    pub async fn load(&mut self) {
        self.phase = Phase::Loading;
        match self.client.me().await {
            Ok(Some(profile)) => {
                self.profile = Some(profile);
                self.phase = Phase::Loaded;
            }
            Ok(None) => {
                self.phase = Phase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "failed to load profile");
                self.phase = Phase::Errored;
                self.notifier.error("Error", "Failed to load profile");
            }
        }
    }

    pub async fn save(&mut self, update: UpdateProfile) {
        match self.client.update_me(&update).await {
            Ok(Some(profile)) => {
                self.profile = Some(profile);
                self.notifier
                    .success("Success", "Profile updated successfully");
            }
            Ok(None) => {}
            Err(error) => {
                tracing::error!(%error, "failed to update profile");
                self.notifier.error("Error", "Failed to update profile");
            }
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
