use models_customer::{Profile, UpdateProfile};

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    /// The currently signed-in admin.
    #[tracing::instrument(skip(self))]
    pub async fn me(&self) -> Result<Option<Profile>, ClientError> {
        let url = self.endpoint("/auth/me");
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_me(&self, update: &UpdateProfile) -> Result<Option<Profile>, ClientError> {
        let url = self.endpoint("/auth/me");
        let Some(response) = self.send(self.http.put(url).json(update)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }
}
