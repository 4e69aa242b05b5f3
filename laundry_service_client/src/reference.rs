use models_catalog::{Feature, Include};

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    /// The full features reference list. Not paginated; fetched wholesale.
    #[tracing::instrument(skip(self))]
    pub async fn list_features(&self) -> Result<Option<Vec<Feature>>, ClientError> {
        let url = self.endpoint("/features");
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    /// The full includes reference list. Not paginated; fetched wholesale.
    #[tracing::instrument(skip(self))]
    pub async fn list_includes(&self) -> Result<Option<Vec<Include>>, ClientError> {
        let url = self.endpoint("/includes");
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }
}
