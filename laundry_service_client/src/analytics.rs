use models_analytics::{AnalyticsQuery, AnalyticsReport};

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    /// The aggregated dashboard report for the given filter window.
    #[tracing::instrument(skip(self))]
    pub async fn dashboard_report(
        &self,
        query: &AnalyticsQuery,
    ) -> Result<Option<AnalyticsReport>, ClientError> {
        let url = self.endpoint("/auth/analytics");
        let Some(response) = self.send(self.http.get(url).query(query)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }
}
