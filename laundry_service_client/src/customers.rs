use models_customer::Customer;
use models_pagination::Page;

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Option<Page<Customer>>, ClientError> {
        let url = self.endpoint("/auth/users");
        let request = self.http.get(url).query(&[("page", page), ("limit", limit)]);
        let Some(response) = self.send(request).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    /// Full customer record including the latest bookings.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, id: i64) -> Result<Option<Customer>, ClientError> {
        let url = self.endpoint(&format!("/auth/users/{id}"));
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }
}
