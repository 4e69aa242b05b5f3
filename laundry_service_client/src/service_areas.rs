use models_service_area::{CreateServiceArea, ServiceArea};

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    /// Every configured service area. Flat list, no pagination.
    #[tracing::instrument(skip(self))]
    pub async fn list_service_areas(&self) -> Result<Option<Vec<ServiceArea>>, ClientError> {
        let url = self.endpoint("/service-area/");
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn create_service_area(
        &self,
        body: &CreateServiceArea,
    ) -> Result<Option<ServiceArea>, ClientError> {
        let url = self.endpoint("/service-area/");
        let Some(response) = self.send(self.http.post(url).json(body)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_service_area(&self, id: i64) -> Result<Option<()>, ClientError> {
        let url = self.endpoint(&format!("/service-area/{id}"));
        let Some(_response) = self.send(self.http.delete(url)).await? else {
            return Ok(None);
        };
        Ok(Some(()))
    }

    /// Looks a service area up by pincode. The inner `Option` is the
    /// backend's answer: `None` when no record exists for that pincode.
    #[tracing::instrument(skip(self))]
    pub async fn service_area_by_pincode(
        &self,
        pincode: &str,
    ) -> Result<Option<Option<ServiceArea>>, ClientError> {
        let url = self.endpoint("/service-area/by-pincode");
        let request = self.http.get(url).query(&[("pincode", pincode)]);
        let Some(response) = self.send(request).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }
}
