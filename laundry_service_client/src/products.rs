use models_catalog::{Product, ProductPayload};
use models_pagination::Page;

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Option<Page<Product>>, ClientError> {
        let url = self.endpoint("/products");
        let request = self.http.get(url).query(&[("page", page), ("limit", limit)]);
        let Some(response) = self.send(request).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, ClientError> {
        let url = self.endpoint(&format!("/products/{id}"));
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn create_product(
        &self,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, ClientError> {
        let url = self.endpoint("/products");
        let Some(response) = self.send(self.http.post(url).json(payload)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, ClientError> {
        let url = self.endpoint(&format!("/products/{id}"));
        let Some(response) = self.send(self.http.put(url).json(payload)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    /// Deletes a product. The response body is ignored; only the status
    /// matters.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<Option<()>, ClientError> {
        let url = self.endpoint(&format!("/products/{id}"));
        let Some(_response) = self.send(self.http.delete(url)).await? else {
            return Ok(None);
        };
        Ok(Some(()))
    }
}
