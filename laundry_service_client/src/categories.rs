use models_catalog::{Category, CategoryPayload};
use models_pagination::Page;
use serde::Deserialize;

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

/// `GET /categories` without pagination parameters returns the envelope with
/// only `data` populated.
#[derive(Debug, Deserialize)]
struct CategoryList {
    #[serde(default)]
    data: Vec<Category>,
}

impl LaundryServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_categories(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Option<Page<Category>>, ClientError> {
        let url = self.endpoint("/categories");
        let request = self.http.get(url).query(&[("page", page), ("limit", limit)]);
        let Some(response) = self.send(request).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    /// The whole category list in one call, for dropdowns and name lookups.
    #[tracing::instrument(skip(self))]
    pub async fn list_categories_simple(&self) -> Result<Option<Vec<Category>>, ClientError> {
        let url = self.endpoint("/categories");
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        let list: CategoryList = decode(response).await?;
        Ok(Some(list.data))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, ClientError> {
        let url = self.endpoint(&format!("/categories/{id}"));
        let Some(response) = self.send(self.http.get(url)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn create_category(
        &self,
        payload: &CategoryPayload,
    ) -> Result<Option<Category>, ClientError> {
        let url = self.endpoint("/categories");
        let Some(response) = self.send(self.http.post(url).json(payload)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_category(
        &self,
        id: i64,
        payload: &CategoryPayload,
    ) -> Result<Option<Category>, ClientError> {
        let url = self.endpoint(&format!("/categories/{id}"));
        let Some(response) = self.send(self.http.put(url).json(payload)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_category(&self, id: i64) -> Result<Option<()>, ClientError> {
        let url = self.endpoint(&format!("/categories/{id}"));
        let Some(_response) = self.send(self.http.delete(url)).await? else {
            return Ok(None);
        };
        Ok(Some(()))
    }
}
