use models_booking::{Booking, BookingStatusRecord, BookingStatusUpdate};
use models_pagination::Page;

use crate::error::ClientError;
use crate::{decode, LaundryServiceClient};

impl LaundryServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_bookings(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Option<Page<Booking>>, ClientError> {
        let url = self.endpoint("/bookings");
        let request = self.http.get(url).query(&[("page", page), ("limit", limit)]);
        let Some(response) = self.send(request).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }

    /// Moves a booking through its lifecycle and flips the paid flag.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_booking_status(
        &self,
        id: i64,
        update: &BookingStatusUpdate,
    ) -> Result<Option<BookingStatusRecord>, ClientError> {
        let url = self.endpoint(&format!("/bookings/{id}/status"));
        let Some(response) = self.send(self.http.patch(url).json(update)).await? else {
            return Ok(None);
        };
        Ok(Some(decode(response).await?))
    }
}
