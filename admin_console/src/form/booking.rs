use std::sync::Arc;

use laundry_service_client::LaundryServiceClient;
use models_booking::{Booking, BookingStatus, BookingStatusUpdate};

use crate::form::FormOutcome;
use crate::notify::Notifier;

/// Draft state for the booking edit dialog: lifecycle status plus the paid
/// flag, patched in one call.
pub struct BookingStatusForm {
    client: Arc<LaundryServiceClient>,
    notifier: Notifier,
    booking_id: i64,
    pub status: BookingStatus,
    pub is_paid: bool,
}

impl BookingStatusForm {
    pub fn edit(
        client: Arc<LaundryServiceClient>,
        notifier: Notifier,
        booking: &Booking,
    ) -> Self {
        Self {
            client,
            notifier,
            booking_id: booking.id,
            status: booking.status,
            is_paid: booking.is_paid,
        }
    }

    pub fn booking_id(&self) -> i64 {
        self.booking_id
    }

    pub async fn submit(&mut self) -> FormOutcome {
        let update = BookingStatusUpdate {
            status: self.status,
            is_paid: self.is_paid,
        };
        match self
            .client
            .update_booking_status(self.booking_id, &update)
            .await
        {
            Ok(Some(_)) => {
                self.notifier
                    .success("Success", "Booking updated successfully");
                FormOutcome::Saved
            }
            Ok(None) => FormOutcome::SessionEnded,
            Err(error) => {
                tracing::error!(%error, "failed to update booking");
                self.notifier.error("Error", "Failed to update booking");
                FormOutcome::Failed
            }
        }
    }
}
