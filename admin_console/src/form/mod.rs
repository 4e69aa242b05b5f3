//! Dialog controllers: hold a draft, validate locally, perform exactly one
//! create-or-update call.

mod booking;
mod category;
mod product;
mod service_area;

pub use booking::BookingStatusForm;
pub use category::CategoryForm;
pub use product::ProductForm;
pub use service_area::ServiceAreaForm;

/// What a submit attempt came to. `Saved` is the parent's cue to close the
/// dialog and reload; everything else keeps the dialog open with the draft
/// intact so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Saved,
    /// Local validation rejected the draft; no request was made.
    Invalid,
    /// The backend rejected or the request failed.
    Failed,
    /// The session expired mid-submit; the session watcher announces it.
    SessionEnded,
}

/// Membership toggle for multi-select id lists: selecting an already-selected
/// id removes it. Order is not significant.
pub(crate) fn toggle_id(ids: &mut Vec<i64>, id: i64) {
    if let Some(position) = ids.iter().position(|existing| *existing == id) {
        ids.remove(position);
    } else {
        ids.push(id);
    }
}
