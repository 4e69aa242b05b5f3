//! Two-step confirmation seam for destructive actions. The controller asks,
//! the shell answers asynchronously; declining abandons the mutation before
//! any network call.

use std::future::Future;

pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> impl Future<Output = bool> + Send;
}

/// Confirms everything. For headless flows and scripted maintenance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}
