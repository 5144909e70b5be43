use crate::error::{ContactError, ContactErrorExt};
use serde::Serialize;
use std::future::Future;
use tracing::info;

/// Trimmed values of a validated contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
}

impl ContactSubmission {
    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).context("Encoding contact submission")
    }
}

/// Delivers a submission somewhere outside the page.
pub trait Submitter: Send + Sync {
    fn submit(&self, submission: &ContactSubmission) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Logs the payload and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSubmitter;

impl Submitter for TracingSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let payload = submission.to_json()?;
        info!(%payload, "Contact form submitted");
        Ok(())
    }
}
