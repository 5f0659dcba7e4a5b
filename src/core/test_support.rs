use crate::domain::model::{
    ContactContent, HeroContent, PortfolioCatalog, ServiceCatalog, SiteSettings,
    SubmissionPayload, SubmissionResult, SubmissionStatus,
};
use crate::domain::ports::ContentSource;
use crate::utils::error::{ContentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

pub(crate) enum SubmitReply {
    Respond(SubmissionResult),
    TransportFailure,
}

/// In-memory `ContentSource` that records every call.
pub(crate) struct FakeSource {
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: AtomicBool,
    delay: Duration,
    submit_reply: Mutex<SubmitReply>,
    submit_gate: Option<Arc<Semaphore>>,
    submitted: Mutex<Vec<SubmissionPayload>>,
}

impl FakeSource {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(HashMap::new()),
            failing: AtomicBool::new(false),
            delay: Duration::from_millis(20),
            submit_reply: Mutex::new(SubmitReply::Respond(SubmissionResult {
                status: SubmissionStatus::Success,
                message: "Thanks".to_string(),
                invalid_fields: vec![],
            })),
            submit_gate: None,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Submissions block until the returned semaphore receives a permit.
    pub(crate) fn with_submit_gate(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.submit_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn reply_with(&self, reply: SubmitReply) {
        *self.submit_reply.lock().unwrap() = reply;
    }

    pub(crate) fn calls(&self, name: &str) -> usize {
        self.calls.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub(crate) fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submitted.lock().unwrap().clone()
    }

    async fn respond<T>(&self, name: &'static str, value: T) -> Result<T> {
        *self.calls.lock().unwrap().entry(name).or_insert(0) += 1;
        tokio::time::sleep(self.delay).await;

        if self.failing.load(Ordering::SeqCst) {
            return Err(ContentError::Network {
                endpoint: format!("fake://{}", name),
                status: None,
                message: "connection refused".to_string(),
            });
        }
        Ok(value)
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn fetch_site_settings(&self) -> Result<SiteSettings> {
        self.respond("settings", SiteSettings::default()).await
    }

    async fn fetch_hero(&self) -> Result<HeroContent> {
        self.respond("hero", HeroContent::default()).await
    }

    async fn fetch_services(&self) -> Result<ServiceCatalog> {
        self.respond("services", ServiceCatalog::default()).await
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioCatalog> {
        self.respond("portfolio", PortfolioCatalog::default()).await
    }

    async fn fetch_contact(&self) -> Result<ContactContent> {
        self.respond("contact", ContactContent::default()).await
    }

    async fn submit_submission(&self, payload: &SubmissionPayload) -> Result<SubmissionResult> {
        *self.calls.lock().unwrap().entry("submit").or_insert(0) += 1;
        self.submitted.lock().unwrap().push(payload.clone());

        if let Some(gate) = &self.submit_gate {
            let _permit = gate.acquire().await.expect("submit gate closed");
        }

        match &*self.submit_reply.lock().unwrap() {
            SubmitReply::Respond(result) => Ok(result.clone()),
            SubmitReply::TransportFailure => Err(ContentError::Network {
                endpoint: "fake://submit".to_string(),
                status: None,
                message: "connection reset".to_string(),
            }),
        }
    }
}
