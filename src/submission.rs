use std::collections::BTreeMap;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat snapshot of every named control in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Builds the snapshot from `(name, value)` pairs. Unnamed controls are
    /// skipped; for repeated names the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            if name.trim().is_empty() {
                continue;
            }
            fields.insert(name, value.into());
        }
        Self(fields)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Remote(String),
    LocalOnly,
}

impl Delivery {
    pub fn for_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(url) if !url.is_empty() => Delivery::Remote(url.to_string()),
            _ => Delivery::LocalOnly,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

/// UI reactions to a finished attempt, applied in order by the form component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    ClearFields,
    ShowConfirmation,
    NotifyFailure(&'static str),
}

/// One submit, from interception to outcome. Nothing is kept once it resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionAttempt {
    pub fields: FormFields,
    pub status: SubmissionStatus,
    pub delivery: Delivery,
}

impl SubmissionAttempt {
    pub fn begin(fields: FormFields, endpoint: Option<&str>) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Pending,
            delivery: Delivery::for_endpoint(endpoint),
        }
    }

    /// Like [`SubmissionAttempt::begin`], but refuses while an earlier
    /// attempt is still waiting on the network.
    pub fn try_begin(in_flight: bool, fields: FormFields, endpoint: Option<&str>) -> Option<Self> {
        if in_flight {
            log::debug!("Submission already in flight, ignoring submit");
            return None;
        }
        Some(Self::begin(fields, endpoint))
    }

    /// Settles the attempt. The local-only path is resolved with `Ok(())`
    /// without any I/O.
    pub fn finish(&mut self, result: Result<(), SubmitError>, failure_notice: &'static str) -> Vec<FormEffect> {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                vec![FormEffect::ShowConfirmation, FormEffect::ClearFields]
            }
            Err(e) => {
                log::warn!("Form submission failed: {}", e);
                self.status = SubmissionStatus::Failure;
                vec![FormEffect::NotifyFailure(failure_notice)]
            }
        }
    }
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    message: String,
}

/// Error body the hosted endpoint may attach to a non-2xx response.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// POSTs the fields as JSON and asks for a JSON response. Any 2xx is success.
pub async fn post_fields(endpoint: &str, fields: &FormFields) -> Result<(), SubmitError> {
    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(fields)
        .map_err(|e| SubmitError::Build(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    if response.ok() {
        return classify(status, None);
    }
    let body = response.json::<ErrorBody>().await.ok();
    classify(status, body)
}

/// Maps a response status (and the error body, if one parsed) to the outcome.
/// Any 2xx is success.
pub fn classify(status: u16, body: Option<ErrorBody>) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        log::info!("Form accepted by endpoint ({})", status);
        return Ok(());
    }
    let message = body.and_then(|b| b.message());
    if let Some(message) = &message {
        log::warn!("Endpoint error body: {}", message);
    }
    Err(SubmitError::Rejected { status, message })
}
