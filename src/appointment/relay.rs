use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use super::form::FormInput;
use super::message::SubmissionOutcome;
use crate::config::FormConfig;

/// Body returned by the form relay for both accepted and rejected requests.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn into_outcome(self) -> SubmissionOutcome {
        if self.success {
            SubmissionOutcome::success()
        } else {
            SubmissionOutcome::server_error(self.message.as_deref())
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Where appointment requests go. One call is one POST, no retries.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn send(&self, input: &FormInput) -> Result<RelayResponse, TransportError>;
}

pub struct Web3FormsRelay {
    config: FormConfig,
}

impl Web3FormsRelay {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    fn form_data(&self, input: &FormInput) -> Result<FormData, TransportError> {
        let data = FormData::new().map_err(|e| TransportError::Request(format!("{:?}", e)))?;
        for (key, value) in input.multipart_fields(&self.config) {
            data.append_with_str(key, &value)
                .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
        }
        Ok(data)
    }
}

impl FormRelay for Web3FormsRelay {
    async fn send(&self, input: &FormInput) -> Result<RelayResponse, TransportError> {
        let body = self.form_data(input)?;

        let response = Request::post(&self.config.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        log::debug!("Relay answered with status {}", response.status());

        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }
}
