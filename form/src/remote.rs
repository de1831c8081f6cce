//! # Prediction backend
//!
//! One POST per submission, multipart body, JSON back.
//!
//! ## Payload
//!
//! - Six text parts, one per field, always present even when empty
//! - `image` binary part with file name and content type, only when attached
//!
//! ## Failure handling
//!
//! - The HTTP status is not looked at. A 400 carrying `{"error": ...}` is a normal result
//! - Anything that prevents reading a JSON object out of the response collapses into
//!   the generic connection error
//! - No retry, no timeout. A hung backend keeps the submission pending
use reqwest::{
    Client, Url,
    multipart::{Form, Part},
};
use tracing::{debug, info, warn};

use crate::{
    error::FormError,
    fields::{FormFields, IMAGE_PART, ImageAttachment},
    models::PredictionResult,
};

pub struct Predictor {
    client: Client,
    endpoint: Url,
}

impl Predictor {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Snapshot of the form taken when submission starts.
#[derive(Debug, Clone)]
pub struct Submission {
    pub fields: FormFields,
    pub image: Option<ImageAttachment>,
}

impl Submission {
    pub fn to_multipart(&self) -> Result<Form, FormError> {
        let mut form = Form::new();

        for (name, value) in self.fields.iter() {
            form = form.text(name.as_str(), value.to_string());
        }

        if let Some(image) = &self.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(image.content_type)?;

            form = form.part(IMAGE_PART, part);
        }

        Ok(form)
    }

    /// Never fails: transport and decode problems become
    /// [`PredictionResult::connection_error`]. `None` only for a falsy JSON body.
    pub async fn send(&self, predictor: &Predictor) -> Option<PredictionResult> {
        match self.post(predictor).await {
            Ok(result) => {
                info!("Prediction received: {:?}", result);
                result
            }
            Err(e) => {
                warn!("Prediction request to {} failed: {e}", predictor.endpoint);
                Some(PredictionResult::connection_error())
            }
        }
    }

    async fn post(&self, predictor: &Predictor) -> Result<Option<PredictionResult>, FormError> {
        let form = self.to_multipart()?;

        debug!(
            "POST {} (image: {})",
            predictor.endpoint,
            self.image.as_ref().map_or("none", |image| image.file_name.as_str())
        );

        let response = predictor
            .client
            .post(predictor.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        debug!("Backend answered {}", response.status());

        let body = response.bytes().await?;

        PredictionResult::from_slice(&body)
    }
}
