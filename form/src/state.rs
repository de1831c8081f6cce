use tracing::info;

use crate::{
    fields::{FieldName, FormFields, ImageAttachment},
    models::PredictionResult,
    remote::{Predictor, Submission},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Settled,
}

#[derive(Debug, Default)]
pub struct PredictionForm {
    fields: FormFields,
    image: Option<ImageAttachment>,
    status: Status,
    result: Option<PredictionResult>,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.status != Status::Pending
    }

    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    pub fn update_image(&mut self, image: Option<ImageAttachment>) {
        self.image = image;
    }

    /// Enters the pending state and snapshots what will be sent.
    pub fn begin_submit(&mut self) -> Submission {
        self.status = Status::Pending;
        self.result = None;

        info!("Submitting prediction request");

        Submission {
            fields: self.fields.clone(),
            image: self.image.clone(),
        }
    }

    pub fn settle(&mut self, result: Option<PredictionResult>) {
        self.result = result;
        self.status = Status::Settled;
    }

    pub async fn submit(&mut self, predictor: &Predictor) -> Option<&PredictionResult> {
        let submission = self.begin_submit();
        let result = submission.send(predictor).await;
        self.settle(result);

        self.result()
    }
}
