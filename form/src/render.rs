use std::fmt::Write;

use crate::{
    fields::{FIELDS, IMAGE_LABEL},
    models::{PredictionResult, display_value},
    state::PredictionForm,
};

pub const TITLE: &str = "🌱 Crop Prediction System";
pub const RESULT_HEADING: &str = "Prediction Result:";

pub fn submit_label(form: &PredictionForm) -> &'static str {
    if form.submit_enabled() {
        "Predict"
    } else {
        "Predicting..."
    }
}

/// `None` when there is nothing to show.
pub fn render_result(result: Option<&PredictionResult>) -> Option<String> {
    let result = result?;
    let mut out = format!("{RESULT_HEADING}\n");

    match result {
        PredictionResult::Failed { error } => {
            let _ = writeln!(out, "{error}");
        }
        PredictionResult::Predicted(prediction) => {
            let _ = writeln!(out, "Crop: {}", display_value(&prediction.crop));
            let _ = writeln!(
                out,
                "Harvest Days: {}",
                display_value(&prediction.harvest_days)
            );
            let _ = writeln!(
                out,
                "Maturity Stage: {}",
                display_value(&prediction.maturity_stage)
            );
        }
    }

    Some(out)
}

pub fn render_form(form: &PredictionForm) -> String {
    let mut out = format!("{TITLE}\n\n");

    for spec in &FIELDS {
        let _ = writeln!(out, "{}: {}", spec.label, form.fields().get(spec.name));
    }

    let image = form.image().map_or("", |image| image.file_name.as_str());
    let _ = writeln!(out, "{IMAGE_LABEL}: {image}");

    let disabled = if form.submit_enabled() { "" } else { " (disabled)" };
    let _ = writeln!(out, "\n[ {} ]{disabled}", submit_label(form));

    if let Some(result) = render_result(form.result()) {
        let _ = write!(out, "\n{result}");
    }

    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{fields::FieldName, models::Prediction};

    #[test]
    fn test_nothing_without_result() {
        assert_eq!(render_result(None), None);
    }

    #[test]
    fn test_prediction_verbatim() {
        let result = PredictionResult::Predicted(Prediction {
            crop: json!("Wheat"),
            harvest_days: json!(90),
            maturity_stage: json!("Flowering"),
        });

        let text = render_result(Some(&result)).unwrap();

        assert_eq!(
            text,
            "Prediction Result:\nCrop: Wheat\nHarvest Days: 90\nMaturity Stage: Flowering\n"
        );
    }

    #[test]
    fn test_error_only() {
        let result = PredictionResult::Failed {
            error: "Invalid input".to_string(),
        };

        let text = render_result(Some(&result)).unwrap();

        assert_eq!(text, "Prediction Result:\nInvalid input\n");
        assert!(!text.contains("Crop:"));
        assert!(!text.contains("Harvest Days:"));
    }

    #[test]
    fn test_form_follows_status() {
        let mut form = PredictionForm::new();
        form.update_field(FieldName::CropType, "maize");

        let idle = render_form(&form);
        assert!(idle.starts_with(TITLE));
        assert!(idle.contains("Crop Type: maize"));
        assert!(idle.contains("[ Predict ]\n"));
        assert!(!idle.contains(RESULT_HEADING));

        let _submission = form.begin_submit();
        let pending = render_form(&form);
        assert!(pending.contains("[ Predicting... ] (disabled)"));

        form.settle(Some(PredictionResult::connection_error()));
        let settled = render_form(&form);
        assert!(settled.contains("[ Predict ]\n"));
        assert!(settled.ends_with("Prediction Result:\nError connecting to backend\n"));
    }
}
