//! Terminal client for a crop prediction backend.
//!
//! Collects six crop measurements and an optional crop image, posts them as a
//! multipart form to the prediction service and shows what comes back.
//!
//!
//!
//! # Flow
//!
//! - Prompt every field in order, `?` shows the tooltip of the current field
//! - Submit: form goes pending, previous result is dropped, the filled form is shown
//!   with its disabled submit control, spinner runs
//! - One POST, no retry, no timeout
//! - Result replaces the spinner, form settles and can be submitted again
//!
//!
//!
//! # Backend contract
//!
//! Request parts:
//! - `crop_type`, `temperature`, `rainfall`, `soil_ph`, `fertilizer_used`, `previous_yield`
//! - `image`, only if one was attached
//!
//! Response, JSON object:
//! - `{"error": "..."}` shown as is
//! - `{"crop": ..., "harvest_days": ..., "maturity_stage": ...}` shown as is
//! - anything unreadable becomes "Error connecting to backend"
//!
//!
//!
//! # Setup
//!
//! Point at a backend other than `http://localhost:5000/predict`.
//! ```sh
//! PREDICT_URL=http://10.0.0.2:5000/predict cargo run --bin form
//! ```
//!
//! Or per run.
//! ```sh
//! cargo run --bin form -- --endpoint http://10.0.0.2:5000/predict
//! ```
//!
//! Verbose logs, written to stderr.
//! ```sh
//! RUST_LOG=form=debug cargo run --bin form
//! ```
use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod fields;
pub mod models;
pub mod prompt;
pub mod remote;
pub mod render;
pub mod state;
pub mod utils;

use config::Config;
use error::FormError;
use prompt::Prompter;
use remote::Predictor;
use render::{TITLE, render_form, render_result, submit_label};
use state::PredictionForm;

pub fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

pub async fn start_form(endpoint: Option<String>) -> Result<(), FormError> {
    init_tracing();

    let config = match endpoint {
        Some(endpoint) => Config::with_endpoint(&endpoint)?,
        None => Config::load()?,
    };

    info!("Predicting against {}", config.endpoint);
    let predictor = Predictor::new(config.endpoint);

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    match run_session(prompter, &predictor).await {
        Err(FormError::InputClosed) => {
            info!("Input closed, leaving");
            Ok(())
        }
        other => other,
    }
}

/// Fill, submit, show, repeat until the user declines another round.
pub async fn run_session<R: BufRead, W: Write>(
    mut prompter: Prompter<R, W>,
    predictor: &Predictor,
) -> Result<(), FormError> {
    let mut form = PredictionForm::new();
    prompter.say(&format!("{TITLE}\n\n"))?;

    loop {
        prompter.fill(&mut form)?;

        let submission = form.begin_submit();
        prompter.say(&format!("\n{}\n", render_form(&form)))?;

        let spinner = pending_spinner(submit_label(&form));
        let result = submission.send(predictor).await;
        spinner.finish_and_clear();
        form.settle(result);

        if let Some(text) = render_result(form.result()) {
            prompter.say(&format!("\n{text}\n"))?;
        }

        if !prompter.confirm("Predict again?")? {
            return Ok(());
        }
    }
}

fn pending_spinner(label: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();

    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(label);
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner
}
