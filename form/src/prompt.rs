//! # Terminal input
//!
//! Stands in for the browser inputs of the form.
//!
//! ## Conventions
//!
//! - `?` on any prompt shows the tooltip for that field
//! - Empty line keeps the current value
//! - Image prompt: empty keeps, `-` clears, anything else is a path
//!
//! ## Constraints
//!
//! Only what a native input would enforce by itself:
//! - required fields must be non-empty
//! - number fields must parse and sit on their step
//! - the image must be a readable file. `image/*` only sets its content type,
//!   anything else goes out as `application/octet-stream`
use std::{
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    error::FormError,
    fields::{
        FIELDS, FieldKind, FieldSpec, IMAGE_LABEL, IMAGE_TOOLTIP, ImageAttachment,
    },
    state::PredictionForm,
    utils::{check_number, check_required},
};

const TOOLTIP_KEY: &str = "?";
const CLEAR_KEY: &str = "-";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), FormError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        Ok(())
    }

    /// Walks every input once, in form order.
    pub fn fill(&mut self, form: &mut PredictionForm) -> Result<(), FormError> {
        for spec in &FIELDS {
            let value = self.ask_field(spec, form.fields().get(spec.name))?;
            form.update_field(spec.name, value);
        }

        let image = self.ask_image(form.image())?;
        form.update_image(image);

        Ok(())
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool, FormError> {
        write!(self.output, "{question} [y/N]: ")?;
        self.output.flush()?;

        let answer = self.read_line()?;

        Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }

    fn ask_field(&mut self, spec: &FieldSpec, current: &str) -> Result<String, FormError> {
        loop {
            write!(self.output, "{}", spec.label)?;
            if !current.is_empty() {
                write!(self.output, " [{current}]")?;
            } else if let Some(placeholder) = spec.placeholder {
                write!(self.output, " ({placeholder})")?;
            }
            write!(self.output, ": ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            if line.trim() == TOOLTIP_KEY {
                writeln!(self.output, "  ℹ {}", spec.tooltip)?;
                continue;
            }

            let value = match spec.kind {
                FieldKind::Text if !line.is_empty() => line,
                FieldKind::Number { .. } if !line.trim().is_empty() => line.trim().to_string(),
                _ => current.to_string(),
            };

            let checked = match spec.kind {
                _ if spec.required && value.is_empty() => check_required(&value),
                FieldKind::Number { step } if !value.is_empty() => check_number(&value, step),
                _ => Ok(()),
            };

            match checked {
                Ok(()) => return Ok(value),
                Err(violation) => writeln!(self.output, "  {}", violation.message())?,
            }
        }
    }

    fn ask_image(
        &mut self,
        current: Option<&ImageAttachment>,
    ) -> Result<Option<ImageAttachment>, FormError> {
        loop {
            match current {
                Some(image) => write!(self.output, "{IMAGE_LABEL} [{}]: ", image.file_name)?,
                None => write!(self.output, "{IMAGE_LABEL} (optional, path): ")?,
            }
            self.output.flush()?;

            let line = self.read_line()?;
            let line = line.trim();

            match line {
                TOOLTIP_KEY => {
                    writeln!(self.output, "  ℹ {IMAGE_TOOLTIP}")?;
                    continue;
                }
                "" => return Ok(current.cloned()),
                CLEAR_KEY => return Ok(None),
                _ => {}
            }

            match ImageAttachment::from_path(Path::new(line)) {
                Ok(image) => return Ok(Some(image)),
                Err(e) => writeln!(self.output, "  {e}")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<String, FormError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(FormError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
