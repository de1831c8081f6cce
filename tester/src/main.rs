use std::{env, path::Path};

use form::{
    config::Config,
    fields::{FieldName, ImageAttachment},
    init_tracing,
    remote::Predictor,
    render::render_result,
    state::PredictionForm,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load()?;
    let predictor = Predictor::new(config.endpoint);

    let mut form = PredictionForm::new();
    form.update_field(FieldName::CropType, "wheat");
    form.update_field(FieldName::Temperature, "25");
    form.update_field(FieldName::Rainfall, "100");
    form.update_field(FieldName::SoilPh, "6.5");
    form.update_field(FieldName::FertilizerUsed, "50");
    form.update_field(FieldName::PreviousYield, "2");

    if let Some(path) = env::args().nth(1) {
        form.update_image(Some(ImageAttachment::from_path(Path::new(&path))?));
    }

    println!("POST {}", predictor.endpoint());
    for (name, value) in form.fields().iter() {
        println!("  {name} = {value}");
    }
    if let Some(image) = form.image() {
        println!(
            "  image = {} ({}, {} bytes)",
            image.file_name,
            image.content_type,
            image.bytes.len()
        );
    }

    form.submit(&predictor).await;

    if let Some(text) = render_result(form.result()) {
        println!("\n{text}");
    }

    Ok(())
}
