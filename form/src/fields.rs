//! # Fields
//!
//! The six scalar inputs of the prediction form plus the optional crop image.
//!
//! ## Wire names
//!
//! Field names double as multipart part names, so they must match what the
//! prediction backend reads:
//! - `crop_type`: free text
//! - `temperature`, `rainfall`, `soil_ph`, `fertilizer_used`, `previous_yield`: numeric strings
//! - `image`: binary part, optional
//!
//! Values are kept as the user typed them. Numeric shape is checked by the
//! input layer only, never here.
use std::{fmt, fs, path::Path, str::FromStr};

use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    CropType,
    Temperature,
    Rainfall,
    SoilPh,
    FertilizerUsed,
    PreviousYield,
}

impl FieldName {
    pub const COUNT: usize = 6;

    pub const ALL: [FieldName; Self::COUNT] = [
        FieldName::CropType,
        FieldName::Temperature,
        FieldName::Rainfall,
        FieldName::SoilPh,
        FieldName::FertilizerUsed,
        FieldName::PreviousYield,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::CropType => "crop_type",
            FieldName::Temperature => "temperature",
            FieldName::Rainfall => "rainfall",
            FieldName::SoilPh => "soil_ph",
            FieldName::FertilizerUsed => "fertilizer_used",
            FieldName::PreviousYield => "previous_yield",
        }
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Number { step: f64 },
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub placeholder: Option<&'static str>,
    pub kind: FieldKind,
    pub required: bool,
}

/// Indexed by `FieldName as usize`.
pub static FIELDS: [FieldSpec; FieldName::COUNT] = [
    FieldSpec {
        name: FieldName::CropType,
        label: "Crop Type",
        tooltip: "Enter the type of crop",
        placeholder: Some("Enter crop type (e.g., wheat, rice)"),
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: FieldName::Temperature,
        label: "Temperature (°C)",
        tooltip: "Average temperature in Celsius",
        placeholder: None,
        kind: FieldKind::Number { step: 1.0 },
        required: true,
    },
    FieldSpec {
        name: FieldName::Rainfall,
        label: "Rainfall (mm)",
        tooltip: "Average rainfall in mm",
        placeholder: None,
        kind: FieldKind::Number { step: 1.0 },
        required: true,
    },
    FieldSpec {
        name: FieldName::SoilPh,
        label: "Soil pH",
        tooltip: "Soil pH value (0-14)",
        placeholder: None,
        kind: FieldKind::Number { step: 0.1 },
        required: true,
    },
    FieldSpec {
        name: FieldName::FertilizerUsed,
        label: "Fertilizer Used (kg)",
        tooltip: "Amount of fertilizer used per hectare",
        placeholder: None,
        kind: FieldKind::Number { step: 1.0 },
        required: true,
    },
    FieldSpec {
        name: FieldName::PreviousYield,
        label: "Previous Yield (tons/ha)",
        tooltip: "Previous yield per hectare",
        placeholder: None,
        kind: FieldKind::Number { step: 1.0 },
        required: true,
    },
];

pub const IMAGE_PART: &str = "image";
pub const IMAGE_LABEL: &str = "Upload Crop Image";
pub const IMAGE_TOOLTIP: &str = "Upload an image of your crop";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: [String; FieldName::COUNT],
}

impl FormFields {
    pub fn get(&self, name: FieldName) -> &str {
        &self.values[name as usize]
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.values[name as usize] = value.into();
    }

    /// Wire order, same as [`FieldName::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .map(|name| (name, self.get(name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_of(&file_name).unwrap_or("application/octet-stream");

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, FormError> {
        let bytes = fs::read(path).map_err(|source| FormError::Image {
            path: path.display().to_string(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(file_name, bytes))
    }
}

/// `None` for anything outside `image/*`.
pub fn content_type_of(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()?
        .to_string_lossy()
        .to_ascii_lowercase();

    let content_type = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => return None,
    };

    Some(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_indexing() {
        for name in FieldName::ALL {
            assert_eq!(name.spec().name, name);
        }
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!("soil_ph".parse::<FieldName>().unwrap(), FieldName::SoilPh);
        assert_eq!(
            "previous_yield".parse::<FieldName>().unwrap(),
            FieldName::PreviousYield
        );
        assert!(matches!(
            "image".parse::<FieldName>(),
            Err(FormError::UnknownField(name)) if name == "image"
        ));
        assert!("Soil_PH".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_set_leaves_other_fields() {
        let mut fields = FormFields::default();
        fields.set(FieldName::Rainfall, "120");
        fields.set(FieldName::CropType, "rice");
        fields.set(FieldName::Rainfall, "130");

        assert_eq!(fields.get(FieldName::Rainfall), "130");
        assert_eq!(fields.get(FieldName::CropType), "rice");
        assert_eq!(fields.get(FieldName::Temperature), "");
    }

    #[test]
    fn test_iter_order() {
        let names: Vec<&str> = FormFields::default()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();

        assert_eq!(
            names,
            [
                "crop_type",
                "temperature",
                "rainfall",
                "soil_ph",
                "fertilizer_used",
                "previous_yield"
            ]
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_of("leaf.PNG"), Some("image/png"));
        assert_eq!(content_type_of("field.jpeg"), Some("image/jpeg"));
        assert_eq!(content_type_of("notes.txt"), None);
        assert_eq!(content_type_of("no_extension"), None);

        let attachment = ImageAttachment::new("scan.dat", vec![1, 2]);
        assert_eq!(attachment.content_type, "application/octet-stream");
    }
}
