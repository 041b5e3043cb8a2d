use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

/// The only media type the analysis service accepts.
pub const PDF_MIME: &str = "application/pdf";

/// Fallback shown when a failed response carries no usable `error` field.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Analysis failed. Please try again.";

/// Outcome label reported by the analysis service. Anything the service
/// sends that is not exactly "Positive" or "Negative" counts as inconclusive.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Diagnosis {
    Positive,
    Negative,
    #[serde(other)]
    Inconclusive,
}

/// One analysis outcome as returned by `POST /api/analyze`.
///
/// The service omits the parasite fields on negative or inconclusive
/// results, so those default rather than fail deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub diagnosis: Diagnosis,
    #[serde(default)]
    pub parasites_detected: Vec<String>,
    #[serde(default)]
    pub parasite_count: u32,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub images_analyzed: u32,
}

impl AnalysisResult {
    /// Confidence as a percentage with exactly two decimals, e.g. "87.00".
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}", self.confidence * 100.0)
    }

    /// Detected parasite names joined for display.
    pub fn parasite_names(&self) -> String {
        if self.parasites_detected.is_empty() {
            "Unknown parasite type".to_string()
        } else {
            self.parasites_detected.join(", ")
        }
    }

    /// One-sentence summary of the outcome.
    pub fn summary(&self) -> String {
        match self.diagnosis {
            Diagnosis::Positive => format!(
                "Malaria infection detected with {}% confidence.",
                self.confidence_percent()
            ),
            Diagnosis::Negative => {
                "No malaria infection detected in the provided sample.".to_string()
            }
            Diagnosis::Inconclusive => {
                "Analysis was inconclusive. Please try again with a clearer image.".to_string()
            }
        }
    }
}

/// Success envelope of `POST /api/analyze`. The service also sends a
/// `success` flag, which carries no extra information and is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyzeResponse {
    pub results: AnalysisResult,
}

/// Failure envelope of `POST /api/analyze`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}

/// Payload of `GET /api/health`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Extracts the displayable message from a non-2xx response body: the JSON
/// `error` field when it parses, the generic fallback otherwise.
pub fn error_from_body(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| GENERIC_ANALYSIS_FAILURE.to_string())
}

/// Why an upload attempt did not produce a result. Validation variants are
/// raised before any network traffic; `Analysis` wraps everything the
/// request itself can go wrong with.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file selected. Please choose a PDF report to analyze.")]
    NoFileSelected,
    #[error("File type not allowed. Please upload a PDF file.")]
    WrongFileType,
    #[error("{0}")]
    Analysis(String),
}

/// Precondition check run before submitting; `None` means nothing selected.
pub fn validate_selection(media_type: Option<&str>) -> Result<(), UploadError> {
    match media_type {
        None => Err(UploadError::NoFileSelected),
        Some(mt) if mt != PDF_MIME => Err(UploadError::WrongFileType),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AnalysisResult {
        serde_json::from_str::<AnalyzeResponse>(body)
            .expect("response body should deserialize")
            .results
    }

    #[test]
    fn diagnosis_falls_back_to_inconclusive() {
        let d: Diagnosis = serde_json::from_str("\"Positive\"").unwrap();
        assert_eq!(d, Diagnosis::Positive);
        let d: Diagnosis = serde_json::from_str("\"Negative\"").unwrap();
        assert_eq!(d, Diagnosis::Negative);
        let d: Diagnosis = serde_json::from_str("\"Unclear\"").unwrap();
        assert_eq!(d, Diagnosis::Inconclusive);
        let d: Diagnosis = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(d, Diagnosis::Inconclusive);
    }

    #[test]
    fn diagnosis_displays_as_its_label() {
        assert_eq!(Diagnosis::Positive.to_string(), "Positive");
        assert_eq!(Diagnosis::Negative.to_string(), "Negative");
        assert_eq!(Diagnosis::Inconclusive.to_string(), "Inconclusive");
    }

    #[test]
    fn positive_body_round_trips_to_display_strings() {
        let result = parse(
            r#"{"results": {"diagnosis": "Positive", "parasites_detected": ["P. falciparum"],
                "parasite_count": 12, "confidence": 0.87, "images_analyzed": 5}}"#,
        );

        assert_eq!(result.diagnosis, Diagnosis::Positive);
        assert_eq!(result.parasite_names(), "P. falciparum");
        assert_eq!(result.parasite_count, 12);
        assert_eq!(result.confidence_percent(), "87.00");
        assert_eq!(result.images_analyzed, 5);
        assert_eq!(
            result.summary(),
            "Malaria infection detected with 87.00% confidence."
        );
    }

    #[test]
    fn negative_body_defaults_omitted_parasite_fields() {
        let result =
            parse(r#"{"results": {"diagnosis": "Negative", "confidence": 0.95, "images_analyzed": 3}}"#);

        assert_eq!(result.diagnosis, Diagnosis::Negative);
        assert!(result.parasites_detected.is_empty());
        assert_eq!(result.parasite_count, 0);
        assert_eq!(result.confidence_percent(), "95.00");
        assert_eq!(
            result.summary(),
            "No malaria infection detected in the provided sample."
        );
    }

    #[test]
    fn unknown_diagnosis_summarizes_as_inconclusive() {
        let result =
            parse(r#"{"results": {"diagnosis": "Unclear", "confidence": 0.40, "images_analyzed": 2}}"#);

        assert_eq!(result.diagnosis, Diagnosis::Inconclusive);
        assert_eq!(
            result.summary(),
            "Analysis was inconclusive. Please try again with a clearer image."
        );
    }

    #[test]
    fn multiple_parasites_join_with_comma() {
        let result = AnalysisResult {
            diagnosis: Diagnosis::Positive,
            parasites_detected: vec!["P. falciparum".into(), "P. vivax".into()],
            parasite_count: 4,
            confidence: 0.9,
            images_analyzed: 2,
        };
        assert_eq!(result.parasite_names(), "P. falciparum, P. vivax");
    }

    #[test]
    fn empty_parasite_list_uses_fallback_label() {
        let result = AnalysisResult {
            diagnosis: Diagnosis::Positive,
            parasites_detected: vec![],
            parasite_count: 1,
            confidence: 0.75,
            images_analyzed: 1,
        };
        assert_eq!(result.parasite_names(), "Unknown parasite type");
    }

    #[test]
    fn error_body_with_message_is_surfaced() {
        assert_eq!(error_from_body(r#"{"error": "corrupt file"}"#), "corrupt file");
    }

    #[test]
    fn unparsable_error_body_falls_back() {
        assert_eq!(error_from_body("<html>502</html>"), GENERIC_ANALYSIS_FAILURE);
        assert_eq!(error_from_body("{}"), GENERIC_ANALYSIS_FAILURE);
        assert_eq!(error_from_body(r#"{"error": null}"#), GENERIC_ANALYSIS_FAILURE);
    }

    #[test]
    fn validation_rejects_missing_and_non_pdf_files() {
        assert_eq!(validate_selection(None), Err(UploadError::NoFileSelected));
        assert_eq!(
            validate_selection(Some("image/png")),
            Err(UploadError::WrongFileType)
        );
        assert_eq!(validate_selection(Some(PDF_MIME)), Ok(()));
    }

    #[test]
    fn confidence_formatting_keeps_two_decimals() {
        let mut result = AnalysisResult {
            diagnosis: Diagnosis::Positive,
            parasites_detected: vec![],
            parasite_count: 0,
            confidence: 0.8,
            images_analyzed: 1,
        };
        assert_eq!(result.confidence_percent(), "80.00");
        result.confidence = 0.876_54;
        assert_eq!(result.confidence_percent(), "87.65");
        result.confidence = 1.0;
        assert_eq!(result.confidence_percent(), "100.00");
    }
}
