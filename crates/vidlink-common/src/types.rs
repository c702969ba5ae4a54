use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Body of `POST /api/extract`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub url: String,
}

impl ExtractionRequest {
    /// Builds a request from raw form input. Returns `None` when the trimmed
    /// input is empty.
    pub fn from_input(raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
        })
    }
}

// --- Wire types ---

/// Success body exactly as the service sends it. Nothing here is trusted.
#[derive(Clone, Debug, Deserialize)]
pub struct RawExtractionResult {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub extractor: Option<String>,
    pub formats: Option<Vec<RawFormat>>,
    pub original_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawFormat {
    pub format_id: Option<String>,
    pub resolution: Option<String>,
    pub ext: Option<String>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub filesize: Option<f64>,
    pub url: Option<String>,
}

/// Failure body. FastAPI validation errors carry a list in `detail`; those
/// fail to parse here and are treated like an absent detail.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

// --- Validated types ---

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionResult {
    pub title: String,
    pub thumbnail: Option<String>,
    /// Whole seconds, never zero.
    pub duration: Option<u64>,
    pub extractor: String,
    pub formats: Vec<Format>,
    pub original_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    pub format_id: Option<String>,
    pub resolution: String,
    pub ext: String,
    pub vcodec: String,
    pub acodec: String,
    /// Bytes, never zero.
    pub filesize: Option<u64>,
    pub url: String,
}

impl TryFrom<RawExtractionResult> for ExtractionResult {
    type Error = ExtractError;

    fn try_from(raw: RawExtractionResult) -> Result<Self, Self::Error> {
        let title = raw
            .title
            .ok_or_else(|| ExtractError::Malformed("missing title".into()))?;
        let extractor = raw
            .extractor
            .ok_or_else(|| ExtractError::Malformed("missing extractor".into()))?;
        let duration = whole_units(raw.duration, "duration")?;
        let formats = raw
            .formats
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, f)| Format::from_raw(index, f))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title,
            thumbnail: raw.thumbnail.filter(|t| !t.is_empty()),
            duration,
            extractor,
            formats,
            original_url: raw.original_url,
        })
    }
}

impl Format {
    fn from_raw(index: usize, raw: RawFormat) -> Result<Self, ExtractError> {
        let url = raw
            .url
            .ok_or_else(|| ExtractError::Malformed(format!("format {} has no url", index)))?;
        Ok(Self {
            format_id: raw.format_id,
            resolution: raw.resolution.unwrap_or_default(),
            ext: raw.ext.unwrap_or_default(),
            vcodec: raw.vcodec.unwrap_or_default(),
            acodec: raw.acodec.unwrap_or_default(),
            filesize: whole_units(raw.filesize, "filesize")?,
            url,
        })
    }
}

/// Truncates a JSON number to whole units. Zero becomes `None` so callers
/// can treat it like an absent value.
fn whole_units(value: Option<f64>, field: &str) -> Result<Option<u64>, ExtractError> {
    match value {
        None => Ok(None),
        Some(v) if !v.is_finite() || v < 0.0 => Err(ExtractError::Malformed(format!(
            "{} must be a non-negative number, got {}",
            field, v
        ))),
        Some(v) => {
            let whole = v.trunc() as u64;
            Ok((whole > 0).then_some(whole))
        }
    }
}

/// Classifies a finished HTTP exchange with the extraction endpoint.
///
/// Non-2xx statuses become `ExtractError::Service`, using the body's
/// `detail` when it can be read. A 2xx body is parsed and validated into an
/// `ExtractionResult`, or rejected as `ExtractError::Malformed`.
pub fn parse_extraction_response(status: u16, body: &str) -> Result<ExtractionResult, ExtractError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.detail)
            .filter(|d| !d.is_empty());
        return Err(ExtractError::Service { status, detail });
    }

    let raw: RawExtractionResult =
        serde_json::from_str(body).map_err(|e| ExtractError::Malformed(e.to_string()))?;
    ExtractionResult::try_from(raw)
}
