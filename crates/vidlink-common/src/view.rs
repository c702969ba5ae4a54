//! Display model for the result panel.
//!
//! A `ResultView` is derived from a validated `ExtractionResult` in one pass
//! and then rendered as-is; nothing in it is patched afterwards.

use crate::badge::SourceBadge;
use crate::formatting::{format_bytes, format_duration};
use crate::messages;
use crate::types::{ExtractionResult, Format};

/// Codec value meaning "this stream has no such track".
const NO_TRACK: &str = "none";

/// Download links open in a new browsing context without an opener.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackPresence {
    pub video: bool,
    pub audio: bool,
}

impl TrackPresence {
    pub fn from_codecs(vcodec: &str, acodec: &str) -> Self {
        Self {
            video: vcodec != NO_TRACK,
            audio: acodec != NO_TRACK,
        }
    }

    pub fn is_audio_only(&self) -> bool {
        self.audio && !self.video
    }

    pub fn is_video_only(&self) -> bool {
        self.video && !self.audio
    }

    pub fn label(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.video {
            parts.push(messages::HAS_VIDEO);
        }
        if self.audio {
            parts.push(messages::HAS_AUDIO);
        }
        parts.join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatCard {
    pub format_id: Option<String>,
    pub resolution: String,
    pub ext: String,
    pub tracks: TrackPresence,
    pub size_label: String,
    pub download_url: String,
}

impl FormatCard {
    pub fn from_format(format: &Format) -> Self {
        Self {
            format_id: format.format_id.clone(),
            resolution: format.resolution.clone(),
            ext: format.ext.clone(),
            tracks: TrackPresence::from_codecs(&format.vcodec, &format.acodec),
            size_label: size_label(format.filesize),
            download_url: format.url.clone(),
        }
    }
}

/// Size text for a card: formatted bytes, or a placeholder while the
/// service has not reported one.
pub fn size_label(filesize: Option<u64>) -> String {
    match filesize {
        Some(bytes) => format_bytes(bytes),
        None => messages::SIZE_RESOLVING.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatList {
    /// Rendered as a single explanatory card with no links.
    Empty,
    Cards(Vec<FormatCard>),
}

impl FormatList {
    pub fn cards(&self) -> &[FormatCard] {
        match self {
            FormatList::Empty => &[],
            FormatList::Cards(cards) => cards,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub thumbnail_src: String,
    pub title: String,
    /// `None` hides the duration badge.
    pub duration_label: Option<String>,
    pub badge: SourceBadge,
    pub formats: FormatList,
}

impl ResultView {
    pub fn from_result(result: &ExtractionResult) -> Self {
        let formats = if result.formats.is_empty() {
            FormatList::Empty
        } else {
            FormatList::Cards(result.formats.iter().map(FormatCard::from_format).collect())
        };

        Self {
            thumbnail_src: result
                .thumbnail
                .clone()
                .unwrap_or_else(|| messages::PLACEHOLDER_THUMBNAIL.to_string()),
            title: result.title.clone(),
            duration_label: result
                .duration
                .map(format_duration)
                .filter(|d| !d.is_empty()),
            badge: SourceBadge::classify(&result.extractor),
            formats,
        }
    }
}
