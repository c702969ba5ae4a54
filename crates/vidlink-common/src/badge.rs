/// Video sites that get a branded source badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    Facebook,
}

impl Provider {
    /// Matched in order against the lowercased extractor name.
    pub const ALL: [Provider; 2] = [Provider::YouTube, Provider::Facebook];

    fn needle(self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Facebook => "facebook",
        }
    }
}

/// The badge shown next to the title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceBadge {
    Known(Provider),
    /// Unrecognized extractor, labelled with its raw name.
    Generic(String),
}

impl SourceBadge {
    pub fn classify(extractor: &str) -> Self {
        let lower = extractor.to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| lower.contains(p.needle()))
            .map(SourceBadge::Known)
            .unwrap_or_else(|| SourceBadge::Generic(extractor.to_string()))
    }

    /// Full class list. Always replaces the previous one.
    pub fn css_class(&self) -> &'static str {
        match self {
            SourceBadge::Known(Provider::YouTube) => "source-badge youtube",
            SourceBadge::Known(Provider::Facebook) => "source-badge facebook",
            SourceBadge::Generic(_) => "source-badge",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SourceBadge::Known(Provider::YouTube) => "fa-brands fa-youtube",
            SourceBadge::Known(Provider::Facebook) => "fa-brands fa-facebook",
            SourceBadge::Generic(_) => "fa-solid fa-video",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SourceBadge::Known(Provider::YouTube) => "YouTube",
            SourceBadge::Known(Provider::Facebook) => "Facebook",
            SourceBadge::Generic(raw) => raw,
        }
    }
}
