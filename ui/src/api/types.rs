/// Where the extraction service lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Empty for same-origin, which is how the service serves this page.
    pub base_url: String,
    pub extract_path: String,
    pub warmup_path: String,
}

impl ApiConfig {
    pub fn extract_url(&self) -> String {
        format!("{}{}", self.base_url, self.extract_path)
    }

    pub fn warmup_url(&self) -> String {
        format!("{}{}", self.base_url, self.warmup_path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            extract_path: "/api/extract".into(),
            warmup_path: "/docs".into(),
        }
    }
}
