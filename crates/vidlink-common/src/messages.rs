//! User-visible strings (zh-TW).

pub const SUBMIT_IDLE: &str = "解析影片";
pub const SUBMIT_WORKING: &str = "解析中...";

pub const UNKNOWN_SIZE: &str = "未知大小";
pub const SIZE_RESOLVING: &str = "解析中...";

pub const EXTRACTION_FAILED: &str = "影片解析失敗，請確認網址是否正確且公開。";
pub const NETWORK_FAILED: &str = "無法連線到解析服務，請稍後再試。";
pub const MALFORMED_RESPONSE: &str = "解析服務回傳了無法辨識的資料，請稍後再試。";

pub const NO_FORMATS: &str = "找不到可下載的檔案格式。可能該影片受版權保護或需要登入。";

pub const HAS_VIDEO: &str = "附影片";
pub const HAS_AUDIO: &str = "附聲音";
pub const DOWNLOAD: &str = "直接下載";

pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/320x180?text=No+Thumbnail";
