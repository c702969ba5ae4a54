#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::{json, Value};
use vidlink_common::controller::ExtractionClient;
use vidlink_common::error::ExtractError;
use vidlink_common::types::{parse_extraction_response, ExtractionRequest, ExtractionResult};

pub const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// One entry of the `formats` array.
pub fn format_json(
    resolution: &str,
    ext: &str,
    vcodec: &str,
    acodec: &str,
    filesize: Option<u64>,
    url: &str,
) -> Value {
    json!({
        "format_id": format!("{}-{}", resolution, ext),
        "resolution": resolution,
        "ext": ext,
        "vcodec": vcodec,
        "acodec": acodec,
        "filesize": filesize,
        "url": url,
    })
}

/// A success body shaped like the service's `ExtractResponse`.
pub fn result_json(title: &str, extractor: &str, formats: Vec<Value>) -> Value {
    json!({
        "title": title,
        "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
        "duration": 213,
        "formats": formats,
        "original_url": WATCH_URL,
        "extractor": extractor,
    })
}

/// Two playable formats, best first.
pub fn two_formats() -> Vec<Value> {
    vec![
        format_json(
            "1280x720",
            "mp4",
            "avc1.64001F",
            "mp4a.40.2",
            Some(15_728_640),
            "https://cdn.example/720.mp4",
        ),
        format_json(
            "640x360",
            "mp4",
            "avc1.42001E",
            "mp4a.40.2",
            None,
            "https://cdn.example/360.mp4",
        ),
    ]
}

/// What the fake transport answers with.
#[derive(Clone, Debug)]
pub enum Reply {
    Http(u16, String),
    Offline(String),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Http(200, body.to_string())
    }
}

/// Fake `ExtractionClient` that replays scripted HTTP exchanges through the
/// real response classifier.
pub struct ScriptedClient {
    replies: RefCell<VecDeque<Reply>>,
    pub requests: RefCell<Vec<ExtractionRequest>>,
    warm_up_ok: bool,
    pub warm_ups: Cell<u32>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
            warm_up_ok: true,
            warm_ups: Cell::new(0),
        }
    }

    pub fn offline_warm_up(mut self) -> Self {
        self.warm_up_ok = false;
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ExtractionClient for ScriptedClient {
    async fn extract(&self, request: &ExtractionRequest) -> Result<ExtractionResult, ExtractError> {
        self.requests.borrow_mut().push(request.clone());
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Http(status, body)) => parse_extraction_response(status, &body),
            Some(Reply::Offline(reason)) => Err(ExtractError::Network(reason)),
            None => panic!("unexpected extraction request for {}", request.url),
        }
    }

    async fn warm_up(&self) -> Result<(), ExtractError> {
        self.warm_ups.set(self.warm_ups.get() + 1);
        if self.warm_up_ok {
            Ok(())
        } else {
            Err(ExtractError::Network("connection refused".into()))
        }
    }
}
