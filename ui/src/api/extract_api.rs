use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use vidlink_common::controller::ExtractionClient;
use vidlink_common::error::ExtractError;
use vidlink_common::types::{parse_extraction_response, ExtractionRequest, ExtractionResult};

use super::types::ApiConfig;

/// `ExtractionClient` over the browser's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct FetchClient {
    config: ApiConfig,
}

impl FetchClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ExtractionClient for FetchClient {
    async fn extract(&self, request: &ExtractionRequest) -> Result<ExtractionResult, ExtractError> {
        let body =
            serde_json::to_string(request).map_err(|e| ExtractError::Network(e.to_string()))?;
        let (status, text) = post_json(&self.config.extract_url(), &body)
            .await
            .map_err(network_error)?;
        tracing::debug!("Extraction endpoint answered HTTP {}", status);
        parse_extraction_response(status, &text)
    }

    async fn warm_up(&self) -> Result<(), ExtractError> {
        let status = get(&self.config.warmup_url())
            .await
            .map_err(network_error)?;
        tracing::debug!("Warm-up probe answered HTTP {}", status);
        Ok(())
    }
}

async fn post_json(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let resp = send(&request).await?;
    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or(JsValue::from_str("response not string"))?;

    Ok((resp.status(), text))
}

async fn get(url: &str) -> Result<u16, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let resp = send(&request).await?;
    Ok(resp.status())
}

async fn send(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or(JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    resp_value.dyn_into()
}

fn network_error(e: JsValue) -> ExtractError {
    let reason = e
        .as_string()
        .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
        .unwrap_or_else(|| format!("{:?}", e));
    ExtractError::Network(reason)
}
