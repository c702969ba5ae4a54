pub mod extract_api;
pub mod types;

use std::sync::atomic::{AtomicBool, Ordering};

use extract_api::FetchClient;
use types::ApiConfig;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Client used for every request this page makes.
pub fn client() -> FetchClient {
    FetchClient::new(ApiConfig::default())
}

/// Start-up side effects. Runs once per page load.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    // Wake the service up early; the page never waits on this.
    wasm_bindgen_futures::spawn_local(async {
        vidlink_common::controller::warm_up(&client()).await;
    });
}
