//! Submission lifecycle: validate input, enter loading, call the service,
//! show a result or an error, and always leave loading.

use crate::error::ExtractError;
use crate::state::StateHandle;
use crate::types::{ExtractionRequest, ExtractionResult};

/// The extraction backend as seen from the page.
#[allow(async_fn_in_trait)]
pub trait ExtractionClient {
    /// `POST /api/extract`, classified into a result or an error.
    async fn extract(&self, request: &ExtractionRequest) -> Result<ExtractionResult, ExtractError>;

    /// Best-effort readiness probe.
    async fn warm_up(&self) -> Result<(), ExtractError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, or a request already in flight. Nothing changed.
    Ignored,
    Rendered,
    Failed(ExtractError),
}

/// Leaves loading when dropped, whichever way `submit` exits.
struct LoadingGuard<'a, S: StateHandle> {
    state: &'a S,
}

impl<S: StateHandle> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.update(|page| page.loading.exit());
    }
}

/// Runs one submission to completion.
///
/// Exactly one of the result panel or the error banner is shown for every
/// request that is actually issued.
pub async fn submit<S, C>(state: &S, client: &C, raw_input: &str) -> SubmitOutcome
where
    S: StateHandle,
    C: ExtractionClient,
{
    let Some(request) = ExtractionRequest::from_input(raw_input) else {
        return SubmitOutcome::Ignored;
    };

    let started = state.update(|page| {
        if page.loading.is_loading() {
            return false;
        }
        page.begin_submission();
        true
    });
    if !started {
        tracing::debug!("Submission ignored, a request is already in flight");
        return SubmitOutcome::Ignored;
    }
    let _guard = LoadingGuard { state };

    tracing::info!("Requesting extraction for {}", request.url);
    match client.extract(&request).await {
        Ok(result) => {
            tracing::info!(
                "Extracted {:?} via {} ({} formats)",
                result.title,
                result.extractor,
                result.formats.len()
            );
            state.update(|page| page.show_result(&result));
            SubmitOutcome::Rendered
        }
        Err(e) => {
            tracing::warn!("Extraction failed: {}", e);
            state.update(|page| page.show_error(&e));
            SubmitOutcome::Failed(e)
        }
    }
}

/// Fire the readiness probe once. Failures are only logged.
pub async fn warm_up<C: ExtractionClient>(client: &C) {
    match client.warm_up().await {
        Ok(()) => tracing::debug!("Extraction service is up"),
        Err(e) => tracing::info!("Server warming up ({})", e),
    }
}
