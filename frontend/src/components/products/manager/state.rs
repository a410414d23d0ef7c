//! Runtime state of the product manager component.

use common::api::ApiConfig;
use common::error::DraftError;
use common::manager::ManagerState;
use web_sys::AbortController;

use crate::api::HttpProductApi;

use super::props::ProductManagerProps;

pub struct ProductManagerComponent {
    /// Collections, draft and form mode.
    pub state: ManagerState,

    /// Transport shared by every request this instance issues.
    pub api: HttpProductApi,

    /// Aborted on teardown. `None` if the browser refused to create one, in
    /// which case requests simply run to completion.
    pub abort: Option<AbortController>,

    /// Validation error from the last submit attempt, shown under the form.
    pub form_error: Option<DraftError>,

    /// Guard so the initial fetch happens once.
    pub loaded: bool,
}

impl ProductManagerComponent {
    pub fn new(props: &ProductManagerProps) -> Self {
        let abort = AbortController::new().ok();
        let config = ApiConfig::from_override(props.api_base.as_deref());
        let api = HttpProductApi::new(config, abort.as_ref().map(|c| c.signal()));

        Self {
            state: ManagerState::new(),
            api,
            abort,
            form_error: None,
            loaded: false,
        }
    }
}
