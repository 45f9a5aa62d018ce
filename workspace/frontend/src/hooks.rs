use analytics::{load_history, FetchError, HistoryAnalytics, Normalizer};
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::GlooHistorySource;
use crate::common::notice::Notifier;
use crate::session;

/// API fetch state enum
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Prediction history of the logged-in user, fetched on mount.
///
/// The returned callback refetches in place. Failures are reported through
/// the page's notices; a rejected token is also removed from storage so the
/// next login starts clean.
#[hook]
pub fn use_prediction_history() -> (UseStateHandle<FetchState<Rc<HistoryAnalytics>>>, Callback<()>) {
    let fetch_state = use_state(|| FetchState::Loading);
    let notifier = use_context::<Notifier>();

    let refetch = {
        let fetch_state = fetch_state.clone();

        use_callback(notifier, move |_, notifier| {
            let fetch_state = fetch_state.clone();
            let notifier = notifier.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let token = session::access_token();
                let result = load_history(&GlooHistorySource, token.as_ref(), &Normalizer::default()).await;

                match result {
                    Ok(history) => {
                        log::debug!("Prediction history loaded: {} records", history.len());
                        fetch_state.set(FetchState::Success(Rc::new(history)));
                    }
                    Err(err) => {
                        if matches!(err, FetchError::Unauthorized(_)) {
                            session::clear_access_token();
                        }
                        if let Some(notifier) = &notifier {
                            notifier.fetch_failed(&err);
                        }
                        fetch_state.set(FetchState::Error(err.user_message()));
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
