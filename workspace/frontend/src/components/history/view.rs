use analytics::{DashboardEvent, DashboardState, HistoryView, Theme};
use common::EMPTY_HISTORY_MESSAGE;
use std::rc::Rc;
use yew::prelude::*;

use super::charts::{ChartSelector, HistoryChart};
use super::stats::SummaryCards;
use super::table::HistoryTable;
use crate::common::error::{EmptyState, ErrorDisplay};
use crate::common::loading::Loading;
use crate::common::notice::Notifier;
use crate::components::layout::layout::Layout;
use crate::hooks::{use_prediction_history, FetchState};

/// Reducer wrapper so the dashboard state machine can drive `use_reducer`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStore(pub DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

/// Prediction history page: owns the dashboard state and the layout.
#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let store = use_reducer(DashboardStore::default);
    let state = store.0;

    let notifier = use_context::<Notifier>();

    let on_refresh = {
        let store = store.clone();
        Callback::from(move |_| {
            log::debug!("Prediction history refresh triggered");
            if let Some(notifier) = &notifier {
                notifier.refreshing();
            }
            store.dispatch(DashboardEvent::HistoryInvalidated);
        })
    };

    let on_toggle_theme = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(DashboardEvent::ThemeToggled))
    };

    let on_event = {
        let store = store.clone();
        Callback::from(move |event: DashboardEvent| store.dispatch(event))
    };

    html! {
        <Layout
            title="Your Prediction History"
            theme={state.theme}
            on_toggle_theme={Some(on_toggle_theme)}
            on_refresh={Some(on_refresh)}
        >
            <HistoryDashboard key={state.generation} {state} {on_event} />
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub state: DashboardState,
    pub on_event: Callback<DashboardEvent>,
}

/// Fetches the history on mount; remounted on refresh through its key.
#[function_component(HistoryDashboard)]
pub fn history_dashboard(props: &DashboardProps) -> Html {
    let (fetch_state, refetch) = use_prediction_history();

    match &*fetch_state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text={Some("Loading prediction history...".to_string())} /> },
        FetchState::Error(message) => html! {
            <ErrorDisplay
                title="Could not load prediction history"
                message={message.clone()}
                on_retry={Some(refetch.clone())}
            />
        },
        FetchState::Success(history) if history.is_empty() => html! {
            <EmptyState message={EMPTY_HISTORY_MESSAGE} />
        },
        FetchState::Success(history) => html! {
            <>
                <ViewToggle view={props.state.view} on_event={props.on_event.clone()} />
                {match props.state.view {
                    HistoryView::Table => html! { <HistoryTable history={history.clone()} /> },
                    HistoryView::Charts => html! {
                        <ChartsView
                            history={history.clone()}
                            state={props.state}
                            on_event={props.on_event.clone()}
                        />
                    },
                }}
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ViewToggleProps {
    view: HistoryView,
    on_event: Callback<DashboardEvent>,
}

#[function_component(ViewToggle)]
fn view_toggle(props: &ViewToggleProps) -> Html {
    let button = |view: HistoryView, icon: &'static str, label: &'static str| {
        let on_event = props.on_event.clone();
        let onclick = Callback::from(move |_| on_event.emit(DashboardEvent::ViewSelected(view)));
        let active = (props.view == view).then_some("tab-active");
        html! {
            <button class={classes!("tab", active)} {onclick}>
                <i class={classes!(icon, "mr-2")}></i>{label}
            </button>
        }
    };

    html! {
        <div class="tabs tabs-boxed mb-6 w-fit">
            {button(HistoryView::Table, "fas fa-table", "Table View")}
            {button(HistoryView::Charts, "fas fa-chart-bar", "Charts View")}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChartsViewProps {
    history: Rc<analytics::HistoryAnalytics>,
    state: DashboardState,
    on_event: Callback<DashboardEvent>,
}

#[function_component(ChartsView)]
fn charts_view(props: &ChartsViewProps) -> Html {
    let on_select = props
        .on_event
        .reform(DashboardEvent::ChartTypeSelected);
    let theme: Theme = props.state.theme;

    html! {
        <div class="flex flex-col gap-6">
            <ChartSelector selected={props.state.chart} {on_select} />
            <HistoryChart history={props.history.clone()} chart={props.state.chart} {theme} />
            <SummaryCards summary={props.history.summarize()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::ChartKind;

    #[test]
    fn test_store_applies_events() {
        let store = Rc::new(DashboardStore::default());
        let store = store.reduce(DashboardEvent::ViewSelected(HistoryView::Charts));
        let store = store.reduce(DashboardEvent::ChartTypeSelected(ChartKind::Soil));
        let store = store.reduce(DashboardEvent::HistoryInvalidated);

        assert_eq!(store.0.view, HistoryView::Charts);
        assert_eq!(store.0.chart, ChartKind::Soil);
        assert_eq!(store.0.generation, 1);
    }
}
