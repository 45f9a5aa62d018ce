use analytics::FetchError;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::settings;

/// Most notices kept on screen; older ones drop off first.
pub const MAX_NOTICES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: usize,
    pub text: String,
    pub is_error: bool,
}

pub enum NoticeAction {
    Push { text: String, is_error: bool },
    Dismiss(usize),
}

/// Notice stack shown over the history page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notices {
    pub items: Vec<Notice>,
    pub next_id: usize,
}

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Repeated refreshes or failures do not stack identical notices.
            NoticeAction::Push { text, .. } if self.items.iter().any(|n| n.text == text) => self,
            NoticeAction::Push { text, is_error } => {
                let mut items = self.items.clone();
                items.push(Notice {
                    id: self.next_id,
                    text,
                    is_error,
                });
                let overflow = items.len().saturating_sub(MAX_NOTICES);
                items.drain(..overflow);
                Rc::new(Notices {
                    items,
                    next_id: self.next_id + 1,
                })
            }
            NoticeAction::Dismiss(id) => {
                if !self.items.iter().any(|n| n.id == id) {
                    return self;
                }
                let items = self.items.iter().filter(|n| n.id != id).cloned().collect();
                Rc::new(Notices {
                    items,
                    next_id: self.next_id,
                })
            }
        }
    }
}

/// Handle the history page uses to report refreshes and fetch failures.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<Notices>,
}

impl Notifier {
    pub fn refreshing(&self) {
        self.dispatcher.dispatch(NoticeAction::Push {
            text: "Refreshing prediction history...".to_string(),
            is_error: false,
        });
    }

    pub fn fetch_failed(&self, err: &FetchError) {
        self.dispatcher.dispatch(NoticeAction::Push {
            text: err.user_message(),
            is_error: true,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Children,
}

#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let notices = use_reducer(Notices::default);
    let notifier = Notifier {
        dispatcher: notices.dispatcher(),
    };

    // Each new notice expires on its own after the configured delay.
    {
        let dispatcher = notices.dispatcher();
        use_effect_with(notices.next_id, move |next_id| {
            if let Some(id) = next_id.checked_sub(1) {
                let delay = settings::get_settings().notice_duration_ms;
                Timeout::new(delay, move || dispatcher.dispatch(NoticeAction::Dismiss(id))).forget();
            }
            || ()
        });
    }

    html! {
        <ContextProvider<Notifier> context={notifier}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for notices.items.iter().map(|notice| {
                    let id = notice.id;
                    let onclick = {
                        let dispatcher = notices.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(NoticeAction::Dismiss(id)))
                    };
                    let (class, icon) = if notice.is_error {
                        ("alert-error", "fas fa-exclamation-circle")
                    } else {
                        ("alert-info", "fas fa-sync-alt")
                    };

                    html! {
                        <div key={id} class={classes!("alert", class, "shadow-lg")}>
                            <i class={icon}></i>
                            <span>{&notice.text}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" {onclick}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<Notifier>>
    }
}
