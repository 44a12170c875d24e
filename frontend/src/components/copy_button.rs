use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::utils::clipboard;

/// How long "Copied!" stays up after a successful copy.
pub const COPY_FEEDBACK_MS: u32 = 1400;

/// Confirmation state of one copy button. Each successful copy gets a new
/// ticket; only the timer holding the latest ticket may clear it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    pub copied: bool,
    ticket: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyAction {
    Copied(u32),
    Expired(u32),
    Failed,
}

impl CopyFeedback {
    pub fn apply(self, action: CopyAction) -> Self {
        match action {
            CopyAction::Copied(ticket) => Self {
                copied: true,
                ticket,
            },
            CopyAction::Expired(ticket) if ticket == self.ticket => Self {
                copied: false,
                ..self
            },
            CopyAction::Expired(_) | CopyAction::Failed => self,
        }
    }
}

impl Reducible for CopyFeedback {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let feedback = use_reducer(CopyFeedback::default);
    let next_ticket = use_mut_ref(|| 0u32);

    let onclick = {
        let dispatcher = feedback.dispatcher();
        let next_ticket = next_ticket.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let next_ticket = next_ticket.clone();
            let text = text.clone();
            spawn_local(async move {
                match clipboard::write_text(&text).await {
                    Ok(()) => {
                        let ticket = {
                            let mut counter = next_ticket.borrow_mut();
                            *counter = counter.wrapping_add(1);
                            *counter
                        };
                        dispatcher.dispatch(CopyAction::Copied(ticket));
                        let timeout = Timeout::new(COPY_FEEDBACK_MS, move || {
                            dispatcher.dispatch(CopyAction::Expired(ticket));
                        });
                        timeout.forget();
                    }
                    Err(err) => {
                        debug!("copy failed: {}", err);
                        dispatcher.dispatch(CopyAction::Failed);
                    }
                }
            });
        })
    };

    html! {
        <button
            type="button"
            class={classes!("copy-button", feedback.copied.then(|| "copied"))}
            onclick={onclick}
            title={props.text.clone()}
        >
            <span aria-live="polite">
                { if feedback.copied { "Copied!" } else { props.label.as_str() } }
            </span>
        </button>
    }
}
