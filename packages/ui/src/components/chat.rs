//! Chat bubbles and the message composer shared by the AI coach and the
//! news chat.

use api::models::{ChatMessage, ChatRole};
use dioxus::prelude::*;

use super::PlanCard;

#[component]
pub fn ChatBubble(message: ChatMessage) -> Element {
    let class = match message.role {
        ChatRole::User => "chat-bubble chat-bubble--user",
        ChatRole::Assistant => "chat-bubble chat-bubble--assistant",
    };

    rsx! {
        div {
            class,
            p { "{message.content}" }
            if let Some(plan) = message.plan.clone() {
                PlanCard { plan }
            }
        }
    }
}

/// Multi-line input. Enter sends, Shift+Enter inserts a newline.
#[component]
pub fn ChatComposer(
    value: String,
    placeholder: String,
    is_loading: bool,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    let can_send = !is_loading && !value.trim().is_empty();

    rsx! {
        div {
            class: "chat-composer",
            textarea {
                rows: 3,
                placeholder: "{placeholder}",
                value: "{value}",
                disabled: is_loading,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                        evt.prevent_default();
                        if can_send {
                            on_send.call(());
                        }
                    }
                },
            }
            div {
                class: "chat-composer__footer",
                span { class: "muted small", "Press Enter to send, Shift+Enter for a new line." }
                button {
                    class: "primary",
                    disabled: !can_send,
                    onclick: move |_| on_send.call(()),
                    if is_loading { "Thinking..." } else { "Send" }
                }
            }
        }
    }
}
