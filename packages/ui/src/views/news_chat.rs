use api::coach::timestamp;
use api::models::ChatMessage;
use api::ApiError;
use dioxus::prelude::*;

use crate::components::{ChatBubble, ChatComposer, ErrorBanner, Notice, PageHeader};
use crate::state::use_services;

/// Question and answer over the news pipeline. The conversation lives only
/// as long as the page.
#[component]
pub fn NewsChatView() -> Element {
    let services = use_services();
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let news = services.news.clone();
    let send = move |_: ()| {
        let text = input().trim().to_string();
        if text.is_empty() || loading() {
            return;
        }
        error.set(None);
        input.set(String::new());
        messages.write().push(ChatMessage::user(text.clone(), timestamp()));
        loading.set(true);

        let news = news.clone();
        spawn(async move {
            match news.chat(&text).await {
                Ok(reply) => messages
                    .write()
                    .push(ChatMessage::assistant(reply.combined(), timestamp(), None)),
                Err(ApiError::Unauthorized) => {}
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page news",
            PageHeader { title: "Ask about GymUnity News", subtitle: "Chat with the pipeline stub to preview future news Q&A." }
            section {
                class: "card chat",
                div {
                    class: "chat__messages",
                    if messages.read().is_empty() {
                        Notice { "Ask anything about training trends, nutrition, or recovery." }
                    }
                    for (i, message) in messages.read().iter().enumerate() {
                        ChatBubble { key: "{i}", message: message.clone() }
                    }
                    if loading() {
                        div { class: "chat-bubble chat-bubble--assistant muted", "Thinking..." }
                    }
                }
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                ChatComposer {
                    value: input(),
                    placeholder: "Ask about the latest fitness news...",
                    is_loading: loading(),
                    on_input: move |text| input.set(text),
                    on_send: send,
                }
            }
        }
    }
}
