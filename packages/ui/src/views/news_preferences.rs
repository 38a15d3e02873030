use api::models::NewsPreferences;
use dioxus::prelude::*;

use crate::components::{ErrorBanner, Notice, PageHeader, PreferencesForm};
use crate::state::use_services;

#[component]
pub fn NewsPreferencesView() -> Element {
    let services = use_services();
    let mut preferences = use_signal(|| Option::<NewsPreferences>::None);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    use_hook({
        let news = services.news.clone();
        move || {
            spawn(async move {
                match news.preferences().await {
                    Ok(found) => preferences.set(Some(found.with_seeded_topics())),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    });

    let news = services.news.clone();
    let save = move |_: ()| {
        if saving() {
            return;
        }
        let Some(current) = preferences() else { return };
        let news = news.clone();
        saving.set(true);
        error.set(None);
        success.set(None);
        spawn(async move {
            match news.update_preferences(&current).await {
                Ok(stored) => {
                    preferences.set(Some(stored));
                    success.set(Some("Preferences saved.".to_string()));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "page news",
            PageHeader { title: "News Preferences", subtitle: "Tune your feed to the training topics you care about." }
            if let Some(err) = error() {
                ErrorBanner { message: err }
            }
            if let Some(message) = success() {
                Notice { "{message}" }
            }
            if loading() {
                Notice { "Loading preferences..." }
            } else if let Some(value) = preferences() {
                PreferencesForm {
                    value,
                    is_saving: saving(),
                    on_change: move |next| preferences.set(Some(next)),
                    on_save: save,
                }
            }
        }
    }
}
