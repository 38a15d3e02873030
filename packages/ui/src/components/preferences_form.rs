use api::models::{Equipment, ExperienceLevel, NewsPreferences, NEWS_TOPICS};
use dioxus::prelude::*;

/// Topic checkboxes, level and equipment selects, and the blocked keyword
/// list. Every edit is reported as a whole new [`NewsPreferences`].
#[component]
pub fn PreferencesForm(
    value: NewsPreferences,
    is_saving: bool,
    on_change: EventHandler<NewsPreferences>,
    on_save: EventHandler<()>,
) -> Element {
    // Kept as typed so a trailing comma survives until the next keyword.
    let mut keywords_text = use_signal(|| value.blocked_keywords_text());

    let (v_level, v_equipment, v_keywords) = (value.clone(), value.clone(), value.clone());

    rsx! {
        section {
            class: "card preferences-form",
            p { class: "muted", "Customize the feed by topics, difficulty, and equipment." }
            div {
                class: "topic-grid",
                for topic in NEWS_TOPICS.iter().copied() {
                    label {
                        key: "{topic}",
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: value.topics.iter().any(|t| t == topic),
                            onchange: {
                                let value = value.clone();
                                move |_| {
                                    let mut next = value.clone();
                                    next.toggle_topic(topic);
                                    on_change.call(next);
                                }
                            },
                        }
                        span { "{topic}" }
                    }
                }
            }
            div {
                class: "form-row",
                label {
                    "Experience level"
                    select {
                        onchange: move |evt: FormEvent| {
                            if let Ok(level) = evt.value().parse::<ExperienceLevel>() {
                                on_change.call(NewsPreferences { level, ..v_level.clone() });
                            }
                        },
                        for level in ExperienceLevel::ALL {
                            option {
                                key: "{level}",
                                value: "{level}",
                                selected: value.level == level,
                                "{level}"
                            }
                        }
                    }
                }
                label {
                    "Equipment"
                    select {
                        onchange: move |evt: FormEvent| {
                            if let Ok(equipment) = evt.value().parse::<Equipment>() {
                                on_change.call(NewsPreferences { equipment, ..v_equipment.clone() });
                            }
                        },
                        for equipment in Equipment::ALL {
                            option {
                                key: "{equipment}",
                                value: "{equipment}",
                                selected: value.equipment == equipment,
                                "{equipment}"
                            }
                        }
                    }
                }
            }
            label {
                "Blocked keywords (comma separated)"
                input {
                    value: "{keywords_text}",
                    oninput: move |evt: FormEvent| {
                        let text = evt.value();
                        let mut next = v_keywords.clone();
                        next.set_blocked_keywords_text(&text);
                        keywords_text.set(text);
                        on_change.call(next);
                    },
                }
            }
            button {
                class: "primary",
                disabled: is_saving,
                onclick: move |_| on_save.call(()),
                if is_saving { "Saving..." } else { "Save preferences" }
            }
        }
    }
}
