//! Routed pages. Each wraps a shared view from `ui` in the gate its route
//! requires.

use dioxus::prelude::*;
use ui::views::{
    AdminNewsView, AiCoachView, AiPlanView, DashboardView, FeedMode, HomeView, LoginView,
    MarketplaceView, NewsArticleView, NewsChatView, NewsFeedView, NewsPreferencesView,
    NewsSavedView, RegisterView, SellerDashboardView,
};
use ui::{AdminGate, MemberGate, SellerGate};

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
pub fn Register() -> Element {
    rsx! { RegisterView {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        MemberGate { DashboardView {} }
    }
}

#[component]
pub fn AiCoach() -> Element {
    rsx! {
        MemberGate { AiCoachView {} }
    }
}

#[component]
pub fn AiPlan() -> Element {
    rsx! { AiPlanView {} }
}

#[component]
pub fn Store() -> Element {
    rsx! { MarketplaceView {} }
}

#[component]
pub fn Seller() -> Element {
    rsx! {
        SellerGate { SellerDashboardView {} }
    }
}

#[component]
pub fn NewsFeed() -> Element {
    rsx! { NewsFeedView { mode: FeedMode::Personal } }
}

#[component]
pub fn NewsExplore() -> Element {
    rsx! { NewsFeedView { mode: FeedMode::Explore } }
}

#[component]
pub fn NewsSaved() -> Element {
    rsx! { NewsSavedView {} }
}

#[component]
pub fn NewsArticle(id: String) -> Element {
    // Keyed so moving between articles starts a fresh view.
    rsx! { NewsArticleView { key: "{id}", id: id.clone() } }
}

#[component]
pub fn NewsPreferences() -> Element {
    rsx! { NewsPreferencesView {} }
}

#[component]
pub fn NewsChat() -> Element {
    rsx! {
        MemberGate { NewsChatView {} }
    }
}

#[component]
pub fn AdminNews() -> Element {
    rsx! {
        AdminGate { AdminNewsView {} }
    }
}

/// Unknown paths go home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace("/");
    });
    rsx! {}
}
