use dioxus::prelude::*;

use ui::{AppProvider, Navbar};
use views::{
    AdminNews, AiCoach, AiPlan, Dashboard, Home, Login, NewsArticle, NewsChat, NewsExplore,
    NewsFeed, NewsPreferences, NewsSaved, NotFound, Register, Seller, Store,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/ai-coach")]
        AiCoach {},
        #[route("/ai-plan")]
        AiPlan {},
        #[route("/store")]
        Store {},
        #[route("/seller")]
        Seller {},
        #[route("/news")]
        NewsFeed {},
        #[route("/news/explore")]
        NewsExplore {},
        #[route("/news/saved")]
        NewsSaved {},
        #[route("/news/articles/:id")]
        NewsArticle { id: String },
        #[route("/news/preferences")]
        NewsPreferences {},
        #[route("/news/chat")]
        NewsChat {},
        #[route("/admin/news")]
        AdminNews {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting GymUnity web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout for every route: shared state, the navigation bar, then the page.
#[component]
fn Shell() -> Element {
    rsx! {
        AppProvider {
            Navbar {}
            main {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
