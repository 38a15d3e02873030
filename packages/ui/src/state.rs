//! Application state and backend clients for the UI.
//!
//! [`AppProvider`] owns the two pieces of top-level state (the product
//! catalogue and the current user) and the backend clients, and puts them in
//! context. Views reach them through [`use_app`] and [`use_services`].

use api::{ApiClient, CoachClient, NewsClient, ReqwestTransport, Session, UnauthorizedInterceptor, UserInfo};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::{Catalog, GymunityConfig, KeyValueStore, ProductDraft, Storage};

use crate::platform::{load_config, make_storage, PlatformStore};

pub type Api = ApiClient<ReqwestTransport, PlatformStore>;
pub type News = NewsClient<ReqwestTransport, PlatformStore>;
pub type Coach = CoachClient<ReqwestTransport, PlatformStore>;

/// Backend clients and configuration, shared through context.
#[derive(Clone)]
pub struct Services {
    pub config: GymunityConfig,
    pub api: Api,
    pub news: News,
    pub coach: Coach,
}

impl Services {
    fn new(config: GymunityConfig, storage: Storage<PlatformStore>, interceptor: UnauthorizedInterceptor) -> Self {
        let api = ApiClient::new(
            ReqwestTransport::new(),
            config.api.base_url.clone(),
            Session::new(storage),
        );
        Self {
            news: NewsClient::new(api.clone(), interceptor.clone()),
            coach: CoachClient::new(api.clone(), interceptor),
            api,
            config,
        }
    }

    pub fn session(&self) -> &Session<PlatformStore> {
        self.api.session()
    }

    pub fn storage(&self) -> &Storage<PlatformStore> {
        self.api.session().storage()
    }
}

/// Top-level state: the marketplace catalogue and the signed-in user.
#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: Signal<Catalog>,
    pub current_user: Signal<Option<UserInfo>>,
    nav: Navigator,
}

impl AppState {
    /// Prepend a product listed by the current user.
    pub fn add_product(&self, draft: ProductDraft) {
        let seller = self.current_user.peek().clone();
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let mut catalog = self.catalog;
        let id = list_product(&mut catalog.write(), seller.as_ref(), draft, now);
        tracing::info!(product_id = %id, "product listed");
    }

    /// Set or clear the user in memory and in storage. Clearing drops the
    /// token too.
    pub fn sync_user(&self, services: &Services, user: Option<UserInfo>) {
        let user = synced_user(services.session(), user.as_ref());
        let mut current = self.current_user;
        if *current.peek() != user {
            current.set(user);
        }
    }

    /// End the session and go to the login page.
    pub fn logout(&self, services: &Services) {
        self.sync_user(services, None);
        self.nav.push("/login");
    }
}

/// Push `user` through the session and return what memory should hold.
///
/// The session's view wins: a user arriving after the token was dropped
/// clears both instead of coming back.
fn synced_user<S: KeyValueStore>(session: &Session<S>, user: Option<&UserInfo>) -> Option<UserInfo> {
    session.sync_user(user);
    session.user()
}

/// Prepend `draft` as listed by `seller` and return the new id.
fn list_product(catalog: &mut Catalog, seller: Option<&UserInfo>, draft: ProductDraft, now_millis: u64) -> String {
    let seller_id = seller.map(UserInfo::id_string);
    catalog.add(draft, seller_id, now_millis).id.clone()
}

pub fn use_app() -> AppState {
    use_context::<AppState>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provides [`AppState`] and [`Services`] to its children.
///
/// Must be rendered inside the router: the 401 interceptor it registers
/// clears the in-memory user and replaces the current route with `/login`.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let nav = use_navigator();
    let storage = use_hook(make_storage);

    let catalog = use_signal({
        let storage = storage.clone();
        move || Catalog::load(&storage)
    });
    let current_user = use_signal({
        let storage = storage.clone();
        move || Session::new(storage).user()
    });

    let app = use_context_provider(|| AppState {
        catalog,
        current_user,
        nav,
    });

    let services = use_context_provider(move || {
        let user = app.current_user;
        let interceptor = UnauthorizedInterceptor::new(move || {
            let mut user = user;
            user.set(None);
            nav.replace("/login");
        });
        Services::new(load_config(), storage.clone(), interceptor)
    });

    // Mirror every catalogue change to storage.
    use_effect(move || {
        let catalog = app.catalog.read();
        catalog.save(services.storage());
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use api::Role;
    use store::{MemoryStore, Product};

    use super::*;

    fn session() -> Session<MemoryStore> {
        Session::new(Storage::new(MemoryStore::new()))
    }

    fn member(id: i64) -> UserInfo {
        UserInfo {
            id,
            name: "Sam".to_string(),
            email: "sam@gym.io".to_string(),
            role: Role::User,
            created_at: "2025-01-01T00:00:00".to_string(),
        }
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: 25.0,
            image_url: None,
        }
    }

    #[test]
    fn test_synced_user_refreshes_live_session() {
        let session = session();
        session.establish("tok", &member(1));

        let renamed = UserInfo {
            name: "Alex".to_string(),
            ..member(1)
        };
        assert_eq!(synced_user(&session, Some(&renamed)), Some(renamed.clone()));
        assert_eq!(session.user(), Some(renamed));
        assert!(session.has_token());
    }

    #[test]
    fn test_synced_user_after_token_dropped_stays_signed_out() {
        let session = session();
        session.establish("tok", &member(1));
        session.clear();

        assert_eq!(synced_user(&session, Some(&member(1))), None);
        assert!(!session.has_token());
        assert!(session.user().is_none());
        assert!(session.is_consistent());
    }

    #[test]
    fn test_synced_user_none_clears_everything() {
        let session = session();
        session.establish("tok", &member(1));

        assert_eq!(synced_user(&session, None), None);
        assert!(!session.has_token());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_list_product_tags_seller_and_prepends() {
        let mut catalog = Catalog::new(vec![Product {
            id: "p-1".to_string(),
            name: "Band".to_string(),
            price: 10.0,
            image_url: None,
            seller_id: None,
        }]);

        let id = list_product(&mut catalog, Some(&member(7)), draft("Rope"), 500);
        assert_eq!(id, "p-500");
        assert_eq!(catalog.products()[0].name, "Rope");
        assert_eq!(catalog.by_seller("7").count(), 1);

        let anon = list_product(&mut catalog, None, draft("Mat"), 500);
        assert_eq!(anon, "p-501");
        assert_eq!(catalog.products()[0].seller_id, None);
        assert_eq!(catalog.len(), 3);
    }
}
