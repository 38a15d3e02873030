//! Route gates for member and admin pages.
//!
//! A successful identity check hands the fresh user to the application
//! shell (memory and storage), whatever the gate decides.

use api::{GuardKind, GuardState};
use dioxus::prelude::*;

use crate::state::{use_app, use_services};

/// Renders `children` only for a signed-in member.
#[component]
pub fn MemberGate(children: Element) -> Element {
    rsx! {
        Gate { kind: GuardKind::Member, {children} }
    }
}

/// Renders `children` only for an admin.
#[component]
pub fn AdminGate(children: Element) -> Element {
    rsx! {
        Gate { kind: GuardKind::Admin, {children} }
    }
}

#[component]
fn Gate(kind: GuardKind, children: Element) -> Element {
    let services = use_services();
    let app = use_app();
    let nav = use_navigator();

    let mut state = use_signal({
        let has_token = services.session().has_token();
        move || kind.initial_state(has_token)
    });

    // Re-verified on every mount. The task is dropped with the component,
    // so a late answer never touches an unmounted gate.
    let _check = use_resource(move || {
        let services = services.clone();
        async move {
            let verdict = kind.check(services.session(), &services.api).await;
            match verdict.user {
                Some(user) => app.sync_user(&services, Some(user)),
                None if !services.session().has_token() => app.sync_user(&services, None),
                None => {}
            }
            state.set(verdict.state);
        }
    });

    use_effect(move || {
        if state() == GuardState::Denied {
            tracing::debug!(?kind, "gate denied");
            nav.replace(kind.redirect_path());
        }
    });

    match state() {
        GuardState::Allowed => rsx! { {children} },
        GuardState::Checking => rsx! {
            div { class: "gate-checking", "Checking session..." }
        },
        GuardState::Denied => rsx! {},
    }
}

/// Renders `children` only when the stored user is a seller. No backend
/// call is made; anyone else is sent to `/login`.
#[component]
pub fn SellerGate(children: Element) -> Element {
    let app = use_app();
    let nav = use_navigator();
    let is_seller = app
        .current_user
        .read()
        .as_ref()
        .is_some_and(|u| u.role.is_seller());

    use_effect(move || {
        let allowed = app
            .current_user
            .read()
            .as_ref()
            .is_some_and(|u| u.role.is_seller());
        if !allowed {
            nav.replace("/login");
        }
    });

    if is_seller {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}
