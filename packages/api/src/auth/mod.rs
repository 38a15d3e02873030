//! Authentication against the GymUnity backend.
//!
//! `register` and `login` are the raw endpoints. [`ApiClient::sign_in`] and
//! [`ApiClient::sign_up`] are the flows pages use: they only write the
//! session once both the token and the user record are in hand.

pub mod guard;
pub mod session;

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginPayload, RegisterPayload, TokenResponse, UserInfo};
use crate::transport::{Method, Transport};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /auth/register`. Does not sign in.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<UserInfo, ApiError> {
        self.post("/auth/register", payload).await
    }

    /// `POST /auth/login`. Does not touch the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let payload = LoginPayload {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &payload).await
    }

    /// `GET /users/me` with the stored token.
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        self.get("/users/me").await
    }

    /// `GET /users/me` with a token that is not stored yet.
    pub async fn me_with_token(&self, token: &str) -> Result<UserInfo, ApiError> {
        self.request_with_token::<(), _>(Method::GET, "/users/me", &[], None, Some(token))
            .await
    }

    /// Log in, fetch the user, then write token and user together.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let token = self.login(email, password).await?;
        let user = self.me_with_token(&token.access_token).await?;
        self.session().establish(&token.access_token, &user);
        Ok(user)
    }

    /// Register, then sign in with the same credentials.
    pub async fn sign_up(&self, payload: &RegisterPayload) -> Result<UserInfo, ApiError> {
        self.register(payload).await?;
        self.sign_in(&payload.email, &payload.password).await
    }

    pub fn sign_out(&self) {
        self.session().clear();
    }
}

#[cfg(test)]
mod tests {
    use store::catalog::Catalog;
    use store::models::ProductDraft;

    use crate::models::Role;
    use crate::testing::{client, user_json, FakeTransport};

    use super::*;

    fn payload(role: Option<Role>) -> RegisterPayload {
        RegisterPayload {
            name: "Sam".into(),
            email: "a@b.com".into(),
            password: "secret1".into(),
            role,
        }
    }

    #[tokio::test]
    async fn test_sign_in_writes_session_once_user_known() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/auth/login", 200, r#"{"access_token":"t1","token_type":"bearer"}"#);
        fake.on(Method::GET, "/users/me", 200, &user_json(4, "user"));
        let api = client(&fake);

        let user = api.sign_in(" a@b.com ", "secret1").await.unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(api.session().token().as_deref(), Some("t1"));
        assert_eq!(api.session().user(), Some(user));

        let me = fake.last_request().unwrap();
        assert_eq!(me.header("Authorization"), Some("Bearer t1"));
        let login = &fake.requests()[0];
        assert_eq!(login.body.as_deref(), Some(r#"{"email":"a@b.com","password":"secret1"}"#));
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_no_session() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/auth/login", 200, r#"{"access_token":"t1"}"#);
        fake.on(Method::GET, "/users/me", 500, "boom");
        let api = client(&fake);

        let err = api.sign_in("a@b.com", "secret1").await.unwrap_err();
        assert_eq!(err, ApiError::http(500, "boom"));
        assert!(!api.session().has_token());
        assert!(api.session().user().is_none());
    }

    #[tokio::test]
    async fn test_bad_credentials_message() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/auth/login", 400, r#"{"detail":"Invalid email or password"}"#);
        let api = client(&fake);
        let err = api.sign_in("a@b.com", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(fake.hits("/users/me"), 0);
    }

    #[tokio::test]
    async fn test_sign_up_then_list_product() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/auth/register", 201, &user_json(9, "seller"));
        fake.on(Method::POST, "/auth/login", 200, r#"{"access_token":"t9"}"#);
        fake.on(Method::GET, "/users/me", 200, &user_json(9, "seller"));
        let api = client(&fake);

        let user = api.sign_up(&payload(Some(Role::Seller))).await.unwrap();
        assert!(user.role.is_seller());

        let mut catalog = Catalog::load(api.session().storage());
        let draft = ProductDraft::from_form("Plan", "29", "").unwrap();
        catalog.add(draft, Some(user.id_string()), 1_000);
        catalog.save(api.session().storage());

        let reloaded = Catalog::load(api.session().storage());
        let first = &reloaded.products()[0];
        assert_eq!(first.name, "Plan");
        assert_eq!(first.price, 29.0);
        assert_eq!(first.seller_id.as_deref(), Some("9"));
        assert!(first.image_url.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/auth/login", 200, r#"{"access_token":"t1"}"#);
        fake.on(Method::GET, "/users/me", 200, &user_json(4, "user"));
        let api = client(&fake);
        api.sign_in("a@b.com", "secret1").await.unwrap();
        api.sign_out();
        assert!(!api.session().has_token());
        assert!(api.session().is_consistent());
    }
}
