//! AI coach chat.
//!
//! [`CoachClient`] posts to `/ai/chat` under the same 401 policy as the news
//! client. [`ChatHistory`] keeps each user's conversation and workout context
//! in local storage; the backend only ever sees it as context for the next
//! message.

use store::keys;
use store::{KeyValueStore, Storage};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::interceptor::UnauthorizedInterceptor;
use crate::models::{ChatContext, ChatMessage, CoachChatRequest, CoachChatResponse, UserInfo};
use crate::news::enforce_session;
use crate::transport::Transport;

/// Current time as an RFC 3339 string, the format stored in `createdAt`.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[derive(Clone, Debug)]
pub struct CoachClient<T: Transport, S: KeyValueStore> {
    api: ApiClient<T, S>,
    interceptor: UnauthorizedInterceptor,
}

impl<T: Transport, S: KeyValueStore> CoachClient<T, S> {
    pub fn new(api: ApiClient<T, S>, interceptor: UnauthorizedInterceptor) -> Self {
        Self { api, interceptor }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    /// Send `message` with the conversation so far.
    ///
    /// `history` should already end with the user's new message. Without a
    /// stored token nothing is sent: the interceptor fires and the call fails
    /// with [`ApiError::Unauthorized`].
    pub async fn send(
        &self,
        message: &str,
        context: &ChatContext,
        history: &[ChatMessage],
    ) -> Result<ChatMessage, ApiError> {
        if !self.api.session().has_token() {
            tracing::debug!("coach message without token");
            return enforce_session(&self.api, &self.interceptor, Err(ApiError::Unauthorized));
        }

        let body = CoachChatRequest {
            message: message.trim().to_string(),
            context: context.normalized(),
            history: history.iter().map(ChatMessage::to_history_entry).collect(),
        };
        let result: Result<CoachChatResponse, ApiError> = self.api.post("/ai/chat", &body).await;
        let response = enforce_session(&self.api, &self.interceptor, result)?;
        Ok(ChatMessage::assistant(
            response.reply,
            timestamp(),
            response.suggested_plan,
        ))
    }
}

/// One user's persisted coach conversation.
#[derive(Clone, Debug)]
pub struct ChatHistory<S: KeyValueStore> {
    storage: Storage<S>,
    history_key: String,
    context_key: String,
}

impl<S: KeyValueStore> ChatHistory<S> {
    /// History for `user`, or the shared anonymous slot when signed out.
    pub fn for_user(storage: Storage<S>, user: Option<&UserInfo>) -> Self {
        let id = user
            .map(UserInfo::id_string)
            .unwrap_or_else(|| keys::ANONYMOUS_USER.to_string());
        Self {
            storage,
            history_key: keys::ai_chat_history(&id),
            context_key: keys::ai_chat_context(&id),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.storage.read(&self.history_key, Vec::new())
    }

    pub fn save_messages(&self, messages: &[ChatMessage]) {
        self.storage.write(&self.history_key, messages);
    }

    pub fn context(&self) -> ChatContext {
        self.storage.read(&self.context_key, ChatContext::default())
    }

    pub fn save_context(&self, context: &ChatContext) {
        self.storage.write(&self.context_key, context);
    }

    /// Forget the conversation. The workout context is kept.
    pub fn reset(&self) {
        self.storage.remove(&self.history_key);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use store::MemoryStore;

    use crate::models::{ChatRole, Role};
    use crate::testing::{client, user, FakeTransport};
    use crate::transport::Method;

    use super::*;

    const PLAN_REPLY: &str = r#"{"reply":"Here is a plan.","suggested_plan":{"week_overview":"3 full-body days","days":[{"day":"Day 1","focus":"Full body","exercises":[{"name":"Squat","sets":"3","reps":"8","rest":"90s","notes":"Brace"}]}]}}"#;

    fn coach(fake: &FakeTransport, signed_in: bool) -> (CoachClient<FakeTransport, MemoryStore>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let seen = fired.clone();
        let api = client(fake);
        if signed_in {
            api.session().establish("tok", &user(5, Role::User));
        }
        let interceptor = UnauthorizedInterceptor::new(move || seen.set(seen.get() + 1));
        (CoachClient::new(api, interceptor), fired)
    }

    #[tokio::test]
    async fn test_send_returns_plan_message() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/ai/chat", 200, PLAN_REPLY);
        let (coach, _) = coach(&fake, true);

        let history = vec![ChatMessage::user("Build me a plan", timestamp())];
        let reply = coach
            .send("Build me a plan", &ChatContext::default(), &history)
            .await
            .unwrap();
        assert_eq!(reply.role, ChatRole::Assistant);
        let plan = reply.plan.unwrap();
        assert_eq!(plan.days[0].exercises[0].name, "Squat");

        let body: serde_json::Value =
            serde_json::from_str(&fake.last_request().unwrap().body.unwrap()).unwrap();
        assert_eq!(body["context"]["days_per_week"], 4);
        assert_eq!(body["context"]["injuries"], serde_json::Value::Null);
        assert_eq!(body["history"][0]["createdAt"], history[0].created_at.as_str());
    }

    #[tokio::test]
    async fn test_no_token_sends_nothing() {
        let fake = FakeTransport::new();
        let (coach, fired) = coach(&fake, false);
        let err = coach.send("hi", &ChatContext::default(), &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(fired.get(), 1);
        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_401_ends_session() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/ai/chat", 401, r#"{"detail":"Token expired"}"#);
        let (coach, fired) = coach(&fake, true);
        let err = coach.send("hi", &ChatContext::default(), &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(fired.get(), 1);
        assert!(!coach.api().session().has_token());
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/ai/chat", 500, "Internal Server Error");
        let (coach, fired) = coach(&fake, true);
        let err = coach.send("hi", &ChatContext::default(), &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_history_is_per_user() {
        let storage = Storage::new(MemoryStore::new());
        let sam = user(5, Role::User);
        let history = ChatHistory::for_user(storage.clone(), Some(&sam));
        history.save_messages(&[ChatMessage::user("hello", "t0")]);
        let mut ctx = ChatContext::default();
        ctx.set_days_per_week(3);
        history.save_context(&ctx);

        assert!(storage.read_raw("ai_chat_user_5").is_some());
        assert!(storage.read_raw("ai_chat_context_user_5").is_some());

        let other = ChatHistory::for_user(storage.clone(), Some(&user(6, Role::User)));
        assert!(other.messages().is_empty());
        assert_eq!(other.context(), ChatContext::default());

        let anonymous = ChatHistory::for_user(storage.clone(), None);
        anonymous.save_messages(&[]);
        assert!(storage.read_raw("ai_chat_user_unknown").is_some());

        history.reset();
        assert!(history.messages().is_empty());
        assert_eq!(history.context().days_per_week, 3);
    }

    #[test]
    fn test_malformed_history_falls_back() {
        let storage = Storage::new(MemoryStore::new());
        storage.write_raw("ai_chat_user_5", "[{\"role\":\"robot\"}]");
        storage.write_raw("ai_chat_context_user_5", "nope");
        let history = ChatHistory::for_user(storage, Some(&user(5, Role::User)));
        assert!(history.messages().is_empty());
        assert_eq!(history.context(), ChatContext::default());
    }
}
