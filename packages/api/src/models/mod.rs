//! Wire models for the backend API.

mod coach;
mod news;
mod user;

pub use coach::{
    ChatContext, ChatMessage, ChatRole, CoachChatRequest, CoachChatResponse, HistoryEntry,
    PlanDay, PlanExercise, SuggestedPlan, GOALS,
};
pub use news::{
    Equipment, ExperienceLevel, FetchNowResponse, NewsArticle, NewsChatRequest,
    NewsChatResponse, NewsFeedResponse, NewsPreferences, NewsSource, NewsSourcePayload,
    NewsSourceUpdate, NewsStatus, StatusResponse, NEWS_TOPICS, format_date, format_date_time, parse_tags,
};
pub use user::{LoginPayload, RegisterPayload, Role, TokenResponse, UserInfo, SIGNUP_CHOICES};
