mod home;
pub use home::HomeView;

mod auth_forms;
pub use auth_forms::{LoginView, RegisterView};

mod dashboard;
pub use dashboard::DashboardView;

mod ai_coach;
pub use ai_coach::{AiCoachView, AiPlanView};

mod marketplace;
pub use marketplace::{MarketplaceView, SellerDashboardView};

mod news_feed;
pub use news_feed::{FeedMode, NewsFeedView, NewsSavedView};

mod news_article;
pub use news_article::NewsArticleView;

mod news_preferences;
pub use news_preferences::NewsPreferencesView;

mod news_chat;
pub use news_chat::NewsChatView;

mod admin_news;
pub use admin_news::AdminNewsView;
