//! Reusable building blocks for the views.

mod article_card;
pub use article_card::ArticleCard;

mod chat;
pub use chat::{ChatBubble, ChatComposer};

mod filters_bar;
pub use filters_bar::FiltersBar;

mod page_header;
pub use page_header::{ErrorBanner, PageHeader, Notice};

mod pager;
pub use pager::PagerBar;

mod pipeline_status;
pub use pipeline_status::PipelineStatusPanel;

mod plan_card;
pub use plan_card::PlanCard;

mod preferences_form;
pub use preferences_form::PreferencesForm;

mod product_card;
pub use product_card::ProductCard;

mod sources_table;
pub use sources_table::SourcesTable;
