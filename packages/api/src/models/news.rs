//! News reader models.
//!
//! Optional backend fields are `Option`s and list fields default to empty,
//! matching what the backend omits. Required fields are required: a feed
//! item without a `source` is a decode error, not a half-rendered card.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topics offered on the preferences page, matching the backend's seed tags.
pub const NEWS_TOPICS: &[&str] = &[
    "strength",
    "training",
    "nutrition",
    "bodybuilding",
    "muscle gain",
    "cardio",
    "weight loss",
    "fat loss",
    "endurance",
    "recovery",
    "mental fitness",
    "injury prevention",
    "home",
    "bodyweight",
];

/// Parse a backend timestamp. Naive timestamps are taken as UTC.
fn parse_timestamp(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let value = value.trim();
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Date shown on article cards.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "No date".to_string())
}

/// Date and time shown on the pipeline status panel.
pub fn format_date_time(value: Option<&str>) -> String {
    match value {
        None => "Not run yet".to_string(),
        Some(v) => parse_timestamp(v)
            .map(|dt| dt.format("%b %-d, %Y %H:%M UTC").to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub id: i64,
    pub name: String,
    pub rss_url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_fetched_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source: NewsSource,
    #[serde(default)]
    pub saved: bool,
}

impl NewsArticle {
    pub fn published_label(&self) -> String {
        format_date(self.published_at.as_deref())
    }

    pub fn category_label(&self) -> &str {
        self.source.category.as_deref().unwrap_or("Fitness")
    }

    pub fn summary_text(&self) -> &str {
        if self.summary.trim().is_empty() {
            "No summary available."
        } else {
            &self.summary
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsFeedResponse {
    pub items: Vec<NewsArticle>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    #[default]
    Gym,
    Home,
    Bodyweight,
}

impl Equipment {
    pub const ALL: [Self; 3] = [Self::Gym, Self::Home, Self::Bodyweight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gym => "gym",
            Self::Home => "home",
            Self::Bodyweight => "bodyweight",
        }
    }
}

macro_rules! string_enum_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| format!("unknown value '{s}'"))
            }
        }
    };
}

string_enum_impls!(ExperienceLevel);
string_enum_impls!(Equipment);

/// Preferences are replaced wholesale on save, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsPreferences {
    #[serde(default)]
    pub topics: Vec<String>,
    pub level: ExperienceLevel,
    pub equipment: Equipment,
    #[serde(default)]
    pub blocked_keywords: Vec<String>,
}

impl NewsPreferences {
    /// Add `topic` if absent, remove it if present. Order of the rest is kept.
    pub fn toggle_topic(&mut self, topic: &str) {
        if let Some(pos) = self.topics.iter().position(|t| t == topic) {
            self.topics.remove(pos);
        } else {
            self.topics.push(topic.to_string());
        }
    }

    /// Parse a comma separated keyword list, dropping blanks and duplicates.
    pub fn set_blocked_keywords_text(&mut self, text: &str) {
        let mut keywords: Vec<String> = Vec::new();
        for word in text.split(',').map(str::trim).filter(|w| !w.is_empty()) {
            if !keywords.iter().any(|k| k == word) {
                keywords.push(word.to_string());
            }
        }
        self.blocked_keywords = keywords;
    }

    pub fn blocked_keywords_text(&self) -> String {
        self.blocked_keywords.join(", ")
    }

    /// When the backend has no topics yet, start the form with the first three.
    pub fn with_seeded_topics(mut self) -> Self {
        if self.topics.is_empty() {
            self.topics = NEWS_TOPICS.iter().take(3).map(|t| t.to_string()).collect();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsStatus {
    #[serde(default)]
    pub last_run: Option<String>,
    pub sources_checked: u32,
    pub sources_success: u32,
    pub sources_failed: u32,
    pub items_ingested: u32,
    #[serde(default)]
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchNowResponse {
    pub fetched_at: String,
    pub sources_checked: u32,
    pub sources_success: u32,
    pub sources_failed: u32,
    pub items_ingested: u32,
    #[serde(default)]
    pub last_error: Option<String>,
}

/// Body for creating a source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsSourcePayload {
    pub name: String,
    pub rss_url: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub enabled: bool,
}

impl NewsSourcePayload {
    /// Build from the admin form. Name and URL are required; a blank
    /// category is sent as none.
    pub fn from_form(
        name: &str,
        rss_url: &str,
        category: &str,
        tags: &str,
        enabled: bool,
    ) -> Option<Self> {
        let name = name.trim();
        let rss_url = rss_url.trim();
        if name.is_empty() || rss_url.is_empty() {
            return None;
        }
        let category = category.trim();
        Some(Self {
            name: name.to_string(),
            rss_url: rss_url.to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
            tags: parse_tags(tags),
            enabled,
        })
    }
}

/// Split a comma separated list, dropping blanks.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Partial update: only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewsSourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl From<NewsSourcePayload> for NewsSourceUpdate {
    fn from(payload: NewsSourcePayload) -> Self {
        Self {
            name: Some(payload.name),
            rss_url: Some(payload.rss_url),
            category: payload.category,
            tags: Some(payload.tags),
            enabled: Some(payload.enabled),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsChatResponse {
    pub reply: String,
    pub follow_up: String,
}

impl NewsChatResponse {
    /// The text shown as one assistant bubble.
    pub fn combined(&self) -> String {
        format!("{} {}", self.reply, self.follow_up).trim().to_string()
    }
}

/// `{ "status": "..." }` acknowledgement from save/unsave/hide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_enums() {
        let prefs: NewsPreferences = serde_json::from_str(
            r#"{"topics":[],"level":"advanced","equipment":"bodyweight","blocked_keywords":["keto"]}"#,
        )
        .unwrap();
        assert_eq!(prefs.level, ExperienceLevel::Advanced);
        assert_eq!(prefs.equipment, Equipment::Bodyweight);

        let bad = r#"{"topics":[],"level":"wizard","equipment":"gym","blocked_keywords":[]}"#;
        assert!(serde_json::from_str::<NewsPreferences>(bad).is_err());

        assert_eq!("home".parse::<Equipment>(), Ok(Equipment::Home));
        assert!("boat".parse::<Equipment>().is_err());
    }

    #[test]
    fn test_toggle_topic() {
        let mut prefs = NewsPreferences::default();
        prefs.toggle_topic("cardio");
        prefs.toggle_topic("recovery");
        prefs.toggle_topic("cardio");
        assert_eq!(prefs.topics, vec!["recovery".to_string()]);
    }

    #[test]
    fn test_blocked_keywords_text() {
        let mut prefs = NewsPreferences::default();
        prefs.set_blocked_keywords_text(" keto, , detox,keto ");
        assert_eq!(prefs.blocked_keywords, vec!["keto", "detox"]);
        assert_eq!(prefs.blocked_keywords_text(), "keto, detox");
    }

    #[test]
    fn test_seeded_topics() {
        let prefs = NewsPreferences::default().with_seeded_topics();
        assert_eq!(prefs.topics, vec!["strength", "training", "nutrition"]);

        let mut chosen = NewsPreferences::default();
        chosen.topics.push("cardio".into());
        assert_eq!(chosen.with_seeded_topics().topics, vec!["cardio"]);
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let update = NewsSourceUpdate {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"enabled":false}"#);
    }

    #[test]
    fn test_source_form() {
        assert!(NewsSourcePayload::from_form(" ", "https://x/rss", "", "", true).is_none());
        let payload =
            NewsSourcePayload::from_form("Lifts", " https://x/rss ", " ", "strength, ,cardio", false)
                .unwrap();
        assert_eq!(payload.rss_url, "https://x/rss");
        assert_eq!(payload.category, None);
        assert_eq!(payload.tags, vec!["strength", "cardio"]);

        let update = NewsSourceUpdate::from(payload);
        assert_eq!(update.enabled, Some(false));
        assert_eq!(update.category, None);
    }

    #[test]
    fn test_date_labels() {
        assert_eq!(format_date(Some("2025-03-04T10:00:00Z")), "Mar 4, 2025");
        assert_eq!(format_date(Some("2025-03-04T10:00:00")), "Mar 4, 2025");
        assert_eq!(format_date(Some("yesterday")), "No date");
        assert_eq!(format_date(None), "No date");

        assert_eq!(format_date_time(None), "Not run yet");
        assert_eq!(format_date_time(Some("??")), "Unknown");
        assert_eq!(
            format_date_time(Some("2025-03-04T10:05:00.123456")),
            "Mar 4, 2025 10:05 UTC"
        );
    }

    #[test]
    fn test_article_requires_source() {
        let json = r#"{"id":1,"title":"t","link":"l","summary":"s"}"#;
        assert!(serde_json::from_str::<NewsArticle>(json).is_err());
    }
}
