//! AI coach chat models.

use serde::{Deserialize, Serialize};

pub const GOALS: &[&str] = &["muscle gain", "fat loss", "strength", "endurance"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One bubble in the coach conversation, as persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<SuggestedPlan>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            created_at: created_at.into(),
            plan: None,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        created_at: impl Into<String>,
        plan: Option<SuggestedPlan>,
    ) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            created_at: created_at.into(),
            plan,
        }
    }

    /// The message as sent back to the backend: plans stay local.
    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            role: self.role,
            content: self.content.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: ChatRole,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Workout context sent with every coach message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatContext {
    pub goal: String,
    pub level: String,
    pub days_per_week: u8,
    pub equipment: String,
    #[serde(default)]
    pub injuries: Option<String>,
}

impl Default for ChatContext {
    fn default() -> Self {
        Self {
            goal: "muscle gain".to_string(),
            level: "beginner".to_string(),
            days_per_week: 4,
            equipment: "gym".to_string(),
            injuries: None,
        }
    }
}

impl ChatContext {
    pub const MIN_DAYS: u8 = 1;
    pub const MAX_DAYS: u8 = 7;

    pub fn set_days_per_week(&mut self, days: u8) {
        self.days_per_week = days.clamp(Self::MIN_DAYS, Self::MAX_DAYS);
    }

    /// Blank injury text is stored as none.
    pub fn set_injuries(&mut self, text: &str) {
        let trimmed = text.trim();
        self.injuries = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// Copy with the day count forced into range, for sending.
    pub fn normalized(&self) -> Self {
        let mut ctx = self.clone();
        ctx.set_days_per_week(self.days_per_week);
        if let Some(text) = self.injuries.as_deref() {
            ctx.set_injuries(text);
        }
        ctx
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<PlanExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPlan {
    pub week_overview: String,
    pub days: Vec<PlanDay>,
}

/// `POST /ai/chat` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachChatRequest {
    pub message: String,
    pub context: ChatContext,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoachChatResponse {
    pub reply: String,
    #[serde(default)]
    pub suggested_plan: Option<SuggestedPlan>,
}
