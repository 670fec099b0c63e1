use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Уникальный идентификатор сообщения
pub type MessageId = String;

/// Автор сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Одна реплика диалога
///
/// Сообщения создаются один раз и больше не изменяются; история диалога
/// только дополняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    /// Текст сообщения, выводится как есть
    pub content: String,
    /// Ссылка на видео с результатом симуляции
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Ссылка на Alembic-экспорт; зарезервировано, сейчас не заполняется
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alembic_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message authored now. The id is derived from the creation
    /// timestamp in milliseconds; uniqueness is best-effort (two messages
    /// created within the same millisecond collide).
    fn now(role: MessageRole, content: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis().to_string(),
            role,
            content: content.into(),
            video_url: None,
            alembic_url: None,
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::now(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::now(MessageRole::Assistant, content)
    }

    /// Attach the primary video asset reference.
    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn has_video(&self) -> bool {
        self.video_url.is_some()
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
