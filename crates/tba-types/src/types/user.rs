use serde::{Deserialize, Serialize};

use crate::codec::is_zero;

/// A Telegram user or bot.
///
/// See <https://core.telegram.org/bots/api#user>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub username: String,
    /// IETF language tag of the user's language.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub language_code: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub added_to_attachment_menu: bool,
    // Returned only in getMe.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_join_groups: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_read_all_group_messages: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub supports_inline_queries: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_connect_to_business: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub has_main_web_app: bool,
}

impl User {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// `@username`, when the user has one.
    pub fn mention(&self) -> Option<String> {
        if self.username.is_empty() {
            None
        } else {
            Some(format!("@{}", self.username))
        }
    }
}

/// Target chat of a request: numeric id or `@channelusername`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}
