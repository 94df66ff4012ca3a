//! Keyboards and the `ReplyMarkup` union sent along with messages.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    codec::is_zero,
    literal::True,
    types::commands::WebAppInfo,
    variant::{from_shapes, no_shape, object, shape_from, variant_role, Variant},
};

/// Inline keyboard attached right below a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard: rows }
    }

    /// Every button, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineKeyboardButton> {
        self.inline_keyboard.iter().flatten()
    }
}

/// Exactly one of the optional action fields must be set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub callback_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<LoginUrl>,
    /// An empty query is meaningful: it inserts only the bot's username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_chosen_chat: Option<SwitchInlineQueryChosenChat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,
    /// Must be the first button of the first row.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub pay: bool,
}

impl InlineKeyboardButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: data.into(),
            ..Default::default()
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            switch_inline_query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// Placeholder for a game button. Carries no information.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// Seamless login through the Telegram Login Widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub forward_text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub bot_username: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub request_write_access: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchInlineQueryChosenChat {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub query: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allow_user_chats: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allow_bot_chats: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allow_group_chats: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allow_channel_chats: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub request_contact: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub request_location: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// Custom reply keyboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_persistent: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub resize_keyboard: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub one_time_keyboard: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub input_field_placeholder: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub selective: bool,
}

/// Removes the current custom keyboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: True,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub selective: bool,
}

/// Shows a reply interface to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    pub force_reply: True,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub input_field_placeholder: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub selective: bool,
}

/// Any of the four keyboard kinds accepted as `reply_markup`.
///
/// There is no discriminator: the shape is picked by its defining key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

variant_role!(ReplyMarkup, discriminator = None;
    InlineKeyboard => "inline_keyboard",
    Keyboard => "keyboard",
    Remove => "remove_keyboard",
    ForceReply => "force_reply",
);

from_shapes!(ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
});

impl<'de> Deserialize<'de> for ReplyMarkup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = object(deserializer)?;
        if map.contains_key("inline_keyboard") {
            shape_from(map).map(Self::InlineKeyboard)
        } else if map.contains_key("keyboard") {
            shape_from(map).map(Self::Keyboard)
        } else if map.contains_key("remove_keyboard") {
            shape_from(map).map(Self::Remove)
        } else if map.contains_key("force_reply") {
            shape_from(map).map(Self::ForceReply)
        } else {
            Err(no_shape(Self::ROLE, Self::SHAPES))
        }
    }
}
