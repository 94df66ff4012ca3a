//! `MessageOrigin`: where a forwarded message came from.

use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    types::{chat::Chat, user::User},
    variant::{from_shapes, variant_role},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageOrigin {
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
}

variant_role!(MessageOrigin, discriminator = Some("type");
    User => "user",
    HiddenUser => "hidden_user",
    Chat => "chat",
    Channel => "channel",
);

from_shapes!(MessageOrigin {
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
});

impl MessageOrigin {
    /// Unix time the original message was sent.
    pub fn date(&self) -> i64 {
        match self {
            Self::User(o) => o.date,
            Self::HiddenUser(o) => o.date,
            Self::Chat(o) => o.date,
            Self::Channel(o) => o.date,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginUser {
    pub date: i64,
    pub sender_user: User,
}

/// Sender hid their account from forwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOriginHiddenUser {
    pub date: i64,
    pub sender_user_name: String,
}

/// Sent on behalf of a chat (anonymous admins, linked channels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChat {
    pub date: i64,
    pub sender_chat: Chat,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub author_signature: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChannel {
    pub date: i64,
    pub chat: Chat,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub author_signature: String,
}
