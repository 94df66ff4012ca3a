use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    types::{
        boost::{ChatBoostRemoved, ChatBoostUpdated},
        chat::{Chat, ChatMemberUpdated},
        inline::InlineQuery,
        message::{MaybeInaccessibleMessage, Message},
        reaction::MessageReactionUpdated,
        user::User,
    },
};

/// A press on an inline keyboard callback button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the button was on a message sent in inline mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MaybeInaccessibleMessage>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub inline_message_id: String,
    /// Global identifier of the chat the message was sent to.
    pub chat_instance: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub data: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub game_short_name: String,
}

/// An incoming update. At most one of the optional fields is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reaction: Option<MessageReactionUpdated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_boost: Option<ChatBoostUpdated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_chat_boost: Option<ChatBoostRemoved>,
}

impl Update {
    /// Any message carried by the update, edited or not.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }

    /// The chat the update happened in, when there is one.
    pub fn chat(&self) -> Option<&Chat> {
        if let Some(m) = self.any_message() {
            return Some(&m.chat);
        }
        if let Some(r) = &self.message_reaction {
            return Some(&r.chat);
        }
        if let Some(m) = self.callback_query.as_ref().and_then(|q| q.message.as_ref()) {
            return Some(m.chat());
        }
        if let Some(u) = self.my_chat_member.as_ref().or(self.chat_member.as_ref()) {
            return Some(&u.chat);
        }
        self.chat_boost
            .as_ref()
            .map(|b| &b.chat)
            .or(self.removed_chat_boost.as_ref().map(|b| &b.chat))
    }

    /// The user who caused the update, when known.
    pub fn sender(&self) -> Option<&User> {
        if let Some(m) = self.any_message() {
            return m.from.as_ref();
        }
        if let Some(q) = &self.inline_query {
            return Some(&q.from);
        }
        if let Some(q) = &self.callback_query {
            return Some(&q.from);
        }
        if let Some(r) = &self.message_reaction {
            return r.user.as_ref();
        }
        self.my_chat_member
            .as_ref()
            .or(self.chat_member.as_ref())
            .map(|u| &u.from)
    }
}
