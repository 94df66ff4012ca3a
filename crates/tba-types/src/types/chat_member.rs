//! `ChatMember`: one of six membership shapes, selected by `status`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    codec::{is_zero, unix_time},
    types::user::User,
    variant::{from_shapes, variant_role},
};

/// Information about one member of a chat.
///
/// See <https://core.telegram.org/bots/api#chatmember>.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    #[serde(rename = "administrator")]
    Administrator(ChatMemberAdministrator),
    #[serde(rename = "member")]
    Member(ChatMemberMember),
    #[serde(rename = "restricted")]
    Restricted(ChatMemberRestricted),
    #[serde(rename = "left")]
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

variant_role!(ChatMember, discriminator = Some("status");
    Owner => "creator",
    Administrator => "administrator",
    Member => "member",
    Restricted => "restricted",
    Left => "left",
    Banned => "kicked",
);

from_shapes!(ChatMember {
    Owner(ChatMemberOwner),
    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),
    Banned(ChatMemberBanned),
});

impl ChatMember {
    /// The member, whatever the status.
    pub fn user(&self) -> &User {
        match self {
            Self::Owner(m) => &m.user,
            Self::Administrator(m) => &m.user,
            Self::Member(m) => &m.user,
            Self::Restricted(m) => &m.user,
            Self::Left(m) => &m.user,
            Self::Banned(m) => &m.user,
        }
    }

    /// True when the user currently belongs to the chat.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
            Self::Restricted(m) => m.is_member,
            Self::Left(_) | Self::Banned(_) => false,
        }
    }
}

/// Owner of the chat. Status literal `creator`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub custom_title: String,
}

/// Administrator rights. Status literal `administrator`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,
    // Channels only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_post_messages: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_edit_messages: bool,
    // Groups and supergroups only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_pin_messages: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub can_manage_topics: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub custom_title: String,
}

/// Regular member. Status literal `member`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
    /// Unix time the user's subscription expires, unset when there is none.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub until_date: i64,
}

/// Member under restrictions. Status literal `restricted`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    /// Unix time restrictions are lifted; 0 means forever. Always sent.
    pub until_date: i64,
}

impl ChatMemberRestricted {
    pub fn is_forever(&self) -> bool {
        self.until_date == 0
    }

    /// When restrictions end, `None` when they never do.
    pub fn until(&self) -> Option<DateTime<Utc>> {
        unix_time(self.until_date)
    }
}

/// Not a member, but may join. Status literal `left`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

/// Banned and cannot return. Status literal `kicked`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// Unix time the ban is lifted; 0 means forever. Always sent.
    pub until_date: i64,
}

impl ChatMemberBanned {
    pub fn is_forever(&self) -> bool {
        self.until_date == 0
    }

    pub fn until(&self) -> Option<DateTime<Utc>> {
        unix_time(self.until_date)
    }
}
