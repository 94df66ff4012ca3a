use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    files::FileRef,
    types::{chat_member::ChatMember, user::User},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// A chat.
///
/// See <https://core.telegram.org/bots/api#chat>.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub username: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_forum: bool,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.kind == ChatType::Private
    }

    /// Title for groups and channels, the user's name for private chats.
    pub fn display_name(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            _ => self.username.clone(),
        }
    }
}

/// Chat photo in two sizes; each size is a separate remote file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhoto {
    /// 160x160 photo.
    pub small_file_id: String,
    pub small_file_unique_id: String,
    /// 640x640 photo.
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

impl ChatPhoto {
    pub fn small(&self) -> FileRef<'_> {
        FileRef {
            file_id: &self.small_file_id,
            file_unique_id: &self.small_file_unique_id,
        }
    }

    pub fn big(&self) -> FileRef<'_> {
        FileRef {
            file_id: &self.big_file_id,
            file_unique_id: &self.big_file_unique_id,
        }
    }

    /// Both sizes, small first.
    pub fn files(&self) -> [FileRef<'_>; 2] {
        [self.small(), self.big()]
    }
}

/// A change in a chat member's status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub via_join_request: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub via_chat_folder_invite_link: bool,
}

impl ChatMemberUpdated {
    /// True when the member moved from outside the chat to inside it.
    pub fn is_join(&self) -> bool {
        !self.old_chat_member.is_present() && self.new_chat_member.is_present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode_value, encode_value},
        files::{tests::FakeRetriever, RemoteFile},
        variant::Variant,
    };
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn chat_type_round_trips() {
        let raw = json!({"id": -100123, "type": "supergroup", "title": "Rustaceans", "is_forum": true});
        let chat: Chat = decode_value(raw.clone()).unwrap();
        assert_eq!(chat.kind, ChatType::Supergroup);
        assert_eq!(chat.display_name(), "Rustaceans");
        assert_eq!(encode_value(&chat).unwrap(), raw);
    }

    #[test]
    fn unknown_chat_type_is_unrecognized() {
        let err = decode_value::<Chat>(json!({"id": 1, "type": "sender"})).unwrap_err();
        assert!(err.is_forward_compat());
    }

    #[tokio::test]
    async fn chat_photo_downloads_each_size() {
        let photo = ChatPhoto {
            small_file_id: "small-id".into(),
            small_file_unique_id: "su".into(),
            big_file_id: "big-id".into(),
            big_file_unique_id: "bu".into(),
        };
        let fake = FakeRetriever::default();
        for f in photo.files() {
            f.download(&fake, Path::new("/tmp/photo.jpg")).await.unwrap();
        }
        let calls = fake.calls.lock().unwrap();
        assert_eq!(calls[0].0, "small-id");
        assert_eq!(calls[1].0, "big-id");
        assert_eq!(photo.big().file_unique_id(), "bu");
    }

    #[test]
    fn member_update_detects_join() {
        let raw = json!({
            "chat": {"id": -5, "type": "group", "title": "g"},
            "from": {"id": 9, "is_bot": false, "first_name": "Admin"},
            "date": 1_700_000_000,
            "old_chat_member": {"status": "left", "user": {"id": 3, "is_bot": false, "first_name": "Bo"}},
            "new_chat_member": {"status": "member", "user": {"id": 3, "is_bot": false, "first_name": "Bo"}}
        });
        let update: ChatMemberUpdated = decode_value(raw.clone()).unwrap();
        assert!(update.is_join());
        assert_eq!(update.new_chat_member.shape(), "member");
        assert_eq!(encode_value(&update).unwrap(), raw);
    }
}
