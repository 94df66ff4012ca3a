use serde::{Deserialize, Serialize};

use crate::{
    types::{chat::Chat, user::User},
    variant::{from_shapes, variant_role},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji(ReactionTypeEmoji),
    CustomEmoji(ReactionTypeCustomEmoji),
    /// Paid star reaction, carries no fields.
    Paid,
}

variant_role!(ReactionType, discriminator = Some("type");
    Emoji => "emoji",
    CustomEmoji => "custom_emoji",
    Paid => "paid",
);

from_shapes!(ReactionType {
    Emoji(ReactionTypeEmoji),
    CustomEmoji(ReactionTypeCustomEmoji),
});

impl ReactionType {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji(ReactionTypeEmoji { emoji: emoji.into() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionTypeEmoji {
    pub emoji: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionTypeCustomEmoji {
    pub custom_emoji_id: String,
}

/// A reaction added to a message with the number of times it was added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub total_count: i32,
}

/// A change of one user's reactions on a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Set instead of `user` for anonymous reactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_chat: Option<Chat>,
    pub date: i64,
    // Both lists are always present, even when empty.
    pub old_reaction: Vec<ReactionType>,
    pub new_reaction: Vec<ReactionType>,
}

impl MessageReactionUpdated {
    /// Reactions present after the change that were not there before.
    pub fn added(&self) -> impl Iterator<Item = &ReactionType> {
        self.new_reaction
            .iter()
            .filter(|r| !self.old_reaction.contains(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode_value, encode_value},
        variant::Variant,
    };
    use serde_json::json;

    #[test]
    fn paid_reaction_has_only_the_tag() {
        assert_eq!(encode_value(&ReactionType::Paid).unwrap(), json!({"type": "paid"}));
        let back: ReactionType = decode_value(json!({"type": "paid"})).unwrap();
        assert_eq!(back.shape(), "paid");
    }

    #[test]
    fn reaction_update_keeps_empty_lists() {
        let raw = json!({
            "chat": {"id": -5, "type": "supergroup", "title": "S"},
            "message_id": 3,
            "user": {"id": 1, "is_bot": false, "first_name": "R"},
            "date": 100,
            "old_reaction": [],
            "new_reaction": [
                {"type": "emoji", "emoji": "👍"},
                {"type": "custom_emoji", "custom_emoji_id": "5368"}
            ]
        });
        let update: MessageReactionUpdated = decode_value(raw.clone()).unwrap();
        assert_eq!(update.added().count(), 2);
        assert_eq!(update.new_reaction[0], ReactionType::emoji("👍"));
        assert_eq!(encode_value(&update).unwrap(), raw);
    }

    #[test]
    fn reaction_count_round_trips() {
        let raw = json!({"type": {"type": "emoji", "emoji": "🔥"}, "total_count": 0});
        let count: ReactionCount = decode_value(raw.clone()).unwrap();
        assert_eq!(encode_value(&count).unwrap(), raw);
    }
}
