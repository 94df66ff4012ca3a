use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    codec::{is_zero, unix_time},
    types::{chat::Chat, user::User},
    variant::{from_shapes, variant_role},
};

/// Where a chat boost came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChatBoostSource {
    Premium(ChatBoostSourcePremium),
    GiftCode(ChatBoostSourceGiftCode),
    Giveaway(ChatBoostSourceGiveaway),
}

variant_role!(ChatBoostSource, discriminator = Some("source");
    Premium => "premium",
    GiftCode => "gift_code",
    Giveaway => "giveaway",
);

from_shapes!(ChatBoostSource {
    Premium(ChatBoostSourcePremium),
    GiftCode(ChatBoostSourceGiftCode),
    Giveaway(ChatBoostSourceGiveaway),
});

impl ChatBoostSource {
    /// The booster, when known. Unclaimed giveaway prizes have none.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Premium(s) => Some(&s.user),
            Self::GiftCode(s) => Some(&s.user),
            Self::Giveaway(s) => s.user.as_ref(),
        }
    }
}

/// Boost from a Telegram Premium subscription or a gifted one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourcePremium {
    pub user: User,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiftCode {
    pub user: User,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiveaway {
    /// May be 0 if the giveaway message is not sent yet.
    pub giveaway_message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Stars split between winners, Telegram Star giveaways only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub prize_star_count: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_unclaimed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: i64,
    pub expiration_date: i64,
    pub source: ChatBoostSource,
}

impl ChatBoost {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.expiration_date)
    }
}

/// Service message: a user boosted the chat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostAdded {
    pub boost_count: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,
    pub remove_date: i64,
    pub source: ChatBoostSource,
}

/// Result of `getUserChatBoosts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserChatBoosts {
    pub boosts: Vec<ChatBoost>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode_value, encode_value},
        variant::Variant,
        Error,
    };
    use serde_json::json;

    #[test]
    fn boosts_with_every_source_round_trip() {
        let user = json!({"id": 4, "is_bot": false, "first_name": "B"});
        let raw = json!({"boosts": [
            {"boost_id": "a", "add_date": 1, "expiration_date": 2, "source": {"source": "premium", "user": user}},
            {"boost_id": "b", "add_date": 1, "expiration_date": 2, "source": {"source": "gift_code", "user": user}},
            {"boost_id": "c", "add_date": 1, "expiration_date": 2,
             "source": {"source": "giveaway", "giveaway_message_id": 0, "is_unclaimed": true}}
        ]});
        let boosts: UserChatBoosts = decode_value(raw.clone()).unwrap();
        let shapes: Vec<&str> = boosts.boosts.iter().map(|b| b.source.shape()).collect();
        assert_eq!(shapes, ChatBoostSource::SHAPES);
        assert!(boosts.boosts[2].source.user().is_none());
        assert_eq!(boosts.boosts[0].source.user().map(|u| u.id), Some(4));
        assert_eq!(encode_value(&boosts).unwrap(), raw);
    }

    #[test]
    fn giveaway_message_id_zero_is_sent() {
        let source = ChatBoostSource::from(ChatBoostSourceGiveaway::default());
        assert_eq!(
            encode_value(&source).unwrap(),
            json!({"source": "giveaway", "giveaway_message_id": 0})
        );
    }

    #[test]
    fn unknown_source_is_unrecognized() {
        let err = decode_value::<ChatBoostSource>(json!({"source": "stars"})).unwrap_err();
        assert!(err.is_forward_compat());
        assert!(matches!(err, Error::UnrecognizedVariant { .. }));
    }
}
