use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    codec::{is_zero, unix_time},
    literal::Zero,
    types::{
        background::ChatBackground,
        boost::ChatBoostAdded,
        chat::Chat,
        markup::InlineKeyboardMarkup,
        media::{largest_photo, Animation, Audio, Contact, Document, Location, PhotoSize, Venue, Video, VideoNote, Voice},
        origin::MessageOrigin,
        paid_media::PaidMediaInfo,
        payments::{Invoice, SuccessfulPayment},
        sticker::Sticker,
        user::User,
    },
    variant::{object, shape_from, variant_role},
};

/// Formatting mode for text and captions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    MarkdownV2,
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// A special entity in a text message (hashtag, link, bold run, ...).
///
/// Offsets and lengths are in UTF-16 code units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,
    pub offset: i32,
    pub length: i32,
    /// `text_link` only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub url: String,
    /// `text_mention` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// `pre` only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub language: String,
    /// `custom_emoji` only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub custom_emoji_id: String,
}

impl MessageEntity {
    /// The entity's slice of `text`, or `None` when the range does not fit.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = utf16_to_byte(text, usize::try_from(self.offset).ok()?)?;
        let end = self.offset.checked_add(self.length)?;
        let end = utf16_to_byte(text, usize::try_from(end).ok()?)?;
        text.get(start..end)
    }
}

fn utf16_to_byte(text: &str, units: usize) -> Option<usize> {
    let mut seen = 0usize;
    for (idx, ch) in text.char_indices() {
        if seen == units {
            return Some(idx);
        }
        seen += ch.len_utf16();
    }
    (seen == units).then_some(text.len())
}

/// Link preview generation options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewOptions {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_disabled: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub prefer_small_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub prefer_large_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_above_text: bool,
}

/// A message.
///
/// See <https://core.telegram.org/bots/api#message>.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub message_thread_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub sender_boost_count: i32,
    pub date: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub business_connection_id: String,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_origin: Option<MessageOrigin>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_topic_message: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_automatic_forward: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub edit_date: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub has_protected_content: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_from_offline: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub media_group_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub author_signature: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub effect_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_media: Option<PaidMediaInfo>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo: Vec<PhotoSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub has_media_spoiler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<MaybeInaccessibleMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful_payment: Option<SuccessfulPayment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost_added: Option<ChatBoostAdded>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_background_set: Option<ChatBackground>,
    /// Only inline keyboards are attached to received messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date)
    }

    pub fn edit_date_time(&self) -> Option<DateTime<Utc>> {
        unix_time(self.edit_date)
    }

    /// Largest size of an attached photo.
    pub fn largest_photo(&self) -> Option<&PhotoSize> {
        largest_photo(&self.photo)
    }

    /// Entities paired with the text they cover, across text and caption.
    pub fn entity_texts(&self) -> Vec<(&MessageEntity, &str)> {
        let text_pairs = self
            .entities
            .iter()
            .filter_map(|e| e.extract(&self.text).map(|s| (e, s)));
        let caption_pairs = self
            .caption_entities
            .iter()
            .filter_map(|e| e.extract(&self.caption).map(|s| (e, s)));
        text_pairs.chain(caption_pairs).collect()
    }
}

/// A message that was deleted or is otherwise not visible to the bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InaccessibleMessage {
    pub chat: Chat,
    pub message_id: i64,
    /// Always 0; this is what tells it apart from [`Message`].
    pub date: Zero,
}

impl InaccessibleMessage {
    pub fn new(chat: Chat, message_id: i64) -> Self {
        Self {
            chat,
            message_id,
            date: Zero,
        }
    }
}

/// Either a full message or an inaccessible stub, told apart by `date == 0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaybeInaccessibleMessage {
    Message(Box<Message>),
    Inaccessible(InaccessibleMessage),
}

variant_role!(MaybeInaccessibleMessage, discriminator = None;
    Message => "message",
    Inaccessible => "inaccessible",
);

impl From<Message> for MaybeInaccessibleMessage {
    fn from(message: Message) -> Self {
        Self::Message(Box::new(message))
    }
}

impl From<InaccessibleMessage> for MaybeInaccessibleMessage {
    fn from(message: InaccessibleMessage) -> Self {
        Self::Inaccessible(message)
    }
}

impl<'de> Deserialize<'de> for MaybeInaccessibleMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let map = object(deserializer)?;
        let date = map
            .get("date")
            .ok_or_else(|| D::Error::missing_field("date"))?;
        if date.as_i64() == Some(0) {
            shape_from(map).map(Self::Inaccessible)
        } else {
            shape_from::<Message, _>(map).map(|m| Self::Message(Box::new(m)))
        }
    }
}

impl MaybeInaccessibleMessage {
    pub fn chat(&self) -> &Chat {
        match self {
            Self::Message(m) => &m.chat,
            Self::Inaccessible(m) => &m.chat,
        }
    }

    pub fn message_id(&self) -> i64 {
        match self {
            Self::Message(m) => m.message_id,
            Self::Inaccessible(m) => m.message_id,
        }
    }

    pub fn accessible(&self) -> Option<&Message> {
        match self {
            Self::Message(m) => Some(m),
            Self::Inaccessible(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode_value, encode_value},
        variant::Variant,
        Error,
    };
    use serde_json::{json, Value};

    fn chat() -> Value {
        json!({"id": 100, "type": "private", "first_name": "Pat"})
    }

    #[test]
    fn text_message_round_trips() {
        let raw = json!({
            "message_id": 5,
            "from": {"id": 100, "is_bot": false, "first_name": "Pat"},
            "date": 1_700_000_000,
            "chat": chat(),
            "text": "/start hello",
            "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
        });
        let msg: Message = decode_value(raw.clone()).unwrap();
        assert_eq!(msg.date_time().map(|d| d.timestamp()), Some(1_700_000_000));
        assert_eq!(msg.entity_texts()[0].1, "/start");
        assert_eq!(msg.edit_date_time(), None);
        assert_eq!(encode_value(&msg).unwrap(), raw);
    }

    #[test]
    fn entity_offsets_count_utf16_units() {
        let entity = MessageEntity {
            kind: MessageEntityType::Bold,
            offset: 3,
            length: 2,
            url: String::new(),
            user: None,
            language: String::new(),
            custom_emoji_id: String::new(),
        };
        // The emoji takes two UTF-16 units.
        assert_eq!(entity.extract("😀 hi"), Some("hi"));
        assert_eq!(entity.extract("x"), None);
    }

    #[test]
    fn oversized_entity_range_extracts_nothing() {
        let entity: MessageEntity =
            decode_value(json!({"type": "bold", "offset": 1, "length": i32::MAX})).unwrap();
        assert_eq!(entity.extract("hi"), None);

        let mut msg: Message = decode_value(json!({
            "message_id": 1, "date": 1, "chat": chat(), "text": "hi"
        }))
        .unwrap();
        msg.entities.push(entity);
        assert!(msg.entity_texts().is_empty());
    }

    #[test]
    fn forwarded_reply_decodes_nested_variants() {
        let raw = json!({
            "message_id": 9,
            "date": 1_700_000_100,
            "chat": chat(),
            "forward_origin": {"type": "hidden_user", "date": 1_600_000_000, "sender_user_name": "Ghost"},
            "reply_to_message": {"message_id": 8, "date": 1_700_000_050, "chat": chat(), "text": "ping"},
            "caption": "see",
            "photo": [
                {"file_id": "a", "file_unique_id": "ua", "width": 90, "height": 90},
                {"file_id": "b", "file_unique_id": "ub", "width": 800, "height": 800}
            ]
        });
        let msg: Message = decode_value(raw.clone()).unwrap();
        assert_eq!(msg.forward_origin.as_ref().map(|o| o.shape()), Some("hidden_user"));
        assert_eq!(msg.reply_to_message.as_ref().map(|m| m.text.as_str()), Some("ping"));
        assert_eq!(msg.largest_photo().map(|p| p.file_id.as_str()), Some("b"));
        assert_eq!(encode_value(&msg).unwrap(), raw);
    }

    #[test]
    fn nested_unknown_origin_is_unrecognized() {
        let raw = json!({
            "message_id": 1, "date": 2, "chat": chat(),
            "forward_origin": {"type": "satellite", "date": 1}
        });
        let err = decode_value::<Message>(raw).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedVariant { ref value, .. } if value == "satellite"));
    }

    #[test]
    fn maybe_inaccessible_splits_on_date() {
        let gone: MaybeInaccessibleMessage =
            decode_value(json!({"chat": chat(), "message_id": 4, "date": 0})).unwrap();
        assert_eq!(gone.shape(), "inaccessible");
        assert!(gone.accessible().is_none());
        assert_eq!(gone.message_id(), 4);

        let live: MaybeInaccessibleMessage =
            decode_value(json!({"chat": chat(), "message_id": 4, "date": 5, "text": "hi"})).unwrap();
        assert_eq!(live.shape(), "message");
        assert_eq!(live.accessible().map(|m| m.text.as_str()), Some("hi"));
        assert_eq!(live.chat().id, 100);
    }

    #[test]
    fn inaccessible_always_encodes_zero_date() {
        let chat: Chat = decode_value(chat()).unwrap();
        let stub = MaybeInaccessibleMessage::from(InaccessibleMessage::new(chat, 12));
        let json = encode_value(&stub).unwrap();
        assert_eq!(json["date"], 0);
        assert_eq!(decode_value::<MaybeInaccessibleMessage>(json).unwrap(), stub);
    }

    #[test]
    fn inaccessible_rejects_non_zero_date() {
        let err = decode_value::<InaccessibleMessage>(json!({"chat": chat(), "message_id": 1, "date": 9}))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }

    #[test]
    fn maybe_inaccessible_requires_date() {
        let err = decode_value::<MaybeInaccessibleMessage>(json!({"chat": chat(), "message_id": 1}))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(ref m) if m.contains("date")));
    }
}
