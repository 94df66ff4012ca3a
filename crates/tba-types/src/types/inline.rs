//! Inline mode: queries, the twenty result shapes, and the message content a result sends.
//!
//! Seven result kinds share their `type` literal between a URL shape and a cached
//! shape; the cached one is recognized by its `<kind>_file_id` key.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    codec::is_zero,
    types::{
        markup::InlineKeyboardMarkup,
        media::Location,
        message::{LinkPreviewOptions, MessageEntity, ParseMode},
        payments::LabeledPrice,
        user::User,
    },
    variant::{from_shapes, no_shape, object, shape_from, variant_role, Variant},
};

/// An incoming inline query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Up to 256 characters, may be empty.
    pub query: String,
    pub offset: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub chat_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Video(InlineQueryResultVideo),
    Audio(InlineQueryResultAudio),
    Voice(InlineQueryResultVoice),
    Document(InlineQueryResultDocument),
    Location(InlineQueryResultLocation),
    Venue(InlineQueryResultVenue),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    CachedAudio(InlineQueryResultCachedAudio),
}

variant_role!(InlineQueryResult, discriminator = Some("type");
    Article => "article",
    Photo => "photo",
    Gif => "gif",
    Mpeg4Gif => "mpeg4_gif",
    Video => "video",
    Audio => "audio",
    Voice => "voice",
    Document => "document",
    Location => "location",
    Venue => "venue",
    Contact => "contact",
    Game => "game",
    CachedPhoto => "cached_photo",
    CachedGif => "cached_gif",
    CachedMpeg4Gif => "cached_mpeg4_gif",
    CachedSticker => "cached_sticker",
    CachedDocument => "cached_document",
    CachedVideo => "cached_video",
    CachedVoice => "cached_voice",
    CachedAudio => "cached_audio",
);

from_shapes!(InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Video(InlineQueryResultVideo),
    Audio(InlineQueryResultAudio),
    Voice(InlineQueryResultVoice),
    Document(InlineQueryResultDocument),
    Location(InlineQueryResultLocation),
    Venue(InlineQueryResultVenue),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    CachedAudio(InlineQueryResultCachedAudio),
});

/// Every `type` literal an inline result can carry on the wire.
pub const INLINE_RESULT_TYPES: &[&str] = &[
    "article", "photo", "gif", "mpeg4_gif", "video", "audio", "voice", "document", "location",
    "venue", "contact", "game", "sticker",
];

macro_rules! each_result {
    ($value:expr, $r:ident => $body:expr) => {
        match $value {
            InlineQueryResult::Article($r) => $body,
            InlineQueryResult::Photo($r) => $body,
            InlineQueryResult::Gif($r) => $body,
            InlineQueryResult::Mpeg4Gif($r) => $body,
            InlineQueryResult::Video($r) => $body,
            InlineQueryResult::Audio($r) => $body,
            InlineQueryResult::Voice($r) => $body,
            InlineQueryResult::Document($r) => $body,
            InlineQueryResult::Location($r) => $body,
            InlineQueryResult::Venue($r) => $body,
            InlineQueryResult::Contact($r) => $body,
            InlineQueryResult::Game($r) => $body,
            InlineQueryResult::CachedPhoto($r) => $body,
            InlineQueryResult::CachedGif($r) => $body,
            InlineQueryResult::CachedMpeg4Gif($r) => $body,
            InlineQueryResult::CachedSticker($r) => $body,
            InlineQueryResult::CachedDocument($r) => $body,
            InlineQueryResult::CachedVideo($r) => $body,
            InlineQueryResult::CachedVoice($r) => $body,
            InlineQueryResult::CachedAudio($r) => $body,
        }
    };
}

impl InlineQueryResult {
    /// The `type` literal sent on the wire. Cached shapes share it with their URL twin.
    pub fn wire_type(&self) -> &'static str {
        let shape = self.shape();
        shape.strip_prefix("cached_").unwrap_or(shape)
    }

    pub fn is_cached(&self) -> bool {
        self.shape().starts_with("cached_")
    }

    /// Unique identifier of the result, 1-64 bytes.
    pub fn id(&self) -> &str {
        each_result!(self, r => r.id.as_str())
    }
}

#[derive(Serialize)]
struct TypeTagged<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    payload: &'a T,
}

impl Serialize for InlineQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.wire_type();
        each_result!(self, payload => TypeTagged { kind, payload }.serialize(serializer))
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use de::Error as _;

        let mut map = object(deserializer)?;
        let kind = match map.remove("type") {
            Some(serde_json::Value::String(kind)) => kind,
            Some(other) => {
                return Err(D::Error::invalid_type(
                    de::Unexpected::Other(&other.to_string()),
                    &"a string `type`",
                ))
            }
            None => return Err(D::Error::missing_field("type")),
        };
        match kind.as_str() {
            "article" => shape_from(map).map(Self::Article),
            "photo" if map.contains_key("photo_file_id") => shape_from(map).map(Self::CachedPhoto),
            "photo" => shape_from(map).map(Self::Photo),
            "gif" if map.contains_key("gif_file_id") => shape_from(map).map(Self::CachedGif),
            "gif" => shape_from(map).map(Self::Gif),
            "mpeg4_gif" if map.contains_key("mpeg4_file_id") => shape_from(map).map(Self::CachedMpeg4Gif),
            "mpeg4_gif" => shape_from(map).map(Self::Mpeg4Gif),
            "video" if map.contains_key("video_file_id") => shape_from(map).map(Self::CachedVideo),
            "video" => shape_from(map).map(Self::Video),
            "audio" if map.contains_key("audio_file_id") => shape_from(map).map(Self::CachedAudio),
            "audio" => shape_from(map).map(Self::Audio),
            "voice" if map.contains_key("voice_file_id") => shape_from(map).map(Self::CachedVoice),
            "voice" => shape_from(map).map(Self::Voice),
            "document" if map.contains_key("document_file_id") => shape_from(map).map(Self::CachedDocument),
            "document" => shape_from(map).map(Self::Document),
            "sticker" => shape_from(map).map(Self::CachedSticker),
            "location" => shape_from(map).map(Self::Location),
            "venue" => shape_from(map).map(Self::Venue),
            "contact" => shape_from(map).map(Self::Contact),
            "game" => shape_from(map).map(Self::Game),
            other => Err(D::Error::unknown_variant(other, INLINE_RESULT_TYPES)),
        }
    }
}

/// Link to an article or web page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultPhoto {
    pub id: String,
    /// JPEG, at most 5 MB.
    pub photo_url: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo_height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Animated GIF by URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub gif_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub gif_height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub gif_duration: i32,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Soundless H.264/MPEG-4 AVC animation by URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mpeg4_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mpeg4_height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mpeg4_duration: i32,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Page with an embedded player, or a video file.
///
/// An embedded player (e.g. YouTube) must be paired with `input_message_content`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,
    /// `text/html` or `video/mp4`.
    pub mime_type: String,
    pub thumbnail_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub video_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub video_height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub video_duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub performer: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub audio_duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// OPUS-encoded voice recording by URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub voice_duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// PDF or ZIP by URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    pub document_url: String,
    /// `application/pdf` or `application/zip`.
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub live_period: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub heading: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub proximity_alert_radius: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub foursquare_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub foursquare_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub google_place_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub google_place_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_name: String,
    /// vCard, 0-2048 bytes.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub vcard: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail_height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedPhoto {
    pub id: String,
    pub photo_file_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedGif {
    pub id: String,
    pub gif_file_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedMpeg4Gif {
    pub id: String,
    pub mpeg4_file_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Sticker already on Telegram's servers. Stickers have no URL shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedSticker {
    pub id: String,
    pub sticker_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedDocument {
    pub id: String,
    pub title: String,
    pub document_file_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedVideo {
    pub id: String,
    pub video_file_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedVoice {
    pub id: String,
    pub voice_file_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedAudio {
    pub id: String,
    pub audio_file_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Content of the message sent as the result of an inline query.
///
/// Shapes are told apart by their defining fields; there is no `type` key.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Location(InputLocationMessageContent),
    Venue(InputVenueMessageContent),
    Contact(InputContactMessageContent),
    Invoice(InputInvoiceMessageContent),
}

variant_role!(InputMessageContent, discriminator = None;
    Text => "text",
    Location => "location",
    Venue => "venue",
    Contact => "contact",
    Invoice => "invoice",
);

from_shapes!(InputMessageContent {
    Text(InputTextMessageContent),
    Location(InputLocationMessageContent),
    Venue(InputVenueMessageContent),
    Contact(InputContactMessageContent),
    Invoice(InputInvoiceMessageContent),
});

impl<'de> Deserialize<'de> for InputMessageContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = object(deserializer)?;
        if map.contains_key("message_text") {
            shape_from(map).map(Self::Text)
        } else if map.contains_key("phone_number") {
            shape_from(map).map(Self::Contact)
        } else if map.contains_key("payload") {
            shape_from(map).map(Self::Invoice)
        } else if map.contains_key("latitude") && map.contains_key("address") {
            shape_from(map).map(Self::Venue)
        } else if map.contains_key("latitude") {
            shape_from(map).map(Self::Location)
        } else {
            Err(no_shape(Self::ROLE, Self::SHAPES))
        }
    }
}

impl From<&str> for InputMessageContent {
    fn from(text: &str) -> Self {
        Self::Text(InputTextMessageContent {
            message_text: text.to_string(),
            ..Default::default()
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub live_period: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub heading: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub proximity_alert_radius: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub foursquare_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub foursquare_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub google_place_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub google_place_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub vcard: String,
}

/// Invoice content. Amounts are in the smallest units of `currency`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInvoiceMessageContent {
    pub title: String,
    pub description: String,
    /// Bot-defined, 1-128 bytes; never shown to the user.
    pub payload: String,
    /// Empty for payments in Telegram Stars.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub provider_token: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_tip_amount: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub suggested_tip_amounts: Vec<i64>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub provider_data: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo_size: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo_width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub photo_height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub need_name: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub need_phone_number: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub need_email: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub need_shipping_address: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub send_phone_number_to_provider: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub send_email_to_provider: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_flexible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{decode_value, encode_value},
        Error,
    };
    use serde_json::{json, Value};

    fn text() -> Value {
        json!({"message_text": "hi"})
    }

    fn samples() -> Vec<Value> {
        vec![
            json!({"type": "article", "id": "1", "title": "T", "input_message_content": text()}),
            json!({"type": "photo", "id": "2", "photo_url": "https://x/p.jpg", "thumbnail_url": "https://x/t.jpg"}),
            json!({"type": "gif", "id": "3", "gif_url": "https://x/a.gif", "thumbnail_url": "https://x/t.jpg"}),
            json!({"type": "mpeg4_gif", "id": "4", "mpeg4_url": "https://x/a.mp4", "thumbnail_url": "https://x/t.jpg"}),
            json!({"type": "video", "id": "5", "video_url": "https://x/v.mp4", "mime_type": "video/mp4",
                   "thumbnail_url": "https://x/t.jpg", "title": "V"}),
            json!({"type": "audio", "id": "6", "audio_url": "https://x/a.mp3", "title": "A"}),
            json!({"type": "voice", "id": "7", "voice_url": "https://x/v.ogg", "title": "Vo"}),
            json!({"type": "document", "id": "8", "title": "D", "document_url": "https://x/d.pdf",
                   "mime_type": "application/pdf"}),
            json!({"type": "location", "id": "9", "latitude": 1.5, "longitude": 2.5, "title": "L"}),
            json!({"type": "venue", "id": "10", "latitude": 1.5, "longitude": 2.5, "title": "V", "address": "A"}),
            json!({"type": "contact", "id": "11", "phone_number": "+1", "first_name": "C"}),
            json!({"type": "game", "id": "12", "game_short_name": "g"}),
            json!({"type": "photo", "id": "13", "photo_file_id": "p"}),
            json!({"type": "gif", "id": "14", "gif_file_id": "g"}),
            json!({"type": "mpeg4_gif", "id": "15", "mpeg4_file_id": "m"}),
            json!({"type": "sticker", "id": "16", "sticker_file_id": "s"}),
            json!({"type": "document", "id": "17", "title": "D", "document_file_id": "d"}),
            json!({"type": "video", "id": "18", "video_file_id": "v", "title": "V"}),
            json!({"type": "voice", "id": "19", "voice_file_id": "v", "title": "Vo"}),
            json!({"type": "audio", "id": "20", "audio_file_id": "a"}),
        ]
    }

    #[test]
    fn every_result_shape_round_trips() {
        for (raw, shape) in samples().into_iter().zip(InlineQueryResult::SHAPES) {
            let result: InlineQueryResult = decode_value(raw.clone()).unwrap();
            assert_eq!(result.shape(), *shape);
            assert_eq!(result.wire_type(), raw["type"]);
            assert_eq!(result.id(), raw["id"]);
            assert_eq!(encode_value(&result).unwrap(), raw);
        }
    }

    #[test]
    fn cached_shape_needs_file_id() {
        let url: InlineQueryResult = decode_value(samples()[1].clone()).unwrap();
        let cached: InlineQueryResult = decode_value(samples()[12].clone()).unwrap();
        assert!(!url.is_cached());
        assert!(cached.is_cached());
        assert_eq!(url.wire_type(), cached.wire_type());
    }

    #[test]
    fn sticker_is_always_cached() {
        let err = decode_value::<InlineQueryResult>(json!({"type": "sticker", "id": "1"})).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(ref m) if m.contains("sticker_file_id")));
    }

    #[test]
    fn unknown_or_missing_type() {
        let err = decode_value::<InlineQueryResult>(json!({"type": "story", "id": "1"})).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedVariant { ref value, .. } if value == "story"));

        let err = decode_value::<InlineQueryResult>(json!({"id": "1"})).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));

        let err = decode_value::<InlineQueryResult>(json!({"type": 1, "id": "1"})).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }

    #[test]
    fn message_content_shape_by_fields() {
        let samples = [
            json!({"message_text": "*hi*", "parse_mode": "MarkdownV2"}),
            json!({"latitude": 1.0, "longitude": 2.0, "horizontal_accuracy": 0.0}),
            json!({"latitude": 1.0, "longitude": 2.0, "title": "T", "address": "A"}),
            json!({"phone_number": "+1", "first_name": "F"}),
            json!({"title": "T", "description": "D", "payload": "p", "currency": "XTR",
                   "prices": [{"label": "Item", "amount": 5}]}),
        ];
        for (raw, shape) in samples.into_iter().zip(InputMessageContent::SHAPES) {
            let content: InputMessageContent = decode_value(raw.clone()).unwrap();
            assert_eq!(content.shape(), *shape);
            assert_eq!(encode_value(&content).unwrap(), raw);
        }
    }

    #[test]
    fn message_content_without_known_fields_is_unrecognized() {
        let err = decode_value::<InputMessageContent>(json!({"title": "x"})).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedVariant { .. }));
    }

    #[test]
    fn article_nests_content_and_keyboard() {
        let article = InlineQueryResult::from(InlineQueryResultArticle {
            id: "a".into(),
            title: "Title".into(),
            input_message_content: "body".into(),
            reply_markup: Some(InlineKeyboardMarkup::new(vec![vec![
                crate::types::markup::InlineKeyboardButton::url("Open", "https://t.me"),
            ]])),
            url: String::new(),
            description: String::new(),
            thumbnail_url: String::new(),
            thumbnail_width: 0,
            thumbnail_height: 0,
        });
        let json = encode_value(&article).unwrap();
        assert_eq!(json["type"], "article");
        assert_eq!(json["input_message_content"], json!({"message_text": "body"}));
        assert_eq!(decode_value::<InlineQueryResult>(json).unwrap(), article);
    }
}
