//! Media descriptions sent with `sendMediaGroup`, `editMessageMedia` and `sendPaidMedia`.
//!
//! `media` holds a `file_id`, an HTTP URL, or `attach://<name>` pointing at a
//! multipart part uploaded with the same request.

use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    types::message::{MessageEntity, ParseMode},
    variant::{from_shapes, variant_role},
};

const ATTACH_PREFIX: &str = "attach://";

/// `media` value referring to a multipart upload named `name`.
pub fn attach(name: &str) -> String {
    format!("{ATTACH_PREFIX}{name}")
}

/// Multipart part name of an `attach://` reference.
pub fn attachment_name(media: &str) -> Option<&str> {
    media.strip_prefix(ATTACH_PREFIX)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Animation(InputMediaAnimation),
    Document(InputMediaDocument),
    Audio(InputMediaAudio),
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
}

variant_role!(InputMedia, discriminator = Some("type");
    Animation => "animation",
    Document => "document",
    Audio => "audio",
    Photo => "photo",
    Video => "video",
);

from_shapes!(InputMedia {
    Animation(InputMediaAnimation),
    Document(InputMediaDocument),
    Audio(InputMediaAudio),
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
});

impl InputMedia {
    pub fn media(&self) -> &str {
        match self {
            Self::Animation(m) => &m.media,
            Self::Document(m) => &m.media,
            Self::Audio(m) => &m.media,
            Self::Photo(m) => &m.media,
            Self::Video(m) => &m.media,
        }
    }

    /// Names of every multipart part this item refers to, thumbnail included.
    pub fn attachments(&self) -> Vec<&str> {
        let thumbnail = match self {
            Self::Animation(m) => m.thumbnail.as_str(),
            Self::Document(m) => m.thumbnail.as_str(),
            Self::Audio(m) => m.thumbnail.as_str(),
            Self::Video(m) => m.thumbnail.as_str(),
            Self::Photo(_) => "",
        };
        [self.media(), thumbnail]
            .into_iter()
            .filter_map(attachment_name)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    pub media: String,
    /// Only `attach://` references are accepted for thumbnails.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub has_spoiler: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    pub media: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub disable_content_type_detection: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    pub media: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub performer: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    pub media: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub has_spoiler: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cover: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start_timestamp: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub show_caption_above_media: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub supports_streaming: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub has_spoiler: bool,
}

/// Media for `sendPaidMedia`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputPaidMedia {
    Photo(InputPaidMediaPhoto),
    Video(InputPaidMediaVideo),
}

variant_role!(InputPaidMedia, discriminator = Some("type");
    Photo => "photo",
    Video => "video",
);

from_shapes!(InputPaidMedia {
    Photo(InputPaidMediaPhoto),
    Video(InputPaidMediaVideo),
});

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaidMediaPhoto {
    pub media: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaidMediaVideo {
    pub media: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cover: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start_timestamp: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub supports_streaming: bool,
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
    fn media_group_round_trips() {
        let raw = json!([
            {"type": "animation", "media": "CgAC", "width": 320},
            {"type": "document", "media": "attach://report", "thumbnail": "attach://thumb"},
            {"type": "audio", "media": "https://x/a.mp3", "performer": "P", "title": "T"},
            {"type": "photo", "media": "AgAC", "caption": "<b>hi</b>", "parse_mode": "HTML", "has_spoiler": true},
            {"type": "video", "media": "BAAC", "start_timestamp": 5, "supports_streaming": true}
        ]);
        let group: Vec<InputMedia> = decode_value(raw.clone()).unwrap();
        let shapes: Vec<&str> = group.iter().map(|m| m.shape()).collect();
        assert_eq!(shapes, InputMedia::SHAPES);
        assert_eq!(encode_value(&group).unwrap(), raw);
    }

    #[test]
    fn attachments_are_collected() {
        let doc = InputMedia::from(InputMediaDocument {
            media: attach("report"),
            thumbnail: attach("thumb"),
            ..Default::default()
        });
        assert_eq!(doc.media(), "attach://report");
        assert_eq!(doc.attachments(), vec!["report", "thumb"]);

        let photo = InputMedia::from(InputMediaPhoto {
            media: "AgAC".into(),
            ..Default::default()
        });
        assert!(photo.attachments().is_empty());
    }

    #[test]
    fn paid_media_round_trips() {
        for raw in [
            json!({"type": "photo", "media": "attach://p"}),
            json!({"type": "video", "media": "BAAC", "duration": 30}),
        ] {
            let media: InputPaidMedia = decode_value(raw.clone()).unwrap();
            assert_eq!(encode_value(&media).unwrap(), raw);
        }
    }

    #[test]
    fn missing_media_is_malformed() {
        let err = decode_value::<InputMedia>(json!({"type": "photo"})).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(ref m) if m.contains("media")));
    }
}
