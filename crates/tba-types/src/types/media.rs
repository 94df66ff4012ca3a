use serde::{Deserialize, Serialize};

use crate::{codec::is_zero, files::remote_file};

/// One size of a photo or a file/sticker thumbnail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

/// Animation file (GIF or H.264/MPEG-4 AVC video without sound).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

/// Audio file to be treated as music.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub performer: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
    /// Thumbnail of the album cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
}

/// General file (as opposed to photos, voice messages and audio files).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cover: Vec<PhotoSize>,
    /// Start offset in seconds.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start_timestamp: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

/// Round video message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,
    /// Width and height (diameter) as defined by the sender.
    pub length: i32,
    pub duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

/// A file ready to be downloaded, as returned by `getFile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
    /// Relative path for `https://api.telegram.org/file/bot<token>/<file_path>`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_path: String,
}

remote_file!(PhotoSize, Animation, Audio, Document, Video, VideoNote, Voice, File);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub vcard: String,
}

/// A point on the map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Uncertainty radius in meters, 0-1500. 0 is a valid reading, so presence is explicit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Seconds the live location can be updated, relative to the message date.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub live_period: i32,
    /// Direction of movement in degrees, 1-360.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub heading: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub proximity_alert_radius: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub location: Location,
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

/// Pick the largest size of a photo (the API sends sizes in ascending order).
pub fn largest_photo(sizes: &[PhotoSize]) -> Option<&PhotoSize> {
    sizes
        .iter()
        .max_by_key(|p| i64::from(p.width) * i64::from(p.height))
}
