use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    types::media::{largest_photo, PhotoSize, Video},
    variant::{from_shapes, variant_role},
};

/// Paid media attached to a message, as seen before or after purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaidMedia {
    /// Not bought yet: only the dimensions are known.
    Preview(PaidMediaPreview),
    Photo(PaidMediaPhoto),
    Video(PaidMediaVideo),
}

variant_role!(PaidMedia, discriminator = Some("type");
    Preview => "preview",
    Photo => "photo",
    Video => "video",
);

from_shapes!(PaidMedia {
    Preview(PaidMediaPreview),
    Photo(PaidMediaPhoto),
    Video(PaidMediaVideo),
});

impl PaidMedia {
    pub fn is_unlocked(&self) -> bool {
        !matches!(self, Self::Preview(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMediaPreview {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMediaPhoto {
    pub photo: Vec<PhotoSize>,
}

impl PaidMediaPhoto {
    pub fn largest(&self) -> Option<&PhotoSize> {
        largest_photo(&self.photo)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMediaVideo {
    pub video: Video,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMediaInfo {
    /// Stars to pay to see the media.
    pub star_count: i64,
    pub paid_media: Vec<PaidMedia>,
}
