use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    files::remote_file,
    types::media::{File, PhotoSize},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerType {
    Regular,
    Mask,
    CustomEmoji,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    /// Independent of the sticker format (static, animated or video).
    #[serde(rename = "type")]
    pub kind: StickerType,
    pub width: i32,
    pub height: i32,
    pub is_animated: bool,
    pub is_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub set_name: String,
    /// Premium animation for premium regular stickers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_animation: Option<File>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub custom_emoji_id: String,
    /// Custom emoji that must be repainted to the text color in messages.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub needs_repainting: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

remote_file!(Sticker);

impl Sticker {
    pub fn is_static(&self) -> bool {
        !self.is_animated && !self.is_video
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

/// Where a mask is placed on faces by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    // Shifts and scale are required; 0 is a normal value for all three.
    pub x_shift: f64,
    pub y_shift: f64,
    pub scale: f64,
}
