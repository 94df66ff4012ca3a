use serde::{Deserialize, Serialize};

use crate::{
    codec::is_zero,
    types::media::Document,
    variant::{from_shapes, variant_role},
};

/// How a background is filled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundFill {
    Solid(BackgroundFillSolid),
    Gradient(BackgroundFillGradient),
    FreeformGradient(BackgroundFillFreeformGradient),
}

variant_role!(BackgroundFill, discriminator = Some("type");
    Solid => "solid",
    Gradient => "gradient",
    FreeformGradient => "freeform_gradient",
);

from_shapes!(BackgroundFill {
    Solid(BackgroundFillSolid),
    Gradient(BackgroundFillGradient),
    FreeformGradient(BackgroundFillFreeformGradient),
});

/// Colors are RGB24.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFillSolid {
    pub color: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFillGradient {
    pub top_color: i32,
    pub bottom_color: i32,
    /// Clockwise, 0-359.
    pub rotation_angle: i32,
}

/// 3 or 4 base colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFillFreeformGradient {
    pub colors: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundType {
    Fill(BackgroundTypeFill),
    Wallpaper(BackgroundTypeWallpaper),
    Pattern(BackgroundTypePattern),
    ChatTheme(BackgroundTypeChatTheme),
}

variant_role!(BackgroundType, discriminator = Some("type");
    Fill => "fill",
    Wallpaper => "wallpaper",
    Pattern => "pattern",
    ChatTheme => "chat_theme",
);

from_shapes!(BackgroundType {
    Fill(BackgroundTypeFill),
    Wallpaper(BackgroundTypeWallpaper),
    Pattern(BackgroundTypePattern),
    ChatTheme(BackgroundTypeChatTheme),
});

impl BackgroundType {
    /// The fill of `fill` and `pattern` backgrounds.
    pub fn fill(&self) -> Option<&BackgroundFill> {
        match self {
            Self::Fill(b) => Some(&b.fill),
            Self::Pattern(b) => Some(&b.fill),
            Self::Wallpaper(_) | Self::ChatTheme(_) => None,
        }
    }

    /// The backing image of `wallpaper` and `pattern` backgrounds.
    pub fn document(&self) -> Option<&Document> {
        match self {
            Self::Wallpaper(b) => Some(&b.document),
            Self::Pattern(b) => Some(&b.document),
            Self::Fill(_) | Self::ChatTheme(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeFill {
    pub fill: BackgroundFill,
    /// Dimming in dark themes, percent. Always sent.
    pub dark_theme_dimming: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeWallpaper {
    pub document: Document,
    pub dark_theme_dimming: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_blurred: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_moving: bool,
}

/// A PNG or TGV pattern combined with a fill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypePattern {
    pub document: Document,
    pub fill: BackgroundFill,
    /// Pattern intensity, 0-100.
    pub intensity: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_inverted: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_moving: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeChatTheme {
    pub theme_name: String,
}

/// A chat background, as set by a service message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatBackground {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
}
