//! Bot API objects.
//!
//! Plain records are structs; every "one of N shapes" object is an enum implementing
//! [`Variant`](crate::variant::Variant).

pub mod background;
pub mod boost;
pub mod chat;
pub mod chat_member;
pub mod commands;
pub mod inline;
pub mod input_media;
pub mod markup;
pub mod media;
pub mod message;
pub mod origin;
pub mod paid_media;
pub mod passport;
pub mod payments;
pub mod reaction;
pub mod response;
pub mod sticker;
pub mod update;
pub mod user;

pub use background::{
    BackgroundFill, BackgroundFillFreeformGradient, BackgroundFillGradient, BackgroundFillSolid,
    BackgroundType, BackgroundTypeChatTheme, BackgroundTypeFill, BackgroundTypePattern,
    BackgroundTypeWallpaper, ChatBackground,
};
pub use boost::{
    ChatBoost, ChatBoostAdded, ChatBoostRemoved, ChatBoostSource, ChatBoostSourceGiftCode,
    ChatBoostSourceGiveaway, ChatBoostSourcePremium, ChatBoostUpdated, UserChatBoosts,
};
pub use chat::{Chat, ChatMemberUpdated, ChatPhoto, ChatType};
pub use chat_member::{
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted,
};
pub use commands::{
    BotCommand, BotCommandScope, BotCommandScopeChat, BotCommandScopeChatAdministrators,
    BotCommandScopeChatMember, MenuButton, MenuButtonWebApp, WebAppInfo,
};
pub use inline::{
    InlineQuery, InlineQueryResult, InputContactMessageContent, InputInvoiceMessageContent,
    InputLocationMessageContent, InputMessageContent, InputTextMessageContent,
    InputVenueMessageContent,
};
pub use input_media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo, InputPaidMedia, InputPaidMediaPhoto, InputPaidMediaVideo,
};
pub use markup::{
    CallbackGame, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup, SwitchInlineQueryChosenChat,
};
pub use media::{
    Animation, Audio, Contact, Document, File, Location, PhotoSize, Venue, Video, VideoNote, Voice,
};
pub use message::{
    InaccessibleMessage, LinkPreviewOptions, MaybeInaccessibleMessage, Message, MessageEntity,
    MessageEntityType, ParseMode,
};
pub use origin::MessageOrigin;
pub use paid_media::{PaidMedia, PaidMediaInfo};
pub use passport::{PassportElementError, PassportElementType, PassportFile};
pub use payments::{
    Gift, Invoice, LabeledPrice, OrderInfo, RevenueWithdrawalState, ShippingAddress,
    StarTransaction, StarTransactions, SuccessfulPayment, TransactionPartner,
};
pub use reaction::{MessageReactionUpdated, ReactionCount, ReactionType};
pub use response::{ApiResponse, ResponseParameters};
pub use sticker::{MaskPoint, MaskPosition, Sticker, StickerType};
pub use update::{CallbackQuery, Update};
pub use user::{ChatId, User};
