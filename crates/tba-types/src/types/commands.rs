//! Bot commands, their scopes, and the chat menu button.

use serde::{Deserialize, Serialize};

use crate::{
    types::user::ChatId,
    variant::{from_shapes, variant_role},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits and underscores.
    pub command: String,
    pub description: String,
}

/// Which users see a set of bot commands. Narrower scopes win.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    #[default]
    Default,
    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat(BotCommandScopeChat),
    ChatAdministrators(BotCommandScopeChatAdministrators),
    ChatMember(BotCommandScopeChatMember),
}

variant_role!(BotCommandScope, discriminator = Some("type");
    Default => "default",
    AllPrivateChats => "all_private_chats",
    AllGroupChats => "all_group_chats",
    AllChatAdministrators => "all_chat_administrators",
    Chat => "chat",
    ChatAdministrators => "chat_administrators",
    ChatMember => "chat_member",
);

from_shapes!(BotCommandScope {
    Chat(BotCommandScopeChat),
    ChatAdministrators(BotCommandScopeChatAdministrators),
    ChatMember(BotCommandScopeChatMember),
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChat {
    pub chat_id: ChatId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatAdministrators {
    pub chat_id: ChatId,
}

/// One member of a group or supergroup chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

/// The bot's menu button in a private chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    /// Opens the bot's list of commands.
    Commands,
    WebApp(MenuButtonWebApp),
    Default,
}

variant_role!(MenuButton, discriminator = Some("type");
    Commands => "commands",
    WebApp => "web_app",
    Default => "default",
);

from_shapes!(MenuButton { WebApp(MenuButtonWebApp) });

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonWebApp {
    pub text: String,
    pub web_app: WebAppInfo,
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
    fn scopes_round_trip() {
        let samples = [
            json!({"type": "default"}),
            json!({"type": "all_private_chats"}),
            json!({"type": "all_group_chats"}),
            json!({"type": "all_chat_administrators"}),
            json!({"type": "chat", "chat_id": -100123}),
            json!({"type": "chat_administrators", "chat_id": "@channel"}),
            json!({"type": "chat_member", "chat_id": 42, "user_id": 7}),
        ];
        for (raw, shape) in samples.into_iter().zip(BotCommandScope::SHAPES) {
            let scope: BotCommandScope = decode_value(raw.clone()).unwrap();
            assert_eq!(scope.shape(), *shape);
            assert_eq!(encode_value(&scope).unwrap(), raw);
        }
    }

    #[test]
    fn scope_chat_id_accepts_username() {
        let scope = BotCommandScope::from(BotCommandScopeChat {
            chat_id: "@news".into(),
        });
        assert_eq!(
            encode_value(&scope).unwrap(),
            json!({"type": "chat", "chat_id": "@news"})
        );
        assert_eq!(BotCommandScope::default().shape(), "default");
    }

    #[test]
    fn menu_button_web_app() {
        let raw = json!({"type": "web_app", "text": "Open", "web_app": {"url": "https://example.org/app"}});
        let button: MenuButton = decode_value(raw.clone()).unwrap();
        match &button {
            MenuButton::WebApp(b) => assert_eq!(b.web_app.url, "https://example.org/app"),
            other => panic!("expected web_app, got {}", other.shape()),
        }
        assert_eq!(encode_value(&button).unwrap(), raw);
        assert_eq!(encode_value(&MenuButton::Commands).unwrap(), json!({"type": "commands"}));

        let default: MenuButton = decode_value(json!({"type": "default"})).unwrap();
        assert_eq!(default, MenuButton::Default);
        assert_eq!(default.shape(), "default");
        assert_eq!(encode_value(&default).unwrap(), json!({"type": "default"}));
    }

    #[test]
    fn web_app_missing_url_is_malformed() {
        let err = decode_value::<MenuButton>(json!({"type": "web_app", "text": "x", "web_app": {}}))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(ref m) if m.contains("url")));
    }
}
