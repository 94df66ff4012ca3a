//! Payments, Telegram Stars transactions and gifts.
//!
//! Amounts are integers in the smallest units of their currency (cents for USD,
//! whole stars for `XTR`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    codec::{is_zero, unix_time},
    types::{chat::Chat, paid_media::PaidMedia, sticker::Sticker, user::User},
    variant::{from_shapes, variant_role},
};

/// One line of a price breakdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    /// Deep-linking parameter used to generate this invoice.
    pub start_parameter: String,
    pub currency: String,
    pub total_amount: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

/// Service message about a successful payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub subscription_expiration_date: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_first_recurring: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub shipping_option_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
}

impl SuccessfulPayment {
    pub fn is_stars(&self) -> bool {
        self.currency == "XTR"
    }

    pub fn subscription_expires_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.subscription_expiration_date)
    }
}

/// State of a Telegram Stars withdrawal through Fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevenueWithdrawalState {
    Pending,
    Succeeded(RevenueWithdrawalStateSucceeded),
    /// Failed and the transaction was refunded.
    Failed,
}

variant_role!(RevenueWithdrawalState, discriminator = Some("type");
    Pending => "pending",
    Succeeded => "succeeded",
    Failed => "failed",
);

from_shapes!(RevenueWithdrawalState {
    Succeeded(RevenueWithdrawalStateSucceeded),
});

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueWithdrawalStateSucceeded {
    pub date: i64,
    /// HTTPS URL to see transaction details.
    pub url: String,
}

/// The other side of a Stars transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionPartner {
    User(TransactionPartnerUser),
    Chat(TransactionPartnerChat),
    AffiliateProgram(TransactionPartnerAffiliateProgram),
    Fragment(TransactionPartnerFragment),
    TelegramAds,
    TelegramApi(TransactionPartnerTelegramApi),
    Other,
}

variant_role!(TransactionPartner, discriminator = Some("type");
    User => "user",
    Chat => "chat",
    AffiliateProgram => "affiliate_program",
    Fragment => "fragment",
    TelegramAds => "telegram_ads",
    TelegramApi => "telegram_api",
    Other => "other",
);

from_shapes!(TransactionPartner {
    User(TransactionPartnerUser),
    Chat(TransactionPartnerChat),
    AffiliateProgram(TransactionPartnerAffiliateProgram),
    Fragment(TransactionPartnerFragment),
    TelegramApi(TransactionPartnerTelegramApi),
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerUser {
    pub user: User,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub invoice_payload: String,
    /// Subscription period in seconds.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub subscription_period: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub paid_media: Vec<PaidMedia>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub paid_media_payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerChat {
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerAffiliateProgram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_user: Option<User>,
    /// Stars per 1000 received by the bot from referred users.
    pub commission_per_mille: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPartnerFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_state: Option<RevenueWithdrawalState>,
}

/// Paid broadcasts and other API usage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPartnerTelegramApi {
    pub request_count: i32,
}

/// A Stars transaction. Exactly one of `source` and `receiver` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarTransaction {
    pub id: String,
    pub amount: i64,
    /// Fractional stars, 0-999999999.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub nanostar_amount: i64,
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TransactionPartner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TransactionPartner>,
}

impl StarTransaction {
    pub fn is_incoming(&self) -> bool {
        self.source.is_some()
    }

    pub fn partner(&self) -> Option<&TransactionPartner> {
        self.source.as_ref().or(self.receiver.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StarTransactions {
    pub transactions: Vec<StarTransaction>,
}

impl StarTransactions {
    /// Net change in whole stars over the listed transactions.
    pub fn balance_delta(&self) -> i64 {
        self.transactions
            .iter()
            .map(|t| if t.is_incoming() { t.amount } else { -t.amount })
            .sum()
    }
}

/// A gift that can be sent by the bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: String,
    pub sticker: Sticker,
    pub star_count: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub upgrade_star_count: i64,
    /// Limited gifts only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_count: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub remaining_count: i32,
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
    fn every_partner_round_trips() {
        let user = json!({"id": 1, "is_bot": false, "first_name": "P"});
        let samples = [
            json!({"type": "user", "user": user, "invoice_payload": "sub-1", "subscription_period": 2_592_000}),
            json!({"type": "chat", "chat": {"id": -100, "type": "channel", "title": "C"}}),
            json!({"type": "affiliate_program", "commission_per_mille": 0}),
            json!({"type": "fragment", "withdrawal_state": {"type": "succeeded", "date": 5, "url": "https://f"}}),
            json!({"type": "telegram_ads"}),
            json!({"type": "telegram_api", "request_count": 300}),
            json!({"type": "other"}),
        ];
        for (raw, shape) in samples.into_iter().zip(TransactionPartner::SHAPES) {
            let partner: TransactionPartner = decode_value(raw.clone()).unwrap();
            assert_eq!(partner.shape(), *shape);
            assert_eq!(encode_value(&partner).unwrap(), raw);
        }
    }

    #[test]
    fn withdrawal_states() {
        for raw in [json!({"type": "pending"}), json!({"type": "failed"})] {
            let state: RevenueWithdrawalState = decode_value(raw.clone()).unwrap();
            assert_eq!(encode_value(&state).unwrap(), raw);
        }
        let err = decode_value::<RevenueWithdrawalState>(json!({"type": "succeeded", "date": 1}))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(ref m) if m.contains("url")));
    }

    #[test]
    fn star_transactions_balance() {
        let raw = json!({"transactions": [
            {"id": "in", "amount": 50, "date": 1, "source": {"type": "telegram_ads"}},
            {"id": "out", "amount": 20, "date": 2, "receiver": {"type": "fragment"}}
        ]});
        let txs: StarTransactions = decode_value(raw.clone()).unwrap();
        assert_eq!(txs.balance_delta(), 30);
        assert_eq!(txs.transactions[1].partner().map(Variant::shape), Some("fragment"));
        assert_eq!(encode_value(&txs).unwrap(), raw);
    }

    #[test]
    fn successful_payment_in_stars() {
        let payment: SuccessfulPayment = decode_value(json!({
            "currency": "XTR",
            "total_amount": 100,
            "invoice_payload": "order-7",
            "telegram_payment_charge_id": "tg",
            "provider_payment_charge_id": ""
        }))
        .unwrap();
        assert!(payment.is_stars());
        assert_eq!(payment.subscription_expires_at(), None);
        assert_eq!(
            encode_value(&payment).unwrap()["provider_payment_charge_id"],
            json!("")
        );
    }
}
