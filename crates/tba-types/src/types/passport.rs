//! Telegram Passport files and the errors a bot reports back about submitted elements.

use serde::{Deserialize, Serialize};

use crate::{
    files::remote_file,
    variant::{from_shapes, variant_role},
};

/// A file uploaded to Telegram Passport. JPG, at most 10 MB.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    pub file_date: i64,
}

remote_file!(PassportFile);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

/// An error in a submitted Passport element. The user cannot resubmit it until fixed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    Data(PassportElementErrorDataField),
    FrontSide(PassportElementErrorFrontSide),
    ReverseSide(PassportElementErrorReverseSide),
    Selfie(PassportElementErrorSelfie),
    File(PassportElementErrorFile),
    Files(PassportElementErrorFiles),
    TranslationFile(PassportElementErrorTranslationFile),
    TranslationFiles(PassportElementErrorTranslationFiles),
    Unspecified(PassportElementErrorUnspecified),
}

variant_role!(PassportElementError, discriminator = Some("source");
    Data => "data",
    FrontSide => "front_side",
    ReverseSide => "reverse_side",
    Selfie => "selfie",
    File => "file",
    Files => "files",
    TranslationFile => "translation_file",
    TranslationFiles => "translation_files",
    Unspecified => "unspecified",
);

from_shapes!(PassportElementError {
    Data(PassportElementErrorDataField),
    FrontSide(PassportElementErrorFrontSide),
    ReverseSide(PassportElementErrorReverseSide),
    Selfie(PassportElementErrorSelfie),
    File(PassportElementErrorFile),
    Files(PassportElementErrorFiles),
    TranslationFile(PassportElementErrorTranslationFile),
    TranslationFiles(PassportElementErrorTranslationFiles),
    Unspecified(PassportElementErrorUnspecified),
});

impl PassportElementError {
    /// Section of the user's Passport the error refers to.
    pub fn element_type(&self) -> PassportElementType {
        match self {
            Self::Data(e) => e.kind,
            Self::FrontSide(e) => e.kind,
            Self::ReverseSide(e) => e.kind,
            Self::Selfie(e) => e.kind,
            Self::File(e) => e.kind,
            Self::Files(e) => e.kind,
            Self::TranslationFile(e) => e.kind,
            Self::TranslationFiles(e) => e.kind,
            Self::Unspecified(e) => e.kind,
        }
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Data(e) => &e.message,
            Self::FrontSide(e) => &e.message,
            Self::ReverseSide(e) => &e.message,
            Self::Selfie(e) => &e.message,
            Self::File(e) => &e.message,
            Self::Files(e) => &e.message,
            Self::TranslationFile(e) => &e.message,
            Self::TranslationFiles(e) => &e.message,
            Self::Unspecified(e) => &e.message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub field_name: String,
    /// Base64-encoded data hash.
    pub data_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFrontSide {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorReverseSide {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorSelfie {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFiles {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFile {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFiles {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorUnspecified {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub element_hash: String,
    pub message: String,
}
