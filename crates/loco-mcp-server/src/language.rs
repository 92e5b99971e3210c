//! The fixed set of language codes accepted by the Loco API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A supported `xx_XX` locale code. The remote `LanguageEnum` accepts exactly
/// this set; tool inputs constrained to it are rejected by the input schema
/// before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LanguageCode {
    #[serde(rename = "ar_SA")]
    ArSa,
    #[serde(rename = "bg_BG")]
    BgBg,
    #[serde(rename = "cs_CZ")]
    CsCz,
    #[serde(rename = "da_DK")]
    DaDk,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "el_GR")]
    ElGr,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "et_EE")]
    EtEe,
    #[serde(rename = "fi_FI")]
    FiFi,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "hr_HR")]
    HrHr,
    #[serde(rename = "hu_HU")]
    HuHu,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "ja_JP")]
    JaJp,
    #[serde(rename = "ko_KR")]
    KoKr,
    #[serde(rename = "lt_LT")]
    LtLt,
    #[serde(rename = "lv_LV")]
    LvLv,
    #[serde(rename = "nb_NO")]
    NbNo,
    #[serde(rename = "nl_NL")]
    NlNl,
    #[serde(rename = "pl_PL")]
    PlPl,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "pt_PT")]
    PtPt,
    #[serde(rename = "ro_RO")]
    RoRo,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "sk_SK")]
    SkSk,
    #[serde(rename = "sl_SI")]
    SlSi,
    #[serde(rename = "sr_RS")]
    SrRs,
    #[serde(rename = "sv_SE")]
    SvSe,
    #[serde(rename = "tr_TR")]
    TrTr,
    #[serde(rename = "uk_UA")]
    UkUa,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "zh_TW")]
    ZhTw,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArSa => "ar_SA",
            Self::BgBg => "bg_BG",
            Self::CsCz => "cs_CZ",
            Self::DaDk => "da_DK",
            Self::DeDe => "de_DE",
            Self::ElGr => "el_GR",
            Self::EnGb => "en_GB",
            Self::EnUs => "en_US",
            Self::EsEs => "es_ES",
            Self::EtEe => "et_EE",
            Self::FiFi => "fi_FI",
            Self::FrFr => "fr_FR",
            Self::HrHr => "hr_HR",
            Self::HuHu => "hu_HU",
            Self::ItIt => "it_IT",
            Self::JaJp => "ja_JP",
            Self::KoKr => "ko_KR",
            Self::LtLt => "lt_LT",
            Self::LvLv => "lv_LV",
            Self::NbNo => "nb_NO",
            Self::NlNl => "nl_NL",
            Self::PlPl => "pl_PL",
            Self::PtBr => "pt_BR",
            Self::PtPt => "pt_PT",
            Self::RoRo => "ro_RO",
            Self::RuRu => "ru_RU",
            Self::SkSk => "sk_SK",
            Self::SlSi => "sl_SI",
            Self::SrRs => "sr_RS",
            Self::SvSe => "sv_SE",
            Self::TrTr => "tr_TR",
            Self::UkUa => "uk_UA",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn language_codes_serialize_as_locale_strings() {
        assert_eq!(json!(LanguageCode::CsCz), json!("cs_CZ"));
        assert_eq!(json!(LanguageCode::ZhTw), json!("zh_TW"));
    }

    #[test]
    fn language_codes_deserialize_from_locale_strings() {
        let code: LanguageCode = serde_json::from_value(json!("pl_PL")).unwrap();
        assert_eq!(code, LanguageCode::PlPl);
        assert!(serde_json::from_value::<LanguageCode>(json!("xx_XX")).is_err());
    }
}
