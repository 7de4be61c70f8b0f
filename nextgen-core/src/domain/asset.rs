//! Asset list: the fixed set of selectable symbols.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Brand suffix appended to every signal's asset label.
pub const BRAND_SUFFIX: &str = " NEXTGEN";

/// One of the 15 selectable symbols. Serialized as its symbol string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Asset {
    #[default]
    #[serde(rename = "EUR/USD")]
    EurUsd,
    #[serde(rename = "EUR/JPY")]
    EurJpy,
    #[serde(rename = "USD/JPY")]
    UsdJpy,
    #[serde(rename = "EUR/GBP")]
    EurGbp,
    #[serde(rename = "USD/EGP-OTC")]
    UsdEgpOtc,
    #[serde(rename = "BRL/USD-OTC")]
    BrlUsdOtc,
    #[serde(rename = "USD/TRY-OTC")]
    UsdTryOtc,
    #[serde(rename = "USD/PKR-OTC")]
    UsdPkrOtc,
    #[serde(rename = "USD/PHP-OTC")]
    UsdPhpOtc,
    #[serde(rename = "USD/INR-OTC")]
    UsdInrOtc,
    #[serde(rename = "USD/ARS-OTC")]
    UsdArsOtc,
    #[serde(rename = "USD/MXN-OTC")]
    UsdMxnOtc,
    #[serde(rename = "NZD/JPY-OTC")]
    NzdJpyOtc,
    #[serde(rename = "USD/DZD-OTC")]
    UsdDzdOtc,
    #[serde(rename = "USD/BDT-OTC")]
    UsdBdtOtc,
}

impl Asset {
    /// All assets in display order.
    pub const ALL: [Asset; 15] = [
        Asset::EurUsd,
        Asset::EurJpy,
        Asset::UsdJpy,
        Asset::EurGbp,
        Asset::UsdEgpOtc,
        Asset::BrlUsdOtc,
        Asset::UsdTryOtc,
        Asset::UsdPkrOtc,
        Asset::UsdPhpOtc,
        Asset::UsdInrOtc,
        Asset::UsdArsOtc,
        Asset::UsdMxnOtc,
        Asset::NzdJpyOtc,
        Asset::UsdDzdOtc,
        Asset::UsdBdtOtc,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Asset::EurUsd => "EUR/USD",
            Asset::EurJpy => "EUR/JPY",
            Asset::UsdJpy => "USD/JPY",
            Asset::EurGbp => "EUR/GBP",
            Asset::UsdEgpOtc => "USD/EGP-OTC",
            Asset::BrlUsdOtc => "BRL/USD-OTC",
            Asset::UsdTryOtc => "USD/TRY-OTC",
            Asset::UsdPkrOtc => "USD/PKR-OTC",
            Asset::UsdPhpOtc => "USD/PHP-OTC",
            Asset::UsdInrOtc => "USD/INR-OTC",
            Asset::UsdArsOtc => "USD/ARS-OTC",
            Asset::UsdMxnOtc => "USD/MXN-OTC",
            Asset::NzdJpyOtc => "NZD/JPY-OTC",
            Asset::UsdDzdOtc => "USD/DZD-OTC",
            Asset::UsdBdtOtc => "USD/BDT-OTC",
        }
    }

    /// Symbol with the brand suffix, as carried by generated signals.
    pub fn branded_label(self) -> String {
        format!("{}{}", self.symbol(), BRAND_SUFFIX)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    pub fn next(self) -> Asset {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Asset {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Asset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownAsset(s.to_string()))
    }
}
