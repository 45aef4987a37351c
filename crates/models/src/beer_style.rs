use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Closed set of beer styles. Stored and sent over the wire by symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    #[sea_orm(string_value = "LAGER")]
    Lager,
    #[sea_orm(string_value = "PILSNER")]
    Pilsner,
    #[sea_orm(string_value = "STOUT")]
    Stout,
    #[sea_orm(string_value = "GOSE")]
    Gose,
    #[sea_orm(string_value = "PORTER")]
    Porter,
    #[sea_orm(string_value = "ALE")]
    Ale,
    #[sea_orm(string_value = "WHEAT")]
    Wheat,
    #[sea_orm(string_value = "IPA")]
    Ipa,
    #[sea_orm(string_value = "PALE_ALE")]
    PaleAle,
    #[sea_orm(string_value = "SAISON")]
    Saison,
    #[sea_orm(string_value = "WEIZEN_HELL")]
    WeizenHell,
    #[sea_orm(string_value = "WEIZEN_DUNKEL")]
    WeizenDunkel,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 12] = [
        BeerStyle::Lager,
        BeerStyle::Pilsner,
        BeerStyle::Stout,
        BeerStyle::Gose,
        BeerStyle::Porter,
        BeerStyle::Ale,
        BeerStyle::Wheat,
        BeerStyle::Ipa,
        BeerStyle::PaleAle,
        BeerStyle::Saison,
        BeerStyle::WeizenHell,
        BeerStyle::WeizenDunkel,
    ];

    /// Symbolic name, e.g. `PALE_ALE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
            BeerStyle::WeizenHell => "WEIZEN_HELL",
            BeerStyle::WeizenDunkel => "WEIZEN_DUNKEL",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerStyle {
    type Err = ModelError;

    /// Exact, case-sensitive match on the symbolic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ModelError::Validation(format!("unknown beer style '{s}'")))
    }
}
