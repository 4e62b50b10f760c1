//! Beverage categories
//!
//! Closed set. The storage code is the uppercase variant name, which is the
//! format existing databases hold; `label` is the Japanese display name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of beverage a record is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkType {
    Sake,
    Beer,
    Whiskey,
    Shochu,
    Wine,
    Vodka,
    Gin,
    Rum,
    Liqueur,
}

impl DrinkType {
    /// Every drink type, in display order
    pub const ALL: [DrinkType; 9] = [
        DrinkType::Sake,
        DrinkType::Beer,
        DrinkType::Whiskey,
        DrinkType::Shochu,
        DrinkType::Wine,
        DrinkType::Vodka,
        DrinkType::Gin,
        DrinkType::Rum,
        DrinkType::Liqueur,
    ];

    /// Stable storage code
    pub fn code(self) -> &'static str {
        match self {
            DrinkType::Sake => "SAKE",
            DrinkType::Beer => "BEER",
            DrinkType::Whiskey => "WHISKEY",
            DrinkType::Shochu => "SHOCHU",
            DrinkType::Wine => "WINE",
            DrinkType::Vodka => "VODKA",
            DrinkType::Gin => "GIN",
            DrinkType::Rum => "RUM",
            DrinkType::Liqueur => "LIQUEUR",
        }
    }

    /// Japanese display label
    pub fn label(self) -> &'static str {
        match self {
            DrinkType::Sake => "日本酒",
            DrinkType::Beer => "ビール",
            DrinkType::Whiskey => "ウイスキー",
            DrinkType::Shochu => "焼酎",
            DrinkType::Wine => "ワイン",
            DrinkType::Vodka => "ウォッカ",
            DrinkType::Gin => "ジン",
            DrinkType::Rum => "ラム",
            DrinkType::Liqueur => "リキュール",
        }
    }

    /// Look up a drink type by its storage code
    pub fn from_code(code: &str) -> Option<DrinkType> {
        DrinkType::ALL.iter().find(|t| t.code() == code).copied()
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
