//! Japan's 47 prefectures
//!
//! Each prefecture carries a stable code (`JP-01`..`JP-47`) used for
//! storage, and a kanji display name. The set is closed; storage always
//! holds the code, never the display name.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One of Japan's 47 first-level administrative regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prefecture {
    Hokkaido,
    Aomori,
    Iwate,
    Miyagi,
    Akita,
    Yamagata,
    Fukushima,
    Ibaraki,
    Tochigi,
    Gunma,
    Saitama,
    Chiba,
    Tokyo,
    Kanagawa,
    Niigata,
    Toyama,
    Ishikawa,
    Fukui,
    Yamanashi,
    Nagano,
    Gifu,
    Shizuoka,
    Aichi,
    Mie,
    Shiga,
    Kyoto,
    Osaka,
    Hyogo,
    Nara,
    Wakayama,
    Tottori,
    Shimane,
    Okayama,
    Hiroshima,
    Yamaguchi,
    Tokushima,
    Kagawa,
    Ehime,
    Kochi,
    Fukuoka,
    Saga,
    Nagasaki,
    Kumamoto,
    Oita,
    Miyazaki,
    Kagoshima,
    Okinawa,
}

static CODE_MAP: Lazy<HashMap<&'static str, Prefecture>> =
    Lazy::new(|| Prefecture::ALL.iter().map(|p| (p.code(), *p)).collect());

impl Prefecture {
    /// Every prefecture, in code order (JP-01 first)
    pub const ALL: [Prefecture; 47] = [
        Prefecture::Hokkaido,
        Prefecture::Aomori,
        Prefecture::Iwate,
        Prefecture::Miyagi,
        Prefecture::Akita,
        Prefecture::Yamagata,
        Prefecture::Fukushima,
        Prefecture::Ibaraki,
        Prefecture::Tochigi,
        Prefecture::Gunma,
        Prefecture::Saitama,
        Prefecture::Chiba,
        Prefecture::Tokyo,
        Prefecture::Kanagawa,
        Prefecture::Niigata,
        Prefecture::Toyama,
        Prefecture::Ishikawa,
        Prefecture::Fukui,
        Prefecture::Yamanashi,
        Prefecture::Nagano,
        Prefecture::Gifu,
        Prefecture::Shizuoka,
        Prefecture::Aichi,
        Prefecture::Mie,
        Prefecture::Shiga,
        Prefecture::Kyoto,
        Prefecture::Osaka,
        Prefecture::Hyogo,
        Prefecture::Nara,
        Prefecture::Wakayama,
        Prefecture::Tottori,
        Prefecture::Shimane,
        Prefecture::Okayama,
        Prefecture::Hiroshima,
        Prefecture::Yamaguchi,
        Prefecture::Tokushima,
        Prefecture::Kagawa,
        Prefecture::Ehime,
        Prefecture::Kochi,
        Prefecture::Fukuoka,
        Prefecture::Saga,
        Prefecture::Nagasaki,
        Prefecture::Kumamoto,
        Prefecture::Oita,
        Prefecture::Miyazaki,
        Prefecture::Kagoshima,
        Prefecture::Okinawa,
    ];

    /// Number of prefectures
    pub const COUNT: usize = 47;

    /// Stable storage code (`JP-01`..`JP-47`)
    pub fn code(self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "JP-01",
            Prefecture::Aomori => "JP-02",
            Prefecture::Iwate => "JP-03",
            Prefecture::Miyagi => "JP-04",
            Prefecture::Akita => "JP-05",
            Prefecture::Yamagata => "JP-06",
            Prefecture::Fukushima => "JP-07",
            Prefecture::Ibaraki => "JP-08",
            Prefecture::Tochigi => "JP-09",
            Prefecture::Gunma => "JP-10",
            Prefecture::Saitama => "JP-11",
            Prefecture::Chiba => "JP-12",
            Prefecture::Tokyo => "JP-13",
            Prefecture::Kanagawa => "JP-14",
            Prefecture::Niigata => "JP-15",
            Prefecture::Toyama => "JP-16",
            Prefecture::Ishikawa => "JP-17",
            Prefecture::Fukui => "JP-18",
            Prefecture::Yamanashi => "JP-19",
            Prefecture::Nagano => "JP-20",
            Prefecture::Gifu => "JP-21",
            Prefecture::Shizuoka => "JP-22",
            Prefecture::Aichi => "JP-23",
            Prefecture::Mie => "JP-24",
            Prefecture::Shiga => "JP-25",
            Prefecture::Kyoto => "JP-26",
            Prefecture::Osaka => "JP-27",
            Prefecture::Hyogo => "JP-28",
            Prefecture::Nara => "JP-29",
            Prefecture::Wakayama => "JP-30",
            Prefecture::Tottori => "JP-31",
            Prefecture::Shimane => "JP-32",
            Prefecture::Okayama => "JP-33",
            Prefecture::Hiroshima => "JP-34",
            Prefecture::Yamaguchi => "JP-35",
            Prefecture::Tokushima => "JP-36",
            Prefecture::Kagawa => "JP-37",
            Prefecture::Ehime => "JP-38",
            Prefecture::Kochi => "JP-39",
            Prefecture::Fukuoka => "JP-40",
            Prefecture::Saga => "JP-41",
            Prefecture::Nagasaki => "JP-42",
            Prefecture::Kumamoto => "JP-43",
            Prefecture::Oita => "JP-44",
            Prefecture::Miyazaki => "JP-45",
            Prefecture::Kagoshima => "JP-46",
            Prefecture::Okinawa => "JP-47",
        }
    }

    /// Kanji display name
    pub fn name(self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "北海道",
            Prefecture::Aomori => "青森県",
            Prefecture::Iwate => "岩手県",
            Prefecture::Miyagi => "宮城県",
            Prefecture::Akita => "秋田県",
            Prefecture::Yamagata => "山形県",
            Prefecture::Fukushima => "福島県",
            Prefecture::Ibaraki => "茨城県",
            Prefecture::Tochigi => "栃木県",
            Prefecture::Gunma => "群馬県",
            Prefecture::Saitama => "埼玉県",
            Prefecture::Chiba => "千葉県",
            Prefecture::Tokyo => "東京都",
            Prefecture::Kanagawa => "神奈川県",
            Prefecture::Niigata => "新潟県",
            Prefecture::Toyama => "富山県",
            Prefecture::Ishikawa => "石川県",
            Prefecture::Fukui => "福井県",
            Prefecture::Yamanashi => "山梨県",
            Prefecture::Nagano => "長野県",
            Prefecture::Gifu => "岐阜県",
            Prefecture::Shizuoka => "静岡県",
            Prefecture::Aichi => "愛知県",
            Prefecture::Mie => "三重県",
            Prefecture::Shiga => "滋賀県",
            Prefecture::Kyoto => "京都府",
            Prefecture::Osaka => "大阪府",
            Prefecture::Hyogo => "兵庫県",
            Prefecture::Nara => "奈良県",
            Prefecture::Wakayama => "和歌山県",
            Prefecture::Tottori => "鳥取県",
            Prefecture::Shimane => "島根県",
            Prefecture::Okayama => "岡山県",
            Prefecture::Hiroshima => "広島県",
            Prefecture::Yamaguchi => "山口県",
            Prefecture::Tokushima => "徳島県",
            Prefecture::Kagawa => "香川県",
            Prefecture::Ehime => "愛媛県",
            Prefecture::Kochi => "高知県",
            Prefecture::Fukuoka => "福岡県",
            Prefecture::Saga => "佐賀県",
            Prefecture::Nagasaki => "長崎県",
            Prefecture::Kumamoto => "熊本県",
            Prefecture::Oita => "大分県",
            Prefecture::Miyazaki => "宮崎県",
            Prefecture::Kagoshima => "鹿児島県",
            Prefecture::Okinawa => "沖縄県",
        }
    }

    /// Look up a prefecture by its stable code
    pub fn from_code(code: &str) -> Option<Prefecture> {
        CODE_MAP.get(code).copied()
    }

    /// Look up a prefecture by its kanji display name
    pub fn from_name(name: &str) -> Option<Prefecture> {
        Prefecture::ALL.iter().find(|p| p.name() == name).copied()
    }
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
