use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::season::suggestion::{DietarySuggestion, SeasonBucket};

/// The 24 solar terms, in traditional order starting at 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

use SolarTerm::*;

impl SolarTerm {
    pub const ALL: [SolarTerm; 24] = [
        Lichun, Yushui, Jingzhe, Chunfen, Qingming, Guyu, Lixia, Xiaoman, Mangzhong, Xiazhi,
        Xiaoshu, Dashu, Liqiu, Chushu, Bailu, Qiufen, Hanlu, Shuangjiang, Lidong, Xiaoxue, Daxue,
        Dongzhi, Xiaohan, Dahan,
    ];

    /// Terms ordered by anchor within a calendar year (小寒 on Jan 6 first).
    const CALENDAR_ORDER: [SolarTerm; 24] = [
        Xiaohan, Dahan, Lichun, Yushui, Jingzhe, Chunfen, Qingming, Guyu, Lixia, Xiaoman,
        Mangzhong, Xiazhi, Xiaoshu, Dashu, Liqiu, Chushu, Bailu, Qiufen, Hanlu, Shuangjiang,
        Lidong, Xiaoxue, Daxue, Dongzhi,
    ];

    /// Resolve the term in effect on `date`.
    ///
    /// Scans anchors from the latest in the year backwards and takes the first
    /// one on or before the date. Jan 1-5 precede every anchor and belong to 冬至.
    pub fn from_date(date: NaiveDate) -> SolarTerm {
        let (month, day) = (date.month(), date.day());
        let day_key = month * 100 + day;

        let mut matched = Self::CALENDAR_ORDER
            .iter()
            .rev()
            .find(|term| term.anchor_key() <= day_key)
            .copied()
            .unwrap_or(Xiaohan);

        if month == 1 && day < 6 {
            matched = Dongzhi;
        }

        matched
    }

    /// Term for today's local date.
    pub fn current() -> SolarTerm {
        Self::from_date(Local::now().date_naive())
    }

    /// Approximate (month, day) on which the term begins.
    pub fn anchor(self) -> (u32, u32) {
        match self {
            Lichun => (2, 4),
            Yushui => (2, 19),
            Jingzhe => (3, 6),
            Chunfen => (3, 21),
            Qingming => (4, 5),
            Guyu => (4, 20),
            Lixia => (5, 6),
            Xiaoman => (5, 21),
            Mangzhong => (6, 6),
            Xiazhi => (6, 21),
            Xiaoshu => (7, 7),
            Dashu => (7, 23),
            Liqiu => (8, 7),
            Chushu => (8, 23),
            Bailu => (9, 8),
            Qiufen => (9, 23),
            Hanlu => (10, 8),
            Shuangjiang => (10, 23),
            Lidong => (11, 7),
            Xiaoxue => (11, 22),
            Daxue => (12, 7),
            Dongzhi => (12, 22),
            Xiaohan => (1, 6),
            Dahan => (1, 20),
        }
    }

    fn anchor_key(self) -> u32 {
        let (month, day) = self.anchor();
        month * 100 + day
    }

    pub fn name(self) -> &'static str {
        match self {
            Lichun => "立春",
            Yushui => "雨水",
            Jingzhe => "惊蛰",
            Chunfen => "春分",
            Qingming => "清明",
            Guyu => "谷雨",
            Lixia => "立夏",
            Xiaoman => "小满",
            Mangzhong => "芒种",
            Xiazhi => "夏至",
            Xiaoshu => "小暑",
            Dashu => "大暑",
            Liqiu => "立秋",
            Chushu => "处暑",
            Bailu => "白露",
            Qiufen => "秋分",
            Hanlu => "寒露",
            Shuangjiang => "霜降",
            Lidong => "立冬",
            Xiaoxue => "小雪",
            Daxue => "大雪",
            Dongzhi => "冬至",
            Xiaohan => "小寒",
            Dahan => "大寒",
        }
    }

    /// Typical ambient temperature in °C.
    pub fn estimated_temperature(self) -> f64 {
        match self {
            Xiaohan | Dahan => -2.0,
            Lichun => 3.0,
            Yushui => 6.0,
            Jingzhe => 10.0,
            Chunfen => 13.0,
            Qingming => 16.0,
            Guyu => 19.0,
            Lixia => 23.0,
            Xiaoman => 26.0,
            Mangzhong => 28.0,
            Xiazhi => 30.0,
            Xiaoshu => 32.0,
            Dashu => 34.0,
            Liqiu => 32.0,
            Chushu => 29.0,
            Bailu => 25.0,
            Qiufen => 21.0,
            Hanlu => 16.0,
            Shuangjiang => 11.0,
            Lidong => 7.0,
            Xiaoxue => 3.0,
            Daxue => 0.0,
            Dongzhi => -1.0,
        }
    }

    pub fn bucket(self) -> SeasonBucket {
        match self {
            Lichun | Yushui | Jingzhe => SeasonBucket::EarlySpring,
            Chunfen | Qingming | Guyu => SeasonBucket::MidSpring,
            Lixia | Xiaoman | Mangzhong => SeasonBucket::EarlySummer,
            Xiazhi | Xiaoshu | Dashu => SeasonBucket::PeakSummer,
            Liqiu | Chushu => SeasonBucket::EarlyAutumn,
            Bailu | Qiufen => SeasonBucket::MidAutumn,
            Hanlu | Shuangjiang => SeasonBucket::LateAutumn,
            Lidong | Xiaoxue | Daxue => SeasonBucket::EarlyWinter,
            Dongzhi | Xiaohan | Dahan => SeasonBucket::DeepWinter,
        }
    }

    pub fn dietary_suggestion(self) -> DietarySuggestion {
        self.bucket().suggestion()
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
