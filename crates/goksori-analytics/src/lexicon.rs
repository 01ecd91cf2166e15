//! 한국어 주식 감성 사전.
//!
//! 네 개의 가중치 등급과 부정어, 이모티콘 목록으로 구성됩니다.
//! 모든 용어는 토큰 단위가 아니라 부분 문자열 포함 여부로 매칭합니다.
//! 따라서 "외인매수"가 있는 글은 "매수"에도 함께 매칭됩니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 사전 가중치 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 강한 긍정 (+0.8)
    StrongPositive,
    /// 약한 긍정 (+0.3)
    WeakPositive,
    /// 강한 부정 (-0.8)
    StrongNegative,
    /// 약한 부정 (-0.3)
    WeakNegative,
}

impl Tier {
    /// 평가 순서대로 나열한 전체 등급.
    pub const ALL: [Tier; 4] = [
        Tier::StrongPositive,
        Tier::WeakPositive,
        Tier::StrongNegative,
        Tier::WeakNegative,
    ];

    /// 용어 하나가 매칭될 때 더해지는 가중치.
    pub fn weight(self) -> f64 {
        match self {
            Tier::StrongPositive => 0.8,
            Tier::WeakPositive => 0.3,
            Tier::StrongNegative => -0.8,
            Tier::WeakNegative => -0.3,
        }
    }

    /// 부정어 계수가 적용되는 등급인지 여부.
    ///
    /// 긍정 등급에만 적용되고 부정 등급은 부정어가 있어도 그대로 더해집니다.
    pub fn is_negatable(self) -> bool {
        matches!(self, Tier::StrongPositive | Tier::WeakPositive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::StrongPositive => "strong_positive",
            Tier::WeakPositive => "weak_positive",
            Tier::StrongNegative => "strong_negative",
            Tier::WeakNegative => "weak_negative",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STRONG_POSITIVE: &[&str] = &[
    "급등", "폭등", "상한가", "대박", "매수", "강추", "올라간다", "오른다",
    "ㄱㄷ", "기대", "호재", "실적개선", "흑자전환", "신고가", "돌파",
    "저평가", "매집", "수급좋음", "외인매수", "기관매수",
];

const WEAK_POSITIVE: &[&str] = &[
    "좋아", "좋은", "상승", "오를것", "긍정", "기회", "저점", "반등",
    "회복", "괜찮", "성장", "수익", "배당", "안전", "추천",
];

const STRONG_NEGATIVE: &[&str] = &[
    "급락", "폭락", "하한가", "손절", "망했", "팔아라", "폭탄", "쓰레기",
    "사기", "악재", "적자", "파산", "부도", "관리종목", "상장폐지",
    "먹튀", "작전", "개잡주",
];

const WEAK_NEGATIVE: &[&str] = &[
    "하락", "내려", "부정", "걱정", "위험", "손실", "불안", "힘들",
    "나쁜", "문제", "우려", "주의", "조심",
];

const NEGATION_MARKERS: &[&str] = &["안", "못", "없", "아니", "절대", "결코", "전혀"];

const LAUGHING_EMOTICONS: &[&str] = &["ㅋㅋ", "ㅎㅎ"];

const CRYING_EMOTICONS: &[&str] = &["ㅠㅠ", "ㅜㅜ"];

/// 웃음 이모티콘 보정치.
pub const LAUGHING_BONUS: f64 = 0.1;

/// 울음 이모티콘 보정치.
pub const CRYING_PENALTY: f64 = -0.1;

/// 기본 한국어 주식 커뮤니티 사전.
pub const KOREAN_STOCK_LEXICON: Lexicon = Lexicon {
    strong_positive: STRONG_POSITIVE,
    weak_positive: WEAK_POSITIVE,
    strong_negative: STRONG_NEGATIVE,
    weak_negative: WEAK_NEGATIVE,
    negation_markers: NEGATION_MARKERS,
    laughing: LAUGHING_EMOTICONS,
    crying: CRYING_EMOTICONS,
};

/// 읽기 전용 감성 사전.
///
/// 정적 테이블에 대한 참조만 가지므로 복사 비용이 없고 스레드 간 공유가 자유롭습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    strong_positive: &'static [&'static str],
    weak_positive: &'static [&'static str],
    strong_negative: &'static [&'static str],
    weak_negative: &'static [&'static str],
    negation_markers: &'static [&'static str],
    laughing: &'static [&'static str],
    crying: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        KOREAN_STOCK_LEXICON
    }
}

impl Lexicon {
    /// 기본 한국어 주식 사전.
    pub const fn korean_stock() -> Self {
        KOREAN_STOCK_LEXICON
    }

    /// 사용자 정의 용어 테이블로 사전을 만듭니다.
    ///
    /// 이모티콘 목록은 기본 사전의 것을 그대로 사용합니다.
    pub const fn new(
        strong_positive: &'static [&'static str],
        weak_positive: &'static [&'static str],
        strong_negative: &'static [&'static str],
        weak_negative: &'static [&'static str],
        negation_markers: &'static [&'static str],
    ) -> Self {
        Self {
            strong_positive,
            weak_positive,
            strong_negative,
            weak_negative,
            negation_markers,
            laughing: LAUGHING_EMOTICONS,
            crying: CRYING_EMOTICONS,
        }
    }

    /// 등급별 용어 목록.
    pub fn terms(&self, tier: Tier) -> &'static [&'static str] {
        match tier {
            Tier::StrongPositive => self.strong_positive,
            Tier::WeakPositive => self.weak_positive,
            Tier::StrongNegative => self.strong_negative,
            Tier::WeakNegative => self.weak_negative,
        }
    }

    pub fn negation_markers(&self) -> &'static [&'static str] {
        self.negation_markers
    }

    /// 텍스트에 포함된 해당 등급의 용어들.
    ///
    /// 같은 용어가 여러 번 등장해도 한 번만 나옵니다.
    pub fn matches<'t>(&self, tier: Tier, text: &'t str) -> impl Iterator<Item = &'static str> + 't {
        self.terms(tier)
            .iter()
            .copied()
            .filter(move |term| text.contains(term))
    }

    /// 텍스트 어디든 부정어가 하나라도 있는지 여부.
    pub fn has_negation(&self, text: &str) -> bool {
        self.negation_markers.iter().any(|marker| text.contains(marker))
    }

    /// 이모티콘 보정치 합계.
    ///
    /// 웃음/울음 이모티콘은 각각 등장 횟수와 관계없이 한 번만 반영됩니다.
    pub fn emoticon_adjustment(&self, text: &str) -> f64 {
        let mut adjustment = 0.0;
        if self.laughing.iter().any(|e| text.contains(e)) {
            adjustment += LAUGHING_BONUS;
        }
        if self.crying.iter().any(|e| text.contains(e)) {
            adjustment += CRYING_PENALTY;
        }
        adjustment
    }

    /// 가중치 등급 전체의 용어 수.
    pub fn term_count(&self) -> usize {
        Tier::ALL.iter().map(|tier| self.terms(*tier).len()).sum()
    }
}
