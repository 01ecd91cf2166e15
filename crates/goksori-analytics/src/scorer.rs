//! 규칙 기반 한국어 주식 댓글 감성분석기.
//!
//! # 계산 순서
//!
//! 1. 빈 문자열/공백만 있는 입력 → 고정 중립 결과
//! 2. 전처리: 단어 문자, 공백, 한글 음절(가-힣) 외의 문자를 공백으로 치환 후 trim
//! 3. 부정어 검사: 텍스트 전체에서 부정어가 하나라도 있으면 계수 -0.7, 없으면 1.0
//! 4. 등급별 가산: 매칭된 용어마다 가중치를 더함 (긍정 등급에만 부정어 계수 적용)
//! 5. 이모티콘 보정: 웃음 +0.1, 울음 -0.1 (각각 한 번)
//! 6. [-1, 1] 클램프 후 라벨/신뢰도/정규화 점수 산출
//!
//! 한 텍스트가 여러 등급의 용어에 동시에 매칭될 수 있으며 기여분은 모두 합산됩니다.

use goksori_core::{SentimentResult, StockSentimentSummary};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::aggregator::SentimentAggregator;
use crate::lexicon::{Lexicon, Tier};

/// 부정어가 있을 때 긍정 기여분에 곱하는 계수.
pub const NEGATION_FACTOR: f64 = -0.7;

/// 제거 대상 문자 패턴 (단어 문자, 공백, 한글 음절 외 전부).
static SYMBOL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s가-힣]").expect("symbol pattern must compile"));

/// 점수에 기여한 사전 용어 하나.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedTerm {
    /// 매칭된 용어
    pub term: &'static str,
    /// 용어가 속한 등급
    pub tier: Tier,
    /// 부정어 계수까지 반영한 실제 기여분
    pub contribution: f64,
}

/// 점수 계산 내역.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// 전처리된 텍스트
    pub normalized_text: String,
    /// 부정어 검출 여부
    pub negated: bool,
    /// 매칭된 용어와 기여분
    pub matched_terms: Vec<MatchedTerm>,
    /// 이모티콘 보정치
    pub emoticon_adjustment: f64,
    /// 클램프 전 누적 점수
    pub raw_score: f64,
    /// 최종 결과
    pub result: SentimentResult,
}

/// 규칙 기반 감성분석기.
///
/// 사전 외에는 상태가 없으므로 `Arc`로 감싸 여러 요청에서 동시에 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSentimentAnalyzer {
    lexicon: Lexicon,
}

impl RuleBasedSentimentAnalyzer {
    /// 기본 한국어 주식 사전을 쓰는 분석기.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::korean_stock())
    }

    /// 지정한 사전을 쓰는 분석기.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// 텍스트 한 건을 분석합니다.
    ///
    /// 어떤 입력에도 실패하지 않습니다.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::neutral();
        }

        let normalized = Self::preprocess(text);
        let score = self.calculate_score(&normalized);
        let result = SentimentResult::from_score(score);

        trace!(
            score = result.score,
            label = %result.label,
            normalized_score = result.normalized_score,
            "Text analyzed"
        );

        result
    }

    /// 점수 계산 내역과 함께 분석합니다.
    ///
    /// 결과는 [`analyze`](Self::analyze)와 동일합니다.
    pub fn explain(&self, text: &str) -> ScoreBreakdown {
        if text.trim().is_empty() {
            return ScoreBreakdown {
                normalized_text: String::new(),
                negated: false,
                matched_terms: Vec::new(),
                emoticon_adjustment: 0.0,
                raw_score: 0.0,
                result: SentimentResult::neutral(),
            };
        }

        let normalized_text = Self::preprocess(text);
        let negated = self.lexicon.has_negation(&normalized_text);
        let negation_factor = Self::negation_factor(negated);

        let matched_terms: Vec<MatchedTerm> = Tier::ALL
            .iter()
            .flat_map(|&tier| {
                let factor = if tier.is_negatable() { negation_factor } else { 1.0 };
                self.lexicon
                    .matches(tier, &normalized_text)
                    .map(move |term| MatchedTerm {
                        term,
                        tier,
                        contribution: tier.weight() * factor,
                    })
            })
            .collect();

        let emoticon_adjustment = self.lexicon.emoticon_adjustment(&normalized_text);
        let raw_score = matched_terms.iter().map(|m| m.contribution).sum::<f64>() + emoticon_adjustment;

        ScoreBreakdown {
            result: SentimentResult::from_score(raw_score),
            normalized_text,
            negated,
            matched_terms,
            emoticon_adjustment,
            raw_score,
        }
    }

    /// 여러 텍스트를 순서대로 분석합니다.
    pub fn analyze_batch<I, S>(&self, texts: I) -> Vec<SentimentResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// 한 종목의 댓글들을 분석하고 집계합니다.
    pub fn analyze_stock<I, S>(&self, comments: I) -> StockSentimentSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let results = self.analyze_batch(comments);
        let summary = SentimentAggregator::aggregate(&results);

        debug!(
            total = summary.total_count,
            score = summary.score,
            trend = %summary.trend,
            "Stock comments analyzed"
        );

        summary
    }

    /// 특수문자를 공백으로 치환하고 앞뒤 공백을 제거합니다.
    ///
    /// 한글 자모(ㅋ, ㅠ 등)는 단어 문자이므로 이모티콘은 남습니다.
    pub fn preprocess(text: &str) -> String {
        SYMBOL_PATTERN.replace_all(text, " ").trim().to_string()
    }

    fn negation_factor(negated: bool) -> f64 {
        if negated {
            NEGATION_FACTOR
        } else {
            1.0
        }
    }

    /// 클램프 전 누적 점수.
    fn calculate_score(&self, text: &str) -> f64 {
        let negation_factor = Self::negation_factor(self.lexicon.has_negation(text));

        let mut score = 0.0;
        for tier in Tier::ALL {
            let factor = if tier.is_negatable() { negation_factor } else { 1.0 };
            for _ in self.lexicon.matches(tier, text) {
                score += tier.weight() * factor;
            }
        }

        score + self.lexicon.emoticon_adjustment(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goksori_core::SentimentLabel;

    fn analyzer() -> RuleBasedSentimentAnalyzer {
        RuleBasedSentimentAnalyzer::new()
    }

    #[test]
    fn test_strong_positive_text() {
        let result = analyzer().analyze("삼성전자 급등 예상! 상한가 갈듯 매수 기회");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.5);
        assert!(result.normalized_score > 60.0);
    }

    #[test]
    fn test_strong_negative_text() {
        let result = analyzer().analyze("이거 폭락할듯 손절 각 사기 종목임");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < -0.5);
        assert!(result.normalized_score < 40.0);
    }

    #[test]
    fn test_neutral_text() {
        let result = analyzer().analyze("오늘 거래량 어떻게 됨?");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_and_whitespace() {
        for text in ["", "   ", "\n\t "] {
            let result = analyzer().analyze(text);
            assert_eq!(result, SentimentResult::neutral());
            assert_eq!(result.confidence, 0.5);
        }
    }

    #[test]
    fn test_symbols_only_is_not_the_empty_case() {
        // 전처리 후 비어도 빈 입력 분기와 달리 신뢰도 0.3
        let result = analyzer().analyze("?!...");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!((result.confidence - 0.3).abs() < 1e-12);
        assert_eq!(result.normalized_score, 50.0);
    }

    #[test]
    fn test_negation_reversal() {
        let pos = analyzer().analyze("급등할 것 같다");
        let neg = analyzer().analyze("급등 안 할 것 같다");
        assert!(pos.score > neg.score);
        assert!((neg.score - (-0.56)).abs() < 1e-9);
        assert_eq!(neg.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_negation_does_not_touch_negative_tiers() {
        let plain = analyzer().analyze("하락");
        let negated = analyzer().analyze("하락 아니");
        assert!((plain.score - negated.score).abs() < 1e-12);
    }

    #[test]
    fn test_emoticons_survive_preprocessing() {
        assert_eq!(RuleBasedSentimentAnalyzer::preprocess("ㅋㅋㅋ!!"), "ㅋㅋㅋ");
        assert_eq!(RuleBasedSentimentAnalyzer::preprocess("ㅠㅠ..."), "ㅠㅠ");

        let laugh = analyzer().analyze("오늘 장 ㅋㅋ");
        assert!((laugh.score - 0.1).abs() < 1e-12);
        let cry = analyzer().analyze("오늘 장 ㅠㅠ");
        assert!((cry.score + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_preprocess_strips_symbols() {
        assert_eq!(
            RuleBasedSentimentAnalyzer::preprocess("  급등!! (상한가) 🚀 "),
            "급등    상한가"
        );
    }

    #[test]
    fn test_multiple_tiers_sum() {
        // 매수 +0.8, 위험 -0.3
        let result = analyzer().analyze("매수 위험");
        assert!((result.score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_explain_matches_analyze() {
        let texts = [
            "삼성전자 급등 예상! 상한가 갈듯 매수 기회",
            "급등 안 할 것 같다 ㅠㅠ",
            "외인매수 들어옴 ㅋㅋ",
            "",
            "그냥그래",
        ];
        for text in texts {
            let breakdown = analyzer().explain(text);
            assert_eq!(breakdown.result, analyzer().analyze(text), "text: {}", text);
        }
    }

    #[test]
    fn test_explain_details() {
        let breakdown = analyzer().explain("급등 안 할듯 ㅋㅋ");
        assert!(breakdown.negated);
        assert_eq!(breakdown.matched_terms.len(), 1);
        assert_eq!(breakdown.matched_terms[0].term, "급등");
        assert!((breakdown.matched_terms[0].contribution + 0.56).abs() < 1e-9);
        assert!((breakdown.emoticon_adjustment - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_stock() {
        let summary = analyzer().analyze_stock(vec!["급등예상", "폭락할듯", "그냥그래"]);
        assert_eq!(summary.total_count, 3);
        assert!((0.0..=100.0).contains(&summary.score));
    }
}
