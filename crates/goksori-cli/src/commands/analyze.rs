//! 텍스트 한 건 감성분석.

use anyhow::Result;
use serde::Serialize;
use std::io::Read;

use goksori_analytics::{RuleBasedSentimentAnalyzer, ScoreBreakdown};
use goksori_core::{GoksoriError, GoksoriResult, SentimentReport};

use super::OutputFormat;

/// 분석 출력.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    #[serde(flatten)]
    pub report: SentimentReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// 분석할 텍스트를 인자 또는 입력 스트림에서 가져옵니다.
///
/// 빈 텍스트는 거부합니다.
pub fn read_text<R: Read>(arg: Option<String>, mut input: R) -> GoksoriResult<String> {
    let text = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if text.trim().is_empty() {
        return Err(GoksoriError::InvalidInput(
            "분석할 텍스트가 비어 있습니다".to_string(),
        ));
    }

    Ok(text)
}

/// 텍스트를 분석합니다.
///
/// `explain`이면 점수 계산 내역을 함께 담습니다.
pub fn analyze(analyzer: &RuleBasedSentimentAnalyzer, text: String, explain: bool) -> AnalyzeOutput {
    if explain {
        let breakdown = analyzer.explain(&text);
        AnalyzeOutput {
            report: SentimentReport::new(text, &breakdown.result),
            breakdown: Some(breakdown),
        }
    } else {
        let result = analyzer.analyze(&text);
        AnalyzeOutput {
            report: SentimentReport::new(text, &result),
            breakdown: None,
        }
    }
}

/// 분석 결과 출력 문자열.
pub fn render(output: &AnalyzeOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Table => Ok(format_table(output)),
    }
}

fn format_table(output: &AnalyzeOutput) -> String {
    let report = &output.report;
    let mut out = String::new();

    out.push_str(&format!("텍스트:     {}\n", report.text));
    out.push_str(&format!(
        "라벨:       {} ({})\n",
        report.label.display_name(),
        report.label
    ));
    out.push_str(&format!("원점수:     {:.2}\n", report.score));
    out.push_str(&format!(
        "감성 점수:  {:.1} {} (등급 {})\n",
        report.normalized_score, report.emoji, report.grade
    ));
    out.push_str(&format!("신뢰도:     {:.2}", report.confidence));

    if let Some(breakdown) = &output.breakdown {
        out.push_str("\n\n");
        out.push_str(&format!("정규화:     {}\n", breakdown.normalized_text));
        out.push_str(&format!(
            "부정어:     {}\n",
            if breakdown.negated { "있음" } else { "없음" }
        ));
        out.push_str(&format!("{:<12} {:<18} {:>8}\n", "TERM", "TIER", "SCORE"));
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for matched in &breakdown.matched_terms {
            out.push_str(&format!(
                "{:<12} {:<18} {:>+8.2}\n",
                matched.term,
                matched.tier.as_str(),
                matched.contribution
            ));
        }
        if breakdown.emoticon_adjustment != 0.0 {
            out.push_str(&format!(
                "{:<12} {:<18} {:>+8.2}\n",
                "(emoticon)", "-", breakdown.emoticon_adjustment
            ));
        }
        out.push_str(&format!("합계 (클램프 전): {:+.2}", breakdown.raw_score));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_prefers_argument() {
        let text = read_text(Some("급등".to_string()), "무시됨".as_bytes()).unwrap();
        assert_eq!(text, "급등");
    }

    #[test]
    fn test_read_text_from_input() {
        let text = read_text(None, "매수 기회\n".as_bytes()).unwrap();
        assert_eq!(text, "매수 기회");
    }

    #[test]
    fn test_read_text_rejects_blank() {
        let err = read_text(None, " \n".as_bytes()).unwrap_err();
        assert!(err.is_client_error());

        assert!(read_text(Some("   ".to_string()), std::io::empty()).is_err());
    }

    #[test]
    fn test_analyze_with_explain() {
        let analyzer = RuleBasedSentimentAnalyzer::new();
        let plain = analyze(&analyzer, "절대 안 오른다".to_string(), false);
        let explained = analyze(&analyzer, "절대 안 오른다".to_string(), true);

        assert!(plain.breakdown.is_none());
        assert_eq!(plain.report, explained.report);

        let breakdown = explained.breakdown.unwrap();
        assert!(breakdown.negated);
        assert_eq!(breakdown.matched_terms.len(), 1);
    }

    #[test]
    fn test_render_json_flattens_report() {
        let analyzer = RuleBasedSentimentAnalyzer::new();
        let output = analyze(&analyzer, "급등".to_string(), false);
        let json: serde_json::Value =
            serde_json::from_str(&render(&output, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["label"], "positive");
        assert_eq!(json["grade"], "A");
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn test_render_table_with_breakdown() {
        let analyzer = RuleBasedSentimentAnalyzer::new();
        let output = analyze(&analyzer, "급락 ㅠㅠ".to_string(), true);
        let table = render(&output, OutputFormat::Table).unwrap();

        assert!(table.contains("급락"));
        assert!(table.contains("strong_negative"));
        assert!(table.contains("(emoticon)"));
        assert!(table.contains("부정"));
    }
}
