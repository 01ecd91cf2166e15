//! 댓글 파일 집계.
//!
//! 한 줄에 댓글 하나씩 읽고 빈 줄은 건너뜁니다.

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::info;

use goksori_analytics::{RuleBasedSentimentAnalyzer, SentimentAggregator};
use goksori_core::{sentiment_span, GoksoriResult, Grade, SentimentReport, Trend};

use super::{truncate, OutputFormat};

/// 종목 집계 출력.
#[derive(Debug, Serialize)]
pub struct AggregateOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
    pub score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub total_count: usize,
    pub trend: Trend,
    pub grade: Grade,
    pub emoji: String,
    /// `--verbose`일 때만 채워짐
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<SentimentReport>,
}

/// 경로를 열어 줄 단위 리더를 반환합니다. `-`는 stdin입니다.
pub fn open_input(path: &str) -> GoksoriResult<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(std::io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// 댓글 목록을 읽습니다.
pub fn read_comments<R: BufRead>(input: R) -> GoksoriResult<Vec<String>> {
    let mut comments = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            comments.push(line.to_string());
        }
    }
    Ok(comments)
}

/// 댓글들을 분석하고 집계합니다.
pub fn aggregate(
    analyzer: &RuleBasedSentimentAnalyzer,
    stock_code: Option<String>,
    comments: Vec<String>,
    verbose: bool,
) -> AggregateOutput {
    let span = sentiment_span!("aggregate", stock_code.as_deref().unwrap_or("-"), "cli");
    let _guard = span.enter();

    let results = analyzer.analyze_batch(&comments);
    let summary = SentimentAggregator::aggregate(&results);

    info!(
        total = summary.total_count,
        score = summary.score,
        trend = %summary.trend,
        "Comments aggregated"
    );

    let reports = if verbose {
        comments
            .into_iter()
            .zip(&results)
            .map(|(text, result)| SentimentReport::new(text, result))
            .collect()
    } else {
        Vec::new()
    };

    AggregateOutput {
        stock_code,
        score: summary.score,
        positive_count: summary.positive_count,
        negative_count: summary.negative_count,
        neutral_count: summary.neutral_count,
        total_count: summary.total_count,
        trend: summary.trend,
        grade: summary.grade(),
        emoji: summary.emoji().to_string(),
        comments: reports,
    }
}

/// 집계 결과 출력 문자열.
pub fn render(output: &AggregateOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Table => Ok(format_table(output)),
    }
}

fn format_table(output: &AggregateOutput) -> String {
    let mut out = String::new();

    if !output.comments.is_empty() {
        out.push_str(&format!("{:<40} {:<10} {:>7} {:>7}\n", "COMMENT", "LABEL", "SCORE", "NORM"));
        out.push_str(&"-".repeat(67));
        out.push('\n');
        for report in &output.comments {
            out.push_str(&format!(
                "{:<40} {:<10} {:>7.2} {:>7.1}\n",
                truncate(&report.text, 40),
                report.label.as_str(),
                report.score,
                report.normalized_score
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "종목:       {}\n",
        output.stock_code.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "감성 점수:  {:.1} {} (등급 {})\n",
        output.score, output.emoji, output.grade
    ));
    out.push_str(&format!(
        "추세:       {} {}\n",
        output.trend.arrow(),
        output.trend
    ));
    out.push_str(&format!(
        "댓글:       {}개 (긍정 {}, 부정 {}, 중립 {})",
        output.total_count, output.positive_count, output.negative_count, output.neutral_count
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_comments_skips_blank_lines() {
        let input = "급등예상\n\n   \n매수기회\r\n상한가갈듯\n";
        let comments = read_comments(input.as_bytes()).unwrap();
        assert_eq!(comments, vec!["급등예상", "매수기회", "상한가갈듯"]);
    }

    #[test]
    fn test_open_input_missing_file() {
        let err = open_input("/nonexistent/comments.txt").err().unwrap();
        assert!(err.to_string().contains("입출력"));
    }

    #[test]
    fn test_aggregate_summary_only() {
        let analyzer = RuleBasedSentimentAnalyzer::new();
        let comments = vec!["급등예상".to_string(), "매수기회".to_string()];
        let output = aggregate(&analyzer, Some("005930".to_string()), comments, false);

        assert_eq!(output.total_count, 2);
        assert_eq!(output.trend, Trend::Up);
        assert!(output.comments.is_empty());

        let json: serde_json::Value =
            serde_json::from_str(&render(&output, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["stock_code"], "005930");
        assert_eq!(json["trend"], "up");
        assert!(json.get("comments").is_none());
    }

    #[test]
    fn test_aggregate_verbose_lists_comments() {
        let analyzer = RuleBasedSentimentAnalyzer::new();
        let comments = vec!["폭락".to_string(), "그냥그래".to_string()];
        let output = aggregate(&analyzer, None, comments, true);

        assert_eq!(output.comments.len(), 2);
        assert_eq!(output.comments[0].text, "폭락");
        assert_eq!(output.comments[1].label.as_str(), "neutral");

        let table = render(&output, OutputFormat::Table).unwrap();
        assert!(table.contains("COMMENT"));
        assert!(table.contains("폭락"));
        assert!(table.contains("종목:       -"));
    }

    #[test]
    fn test_aggregate_empty_input() {
        let analyzer = RuleBasedSentimentAnalyzer::new();
        let output = aggregate(&analyzer, None, Vec::new(), true);

        assert_eq!(output.score, 50.0);
        assert_eq!(output.trend, Trend::Neutral);
        assert_eq!(output.grade, Grade::C);
    }
}
