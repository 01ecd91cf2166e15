//! 곡소리 감성분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 텍스트 한 건 분석
//! goksori analyze "삼성전자 급등 예상! 상한가 갈듯 매수 기회"
//!
//! # 점수 계산 내역까지 JSON으로
//! echo "절대 안 오른다" | goksori analyze --explain --format json
//!
//! # 댓글 파일(한 줄에 하나) 집계
//! goksori aggregate --file comments.txt --stock 005930 --verbose
//!
//! # 감성 사전 보기
//! goksori lexicon
//! ```

use clap::{Parser, Subcommand};
use tracing::{debug, error};

use goksori_analytics::RuleBasedSentimentAnalyzer;
use goksori_cli::commands::{aggregate, analyze, lexicon};
use goksori_cli::OutputFormat;
use goksori_core::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "goksori")]
#[command(about = "곡소리 - 한국어 주식 토론 감성분석 CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// 로그 레벨 (RUST_LOG가 있으면 무시됨)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 텍스트 한 건 감성분석 (인자가 없으면 stdin)
    Analyze {
        /// 분석할 텍스트
        text: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 매칭 용어와 점수 계산 내역 표시
        #[arg(long)]
        explain: bool,
    },

    /// 댓글 파일 종목 집계 (한 줄에 댓글 하나)
    Aggregate {
        /// 댓글 파일 경로 (`-`이면 stdin)
        #[arg(short = 'i', long)]
        file: String,

        /// 종목 코드 (예: 005930)
        #[arg(short, long)]
        stock: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 댓글별 라벨/점수도 출력
        #[arg(short, long)]
        verbose: bool,
    },

    /// 감성 사전 등급과 가중치 보기
    Lexicon {
        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // 결과는 stdout, 로그는 stderr
    init_logging(LogConfig::new(&cli.log_level).with_stderr(true))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    let analyzer = RuleBasedSentimentAnalyzer::new();

    let rendered = match cli.command {
        Commands::Analyze {
            text,
            format,
            explain,
        } => {
            let format = OutputFormat::parse(&format)?;
            let text = analyze::read_text(text, std::io::stdin().lock())?;
            let output = analyze::analyze(&analyzer, text, explain);
            analyze::render(&output, format)?
        }

        Commands::Aggregate {
            file,
            stock,
            format,
            verbose,
        } => {
            let format = OutputFormat::parse(&format)?;
            let comments = read_comment_file(&file)?;
            debug!(file = %file, count = comments.len(), "Comments loaded");
            let output = aggregate::aggregate(&analyzer, stock, comments, verbose);
            aggregate::render(&output, format)?
        }

        Commands::Lexicon { format } => {
            let format = OutputFormat::parse(&format)?;
            lexicon::render(analyzer.lexicon(), format)?
        }
    };

    println!("{}", rendered);
    Ok(())
}

/// 댓글 파일을 읽습니다.
fn read_comment_file(path: &str) -> anyhow::Result<Vec<String>> {
    let reader = aggregate::open_input(path).map_err(|e| {
        error!(path = %path, error = %e, "Failed to open comments file");
        e
    })?;
    Ok(aggregate::read_comments(reader)?)
}
