//! 감성 사전 조회.

use anyhow::Result;
use serde::Serialize;

use goksori_analytics::{Lexicon, Tier, CRYING_PENALTY, LAUGHING_BONUS, NEGATION_FACTOR};

use super::OutputFormat;

#[derive(Debug, Serialize)]
struct TierEntry {
    tier: Tier,
    weight: f64,
    negatable: bool,
    terms: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct LexiconDump {
    tiers: Vec<TierEntry>,
    negation_markers: &'static [&'static str],
    negation_factor: f64,
    laughing_bonus: f64,
    crying_penalty: f64,
    term_count: usize,
}

fn dump(lexicon: &Lexicon) -> LexiconDump {
    LexiconDump {
        tiers: Tier::ALL
            .iter()
            .map(|&tier| TierEntry {
                tier,
                weight: tier.weight(),
                negatable: tier.is_negatable(),
                terms: lexicon.terms(tier),
            })
            .collect(),
        negation_markers: lexicon.negation_markers(),
        negation_factor: NEGATION_FACTOR,
        laughing_bonus: LAUGHING_BONUS,
        crying_penalty: CRYING_PENALTY,
        term_count: lexicon.term_count(),
    }
}

/// 사전 출력 문자열.
pub fn render(lexicon: &Lexicon, format: OutputFormat) -> Result<String> {
    let dump = dump(lexicon);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&dump)?),
        OutputFormat::Table => Ok(format_table(&dump)),
    }
}

fn format_table(dump: &LexiconDump) -> String {
    let mut out = String::new();

    for entry in &dump.tiers {
        out.push_str(&format!(
            "[{}] weight {:+.1}{}\n",
            entry.tier.as_str(),
            entry.weight,
            if entry.negatable { ", 부정어 적용" } else { "" }
        ));
        out.push_str(&format!("  {}\n\n", entry.terms.join(" ")));
    }

    out.push_str(&format!(
        "[negation] factor {:+.1}\n  {}\n\n",
        dump.negation_factor,
        dump.negation_markers.join(" ")
    ));
    out.push_str(&format!(
        "[emoticon] ㅋㅋ ㅎㅎ {:+.1}, ㅠㅠ ㅜㅜ {:+.1}\n\n",
        dump.laughing_bonus, dump.crying_penalty
    ));
    out.push_str(&format!("Total: {} terms", dump.term_count));

    out
}
