//! Metrics collection and output for simulated matches.

use referee::domain::events::{DealOutcome, DealRecord, MatchResult};
use referee::domain::rules::DealAward;
use referee::domain::state::player_no;
use serde::Serialize;

use crate::simulator::MatchOutcome;
use crate::types::MetricsLevel;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deals: Vec<DealMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub ai_types: [String; 4],
    pub total_matches: u32,
    pub match_deals: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub result: MatchResult,
    pub victory_credits: [u16; 2],
    /// 1 or 2; `None` when the match ended level.
    pub winning_team: Option<u8>,
    pub deals_played: usize,
    pub revokes: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DealMetrics {
    pub deal_no: u32,
    /// 1-based player number.
    pub dealer: u8,
    pub trump: Option<String>,
    pub points: [u8; 2],
    pub tricks_played: u8,
    pub credited_team: Option<u8>,
    pub credits: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_by: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub player: u8,
    pub ai_type: String,
    pub tricks_won: u32,
    pub avg_tricks_per_deal: f64,
}

/// Build metrics from a simulated match.
pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    config: MatchConfig,
    outcome: &MatchOutcome,
    level: MetricsLevel,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let deals = match level {
        MetricsLevel::Basic => Vec::new(),
        MetricsLevel::Detailed => outcome.deals.iter().map(build_deal_metrics).collect(),
    };

    let deals_played = outcome.deals.len();
    let player_metrics = (0..4)
        .map(|seat| {
            let tricks_won = outcome.tricks_won[seat];
            PlayerMetrics {
                player: seat as u8 + 1,
                ai_type: config.ai_types[seat].clone(),
                tricks_won,
                avg_tricks_per_deal: if deals_played > 0 {
                    tricks_won as f64 / deals_played as f64
                } else {
                    0.0
                },
            }
        })
        .collect();

    let winning_team = match outcome.result {
        MatchResult::Winner { team } => Some(team.index() as u8 + 1),
        MatchResult::Ambiguous => None,
    };

    MatchMetrics {
        match_id,
        seed,
        timestamp,
        config,
        result: MatchResultMetrics {
            result: outcome.result,
            victory_credits: outcome.victory_credits,
            winning_team,
            deals_played,
            revokes: outcome.revokes(),
            duration_ms,
        },
        deals,
        player_metrics,
    }
}

fn build_deal_metrics(deal: &DealRecord) -> DealMetrics {
    let (credited_team, credits, revoked_by) = match deal.outcome {
        DealOutcome::Completed {
            award: DealAward::Credited { team, credits },
        } => (Some(team.index() as u8 + 1), credits, None),
        DealOutcome::Completed {
            award: DealAward::Ambiguous,
        } => (None, 0, None),
        DealOutcome::Revoked {
            offender, credited, ..
        } => (
            Some(credited.index() as u8 + 1),
            referee::domain::rules::REVOKE_PENALTY,
            Some(player_no(offender)),
        ),
    };

    DealMetrics {
        deal_no: deal.deal_no,
        dealer: player_no(deal.dealer),
        trump: deal.trump.map(|c| c.to_string()),
        points: deal.points,
        tricks_played: deal.tricks_played,
        credited_team,
        credits,
        revoked_by,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winning_team: Option<u8>,
    pub team1_credits: u16,
    pub team2_credits: u16,
    pub deals_played: usize,
    pub revokes: usize,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed,
            winning_team: metrics.result.winning_team,
            team1_credits: metrics.result.victory_credits[0],
            team2_credits: metrics.result.victory_credits[1],
            deals_played: metrics.result.deals_played,
            revokes: metrics.result.revokes,
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
