//! Referee configuration from environment variables.
//!
//! | variable                 | default   | meaning                                   |
//! |--------------------------|-----------|-------------------------------------------|
//! | `REFEREE_MATCH_DEALS`    | `4`       | deals per match                           |
//! | `REFEREE_TIE_POLICY`     | `surface` | `surface` or `sudden-death`               |
//! | `REFEREE_MIN_CONFIDENCE` | `0.5`     | detections below this are ignored         |
//! | `REFEREE_FIRST_DEALER`   | `1`       | player number (1..4) dealing the first deal |

use std::env;

use thiserror::Error;

use crate::domain::match_flow::{MatchRules, TiePolicy};
use crate::domain::rules::DEFAULT_MATCH_DEALS;
use crate::domain::state::{seat_from_player_no, Seat};

pub const MATCH_DEALS_VAR: &str = "REFEREE_MATCH_DEALS";
pub const TIE_POLICY_VAR: &str = "REFEREE_TIE_POLICY";
pub const MIN_CONFIDENCE_VAR: &str = "REFEREE_MIN_CONFIDENCE";
pub const FIRST_DEALER_VAR: &str = "REFEREE_FIRST_DEALER";

pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: &'static str) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefereeConfig {
    pub rules: MatchRules,
    /// Detections reported with a lower confidence are dropped.
    pub min_confidence: f32,
    /// 0-based seat of the first dealer.
    pub first_dealer: Seat,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            rules: MatchRules::default(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            first_dealer: 0,
        }
    }
}

impl RefereeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let deals = match lookup(MATCH_DEALS_VAR) {
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::invalid(
                        MATCH_DEALS_VAR,
                        &raw,
                        "expected a deal count between 1 and 255",
                    ))
                }
                Ok(n) => n,
            },
            None => DEFAULT_MATCH_DEALS,
        };

        let tie_policy = match lookup(TIE_POLICY_VAR) {
            Some(raw) => parse_tie_policy(&raw).ok_or_else(|| {
                ConfigError::invalid(TIE_POLICY_VAR, &raw, "expected surface or sudden-death")
            })?,
            None => TiePolicy::default(),
        };

        let min_confidence = match lookup(MIN_CONFIDENCE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|c| (0.0..=1.0).contains(c))
                .ok_or_else(|| {
                    ConfigError::invalid(MIN_CONFIDENCE_VAR, &raw, "expected a number in 0..=1")
                })?,
            None => DEFAULT_MIN_CONFIDENCE,
        };

        let first_dealer = match lookup(FIRST_DEALER_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|n| seat_from_player_no(n).ok())
                .ok_or_else(|| {
                    ConfigError::invalid(FIRST_DEALER_VAR, &raw, "expected a player number 1..4")
                })?,
            None => 0,
        };

        Ok(Self {
            rules: MatchRules { deals, tie_policy },
            min_confidence,
            first_dealer,
        })
    }
}

fn parse_tie_policy(raw: &str) -> Option<TiePolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "surface" => Some(TiePolicy::Surface),
        "sudden-death" | "sudden_death" => Some(TiePolicy::SuddenDeath),
        _ => None,
    }
}
