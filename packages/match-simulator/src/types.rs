//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per match plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    /// Match result only
    Basic,
    /// Match result plus one entry per deal
    Detailed,
}
