//! Engine configuration

use std::env;

/// Tuning knobs for the gamification engine
#[derive(Debug, Clone)]
pub struct Config {
    /// Cumulative XP required for level 2; later thresholds grow geometrically
    pub level_base_xp: i64,
    /// Geometric growth rate of the level curve
    pub level_growth_rate: f64,
    /// Maximum entries a generated leaderboard may contain
    pub leaderboard_max_entries: usize,
    /// Challenge score at which a participant counts as completed
    pub challenge_completion_score: u32,
    /// Streak lengths that trigger a milestone notification (every N days)
    pub streak_milestone_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level_base_xp: 1000,
            level_growth_rate: 1.5,
            leaderboard_max_entries: 100,
            challenge_completion_score: 80,
            streak_milestone_days: 7,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level_base_xp: env::var("LEVEL_BASE_XP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.level_base_xp),
            level_growth_rate: env::var("LEVEL_GROWTH_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.level_growth_rate),
            leaderboard_max_entries: env::var("LEADERBOARD_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.leaderboard_max_entries),
            challenge_completion_score: env::var("CHALLENGE_COMPLETION_SCORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.challenge_completion_score),
            streak_milestone_days: env::var("STREAK_MILESTONE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.streak_milestone_days),
        }
    }
}
