//! Leaderboard generation

use std::collections::HashMap;

use common::models::{LeaderboardEntry, LeaderboardKind, UserProgress, UserSnapshot};
use serde::Serialize;
use uuid::Uuid;

/// Optional filters applied before scoring
#[derive(Debug, Clone, Default)]
pub struct LeaderboardFilters {
    pub min_level: Option<u32>,
    pub max_level: Option<u32>,
}

/// The scalar a user is ranked by for a given leaderboard kind
pub fn score_for(kind: &LeaderboardKind, progress: &UserProgress) -> i64 {
    match kind {
        LeaderboardKind::TotalXp => progress.total_xp,
        LeaderboardKind::WeeklyXp => progress.weekly_xp,
        LeaderboardKind::MonthlyXp => progress.monthly_xp,
        LeaderboardKind::Streak => progress.streak_days as i64,
        LeaderboardKind::Achievements => progress.achievements.len() as i64,
        LeaderboardKind::ChallengeScore => progress
            .participations
            .iter()
            .map(|p| p.score as i64)
            .sum(),
        LeaderboardKind::Language(name) => progress
            .languages
            .get(name)
            .map(|l| l.xp)
            .unwrap_or(0),
    }
}

/// Generate leaderboard entries from the live progress collection.
///
/// Sorted descending by score with a deterministic tie-break (total XP,
/// then user id), so identical scores rank the same regardless of input
/// order. Ranks are dense 1-based positions; output never exceeds
/// `max_entries`.
pub fn generate(
    users: &[UserProgress],
    kind: &LeaderboardKind,
    filters: &LeaderboardFilters,
    max_entries: usize,
) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(&UserProgress, i64)> = users
        .iter()
        .filter(|u| filters.min_level.map_or(true, |min| u.level >= min))
        .filter(|u| filters.max_level.map_or(true, |max| u.level <= max))
        .filter(|u| match kind {
            LeaderboardKind::Language(name) => {
                u.languages.get(name).is_some_and(|l| l.xp > 0)
            }
            _ => true,
        })
        .map(|u| (u, score_for(kind, u)))
        .collect();

    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .cmp(score_a)
            .then(b.total_xp.cmp(&a.total_xp))
            .then(a.user_id.cmp(&b.user_id))
    });
    scored.truncate(max_entries);

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (u, score))| LeaderboardEntry {
            rank: idx as u32 + 1,
            score,
            user: UserSnapshot {
                user_id: u.user_id,
                display_name: u.display_name.clone(),
                level: u.level,
                total_xp: u.total_xp,
                streak_days: u.streak_days,
            },
        })
        .collect()
}

/// Rank movement for one user between two snapshots
#[derive(Debug, Clone, Serialize)]
pub struct RankDelta {
    pub user_id: Uuid,
    pub rank: u32,
    /// Positive means the user moved up; absent from the previous snapshot
    /// means no movement
    pub delta: i64,
}

/// Rank movement per current entry, by id lookup into the previous snapshot
pub fn compare(current: &[LeaderboardEntry], previous: &[LeaderboardEntry]) -> Vec<RankDelta> {
    let previous_ranks: HashMap<Uuid, u32> = previous
        .iter()
        .map(|e| (e.user.user_id, e.rank))
        .collect();

    current
        .iter()
        .map(|e| RankDelta {
            user_id: e.user.user_id,
            rank: e.rank,
            delta: previous_ranks
                .get(&e.user.user_id)
                .map(|prev| *prev as i64 - e.rank as i64)
                .unwrap_or(0),
        })
        .collect()
}
