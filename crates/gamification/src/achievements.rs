//! Achievement eligibility and unlocking

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};
use common::models::{
    Achievement, AchievementCategory, AchievementRarity, Activity, ActivityType, Proficiency,
    UnlockCondition, UserAchievement, UserProgress,
};
use serde::Serialize;
use tracing::info;

use crate::catalog::AchievementCatalog;

/// Aggregate view of a user's unlocked achievements
#[derive(Debug, Clone, Serialize)]
pub struct AchievementStats {
    pub unlocked: usize,
    pub total_active: usize,
    pub percent_unlocked: f64,
    pub by_category: HashMap<AchievementCategory, u32>,
    pub by_rarity: HashMap<AchievementRarity, u32>,
}

/// Evaluates unlock conditions against progress snapshots.
///
/// The catalog is injected so tests can run against custom catalogs.
pub struct AchievementEvaluator {
    catalog: AchievementCatalog,
}

impl AchievementEvaluator {
    pub fn new(catalog: AchievementCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Whether the user can unlock this achievement right now.
    ///
    /// Returns false immediately for achievements already held, so unlocking
    /// is idempotent. Otherwise every condition must hold, failing fast.
    pub fn is_eligible(
        &self,
        achievement: &Achievement,
        progress: &UserProgress,
        recent: &[Activity],
    ) -> bool {
        if progress.has_achievement(&achievement.id) {
            return false;
        }
        achievement
            .conditions
            .iter()
            .all(|c| condition_met(c, progress, recent))
    }

    /// All active achievements the user is newly eligible for
    pub fn check_unlocks(
        &self,
        progress: &UserProgress,
        recent: &[Activity],
        now: DateTime<Utc>,
    ) -> Vec<UserAchievement> {
        self.catalog
            .active()
            .filter(|a| self.is_eligible(a, progress, recent))
            .map(|a| {
                info!(
                    "🏆 Achievement unlocked: {} for user {}",
                    a.id, progress.user_id
                );
                UserAchievement {
                    user_id: progress.user_id,
                    achievement_id: a.id.clone(),
                    unlocked_at: now,
                }
            })
            .collect()
    }

    /// The next achievements worth surfacing: active, not yet unlocked,
    /// currently eligible, rarest last, truncated to `limit`
    pub fn next_achievements(
        &self,
        progress: &UserProgress,
        recent: &[Activity],
        limit: usize,
    ) -> Vec<&Achievement> {
        let mut eligible: Vec<&Achievement> = self
            .catalog
            .active()
            .filter(|a| self.is_eligible(a, progress, recent))
            .collect();
        eligible.sort_by_key(|a| a.rarity);
        eligible.truncate(limit);
        eligible
    }

    /// Unlock tallies over the active catalog
    pub fn stats(&self, progress: &UserProgress) -> AchievementStats {
        let total_active = self.catalog.active().count();

        let mut by_category: HashMap<AchievementCategory, u32> = HashMap::new();
        let mut by_rarity: HashMap<AchievementRarity, u32> = HashMap::new();
        let mut unlocked = 0;

        for held in &progress.achievements {
            if let Some(achievement) = self.catalog.get(&held.achievement_id) {
                if !achievement.active {
                    continue;
                }
                unlocked += 1;
                *by_category.entry(achievement.category).or_insert(0) += 1;
                *by_rarity.entry(achievement.rarity).or_insert(0) += 1;
            }
        }

        let percent_unlocked = if total_active == 0 {
            0.0
        } else {
            unlocked as f64 * 100.0 / total_active as f64
        };

        AchievementStats {
            unlocked,
            total_active,
            percent_unlocked,
            by_category,
            by_rarity,
        }
    }
}

fn condition_met(condition: &UnlockCondition, progress: &UserProgress, recent: &[Activity]) -> bool {
    match condition {
        UnlockCondition::StreakDays { days } => progress.streak_days >= *days,
        UnlockCondition::AssignmentsCompleted { count } => {
            progress.totals.assignments_completed >= *count
        }
        UnlockCondition::TotalXp { xp } => progress.total_xp >= *xp,
        UnlockCondition::LanguageXp { language, xp } => progress
            .languages
            .get(language)
            .is_some_and(|l| l.xp >= *xp),
        UnlockCondition::LanguagesMastered { count } => {
            let mastered = progress
                .languages
                .values()
                .filter(|l| l.proficiency == Proficiency::Expert)
                .count() as u32;
            mastered >= *count
        }
        UnlockCondition::CollaborationSessions { count } => {
            progress
                .totals
                .collaboration_sessions
                .max(recent_count(recent, ActivityType::CollaborationSession))
                >= *count
        }
        UnlockCondition::PeersHelped { count } => {
            progress
                .totals
                .peers_helped
                .max(recent_count(recent, ActivityType::PeerHelp))
                >= *count
        }
        UnlockCondition::CleanCodeSubmissions { count } => {
            progress
                .totals
                .clean_code_submissions
                .max(recent_count(recent, ActivityType::CleanCodeSubmission))
                >= *count
        }
        UnlockCondition::EfficientSolutions { count } => {
            progress
                .totals
                .efficient_solutions
                .max(recent_count(recent, ActivityType::EfficientSolution))
                >= *count
        }
        UnlockCondition::ChallengesCompleted { count } => {
            progress.totals.challenges_completed >= *count
        }
        // Strict: only an activity at exactly H:00 counts, 3:01 does not
        UnlockCondition::ActiveAtHour { hour } => recent
            .iter()
            .any(|a| a.occurred_at.hour() == *hour && a.occurred_at.minute() == 0),
    }
}

fn recent_count(recent: &[Activity], activity_type: ActivityType) -> u32 {
    recent
        .iter()
        .filter(|a| a.activity_type == activity_type)
        .count() as u32
}
