//! Activity processing pipeline

use chrono::{DateTime, Utc};
use common::models::{
    Activity, ActivityType, Challenge, ChallengeParticipant, FeedEvent, LeaderboardEntry,
    LeaderboardKind, Notification, UserAchievement, UserGoal, UserProgress,
};
use common::{Config, Result};
use tracing::info;
use uuid::Uuid;

use crate::achievements::AchievementEvaluator;
use crate::catalog::AchievementCatalog;
use crate::challenges::{self, SolutionScorer, Submission};
use crate::goals::update_goal_progress;
use crate::leaderboard::{self, LeaderboardFilters};
use crate::levels::{LevelInfo, LevelTable};
use crate::notifications;
use crate::progress::apply_activity;

/// Everything derived from recording one activity
#[derive(Debug)]
pub struct ActivityOutcome {
    pub progress: UserProgress,
    /// Total XP gained, including achievement rewards
    pub xp_awarded: i64,
    pub unlocked: Vec<UserAchievement>,
    pub completed_goals: Vec<UserGoal>,
    pub notifications: Vec<Notification>,
    pub feed_events: Vec<FeedEvent>,
    pub level_up: Option<LevelInfo>,
}

/// Ties the level table, achievement evaluator, and configuration together
/// into one deterministic pipeline.
pub struct GamificationEngine {
    config: Config,
    levels: LevelTable,
    evaluator: AchievementEvaluator,
}

impl GamificationEngine {
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, AchievementCatalog::builtin())
    }

    pub fn with_catalog(config: Config, catalog: AchievementCatalog) -> Self {
        let levels = LevelTable::from_config(&config);
        Self {
            config,
            levels,
            evaluator: AchievementEvaluator::new(catalog),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    pub fn evaluator(&self) -> &AchievementEvaluator {
        &self.evaluator
    }

    /// Generate a leaderboard capped at the configured entry maximum
    pub fn leaderboard(
        &self,
        users: &[UserProgress],
        kind: &LeaderboardKind,
        filters: &LeaderboardFilters,
    ) -> Vec<LeaderboardEntry> {
        leaderboard::generate(users, kind, filters, self.config.leaderboard_max_entries)
    }

    /// Submit a challenge solution against the configured completion score
    pub fn submit_challenge_solution(
        &self,
        challenge: &Challenge,
        user_id: Uuid,
        submission: &Submission,
        scorer: &dyn SolutionScorer,
        now: DateTime<Utc>,
    ) -> Result<ChallengeParticipant> {
        challenges::submit_solution(
            challenge,
            user_id,
            submission,
            scorer,
            self.config.challenge_completion_score,
            now,
        )
    }

    /// Apply one activity and derive everything that follows from it:
    /// XP, level, achievement unlocks (with their XP rewards), goal
    /// completions, and the notification/feed records to deliver.
    ///
    /// Pure apart from tracing; designed to run inside the caller's
    /// read-modify-write transaction.
    pub fn record_activity(
        &self,
        progress: UserProgress,
        activity: &Activity,
        recent: &[Activity],
    ) -> ActivityOutcome {
        let level_before = progress.level;
        let xp_before = progress.total_xp;
        let now = activity.occurred_at;

        let mut progress = apply_activity(progress, activity, &self.levels);

        // Unlock to a fixpoint: achievement XP rewards feed back into the
        // total and can make further achievements eligible. Each round
        // unlocks at least one new achievement, so the loop is bounded by
        // the catalog size.
        let mut unlocked = Vec::new();
        loop {
            let newly = self.evaluator.check_unlocks(&progress, recent, now);
            if newly.is_empty() {
                break;
            }
            for user_achievement in newly {
                if let Some(achievement) =
                    self.evaluator.catalog().get(&user_achievement.achievement_id)
                {
                    progress.total_xp += achievement.xp_reward;
                    progress.weekly_xp += achievement.xp_reward;
                    progress.monthly_xp += achievement.xp_reward;
                }
                progress.achievements.push(user_achievement.clone());
                unlocked.push(user_achievement);
            }
            let info = self.levels.level_for(progress.total_xp);
            progress.level = info.level;
            progress.xp_in_level = info.xp_into_level;
        }

        // Refresh goals against the updated snapshot
        let goals = std::mem::take(&mut progress.goals);
        let refreshed: Vec<(bool, UserGoal)> = goals
            .into_iter()
            .map(|g| {
                let was_completed = g.is_completed;
                (was_completed, update_goal_progress(g, &progress))
            })
            .collect();

        let mut notifications = Vec::new();
        let mut feed_events = Vec::new();
        let mut completed_goals = Vec::new();

        for user_achievement in &unlocked {
            if let Some(achievement) =
                self.evaluator.catalog().get(&user_achievement.achievement_id)
            {
                notifications.push(notifications::achievement_unlocked(
                    progress.user_id,
                    achievement,
                    now,
                ));
                if !achievement.hidden {
                    feed_events.push(notifications::achievement_feed(
                        &progress.display_name,
                        progress.user_id,
                        achievement,
                        now,
                    ));
                }
            }
        }

        let level_up = if progress.level > level_before {
            Some(self.levels.level_for(progress.total_xp))
        } else {
            None
        };
        if let Some(ref info) = level_up {
            info!("🚀 {} reached level {}", progress.display_name, info.level);
            notifications.push(notifications::level_up(progress.user_id, info, now));
            feed_events.push(notifications::level_up_feed(
                &progress.display_name,
                progress.user_id,
                info,
                now,
            ));
        }

        if activity.activity_type == ActivityType::DailyStreak
            && progress.streak_days > 0
            && self.config.streak_milestone_days > 0
            && progress.streak_days % self.config.streak_milestone_days == 0
        {
            notifications.push(notifications::streak_milestone(
                progress.user_id,
                progress.streak_days,
                now,
            ));
        }

        for (was_completed, goal) in &refreshed {
            if goal.is_completed && !was_completed {
                notifications.push(notifications::goal_completed(progress.user_id, goal, now));
                completed_goals.push(goal.clone());
            }
        }
        progress.goals = refreshed.into_iter().map(|(_, g)| g).collect();

        ActivityOutcome {
            xp_awarded: progress.total_xp - xp_before,
            progress,
            unlocked,
            completed_goals,
            notifications,
            feed_events,
            level_up,
        }
    }
}
