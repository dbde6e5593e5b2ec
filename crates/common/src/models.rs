//! Domain models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded platform activity that can earn XP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub context: ActivityContext,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    AssignmentCompleted,
    LessonCompleted,
    QuizCompleted,
    ProjectSubmitted,
    DailyStreak,
    CollaborationSession,
    PeerHelp,
    CleanCodeSubmission,
    EfficientSolution,
    ChallengeCompleted,
    ForumPost,
}

/// Situational context attached to an activity, used for XP multipliers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityContext {
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub perfect_score: bool,
    #[serde(default)]
    pub first_time: bool,
    pub language: Option<String>,
    #[serde(default)]
    pub new_language: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.2,
            Difficulty::Hard => 1.5,
            Difficulty::Expert => 2.0,
        }
    }
}

/// A user's full progression snapshot, one per user.
///
/// `total_xp` only ever grows; `level` is the largest level whose cumulative
/// XP threshold is at or below `total_xp`. The persistence layer loads this,
/// runs it through the engine, and writes back the returned snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: Uuid,
    pub display_name: String,
    pub level: u32,
    pub xp_in_level: i64,
    pub total_xp: i64,
    pub streak_days: u32,
    pub weekly_xp: i64,
    pub week_start: DateTime<Utc>,
    pub monthly_xp: i64,
    pub month_start: DateTime<Utc>,
    pub languages: HashMap<String, LanguageProgress>,
    pub achievements: Vec<UserAchievement>,
    pub goals: Vec<UserGoal>,
    pub participations: Vec<ChallengeParticipation>,
    pub totals: ActivityTotals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(user_id: Uuid, display_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            level: 1,
            xp_in_level: 0,
            total_xp: 0,
            streak_days: 0,
            weekly_xp: 0,
            week_start: now,
            monthly_xp: 0,
            month_start: now,
            languages: HashMap::new(),
            achievements: Vec::new(),
            goals: Vec::new(),
            participations: Vec::new(),
            totals: ActivityTotals::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements
            .iter()
            .any(|a| a.achievement_id == achievement_id)
    }
}

/// Per-language XP and derived skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProgress {
    pub xp: i64,
    pub level: u32,
    pub proficiency: Proficiency,
}

impl Default for LanguageProgress {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            proficiency: Proficiency::Beginner,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Lifetime activity counters. Achievement eligibility and goal progress
/// read these, never other unlocked achievements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityTotals {
    pub assignments_completed: u32,
    pub lessons_completed: u32,
    pub quizzes_completed: u32,
    pub projects_submitted: u32,
    pub collaboration_sessions: u32,
    pub peers_helped: u32,
    pub clean_code_submissions: u32,
    pub efficient_solutions: u32,
    pub challenges_completed: u32,
    pub forum_posts: u32,
}

/// An achievement definition from the catalog.
///
/// Catalog entries are loaded once and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub rarity: AchievementRarity,
    pub xp_reward: i64,
    pub conditions: Vec<UnlockCondition>,
    pub hidden: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Assignments,
    Streak,
    Language,
    Collaboration,
    Quality,
    Challenge,
    Special,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AchievementRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A single unlock requirement. All of an achievement's conditions must hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnlockCondition {
    StreakDays { days: u32 },
    AssignmentsCompleted { count: u32 },
    TotalXp { xp: i64 },
    LanguageXp { language: String, xp: i64 },
    LanguagesMastered { count: u32 },
    CollaborationSessions { count: u32 },
    PeersHelped { count: u32 },
    CleanCodeSubmissions { count: u32 },
    EfficientSolutions { count: u32 },
    ChallengesCompleted { count: u32 },
    /// Matches when any recent activity occurred at exactly this hour (UTC)
    ActiveAtHour { hour: u32 },
}

/// A user's unlocked achievement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAchievement {
    pub user_id: Uuid,
    pub achievement_id: String,
    pub unlocked_at: DateTime<Utc>,
}

/// A time-boxed competitive challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub challenge_type: ChallengeType,
    pub difficulty: Difficulty,
    pub base_xp: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub max_participants: Option<u32>,
    /// Kill switch: suppresses join/submit independently of the time window
    pub is_active: bool,
    pub participants: Vec<ChallengeParticipant>,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    pub fn participant(&self, user_id: Uuid) -> Option<&ChallengeParticipant> {
        self.participants.iter().find(|p| p.user_id == user_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeType {
    Daily,
    Weekly,
    Monthly,
    Special,
}

/// A user's state within one challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeParticipant {
    pub user_id: Uuid,
    pub joined_at: DateTime<Utc>,
    /// Running maximum across all submissions
    pub score: u32,
    pub submissions: u32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Denormalized participation record carried on `UserProgress`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeParticipation {
    pub challenge_id: Uuid,
    pub challenge_type: ChallengeType,
    pub score: u32,
    pub completed: bool,
    pub joined_at: DateTime<Utc>,
}

/// A user-defined numeric target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_type: GoalType,
    pub target: i64,
    /// Re-derived from the live progress snapshot on every check
    pub current: i64,
    pub unit: String,
    pub deadline: DateTime<Utc>,
    /// Terminal: stays true even if the underlying metric later regresses
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    WeeklyXp,
    MonthlyXp,
    StreakDays,
    AssignmentsCompleted,
    ChallengesCompleted,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

/// Which score a leaderboard ranks by
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaderboardKind {
    TotalXp,
    WeeklyXp,
    MonthlyXp,
    Streak,
    Achievements,
    ChallengeScore,
    Language(String),
}

/// One row of a generated leaderboard. Ephemeral: regenerated per request
/// from the live progress collection, never persisted as a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub score: i64,
    pub user: UserSnapshot,
}

/// Denormalized user fields embedded in leaderboard entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub user_id: Uuid,
    pub display_name: String,
    pub level: u32,
    pub total_xp: i64,
    pub streak_days: u32,
}

/// A notification record handed to the delivery layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AchievementUnlocked,
    LevelUp,
    StreakMilestone,
    ChallengeInvite,
    GoalCompleted,
    RankChange,
}

/// A public activity-feed record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
