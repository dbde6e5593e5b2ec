//! Notification and feed record factories
//!
//! The engine creates these records; delivery and storage belong to the
//! notification layer.

use chrono::{DateTime, Utc};
use common::models::{
    Achievement, Challenge, FeedEvent, Notification, NotificationKind, UserGoal,
};
use serde_json::json;
use uuid::Uuid;

use crate::leaderboard::RankDelta;
use crate::levels::LevelInfo;

pub fn achievement_unlocked(
    user_id: Uuid,
    achievement: &Achievement,
    now: DateTime<Utc>,
) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::AchievementUnlocked,
        title: format!("Achievement unlocked: {}", achievement.name),
        body: achievement.description.clone(),
        data: json!({
            "achievement_id": achievement.id,
            "rarity": achievement.rarity,
            "xp_reward": achievement.xp_reward,
        }),
        created_at: now,
    }
}

pub fn level_up(user_id: Uuid, info: &LevelInfo, now: DateTime<Utc>) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::LevelUp,
        title: format!("Level {} reached!", info.level),
        body: format!("You are now a {}", info.title),
        data: json!({
            "level": info.level,
            "title": info.title,
            "xp_for_next": info.xp_for_next,
        }),
        created_at: now,
    }
}

pub fn streak_milestone(user_id: Uuid, streak_days: u32, now: DateTime<Utc>) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::StreakMilestone,
        title: format!("{} day streak!", streak_days),
        body: "Keep it going".to_string(),
        data: json!({ "streak_days": streak_days }),
        created_at: now,
    }
}

pub fn challenge_invite(user_id: Uuid, challenge: &Challenge, now: DateTime<Utc>) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::ChallengeInvite,
        title: format!("You're invited: {}", challenge.title),
        body: format!(
            "A {:?} challenge is open until {}",
            challenge.challenge_type, challenge.ends_at
        ),
        data: json!({
            "challenge_id": challenge.id,
            "challenge_type": challenge.challenge_type,
            "ends_at": challenge.ends_at,
        }),
        created_at: now,
    }
}

pub fn goal_completed(user_id: Uuid, goal: &UserGoal, now: DateTime<Utc>) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::GoalCompleted,
        title: "Goal completed!".to_string(),
        body: format!("You reached {} {}", goal.target, goal.unit),
        data: json!({
            "goal_id": goal.id,
            "goal_type": goal.goal_type,
            "target": goal.target,
        }),
        created_at: now,
    }
}

pub fn rank_change(user_id: Uuid, delta: &RankDelta, now: DateTime<Utc>) -> Notification {
    let direction = if delta.delta >= 0 { "up" } else { "down" };
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::RankChange,
        title: format!("You moved {} to rank {}", direction, delta.rank),
        body: format!("Leaderboard position changed by {}", delta.delta),
        data: json!({ "rank": delta.rank, "delta": delta.delta }),
        created_at: now,
    }
}

pub fn achievement_feed(
    display_name: &str,
    user_id: Uuid,
    achievement: &Achievement,
    now: DateTime<Utc>,
) -> FeedEvent {
    FeedEvent {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::AchievementUnlocked,
        message: format!("{} unlocked {}", display_name, achievement.name),
        data: json!({ "achievement_id": achievement.id, "rarity": achievement.rarity }),
        created_at: now,
    }
}

pub fn level_up_feed(
    display_name: &str,
    user_id: Uuid,
    info: &LevelInfo,
    now: DateTime<Utc>,
) -> FeedEvent {
    FeedEvent {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationKind::LevelUp,
        message: format!("{} reached level {} ({})", display_name, info.level, info.title),
        data: json!({ "level": info.level }),
        created_at: now,
    }
}
