//! User-defined goals

use chrono::{DateTime, Duration, Utc};
use common::models::{GoalStatus, GoalType, UserGoal, UserProgress};
use uuid::Uuid;

/// Configured bounds and defaults for a goal type
#[derive(Debug, Clone, Copy)]
pub struct GoalSpec {
    pub min_target: i64,
    pub max_target: i64,
    pub unit: &'static str,
    pub default_deadline_days: i64,
}

pub fn goal_spec(goal_type: GoalType) -> GoalSpec {
    match goal_type {
        GoalType::WeeklyXp => GoalSpec {
            min_target: 50,
            max_target: 10_000,
            unit: "XP",
            default_deadline_days: 7,
        },
        GoalType::MonthlyXp => GoalSpec {
            min_target: 100,
            max_target: 50_000,
            unit: "XP",
            default_deadline_days: 30,
        },
        GoalType::StreakDays => GoalSpec {
            min_target: 3,
            max_target: 365,
            unit: "days",
            default_deadline_days: 30,
        },
        GoalType::AssignmentsCompleted => GoalSpec {
            min_target: 1,
            max_target: 100,
            unit: "assignments",
            default_deadline_days: 30,
        },
        GoalType::ChallengesCompleted => GoalSpec {
            min_target: 1,
            max_target: 50,
            unit: "challenges",
            default_deadline_days: 30,
        },
    }
}

/// Create a goal, clamping the target into the type's configured range and
/// defaulting the deadline to the type's offset from `now`
pub fn create_goal(
    user_id: Uuid,
    goal_type: GoalType,
    target: i64,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> UserGoal {
    let spec = goal_spec(goal_type);
    UserGoal {
        id: Uuid::new_v4(),
        user_id,
        goal_type,
        target: target.clamp(spec.min_target, spec.max_target),
        current: 0,
        unit: spec.unit.to_string(),
        deadline: deadline.unwrap_or(now + Duration::days(spec.default_deadline_days)),
        is_completed: false,
        created_at: now,
    }
}

/// Re-derive the goal's metric from the live progress snapshot.
///
/// Recompute-on-read: the value can jump or regress along with the
/// underlying progress, it is never incrementally summed.
pub fn current_value(goal_type: GoalType, progress: &UserProgress) -> i64 {
    match goal_type {
        GoalType::WeeklyXp => progress.weekly_xp,
        GoalType::MonthlyXp => progress.monthly_xp,
        GoalType::StreakDays => progress.streak_days as i64,
        GoalType::AssignmentsCompleted => progress.totals.assignments_completed as i64,
        GoalType::ChallengesCompleted => progress.totals.challenges_completed as i64,
    }
}

/// Refresh a goal against the current snapshot.
///
/// Completion is terminal: reaching the target once keeps the goal
/// completed even if the metric later regresses.
pub fn update_goal_progress(mut goal: UserGoal, progress: &UserProgress) -> UserGoal {
    goal.current = current_value(goal.goal_type, progress);
    if !goal.is_completed && goal.current >= goal.target {
        goal.is_completed = true;
    }
    goal
}

/// Display status, purely computed
pub fn goal_status(goal: &UserGoal, now: DateTime<Utc>) -> GoalStatus {
    if goal.is_completed {
        GoalStatus::Completed
    } else if now > goal.deadline {
        GoalStatus::Overdue
    } else if goal.current <= 0 {
        GoalStatus::NotStarted
    } else {
        GoalStatus::InProgress
    }
}

/// Propose up to four goals from the user's current trajectory.
/// Deterministic for identical input.
pub fn suggest_goals(progress: &UserProgress, now: DateTime<Utc>) -> Vec<UserGoal> {
    let mut suggestions = Vec::new();

    // Push weekly XP roughly 50% above the current pace
    if progress.weekly_xp > 0 {
        let target = (progress.weekly_xp * 3 / 2).max(100);
        suggestions.push(create_goal(
            progress.user_id,
            GoalType::WeeklyXp,
            target,
            None,
            now,
        ));
    }

    // Extend an established streak by a week
    if progress.streak_days >= 3 {
        suggestions.push(create_goal(
            progress.user_id,
            GoalType::StreakDays,
            progress.streak_days as i64 + 7,
            None,
            now,
        ));
    }

    // Users with few achievements get an assignment push to fuel unlocks
    if progress.achievements.len() < 5 {
        suggestions.push(create_goal(
            progress.user_id,
            GoalType::AssignmentsCompleted,
            progress.totals.assignments_completed as i64 + 5,
            None,
            now,
        ));
    }

    // A language focus suggests trying challenges in it
    let has_language_focus = progress.languages.values().any(|l| l.xp >= 500);
    if has_language_focus && progress.totals.challenges_completed < 20 {
        suggestions.push(create_goal(
            progress.user_id,
            GoalType::ChallengesCompleted,
            progress.totals.challenges_completed as i64 + 3,
            None,
            now,
        ));
    }

    suggestions
}
