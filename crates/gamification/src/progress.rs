//! Progress snapshot updates

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use common::models::{Activity, ActivityTotals, ActivityType, UserProgress};

use crate::levels::{proficiency_for_xp, LevelTable};
use crate::xp::calculate_xp;

/// Midnight at the start of the ISO week (Monday) containing `ts`
pub fn week_start(ts: DateTime<Utc>) -> DateTime<Utc> {
    let days_from_monday = ts.weekday().num_days_from_monday() as i64;
    (ts - Duration::days(days_from_monday))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Midnight at the first day of the calendar month containing `ts`
pub fn month_start(ts: DateTime<Utc>) -> DateTime<Utc> {
    let date = ts.date_naive();
    date.with_day(1)
        .unwrap_or(date)
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Apply one activity to a progress snapshot and return the new snapshot.
///
/// Adds the activity's XP to the total and the weekly/monthly buckets
/// (rolling a bucket over when the activity falls in a later week/month),
/// recomputes the level, increments the streak for a `DailyStreak` activity,
/// updates per-language skill when the activity names a language, and bumps
/// the matching lifetime counter. The caller owns persistence.
pub fn apply_activity(
    mut progress: UserProgress,
    activity: &Activity,
    levels: &LevelTable,
) -> UserProgress {
    let points = calculate_xp(activity);

    progress.total_xp += points;

    let activity_week = week_start(activity.occurred_at);
    if activity_week > week_start(progress.week_start) {
        progress.weekly_xp = 0;
        progress.week_start = activity_week;
    }
    progress.weekly_xp += points;

    let activity_month = month_start(activity.occurred_at);
    if activity_month > month_start(progress.month_start) {
        progress.monthly_xp = 0;
        progress.month_start = activity_month;
    }
    progress.monthly_xp += points;

    if activity.activity_type == ActivityType::DailyStreak {
        progress.streak_days += 1;
    }

    if let Some(language) = &activity.context.language {
        let entry = progress.languages.entry(language.clone()).or_default();
        entry.xp += points;
        entry.level = levels.level_for(entry.xp).level;
        entry.proficiency = proficiency_for_xp(entry.xp);
    }

    bump_total(&mut progress.totals, activity.activity_type);

    let info = levels.level_for(progress.total_xp);
    progress.level = info.level;
    progress.xp_in_level = info.xp_into_level;
    progress.updated_at = activity.occurred_at;

    progress
}

fn bump_total(totals: &mut ActivityTotals, activity_type: ActivityType) {
    match activity_type {
        ActivityType::AssignmentCompleted => totals.assignments_completed += 1,
        ActivityType::LessonCompleted => totals.lessons_completed += 1,
        ActivityType::QuizCompleted => totals.quizzes_completed += 1,
        ActivityType::ProjectSubmitted => totals.projects_submitted += 1,
        ActivityType::CollaborationSession => totals.collaboration_sessions += 1,
        ActivityType::PeerHelp => totals.peers_helped += 1,
        ActivityType::CleanCodeSubmission => totals.clean_code_submissions += 1,
        ActivityType::EfficientSolution => totals.efficient_solutions += 1,
        ActivityType::ChallengeCompleted => totals.challenges_completed += 1,
        ActivityType::ForumPost => totals.forum_posts += 1,
        ActivityType::DailyStreak => {}
    }
}
