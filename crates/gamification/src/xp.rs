//! XP calculation for recorded activities

use common::models::{Activity, ActivityType};

/// Base point value for each activity type
pub fn base_points(activity_type: ActivityType) -> i64 {
    match activity_type {
        ActivityType::ChallengeCompleted => 100,
        ActivityType::ProjectSubmitted => 75,
        ActivityType::AssignmentCompleted => 50,
        ActivityType::EfficientSolution => 35,
        ActivityType::CollaborationSession => 30,
        ActivityType::PeerHelp => 25,
        ActivityType::CleanCodeSubmission => 20,
        ActivityType::LessonCompleted => 15,
        ActivityType::QuizCompleted => 10,
        ActivityType::DailyStreak => 10,
        ActivityType::ForumPost => 5,
    }
}

/// Calculate XP for an activity: base points scaled by situational
/// multipliers, rounded to the nearest integer. Never negative.
pub fn calculate_xp(activity: &Activity) -> i64 {
    let mut points = base_points(activity.activity_type) as f64;

    if activity.context.perfect_score {
        points *= 2.0;
    }
    if activity.context.first_time {
        points *= 1.5;
    }
    if let Some(difficulty) = activity.context.difficulty {
        points *= difficulty.multiplier();
    }
    if activity.context.new_language {
        points *= 1.3;
    }

    (points.round() as i64).max(0)
}
