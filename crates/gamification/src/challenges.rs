//! Challenge lifecycle, joining, and scoring

use chrono::{DateTime, Utc};
use common::models::{Challenge, ChallengeParticipant, ChallengeType, Difficulty};
use common::{Error, Result};
use serde::Serialize;
use uuid::Uuid;

/// Lifecycle phase derived from the challenge's time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengePhase {
    Scheduled,
    Active,
    Ended,
}

pub fn phase(challenge: &Challenge, now: DateTime<Utc>) -> ChallengePhase {
    if now < challenge.starts_at {
        ChallengePhase::Scheduled
    } else if now < challenge.ends_at {
        ChallengePhase::Active
    } else {
        ChallengePhase::Ended
    }
}

/// Max concurrent participations per challenge type
pub fn participation_limit(challenge_type: ChallengeType) -> u32 {
    match challenge_type {
        ChallengeType::Daily => 3,
        ChallengeType::Weekly => 5,
        ChallengeType::Monthly => 10,
        ChallengeType::Special => 2,
    }
}

/// The single join authority. Both the pre-flight check and the join path
/// go through here so the two can never disagree.
///
/// `type_participation_count` is the user's current number of participations
/// in challenges of this type, supplied by the caller.
pub fn join_eligibility(
    challenge: &Challenge,
    user_id: Uuid,
    type_participation_count: u32,
    now: DateTime<Utc>,
) -> Result<()> {
    if !challenge.is_active {
        return Err(Error::ChallengeInactive);
    }
    match phase(challenge, now) {
        ChallengePhase::Scheduled => return Err(Error::ChallengeNotStarted),
        ChallengePhase::Ended => return Err(Error::ChallengeEnded),
        ChallengePhase::Active => {}
    }
    if challenge.participant(user_id).is_some() {
        return Err(Error::AlreadyParticipating);
    }
    if let Some(max) = challenge.max_participants {
        if challenge.participants.len() as u32 >= max {
            return Err(Error::ChallengeFull);
        }
    }
    if type_participation_count >= participation_limit(challenge.challenge_type) {
        return Err(Error::ParticipationLimit(format!(
            "{:?}",
            challenge.challenge_type
        )));
    }
    Ok(())
}

/// Pre-flight check mirroring `join_challenge` exactly
pub fn can_user_join(
    challenge: &Challenge,
    user_id: Uuid,
    type_participation_count: u32,
    now: DateTime<Utc>,
) -> bool {
    join_eligibility(challenge, user_id, type_participation_count, now).is_ok()
}

/// Join a challenge, returning the new participant record.
///
/// Pure: attaching the record to the challenge is the caller's write, done
/// inside its own transaction.
pub fn join_challenge(
    challenge: &Challenge,
    user_id: Uuid,
    type_participation_count: u32,
    now: DateTime<Utc>,
) -> Result<ChallengeParticipant> {
    join_eligibility(challenge, user_id, type_participation_count, now)?;

    Ok(ChallengeParticipant {
        user_id,
        joined_at: now,
        score: 0,
        submissions: 0,
        completed: false,
        completed_at: None,
    })
}

/// A solution submitted to a challenge
#[derive(Debug, Clone)]
pub struct Submission {
    pub code: String,
    pub language: String,
}

/// Scores challenge submissions in the range 0..=100.
///
/// Real evaluation (compiling and running the solution against the
/// challenge's tests) lives behind this seam.
pub trait SolutionScorer {
    fn score(&self, challenge: &Challenge, submission: &Submission) -> u32;
}

/// Deterministic stand-in scorer: rewards substantive solutions, gives a
/// small credit for naming a language, and gets harder with difficulty.
#[derive(Debug, Default)]
pub struct HeuristicScorer;

impl SolutionScorer for HeuristicScorer {
    fn score(&self, challenge: &Challenge, submission: &Submission) -> u32 {
        let trimmed = submission.code.trim();
        if trimmed.is_empty() {
            return 0;
        }

        let substance = (trimmed.len() / 8).min(50) as u32;
        let language_credit = if submission.language.is_empty() { 0 } else { 5 };
        let difficulty_penalty = match challenge.difficulty {
            Difficulty::Easy => 0,
            Difficulty::Medium => 3,
            Difficulty::Hard => 6,
            Difficulty::Expert => 10,
        };

        (40 + substance + language_credit)
            .saturating_sub(difficulty_penalty)
            .min(100)
    }
}

/// Score a submission and return the participant's updated record.
///
/// The score is the running maximum across submissions; completion (with
/// its timestamp) is recorded once, the first time the score reaches
/// `completion_score`.
pub fn submit_solution(
    challenge: &Challenge,
    user_id: Uuid,
    submission: &Submission,
    scorer: &dyn SolutionScorer,
    completion_score: u32,
    now: DateTime<Utc>,
) -> Result<ChallengeParticipant> {
    if !challenge.is_active {
        return Err(Error::ChallengeInactive);
    }
    if phase(challenge, now) == ChallengePhase::Ended {
        return Err(Error::ChallengeEnded);
    }
    let participant = challenge
        .participant(user_id)
        .ok_or(Error::NotParticipating)?;

    let score = scorer.score(challenge, submission).min(100);

    let mut updated = participant.clone();
    updated.submissions += 1;
    updated.score = updated.score.max(score);
    if !updated.completed && updated.score >= completion_score {
        updated.completed = true;
        updated.completed_at = Some(now);
    }

    Ok(updated)
}

/// One row of a challenge's standings
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeStanding {
    pub rank: u32,
    pub user_id: Uuid,
    pub score: u32,
    pub submissions: u32,
    pub completed: bool,
}

/// Participants sorted by score, ranked by position. Tied scores get
/// sequential ranks in sort order.
pub fn challenge_leaderboard(challenge: &Challenge) -> Vec<ChallengeStanding> {
    let mut participants: Vec<&ChallengeParticipant> = challenge.participants.iter().collect();
    participants.sort_by(|a, b| b.score.cmp(&a.score));

    participants
        .into_iter()
        .enumerate()
        .map(|(idx, p)| ChallengeStanding {
            rank: idx as u32 + 1,
            user_id: p.user_id,
            score: p.score,
            submissions: p.submissions,
            completed: p.completed,
        })
        .collect()
}

/// Effective XP reward: base scaled by the difficulty multiplier
pub fn xp_reward(challenge: &Challenge) -> i64 {
    (challenge.base_xp as f64 * challenge.difficulty.multiplier()).round() as i64
}
