#[cfg(test)]
mod tests {
    use crate::challenges::*;
    use chrono::{DateTime, TimeZone, Utc};
    use common::models::{Challenge, ChallengeParticipant, ChallengeType, Difficulty};
    use common::Error;
    use uuid::Uuid;

    const COMPLETION_SCORE: u32 = 80;

    fn make_challenge(now: DateTime<Utc>) -> Challenge {
        Challenge {
            id: Uuid::from_u128(100),
            title: "Weekly Algorithm Sprint".to_string(),
            challenge_type: ChallengeType::Weekly,
            difficulty: Difficulty::Easy,
            base_xp: 100,
            starts_at: now - chrono::Duration::hours(1),
            ends_at: now + chrono::Duration::days(6),
            max_participants: None,
            is_active: true,
            participants: Vec::new(),
            created_at: now - chrono::Duration::hours(2),
        }
    }

    fn make_submission(code: &str) -> Submission {
        Submission {
            code: code.to_string(),
            language: "rust".to_string(),
        }
    }

    fn long_code() -> String {
        "fn solve(input: &str) -> String {\n".repeat(20)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_phase_transitions() {
        let challenge = make_challenge(now());
        assert_eq!(
            phase(&challenge, challenge.starts_at - chrono::Duration::minutes(1)),
            ChallengePhase::Scheduled
        );
        assert_eq!(phase(&challenge, now()), ChallengePhase::Active);
        assert_eq!(phase(&challenge, challenge.ends_at), ChallengePhase::Ended);
    }

    #[test]
    fn test_join_returns_fresh_participant() {
        let challenge = make_challenge(now());
        let user = Uuid::from_u128(1);

        let participant = join_challenge(&challenge, user, 0, now()).expect("join succeeds");
        assert_eq!(participant.user_id, user);
        assert_eq!(participant.score, 0);
        assert_eq!(participant.submissions, 0);
        assert!(!participant.completed);
    }

    #[test]
    fn test_double_join_rejected() {
        let mut challenge = make_challenge(now());
        let user = Uuid::from_u128(1);

        let participant = join_challenge(&challenge, user, 0, now()).expect("first join");
        challenge.participants.push(participant);

        let err = join_challenge(&challenge, user, 0, now()).unwrap_err();
        assert!(matches!(err, Error::AlreadyParticipating));
        assert_eq!(err.to_string(), "Already participating in this challenge");
    }

    #[test]
    fn test_full_challenge_rejected() {
        let mut challenge = make_challenge(now());
        challenge.max_participants = Some(2);
        for i in 1..=2 {
            let p = join_challenge(&challenge, Uuid::from_u128(i), 0, now()).unwrap();
            challenge.participants.push(p);
        }

        let err = join_challenge(&challenge, Uuid::from_u128(3), 0, now()).unwrap_err();
        assert!(matches!(err, Error::ChallengeFull));
        assert_eq!(err.to_string(), "Challenge is full");
    }

    #[test]
    fn test_join_before_start_rejected() {
        let mut challenge = make_challenge(now());
        challenge.starts_at = now() + chrono::Duration::hours(1);

        let err = join_challenge(&challenge, Uuid::from_u128(1), 0, now()).unwrap_err();
        assert!(matches!(err, Error::ChallengeNotStarted));
    }

    #[test]
    fn test_join_after_end_rejected() {
        let mut challenge = make_challenge(now());
        challenge.ends_at = now() - chrono::Duration::minutes(1);

        let err = join_challenge(&challenge, Uuid::from_u128(1), 0, now()).unwrap_err();
        assert!(matches!(err, Error::ChallengeEnded));
    }

    #[test]
    fn test_inactive_challenge_rejected() {
        let mut challenge = make_challenge(now());
        challenge.is_active = false;

        let err = join_challenge(&challenge, Uuid::from_u128(1), 0, now()).unwrap_err();
        assert!(matches!(err, Error::ChallengeInactive));
    }

    #[test]
    fn test_per_type_participation_limit() {
        let challenge = make_challenge(now());
        let at_limit = participation_limit(ChallengeType::Weekly);

        let err = join_challenge(&challenge, Uuid::from_u128(1), at_limit, now()).unwrap_err();
        assert!(matches!(err, Error::ParticipationLimit(_)));
    }

    #[test]
    fn test_can_user_join_mirrors_join() {
        let mut challenge = make_challenge(now());
        let user = Uuid::from_u128(1);
        assert!(can_user_join(&challenge, user, 0, now()));

        challenge.is_active = false;
        assert!(
            !can_user_join(&challenge, user, 0, now()),
            "pre-flight and join share one authority"
        );
    }

    #[test]
    fn test_submit_requires_participation() {
        let challenge = make_challenge(now());
        let err = submit_solution(
            &challenge,
            Uuid::from_u128(1),
            &make_submission("code"),
            &HeuristicScorer,
            COMPLETION_SCORE,
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotParticipating));
    }

    #[test]
    fn test_submit_after_end_rejected() {
        let mut challenge = make_challenge(now());
        let user = Uuid::from_u128(1);
        let participant = join_challenge(&challenge, user, 0, now()).unwrap();
        challenge.participants.push(participant);
        challenge.ends_at = now() - chrono::Duration::minutes(1);

        let err = submit_solution(
            &challenge,
            user,
            &make_submission("code"),
            &HeuristicScorer,
            COMPLETION_SCORE,
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ChallengeEnded));
    }

    #[test]
    fn test_score_is_running_maximum() {
        let mut challenge = make_challenge(now());
        let user = Uuid::from_u128(1);
        let participant = join_challenge(&challenge, user, 0, now()).unwrap();
        challenge.participants.push(participant);

        let first = submit_solution(
            &challenge,
            user,
            &make_submission(&long_code()),
            &HeuristicScorer,
            COMPLETION_SCORE,
            now(),
        )
        .unwrap();
        assert!(first.score >= COMPLETION_SCORE);
        assert!(first.completed);
        let completed_at = first.completed_at.expect("completion stamped");

        challenge.participants[0] = first.clone();
        let later = now() + chrono::Duration::hours(1);
        let second = submit_solution(
            &challenge,
            user,
            &make_submission("x"),
            &HeuristicScorer,
            COMPLETION_SCORE,
            later,
        )
        .unwrap();

        assert_eq!(second.score, first.score, "weaker submission keeps the max");
        assert_eq!(second.submissions, 2);
        assert_eq!(
            second.completed_at,
            Some(completed_at),
            "completion timestamp is from the first completion"
        );
    }

    #[test]
    fn test_heuristic_scorer_is_deterministic() {
        let challenge = make_challenge(now());
        let submission = make_submission(&long_code());
        let a = HeuristicScorer.score(&challenge, &submission);
        let b = HeuristicScorer.score(&challenge, &submission);
        assert_eq!(a, b);
    }

    #[test]
    fn test_heuristic_scorer_empty_code_is_zero() {
        let challenge = make_challenge(now());
        assert_eq!(HeuristicScorer.score(&challenge, &make_submission("   ")), 0);
    }

    #[test]
    fn test_harder_challenges_score_lower() {
        let mut easy = make_challenge(now());
        easy.difficulty = Difficulty::Easy;
        let mut expert = make_challenge(now());
        expert.difficulty = Difficulty::Expert;

        let submission = make_submission(&long_code());
        assert!(
            HeuristicScorer.score(&expert, &submission)
                < HeuristicScorer.score(&easy, &submission)
        );
    }

    #[test]
    fn test_leaderboard_ranks_are_sequential() {
        let mut challenge = make_challenge(now());
        for (i, score) in [50u32, 80, 80, 10].iter().enumerate() {
            challenge.participants.push(ChallengeParticipant {
                user_id: Uuid::from_u128(i as u128 + 1),
                joined_at: now(),
                score: *score,
                submissions: 1,
                completed: *score >= COMPLETION_SCORE,
                completed_at: None,
            });
        }

        let standings = challenge_leaderboard(&challenge);
        let ranks: Vec<u32> = standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4], "ties get sequential ranks");
        let scores: Vec<u32> = standings.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![80, 80, 50, 10]);
    }

    #[test]
    fn test_xp_reward_scales_with_difficulty() {
        let mut challenge = make_challenge(now());
        challenge.difficulty = Difficulty::Expert;
        assert_eq!(xp_reward(&challenge), 200);

        challenge.difficulty = Difficulty::Medium;
        assert_eq!(xp_reward(&challenge), 120);
    }
}
