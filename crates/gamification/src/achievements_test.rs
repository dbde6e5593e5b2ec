#[cfg(test)]
mod tests {
    use crate::achievements::AchievementEvaluator;
    use crate::catalog::{ids, AchievementCatalog};
    use chrono::{DateTime, TimeZone, Utc};
    use common::models::{
        Achievement, AchievementCategory, AchievementRarity, Activity, ActivityContext,
        ActivityType, LanguageProgress, Proficiency, UnlockCondition, UserAchievement,
        UserProgress,
    };
    use uuid::Uuid;

    fn make_evaluator() -> AchievementEvaluator {
        AchievementEvaluator::new(AchievementCatalog::builtin())
    }

    fn make_progress(now: DateTime<Utc>) -> UserProgress {
        UserProgress::new(Uuid::from_u128(1), "alice", now)
    }

    fn make_activity(activity_type: ActivityType, occurred_at: DateTime<Utc>) -> Activity {
        Activity {
            id: Uuid::new_v4(),
            user_id: Uuid::from_u128(1),
            activity_type,
            context: ActivityContext::default(),
            occurred_at,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_first_assignment_unlocks_first_steps() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        progress.totals.assignments_completed = 1;

        let unlocked = evaluator.check_unlocks(&progress, &[], now());
        let ids_unlocked: Vec<&str> = unlocked.iter().map(|u| u.achievement_id.as_str()).collect();
        assert_eq!(ids_unlocked, vec![ids::FIRST_STEPS]);
    }

    #[test]
    fn test_held_achievement_is_never_eligible_again() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        progress.totals.assignments_completed = 1;
        progress.achievements.push(UserAchievement {
            user_id: progress.user_id,
            achievement_id: ids::FIRST_STEPS.to_string(),
            unlocked_at: now(),
        });

        let achievement = evaluator.catalog().get(ids::FIRST_STEPS).unwrap();
        assert!(
            !evaluator.is_eligible(achievement, &progress, &[]),
            "unlocking must be idempotent"
        );
        assert!(evaluator.check_unlocks(&progress, &[], now()).is_empty());
    }

    #[test]
    fn test_all_conditions_must_hold() {
        let catalog = AchievementCatalog::new(vec![Achievement {
            id: "grinder".to_string(),
            name: "Grinder".to_string(),
            description: "Streak and assignments together".to_string(),
            category: AchievementCategory::Special,
            rarity: AchievementRarity::Rare,
            xp_reward: 100,
            conditions: vec![
                UnlockCondition::StreakDays { days: 7 },
                UnlockCondition::AssignmentsCompleted { count: 10 },
            ],
            hidden: false,
            active: true,
        }]);
        let evaluator = AchievementEvaluator::new(catalog);

        let mut progress = make_progress(now());
        progress.streak_days = 7;
        progress.totals.assignments_completed = 9;
        let achievement = evaluator.catalog().get("grinder").unwrap();
        assert!(!evaluator.is_eligible(achievement, &progress, &[]));

        progress.totals.assignments_completed = 10;
        assert!(evaluator.is_eligible(achievement, &progress, &[]));
    }

    #[test]
    fn test_streak_thresholds() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());

        progress.streak_days = 6;
        let streak_7 = evaluator.catalog().get(ids::STREAK_7).unwrap();
        assert!(!evaluator.is_eligible(streak_7, &progress, &[]));

        progress.streak_days = 7;
        assert!(evaluator.is_eligible(streak_7, &progress, &[]));
    }

    #[test]
    fn test_language_xp_condition() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        progress.languages.insert(
            "rust".to_string(),
            LanguageProgress {
                xp: 2500,
                level: 3,
                proficiency: Proficiency::Advanced,
            },
        );

        let rustacean = evaluator.catalog().get(ids::RUSTACEAN).unwrap();
        assert!(evaluator.is_eligible(rustacean, &progress, &[]));

        let pythonista = evaluator.catalog().get(ids::PYTHONISTA).unwrap();
        assert!(
            !evaluator.is_eligible(pythonista, &progress, &[]),
            "wrong language does not count"
        );
    }

    #[test]
    fn test_mastered_language_counts() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        progress.languages.insert(
            "rust".to_string(),
            LanguageProgress {
                xp: 6000,
                level: 5,
                proficiency: Proficiency::Expert,
            },
        );
        progress.languages.insert(
            "python".to_string(),
            LanguageProgress {
                xp: 1000,
                level: 2,
                proficiency: Proficiency::Intermediate,
            },
        );

        let master = evaluator.catalog().get(ids::MASTER_OF_ONE).unwrap();
        assert!(evaluator.is_eligible(master, &progress, &[]));

        let polyglot = evaluator.catalog().get(ids::POLYGLOT).unwrap();
        assert!(!evaluator.is_eligible(polyglot, &progress, &[]));
    }

    #[test]
    fn test_recent_activity_can_satisfy_peer_help() {
        let evaluator = make_evaluator();
        let progress = make_progress(now());
        let recent: Vec<Activity> = (0..5)
            .map(|_| make_activity(ActivityType::PeerHelp, now()))
            .collect();

        let helping_hand = evaluator.catalog().get(ids::HELPING_HAND).unwrap();
        assert!(
            evaluator.is_eligible(helping_hand, &progress, &recent),
            "5 peer-help activities in the caller's window qualify"
        );
    }

    #[test]
    fn test_night_owl_requires_exactly_3_00() {
        let evaluator = make_evaluator();
        let progress = make_progress(now());
        let night_owl = evaluator.catalog().get(ids::NIGHT_OWL).unwrap();

        let at_3_00 = vec![make_activity(
            ActivityType::AssignmentCompleted,
            Utc.with_ymd_and_hms(2026, 3, 2, 3, 0, 0).unwrap(),
        )];
        assert!(evaluator.is_eligible(night_owl, &progress, &at_3_00));

        let at_3_01 = vec![make_activity(
            ActivityType::AssignmentCompleted,
            Utc.with_ymd_and_hms(2026, 3, 2, 3, 1, 0).unwrap(),
        )];
        assert!(
            !evaluator.is_eligible(night_owl, &progress, &at_3_01),
            "3:01 does not qualify"
        );
    }

    #[test]
    fn test_next_achievements_sorted_by_rarity() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        // Eligible for first_steps (Common), assignment_10 (Uncommon),
        // assignment_50 (Rare) and streak_7 (Uncommon)
        progress.totals.assignments_completed = 50;
        progress.streak_days = 7;

        let next = evaluator.next_achievements(&progress, &[], 10);
        let rarities: Vec<AchievementRarity> = next.iter().map(|a| a.rarity).collect();
        let mut sorted = rarities.clone();
        sorted.sort();
        assert_eq!(rarities, sorted, "ascending rarity order");
        assert_eq!(next.first().unwrap().rarity, AchievementRarity::Common);
    }

    #[test]
    fn test_next_achievements_respects_limit() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        progress.totals.assignments_completed = 100;
        progress.streak_days = 100;

        let next = evaluator.next_achievements(&progress, &[], 2);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_stats_counts_and_percentage() {
        let evaluator = make_evaluator();
        let mut progress = make_progress(now());
        progress.achievements.push(UserAchievement {
            user_id: progress.user_id,
            achievement_id: ids::FIRST_STEPS.to_string(),
            unlocked_at: now(),
        });
        progress.achievements.push(UserAchievement {
            user_id: progress.user_id,
            achievement_id: ids::STREAK_7.to_string(),
            unlocked_at: now(),
        });

        let stats = evaluator.stats(&progress);
        assert_eq!(stats.unlocked, 2);
        assert_eq!(stats.total_active, evaluator.catalog().len());
        let expected = 2.0 * 100.0 / evaluator.catalog().len() as f64;
        assert!((stats.percent_unlocked - expected).abs() < 0.001);
        assert_eq!(
            stats.by_category.get(&AchievementCategory::Assignments),
            Some(&1)
        );
        assert_eq!(stats.by_rarity.get(&AchievementRarity::Uncommon), Some(&1));
    }

    #[test]
    fn test_inactive_achievements_are_skipped() {
        let mut achievements = vec![Achievement {
            id: "retired".to_string(),
            name: "Retired".to_string(),
            description: "No longer offered".to_string(),
            category: AchievementCategory::Special,
            rarity: AchievementRarity::Common,
            xp_reward: 10,
            conditions: vec![UnlockCondition::TotalXp { xp: 0 }],
            hidden: false,
            active: false,
        }];
        achievements.push(Achievement {
            active: true,
            id: "open".to_string(),
            ..achievements[0].clone()
        });
        let evaluator = AchievementEvaluator::new(AchievementCatalog::new(achievements));

        let progress = make_progress(now());
        let unlocked = evaluator.check_unlocks(&progress, &[], now());
        let ids_unlocked: Vec<&str> = unlocked.iter().map(|u| u.achievement_id.as_str()).collect();
        assert_eq!(ids_unlocked, vec!["open"], "inactive entries never unlock");
    }
}
