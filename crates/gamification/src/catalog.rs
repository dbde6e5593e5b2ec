//! The builtin achievement catalog

use common::models::{
    Achievement, AchievementCategory, AchievementRarity, UnlockCondition,
};

/// Achievement ids
pub mod ids {
    // Assignments
    pub const FIRST_STEPS: &str = "first_steps";
    pub const ASSIGNMENT_10: &str = "assignment_10";
    pub const ASSIGNMENT_50: &str = "assignment_50";
    pub const ASSIGNMENT_100: &str = "assignment_100";

    // Streaks
    pub const STREAK_7: &str = "streak_7";
    pub const STREAK_30: &str = "streak_30";
    pub const STREAK_100: &str = "streak_100";

    // Languages
    pub const RUSTACEAN: &str = "rustacean";
    pub const PYTHONISTA: &str = "pythonista";
    pub const MASTER_OF_ONE: &str = "master_of_one";
    pub const POLYGLOT: &str = "polyglot";

    // Collaboration
    pub const HELPING_HAND: &str = "helping_hand";
    pub const TEAM_PLAYER: &str = "team_player";
    pub const MENTOR: &str = "mentor";

    // Quality
    pub const CLEAN_CODER: &str = "clean_coder";
    pub const OPTIMIZER: &str = "optimizer";

    // Challenges
    pub const CHALLENGER: &str = "challenger";
    pub const CHALLENGE_VETERAN: &str = "challenge_veteran";

    // Milestones and hidden specials
    pub const RISING_STAR: &str = "rising_star";
    pub const SEASONED: &str = "seasoned";
    pub const NIGHT_OWL: &str = "night_owl";
    pub const EARLY_BIRD: &str = "early_bird";
}

/// An immutable, loaded achievement catalog.
///
/// Injected into the evaluator rather than read from a global, so tests can
/// supply custom catalogs.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    achievements: Vec<Achievement>,
}

impl AchievementCatalog {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self { achievements }
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter()
    }

    /// Achievements currently offered (inactive entries stay for history)
    pub fn active(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.active)
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    /// The full builtin catalog
    pub fn builtin() -> Self {
        use AchievementCategory::*;
        use AchievementRarity::*;
        use UnlockCondition::*;

        Self::new(vec![
            entry(
                ids::FIRST_STEPS,
                "First Steps",
                "Complete your first assignment",
                Assignments,
                Common,
                25,
                vec![AssignmentsCompleted { count: 1 }],
            ),
            entry(
                ids::ASSIGNMENT_10,
                "Getting Serious",
                "Complete 10 assignments",
                Assignments,
                Uncommon,
                75,
                vec![AssignmentsCompleted { count: 10 }],
            ),
            entry(
                ids::ASSIGNMENT_50,
                "Assignment Machine",
                "Complete 50 assignments",
                Assignments,
                Rare,
                200,
                vec![AssignmentsCompleted { count: 50 }],
            ),
            entry(
                ids::ASSIGNMENT_100,
                "Centurion",
                "Complete 100 assignments",
                Assignments,
                Epic,
                500,
                vec![AssignmentsCompleted { count: 100 }],
            ),
            entry(
                ids::STREAK_7,
                "One Week Strong",
                "Stay active 7 days in a row",
                Streak,
                Uncommon,
                50,
                vec![StreakDays { days: 7 }],
            ),
            entry(
                ids::STREAK_30,
                "Monthly Devotion",
                "Stay active 30 days in a row",
                Streak,
                Rare,
                250,
                vec![StreakDays { days: 30 }],
            ),
            entry(
                ids::STREAK_100,
                "Unstoppable",
                "Stay active 100 days in a row",
                Streak,
                Legendary,
                1000,
                vec![StreakDays { days: 100 }],
            ),
            entry(
                ids::RUSTACEAN,
                "Rustacean",
                "Earn 2500 XP in Rust",
                Language,
                Rare,
                150,
                vec![LanguageXp {
                    language: "rust".to_string(),
                    xp: 2500,
                }],
            ),
            entry(
                ids::PYTHONISTA,
                "Pythonista",
                "Earn 2500 XP in Python",
                Language,
                Rare,
                150,
                vec![LanguageXp {
                    language: "python".to_string(),
                    xp: 2500,
                }],
            ),
            entry(
                ids::MASTER_OF_ONE,
                "Master of One",
                "Reach expert proficiency in a language",
                Language,
                Rare,
                300,
                vec![LanguagesMastered { count: 1 }],
            ),
            entry(
                ids::POLYGLOT,
                "Polyglot",
                "Reach expert proficiency in 3 languages",
                Language,
                Epic,
                750,
                vec![LanguagesMastered { count: 3 }],
            ),
            entry(
                ids::HELPING_HAND,
                "Helping Hand",
                "Help 5 fellow students",
                Collaboration,
                Common,
                40,
                vec![PeersHelped { count: 5 }],
            ),
            entry(
                ids::TEAM_PLAYER,
                "Team Player",
                "Join 10 collaboration sessions",
                Collaboration,
                Uncommon,
                100,
                vec![CollaborationSessions { count: 10 }],
            ),
            entry(
                ids::MENTOR,
                "Mentor",
                "Help 25 fellow students",
                Collaboration,
                Rare,
                300,
                vec![PeersHelped { count: 25 }],
            ),
            entry(
                ids::CLEAN_CODER,
                "Clean Coder",
                "Submit 20 clean-code solutions",
                Quality,
                Rare,
                200,
                vec![CleanCodeSubmissions { count: 20 }],
            ),
            entry(
                ids::OPTIMIZER,
                "Optimizer",
                "Submit 15 efficient solutions",
                Quality,
                Rare,
                200,
                vec![EfficientSolutions { count: 15 }],
            ),
            entry(
                ids::CHALLENGER,
                "Challenger",
                "Complete your first challenge",
                Challenge,
                Common,
                50,
                vec![ChallengesCompleted { count: 1 }],
            ),
            entry(
                ids::CHALLENGE_VETERAN,
                "Challenge Veteran",
                "Complete 20 challenges",
                Challenge,
                Epic,
                600,
                vec![ChallengesCompleted { count: 20 }],
            ),
            entry(
                ids::RISING_STAR,
                "Rising Star",
                "Earn 1000 total XP",
                Special,
                Common,
                50,
                vec![TotalXp { xp: 1000 }],
            ),
            entry(
                ids::SEASONED,
                "Seasoned",
                "Earn 10000 total XP",
                Special,
                Rare,
                250,
                vec![TotalXp { xp: 10_000 }],
            ),
            hidden_entry(
                ids::NIGHT_OWL,
                "Night Owl",
                "Code at 3 AM",
                Special,
                Epic,
                100,
                vec![ActiveAtHour { hour: 3 }],
            ),
            hidden_entry(
                ids::EARLY_BIRD,
                "Early Bird",
                "Code at 6 AM",
                Special,
                Rare,
                75,
                vec![ActiveAtHour { hour: 6 }],
            ),
        ])
    }
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    category: AchievementCategory,
    rarity: AchievementRarity,
    xp_reward: i64,
    conditions: Vec<UnlockCondition>,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        rarity,
        xp_reward,
        conditions,
        hidden: false,
        active: true,
    }
}

fn hidden_entry(
    id: &str,
    name: &str,
    description: &str,
    category: AchievementCategory,
    rarity: AchievementRarity,
    xp_reward: i64,
    conditions: Vec<UnlockCondition>,
) -> Achievement {
    Achievement {
        hidden: true,
        ..entry(id, name, description, category, rarity, xp_reward, conditions)
    }
}
