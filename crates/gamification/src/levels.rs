//! Level thresholds and titles

use common::models::Proficiency;
use common::Config;

/// A tabulated level definition
#[derive(Debug, Clone)]
pub struct LevelDef {
    pub level: u32,
    /// Cumulative XP required to reach this level
    pub xp_required: i64,
    pub title: &'static str,
    pub description: &'static str,
}

/// Level info derived from a user's total XP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// The total XP this info was derived from
    pub xp_total: i64,
    /// XP accumulated past the current level's threshold
    pub xp_into_level: i64,
    /// XP still needed to reach the next level
    pub xp_for_next: i64,
}

/// Titles for the tabulated levels, lowest first
const TITLES: &[(&str, &str)] = &[
    ("Newcomer", "Just getting started"),
    ("Learner", "Finding your footing"),
    ("Apprentice", "Building real skills"),
    ("Coder", "Writing code with confidence"),
    ("Problem Solver", "Tackling harder challenges"),
    ("Craftsperson", "Quality is becoming a habit"),
    ("Specialist", "Deep knowledge in your languages"),
    ("Mentor", "Others learn from you"),
    ("Expert", "Among the strongest on the platform"),
    ("Legend", "A name everyone knows"),
];

/// Level curve: level 1 starts at 0 XP, level n (n >= 2) requires
/// round(base * growth^(n-2)) cumulative XP. Past the tabulated titles the
/// same formula keeps the curve going, so any total XP maps to a level.
#[derive(Debug, Clone)]
pub struct LevelTable {
    levels: Vec<LevelDef>,
    base_xp: i64,
    growth_rate: f64,
}

impl LevelTable {
    pub fn from_config(config: &Config) -> Self {
        let base_xp = config.level_base_xp.max(1);
        // Growth below 1.0 would make thresholds non-monotonic
        let growth_rate = config.level_growth_rate.max(1.01);

        let levels = TITLES
            .iter()
            .enumerate()
            .map(|(i, (title, description))| {
                let level = (i + 1) as u32;
                LevelDef {
                    level,
                    xp_required: threshold(base_xp, growth_rate, level),
                    title,
                    description,
                }
            })
            .collect();

        Self {
            levels,
            base_xp,
            growth_rate,
        }
    }

    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }

    /// Cumulative XP threshold for a level, continuing the curve past the table
    pub fn threshold(&self, level: u32) -> i64 {
        threshold(self.base_xp, self.growth_rate, level)
    }

    /// The highest level whose cumulative threshold is at or below `total_xp`
    pub fn level_for(&self, total_xp: i64) -> LevelInfo {
        let total_xp = total_xp.max(0);

        let mut level = 1;
        loop {
            let next = self.threshold(level + 1);
            // The saturated cast pins overflowing thresholds at i64::MAX
            if next <= total_xp && next < i64::MAX {
                level += 1;
            } else {
                break;
            }
        }

        let def = self
            .levels
            .get((level as usize).saturating_sub(1))
            .or_else(|| self.levels.last());
        let (title, description) = match def {
            Some(d) => (d.title, d.description),
            None => ("", ""),
        };

        LevelInfo {
            level,
            title,
            description,
            xp_total: total_xp,
            xp_into_level: total_xp - self.threshold(level),
            xp_for_next: self.threshold(level + 1) - total_xp,
        }
    }
}

fn threshold(base_xp: i64, growth_rate: f64, level: u32) -> i64 {
    if level <= 1 {
        return 0;
    }
    (base_xp as f64 * growth_rate.powi(level as i32 - 2)).round() as i64
}

/// Proficiency tier for a language's accumulated XP
pub fn proficiency_for_xp(xp: i64) -> Proficiency {
    if xp >= 5000 {
        Proficiency::Expert
    } else if xp >= 2000 {
        Proficiency::Advanced
    } else if xp >= 500 {
        Proficiency::Intermediate
    } else {
        Proficiency::Beginner
    }
}
