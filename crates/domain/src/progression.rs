use crate::{Goal, RepRange, Settings};

/// Prescription shared by all exercises of one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    pub sets: u32,
    pub rep_range: RepRange,
    pub load_multiplier: f64,
    pub deload: bool,
}

struct GoalProfile {
    rep_bounds: RepRange,
    rep_range: RepRange,
    base_sets: u32,
    sets_per_week: u32,
    load_step: f64,
}

const HYPERTROPHY: GoalProfile = GoalProfile {
    rep_bounds: RepRange::new_unchecked(5, 30),
    rep_range: RepRange::new_unchecked(8, 12),
    base_sets: 2,
    sets_per_week: 1,
    load_step: 0.025,
};

const STRENGTH: GoalProfile = GoalProfile {
    rep_bounds: RepRange::new_unchecked(1, 6),
    rep_range: RepRange::new_unchecked(3, 5),
    base_sets: 3,
    sets_per_week: 0,
    load_step: 0.05,
};

impl Goal {
    /// Range every prescribed rep range has to lie in.
    #[must_use]
    pub fn rep_bounds(self) -> RepRange {
        self.profile().rep_bounds
    }

    fn profile(self) -> &'static GoalProfile {
        match self {
            Goal::Hypertrophy => &HYPERTROPHY,
            Goal::Strength => &STRENGTH,
        }
    }
}

/// Determines sets, reps and relative load of a week of the mesocycle.
///
/// Volume and load never decrease from one week to the next, except for the final week of a
/// mesocycle that includes a deload.
#[must_use]
pub fn assign_load_and_reps(
    week: u32,
    total_weeks: u32,
    goal: Goal,
    includes_deload: bool,
    settings: &Settings,
) -> Progression {
    let profile = goal.profile();

    if includes_deload && total_weeks >= 2 && week + 1 == total_weeks {
        let previous = overload(week - 1, profile, settings);
        return Progression {
            sets: (previous.sets / 2).max(1),
            load_multiplier: previous.load_multiplier * settings.deload_factor,
            deload: true,
            ..previous
        };
    }

    overload(week, profile, settings)
}

fn overload(week: u32, profile: &GoalProfile, settings: &Settings) -> Progression {
    Progression {
        sets: profile
            .base_sets
            .saturating_add(profile.sets_per_week.saturating_mul(week))
            .min(settings.max_sets),
        rep_range: profile.rep_range,
        load_multiplier: 1.0 + profile.load_step * f64::from(week),
        deload: false,
    }
}
