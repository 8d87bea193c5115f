use std::{collections::BTreeSet, slice::Iter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{MuscleGroup, PlanGenerationError, Property};

pub const MAX_DAYS_PER_WEEK: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MesocycleRequest {
    pub goal: Goal,
    pub weeks: u32,
    pub days_per_week: u32,
    pub target_muscle_groups: BTreeSet<MuscleGroup>,
    pub includes_deload: bool,
    pub split_template: SplitTemplate,
    pub start_date: NaiveDate,
}

impl MesocycleRequest {
    /// Checks the structure of the request, stopping at the first violation.
    pub fn validate(&self) -> Result<(), PlanGenerationError> {
        if !(1..=MAX_DAYS_PER_WEEK).contains(&self.days_per_week) {
            return Err(PlanGenerationError::InvalidDaysPerWeek(self.days_per_week));
        }

        if self.target_muscle_groups.is_empty() {
            return Err(PlanGenerationError::NoMuscleGroupsSelected);
        }

        if self.weeks == 0 {
            return Err(PlanGenerationError::InvalidWeekCount(self.weeks));
        }

        Ok(())
    }

    /// Index of the week that is planned as deload, if any.
    ///
    /// A deload needs a preceding week to compare against, so a single-week
    /// request never gets one.
    #[must_use]
    pub fn deload_week(&self) -> Option<u32> {
        if self.includes_deload && self.weeks >= 2 {
            Some(self.weeks - 1)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Hypertrophy,
    Strength,
}

impl Goal {
    /// Number of times each targeted muscle group has to be trained per week.
    #[must_use]
    pub fn minimum_frequency(self) -> u32 {
        match self {
            Goal::Hypertrophy => 2,
            Goal::Strength => 1,
        }
    }
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 2] = [Goal::Hypertrophy, Goal::Strength];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Strength => "Strength",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitTemplate {
    PushPullLegs,
    UpperLower,
    FullBody,
}

impl SplitTemplate {
    #[must_use]
    pub fn cycle(self) -> &'static [DayKind] {
        match self {
            SplitTemplate::PushPullLegs => &[DayKind::Push, DayKind::Pull, DayKind::Legs],
            SplitTemplate::UpperLower => &[DayKind::Upper, DayKind::Lower],
            SplitTemplate::FullBody => &[DayKind::FullBody],
        }
    }

    /// Kind of the given day when the template cycle is repeated.
    #[must_use]
    pub fn day(self, day: u32) -> DayKind {
        let cycle = self.cycle();
        cycle[day as usize % cycle.len()]
    }
}

impl Property for SplitTemplate {
    fn iter() -> Iter<'static, SplitTemplate> {
        static SPLIT_TEMPLATE: [SplitTemplate; 3] = [
            SplitTemplate::PushPullLegs,
            SplitTemplate::UpperLower,
            SplitTemplate::FullBody,
        ];
        SPLIT_TEMPLATE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SplitTemplate::PushPullLegs => "Push/Pull/Legs",
            SplitTemplate::UpperLower => "Upper/Lower",
            SplitTemplate::FullBody => "Full Body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKind {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FullBody,
}

impl DayKind {
    /// Muscle groups covered by this kind of day, in ascending order.
    #[must_use]
    pub fn muscle_groups(self) -> &'static [MuscleGroup] {
        static PUSH: [MuscleGroup; 4] = [
            MuscleGroup::Chest,
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::Triceps,
        ];
        static PULL: [MuscleGroup; 6] = [
            MuscleGroup::Neck,
            MuscleGroup::Traps,
            MuscleGroup::Lats,
            MuscleGroup::RearDelts,
            MuscleGroup::Biceps,
            MuscleGroup::Forearms,
        ];
        static UPPER: [MuscleGroup; 10] = [
            MuscleGroup::Neck,
            MuscleGroup::Chest,
            MuscleGroup::Traps,
            MuscleGroup::Lats,
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
        ];
        static LOWER: [MuscleGroup; 8] = [
            MuscleGroup::Abs,
            MuscleGroup::ErectorSpinae,
            MuscleGroup::Glutes,
            MuscleGroup::Abductors,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Adductors,
            MuscleGroup::Calves,
        ];

        match self {
            DayKind::Push => &PUSH,
            DayKind::Pull => &PULL,
            DayKind::Legs | DayKind::Lower => &LOWER,
            DayKind::Upper => &UPPER,
            DayKind::FullBody => MuscleGroup::iter().as_slice(),
        }
    }

    #[must_use]
    pub fn covers(self, muscle_group: MuscleGroup) -> bool {
        self.muscle_groups().contains(&muscle_group)
    }
}
