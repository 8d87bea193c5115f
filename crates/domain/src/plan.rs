use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use chrono::{Days, NaiveDate};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DayKind, ExerciseID, Goal, MuscleGroup, SplitTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MesocyclePlan {
    pub id: MesocyclePlanID,
    pub goal: Goal,
    pub split_template: SplitTemplate,
    pub start_date: NaiveDate,
    pub weeks: Vec<Week>,
}

impl MesocyclePlan {
    #[must_use]
    pub fn all_exercise_ids(&self) -> BTreeSet<ExerciseID> {
        self.weeks.iter().flat_map(Week::exercise_ids).collect()
    }

    #[must_use]
    pub fn weekly_tonnage(&self) -> Vec<f64> {
        self.weeks.iter().map(Week::total_tonnage).collect()
    }

    #[must_use]
    pub fn weekly_planned_reps(&self) -> Vec<f64> {
        self.weeks.iter().map(Week::total_planned_reps).collect()
    }

    /// Lowest number of trainings per week for each muscle group in the plan.
    #[must_use]
    pub fn min_weekly_frequency(&self) -> BTreeMap<MuscleGroup, usize> {
        let muscle_groups = self
            .weeks
            .iter()
            .flat_map(|w| w.frequency().into_keys())
            .collect::<BTreeSet<_>>();
        muscle_groups
            .into_iter()
            .map(|muscle_group| {
                let min = self
                    .weeks
                    .iter()
                    .map(|w| w.trainings(muscle_group).len())
                    .min()
                    .unwrap_or_default();
                (muscle_group, min)
            })
            .collect()
    }

    /// Calendar date of a workout, with the training days spread evenly over each week.
    #[must_use]
    pub fn workout_date(&self, week: u32, day: u32) -> Option<NaiveDate> {
        let days_per_week = self.weeks.get(week as usize)?.workouts.len();
        if day as usize >= days_per_week {
            return None;
        }
        let offset = u64::from(week) * 7 + u64::from(day) * 7 / days_per_week as u64;
        self.start_date.checked_add_days(Days::new(offset))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MesocyclePlanID(Uuid);

impl MesocyclePlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for MesocyclePlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for MesocyclePlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub index: u32,
    pub deload: bool,
    pub workouts: Vec<WorkoutPlan>,
}

impl Week {
    #[must_use]
    pub fn total_tonnage(&self) -> f64 {
        self.workouts.iter().map(WorkoutPlan::total_tonnage).sum()
    }

    #[must_use]
    pub fn total_planned_reps(&self) -> f64 {
        self.workouts.iter().map(WorkoutPlan::total_planned_reps).sum()
    }

    #[must_use]
    pub fn trainings(&self, muscle_group: MuscleGroup) -> Vec<&ExercisePlan> {
        self.workouts
            .iter()
            .flat_map(|w| w.trainings(muscle_group))
            .collect()
    }

    #[must_use]
    pub fn frequency(&self) -> BTreeMap<MuscleGroup, usize> {
        let mut result: BTreeMap<MuscleGroup, usize> = BTreeMap::new();
        for exercise in self.workouts.iter().flat_map(|w| &w.exercises) {
            *result.entry(exercise.muscle_group).or_default() += 1;
        }
        result
    }

    #[must_use]
    pub fn exercise_ids(&self) -> BTreeSet<ExerciseID> {
        self.workouts
            .iter()
            .flat_map(WorkoutPlan::exercise_ids)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub day: u32,
    pub kind: DayKind,
    pub exercises: Vec<ExercisePlan>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn trainings(&self, muscle_group: MuscleGroup) -> Vec<&ExercisePlan> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .collect()
    }

    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.exercises.iter().map(|e| e.muscle_group).collect()
    }

    #[must_use]
    pub fn exercise_ids(&self) -> BTreeSet<ExerciseID> {
        self.exercises.iter().map(|e| e.exercise_id).collect()
    }

    #[must_use]
    pub fn total_tonnage(&self) -> f64 {
        self.exercises.iter().map(ExercisePlan::tonnage).sum()
    }

    #[must_use]
    pub fn total_planned_reps(&self) -> f64 {
        self.exercises
            .iter()
            .map(ExercisePlan::planned_total_reps)
            .sum()
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePlan {
    pub exercise_id: ExerciseID,
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub rep_range: RepRange,
    pub load: Load,
}

impl ExercisePlan {
    #[must_use]
    pub fn planned_total_reps(&self) -> f64 {
        f64::from(self.sets) * self.rep_range.average()
    }

    #[must_use]
    pub fn tonnage(&self) -> f64 {
        self.planned_total_reps() * self.load.value()
    }
}

/// Load of a set, either as absolute weight or relative to the first week of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Load {
    Multiplier(f64),
    Kilograms(f64),
}

impl Load {
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Load::Multiplier(value) | Load::Kilograms(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct RepRange {
    min: u32,
    max: u32,
}

impl RepRange {
    pub fn new(min: u32, max: u32) -> Result<Self, RepRangeError> {
        if min < 1 {
            return Err(RepRangeError::Zero);
        }

        if min > max {
            return Err(RepRangeError::Inverted(min, max));
        }

        Ok(Self { min, max })
    }

    pub(crate) const fn new_unchecked(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        f64::from(self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn is_within(&self, bounds: &RepRange) -> bool {
        bounds.min <= self.min && self.max <= bounds.max
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl TryFrom<(u32, u32)> for RepRange {
    type Error = RepRangeError;

    fn try_from((min, max): (u32, u32)) -> Result<Self, Self::Error> {
        RepRange::new(min, max)
    }
}

impl From<RepRange> for (u32, u32) {
    fn from(value: RepRange) -> Self {
        (value.min, value.max)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Reps must be at least 1")]
    Zero,
    #[error("Minimum reps must not exceed maximum reps ({0} > {1})")]
    Inverted(u32, u32),
}
