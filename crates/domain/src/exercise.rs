use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    slice::Iter,
};

use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Name;

/// Read-only access to the exercises a plan may be built from.
pub trait ExerciseCatalog {
    fn fetch_all(&self) -> Vec<Exercise>;
    fn get(&self, id: ExerciseID) -> Option<Exercise>;
}

impl ExerciseCatalog for BTreeMap<ExerciseID, Exercise> {
    fn fetch_all(&self) -> Vec<Exercise> {
        self.values().cloned().collect()
    }

    fn get(&self, id: ExerciseID) -> Option<Exercise> {
        BTreeMap::get(self, &id).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub muscles: Vec<ExerciseMuscle>,
    pub force: Force,
    pub mechanic: Mechanic,
    pub equipment: Vec<Equipment>,
}

impl Exercise {
    #[must_use]
    pub fn primary_muscles(&self) -> BTreeSet<MuscleGroup> {
        self.muscles_with(Stimulus::Primary)
    }

    #[must_use]
    pub fn secondary_muscles(&self) -> BTreeSet<MuscleGroup> {
        self.muscles_with(Stimulus::Secondary)
    }

    #[must_use]
    pub fn trains(&self, muscle_group: MuscleGroup, stimulus: Stimulus) -> bool {
        self.muscles
            .iter()
            .any(|m| m.muscle_group == muscle_group && m.stimulus == stimulus)
    }

    fn muscles_with(&self, stimulus: Stimulus) -> BTreeSet<MuscleGroup> {
        self.muscles
            .iter()
            .filter(|m| m.stimulus == stimulus)
            .map(|m| m.muscle_group)
            .collect()
    }
}

#[derive(
    Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMuscle {
    pub muscle_group: MuscleGroup,
    pub stimulus: Stimulus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stimulus {
    Primary,
    Secondary,
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MuscleGroup {
    // Neck
    Neck = 1,
    // Chest
    Chest = 11,
    // Back
    Traps = 21,
    Lats = 22,
    // Shoulders
    FrontDelts = 31,
    SideDelts = 32,
    RearDelts = 33,
    // Upper arms
    Biceps = 41,
    Triceps = 42,
    // Forearms
    Forearms = 51,
    // Waist
    Abs = 61,
    ErectorSpinae = 62,
    // Hips
    Glutes = 71,
    Abductors = 72,
    // Thighs
    Quads = 81,
    Hamstrings = 82,
    Adductors = 83,
    // Calves
    Calves = 91,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 18] = [
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
            MuscleGroup::Abs,
            MuscleGroup::ErectorSpinae,
            MuscleGroup::Glutes,
            MuscleGroup::Abductors,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Adductors,
            MuscleGroup::Calves,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Neck => "Neck",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::FrontDelts => "Front Delts",
            MuscleGroup::SideDelts => "Side Delts",
            MuscleGroup::RearDelts => "Rear Delts",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::ErectorSpinae => "Erector Spinae",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Abductors => "Abductors",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Adductors => "Adductors",
            MuscleGroup::Calves => "Calves",
        }
    }
}

impl MuscleGroup {
    #[must_use]
    pub fn description(self) -> &'static str {
        #[allow(clippy::match_same_arms)]
        match self {
            MuscleGroup::Neck => "",
            MuscleGroup::Chest => "Pecs",
            MuscleGroup::Traps => "Upper back",
            MuscleGroup::Lats => "Sides of back",
            MuscleGroup::FrontDelts => "Anterior shoulders",
            MuscleGroup::SideDelts => "Mid shoulders",
            MuscleGroup::RearDelts => "Posterior shoulders",
            MuscleGroup::Biceps => "Front of upper arms",
            MuscleGroup::Triceps => "Back of upper arms",
            MuscleGroup::Forearms => "",
            MuscleGroup::Abs => "Belly",
            MuscleGroup::ErectorSpinae => "Lower back and spine",
            MuscleGroup::Glutes => "Buttocks",
            MuscleGroup::Abductors => "Outside of hips",
            MuscleGroup::Quads => "Front of thighs",
            MuscleGroup::Hamstrings => "Back of thighs",
            MuscleGroup::Adductors => "Inner thighs",
            MuscleGroup::Calves => "Back of lower legs",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| **m as u8 == value)
            .copied()
            .ok_or(MuscleGroupError::Invalid(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group ({0})")]
    Invalid(u8),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Force {
    Push,
    Pull,
    Static,
}

impl Property for Force {
    fn iter() -> Iter<'static, Force> {
        static FORCE: [Force; 3] = [Force::Push, Force::Pull, Force::Static];
        FORCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Force::Push => "Push",
            Force::Pull => "Pull",
            Force::Static => "Static",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Equipment {
    Barbell,
    Cable,
    Dumbbell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    TrapBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 8] = [
            Equipment::Barbell,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
