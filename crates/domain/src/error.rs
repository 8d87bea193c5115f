use crate::{ExerciseID, MuscleGroup, RepRange};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanGenerationError {
    #[error("Days per week must be in the range 1 to 7 ({0})")]
    InvalidDaysPerWeek(u32),
    #[error("No muscle groups selected")]
    NoMuscleGroupsSelected,
    #[error("Number of weeks must be at least 1 ({0})")]
    InvalidWeekCount(u32),
    #[error("No exercise in catalog for muscle group {0}")]
    EmptyCatalogForMuscleGroup(MuscleGroup),
    #[error("Internal scheduling inconsistency: {0}")]
    InternalSchedulingInconsistency(#[from] Inconsistency),
}

/// Invariant of a generated plan that failed the final self-check.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Inconsistency {
    #[error("plan has {actual} weeks instead of {expected}")]
    WeekCount { expected: u32, actual: usize },
    #[error("week {week} has {actual} workouts instead of {expected}")]
    DayCount {
        week: u32,
        expected: u32,
        actual: usize,
    },
    #[error("day {day} has {actual} exercises for {expected} slots")]
    SlotCount {
        day: u32,
        expected: usize,
        actual: usize,
    },
    #[error("week {0} is not the planned deload week")]
    MisplacedDeload(u32),
    #[error("exercise {0} is not part of the catalog")]
    UnknownExercise(ExerciseID),
    #[error("{muscle_group} is trained {actual} times in week {week} (minimum {minimum})")]
    Frequency {
        week: u32,
        muscle_group: MuscleGroup,
        actual: usize,
        minimum: u32,
    },
    #[error("tonnage decreases from week {0} to week {1}")]
    TonnageDecrease(u32, u32),
    #[error("deload week {0} does not reduce tonnage")]
    IneffectiveDeload(u32),
    #[error("rep range {0} exceeds goal bounds {1}")]
    RepRangeOutOfBounds(RepRange, RepRange),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plan_generation_error_from_inconsistency() {
        assert!(matches!(
            PlanGenerationError::from(Inconsistency::IneffectiveDeload(4)),
            PlanGenerationError::InternalSchedulingInconsistency(
                Inconsistency::IneffectiveDeload(4)
            )
        ));
    }

    #[test]
    fn test_plan_generation_error_display() {
        assert_eq!(
            PlanGenerationError::InvalidDaysPerWeek(8).to_string(),
            "Days per week must be in the range 1 to 7 (8)"
        );
        assert_eq!(
            PlanGenerationError::EmptyCatalogForMuscleGroup(MuscleGroup::SideDelts).to_string(),
            "No exercise in catalog for muscle group Side Delts"
        );
        assert_eq!(
            PlanGenerationError::from(Inconsistency::Frequency {
                week: 2,
                muscle_group: MuscleGroup::Quads,
                actual: 1,
                minimum: 2,
            })
            .to_string(),
            "Internal scheduling inconsistency: Quads is trained 1 times in week 2 (minimum 2)"
        );
    }
}
