use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::{Allocation, Exercise, ExerciseID, MuscleGroup, PlanGenerationError, Stimulus};

/// Exercises chosen for each slot of an allocation, indexed by week, day and slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub weeks: Vec<Vec<Vec<ExerciseID>>>,
}

impl Assignment {
    #[must_use]
    pub fn get(&self, week: usize, day: usize, slot: usize) -> Option<ExerciseID> {
        self.weeks.get(week)?.get(day)?.get(slot).copied()
    }
}

/// Catalog exercises that are able to fill a slot of the given muscle group, ordered by ID.
///
/// Exercises training the muscle group as secondary muscle are only considered if no exercise
/// trains it as primary muscle.
#[must_use]
pub fn candidates(exercises: &[Exercise], muscle_group: MuscleGroup) -> Vec<ExerciseID> {
    [Stimulus::Primary, Stimulus::Secondary]
        .into_iter()
        .map(|stimulus| {
            exercises
                .iter()
                .filter(|e| e.trains(muscle_group, stimulus))
                .map(|e| e.id)
                .collect::<BTreeSet<_>>()
        })
        .find(|ids| !ids.is_empty())
        .map(|ids| ids.into_iter().collect::<Vec<_>>())
        .unwrap_or_default()
}

/// Assigns a catalog exercise to every slot of the allocation.
///
/// The random number generator is advanced exactly once per slot, so the result only depends on
/// the allocation, the catalog and the state of the generator. Within a day, an exercise is only
/// repeated if the muscle group has no unused alternative.
pub fn select(
    allocation: &Allocation,
    exercises: &[Exercise],
    rng: &mut impl Rng,
) -> Result<Assignment, PlanGenerationError> {
    let muscle_groups = allocation
        .weeks
        .iter()
        .flat_map(|w| &w.days)
        .flat_map(|d| &d.muscle_groups)
        .copied()
        .collect::<BTreeSet<_>>();
    let mut candidates_per_muscle_group: BTreeMap<MuscleGroup, Vec<ExerciseID>> = BTreeMap::new();
    for muscle_group in muscle_groups {
        let ids = candidates(exercises, muscle_group);
        if ids.is_empty() {
            return Err(PlanGenerationError::EmptyCatalogForMuscleGroup(muscle_group));
        }
        candidates_per_muscle_group.insert(muscle_group, ids);
    }

    let mut weeks = Vec::with_capacity(allocation.weeks.len());
    for week in &allocation.weeks {
        let mut days = Vec::with_capacity(week.days.len());
        for day in &week.days {
            let mut used: BTreeSet<ExerciseID> = BTreeSet::new();
            let mut slots = Vec::with_capacity(day.muscle_groups.len());
            for muscle_group in &day.muscle_groups {
                let ids = &candidates_per_muscle_group[muscle_group];
                let start = rng.gen_range(0..ids.len());
                let id = (0..ids.len())
                    .map(|offset| ids[(start + offset) % ids.len()])
                    .find(|id| !used.contains(id))
                    .unwrap_or(ids[start]);
                used.insert(id);
                slots.push(id);
            }
            days.push(slots);
        }
        weeks.push(days);
    }

    Ok(Assignment { weeks })
}
