use std::collections::BTreeMap;

use crate::{
    Equipment, Exercise, ExerciseID, ExerciseMuscle, Force, Mechanic, MuscleGroup, Name, Stimulus,
};

/// Reference catalog of common strength training exercises.
#[must_use]
pub fn exercises() -> &'static BTreeMap<ExerciseID, Exercise> {
    &EXERCISES
}

static EXERCISES: std::sync::LazyLock<BTreeMap<ExerciseID, Exercise>> =
    std::sync::LazyLock::new(|| {
        BASE_EXERCISES
            .iter()
            .map(Exercise::from)
            .chain(BASE_EXERCISES.iter().flat_map(|e| {
                e.variants.iter().map(|v| Exercise {
                    id: v.id.into(),
                    name: Name(v.name.to_string()),
                    muscles: muscles(v.muscles.unwrap_or(e.muscles)),
                    force: v.force.unwrap_or(e.force),
                    mechanic: v.mechanic.unwrap_or(e.mechanic),
                    equipment: v.equipment.unwrap_or(e.equipment).to_vec(),
                })
            }))
            .map(|e| (e.id, e))
            .collect()
    });

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Exercise {
            id: value.id.into(),
            name: Name(value.name.to_string()),
            muscles: muscles(value.muscles),
            force: value.force,
            mechanic: value.mechanic,
            equipment: value.equipment.to_vec(),
        }
    }
}

fn muscles(muscles: &[(MuscleGroup, Stimulus)]) -> Vec<ExerciseMuscle> {
    muscles
        .iter()
        .map(|(muscle_group, stimulus)| ExerciseMuscle {
            muscle_group: *muscle_group,
            stimulus: *stimulus,
        })
        .collect()
}

struct BaseExercise {
    id: u128,
    name: &'static str,
    muscles: &'static [(MuscleGroup, Stimulus)],
    force: Force,
    mechanic: Mechanic,
    equipment: &'static [Equipment],
    variants: &'static [ExerciseVariant],
}

struct ExerciseVariant {
    id: u128,
    name: &'static str,
    muscles: Option<&'static [(MuscleGroup, Stimulus)]>,
    force: Option<Force>,
    mechanic: Option<Mechanic>,
    equipment: Option<&'static [Equipment]>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: 0,
            name: "",
            muscles: None,
            force: None,
            mechanic: None,
            equipment: None,
        }
    }
}

const BASE_EXERCISES: [BaseExercise; 36] = [
    BaseExercise {
        id: 1,
        name: "Back Extension",
        muscles: &[
            (MuscleGroup::ErectorSpinae, Stimulus::Primary),
            (MuscleGroup::Glutes, Stimulus::Secondary),
            (MuscleGroup::Hamstrings, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        variants: &[],
    },
    BaseExercise {
        id: 2,
        name: "Bench Press",
        muscles: &[
            (MuscleGroup::Chest, Stimulus::Primary),
            (MuscleGroup::FrontDelts, Stimulus::Secondary),
            (MuscleGroup::Triceps, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[
            ExerciseVariant {
                id: 101,
                name: "Incline Bench Press",
                muscles: Some(&[
                    (MuscleGroup::Chest, Stimulus::Primary),
                    (MuscleGroup::FrontDelts, Stimulus::Primary),
                    (MuscleGroup::Triceps, Stimulus::Secondary),
                ]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 102,
                name: "Dumbbell Bench Press",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 103,
                name: "Close Grip Bench Press",
                muscles: Some(&[
                    (MuscleGroup::Triceps, Stimulus::Primary),
                    (MuscleGroup::Chest, Stimulus::Secondary),
                    (MuscleGroup::FrontDelts, Stimulus::Secondary),
                ]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: 3,
        name: "Biceps Curl",
        muscles: &[
            (MuscleGroup::Biceps, Stimulus::Primary),
            (MuscleGroup::Forearms, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Barbell],
        variants: &[ExerciseVariant {
            id: 104,
            name: "Dumbbell Curl",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 4,
        name: "Bent Over Row",
        muscles: &[
            (MuscleGroup::Lats, Stimulus::Primary),
            (MuscleGroup::Traps, Stimulus::Secondary),
            (MuscleGroup::RearDelts, Stimulus::Secondary),
            (MuscleGroup::Biceps, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[ExerciseVariant {
            id: 105,
            name: "Seated Cable Row",
            equipment: Some(&[Equipment::Cable]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 5,
        name: "Squat",
        muscles: &[
            (MuscleGroup::Quads, Stimulus::Primary),
            (MuscleGroup::Glutes, Stimulus::Primary),
            (MuscleGroup::Adductors, Stimulus::Secondary),
            (MuscleGroup::ErectorSpinae, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[ExerciseVariant {
            id: 106,
            name: "Front Squat",
            muscles: Some(&[
                (MuscleGroup::Quads, Stimulus::Primary),
                (MuscleGroup::Glutes, Stimulus::Secondary),
                (MuscleGroup::Abs, Stimulus::Secondary),
            ]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 6,
        name: "Cable Crunch",
        muscles: &[(MuscleGroup::Abs, Stimulus::Primary)],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable],
        variants: &[],
    },
    BaseExercise {
        id: 7,
        name: "Cable Fly",
        muscles: &[
            (MuscleGroup::Chest, Stimulus::Primary),
            (MuscleGroup::FrontDelts, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable],
        variants: &[ExerciseVariant {
            id: 107,
            name: "Dumbbell Fly",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 8,
        name: "Standing Calf Raise",
        muscles: &[(MuscleGroup::Calves, Stimulus::Primary)],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        variants: &[ExerciseVariant {
            id: 108,
            name: "Seated Calf Raise",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 9,
        name: "Deadlift",
        muscles: &[
            (MuscleGroup::Glutes, Stimulus::Primary),
            (MuscleGroup::Hamstrings, Stimulus::Primary),
            (MuscleGroup::ErectorSpinae, Stimulus::Primary),
            (MuscleGroup::Traps, Stimulus::Secondary),
            (MuscleGroup::Quads, Stimulus::Secondary),
            (MuscleGroup::Forearms, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[
            ExerciseVariant {
                id: 109,
                name: "Romanian Deadlift",
                muscles: Some(&[
                    (MuscleGroup::Hamstrings, Stimulus::Primary),
                    (MuscleGroup::Glutes, Stimulus::Primary),
                    (MuscleGroup::ErectorSpinae, Stimulus::Secondary),
                ]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: 110,
                name: "Trap Bar Deadlift",
                muscles: Some(&[
                    (MuscleGroup::Quads, Stimulus::Primary),
                    (MuscleGroup::Glutes, Stimulus::Primary),
                    (MuscleGroup::Hamstrings, Stimulus::Secondary),
                    (MuscleGroup::Traps, Stimulus::Secondary),
                ]),
                equipment: Some(&[Equipment::TrapBar]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: 10,
        name: "Dip",
        muscles: &[
            (MuscleGroup::Chest, Stimulus::Primary),
            (MuscleGroup::Triceps, Stimulus::Primary),
            (MuscleGroup::FrontDelts, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::ParallelBars],
        variants: &[],
    },
    BaseExercise {
        id: 11,
        name: "Face Pull",
        muscles: &[
            (MuscleGroup::RearDelts, Stimulus::Primary),
            (MuscleGroup::Traps, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable],
        variants: &[],
    },
    BaseExercise {
        id: 12,
        name: "Front Raise",
        muscles: &[
            (MuscleGroup::FrontDelts, Stimulus::Primary),
            (MuscleGroup::SideDelts, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 13,
        name: "Good Morning",
        muscles: &[
            (MuscleGroup::ErectorSpinae, Stimulus::Primary),
            (MuscleGroup::Hamstrings, Stimulus::Primary),
            (MuscleGroup::Glutes, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[],
    },
    BaseExercise {
        id: 14,
        name: "Hammer Curl",
        muscles: &[
            (MuscleGroup::Biceps, Stimulus::Primary),
            (MuscleGroup::Forearms, Stimulus::Primary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 15,
        name: "Hanging Leg Raise",
        muscles: &[(MuscleGroup::Abs, Stimulus::Primary)],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::PullUpBar],
        variants: &[],
    },
    BaseExercise {
        id: 16,
        name: "Hip Abduction",
        muscles: &[(MuscleGroup::Abductors, Stimulus::Primary)],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        variants: &[ExerciseVariant {
            id: 111,
            name: "Banded Lateral Walk",
            muscles: Some(&[
                (MuscleGroup::Abductors, Stimulus::Primary),
                (MuscleGroup::Glutes, Stimulus::Secondary),
            ]),
            equipment: Some(&[Equipment::ResistanceBand]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 17,
        name: "Hip Adduction",
        muscles: &[(MuscleGroup::Adductors, Stimulus::Primary)],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        variants: &[],
    },
    BaseExercise {
        id: 18,
        name: "Copenhagen Plank",
        muscles: &[
            (MuscleGroup::Adductors, Stimulus::Primary),
            (MuscleGroup::Abs, Stimulus::Secondary),
        ],
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        equipment: &[],
        variants: &[],
    },
    BaseExercise {
        id: 19,
        name: "Hip Thrust",
        muscles: &[
            (MuscleGroup::Glutes, Stimulus::Primary),
            (MuscleGroup::Hamstrings, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[],
    },
    BaseExercise {
        id: 20,
        name: "Lat Pulldown",
        muscles: &[
            (MuscleGroup::Lats, Stimulus::Primary),
            (MuscleGroup::Biceps, Stimulus::Secondary),
            (MuscleGroup::RearDelts, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Cable],
        variants: &[ExerciseVariant {
            id: 112,
            name: "Pull Up",
            equipment: Some(&[Equipment::PullUpBar]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 21,
        name: "Lateral Raise",
        muscles: &[(MuscleGroup::SideDelts, Stimulus::Primary)],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[ExerciseVariant {
            id: 113,
            name: "Cable Lateral Raise",
            equipment: Some(&[Equipment::Cable]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 22,
        name: "Leg Curl",
        muscles: &[
            (MuscleGroup::Hamstrings, Stimulus::Primary),
            (MuscleGroup::Calves, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        variants: &[],
    },
    BaseExercise {
        id: 23,
        name: "Leg Extension",
        muscles: &[(MuscleGroup::Quads, Stimulus::Primary)],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        variants: &[],
    },
    BaseExercise {
        id: 24,
        name: "Leg Press",
        muscles: &[
            (MuscleGroup::Quads, Stimulus::Primary),
            (MuscleGroup::Glutes, Stimulus::Secondary),
            (MuscleGroup::Adductors, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Machine],
        variants: &[],
    },
    BaseExercise {
        id: 25,
        name: "Neck Curl",
        muscles: &[(MuscleGroup::Neck, Stimulus::Primary)],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[],
        variants: &[ExerciseVariant {
            id: 114,
            name: "Neck Extension",
            force: Some(Force::Push),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 26,
        name: "Overhead Press",
        muscles: &[
            (MuscleGroup::FrontDelts, Stimulus::Primary),
            (MuscleGroup::SideDelts, Stimulus::Secondary),
            (MuscleGroup::Triceps, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        variants: &[ExerciseVariant {
            id: 115,
            name: "Dumbbell Shoulder Press",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 27,
        name: "Overhead Triceps Extension",
        muscles: &[(MuscleGroup::Triceps, Stimulus::Primary)],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 28,
        name: "Plank",
        muscles: &[(MuscleGroup::Abs, Stimulus::Primary)],
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        equipment: &[],
        variants: &[],
    },
    BaseExercise {
        id: 29,
        name: "Rear Delt Fly",
        muscles: &[
            (MuscleGroup::RearDelts, Stimulus::Primary),
            (MuscleGroup::Traps, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 30,
        name: "Reverse Wrist Curl",
        muscles: &[(MuscleGroup::Forearms, Stimulus::Primary)],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 31,
        name: "Shrug",
        muscles: &[
            (MuscleGroup::Traps, Stimulus::Primary),
            (MuscleGroup::Forearms, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Barbell],
        variants: &[ExerciseVariant {
            id: 116,
            name: "Dumbbell Shrug",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: 32,
        name: "Triceps Pushdown",
        muscles: &[(MuscleGroup::Triceps, Stimulus::Primary)],
        force: Force::Push,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable],
        variants: &[],
    },
    BaseExercise {
        id: 33,
        name: "Walking Lunge",
        muscles: &[
            (MuscleGroup::Quads, Stimulus::Primary),
            (MuscleGroup::Glutes, Stimulus::Primary),
            (MuscleGroup::Adductors, Stimulus::Secondary),
        ],
        force: Force::Push,
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 34,
        name: "Wrist Curl",
        muscles: &[(MuscleGroup::Forearms, Stimulus::Primary)],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbell],
        variants: &[],
    },
    BaseExercise {
        id: 35,
        name: "Reverse Fly",
        muscles: &[
            (MuscleGroup::RearDelts, Stimulus::Primary),
            (MuscleGroup::Traps, Stimulus::Secondary),
        ],
        force: Force::Pull,
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable],
        variants: &[],
    },
    BaseExercise {
        id: 36,
        name: "Side Plank",
        muscles: &[
            (MuscleGroup::Abs, Stimulus::Primary),
            (MuscleGroup::Abductors, Stimulus::Secondary),
        ],
        force: Force::Static,
        mechanic: Mechanic::Isolation,
        equipment: &[],
        variants: &[],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use pretty_assertions::assert_eq;

    use crate::{ExerciseCatalog, Property};

    use super::*;

    #[test]
    fn test_exercises() {
        let catalog = exercises();
        assert_eq!(
            catalog.len(),
            BASE_EXERCISES.len()
                + BASE_EXERCISES
                    .iter()
                    .map(|e| e.variants.len())
                    .sum::<usize>()
        );
        assert_eq!(
            ExerciseCatalog::get(catalog, 101.into()),
            Some(Exercise {
                id: 101.into(),
                name: Name::new("Incline Bench Press").unwrap(),
                muscles: vec![
                    ExerciseMuscle {
                        muscle_group: MuscleGroup::Chest,
                        stimulus: Stimulus::Primary,
                    },
                    ExerciseMuscle {
                        muscle_group: MuscleGroup::FrontDelts,
                        stimulus: Stimulus::Primary,
                    },
                    ExerciseMuscle {
                        muscle_group: MuscleGroup::Triceps,
                        stimulus: Stimulus::Secondary,
                    },
                ],
                force: Force::Push,
                mechanic: Mechanic::Compound,
                equipment: vec![Equipment::Barbell],
            })
        );
    }

    #[test]
    fn test_exercise_variants_duplicate_ids() {
        let mut ids = HashSet::new();

        for exercise in &BASE_EXERCISES {
            assert!(ids.insert(exercise.id), "duplicate id {}", exercise.id);

            for variant in exercise.variants {
                assert!(ids.insert(variant.id), "duplicate id {}", variant.id);
            }
        }
    }

    #[test]
    fn test_exercise_variants_duplicate_names() {
        let mut names = HashSet::new();

        for exercise in &BASE_EXERCISES {
            assert!(names.insert(exercise.name), "duplicate name {}", exercise.name);

            for variant in exercise.variants {
                assert!(names.insert(variant.name), "duplicate name {}", variant.name);
            }
        }
    }

    #[test]
    fn test_exercise_variants_duplicate_muscles() {
        for exercise in exercises().values() {
            let muscle_groups: BTreeSet<MuscleGroup> =
                exercise.muscles.iter().map(|m| m.muscle_group).collect();
            assert_eq!(
                exercise.muscles.len(),
                muscle_groups.len(),
                "duplicate muscle entries for \"{}\"",
                exercise.name
            );
        }
    }

    #[test]
    fn test_exercise_names_valid() {
        for exercise in exercises().values() {
            assert_eq!(
                Name::new(&exercise.name.to_string()).as_ref(),
                Ok(&exercise.name)
            );
        }
    }

    #[test]
    fn test_every_muscle_group_has_alternatives() {
        for muscle_group in MuscleGroup::iter() {
            let count = exercises()
                .values()
                .filter(|e| e.trains(*muscle_group, Stimulus::Primary))
                .count();
            assert!(count >= 2, "{} has {count} primary exercises", muscle_group.name());
        }
    }
}
