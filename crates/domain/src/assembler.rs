use std::iter::zip;

use crate::{
    Allocation, Assignment, DayAllocation, ExerciseCatalog, ExerciseID, ExercisePlan,
    Inconsistency, Load, MesocyclePlan, MesocyclePlanID, MesocycleRequest, PlanGenerationError,
    Progression, Week, WorkoutPlan,
};

/// Builds the plan from the results of the previous generation steps and checks its invariants.
pub fn assemble(
    request: &MesocycleRequest,
    id: MesocyclePlanID,
    allocation: &Allocation,
    assignment: &Assignment,
    progressions: &[Progression],
    catalog: &impl ExerciseCatalog,
) -> Result<MesocyclePlan, PlanGenerationError> {
    let mut weeks = Vec::with_capacity(allocation.weeks.len());
    for (index, ((allocated, assigned), progression)) in (0..).zip(zip(
        zip(&allocation.weeks, &assignment.weeks),
        progressions,
    )) {
        let workouts = (0..)
            .zip(zip(&allocated.days, assigned))
            .map(|(day, (day_allocation, exercise_ids))| {
                assemble_workout(day, day_allocation, exercise_ids, progression)
            })
            .collect::<Result<Vec<_>, _>>()?;
        weeks.push(Week {
            index,
            deload: progression.deload,
            workouts,
        });
    }

    let plan = MesocyclePlan {
        id,
        goal: request.goal,
        split_template: request.split_template,
        start_date: request.start_date,
        weeks,
    };

    verify(&plan, request, catalog)?;

    Ok(plan)
}

pub fn assemble_workout(
    day: u32,
    allocation: &DayAllocation,
    exercise_ids: &[ExerciseID],
    progression: &Progression,
) -> Result<WorkoutPlan, Inconsistency> {
    if allocation.muscle_groups.len() != exercise_ids.len() {
        return Err(Inconsistency::SlotCount {
            day,
            expected: allocation.muscle_groups.len(),
            actual: exercise_ids.len(),
        });
    }

    Ok(WorkoutPlan {
        day,
        kind: allocation.kind,
        exercises: zip(&allocation.muscle_groups, exercise_ids)
            .map(|(muscle_group, exercise_id)| ExercisePlan {
                exercise_id: *exercise_id,
                muscle_group: *muscle_group,
                sets: progression.sets,
                rep_range: progression.rep_range,
                load: Load::Multiplier(progression.load_multiplier),
            })
            .collect(),
    })
}

/// Checks that a generated plan fulfills all requirements of the request.
pub fn verify(
    plan: &MesocyclePlan,
    request: &MesocycleRequest,
    catalog: &impl ExerciseCatalog,
) -> Result<(), Inconsistency> {
    if plan.weeks.len() != request.weeks as usize {
        return Err(Inconsistency::WeekCount {
            expected: request.weeks,
            actual: plan.weeks.len(),
        });
    }

    let minimum = request.goal.minimum_frequency();
    let deload_week = request.deload_week();

    for week in &plan.weeks {
        if week.workouts.len() != request.days_per_week as usize {
            return Err(Inconsistency::DayCount {
                week: week.index,
                expected: request.days_per_week,
                actual: week.workouts.len(),
            });
        }

        if week.deload != (deload_week == Some(week.index)) {
            return Err(Inconsistency::MisplacedDeload(week.index));
        }

        for muscle_group in &request.target_muscle_groups {
            let actual = week.trainings(*muscle_group).len();
            if actual < minimum as usize {
                return Err(Inconsistency::Frequency {
                    week: week.index,
                    muscle_group: *muscle_group,
                    actual,
                    minimum,
                });
            }
        }
    }

    if let Some(id) = plan
        .all_exercise_ids()
        .into_iter()
        .find(|id| catalog.get(*id).is_none())
    {
        return Err(Inconsistency::UnknownExercise(id));
    }

    let bounds = request.goal.rep_bounds();
    if let Some(exercise) = plan
        .weeks
        .iter()
        .flat_map(|w| &w.workouts)
        .flat_map(|w| &w.exercises)
        .find(|e| !e.rep_range.is_within(&bounds))
    {
        return Err(Inconsistency::RepRangeOutOfBounds(exercise.rep_range, bounds));
    }

    for pair in plan.weeks.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.deload {
            if current.total_tonnage() >= previous.total_tonnage() {
                return Err(Inconsistency::IneffectiveDeload(current.index));
            }
        } else if current.total_tonnage() < previous.total_tonnage() {
            return Err(Inconsistency::TonnageDecrease(previous.index, current.index));
        }
    }

    Ok(())
}
