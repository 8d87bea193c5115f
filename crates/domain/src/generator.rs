use log::{debug, error};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::{
    Allocation, DayAllocation, ExerciseCatalog, Goal, Inconsistency, MesocyclePlan,
    MesocyclePlanID, MesocycleRequest, PlanGenerationError, Settings, SettingsError,
    SplitTemplate, WeeklyAllocation, WorkoutPlan, assemble, assemble_workout,
    assign_load_and_reps, schedule, select,
};

/// Generates mesocycle plans and single workouts from a catalog of exercises.
///
/// All randomness is drawn from a generator seeded per call, so equal inputs and seeds always
/// produce equal plans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generator {
    settings: Settings,
}

macro_rules! log_on_error {
    ($result: expr, $action: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {
                debug!("succeeded to {}", $action);
            }
            Err(ref err) => match err {
                PlanGenerationError::InternalSchedulingInconsistency(_) => {
                    error!("failed to {}: {err}", $action);
                }
                _ => {
                    debug!("failed to {}: {err}", $action);
                }
            },
        }
        result
    }};
}

impl Generator {
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn generate_mesocycle(
        &self,
        request: &MesocycleRequest,
        catalog: &impl ExerciseCatalog,
        seed: Option<u64>,
    ) -> Result<MesocyclePlan, PlanGenerationError> {
        log_on_error!(
            self.mesocycle(request, catalog, seed),
            "generate mesocycle"
        )
    }

    /// Generates the workout of a single day of the split template.
    ///
    /// The workout trains every muscle group its day kind covers and follows the prescription of
    /// the first week of a mesocycle.
    pub fn generate_workout(
        &self,
        day: u32,
        goal: Goal,
        split_template: SplitTemplate,
        catalog: &impl ExerciseCatalog,
        seed: Option<u64>,
    ) -> Result<WorkoutPlan, PlanGenerationError> {
        log_on_error!(
            self.workout(day, goal, split_template, catalog, seed),
            "generate workout"
        )
    }

    fn mesocycle(
        &self,
        request: &MesocycleRequest,
        catalog: &impl ExerciseCatalog,
        seed: Option<u64>,
    ) -> Result<MesocyclePlan, PlanGenerationError> {
        request.validate()?;

        let mut rng = self.rng(seed);
        let id = plan_id(&mut rng);
        let allocation = schedule(request);
        let exercises = catalog.fetch_all();
        let assignment = select(&allocation, &exercises, &mut rng)?;
        let progressions = (0..request.weeks)
            .map(|week| {
                assign_load_and_reps(
                    week,
                    request.weeks,
                    request.goal,
                    request.includes_deload,
                    &self.settings,
                )
            })
            .collect::<Vec<_>>();

        assemble(
            request,
            id,
            &allocation,
            &assignment,
            &progressions,
            catalog,
        )
    }

    fn workout(
        &self,
        day: u32,
        goal: Goal,
        split_template: SplitTemplate,
        catalog: &impl ExerciseCatalog,
        seed: Option<u64>,
    ) -> Result<WorkoutPlan, PlanGenerationError> {
        let kind = split_template.day(day);
        let allocation = Allocation {
            weeks: vec![WeeklyAllocation {
                days: vec![DayAllocation {
                    kind,
                    muscle_groups: kind.muscle_groups().to_vec(),
                }],
            }],
        };

        let mut rng = self.rng(seed);
        let assignment = select(&allocation, &catalog.fetch_all(), &mut rng)?;
        let progression = assign_load_and_reps(0, 1, goal, false, &self.settings);
        let workout = assemble_workout(
            day,
            &allocation.weeks[0].days[0],
            &assignment.weeks[0][0],
            &progression,
        )?;

        if let Some(id) = workout
            .exercise_ids()
            .into_iter()
            .find(|id| catalog.get(*id).is_none())
        {
            return Err(Inconsistency::UnknownExercise(id).into());
        }

        let bounds = goal.rep_bounds();
        if let Some(exercise) = workout
            .exercises
            .iter()
            .find(|e| !e.rep_range.is_within(&bounds))
        {
            return Err(Inconsistency::RepRangeOutOfBounds(exercise.rep_range, bounds).into());
        }

        Ok(workout)
    }

    fn rng(&self, seed: Option<u64>) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed.unwrap_or(self.settings.default_seed))
    }
}

fn plan_id(rng: &mut impl RngCore) -> MesocyclePlanID {
    let mut bytes = [0; 16];
    rng.fill_bytes(&mut bytes);
    Uuid::from_bytes(bytes).into()
}

/// Generates a mesocycle plan using the default settings.
pub fn generate_mesocycle(
    request: &MesocycleRequest,
    catalog: &impl ExerciseCatalog,
    seed: Option<u64>,
) -> Result<MesocyclePlan, PlanGenerationError> {
    Generator::default().generate_mesocycle(request, catalog, seed)
}

/// Generates a single workout using the default settings.
pub fn generate_workout(
    day: u32,
    goal: Goal,
    split_template: SplitTemplate,
    catalog: &impl ExerciseCatalog,
    seed: Option<u64>,
) -> Result<WorkoutPlan, PlanGenerationError> {
    Generator::default().generate_workout(day, goal, split_template, catalog, seed)
}
