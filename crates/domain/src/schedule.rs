use std::collections::BTreeSet;

use log::debug;

use crate::{DayKind, MesocycleRequest, MuscleGroup, SplitTemplate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub weeks: Vec<WeeklyAllocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyAllocation {
    pub days: Vec<DayAllocation>,
}

impl WeeklyAllocation {
    #[must_use]
    pub fn frequency(&self, muscle_group: MuscleGroup) -> usize {
        self.days.iter().map(|d| d.count(muscle_group)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAllocation {
    pub kind: DayKind,
    pub muscle_groups: Vec<MuscleGroup>,
}

impl DayAllocation {
    #[must_use]
    pub fn count(&self, muscle_group: MuscleGroup) -> usize {
        self.muscle_groups
            .iter()
            .filter(|m| **m == muscle_group)
            .count()
    }

    fn insert(&mut self, muscle_group: MuscleGroup) {
        let position = self.muscle_groups.partition_point(|m| *m <= muscle_group);
        self.muscle_groups.insert(position, muscle_group);
    }
}

/// Allocates the muscle group slots of every week of the mesocycle.
///
/// All weeks share the same allocation, volume progression is handled by the set and load
/// prescription.
#[must_use]
pub fn schedule(request: &MesocycleRequest) -> Allocation {
    let week = schedule_week(
        request.split_template,
        request.days_per_week,
        &request.target_muscle_groups,
        request.goal.minimum_frequency(),
    );
    Allocation {
        weeks: vec![week; request.weeks as usize],
    }
}

#[must_use]
pub fn schedule_week(
    split_template: SplitTemplate,
    days_per_week: u32,
    target_muscle_groups: &BTreeSet<MuscleGroup>,
    minimum_frequency: u32,
) -> WeeklyAllocation {
    let mut week = WeeklyAllocation {
        days: (0..days_per_week)
            .map(|day| {
                let kind = split_template.day(day);
                DayAllocation {
                    kind,
                    muscle_groups: target_muscle_groups
                        .iter()
                        .filter(|m| kind.covers(**m))
                        .copied()
                        .collect(),
                }
            })
            .collect(),
    };

    if week.days.is_empty() {
        return week;
    }

    for muscle_group in target_muscle_groups {
        let mut frequency = week.frequency(*muscle_group);
        while frequency < minimum_frequency as usize {
            let day = supplemental_day(&week.days, *muscle_group);
            week.days[day].insert(*muscle_group);
            frequency += 1;
        }
    }

    week
}

/// Selects the least loaded day that does not train the muscle group yet.
///
/// If the muscle group is already part of every day, it is trained twice on the least loaded day.
fn supplemental_day(days: &[DayAllocation], muscle_group: MuscleGroup) -> usize {
    let least_loaded = |(day, d): &(usize, &DayAllocation)| (d.muscle_groups.len(), *day);
    days.iter()
        .enumerate()
        .filter(|(_, d)| d.count(muscle_group) == 0)
        .min_by_key(least_loaded)
        .or_else(|| {
            let fallback = days.iter().enumerate().min_by_key(least_loaded);
            if let Some((day, _)) = fallback {
                debug!("training {muscle_group} more than once on day {day}");
            }
            fallback
        })
        .map_or(0, |(day, _)| day)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Goal;

    use super::*;

    fn day(kind: DayKind, muscle_groups: &[MuscleGroup]) -> DayAllocation {
        DayAllocation {
            kind,
            muscle_groups: muscle_groups.to_vec(),
        }
    }

    #[rstest]
    #[case::push_pull_legs(
        SplitTemplate::PushPullLegs,
        5,
        &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Quads],
        2,
        vec![
            day(DayKind::Push, &[MuscleGroup::Chest, MuscleGroup::Triceps]),
            day(DayKind::Pull, &[MuscleGroup::Quads]),
            day(DayKind::Legs, &[MuscleGroup::Quads]),
            day(DayKind::Push, &[MuscleGroup::Chest, MuscleGroup::Triceps]),
            day(DayKind::Pull, &[]),
        ],
    )]
    #[case::upper_lower(
        SplitTemplate::UpperLower,
        4,
        &[MuscleGroup::Chest, MuscleGroup::Lats, MuscleGroup::Quads, MuscleGroup::Hamstrings],
        2,
        vec![
            day(DayKind::Upper, &[MuscleGroup::Chest, MuscleGroup::Lats]),
            day(DayKind::Lower, &[MuscleGroup::Quads, MuscleGroup::Hamstrings]),
            day(DayKind::Upper, &[MuscleGroup::Chest, MuscleGroup::Lats]),
            day(DayKind::Lower, &[MuscleGroup::Quads, MuscleGroup::Hamstrings]),
        ],
    )]
    #[case::supplement_on_least_loaded_days(
        SplitTemplate::PushPullLegs,
        2,
        &[MuscleGroup::Biceps, MuscleGroup::Quads],
        2,
        vec![
            day(DayKind::Push, &[MuscleGroup::Biceps, MuscleGroup::Quads]),
            day(DayKind::Pull, &[MuscleGroup::Biceps, MuscleGroup::Quads]),
        ],
    )]
    #[case::repeat_on_single_day(
        SplitTemplate::FullBody,
        1,
        &[MuscleGroup::Chest, MuscleGroup::Calves],
        2,
        vec![
            day(
                DayKind::FullBody,
                &[MuscleGroup::Chest, MuscleGroup::Chest, MuscleGroup::Calves, MuscleGroup::Calves],
            ),
        ],
    )]
    #[case::minimum_reached_by_template(
        SplitTemplate::PushPullLegs,
        3,
        &[MuscleGroup::Chest],
        1,
        vec![
            day(DayKind::Push, &[MuscleGroup::Chest]),
            day(DayKind::Pull, &[]),
            day(DayKind::Legs, &[]),
        ],
    )]
    #[case::full_body_exceeds_minimum(
        SplitTemplate::FullBody,
        3,
        &[MuscleGroup::Lats],
        2,
        vec![
            day(DayKind::FullBody, &[MuscleGroup::Lats]),
            day(DayKind::FullBody, &[MuscleGroup::Lats]),
            day(DayKind::FullBody, &[MuscleGroup::Lats]),
        ],
    )]
    fn test_schedule_week(
        #[case] split_template: SplitTemplate,
        #[case] days_per_week: u32,
        #[case] target_muscle_groups: &[MuscleGroup],
        #[case] minimum_frequency: u32,
        #[case] expected: Vec<DayAllocation>,
    ) {
        assert_eq!(
            schedule_week(
                split_template,
                days_per_week,
                &target_muscle_groups.iter().copied().collect(),
                minimum_frequency
            ),
            WeeklyAllocation { days: expected }
        );
    }

    #[test]
    fn test_schedule_week_without_days() {
        assert_eq!(
            schedule_week(
                SplitTemplate::FullBody,
                0,
                &BTreeSet::from([MuscleGroup::Chest]),
                2
            ),
            WeeklyAllocation { days: vec![] }
        );
    }

    #[rstest]
    fn test_schedule_week_reaches_minimum_frequency(
        #[values(SplitTemplate::PushPullLegs, SplitTemplate::UpperLower, SplitTemplate::FullBody)]
        split_template: SplitTemplate,
        #[values(1, 2, 3, 4, 5, 6, 7)] days_per_week: u32,
        #[values(1, 2, 3)] minimum_frequency: u32,
    ) {
        let target_muscle_groups = BTreeSet::from([
            MuscleGroup::Chest,
            MuscleGroup::Lats,
            MuscleGroup::SideDelts,
            MuscleGroup::Quads,
            MuscleGroup::Calves,
        ]);
        let week = schedule_week(
            split_template,
            days_per_week,
            &target_muscle_groups,
            minimum_frequency,
        );
        assert_eq!(week.days.len(), days_per_week as usize);
        for muscle_group in &target_muscle_groups {
            assert!(week.frequency(*muscle_group) >= minimum_frequency as usize);
        }
        for day in &week.days {
            assert!(day.muscle_groups.is_sorted());
            assert!(
                day.muscle_groups
                    .iter()
                    .all(|m| target_muscle_groups.contains(m))
            );
        }
    }

    #[test]
    fn test_schedule() {
        let request = MesocycleRequest {
            goal: Goal::Hypertrophy,
            weeks: 3,
            days_per_week: 4,
            target_muscle_groups: BTreeSet::from([MuscleGroup::Chest, MuscleGroup::Hamstrings]),
            includes_deload: true,
            split_template: SplitTemplate::UpperLower,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        };
        let allocation = schedule(&request);
        assert_eq!(allocation.weeks.len(), 3);
        assert!(allocation.weeks.iter().all(|w| *w == allocation.weeks[0]));
        assert_eq!(
            allocation.weeks[0],
            WeeklyAllocation {
                days: vec![
                    day(DayKind::Upper, &[MuscleGroup::Chest]),
                    day(DayKind::Lower, &[MuscleGroup::Hamstrings]),
                    day(DayKind::Upper, &[MuscleGroup::Chest]),
                    day(DayKind::Lower, &[MuscleGroup::Hamstrings]),
                ]
            }
        );
    }
}
