//! Schedules spanning several weeks.

use nurseforge_config::StaffingConfig;
use nurseforge_core::ShiftOfDay;
use nurseforge_scoring::ScheduleModel;
use nurseforge_test::{roster_of, ScheduleBuilder};

fn two_week_model() -> ScheduleModel {
    let roster = roster_of(&[("ana", [1, 0, 0]), ("luis", [0, 0, 1])])
        .with_staffing(StaffingConfig::default().with_weeks(2));
    ScheduleModel::from_roster(&roster).unwrap()
}

#[test]
fn sizes_scale_with_weeks() {
    let model = two_week_model();
    assert_eq!(model.total_length(), 2 * 21 * 2);
    assert_eq!(model.days(), 14);
}

#[test]
fn preferences_apply_to_the_second_week() {
    let model = two_week_model();
    let schedule = ScheduleBuilder::new(2, 2)
        .assign(0, 10, ShiftOfDay::Afternoon)
        .assign(1, 13, ShiftOfDay::Morning)
        .build();

    let explanation = model.explain(&schedule).unwrap();
    assert_eq!(explanation.preferences.per_staff, vec![1, 1]);
}

#[test]
fn weekly_cap_is_checked_per_week() {
    let model = two_week_model();
    // Ten mornings straddling the week boundary: 5 + 5.
    let schedule = (2..12)
        .fold(ScheduleBuilder::new(2, 2), |builder, day| {
            builder.assign(0, day, ShiftOfDay::Morning)
        })
        .build();

    let explanation = model.explain(&schedule).unwrap();
    assert_eq!(explanation.weekly.totals_for(0), &[5, 5]);
    assert_eq!(explanation.counts().weekly_overwork, 0);
}

#[test]
fn consecutive_pairs_cross_the_week_boundary() {
    let model = two_week_model();
    let schedule = ScheduleBuilder::new(2, 2)
        .assign(1, 6, ShiftOfDay::Night)
        .assign(1, 7, ShiftOfDay::Morning)
        .build();

    let counts = model.counts(&schedule).unwrap();
    assert_eq!(counts.consecutive_shifts, 1);
}

#[test]
fn staffing_list_covers_every_slot() {
    let model = two_week_model();
    let schedule = ScheduleBuilder::new(2, 2)
        .everyone(ShiftOfDay::Night)
        .build();

    let explanation = model.explain(&schedule).unwrap();
    assert_eq!(explanation.staffing.staffed_per_slot.len(), 42);
    assert!(explanation
        .staffing
        .slots()
        .all(|(_, shift, staffed)| staffed == if shift == ShiftOfDay::Night { 2 } else { 0 }));
    // Nights are met; mornings miss 4 and afternoons 3, for 14 days.
    assert_eq!(explanation.counts().staffing_bounds, 7 * 14);
}

#[test]
fn custom_constants_from_yaml() {
    let config = StaffingConfig::from_yaml_str(
        "min_per_shift: [1, 1, 1]\nmax_per_shift: [1, 1, 1]\nmax_shifts_per_week: 7\nhard_penalty_weight: 10.0\nweeks: 1\n",
    )
    .unwrap();
    let model = ScheduleModel::with_config(["ana"], vec![[1, 1, 1]], config).unwrap();
    let schedule = ScheduleBuilder::new(1, 1).every_day(0, [1, 0, 0]).build();

    // Afternoons and nights are each one short on all 7 days.
    assert_eq!(model.cost(&schedule).unwrap().to_string(), "140");
}
