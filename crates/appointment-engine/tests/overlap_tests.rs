//! Tests for overlap detection against a customer's existing bookings.

use appointment_engine::{find_conflict, has_conflict, ConflictKind, TimeInterval};
use chrono::{TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

const ZONE: Tz = New_York;

/// Helper to create an interval from Eastern wall-clock hour ranges on a given day.
fn interval(
    year: i32,
    month: u32,
    day: u32,
    start_hour: u32,
    start_min: u32,
    end_hour: u32,
    end_min: u32,
) -> TimeInterval {
    TimeInterval::new(
        New_York
            .with_ymd_and_hms(year, month, day, start_hour, start_min, 0)
            .unwrap(),
        New_York
            .with_ymd_and_hms(year, month, day, end_hour, end_min, 0)
            .unwrap(),
    )
}

fn on_march_4(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeInterval {
    interval(2024, 3, 4, start_hour, start_min, end_hour, end_min)
}

#[test]
fn empty_existing_never_conflicts() {
    assert!(!has_conflict(&on_march_4(9, 0, 10, 0), &[], None, ZONE));
}

#[test]
fn identical_intervals_conflict() {
    let a = on_march_4(9, 0, 10, 0);
    let conflict = find_conflict(&a, &[a], None, ZONE).expect("identical should conflict");
    assert_eq!(conflict.kind, ConflictKind::SharedStart);
    assert_eq!(conflict.overlap_minutes, 60);
}

#[test]
fn start_inside_existing() {
    let conflict = find_conflict(&on_march_4(9, 30, 10, 30), &[on_march_4(9, 0, 10, 0)], None, ZONE)
        .expect("should conflict");
    assert_eq!(conflict.kind, ConflictKind::StartInside);
    assert_eq!(conflict.overlap_minutes, 30);
}

#[test]
fn end_inside_existing() {
    let conflict = find_conflict(&on_march_4(8, 30, 9, 15), &[on_march_4(9, 0, 10, 0)], None, ZONE)
        .expect("should conflict");
    assert_eq!(conflict.kind, ConflictKind::EndInside);
    assert_eq!(conflict.overlap_minutes, 15);
}

#[test]
fn shared_end_conflicts() {
    let conflict = find_conflict(&on_march_4(8, 0, 10, 0), &[on_march_4(9, 0, 10, 0)], None, ZONE)
        .expect("should conflict");
    assert_eq!(conflict.kind, ConflictKind::SharedEnd);
}

#[test]
fn proposed_containing_existing_conflicts() {
    let conflict = find_conflict(&on_march_4(9, 0, 12, 0), &[on_march_4(10, 0, 11, 0)], None, ZONE)
        .expect("should conflict");
    assert_eq!(conflict.kind, ConflictKind::Contains);
    assert_eq!(conflict.overlap_minutes, 60);
}

#[test]
fn proposed_inside_existing_conflicts() {
    let conflict = find_conflict(&on_march_4(10, 0, 11, 0), &[on_march_4(9, 0, 12, 0)], None, ZONE)
        .expect("should conflict");
    assert_eq!(conflict.kind, ConflictKind::StartInside);
}

#[test]
fn abutting_after_is_not_a_conflict() {
    // Existing 09:00-10:00, proposed 10:00-11:00.
    assert!(!has_conflict(&on_march_4(10, 0, 11, 0), &[on_march_4(9, 0, 10, 0)], None, ZONE));
}

#[test]
fn abutting_before_is_not_a_conflict() {
    assert!(!has_conflict(&on_march_4(8, 0, 9, 0), &[on_march_4(9, 0, 10, 0)], None, ZONE));
}

#[test]
fn disjoint_same_day_is_not_a_conflict() {
    assert!(!has_conflict(&on_march_4(9, 0, 10, 0), &[on_march_4(14, 0, 15, 0)], None, ZONE));
}

#[test]
fn same_hours_on_another_day_is_not_a_conflict() {
    let proposed = on_march_4(9, 0, 10, 0);
    let other_day = interval(2024, 3, 5, 9, 0, 10, 0);
    let other_year = interval(2025, 3, 4, 9, 0, 10, 0);
    assert!(!has_conflict(&proposed, &[other_day, other_year], None, ZONE));
}

#[test]
fn excluded_interval_is_skipped() {
    let original = on_march_4(10, 0, 11, 0);
    let proposed = on_march_4(10, 30, 11, 30);
    assert!(!has_conflict(&proposed, &[original], Some(&original), ZONE));
}

#[test]
fn exclusion_matches_by_instant_not_by_zone() {
    // Same instants entered in UTC instead of Eastern.
    let stored = on_march_4(10, 0, 11, 0);
    let exclude = TimeInterval::new(
        Utc.with_ymd_and_hms(2024, 3, 4, 15, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 4, 16, 0, 0).unwrap(),
    );
    let proposed = on_march_4(10, 30, 11, 30);
    assert!(!has_conflict(&proposed, &[stored], Some(&exclude), ZONE));
}

#[test]
fn exclusion_requires_both_endpoints_to_match() {
    let stored = on_march_4(10, 0, 11, 0);
    let near_miss = on_march_4(10, 0, 11, 15);
    let proposed = on_march_4(10, 30, 11, 30);
    assert!(has_conflict(&proposed, &[stored], Some(&near_miss), ZONE));
}

#[test]
fn first_conflict_is_reported() {
    let existing = [
        on_march_4(8, 0, 8, 30),
        on_march_4(9, 30, 10, 30),
        on_march_4(9, 0, 9, 45),
    ];
    let conflict = find_conflict(&on_march_4(9, 15, 10, 0), &existing, None, ZONE).unwrap();
    assert_eq!(conflict.with, existing[1]);
}

#[test]
fn invalid_proposed_is_not_comparable() {
    let backwards = on_march_4(11, 0, 10, 0);
    assert!(!has_conflict(&backwards, &[on_march_4(9, 0, 12, 0)], None, ZONE));
}

#[test]
fn conflict_across_input_zones() {
    // 07:00-08:00 Pacific is 10:00-11:00 Eastern.
    let pacific = TimeInterval::new(
        chrono_tz::America::Los_Angeles
            .with_ymd_and_hms(2024, 3, 4, 7, 0, 0)
            .unwrap(),
        chrono_tz::America::Los_Angeles
            .with_ymd_and_hms(2024, 3, 4, 8, 0, 0)
            .unwrap(),
    );
    let existing = [on_march_4(10, 0, 11, 0)];
    assert!(has_conflict(&pacific, &existing, None, ZONE));
}

#[test]
fn prefilter_uses_reference_zone_day() {
    // 18:30-19:30 Eastern starts on March 4 in UTC (23:30Z); 19:00-19:45
    // Eastern starts on March 5 in UTC (00:00Z). Same Eastern day, so the
    // pair must be compared even though their UTC start dates differ.
    let proposed = on_march_4(18, 30, 19, 30);
    let existing = on_march_4(19, 0, 19, 45);
    assert_ne!(
        proposed.start.utc().date_naive(),
        existing.start.utc().date_naive()
    );

    let conflict = find_conflict(&proposed, &[existing], None, ZONE).expect("should conflict");
    assert_eq!(conflict.kind, ConflictKind::EndInside);
    assert_eq!(conflict.overlap_minutes, 30);
    assert!(has_conflict(&existing, &[proposed], None, ZONE));
}

#[test]
fn prefilter_skips_only_other_reference_days() {
    // Same UTC date (March 5), different Eastern dates: 23:30 Eastern on
    // March 4 and 10:00 Eastern on March 5.
    let late = TimeInterval::new(
        Utc.with_ymd_and_hms(2024, 3, 5, 4, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 5, 4, 45, 0).unwrap(),
    );
    let morning = interval(2024, 3, 5, 10, 0, 11, 0);
    assert_eq!(late.start.utc().date_naive(), morning.start.utc().date_naive());
    assert!(!has_conflict(&morning, &[late], None, ZONE));
    assert!(!has_conflict(&late, &[morning], None, ZONE));
}
