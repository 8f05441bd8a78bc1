use judge_api::{first_failure, CaseStatus, JobState, PresentationKind};

fn judging(cases: Vec<CaseStatus>) -> JobState {
    JobState::Judging { cases }
}

fn testing(status: CaseStatus) -> JobState {
    JobState::Testing { status }
}

#[test]
fn judging_is_complete_only_when_every_case_is_terminal() {
    assert!(judging(vec![
        CaseStatus::Passed(None),
        CaseStatus::Failed("TLE".to_string()),
        CaseStatus::NotRun,
    ])
    .is_complete());

    assert!(!judging(vec![CaseStatus::Passed(None), CaseStatus::Pending]).is_complete());
    assert!(!judging(vec![CaseStatus::Running]).is_complete());
    assert!(!judging(vec![
        CaseStatus::Failed("wrong answer".to_string()),
        CaseStatus::Running,
    ])
    .is_complete());

    // Vacuously complete; the server never publishes an empty battery.
    assert!(judging(Vec::new()).is_complete());
}

#[test]
fn testing_is_complete_only_for_terminal_statuses() {
    assert!(!testing(CaseStatus::Pending).is_complete());
    assert!(!testing(CaseStatus::Running).is_complete());
    assert!(testing(CaseStatus::Passed(None)).is_complete());
    assert!(testing(CaseStatus::Passed(Some("out".to_string()))).is_complete());
    assert!(testing(CaseStatus::Failed("Runtime Error: exit 1".to_string())).is_complete());
    assert!(testing(CaseStatus::NotRun).is_complete());
}

#[test]
fn first_failure_picks_the_lowest_index_and_its_content() {
    let cases = vec![
        CaseStatus::Passed(None),
        CaseStatus::Failed("wrong answer".to_string()),
        CaseStatus::NotRun,
    ];

    assert_eq!(first_failure(&cases), Some((1, "wrong answer")));
}

#[test]
fn first_failure_ignores_not_run_tails_on_success() {
    let cases = vec![
        CaseStatus::Passed(None),
        CaseStatus::Passed(Some("echoed".to_string())),
        CaseStatus::NotRun,
    ];

    assert_eq!(first_failure(&cases), None);
}

#[test]
fn first_failure_prefers_the_earliest_of_several_failures() {
    let cases = vec![
        CaseStatus::Failed("first".to_string()),
        CaseStatus::Failed("second".to_string()),
    ];

    assert_eq!(first_failure(&cases), Some((0, "first")));
}

#[test]
fn presentation_mapping_is_fixed() {
    assert_eq!(
        CaseStatus::Failed("x".to_string()).presentation(),
        PresentationKind::Error
    );
    assert_eq!(CaseStatus::Passed(None).presentation(), PresentationKind::Success);
    assert_eq!(
        CaseStatus::Passed(Some("out".to_string())).presentation(),
        PresentationKind::Success
    );
    assert_eq!(CaseStatus::NotRun.presentation(), PresentationKind::Empty);
    assert_eq!(CaseStatus::Pending.presentation(), PresentationKind::Idle);
    assert_eq!(CaseStatus::Running.presentation(), PresentationKind::Loading);
}

#[test]
fn terminal_statuses_never_include_pending_or_running() {
    assert!(CaseStatus::Passed(None).is_terminal());
    assert!(CaseStatus::Failed("x".to_string()).is_terminal());
    assert!(CaseStatus::NotRun.is_terminal());
    assert!(!CaseStatus::Pending.is_terminal());
    assert!(!CaseStatus::Running.is_terminal());
}

#[test]
fn content_is_exposed_for_passed_and_failed_only() {
    assert_eq!(CaseStatus::Passed(None).content(), None);
    assert_eq!(
        CaseStatus::Passed(Some("stdout".to_string())).content(),
        Some("stdout")
    );
    assert_eq!(
        CaseStatus::Failed("diagnostic".to_string()).content(),
        Some("diagnostic")
    );
    assert_eq!(CaseStatus::Pending.content(), None);
    assert_eq!(CaseStatus::Running.content(), None);
    assert_eq!(CaseStatus::NotRun.content(), None);
}

#[test]
fn case_count_matches_indicator_slots() {
    assert_eq!(
        judging(vec![CaseStatus::Pending, CaseStatus::Pending]).case_count(),
        2
    );
    assert_eq!(testing(CaseStatus::Running).case_count(), 1);
}

#[test]
fn presentation_kind_names_are_stable() {
    assert_eq!(PresentationKind::Error.as_str(), "error");
    assert_eq!(PresentationKind::Success.as_str(), "success");
    assert_eq!(PresentationKind::Empty.as_str(), "empty");
    assert_eq!(PresentationKind::Idle.as_str(), "idle");
    assert_eq!(PresentationKind::Loading.as_str(), "loading");
}
