use std::time::{Duration, Instant};

use showcase::{Lab, LabSession, RunState, ShowcaseConfig, ShowcaseErr};
use synthetic::{Algorithm, HyperparameterSet, Jitter, ParamValue};

fn lab(delay: bool) -> Lab {
    let config = ShowcaseConfig {
        seed: Some(7),
        delay,
        ..Default::default()
    };
    Lab::new(&config).unwrap()
}

#[test]
fn runs_complete_after_the_delay() {
    let mut lab = lab(true);
    let t0 = Instant::now();

    let delay = lab.start(Algorithm::XgBoost, t0).unwrap();
    assert!(delay >= Duration::from_millis(1500));
    assert!(delay <= Duration::from_millis(2500));
    assert!(lab.session(Algorithm::XgBoost).is_running());
    assert!(lab.session(Algorithm::XgBoost).result().is_none());

    assert!(lab.tick(t0 + delay / 2).is_empty());
    let progress = lab.session(Algorithm::XgBoost).progress(t0 + delay / 2).unwrap();
    assert!((progress - 0.5).abs() < 0.01);

    assert_eq!(lab.tick(t0 + delay), vec![Algorithm::XgBoost]);
    let session = lab.session(Algorithm::XgBoost);
    assert!(!session.is_running());
    assert_eq!(session.runs(), 1);
    assert_eq!(session.result().unwrap().metrics.primary.value, 0.884);
}

#[test]
fn re_entrant_runs_are_rejected() {
    let mut lab = lab(true);
    let t0 = Instant::now();

    lab.start(Algorithm::Svm, t0).unwrap();
    assert!(matches!(
        lab.start(Algorithm::Svm, t0),
        Err(ShowcaseErr::AlreadyRunning(Algorithm::Svm))
    ));
}

#[test]
fn tabs_run_independently() {
    let mut lab = lab(true);
    let t0 = Instant::now();

    let knn = lab.start(Algorithm::Knn, t0).unwrap();
    let rf = lab.start(Algorithm::RandomForest, t0).unwrap();
    assert_eq!(lab.running().count(), 2);
    assert!(!lab.session(Algorithm::Linear).is_running());

    let later = t0 + knn.max(rf);
    let mut finished = lab.tick(later);
    finished.sort_by_key(|a| a.index());
    assert_eq!(finished, vec![Algorithm::Knn, Algorithm::RandomForest]);
    assert_eq!(lab.session(Algorithm::Linear).state(), &RunState::Idle);
}

#[test]
fn without_delay_runs_finish_immediately() {
    let mut lab = lab(false);
    let delay = lab.start_active(Instant::now()).unwrap();

    assert_eq!(delay, Duration::ZERO);
    assert!(lab.active().result().is_some());
    assert_eq!(lab.events().len(), 1);
}

#[test]
fn slider_changes_apply_to_the_next_run_only() {
    let mut lab = lab(true);
    let t0 = Instant::now();

    let delay = lab.start(Algorithm::XgBoost, t0).unwrap();
    let session = lab.session_mut(Algorithm::XgBoost);
    session.nudge(3);
    assert_eq!(session.params().get("max_depth"), Some(ParamValue::Number(6.0)));

    lab.tick(t0 + delay);
    let run = lab.session(Algorithm::XgBoost).result().unwrap();
    assert_eq!(run.metrics.primary.value, 0.884);
}

#[test]
fn slider_navigation_wraps_and_reset_restores() {
    let mut session = LabSession::new(HyperparameterSet::defaults(Algorithm::Knn));
    session.select_previous();
    assert_eq!(session.selected_param().unwrap().0.name, "weights");

    session.nudge(1);
    assert_eq!(session.selected_param().unwrap().1, ParamValue::Choice("distance"));

    session.select_next();
    session.set("k", "11").unwrap();
    assert!(session.set("k", "0").is_err());
    assert_eq!(session.params().get("k"), Some(ParamValue::Number(11.0)));

    session.reset();
    assert_eq!(session.params(), &HyperparameterSet::defaults(Algorithm::Knn));
}

#[test]
fn sessions_built_by_hand_share_the_jitter() {
    let sessions = Algorithm::ALL
        .iter()
        .map(|a| LabSession::new(HyperparameterSet::defaults(*a)))
        .collect();
    let mut lab = Lab::with_sessions(sessions, Jitter::none(), false);

    lab.next_tab();
    assert_eq!(lab.tabs().active(), Algorithm::Knn);
    lab.start_active(Instant::now()).unwrap();

    let run = lab.session(Algorithm::Knn).result().unwrap();
    assert!(run.series.points.iter().all(|p| p.y == p.predicted));
}

#[test]
fn sessions_are_placed_by_algorithm_whatever_the_input_order() {
    let mut knn = HyperparameterSet::defaults(Algorithm::Knn);
    knn.set_str("k", "11").unwrap();
    let sessions = vec![
        LabSession::new(HyperparameterSet::defaults(Algorithm::Svm)),
        LabSession::new(knn.clone()),
        LabSession::new(HyperparameterSet::defaults(Algorithm::XgBoost)),
    ];
    let lab = Lab::with_sessions(sessions, Jitter::none(), false);

    for algorithm in Algorithm::ALL {
        assert_eq!(lab.session(algorithm).algorithm(), algorithm);
    }
    assert_eq!(lab.session(Algorithm::Knn).params(), &knn);
    assert_eq!(
        lab.session(Algorithm::Linear).params(),
        &HyperparameterSet::defaults(Algorithm::Linear)
    );
}
