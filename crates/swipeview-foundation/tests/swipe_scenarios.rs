//! End-to-end contacts through `handle_sample`, observed through recording
//! collaborators.

use std::rc::Rc;
use swipeview_foundation::{
    DirectionSelector, GesturePhase, Outcome, SwipeConfig, SwipeDirection, SwipeEvent,
    SwipeRecognizer,
};
use swipeview_testing::prelude::*;

type Recognizer = SwipeRecognizer<RecordingPresenter, RecordingArbiter>;

fn setup_with(
    presenter: RecordingPresenter,
    config: SwipeConfig,
) -> (Recognizer, Rc<RecordingListener>) {
    let mut recognizer = SwipeRecognizer::with_config(presenter, RecordingArbiter::new(), config);
    let listener = Rc::new(RecordingListener::new());
    recognizer.set_listener(listener.clone());
    (recognizer, listener)
}

fn setup(config: SwipeConfig) -> (Recognizer, Rc<RecordingListener>) {
    setup_with(RecordingPresenter::new(), config)
}

/// Slop of 10 and a 100px swipe-out distance with an unreachable speed.
fn distance_only() -> SwipeConfig {
    SwipeConfig::default()
        .with_touch_slop(10.0)
        .with_swipe_out_distance(100.0)
        .with_swipe_out_speed(999_999.0)
}

#[test]
fn committed_drag_past_distance_swipes_out() {
    let (mut recognizer, listener) = setup(distance_only());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new().down(500.0).move_to(560.0).play(&mut recognizer);
    assert_events(&listener.events(), &[SwipeEvent::SwipeStart], "after commit");

    GestureScript::new()
        .starting_at(32)
        .up(700.0)
        .play(&mut recognizer);
    assert_eq!(
        recognizer.last_outcome(),
        Some(Outcome::SwipeOut(SwipeDirection::Right))
    );
    assert_events(
        &listener.events(),
        &[SwipeEvent::SwipeStart, SwipeEvent::WillBeSwipedOut],
        "before the transition settles",
    );

    let transition = recognizer.presenter().last_transition().expect("transition");
    assert_eq!(transition.target_translation_x, 400.0);
    assert_eq!(transition.target_alpha, 0.0);

    assert_eq!(recognizer.presenter_mut().finish_transitions(), 1);
    assert_events(
        &listener.events(),
        &[
            SwipeEvent::SwipeStart,
            SwipeEvent::WillBeSwipedOut,
            SwipeEvent::SwipedOut,
        ],
        "after the transition settles",
    );
    assert_eq!(recognizer.phase(), GesturePhase::Idle);
}

#[test]
fn displacement_equal_to_slop_does_not_commit() {
    let (mut recognizer, listener) = setup(distance_only());

    GestureScript::new().down(500.0).move_to(510.0).play(&mut recognizer);
    assert_eq!(listener.count(SwipeEvent::SwipeStart), 0);
    assert_eq!(recognizer.arbiter().claims(), &[false]);
    assert_eq!(recognizer.phase(), GesturePhase::Tracking);

    GestureScript::new()
        .starting_at(32)
        .move_to(510.5)
        .play(&mut recognizer);
    assert_eq!(listener.count(SwipeEvent::SwipeStart), 1);
    assert!(recognizer.arbiter().is_claimed());
}

#[test]
fn jitter_within_slop_never_commits() {
    let (mut recognizer, listener) = setup(distance_only());
    recognizer.on_surface_width_changed(400.0);

    let mut script = GestureScript::new().down(500.0);
    for offset in [3.0, -7.0, 10.0, -10.0, 9.5, 0.0, -4.0] {
        script = script.move_to(500.0 + offset);
    }
    script.up(506.0).play(&mut recognizer);
    recognizer.presenter_mut().finish_transitions();

    assert!(listener.events().is_empty());
    assert!(recognizer.arbiter().claims().iter().all(|claim| !claim));
    assert_eq!(recognizer.last_outcome(), Some(Outcome::BounceBack));
}

#[test]
fn plain_tap_is_silent() {
    let (mut recognizer, listener) = setup(distance_only());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new().down(200.0).up(202.0).play(&mut recognizer);

    // The surface still returns to rest, quietly.
    let transition = recognizer.presenter().last_transition().expect("transition");
    assert_eq!(transition.target_translation_x, 0.0);
    assert_eq!(transition.target_alpha, 1.0);
    recognizer.presenter_mut().finish_transitions();
    assert!(listener.events().is_empty());
    assert!(recognizer.arbiter().claims().is_empty());
}

#[test]
fn disallowed_direction_bounces_regardless_of_distance() {
    let config = distance_only().with_swipe_direction(DirectionSelector::Right);
    let (mut recognizer, listener) = setup(config);
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(1500.0)
        .wait(300)
        .up(500.0)
        .play(&mut recognizer);
    recognizer.presenter_mut().finish_transitions();

    assert_eq!(recognizer.last_outcome(), Some(Outcome::BounceBack));
    assert!(listener.events().is_empty());
}

#[test]
fn distance_threshold_is_inclusive() {
    for (release_x, expected) in [
        (100.0, Outcome::SwipeOut(SwipeDirection::Right)),
        (99.999, Outcome::BounceBack),
    ] {
        let (mut recognizer, _) = setup(distance_only());
        GestureScript::new()
            .down(0.0)
            .move_to(50.0)
            .wait(500)
            .up(release_x)
            .play(&mut recognizer);
        assert_eq!(
            recognizer.last_outcome(),
            Some(expected),
            "release at {}",
            release_x
        );
    }
}

#[test]
fn fast_fling_swipes_out_before_distance() {
    let (mut recognizer, listener) = setup(SwipeConfig::default());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .move_to(520.0)
        .move_to(540.0)
        .up(560.0)
        .play(&mut recognizer);

    assert_eq!(
        recognizer.last_outcome(),
        Some(Outcome::SwipeOut(SwipeDirection::Right))
    );
    assert_eq!(listener.count(SwipeEvent::WillBeSwipedOut), 1);

    // 340px left to fly at 1.25px/ms.
    let transition = recognizer.presenter().last_transition().expect("transition");
    assert_eq!(transition.spec.duration_millis, 272);
}

#[test]
fn slow_release_short_of_distance_bounces_back() {
    let (mut recognizer, listener) = setup(SwipeConfig::default());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .drag_to(650.0, 6)
        .wait(200)
        .up(650.0)
        .play(&mut recognizer);
    recognizer.presenter_mut().finish_transitions();

    assert_events(
        &listener.events(),
        &[
            SwipeEvent::SwipeStart,
            SwipeEvent::WillBounceBack,
            SwipeEvent::BouncedBack,
        ],
        "slow release",
    );
    let transition = recognizer.presenter().last_transition().expect("transition");
    assert_eq!(transition.spec, recognizer.config().bounce_back);
}

#[test]
fn fling_direction_is_not_checked_against_displacement() {
    let (mut recognizer, _) = setup(SwipeConfig::default());
    recognizer.on_surface_width_changed(400.0);

    // Net displacement stays to the right while the finger flicks back left.
    GestureScript::new()
        .down(500.0)
        .move_to(700.0)
        .wait(100)
        .move_to(690.0)
        .move_to(650.0)
        .move_to(610.0)
        .up(570.0)
        .play(&mut recognizer);

    assert_eq!(
        recognizer.last_outcome(),
        Some(Outcome::SwipeOut(SwipeDirection::Right))
    );
    let transition = recognizer.presenter().last_transition().expect("transition");
    assert_eq!(transition.target_translation_x, 400.0);
}

#[test]
fn cancel_resolves_like_release() {
    let (mut recognizer, listener) = setup(distance_only());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .move_to(560.0)
        .cancel(700.0)
        .play(&mut recognizer);
    recognizer.presenter_mut().finish_transitions();

    assert_events(
        &listener.events(),
        &[
            SwipeEvent::SwipeStart,
            SwipeEvent::WillBeSwipedOut,
            SwipeEvent::SwipedOut,
        ],
        "cancelled after commit",
    );
    assert_eq!(recognizer.arbiter().claims(), &[true, false]);
}

#[test]
fn cancel_before_commit_is_silent() {
    let (mut recognizer, listener) = setup(distance_only());
    GestureScript::new()
        .down(500.0)
        .move_to(505.0)
        .cancel(505.0)
        .play(&mut recognizer);
    recognizer.presenter_mut().finish_transitions();
    assert!(listener.events().is_empty());
    assert_eq!(recognizer.phase(), GesturePhase::Idle);
}

#[test]
fn every_released_gesture_settles_exactly_once() {
    let (mut recognizer, listener) = setup(SwipeConfig::default().with_touch_slop(10.0));
    recognizer.on_surface_width_changed(400.0);

    let releases = [(-300.0, 8), (40.0, 3), (260.0, 10), (-15.0, 2), (120.0, 20)];
    let mut start = 0;
    for (offset, steps) in releases {
        listener.clear();
        GestureScript::new()
            .starting_at(start)
            .step(12)
            .down(500.0)
            .drag_to(500.0 + offset, steps)
            .wait(80)
            .up(500.0 + offset)
            .play(&mut recognizer);
        recognizer.presenter_mut().finish_transitions();
        start += 1_000;

        let settled =
            listener.count(SwipeEvent::SwipedOut) + listener.count(SwipeEvent::BouncedBack);
        assert_eq!(settled, 1, "drag by {}", offset);
        assert_eq!(listener.count(SwipeEvent::SwipeStart), 1, "drag by {}", offset);
        assert_eq!(
            listener.count(SwipeEvent::WillBeSwipedOut),
            listener.count(SwipeEvent::SwipedOut)
        );
        assert_eq!(
            listener.count(SwipeEvent::WillBounceBack),
            listener.count(SwipeEvent::BouncedBack)
        );
    }
}

#[test]
fn claims_every_move_once_committed() {
    let (mut recognizer, _) = setup(distance_only());
    GestureScript::new()
        .down(500.0)
        .move_to(505.0)
        .move_to(530.0)
        .move_to(520.0)
        .move_to(501.0)
        .up(501.0)
        .play(&mut recognizer);

    // The latch holds even after the finger drifts back inside the slop.
    assert_eq!(
        recognizer.arbiter().claims(),
        &[false, true, true, true, false]
    );
}

#[test]
fn live_effect_follows_the_finger() {
    let (mut recognizer, _) = setup(SwipeConfig::default().with_touch_slop(10.0));
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .move_to(600.0)
        .move_to(700.0)
        .move_to(1000.0)
        .play(&mut recognizer);

    let effects = recognizer.presenter().live_effects();
    assert_eq!(effects.len(), 3);
    assert_eq!(effects[0].translation_x, 100.0);
    assert_approx_eq(effects[0].alpha, 0.55, 1e-5, "halfway to distance");
    assert_approx_eq(effects[1].alpha, 0.1, 1e-5, "at distance");
    assert_eq!(effects[2].translation_x, 500.0);
    assert_approx_eq(effects[2].alpha, 0.1, 1e-5, "past distance");
}

#[test]
fn live_effect_pins_disallowed_direction() {
    let config = SwipeConfig::default()
        .with_touch_slop(10.0)
        .with_swipe_direction(DirectionSelector::from_name("right"));
    let (mut recognizer, listener) = setup(config);
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .move_to(450.0)
        .move_to(300.0)
        .play(&mut recognizer);

    assert!(recognizer
        .presenter()
        .live_effects()
        .iter()
        .all(|visual| visual.translation_x == 0.0 && visual.alpha == 1.0));
    assert_eq!(listener.count(SwipeEvent::SwipeStart), 0);
}

#[test]
fn opacity_disabled_keeps_surface_opaque() {
    let config = SwipeConfig::default()
        .with_touch_slop(10.0)
        .with_change_opacity(false);
    let (mut recognizer, _) = setup(config);
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .drag_to(900.0, 4)
        .play(&mut recognizer);
    assert!(recognizer
        .presenter()
        .live_effects()
        .iter()
        .all(|visual| visual.alpha == 1.0));
}

#[test]
fn late_completion_from_previous_gesture_is_dropped() {
    let (mut recognizer, listener) = setup(distance_only());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .move_to(540.0)
        .wait(200)
        .up(540.0)
        .play(&mut recognizer);
    let stale = recognizer.presenter_mut().take_pending();

    GestureScript::new()
        .starting_at(1_000)
        .down(500.0)
        .move_to(560.0)
        .play(&mut recognizer);
    for completion in stale {
        assert!(!completion.is_current());
        completion.complete();
    }
    assert_eq!(recognizer.phase(), GesturePhase::Committed);

    GestureScript::new()
        .starting_at(1_032)
        .up(700.0)
        .play(&mut recognizer);
    recognizer.presenter_mut().finish_transitions();

    assert_events(
        &listener.events(),
        &[
            SwipeEvent::SwipeStart,
            SwipeEvent::WillBounceBack,
            SwipeEvent::SwipeStart,
            SwipeEvent::WillBeSwipedOut,
            SwipeEvent::SwipedOut,
        ],
        "overlapping gestures",
    );
}

#[test]
fn superseded_transition_never_reports() {
    let (mut recognizer, listener) =
        setup_with(RecordingPresenter::superseding(), distance_only());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new()
        .down(500.0)
        .move_to(560.0)
        .up(700.0)
        .play(&mut recognizer);
    assert_eq!(recognizer.presenter().pending_count(), 1);

    GestureScript::new()
        .starting_at(500)
        .down(500.0)
        .move_to(505.0)
        .play(&mut recognizer);
    assert_eq!(recognizer.presenter().pending_count(), 0);
    assert_eq!(listener.count(SwipeEvent::SwipedOut), 0);
}

#[test]
fn deferred_config_applies_to_the_next_contact() {
    let (mut recognizer, listener) = setup(distance_only());
    recognizer.on_surface_width_changed(400.0);

    GestureScript::new().down(500.0).play(&mut recognizer);
    recognizer.set_config(distance_only().with_swipe_direction(DirectionSelector::Left));
    GestureScript::new()
        .starting_at(16)
        .move_to(560.0)
        .up(700.0)
        .play(&mut recognizer);
    assert_eq!(
        recognizer.last_outcome(),
        Some(Outcome::SwipeOut(SwipeDirection::Right))
    );

    listener.clear();
    GestureScript::new()
        .starting_at(1_000)
        .down(500.0)
        .move_to(560.0)
        .up(700.0)
        .play(&mut recognizer);
    assert_eq!(recognizer.last_outcome(), Some(Outcome::BounceBack));
    assert_eq!(listener.count(SwipeEvent::SwipeStart), 0);
}

#[test]
fn narrow_surface_uses_threshold_floor() {
    let (mut recognizer, _) = setup(SwipeConfig::default().with_touch_slop(4.0));
    let thresholds = recognizer.on_surface_width_changed(20.0);
    assert_eq!(thresholds.swipe_out_distance, 24.0);

    GestureScript::new()
        .down(10.0)
        .move_to(16.0)
        .wait(200)
        .up(16.0)
        .play(&mut recognizer);
    assert_eq!(recognizer.last_outcome(), Some(Outcome::BounceBack));
    assert!(recognizer
        .presenter()
        .live_effects()
        .iter()
        .all(|visual| visual.alpha.is_finite()));
}

#[test]
fn unknown_width_never_swipes_out() {
    let (mut recognizer, listener) = setup(SwipeConfig::default());
    GestureScript::new()
        .down(0.0)
        .drag_to(5_000.0, 4)
        .up(5_000.0)
        .play(&mut recognizer);
    assert_eq!(recognizer.last_outcome(), Some(Outcome::BounceBack));
    assert_eq!(listener.count(SwipeEvent::WillBounceBack), 1);
}
