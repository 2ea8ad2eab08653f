use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tagcloud_core::{
    AnimationDriver, CloudConfig, ConfigError, GestureEvent, PointerTarget, TagCloudView,
    TagEffect, TagEntity,
};

fn tags(n: usize) -> Vec<TagEntity> {
    (0..n)
        .map(|i| TagEntity {
            id: format!("tag-{i}"),
            label: format!("Tag {i}"),
            color: "#3b82f6".into(),
            article_count: i as u32,
            effect: TagEffect::None,
        })
        .collect()
}

fn cfg() -> CloudConfig {
    CloudConfig::default().validated().expect("default config")
}

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn tick_publishes_one_transform_per_tag() {
    let cfg = cfg();
    let mut driver = AnimationDriver::new();
    driver.set_entities(&tags(12), &cfg);
    driver.tick(FRAME, &cfg, false);
    assert_eq!(driver.transforms().count(), 12);
    assert!(driver.transform_of("tag-3").is_some());
    assert!(driver.transform_of("no-such-tag").is_none());
}

#[test]
fn empty_entity_list_ticks_without_work() {
    let cfg = cfg();
    let mut driver = AnimationDriver::new();
    driver.set_entities(&[], &cfg);
    driver.tick(FRAME, &cfg, false);
    assert_eq!(driver.transforms().count(), 0);
}

#[test]
fn relayout_preserves_the_rotation() {
    let cfg = cfg();
    let mut driver = AnimationDriver::new();
    driver.set_entities(&tags(10), &cfg);
    driver.rotation_mut().yaw_vel = cfg.max_speed;
    for _ in 0..30 {
        driver.tick(FRAME, &cfg, false);
    }
    let yaw_before = driver.rotation().yaw;
    assert!(yaw_before != 0.0);

    // The tag list changes size; the sphere must keep spinning from where
    // it was.
    driver.set_entities(&tags(25), &cfg);
    assert_eq!(driver.rotation().yaw, yaw_before);
    driver.tick(FRAME, &cfg, false);
    assert_eq!(driver.transforms().count(), 25);
    assert!(driver.transform_of("tag-24").is_some());
}

#[test]
fn stopped_driver_ignores_ticks_until_resumed() {
    let cfg = cfg();
    let mut driver = AnimationDriver::new();
    driver.set_entities(&tags(5), &cfg);
    driver.stop();
    assert!(driver.is_stopped());
    driver.tick(FRAME, &cfg, false);
    assert_eq!(driver.transforms().count(), 0, "stopped driver did work");

    driver.resume();
    driver.tick(FRAME, &cfg, false);
    assert_eq!(driver.transforms().count(), 5);
}

#[test]
fn dragging_suspends_the_free_spin() {
    let cfg = cfg();
    let mut driver = AnimationDriver::new();
    driver.set_entities(&tags(3), &cfg);
    driver.rotation_mut().yaw_vel = cfg.max_speed;
    driver.tick(FRAME, &cfg, true);
    // advance() was skipped: the velocity is exactly as set.
    assert_eq!(driver.rotation().yaw_vel, cfg.max_speed);
    assert_eq!(driver.rotation().yaw, 0.0);
}

#[test]
fn view_rejects_degenerate_config() {
    let bad_radius = CloudConfig {
        radius: 0.0,
        ..CloudConfig::default()
    };
    assert!(matches!(
        TagCloudView::new(bad_radius),
        Err(ConfigError::InvalidRadius(_))
    ));

    let bad_speed = CloudConfig {
        max_speed: -1.0,
        ..CloudConfig::default()
    };
    assert!(matches!(
        TagCloudView::new(bad_speed),
        Err(ConfigError::InvalidMaxSpeed(_))
    ));
}

#[test]
fn view_clamps_idle_speed_under_the_velocity_limit() {
    let cfg = CloudConfig {
        max_speed: 0.05,
        idle_speed: 10.0,
        ..CloudConfig::default()
    };
    let view = TagCloudView::new(cfg).expect("valid config");
    assert_eq!(view.config().idle_speed, 0.05);
}

#[test]
fn drag_then_release_spins_down_toward_idle() {
    let t0 = Instant::now();
    let mut view = TagCloudView::new(CloudConfig::default()).expect("config");
    view.set_tags(&tags(12));

    view.pointer_down_at(PointerTarget::Backdrop, 0.0, 0.0, t0);
    for i in 1..=10 {
        view.pointer_move(i as f32 * 50.0, 0.0);
    }
    view.pointer_up_at(t0 + Duration::from_millis(100));

    let max = view.config().max_speed;
    let idle = view.config().idle_speed;
    let v0 = view.rotation().yaw_vel;
    assert!(v0 > 0.0 && v0 <= max, "hand-off velocity out of range: {v0}");

    let mut prev = v0;
    let mut now = t0 + Duration::from_millis(100);
    for _ in 0..600 {
        now += FRAME;
        view.frame_at(now);
        let v = view.rotation().yaw_vel;
        assert!(v <= prev + 1e-7, "velocity increased after release");
        prev = v;
    }
    assert!(
        (prev - idle).abs() < 1e-4,
        "velocity {prev} did not settle near idle {idle}"
    );
}

#[test]
fn view_routes_gestures_to_callbacks_and_event_buffer() {
    let t0 = Instant::now();
    let mut view = TagCloudView::new(CloudConfig::default()).expect("config");
    view.set_tags(&tags(3));

    let clicked: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let pressed: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let clicked_cb = clicked.clone();
    let pressed_cb = pressed.clone();
    view.on_click(move |id| clicked_cb.borrow_mut().push(id.to_string()));
    view.on_long_press(move |id| pressed_cb.borrow_mut().push(id.to_string()));

    // Quick tap.
    view.pointer_down_at(PointerTarget::Tag("tag-0".into()), 0.0, 0.0, t0);
    view.pointer_up_at(t0 + Duration::from_millis(120));

    // Held press discovered by the frame poll.
    view.pointer_down_at(
        PointerTarget::Tag("tag-1".into()),
        0.0,
        0.0,
        t0 + Duration::from_millis(200),
    );
    view.frame_at(t0 + Duration::from_millis(900));
    view.pointer_up_at(t0 + Duration::from_millis(950));

    assert_eq!(clicked.borrow().as_slice(), ["tag-0"]);
    assert_eq!(pressed.borrow().as_slice(), ["tag-1"]);

    let events: Vec<GestureEvent> = view.take_events().into_iter().collect();
    assert_eq!(
        events,
        [
            GestureEvent::Click("tag-0".into()),
            GestureEvent::LongPress("tag-1".into()),
        ]
    );
    assert!(view.take_events().is_empty());
}

#[test]
fn radius_change_relayouts_without_resetting_rotation() {
    let t0 = Instant::now();
    let mut view = TagCloudView::new(CloudConfig::default()).expect("config");
    view.set_tags(&tags(8));
    let mut now = t0;
    for _ in 0..30 {
        now += FRAME;
        view.frame_at(now);
    }
    let yaw_before = view.rotation().yaw;
    assert!(yaw_before != 0.0, "idle spin should have moved the sphere");

    let r0 = view.transform_of("tag-2").expect("projected").x;
    view.set_config(CloudConfig {
        radius: 600.0,
        ..CloudConfig::default()
    })
    .expect("valid config");
    assert_eq!(view.rotation().yaw, yaw_before);

    now += FRAME;
    view.frame_at(now);
    let r1 = view.transform_of("tag-2").expect("projected").x;
    // Double the radius roughly doubles the offsets.
    assert!(r1.abs() > r0.abs() * 1.5 || r0.abs() < 1.0);
}

#[test]
fn stopped_view_does_no_frame_work() {
    let t0 = Instant::now();
    let mut view = TagCloudView::new(CloudConfig::default()).expect("config");
    view.set_tags(&tags(4));
    view.frame_at(t0 + FRAME);
    let yaw = view.rotation().yaw;
    view.stop();
    assert!(view.is_stopped());
    view.frame_at(t0 + Duration::from_millis(500));
    assert_eq!(view.rotation().yaw, yaw);
}
