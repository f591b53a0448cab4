use tugrope::arrows::{friction_label_below, show_zero_sum_label};
use tugrope::{
    DragEvent, ForceArrows, ForceTotals, GoPause, GoPauseLabel, NoOpRopeObserver, Rope,
    RopeConfig, Side, Size, Team, TugOfWar, Vec2,
};

fn scene() -> TugOfWar<f32> {
    let mut rope = Rope::new(RopeConfig::new()).unwrap();
    for i in 0..4 {
        rope.add_knot(Vec2::new(100.0 + i as f32 * 60.0, 300.0), Side::Left, Team::Blue);
        rope.add_knot(Vec2::new(600.0 + i as f32 * 60.0, 300.0), Side::Right, Team::Red);
    }
    rope.add_puller(Team::Blue, Size::Large, Vec2::new(100.0, 500.0));
    rope.add_puller(Team::Red, Size::Small, Vec2::new(700.0, 500.0));
    TugOfWar::new(rope, 490.0, 1.0)
}

#[test]
fn arrows_follow_totals() {
    let totals = ForceTotals { left: 30.0f32, right: 10.0, net: -20.0 };
    let arrows = ForceArrows::from_totals(490.0, &totals, 2.0);
    assert_eq!(arrows.left.tip_x, 430.0);
    assert_eq!(arrows.right.tip_x, 510.0);
    assert_eq!(arrows.sum.tip_x, 450.0);
    assert_eq!(arrows.left.direction(), Some(Side::Left));
    assert_eq!(arrows.right.direction(), Some(Side::Right));
    assert_eq!(arrows.sum.length(), 40.0);
}

#[test]
fn balanced_rope_has_no_sum_arrow() {
    let totals = ForceTotals { left: 10.0f32, right: 10.0, net: 0.0 };
    let arrows = ForceArrows::from_totals(0.0, &totals, 1.0);
    assert_eq!(arrows.sum.direction(), None);
    assert!(show_zero_sum_label(true, true, totals.net));
    assert!(!show_zero_sum_label(true, false, totals.net));
    assert!(!show_zero_sum_label(true, true, 5.0f32));
}

#[test]
fn friction_label_moves_when_forces_align() {
    assert!(friction_label_below(50.0f32, 20.0));
    assert!(friction_label_below(-50.0f32, -20.0));
    assert!(!friction_label_below(50.0f32, -20.0));
    assert!(!friction_label_below(0.0f32, -20.0));
}

#[test]
fn go_pause_toggles_and_completes() {
    let mut button = GoPause::new();
    assert_eq!(button.label(), GoPauseLabel::Go);
    assert!(!button.visible(0));
    assert!(button.visible(1));

    assert!(button.toggle());
    assert_eq!(button.label(), GoPauseLabel::Pause);
    assert!(!button.toggle());

    button.toggle();
    button.complete();
    assert!(!button.is_running());
    assert!(!button.visible(3));
    assert!(!button.toggle());

    button.reset();
    assert!(button.visible(3));
}

#[test]
fn dragging_pullers_moves_the_arrows() {
    let mut scene = scene();
    let blue = tugrope::PullerId(0);
    let red = tugrope::PullerId(1);
    let mut observer = NoOpRopeObserver;

    assert!(!scene.go_button_visible());
    scene
        .handle(DragEvent::Move { puller: blue, pos: Vec2::new(110.0, 320.0) }, &mut observer)
        .unwrap();
    scene.handle(DragEvent::Release { puller: blue }, &mut observer).unwrap();
    assert!(scene.go_button_visible());
    assert_eq!(scene.totals().net, -30.0);
    assert_eq!(scene.arrows().sum.tip_x, 460.0);

    scene
        .handle(DragEvent::Move { puller: red, pos: Vec2::new(610.0, 320.0) }, &mut observer)
        .unwrap();
    scene.handle(DragEvent::Release { puller: red }, &mut observer).unwrap();
    assert_eq!(scene.totals(), ForceTotals { left: 30.0, right: 10.0, net: -20.0 });

    scene.reset();
    assert_eq!(scene.totals(), ForceTotals::default());
    assert!(!scene.go_button_visible());
}

fn single_puller_rope(side: Side, team: Team, size: Size) -> Rope<f32> {
    let mut rope = Rope::new(RopeConfig::new()).unwrap();
    let knot = rope.add_knot(Vec2::new(100.0, 300.0), side, team);
    let puller = rope.add_puller(team, size, Vec2::new(100.0, 300.0));
    rope.bind(puller, knot).unwrap();
    rope
}

#[test]
fn swapped_rope_at_same_version_recomputes_totals() {
    let first = single_puller_rope(Side::Left, Team::Blue, Size::Small);
    let second = single_puller_rope(Side::Right, Team::Red, Size::Large);
    assert_eq!(first.version(), second.version());

    let mut scene = TugOfWar::new(first, 490.0, 1.0);
    assert_eq!(scene.totals().net, -10.0);

    *scene.rope_mut() = second;
    assert_eq!(scene.totals(), ForceTotals { left: 0.0, right: 30.0, net: 30.0 });
}
