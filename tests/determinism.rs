use tugrope::{compute_totals, KnotId, PullerId, Rope, RopeConfig, Side, Size, Team, Vec2};

fn play() -> (Vec<Option<KnotId>>, f32) {
    let mut rope: Rope<f32> = Rope::new(RopeConfig::new()).unwrap();
    // Two knots equidistant from every point on x = 0.
    rope.add_knot(Vec2::new(-40.0, 0.0), Side::Left, Team::Blue);
    rope.add_knot(Vec2::new(40.0, 0.0), Side::Left, Team::Blue);
    rope.add_knot(Vec2::new(-40.0, 80.0), Side::Right, Team::Blue);
    rope.add_knot(Vec2::new(40.0, 80.0), Side::Right, Team::Blue);
    for size in [Size::Small, Size::Medium, Size::Large, Size::Small] {
        rope.add_puller(Team::Blue, size, Vec2::new(0.0, 40.0));
    }

    let landed = (0..4)
        .map(|i| rope.drop_puller(PullerId(i)).unwrap())
        .collect();
    (landed, compute_totals(rope.knots(), rope.pullers()).net)
}

#[test]
fn equidistant_drops_land_the_same_way() {
    let results: Vec<_> = (0..10).map(|_| play()).collect();
    for r in &results[1..] {
        assert_eq!(results[0], *r);
    }
    assert_eq!(results[0].0[0], Some(KnotId(0)));
}
