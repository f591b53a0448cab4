//! Benchmarks for knot matching and force totals.

use criterion::{criterion_group, criterion_main, Criterion};
use tugrope::*;

fn crowded_rope() -> Rope<f32> {
    let mut rope = Rope::new(RopeConfig::new()).unwrap();
    for i in 0..16 {
        let x = i as f32 * 40.0;
        rope.add_knot(Vec2::new(x, 300.0), Side::Left, Team::Blue);
        rope.add_knot(Vec2::new(x + 700.0, 300.0), Side::Right, Team::Red);
    }
    for i in 0..12 {
        let team = if i % 2 == 0 { Team::Blue } else { Team::Red };
        rope.add_puller(team, Size::Medium, Vec2::new(i as f32 * 60.0, 500.0));
    }
    rope
}

fn bench_drag_moves(c: &mut Criterion) {
    c.bench_function("drag_move_highlight_600_events", |b| {
        let mut rope = crowded_rope();
        b.iter(|| {
            for step in 0..600 {
                let x = (step % 300) as f32 * 4.0;
                rope.move_puller(PullerId(step % 12), Vec2::new(x, 320.0));
            }
            rope.attached_count()
        });
    });
}

fn bench_drop_and_totals(c: &mut Criterion) {
    c.bench_function("drop_all_pullers_then_totals", |b| {
        b.iter(|| {
            let mut rope = crowded_rope();
            for i in 0..12 {
                let x = if i % 2 == 0 { i as f32 * 40.0 } else { 700.0 + i as f32 * 40.0 };
                rope.move_puller(PullerId(i), Vec2::new(x, 310.0));
                let _ = rope.drop_puller(PullerId(i));
            }
            compute_totals(rope.knots(), rope.pullers())
        });
    });
}

fn bench_slider_drag(c: &mut Criterion) {
    c.bench_function("slider_drag_1000_moves", |b| {
        let mut slider = Slider::new(SliderConfig::new(-500.0f32, 500.0, 300.0).zero_on_release()).unwrap();
        b.iter(|| {
            for i in 0..1000 {
                slider.drag_to(i as f32 * 0.4 - 50.0);
            }
            slider.release()
        });
    });
}

criterion_group!(benches, bench_drag_moves, bench_drop_and_totals, bench_slider_drag);
criterion_main!(benches);
