use tugrope::{
    DragEvent, GoPauseLabel, NoOpRopeObserver, PullerId, Rope, RopeConfig, Side, Size, Slider,
    SliderConfig, Team, TugOfWar, Vec2,
};
use wasm_bindgen::prelude::*;

fn js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---- Tug of War Demo ----

const ROPE_Y: f32 = 300.0;
const CART_CENTER_X: f32 = 490.0;
const TOOLBOX_Y: f32 = 520.0;

#[wasm_bindgen]
pub struct TugOfWarDemo {
    scene: TugOfWar<f32>,
}

#[wasm_bindgen]
impl TugOfWarDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<TugOfWarDemo, JsValue> {
        let mut rope = Rope::new(RopeConfig::new()).map_err(js_error)?;
        for i in 0..4 {
            let offset = i as f32 * 60.0;
            rope.add_knot(Vec2::new(120.0 + offset, ROPE_Y), Side::Left, Team::Blue);
            rope.add_knot(Vec2::new(650.0 + offset, ROPE_Y), Side::Right, Team::Red);
        }
        let sizes = [Size::Large, Size::Medium, Size::Small, Size::Small];
        for (i, size) in sizes.iter().enumerate() {
            let offset = i as f32 * 70.0;
            rope.add_puller(Team::Blue, *size, Vec2::new(60.0 + offset, TOOLBOX_Y));
            rope.add_puller(Team::Red, *size, Vec2::new(880.0 - offset, TOOLBOX_Y));
        }
        Ok(TugOfWarDemo {
            scene: TugOfWar::new(rope, CART_CENTER_X, 1.0),
        })
    }

    /// Returns the highlighted knot index, or -1.
    pub fn drag(&mut self, puller: usize, x: f32, y: f32) -> Result<i32, JsValue> {
        let event = DragEvent::Move { puller: PullerId(puller), pos: Vec2::new(x, y) };
        let knot = self.scene.handle(event, &mut NoOpRopeObserver).map_err(js_error)?;
        Ok(knot.map_or(-1, |k| k.0 as i32))
    }

    /// Returns the knot the puller landed on, or -1 if it fell off.
    pub fn drop_puller(&mut self, puller: usize) -> Result<i32, JsValue> {
        let event = DragEvent::Release { puller: PullerId(puller) };
        let knot = self.scene.handle(event, &mut NoOpRopeObserver).map_err(js_error)?;
        Ok(knot.map_or(-1, |k| k.0 as i32))
    }

    pub fn toggle_running(&mut self) -> bool {
        self.scene.go_pause_mut().toggle()
    }

    pub fn go_button_visible(&self) -> bool {
        self.scene.go_button_visible()
    }

    pub fn go_button_label(&self) -> String {
        match self.scene.go_pause().label() {
            GoPauseLabel::Go => "Go".to_string(),
            GoPauseLabel::Pause => "Pause".to_string(),
        }
    }

    pub fn reset(&mut self) {
        self.scene.reset();
    }

    /// Returns [left, right, net]
    pub fn forces(&mut self) -> Vec<f32> {
        let t = self.scene.totals();
        vec![t.left, t.right, t.net]
    }

    /// Returns [tail, left_tip, right_tip, sum_tip]
    pub fn arrows(&mut self) -> Vec<f32> {
        let a = self.scene.arrows();
        vec![a.left.tail_x, a.left.tip_x, a.right.tip_x, a.sum.tip_x]
    }

    /// Returns flat [x0, y0, highlighted0, x1, y1, highlighted1, ...]
    pub fn knots(&self) -> Vec<f32> {
        let knots = self.scene.rope().knots();
        let mut out = Vec::with_capacity(knots.len() * 3);
        for k in knots {
            out.push(k.pos.x);
            out.push(k.pos.y);
            out.push(if k.highlighted { 1.0 } else { 0.0 });
        }
        out
    }

    /// Returns flat [x0, y0, x1, y1, ...]
    pub fn pullers(&self) -> Vec<f32> {
        let pullers = self.scene.rope().pullers();
        let mut out = Vec::with_capacity(pullers.len() * 2);
        for p in pullers {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    pub fn puller_count(&self) -> usize {
        self.scene.rope().pullers().len()
    }
}

// ---- Applied Force Slider Demo ----

#[wasm_bindgen]
pub struct SliderDemo {
    slider: Slider<f32>,
}

#[wasm_bindgen]
impl SliderDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(min: f32, max: f32, width: f32) -> Result<SliderDemo, JsValue> {
        let config = SliderConfig::new(min, max, width).zero_on_release();
        Ok(SliderDemo { slider: Slider::new(config).map_err(js_error)? })
    }

    pub fn drag(&mut self, x: f32) -> f32 {
        self.slider.drag_to(x)
    }

    pub fn release(&mut self) -> f32 {
        self.slider.release()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.slider.set_enabled(enabled);
    }

    pub fn thumb_left(&self, knob_width: f32) -> f32 {
        self.slider.thumb_left(knob_width)
    }

    /// Returns flat [offset0, value0, major0, labelled0, ...]
    pub fn ticks(&self) -> Vec<f32> {
        let ticks = self.slider.ticks();
        let mut out = Vec::with_capacity(ticks.len() * 4);
        for t in &ticks {
            out.push(t.offset);
            out.push(t.value);
            out.push(if t.major { 1.0 } else { 0.0 });
            out.push(if t.labelled { 1.0 } else { 0.0 });
        }
        out
    }
}
