use glam::DVec2;
use starfield_greeting::components::starfield::fit_heart_size;
use starfield_greeting::{Color, SceneConfig, SceneRng, SceneState, Surface, create_heart_path};

#[derive(Debug, Clone, PartialEq)]
enum Draw {
	Rect { w: f64, h: f64, color: Color },
	Circle { x: f64, y: f64, radius: f64, color: Color },
}

#[derive(Default)]
struct Recorder(Vec<Draw>);

impl Surface for Recorder {
	fn fill_rect(&mut self, _x: f64, _y: f64, w: f64, h: f64, color: Color) {
		self.0.push(Draw::Rect { w, h, color });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.0.push(Draw::Circle {
			x,
			y,
			radius,
			color,
		});
	}
}

fn new_scene() -> SceneState {
	SceneState::new(SceneConfig::default(), 1024.0, 768.0, SceneRng::new(2024))
}

#[test]
fn test_frame_starts_with_fade_overlay() {
	let mut scene = new_scene();
	let mut surface = Recorder::default();
	scene.frame(16.0, &mut surface);

	assert_eq!(
		surface.0[0],
		Draw::Rect {
			w: 1024.0,
			h: 768.0,
			color: Color::rgba(0, 0, 0, 0.1),
		}
	);
	let rects = surface
		.0
		.iter()
		.filter(|d| matches!(d, Draw::Rect { .. }))
		.count();
	assert_eq!(rects, 1);
}

#[test]
fn test_stars_drawn_before_click_sparks() {
	let mut scene = new_scene();
	scene.click(512.0, 384.0);
	let mut surface = Recorder::default();
	scene.frame(16.0, &mut surface);

	// 1 overlay + 200 stars + meteor trails + 10 sparks
	let circles: Vec<_> = surface.0[1..].to_vec();
	assert!(circles.len() >= 210);
	for draw in &circles[..200] {
		match draw {
			Draw::Circle { color, .. } => {
				assert_eq!((color.r, color.g, color.b), (255, 255, 255));
			}
			other => panic!("unexpected {:?}", other),
		}
	}
	// sparks come last and are pink/magenta (red channel saturated)
	for draw in &circles[circles.len() - 10..] {
		match draw {
			Draw::Circle { color, .. } => {
				assert_eq!(color.r, 255);
				assert!((color.a - 0.97).abs() < 1e-9);
			}
			other => panic!("unexpected {:?}", other),
		}
	}
}

#[test]
fn test_stars_stay_in_bounds_across_frames() {
	let mut scene = new_scene();
	let mut surface = Recorder::default();
	for frame in 0..3_000 {
		scene.frame(frame as f64 * 16.0, &mut surface);
		surface.0.clear();
		for star in &scene.stars {
			assert!(star.y >= 0.0 && star.y <= 768.0, "star escaped to {}", star.y);
		}
	}
}

#[test]
fn test_meteor_trails_never_exceed_cap() {
	let mut scene = new_scene();
	let mut surface = Recorder::default();
	for frame in 0..500 {
		scene.frame(frame as f64 * 16.0, &mut surface);
		surface.0.clear();
		assert!(scene.meteors.iter().all(|m| m.trail().len() <= 15));
	}
}

#[test]
fn test_three_clicks_schedule_one_heart_burst() {
	let mut scene = new_scene();
	scene.frame(1_000.0, &mut Recorder::default());

	scene.click(10.0, 10.0);
	scene.click(20.0, 20.0);
	assert_eq!(scene.pending_spawns(), 0);

	scene.click(30.0, 30.0);
	assert_eq!(scene.interactions(), 3);
	let expected: Vec<f64> = (0..20).map(|i| i as f64 * 50.0).collect();
	assert_eq!(scene.pending_offsets(), expected);

	scene.click(40.0, 40.0);
	assert_eq!(scene.interactions(), 4);
	assert_eq!(scene.pending_spawns(), 20);
	assert_eq!(scene.effects.len(), 4);
}

#[test]
fn test_burst_meteors_arrive_staggered() {
	let mut scene = new_scene();
	for _ in 0..3 {
		scene.click(100.0, 100.0);
	}

	// first spawn is due immediately
	scene.frame(0.0, &mut Recorder::default());
	assert_eq!(scene.meteors.len(), 4);

	scene.frame(120.0, &mut Recorder::default());
	assert_eq!(scene.meteors.len(), 6);

	scene.frame(950.0, &mut Recorder::default());
	assert_eq!(scene.meteors.len(), 23);
	assert_eq!(scene.pending_spawns(), 0);

	let expected = create_heart_path(DVec2::new(512.0, 384.0), fit_heart_size(scene.bounds));
	assert!(scene.meteors[3..].iter().all(|m| m.path() == Some(&expected)));
	assert!(scene.meteors[..3].iter().all(|m| m.path().is_none()));
}

#[test]
fn test_burst_meteors_retire_after_tracing() {
	let mut scene = new_scene();
	for _ in 0..3 {
		scene.click(100.0, 100.0);
	}
	let mut surface = Recorder::default();
	for frame in 0..400 {
		scene.frame(frame as f64 * 16.0, &mut surface);
		surface.0.clear();
	}
	assert_eq!(scene.meteors.len(), 3);
}

#[test]
fn test_straight_fallback_keeps_burst_meteors() {
	let config = SceneConfig {
		follow_heart_path: false,
		..SceneConfig::default()
	};
	let mut scene = SceneState::new(config, 1024.0, 768.0, SceneRng::new(1));
	for _ in 0..3 {
		scene.click(100.0, 100.0);
	}
	let mut surface = Recorder::default();
	for frame in 0..400 {
		scene.frame(frame as f64 * 16.0, &mut surface);
		surface.0.clear();
	}
	assert_eq!(scene.meteors.len(), 23);
	assert!(scene.meteors.iter().all(|m| !m.is_tracing()));
}

#[test]
fn test_arrow_key_spawns_one_full_effect() {
	let mut scene = new_scene();
	assert!(scene.effects.is_empty());

	assert!(scene.key_pressed("ArrowLeft"));
	assert_eq!(scene.interactions(), 1);
	assert_eq!(scene.effects.len(), 1);
	let effect = &scene.effects[0];
	assert_eq!(effect.sparks.len(), 10);
	assert!(effect.sparks.iter().all(|s| s.life > 0.0));
	assert!(effect.origin.x >= 0.0 && effect.origin.x < 1024.0);
	assert!(effect.origin.y >= 0.0 && effect.origin.y < 768.0);
}

#[test]
fn test_effects_removed_once_sparks_die() {
	let mut scene = new_scene();
	scene.click(5.0, 5.0);
	let mut surface = Recorder::default();
	for frame in 0..33 {
		scene.frame(frame as f64, &mut surface);
	}
	assert_eq!(scene.effects.len(), 1);
	scene.frame(33.0, &mut surface);
	assert!(scene.effects.is_empty());
}

#[test]
fn test_resize_only_changes_future_bounds() {
	let mut scene = new_scene();
	let before: Vec<(f64, f64)> = scene.stars.iter().map(|s| (s.x, s.y)).collect();
	let meteors_before: Vec<DVec2> = scene.meteors.iter().map(|m| m.pos).collect();

	scene.resize(200.0, 100.0);

	let after: Vec<(f64, f64)> = scene.stars.iter().map(|s| (s.x, s.y)).collect();
	let meteors_after: Vec<DVec2> = scene.meteors.iter().map(|m| m.pos).collect();
	assert_eq!(before, after);
	assert_eq!(meteors_before, meteors_after);

	// every star that wraps from now on lands inside the new bounds
	let mut surface = Recorder::default();
	for frame in 0..5_000 {
		scene.frame(frame as f64 * 16.0, &mut surface);
		surface.0.clear();
	}
	let mut wrapped = 0;
	for (star, (x, _)) in scene.stars.iter().zip(&before) {
		if star.x != *x {
			wrapped += 1;
			assert!(star.x < 200.0 && star.y <= 100.0);
		}
	}
	assert!(wrapped > 0);
	assert!(scene.meteors.iter().all(|m| m.pos.x < 200.0));

	let key_effect_before = scene.effects.len();
	scene.key_pressed("ArrowUp");
	let origin = scene.effects[key_effect_before].origin;
	assert!(origin.x < 200.0 && origin.y < 100.0);
}
