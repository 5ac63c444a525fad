// Host-side tests for the particle field: density, resize, pointer state,
// links and per-frame draw order.

mod common;

use common::core::config::*;
use common::core::field::*;
use common::core::particles::Particle;
use common::{Draw, RecordingPainter};
use glam::DVec2;

fn still(x: f64, y: f64) -> Particle {
    Particle::new(DVec2::new(x, y), DVec2::ZERO, 2.0, 0.5)
}

#[test]
fn particle_count_follows_density_formula() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.particle_count(800.0, 600.0), 32);
    assert_eq!(cfg.particle_count(400.0, 300.0), 8);
    assert_eq!(cfg.particle_count(1000.0, 1000.0), 66);
    assert_eq!(cfg.particle_count(100.0, 100.0), 0);
    assert_eq!(cfg.particle_count(0.0, 600.0), 0);
    assert_eq!(cfg.particle_count(-800.0, 600.0), 0);
    assert_eq!(cfg.particle_count(f64::NAN, 600.0), 0);
}

#[test]
fn new_field_spawns_inside_surface() {
    let field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, 1);
    assert_eq!(field.particles().len(), 32);
    for p in field.particles() {
        assert!((0.0..800.0).contains(&p.position.x));
        assert!((0.0..600.0).contains(&p.position.y));
    }
}

#[test]
fn resize_discards_and_regenerates_particles() {
    let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, 3);
    assert_eq!(field.particles().len(), 32);
    let before: Vec<Particle> = field.particles().to_vec();

    field.resize(400.0, 300.0);
    assert_eq!(field.size(), DVec2::new(400.0, 300.0));
    assert_eq!(field.particles().len(), 8);
    for p in field.particles() {
        assert!(p.position.x < 400.0 && p.position.y < 300.0);
        assert!(!before.contains(p), "no particle survives a resize");
    }
}

#[test]
fn resize_to_nothing_empties_field() {
    let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, 3);
    field.resize(0.0, 0.0);
    assert!(field.particles().is_empty());
    let mut painter = RecordingPainter::default();
    field.tick(&mut painter);
    assert_eq!(painter.circles(), 0);
}

#[test]
fn attributes_are_stable_across_frames() {
    let mut field = ParticleField::new(FieldConfig::default(), 640.0, 480.0, 11);
    let attrs: Vec<(f64, f64)> = field
        .particles()
        .iter()
        .map(|p| (p.radius(), p.opacity()))
        .collect();
    let mut painter = RecordingPainter::default();
    for _ in 0..200 {
        field.tick(&mut painter);
    }
    let after: Vec<(f64, f64)> = field
        .particles()
        .iter()
        .map(|p| (p.radius(), p.opacity()))
        .collect();
    assert_eq!(attrs, after);
}

#[test]
fn pointer_defaults_to_origin_and_repels_from_there() {
    let mut field =
        ParticleField::with_particles(FieldConfig::default(), 500.0, 500.0, vec![still(10.0, 0.0)]);
    assert_eq!(field.pointer(), DVec2::ZERO);

    field.step();
    let p = &field.particles()[0];
    assert!((p.position.x - (10.0 + 0.009)).abs() < 1e-12);
    assert_eq!(p.position.y, 0.0);
}

#[test]
fn set_pointer_is_used_raw() {
    let mut field = ParticleField::new(FieldConfig::default(), 500.0, 500.0, 5);
    field.set_pointer(123.5, -4.0);
    assert_eq!(field.pointer(), DVec2::new(123.5, -4.0));
}

#[test]
fn links_cover_close_pairs_only() {
    let field = ParticleField::with_particles(
        FieldConfig::default(),
        1000.0,
        1000.0,
        vec![
            still(0.0, 0.0),
            still(30.0, 40.0),
            still(500.0, 500.0),
            still(560.0, 580.0),
        ],
    );
    let links = field.links();
    assert_eq!(links.len(), 1, "exactly-100 apart pair must not link");
    let l = links[0];
    assert_eq!((l.a, l.b), (0, 1));
    assert!((l.distance - 50.0).abs() < 1e-12);
    assert!((l.opacity - 0.1).abs() < 1e-12);
}

#[test]
fn link_opacity_law() {
    let cfg = FieldConfig::default();
    for d in [0.0, 12.5, 50.0, 99.9] {
        let expected = (100.0 - d) / 100.0 * 0.2;
        let got = cfg.link_opacity(d).expect("link below 100");
        assert!((got - expected).abs() < 1e-12);
    }
    assert_eq!(cfg.link_opacity(100.0), None);
    assert_eq!(cfg.link_opacity(140.0), None);
}

#[test]
fn links_are_unique_unordered_pairs() {
    let pts = (0..6).map(|i| still(i as f64 * 10.0, 0.0)).collect();
    let field = ParticleField::with_particles(FieldConfig::default(), 200.0, 200.0, pts);
    let links = field.links();
    // All six are within 50 units of each other: C(6, 2) pairs.
    assert_eq!(links.len(), 15);
    assert!(links.iter().all(|l| l.a < l.b));
}

#[test]
fn tick_draws_grid_then_particles_then_links() {
    let mut field = ParticleField::with_particles(
        FieldConfig::default(),
        800.0,
        600.0,
        vec![still(200.0, 200.0), still(230.0, 240.0), still(700.0, 100.0)],
    );
    field.set_pointer(-1000.0, -1000.0);
    let mut painter = RecordingPainter::default();
    field.tick(&mut painter);

    assert_eq!(painter.calls[0], Draw::Clear(DVec2::new(800.0, 600.0)));

    let first_circle = painter
        .calls
        .iter()
        .position(|d| matches!(d, Draw::Circle { .. }))
        .expect("particles drawn");
    let last_circle = painter
        .calls
        .iter()
        .rposition(|d| matches!(d, Draw::Circle { .. }))
        .expect("particles drawn");
    assert_eq!(last_circle - first_circle + 1, 3);

    // 17 vertical (x = 0..=800) + 13 horizontal (y = 0..=600) grid lines
    let grid = &painter.calls[1..first_circle];
    assert_eq!(grid.len(), 30);
    assert!(grid
        .iter()
        .all(|d| matches!(d, Draw::Line { color, alpha, .. } if *color == GRID_COLOR && *alpha == GRID_ALPHA)));

    let links = &painter.calls[last_circle + 1..];
    assert_eq!(links.len(), 1);
    match &links[0] {
        Draw::Line { from, to, color, alpha } => {
            assert_eq!(*color, LINK_COLOR);
            assert_eq!(*from, DVec2::new(200.0, 200.0));
            assert_eq!(*to, DVec2::new(230.0, 240.0));
            assert!((alpha - 0.1).abs() < 1e-12);
        }
        other => panic!("expected link line, got {other:?}"),
    }
}

#[test]
fn circles_use_particle_radius_and_opacity() {
    let mut field = ParticleField::new(FieldConfig::default(), 600.0, 500.0, 9);
    field.set_pointer(-1000.0, -1000.0);
    let mut painter = RecordingPainter::default();
    field.tick(&mut painter);

    let circles: Vec<_> = painter
        .calls
        .iter()
        .filter_map(|d| match d {
            Draw::Circle { center, radius, color, alpha } => Some((*center, *radius, *color, *alpha)),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), field.particles().len());
    for ((center, radius, color, alpha), p) in circles.iter().zip(field.particles()) {
        assert_eq!(*center, p.position);
        assert_eq!(*radius, p.radius());
        assert_eq!(*alpha, p.opacity());
        assert_eq!(*color, PARTICLE_COLOR);
    }
}

#[test]
fn custom_palette_reaches_the_painter() {
    let cfg = FieldConfig {
        link_color: Rgb::new(1, 2, 3),
        ..FieldConfig::default()
    };
    let mut field =
        ParticleField::with_particles(cfg, 300.0, 300.0, vec![still(10.0, 10.0), still(20.0, 10.0)]);
    field.set_pointer(-1000.0, -1000.0);
    let mut painter = RecordingPainter::default();
    field.tick(&mut painter);
    assert_eq!(painter.lines_with_color(Rgb::new(1, 2, 3)).len(), 1);
}

#[test]
fn hex_colors_parse_and_print() {
    assert_eq!(Rgb::from_hex("#4f46e5"), Some(PARTICLE_COLOR));
    assert_eq!(Rgb::from_hex("a855f7"), Some(LINK_COLOR));
    assert_eq!(Rgb::from_hex("#fff"), None);
    assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    assert_eq!(LINK_COLOR.to_css(), "#a855f7");
}

#[test]
fn hex_colors_reject_sign_characters() {
    assert_eq!(Rgb::from_hex("#+f+f+f"), None);
    assert_eq!(Rgb::from_hex("-1-1-1"), None);
    assert_eq!(Rgb::from_hex("#ABCDEF"), Some(Rgb::new(0xab, 0xcd, 0xef)));
}

#[test]
fn overrides_replace_valid_values() {
    let overrides = ConfigOverrides {
        particle_color: Some("#010203".into()),
        link_color: Some("0a0b0c".into()),
        grid_color: None,
        repulse_force: Some(0.5),
    };
    let cfg = overrides.apply(FieldConfig::default());
    assert_eq!(cfg.particle_color, Rgb::new(1, 2, 3));
    assert_eq!(cfg.link_color, Rgb::new(10, 11, 12));
    assert_eq!(cfg.grid_color, GRID_COLOR);
    assert_eq!(cfg.repulse_force, 0.5);
}

#[test]
fn overrides_skip_malformed_values() {
    let overrides = ConfigOverrides {
        particle_color: Some("not a color".into()),
        link_color: Some("#+f+f+f".into()),
        grid_color: Some("#12345".into()),
        repulse_force: Some(f64::NAN),
    };
    assert_eq!(overrides.apply(FieldConfig::default()), FieldConfig::default());

    let infinite = ConfigOverrides {
        repulse_force: Some(f64::INFINITY),
        ..ConfigOverrides::default()
    };
    assert_eq!(infinite.apply(FieldConfig::default()).repulse_force, REPULSE_FORCE);
}
