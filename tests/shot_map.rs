use shotmap::events::{ShotOutcome, ShotRecord};
use shotmap::geometry::{PitchGeometry, Point, mirror};
use shotmap::shot_map::{DrawCommand, ShotMapRenderer};
use shotmap::style::{Color, FillOpacity, ShotStyle, TeamSide};

fn shot(team: &str, x: f64, y: f64, outcome: ShotOutcome, player: Option<&str>) -> ShotRecord {
    ShotRecord {
        id: format!("{team}-{x}-{y}"),
        period: 1,
        minute: 0,
        second: 0,
        x,
        y,
        team_name: team.to_string(),
        outcome,
        player_name: player.map(str::to_string),
        xg: None,
    }
}

fn sample_shots() -> Vec<ShotRecord> {
    vec![
        shot("A", 30.0, 60.0, ShotOutcome::Other("Miss".to_string()), Some("Q")),
        shot("B", 100.0, 40.0, ShotOutcome::Goal, Some("P")),
        shot("A", 112.0, 44.0, ShotOutcome::Goal, Some("R")),
        shot("B", 88.5, 12.25, ShotOutcome::Saved, Some("S")),
        shot("B", 0.0, 80.0, ShotOutcome::Wayward, None),
    ]
}

#[test]
fn opponent_goal_is_mirrored_and_labelled() {
    let style = ShotStyle::default();
    let renderer = ShotMapRenderer::new(PitchGeometry::new(120.0, 80.0), "A", &style);
    let s = shot("B", 100.0, 40.0, ShotOutcome::Goal, Some("P"));

    let placed = renderer.place(&s);
    assert_eq!(placed.position, Point::new(20.0, 40.0));
    assert_eq!(placed.style.fill_opacity, FillOpacity::Full);
    assert_eq!(placed.style.label.as_deref(), Some("P"));
    assert_eq!(placed.style.color_key, TeamSide::Opponent);

    let cmds = renderer.commands_for(&s);
    assert_eq!(
        cmds,
        vec![
            DrawCommand::Circle {
                center: Point::new(20.0, 40.0),
                radius: 2.0,
                color: Color::BLUE,
                opacity: 1.0,
                outline: None,
            },
            DrawCommand::Label {
                text: "P".to_string(),
                anchor: Point::new(21.0, 38.0),
                color: Color::BLACK,
                font_px: style.label_font_px,
            },
        ]
    );
}

#[test]
fn primary_miss_stays_put_and_is_translucent() {
    let style = ShotStyle::default();
    let renderer = ShotMapRenderer::new(PitchGeometry::new(120.0, 80.0), "A", &style);
    let s = shot("A", 30.0, 60.0, ShotOutcome::Other("Miss".to_string()), Some("Q"));

    let placed = renderer.place(&s);
    assert_eq!(placed.position, Point::new(30.0, 60.0));
    assert_eq!(placed.style.fill_opacity, FillOpacity::Translucent);
    assert_eq!(placed.style.label, None);

    let cmds = renderer.commands_for(&s);
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        DrawCommand::Circle { color, opacity, .. } => {
            assert_eq!(*color, Color::RED);
            assert!((opacity - 0.2).abs() < f32::EPSILON);
        }
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn positions_follow_team_for_every_record() {
    let style = ShotStyle::default();
    let geometry = PitchGeometry::STATSBOMB;
    let renderer = ShotMapRenderer::new(geometry, "A", &style);
    for s in sample_shots() {
        let placed = renderer.place(&s);
        if s.team_name == "A" {
            assert_eq!(placed.position, Point::new(s.x, s.y));
        } else {
            assert_eq!(placed.position, Point::new(120.0 - s.x, 80.0 - s.y));
        }
    }
}

#[test]
fn opacity_and_label_track_goals() {
    let style = ShotStyle::default();
    let renderer = ShotMapRenderer::new(PitchGeometry::STATSBOMB, "A", &style);
    for s in sample_shots() {
        let placed = renderer.place(&s);
        assert_eq!(placed.style.fill_opacity == FillOpacity::Full, s.is_goal());
        assert_eq!(placed.style.label.is_some(), s.is_goal());
    }
}

#[test]
fn mirroring_twice_restores_position() {
    let geometry = PitchGeometry::new(105.0, 68.0);
    for s in sample_shots() {
        let p = Point::new(s.x, s.y);
        assert_eq!(mirror(mirror(p, &geometry, false), &geometry, false), p);
    }
}

#[test]
fn style_configuration_reaches_commands() {
    let style = ShotStyle {
        circle_radius: 3.5,
        miss_opacity: 0.35,
        primary_color: Color::rgb(10, 20, 30),
        ..ShotStyle::default()
    };
    let renderer = ShotMapRenderer::new(PitchGeometry::STATSBOMB, "A", &style);
    let cmds = renderer.render(&sample_shots()[..1]);
    assert_eq!(
        cmds,
        vec![DrawCommand::Circle {
            center: Point::new(30.0, 60.0),
            radius: 3.5,
            color: Color::rgb(10, 20, 30),
            opacity: 0.35,
            outline: None,
        }]
    );
}
