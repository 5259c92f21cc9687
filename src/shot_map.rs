use crate::events::ShotRecord;
use crate::geometry::{PitchGeometry, Point, mirror};
use crate::style::{Color, DisplayStyle, FillOpacity, ShotStyle, TeamSide};

/// Drawing instruction in pitch coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        opacity: f32,
        outline: Option<Color>,
    },
    Label {
        text: String,
        anchor: Point,
        color: Color,
        font_px: f32,
    },
}

impl DrawCommand {
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotMapMode {
    /// Both teams on one pitch, opponent mirrored, scorers labelled.
    Full,
    /// One team's shots as a single batch: outlined, unlabelled, unmirrored.
    HalfPitch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShot {
    pub position: Point,
    pub style: DisplayStyle,
}

pub struct ShotMapRenderer<'a> {
    geometry: PitchGeometry,
    primary_team: String,
    style: &'a ShotStyle,
    mode: ShotMapMode,
}

impl<'a> ShotMapRenderer<'a> {
    pub fn new(geometry: PitchGeometry, primary_team: impl Into<String>, style: &'a ShotStyle) -> Self {
        Self {
            geometry,
            primary_team: primary_team.into(),
            style,
            mode: ShotMapMode::Full,
        }
    }

    pub fn with_mode(mut self, mode: ShotMapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ShotMapMode {
        self.mode
    }

    pub fn place(&self, shot: &ShotRecord) -> PlacedShot {
        let is_primary = shot.team_name == self.primary_team;
        let is_goal = shot.is_goal();
        let origin = Point::new(shot.x, shot.y);
        let position = match self.mode {
            ShotMapMode::Full => mirror(origin, &self.geometry, is_primary),
            ShotMapMode::HalfPitch => origin,
        };
        let label = match self.mode {
            ShotMapMode::Full if is_goal => shot.player_name.clone(),
            _ => None,
        };
        PlacedShot {
            position,
            style: DisplayStyle {
                fill_opacity: if is_goal {
                    FillOpacity::Full
                } else {
                    FillOpacity::Translucent
                },
                label,
                color_key: if is_primary {
                    TeamSide::Primary
                } else {
                    TeamSide::Opponent
                },
            },
        }
    }

    pub fn commands_for(&self, shot: &ShotRecord) -> Vec<DrawCommand> {
        let placed = self.place(shot);
        let outline = match self.mode {
            ShotMapMode::Full => None,
            ShotMapMode::HalfPitch => Some(self.style.batch_outline),
        };

        let mut out = vec![DrawCommand::Circle {
            center: placed.position,
            radius: self.style.circle_radius,
            color: self.style.team_color(placed.style.color_key),
            opacity: self.style.alpha(placed.style.fill_opacity),
            outline,
        }];
        if let Some(text) = placed.style.label {
            out.push(DrawCommand::Label {
                text,
                anchor: placed.position.offset(self.style.label_offset),
                color: self.style.label_color,
                font_px: self.style.label_font_px,
            });
        }
        out
    }

    pub fn render(&self, shots: &[ShotRecord]) -> Vec<DrawCommand> {
        shots.iter().flat_map(|s| self.commands_for(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ShotOutcome;

    fn shot(team: &str, x: f64, y: f64, outcome: ShotOutcome) -> ShotRecord {
        ShotRecord {
            id: "s".to_string(),
            period: 1,
            minute: 10,
            second: 0,
            x,
            y,
            team_name: team.to_string(),
            outcome,
            player_name: Some("Scorer".to_string()),
            xg: None,
        }
    }

    #[test]
    fn half_pitch_mode_keeps_coordinates_and_drops_labels() {
        let style = ShotStyle::default();
        let renderer = ShotMapRenderer::new(PitchGeometry::STATSBOMB, "A", &style)
            .with_mode(ShotMapMode::HalfPitch);
        let cmds = renderer.commands_for(&shot("B", 100.0, 30.0, ShotOutcome::Goal));
        assert_eq!(cmds.len(), 1);
        let DrawCommand::Circle {
            center,
            opacity,
            outline,
            ..
        } = &cmds[0]
        else {
            panic!("expected circle");
        };
        assert_eq!(*center, Point::new(100.0, 30.0));
        assert_eq!(*opacity, 1.0);
        assert_eq!(*outline, Some(Color::BLACK));
    }

    #[test]
    fn goal_without_player_name_has_no_label() {
        let style = ShotStyle::default();
        let renderer = ShotMapRenderer::new(PitchGeometry::STATSBOMB, "A", &style);
        let mut s = shot("A", 100.0, 30.0, ShotOutcome::Goal);
        s.player_name = None;
        assert_eq!(renderer.commands_for(&s).len(), 1);
    }

    #[test]
    fn render_emits_one_circle_per_shot() {
        let style = ShotStyle::default();
        let renderer = ShotMapRenderer::new(PitchGeometry::STATSBOMB, "A", &style);
        let shots = vec![
            shot("A", 100.0, 30.0, ShotOutcome::Goal),
            shot("B", 90.0, 50.0, ShotOutcome::Blocked),
            shot("A", 110.0, 45.0, ShotOutcome::OffTarget),
        ];
        let cmds = renderer.render(&shots);
        assert_eq!(cmds.iter().filter(|c| c.is_circle()).count(), 3);
        assert_eq!(cmds.len(), 4);
    }
}
