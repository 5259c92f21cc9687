use crate::events::{MatchTeams, ShotRecord, shots_for_team};
use crate::figure::{Figure, slugify};
use crate::geometry::{PitchGeometry, PitchView};
use crate::shot_map::{ShotMapMode, ShotMapRenderer};
use crate::style::{ShotStyle, TeamSide};
use crate::summary::{endnote, summarize};

pub const FULL_MAP_NAME: &str = "shot_map";

/// The full two-team map followed by one half-pitch map per team.
pub fn build_shot_maps(
    shots: &[ShotRecord],
    teams: &MatchTeams,
    geometry: PitchGeometry,
    style: &ShotStyle,
) -> Vec<Figure> {
    let note = endnote(&summarize(shots, teams));

    let full = ShotMapRenderer::new(geometry, teams.primary.as_str(), style);
    let mut figures = vec![Figure {
        name: FULL_MAP_NAME.to_string(),
        title: format!(
            "{} ({}) and {} ({}) shots",
            teams.primary,
            style.team_color(TeamSide::Primary).describe(),
            teams.opponent,
            style.team_color(TeamSide::Opponent).describe(),
        ),
        endnote: Some(note.clone()),
        view: PitchView::full(geometry),
        commands: full.render(shots),
    }];

    let half = full.with_mode(ShotMapMode::HalfPitch);
    for (team, against) in [
        (&teams.primary, &teams.opponent),
        (&teams.opponent, &teams.primary),
    ] {
        figures.push(Figure {
            name: format!("{}_half", slugify(team)),
            title: format!("{team} shots against {against}"),
            endnote: Some(note.clone()),
            view: PitchView::vertical_half(geometry),
            commands: half.render(&shots_for_team(shots, team)),
        });
    }
    figures
}
