use anyhow::{Context, Result};
use tracing::info;

use shotmap::config::AppConfig;
use shotmap::event_fetch::load_match_events;
use shotmap::events::{MatchTeams, filter_shots};
use shotmap::export::export_shots_xlsx;
use shotmap::figure::save_figure;
use shotmap::font::load_font;
use shotmap::logging::init_tracing;
use shotmap::maps::build_shot_maps;
use shotmap::shot_map::ShotMapRenderer;
use shotmap::summary::summarize;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing();

    let mut config = AppConfig::from_env().context("invalid environment configuration")?;
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    config.apply_args(&args).context("invalid arguments")?;

    let events = load_match_events(&config.source, config.match_id)?;
    let teams = MatchTeams::resolve(&events, config.primary_team.as_deref())?;
    let shots = filter_shots(&events)?;
    info!(
        match_id = config.match_id,
        events = events.len(),
        shots = shots.len(),
        primary = %teams.primary,
        opponent = %teams.opponent,
        "loaded match"
    );

    let font = load_font(config.font_path.as_deref())?;
    for figure in build_shot_maps(&shots, &teams, config.geometry, &config.style) {
        let path = save_figure(
            &figure,
            &config.style,
            &config.layout,
            config.format,
            font.as_ref(),
            &config.out_dir,
        )?;
        info!(path = %path.display(), title = %figure.title, "wrote figure");
    }

    if config.export_xlsx {
        let path = config.out_dir.join("shots.xlsx");
        let renderer = ShotMapRenderer::new(config.geometry, teams.primary.as_str(), &config.style);
        let report = export_shots_xlsx(&path, &shots, &renderer, &summarize(&shots, &teams))?;
        info!(
            path = %path.display(),
            shots = report.shots,
            teams = report.teams,
            "exported shot table"
        );
    }
    Ok(())
}
