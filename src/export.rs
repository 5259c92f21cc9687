use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::events::ShotRecord;
use crate::shot_map::ShotMapRenderer;
use crate::summary::TeamShotSummary;

pub struct ExportReport {
    pub shots: usize,
    pub teams: usize,
}

enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

fn opt_number(value: Option<f64>) -> Cell {
    value.map(Cell::Number).unwrap_or(Cell::Empty)
}

/// Writes a `Shots` sheet (raw and displayed positions) and a `Summary` sheet.
pub fn export_shots_xlsx(
    path: &Path,
    shots: &[ShotRecord],
    renderer: &ShotMapRenderer<'_>,
    summaries: &[TeamShotSummary],
) -> Result<ExportReport> {
    let shot_header = [
        "Period", "Minute", "Second", "Team", "Player", "Outcome", "X", "Y", "Display X",
        "Display Y", "xG",
    ];
    let shot_rows: Vec<Vec<Cell>> = shots
        .iter()
        .map(|shot| {
            let placed = renderer.place(shot);
            vec![
                Cell::Number(shot.period as f64),
                Cell::Number(shot.minute as f64),
                Cell::Number(shot.second as f64),
                Cell::Text(shot.team_name.clone()),
                Cell::Text(shot.player_name.clone().unwrap_or_default()),
                Cell::Text(shot.outcome.label().to_string()),
                Cell::Number(shot.x),
                Cell::Number(shot.y),
                Cell::Number(placed.position.x),
                Cell::Number(placed.position.y),
                opt_number(shot.xg),
            ]
        })
        .collect();

    let summary_header = ["Team", "Shots", "On Target", "Goals", "xG"];
    let mut summary_rows: Vec<Vec<Cell>> = summaries
        .iter()
        .map(|s| {
            vec![
                Cell::Text(s.team.clone()),
                Cell::Number(s.shots as f64),
                Cell::Number(s.on_target as f64),
                Cell::Number(s.goals as f64),
                Cell::Number(s.xg),
            ]
        })
        .collect();
    summary_rows.push(Vec::new());
    summary_rows.push(vec![
        Cell::Text("Generated".to_string()),
        Cell::Text(chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()),
    ]);

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Shots")?;
        write_rows(sheet, &shot_header, &shot_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Summary")?;
        write_rows(sheet, &summary_header, &summary_rows)?;
    }
    workbook
        .save(path)
        .with_context(|| format!("save {}", path.display()))?;

    Ok(ExportReport {
        shots: shots.len(),
        teams: summaries.len(),
    })
}

fn write_rows(worksheet: &mut Worksheet, header: &[&str], rows: &[Vec<Cell>]) -> Result<()> {
    for (col_idx, title) in header.iter().enumerate() {
        worksheet
            .write_string(0, col_idx as u16, *title)
            .with_context(|| format!("write header {col_idx}"))?;
    }
    for (idx, row) in rows.iter().enumerate() {
        let row_idx = (idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            let written = match cell {
                Cell::Text(value) => worksheet.write_string(row_idx, col, value.as_str()),
                Cell::Number(value) => worksheet.write_number(row_idx, col, *value),
                Cell::Empty => continue,
            };
            written.with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
