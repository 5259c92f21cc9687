use crate::events::{MatchTeams, ShotOutcome, ShotRecord};

pub const DATA_CREDIT: &str = "Data: StatsBomb open data";

#[derive(Debug, Clone, PartialEq)]
pub struct TeamShotSummary {
    pub team: String,
    pub shots: usize,
    pub on_target: usize,
    pub goals: usize,
    pub xg: f64,
}

impl TeamShotSummary {
    pub fn for_team(team: &str, shots: &[ShotRecord]) -> Self {
        let mut out = Self {
            team: team.to_string(),
            shots: 0,
            on_target: 0,
            goals: 0,
            xg: 0.0,
        };
        for shot in shots.iter().filter(|s| s.team_name == team) {
            out.shots += 1;
            if is_on_target(&shot.outcome) {
                out.on_target += 1;
            }
            if shot.is_goal() {
                out.goals += 1;
            }
            out.xg += shot.xg.unwrap_or(0.0);
        }
        out
    }
}

fn is_on_target(outcome: &ShotOutcome) -> bool {
    matches!(
        outcome,
        ShotOutcome::Goal | ShotOutcome::Saved | ShotOutcome::SavedToPost
    )
}

/// Primary team first.
pub fn summarize(shots: &[ShotRecord], teams: &MatchTeams) -> Vec<TeamShotSummary> {
    vec![
        TeamShotSummary::for_team(&teams.primary, shots),
        TeamShotSummary::for_team(&teams.opponent, shots),
    ]
}

pub fn endnote(summaries: &[TeamShotSummary]) -> String {
    let mut parts: Vec<String> = summaries
        .iter()
        .map(|s| {
            format!(
                "{}: {} shots, {} on target, {} goals, xG {:.2}",
                s.team, s.shots, s.on_target, s.goals, s.xg
            )
        })
        .collect();
    parts.push(DATA_CREDIT.to_string());
    parts.join("  |  ")
}
