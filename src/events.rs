use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const SHOT_TYPE: &str = "Shot";

/// One row of a match event table.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub index: u32,
    pub period: u8,
    pub minute: u32,
    pub second: u32,
    pub type_name: String,
    pub team_name: String,
    pub player_name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub outcome_name: Option<String>,
    pub xg: Option<f64>,
}

impl EventRecord {
    pub fn is_shot(&self) -> bool {
        self.type_name == SHOT_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    Goal,
    Saved,
    SavedOffTarget,
    SavedToPost,
    Blocked,
    OffTarget,
    Post,
    Wayward,
    Other(String),
}

impl ShotOutcome {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Goal" => Self::Goal,
            "Saved" => Self::Saved,
            "Saved Off Target" => Self::SavedOffTarget,
            "Saved to Post" | "Saved To Post" => Self::SavedToPost,
            "Blocked" => Self::Blocked,
            "Off T" | "Off Target" => Self::OffTarget,
            "Post" => Self::Post,
            "Wayward" => Self::Wayward,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Self::Goal)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Goal => "Goal",
            Self::Saved => "Saved",
            Self::SavedOffTarget => "Saved Off Target",
            Self::SavedToPost => "Saved to Post",
            Self::Blocked => "Blocked",
            Self::OffTarget => "Off Target",
            Self::Post => "Post",
            Self::Wayward => "Wayward",
            Self::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub id: String,
    pub period: u8,
    pub minute: u32,
    pub second: u32,
    pub x: f64,
    pub y: f64,
    pub team_name: String,
    pub outcome: ShotOutcome,
    pub player_name: Option<String>,
    pub xg: Option<f64>,
}

impl ShotRecord {
    pub fn from_event(event: &EventRecord) -> Result<Self> {
        let (Some(x), Some(y)) = (event.x, event.y) else {
            bail!("shot {} has no location", event.id);
        };
        if event.team_name.is_empty() {
            bail!("shot {} has no team", event.id);
        }
        let outcome = event
            .outcome_name
            .as_deref()
            .map(ShotOutcome::from_name)
            .ok_or_else(|| anyhow!("shot {} has no outcome", event.id))?;
        Ok(Self {
            id: event.id.clone(),
            period: event.period,
            minute: event.minute,
            second: event.second,
            x,
            y,
            team_name: event.team_name.clone(),
            outcome,
            player_name: event.player_name.clone(),
            xg: event.xg,
        })
    }

    pub fn is_goal(&self) -> bool {
        self.outcome.is_goal()
    }
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    #[serde(default)]
    index: u32,
    #[serde(default)]
    period: u8,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
    #[serde(rename = "type")]
    kind: NamedRef,
    #[serde(default)]
    team: Option<NamedRef>,
    #[serde(default)]
    player: Option<NamedRef>,
    #[serde(default)]
    location: Option<Vec<f64>>,
    #[serde(flatten)]
    details: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

pub fn parse_events_json(raw: &str) -> Result<Vec<EventRecord>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let rows: Vec<RawEvent> = serde_json::from_str(trimmed).context("invalid events json")?;
    Ok(rows.into_iter().map(into_record).collect())
}

fn into_record(raw: RawEvent) -> EventRecord {
    let (x, y) = match raw.location.as_deref() {
        Some([x, y, ..]) => (Some(*x), Some(*y)),
        _ => (None, None),
    };
    let detail_key = raw.kind.name.to_ascii_lowercase().replace(' ', "_");
    let outcome_name = raw
        .details
        .get(&detail_key)
        .and_then(outcome_of)
        .or_else(|| raw.details.values().find_map(outcome_of));
    let xg = raw
        .details
        .get("shot")
        .and_then(|shot| shot.get("statsbomb_xg"))
        .and_then(Value::as_f64);

    EventRecord {
        id: raw.id,
        index: raw.index,
        period: raw.period,
        minute: raw.minute,
        second: raw.second,
        type_name: raw.kind.name,
        team_name: raw.team.map(|t| t.name).unwrap_or_default(),
        player_name: raw.player.map(|p| p.name),
        x,
        y,
        outcome_name,
        xg,
    }
}

fn outcome_of(detail: &Value) -> Option<String> {
    detail
        .get("outcome")
        .and_then(|o| o.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Distinct team names in order of first appearance.
pub fn team_names(events: &[EventRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for event in events {
        if event.team_name.is_empty() || out.contains(&event.team_name) {
            continue;
        }
        out.push(event.team_name.clone());
    }
    out
}

/// Shot events in stream order.
pub fn filter_shots(events: &[EventRecord]) -> Result<Vec<ShotRecord>> {
    events
        .iter()
        .filter(|e| e.is_shot())
        .map(ShotRecord::from_event)
        .collect()
}

pub fn shots_for_team(shots: &[ShotRecord], team: &str) -> Vec<ShotRecord> {
    shots
        .iter()
        .filter(|s| s.team_name == team)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTeams {
    pub primary: String,
    pub opponent: String,
}

impl MatchTeams {
    /// Picks the primary team: `preferred` when given (exact, then
    /// case-insensitive, then unique substring match), else the first team seen.
    pub fn resolve(events: &[EventRecord], preferred: Option<&str>) -> Result<Self> {
        let names = team_names(events);
        let [first, second] = names.as_slice() else {
            bail!("expected exactly two teams, found {}: {:?}", names.len(), names);
        };

        let Some(wanted) = preferred.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self {
                primary: first.clone(),
                opponent: second.clone(),
            });
        };

        let primary = match_team_name(&names, wanted)
            .with_context(|| format!("primary team {wanted:?} not in {names:?}"))?;
        let opponent = if primary == *first { second } else { first };
        Ok(Self {
            primary,
            opponent: opponent.clone(),
        })
    }

    pub fn is_primary(&self, team: &str) -> bool {
        self.primary == team
    }
}

fn match_team_name(names: &[String], wanted: &str) -> Result<String> {
    if let Some(name) = names.iter().find(|n| n.as_str() == wanted) {
        return Ok(name.clone());
    }
    if let Some(name) = names.iter().find(|n| n.eq_ignore_ascii_case(wanted)) {
        return Ok(name.clone());
    }
    let needle = wanted.to_lowercase();
    let partial: Vec<&String> = names
        .iter()
        .filter(|n| n.to_lowercase().contains(&needle))
        .collect();
    match partial.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(anyhow!("no team matches")),
        _ => Err(anyhow!("ambiguous team name")),
    }
}
