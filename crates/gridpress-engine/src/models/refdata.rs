//! Read-only domain reference data consumed by the `f1/*` block types.
//!
//! The engine never owns this data: blocks store foreign-key ids and the
//! renderer resolves them at render time through [`ReferenceLookup`]. All
//! lookups are pure and synchronous; a missing id is `None`, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub String);

impl From<&str> for DriverId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceId(pub String);

impl From<&str> for RaceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session of a race weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Practice,
    Qualifying,
    Sprint,
    #[default]
    Race,
}

impl SessionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "practice" => Some(Self::Practice),
            "qualifying" => Some(Self::Qualifying),
            "sprint" => Some(Self::Sprint),
            "race" => Some(Self::Race),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Practice => "Practice",
            Self::Qualifying => "Qualifying",
            Self::Sprint => "Sprint",
            Self::Race => "Race",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub number: u32,
    pub team_id: TeamId,
    pub country: String,
    pub points: f32,
    pub wins: u32,
    pub podiums: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub base: String,
    pub principal: String,
    pub points: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    pub circuit: String,
    pub country: String,
    pub round: u32,
    /// ISO date of the session weekend start.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub position: u32,
    pub driver_id: DriverId,
    /// Gap to the leader, already formatted ("+5.032s", "DNF", ...).
    pub gap: String,
    pub points: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub race_id: RaceId,
    pub session: SessionKind,
    pub rows: Vec<ResultRow>,
}

/// Pure, synchronous lookup interface over externally owned collections.
pub trait ReferenceLookup {
    fn driver(&self, id: &DriverId) -> Option<&Driver>;
    fn team(&self, id: &TeamId) -> Option<&Team>;
    fn race(&self, id: &RaceId) -> Option<&Race>;
    fn session_result(&self, race: &RaceId, session: SessionKind) -> Option<&SessionResult>;
    /// All drivers, in no particular order.
    fn drivers(&self) -> Vec<&Driver>;
    /// All teams, in no particular order.
    fn teams(&self) -> Vec<&Team>;
}

/// In-memory [`ReferenceLookup`] backed by hash maps, loadable from the
/// JSON fixture format produced by the data pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceStore {
    drivers: HashMap<DriverId, Driver>,
    teams: HashMap<TeamId, Team>,
    races: HashMap<RaceId, Race>,
    results: HashMap<(RaceId, SessionKind), SessionResult>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawReferenceData {
    drivers: Vec<Driver>,
    teams: Vec<Team>,
    races: Vec<Race>,
    results: Vec<SessionResult>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawReferenceData = serde_json::from_str(json)?;
        let mut store = Self::new();
        for driver in raw.drivers {
            store.add_driver(driver);
        }
        for team in raw.teams {
            store.add_team(team);
        }
        for race in raw.races {
            store.add_race(race);
        }
        for result in raw.results {
            store.add_session_result(result);
        }
        Ok(store)
    }

    pub fn add_driver(&mut self, driver: Driver) {
        self.drivers.insert(driver.id.clone(), driver);
    }

    pub fn add_team(&mut self, team: Team) {
        self.teams.insert(team.id.clone(), team);
    }

    pub fn add_race(&mut self, race: Race) {
        self.races.insert(race.id.clone(), race);
    }

    pub fn add_session_result(&mut self, result: SessionResult) {
        self.results
            .insert((result.race_id.clone(), result.session), result);
    }
}

impl ReferenceLookup for ReferenceStore {
    fn driver(&self, id: &DriverId) -> Option<&Driver> {
        self.drivers.get(id)
    }

    fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.get(id)
    }

    fn race(&self, id: &RaceId) -> Option<&Race> {
        self.races.get(id)
    }

    fn session_result(&self, race: &RaceId, session: SessionKind) -> Option<&SessionResult> {
        self.results.get(&(race.clone(), session))
    }

    fn drivers(&self) -> Vec<&Driver> {
        self.drivers.values().collect()
    }

    fn teams(&self) -> Vec<&Team> {
        self.teams.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_driver() -> Driver {
        Driver {
            id: "verstappen".into(),
            name: "Max Verstappen".to_string(),
            number: 1,
            team_id: "red-bull".into(),
            country: "Netherlands".to_string(),
            points: 310.0,
            wins: 9,
            podiums: 12,
        }
    }

    #[test]
    fn dangling_ids_resolve_to_none() {
        let mut store = ReferenceStore::new();
        store.add_driver(sample_driver());
        assert!(store.driver(&"verstappen".into()).is_some());
        assert_eq!(store.driver(&"fangio".into()), None);
        assert_eq!(store.session_result(&"monza-2026".into(), SessionKind::Race), None);
    }

    #[test]
    fn fixture_json_loads() {
        let json = r#"{
            "drivers": [{
                "id": "norris", "name": "Lando Norris", "number": 4,
                "teamId": "mclaren", "country": "United Kingdom",
                "points": 275.5, "wins": 4, "podiums": 11
            }],
            "races": [{
                "id": "monza-2026", "name": "Italian Grand Prix",
                "circuit": "Autodromo Nazionale Monza", "country": "Italy",
                "round": 16, "date": "2026-09-06"
            }]
        }"#;
        let store = ReferenceStore::from_json(json).unwrap();
        assert_eq!(store.driver(&"norris".into()).unwrap().number, 4);
        assert_eq!(store.race(&"monza-2026".into()).unwrap().round, 16);
        assert!(store.teams().is_empty());
    }
}
