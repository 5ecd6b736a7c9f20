#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;

use depth_chart::{DepthChartEntry, DepthChartError, Player, Position, Result, RosterApi, SavePayload};

/// In-memory roster service
pub struct FakeRosterApi {
    pub roster: Mutex<Option<Vec<Player>>>,
    pub saved: Mutex<Option<Vec<DepthChartEntry>>>,
    pub fail_saves: Mutex<bool>,
    pub saves: Mutex<Vec<SavePayload>>,
}

impl FakeRosterApi {
    pub fn new(roster: Vec<Player>) -> Self {
        Self {
            roster: Mutex::new(Some(roster)),
            saved: Mutex::new(Some(Vec::new())),
            fail_saves: Mutex::new(false),
            saves: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_roster() -> Self {
        let api = Self::new(Vec::new());
        *api.roster.lock() = None;
        api
    }
}

#[async_trait]
impl RosterApi for FakeRosterApi {
    async fn fetch_roster(&self, _team_id: &str) -> Result<Vec<Player>> {
        self.roster
            .lock()
            .clone()
            .ok_or_else(|| DepthChartError::config("roster service unavailable"))
    }

    async fn fetch_depth_chart(&self, _team_id: &str) -> Result<Vec<DepthChartEntry>> {
        self.saved
            .lock()
            .clone()
            .ok_or_else(|| DepthChartError::config("depth chart unavailable"))
    }

    async fn save_depth_chart(&self, payload: &SavePayload) -> Result<()> {
        if *self.fail_saves.lock() {
            return Err(DepthChartError::config("save rejected"));
        }
        self.saves.lock().push(payload.clone());
        *self.saved.lock() = Some(payload.to_entries());
        Ok(())
    }
}

/// Two pitchers tied on allocation plus a catcher who also pitches
pub fn sample_roster() -> Vec<Player> {
    vec![
        Player::new("p1", "23").with_name("Cy", "Young").with_slot(Position::Pitcher, 0.6),
        Player::new("p2", "5").with_name("Ada", "Baker").with_slot(Position::Pitcher, 0.6),
        Player::new("p3", "8")
            .with_name("Yogi", "Berra")
            .with_slot(Position::Catcher, 0.9)
            .with_slot(Position::Pitcher, 0.1),
    ]
}
