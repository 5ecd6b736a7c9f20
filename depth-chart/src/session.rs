use std::collections::HashMap;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::chart::{
    apply_drag, compute_position_lists, serialize, DepthChartEntry, DragMove, Player, PositionLists,
    SavePayload,
};
use crate::client::RosterApi;
use crate::error::Result;

/// Transient depth chart state for one team screen
#[derive(Debug, Clone)]
pub struct DepthChartSession {
    team_id: String,
    roster: Vec<Player>,
    saved_chart: Vec<DepthChartEntry>,
    lists: PositionLists,
    roster_error: Option<String>,
    save_error: Option<String>,
    dirty: bool,
}

impl DepthChartSession {
    pub fn new(team_id: impl Into<String>, roster: Vec<Player>, saved_chart: Vec<DepthChartEntry>) -> Self {
        let lists = compute_position_lists(&roster, &saved_chart);
        Self {
            team_id: team_id.into(),
            roster,
            saved_chart,
            lists,
            roster_error: None,
            save_error: None,
            dirty: false,
        }
    }

    /// Fetches roster and saved chart concurrently and builds the lists once
    /// both have resolved. A failed roster fetch leaves an empty roster and
    /// sets `roster_error`; a failed chart fetch means nothing is ranked yet.
    pub async fn load(api: &dyn RosterApi, team_id: &str) -> Self {
        let (roster, saved_chart) = tokio::join!(api.fetch_roster(team_id), api.fetch_depth_chart(team_id));

        let (roster, roster_error) = match roster {
            Ok(roster) => (roster, None),
            Err(e) => {
                warn!(team_id, error = %e, "roster fetch failed");
                (Vec::new(), Some(format!("Failed to load roster: {}", e)))
            }
        };
        let saved_chart = saved_chart.unwrap_or_else(|e| {
            debug!(team_id, error = %e, "depth chart fetch failed, starting unranked");
            Vec::new()
        });

        let mut session = Self::new(team_id, roster, saved_chart);
        session.roster_error = roster_error;
        info!(team_id, players = session.roster.len(), "depth chart session loaded");
        session
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn saved_chart(&self) -> &[DepthChartEntry] {
        &self.saved_chart
    }

    pub fn lists(&self) -> &PositionLists {
        &self.lists
    }

    pub fn roster_error(&self) -> Option<&str> {
        self.roster_error.as_deref()
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// True once a move has changed the lists since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Applies one drag move. Returns whether any list changed.
    pub fn apply(&mut self, mv: &DragMove) -> bool {
        let next = apply_drag(&self.lists, mv);
        if next == self.lists {
            return false;
        }
        self.lists = next;
        self.dirty = true;
        true
    }

    pub fn payload(&self) -> SavePayload {
        serialize(&self.lists, &self.team_id)
    }

    /// Records a successful save of `payload`; later moves keep the session dirty
    pub fn mark_saved(&mut self, payload: &SavePayload) {
        self.saved_chart = payload.to_entries();
        self.save_error = None;
        self.dirty = self.payload() != *payload;
    }

    /// Records a failed save. Lists are kept so the save can be retried.
    pub fn mark_save_failed(&mut self, message: impl Into<String>) {
        self.save_error = Some(message.into());
    }

    pub async fn save(&mut self, api: &dyn RosterApi) -> Result<()> {
        let payload = self.payload();
        match api.save_depth_chart(&payload).await {
            Ok(()) => {
                self.mark_saved(&payload);
                Ok(())
            }
            Err(e) => {
                warn!(team_id = %self.team_id, error = %e, "depth chart save failed");
                self.mark_save_failed(format!("Failed to save depth chart: {}", e));
                Err(e)
            }
        }
    }
}

struct Slot {
    /// Latest load started for the team
    generation: u64,
    /// Installed session and the generation of the load that produced it
    session: Option<(u64, DepthChartSession)>,
}

#[derive(Default)]
struct Slots {
    next_generation: u64,
    by_team: HashMap<String, Slot>,
}

/// Open sessions keyed by team. Each load is tagged with a generation so a
/// load that finishes after its screen was closed or reloaded is dropped.
#[derive(Default)]
pub struct SessionStore {
    slots: Mutex<Slots>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load for `team_id` and returns its generation. Any session
    /// already open stays visible until the load finishes.
    pub fn begin_load(&self, team_id: &str) -> u64 {
        let mut slots = self.slots.lock();
        slots.next_generation += 1;
        let generation = slots.next_generation;
        slots
            .by_team
            .entry(team_id.to_string())
            .and_modify(|slot| slot.generation = generation)
            .or_insert(Slot { generation, session: None });
        generation
    }

    /// Installs a loaded session if `generation` is still current.
    /// Returns false (and drops the session) for a stale load.
    pub fn finish_load(&self, generation: u64, session: DepthChartSession) -> bool {
        let mut slots = self.slots.lock();
        match slots.by_team.get_mut(session.team_id()) {
            Some(slot) if slot.generation == generation => {
                slot.session = Some((generation, session));
                true
            }
            _ => {
                debug!(team_id = session.team_id(), generation, "dropping stale load");
                false
            }
        }
    }

    pub fn close(&self, team_id: &str) -> bool {
        self.slots.lock().by_team.remove(team_id).is_some()
    }

    /// Runs `f` against the open session for `team_id`, if any
    pub fn with_session<R>(&self, team_id: &str, f: impl FnOnce(&mut DepthChartSession) -> R) -> Option<R> {
        self.with_session_generation(team_id, f).map(|(_, result)| result)
    }

    /// Like `with_session`, also returning the generation of the open session
    pub fn with_session_generation<R>(
        &self,
        team_id: &str,
        f: impl FnOnce(&mut DepthChartSession) -> R,
    ) -> Option<(u64, R)> {
        let mut slots = self.slots.lock();
        let (generation, session) = slots.by_team.get_mut(team_id)?.session.as_mut()?;
        Some((*generation, f(session)))
    }

    /// Runs `f` only if the open session is still the one loaded at `generation`
    pub fn with_session_at<R>(
        &self,
        team_id: &str,
        generation: u64,
        f: impl FnOnce(&mut DepthChartSession) -> R,
    ) -> Option<R> {
        let mut slots = self.slots.lock();
        match slots.by_team.get_mut(team_id)?.session.as_mut()? {
            (installed, session) if *installed == generation => Some(f(session)),
            _ => {
                debug!(team_id, generation, "session replaced, skipping update");
                None
            }
        }
    }
}
