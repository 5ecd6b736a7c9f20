pub mod chart;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod parser;
pub mod session;
pub mod telemetry;
pub mod web;

pub use chart::{
    apply_drag, compute_position_lists, position_coverage, reorder, serialize, DepthChartEntry, DragMove,
    Player, Position, PositionLists, SavePayload,
};
pub use client::{HttpRosterApi, RosterApi};
pub use config::ApiConfig;
pub use error::{DepthChartError, Result};
pub use session::{DepthChartSession, SessionStore};
