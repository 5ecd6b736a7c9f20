use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::chart::{position_coverage, DragMove, Position, PositionCoverage};
use crate::client::RosterApi;
use crate::display::format_player_name;
use crate::session::{DepthChartSession, SessionStore};

pub struct AppState {
    pub api: Arc<dyn RosterApi>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(api: Arc<dyn RosterApi>) -> Self {
        Self {
            api,
            sessions: SessionStore::new(),
        }
    }
}

#[derive(Serialize)]
pub struct DepthChartResponse {
    team_id: String,
    positions: Vec<PositionResponse>,
    roster_error: Option<String>,
    save_error: Option<String>,
    dirty: bool,
}

#[derive(Serialize)]
pub struct PositionResponse {
    position: Position,
    players: Vec<RankedPlayer>,
}

#[derive(Serialize)]
pub struct RankedPlayer {
    rank: usize,
    player_id: String,
    jersey_number: String,
    name: String,
    allocation: f64,
}

#[derive(Serialize)]
pub struct CoverageResponse {
    team_id: String,
    coverage: BTreeMap<Position, PositionCoverage>,
}

impl From<&DepthChartSession> for DepthChartResponse {
    fn from(session: &DepthChartSession) -> Self {
        let positions = session
            .lists()
            .iter()
            .map(|(position, players)| PositionResponse {
                position,
                players: players
                    .iter()
                    .enumerate()
                    .map(|(index, player)| RankedPlayer {
                        rank: index + 1,
                        player_id: player.id.clone(),
                        jersey_number: player.jersey_number.clone(),
                        name: format_player_name(&player.jersey_number, &player.full_name()),
                        allocation: player.allocation_for(position),
                    })
                    .collect(),
            })
            .collect();

        Self {
            team_id: session.team_id().to_string(),
            positions,
            roster_error: session.roster_error().map(str::to_string),
            save_error: session.save_error().map(str::to_string),
            dirty: session.is_dirty(),
        }
    }
}

fn no_session() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"error": "No depth chart loaded for this team"}))
}

// Load roster + saved chart and open (or replace) the team's session
async fn load_depth_chart(
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let team_id = team_id.into_inner();
    let generation = state.sessions.begin_load(&team_id);
    let session = DepthChartSession::load(state.api.as_ref(), &team_id).await;
    let response = DepthChartResponse::from(&session);

    if state.sessions.finish_load(generation, session) {
        Ok(HttpResponse::Ok().json(response))
    } else {
        Ok(HttpResponse::Conflict().json(serde_json::json!({
            "error": "Load superseded by a newer load or the screen was closed"
        })))
    }
}

async fn get_depth_chart(
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state.sessions.with_session(&team_id, |s| DepthChartResponse::from(&*s)) {
        Some(response) => Ok(HttpResponse::Ok().json(response)),
        None => Ok(no_session()),
    }
}

async fn reorder_players(
    team_id: web::Path<String>,
    mv: web::Json<DragMove>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let result = state.sessions.with_session(&team_id, |session| {
        let changed = session.apply(&mv);
        (changed, DepthChartResponse::from(&*session))
    });

    match result {
        Some((true, response)) => Ok(HttpResponse::Ok().json(response)),
        Some((false, response)) => Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Move had no effect: players can only be moved from an existing index within one position",
            "depth_chart": response,
        }))),
        None => Ok(no_session()),
    }
}

async fn save_depth_chart(
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some((generation, payload)) = state.sessions.with_session_generation(&team_id, |s| s.payload()) else {
        return Ok(no_session());
    };

    // Lock released during the request; the result only lands on the same session
    let result = state.api.save_depth_chart(&payload).await;
    let recorded = state.sessions.with_session_at(&team_id, generation, |session| {
        match &result {
            Ok(()) => session.mark_saved(&payload),
            Err(e) => session.mark_save_failed(format!("Failed to save depth chart: {}", e)),
        }
        DepthChartResponse::from(&*session)
    });

    match (result, recorded) {
        (Ok(()), Some(response)) => Ok(HttpResponse::Ok().json(response)),
        (Ok(()), None) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true}))),
        (Err(e), _) => Ok(HttpResponse::BadGateway().json(serde_json::json!({
            "success": false,
            "error": format!("Failed to save depth chart: {}", e)
        }))),
    }
}

async fn get_coverage(
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state.sessions.with_session(&team_id, |s| position_coverage(s.roster())) {
        Some(coverage) => Ok(HttpResponse::Ok().json(CoverageResponse {
            team_id: team_id.into_inner(),
            coverage,
        })),
        None => Ok(no_session()),
    }
}

async fn close_session(
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if state.sessions.close(&team_id) {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(no_session())
    }
}

/// Routes for the depth chart API; shared by the server and tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teams/{team_id}")
            .route("", web::delete().to(close_session))
            .route("/load", web::post().to(load_depth_chart))
            .route("/depth_chart", web::get().to(get_depth_chart))
            .route("/reorder", web::post().to(reorder_players))
            .route("/save", web::post().to(save_depth_chart))
            .route("/coverage", web::get().to(get_coverage)),
    );
}

pub async fn start_server(port: u16, api: Arc<dyn RosterApi>) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(api));
    info!(port, "starting depth chart server");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
