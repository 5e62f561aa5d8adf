//! Single binary web server: upload divisions, query elimination status via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Set DIVISION_FILE to preload a division at startup (its id is logged).

use actix_web::{
    delete, error::BlockingError, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use division_elimination::{
    division_report, load_division, parse_division_as, team_status, DivisionFormat,
    EliminationError, Standings,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for an uploaded division.
type DivisionId = Uuid;

/// Per-division entry: standings + last activity time (for auto-cleanup).
///
/// Standings are shared so analysis can run after the map lock is released.
struct DivisionEntry {
    standings: Arc<Standings>,
    last_activity: Instant,
}

/// In-memory state: many divisions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<DivisionId, DivisionEntry>>>;

/// Inactivity threshold: divisions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct UploadDivisionBody {
    #[serde(default)]
    format: DivisionFormat,
    data: String,
}

#[derive(Serialize)]
struct DivisionResponse<'a> {
    id: DivisionId,
    standings: &'a Standings,
}

/// Path segment: division id (e.g. /api/divisions/{id})
#[derive(Deserialize)]
struct DivisionPath {
    id: DivisionId,
}

/// Path segments: division id and team name (e.g. /api/divisions/{id}/teams/{team})
#[derive(Deserialize)]
struct DivisionTeamPath {
    id: DivisionId,
    team: String,
}

fn error_response(e: &EliminationError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        EliminationError::UnknownTeam(_) => HttpResponse::NotFound().json(body),
        EliminationError::MalformedNetwork(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn no_division() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No division" }))
}

fn worker_error(e: BlockingError) -> HttpResponse {
    log::error!("Elimination worker failed: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "worker failed" }))
}

/// Refresh a division's last_activity and share its standings. The map lock is released on return.
fn touch_division(state: &AppState, id: &DivisionId) -> Result<Arc<Standings>, HttpResponse> {
    let mut g = state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    match g.get_mut(id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            Ok(Arc::clone(&entry.standings))
        }
        None => Err(no_division()),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "division-elimination",
    })
}

/// Upload a division (returns it with id; client stores id for subsequent requests).
#[post("/api/divisions")]
async fn api_create_division(state: AppState, body: Json<UploadDivisionBody>) -> HttpResponse {
    let standings = match parse_division_as(&body.data, body.format) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    let id = Uuid::new_v4();
    log::info!("Stored division {} ({} teams)", id, standings.number_of_teams());
    let response = HttpResponse::Ok().json(DivisionResponse {
        id,
        standings: &standings,
    });
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        DivisionEntry {
            standings: Arc::new(standings),
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a division's standings by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/divisions/{id}")]
async fn api_get_division(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    match touch_division(&state, &path.id) {
        Ok(standings) => HttpResponse::Ok().json(DivisionResponse {
            id: path.id,
            standings: &standings,
        }),
        Err(response) => response,
    }
}

/// Forget a division.
#[delete("/api/divisions/{id}")]
async fn api_delete_division(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => no_division(),
    }
}

/// Elimination status of every team in the division.
#[get("/api/divisions/{id}/report")]
async fn api_division_report(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let standings = match touch_division(&state, &path.id) {
        Ok(s) => s,
        Err(response) => return response,
    };
    match web::block(move || division_report(&standings)).await {
        Ok(Ok(report)) => HttpResponse::Ok().json(report),
        Ok(Err(e)) => error_response(&e),
        Err(e) => worker_error(e),
    }
}

/// Elimination status and certificate of one team (404 on unknown team).
#[get("/api/divisions/{id}/teams/{team}")]
async fn api_team_status(state: AppState, path: Path<DivisionTeamPath>) -> HttpResponse {
    let DivisionTeamPath { id, team } = path.into_inner();
    let standings = match touch_division(&state, &id) {
        Ok(s) => s,
        Err(response) => return response,
    };
    let status = web::block(move || {
        standings
            .team_id(&team)
            .and_then(|team_id| team_status(&standings, team_id))
    })
    .await;
    match status {
        Ok(Ok(status)) => HttpResponse::Ok().json(status),
        Ok(Err(e)) => error_response(&e),
        Err(e) => worker_error(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let mut divisions = HashMap::<DivisionId, DivisionEntry>::new();
    if let Ok(file) = std::env::var("DIVISION_FILE") {
        match load_division(&file) {
            Ok(standings) => {
                let id = Uuid::new_v4();
                log::info!("Preloaded {} as division {}", file, id);
                divisions.insert(
                    id,
                    DivisionEntry {
                        standings: Arc::new(standings),
                        last_activity: Instant::now(),
                    },
                );
            }
            Err(e) => log::warn!("Could not preload {}: {}", file, e),
        }
    }
    let state = Data::new(RwLock::new(divisions));

    // Background task: every 30 minutes, remove divisions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive division(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_division)
            .service(api_get_division)
            .service(api_delete_division)
            .service(api_division_report)
            .service(api_team_status)
    })
    .bind(bind)?
    .run()
    .await
}
