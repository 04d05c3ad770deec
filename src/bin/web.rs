//! Single binary web server: REST API over in-memory Swiss tournaments plus the pairing engine round trip.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Pairing engine settings come from PAIRING_ENGINE, PAIRING_MODE, PAIRING_WORK_DIR, PAIRING_TIMEOUT_SECS.

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use swiss_tournament_web::{
    assign_bye, encode_request, read_roster, record_game, register_roster, sort_by_points,
    standings, start_tournament, BbpPairingsEngine, Outcome, PairingConfig, PairingError,
    PairingRequest, Tournament, TournamentError,
};
use uuid::Uuid;

/// Session id for a tournament held by this server.
type TournamentId = Uuid;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: tournaments by ID behind one exclusive lock. Entries are removed after 12h inactivity.
type AppState = Data<Mutex<HashMap<TournamentId, TournamentEntry>>>;

/// The pairing engine shared by all tournaments.
type EngineState = Data<BbpPairingsEngine>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct CreatedTournament<'a> {
    id: TournamentId,
    tournament: &'a Tournament,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default = "default_rounds")]
    rounds: u32,
}

fn default_rounds() -> u32 {
    5
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    id: String,
    rating: i32,
}

#[derive(Deserialize)]
struct RecordGameBody {
    white: String,
    black: String,
    outcome: Outcome,
}

#[derive(Deserialize)]
struct AssignByeBody {
    player: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run one mutating operation on a tournament under the lock and answer with the updated tournament.
fn apply<F>(state: &AppState, id: TournamentId, op: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match op(&mut entry.tournament) {
        Ok(()) => HttpResponse::Ok().json(&entry.tournament),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = Tournament::new(body.name.trim(), body.rounds);
    let id = Uuid::new_v4();
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = g.entry(id).or_insert(TournamentEntry {
        tournament,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(CreatedTournament {
        id,
        tournament: &entry.tournament,
    })
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    apply(&state, path.id, |_| Ok(()))
}

/// Register a player (tournament must be in Setup).
#[post("/api/tournaments/{id}/players")]
async fn api_register_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RegisterPlayerBody>,
) -> HttpResponse {
    apply(&state, path.id, |t| t.register(body.id.trim(), body.rating))
}

/// Register players from a CSV body with an `id,rating` header (tournament must be in Setup).
#[post("/api/tournaments/{id}/roster")]
async fn api_import_roster(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    let entries = match read_roster(body.as_bytes()) {
        Ok(entries) => entries,
        Err(e) => return bad_request(e),
    };
    apply(&state, path.id, |t| {
        let added = register_roster(t, &entries)?;
        log::info!("Imported {} of {} roster entries", added.len(), entries.len());
        Ok(())
    })
}

/// Start the tournament (Setup -> Ongoing): freezes the rating ranking.
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    apply(&state, path.id, start_tournament)
}

/// Record a game result (tournament must be Ongoing).
#[post("/api/tournaments/{id}/games")]
async fn api_record_game(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RecordGameBody>,
) -> HttpResponse {
    apply(&state, path.id, |t| record_game(t, &body.white, &body.black, body.outcome))
}

/// Give a player a bye (tournament must be Ongoing).
#[post("/api/tournaments/{id}/byes")]
async fn api_assign_bye(state: AppState, path: Path<TournamentPath>, body: Json<AssignByeBody>) -> HttpResponse {
    apply(&state, path.id, |t| assign_bye(t, &body.player))
}

/// Re-sort standings after a batch of results.
#[post("/api/tournaments/{id}/standings/sort")]
async fn api_sort_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    apply(&state, path.id, sort_by_points)
}

/// Current standings as of the last sort.
#[get("/api/tournaments/{id}/standings")]
async fn api_get_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(standings(&entry.tournament))
        }
        None => not_found(),
    }
}

/// The request document the pairing engine would receive.
#[get("/api/tournaments/{id}/trf")]
async fn api_get_trf(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match encode_request(&entry.tournament) {
        Ok(doc) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(doc),
        Err(e) => bad_request(e),
    }
}

/// Pair the next round through the external engine. The lock is only held while the request is prepared.
#[post("/api/tournaments/{id}/pairings")]
async fn api_fetch_pairings(
    state: AppState,
    engine: EngineState,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let request = {
        let mut g = match state.lock() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        let entry = match g.get_mut(&path.id) {
            Some(e) => e,
            None => return not_found(),
        };
        entry.last_activity = Instant::now();
        match PairingRequest::prepare(&entry.tournament) {
            Ok(request) => request,
            Err(e) => return bad_request(e),
        }
    };

    match request.submit(engine.get_ref()).await {
        Ok(round) => {
            for id in round.byes() {
                log::info!("{} will be assigned a bye", id);
            }
            HttpResponse::Ok().json(round)
        }
        Err(e) => {
            log::error!("Pairing failed: {}", e);
            let body = serde_json::json!({ "error": e.to_string() });
            if e.is_engine_failure() || matches!(e, PairingError::Format(_)) {
                HttpResponse::BadGateway().json(body)
            } else {
                HttpResponse::InternalServerError().json(body)
            }
        }
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

    let pairing = PairingConfig::from_env();
    log::info!(
        "Pairing engine: {} {} (work dir {}, timeout {:?})",
        pairing.executable.display(),
        pairing.mode,
        pairing.work_dir.display(),
        pairing.timeout
    );
    let engine = Data::new(BbpPairingsEngine::new(pairing));

    let state = Data::new(Mutex::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.lock() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(engine.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_register_player)
            .service(api_import_roster)
            .service(api_start_tournament)
            .service(api_record_game)
            .service(api_assign_bye)
            .service(api_sort_standings)
            .service(api_get_standings)
            .service(api_get_trf)
            .service(api_fetch_pairings)
    })
    .bind(bind)?
    .run()
    .await
}
