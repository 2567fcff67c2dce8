//! Single binary web server: the form page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), FORM_TTL_HOURS (e.g. 12).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_announcement_web::{
    apply_edit, copy_announcement, render_view, Announcement, AnnouncementError, CapturedClipboard, Config,
    CopyResponse, FieldEdit, FormId, FormOptions,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-form entry: form state + last activity time (for auto-cleanup).
struct FormEntry {
    announcement: Announcement,
    last_activity: Instant,
}

/// In-memory state: one form per open page, by ID. Entries are removed after the inactivity timeout.
type AppState = Data<RwLock<HashMap<FormId, FormEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: form id (e.g. /api/announcements/{id})
#[derive(Deserialize)]
struct FormPath {
    id: FormId,
}

fn error_response(e: &AnnouncementError) -> HttpResponse {
    match e {
        AnnouncementError::FormNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn lock_error() -> HttpResponse {
    log::error!("form state lock poisoned");
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-announcement-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Dropdown and stepper options (locations, levels, message types, court range).
#[get("/api/options")]
async fn api_options() -> HttpResponse {
    HttpResponse::Ok().json(FormOptions::current())
}

/// Create a form with defaults for today (page mount). Client keeps the id for later requests.
#[post("/api/announcements")]
async fn api_create_announcement(state: AppState) -> HttpResponse {
    let today = chrono::Local::now().date_naive();
    let announcement = Announcement::with_defaults(today);
    let id = FormId::new_v4();
    let view = render_view(&announcement);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.insert(
        id,
        FormEntry {
            announcement,
            last_activity: Instant::now(),
        },
    );
    log::debug!("Created form {} ({} open)", id, g.len());
    HttpResponse::Ok().json(serde_json::json!({ "id": id, "view": view }))
}

/// Current view of a form (404 if not found). Touching it refreshes last_activity.
#[get("/api/announcements/{id}")]
async fn api_get_announcement(state: AppState, path: Path<FormPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(render_view(&entry.announcement))
        }
        None => error_response(&AnnouncementError::FormNotFound(path.id)),
    }
}

/// Apply one field edit: merge, re-derive, validate, and return the fresh view.
#[put("/api/announcements/{id}/field")]
async fn api_edit_field(state: AppState, path: Path<FormPath>, body: Json<FieldEdit>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return error_response(&AnnouncementError::FormNotFound(path.id)),
    };
    entry.last_activity = Instant::now();
    let edit = body.into_inner();
    log::debug!("Form {}: {:?}", path.id, edit);
    match apply_edit(&mut entry.announcement, edit) {
        Ok(_) => HttpResponse::Ok().json(render_view(&entry.announcement)),
        Err(e) => {
            log::info!("Form {}: rejected edit: {}", path.id, e);
            error_response(&e)
        }
    }
}

/// Render the message for copying. The browser writes it to the clipboard and shows the acknowledgement.
#[post("/api/announcements/{id}/copy")]
async fn api_copy_announcement(state: AppState, path: Path<FormPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return error_response(&AnnouncementError::FormNotFound(path.id)),
    };
    entry.last_activity = Instant::now();
    let mut clipboard = CapturedClipboard::new();
    let ack = match copy_announcement(&entry.announcement, &mut clipboard, Instant::now()) {
        Ok(ack) => ack,
        Err(e) => return error_response(&e),
    };
    match clipboard.into_text() {
        Some(text) => HttpResponse::Ok().json(CopyResponse {
            text,
            acknowledge_ms: ack.visible_for.as_millis() as u64,
        }),
        None => error_response(&AnnouncementError::Clipboard("nothing captured".to_string())),
    }
}

/// Discard a form (page unload). Idempotent.
#[delete("/api/announcements/{id}")]
async fn api_discard_announcement(state: AppState, path: Path<FormPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.remove(&path.id).is_some() {
        log::debug!("Discarded form {}", path.id);
    }
    HttpResponse::NoContent().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let inactivity_timeout = config.form_ttl;
    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<FormId, FormEntry>::new()));

    // Background task: every 30 minutes, remove forms whose page went away without a DELETE
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive form(s) (no activity for {}h)",
                    removed,
                    inactivity_timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_options)
            .service(api_create_announcement)
            .service(api_get_announcement)
            .service(api_edit_field)
            .service(api_copy_announcement)
            .service(api_discard_announcement)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
