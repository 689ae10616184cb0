use actix_web::{web, get, HttpResponse, Responder};
use humantime::format_duration;
use once_cell::sync::Lazy;
use chrono::Utc;
use std::{
    time::Duration,
    sync::{atomic::{AtomicI64, Ordering}, RwLock},
};
use sysinfo::System;
use serde::Serialize;
use crate::{constants::START_TIME, AppState};

const SYSTEM_SNAPSHOT_TTL_SECS: i64 = 5;

#[derive(Serialize, Clone, Default)]
struct SystemSnapshot {
    os: String,
    hostname: String,
    cpu_count: usize,
    memory_usage: String,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: &'static str,
    rate_limited_clients: usize,
    rate_limit_window: String,
    system: SystemSnapshot,
}

// Shared snapshot, refreshed at most every SYSTEM_SNAPSHOT_TTL_SECS.
static LAST_SNAPSHOT: AtomicI64 = AtomicI64::new(0);
static CACHED_SNAPSHOT: Lazy<RwLock<SystemSnapshot>> = Lazy::new(||
    RwLock::new(SystemSnapshot::default())
);

fn take_snapshot() -> SystemSnapshot {
    let mut sys = System::new_all();
    sys.refresh_all();

    let process = sys.process(sysinfo::get_current_pid().unwrap_or(0.into()));
    let memory_usage = process.map_or("Unknown".to_string(), |p|
        format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
    );

    SystemSnapshot {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_usage,
    }
}

fn system_snapshot() -> SystemSnapshot {
    let now = Utc::now().timestamp();
    let last = LAST_SNAPSHOT.load(Ordering::Relaxed);

    if now - last > SYSTEM_SNAPSHOT_TTL_SECS {
        let snapshot = take_snapshot();
        match CACHED_SNAPSHOT.write() {
            Ok(mut cache) => {
                *cache = snapshot.clone();
                LAST_SNAPSHOT.store(now, Ordering::Relaxed);
            }
            Err(e) => tracing::warn!("System snapshot cache lock poisoned: {}", e),
        }
        return snapshot;
    }

    match CACHED_SNAPSHOT.read() {
        Ok(snapshot) => snapshot.clone(),
        Err(e) => {
            tracing::warn!("System snapshot cache lock poisoned: {}", e);
            take_snapshot()
        }
    }
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let uptime = Duration::from_secs(uptime.num_seconds().max(0) as u64);
    let limiter = &state.contact_handler.rate_limiter;

    let system = web::block(system_snapshot).await.unwrap_or_default();

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        uptime: format_duration(uptime).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        rate_limited_clients: limiter.tracked(),
        rate_limit_window: format_duration(limiter.window()).to_string(),
        system,
    })
}
