use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Initialize logging to a file under `~/.pickwheel/logs`
pub fn init() -> std::io::Result<PathBuf> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pickwheel")
        .join("logs");
    init_in(log_dir)
}

/// Initialize logging to a timestamped file inside `log_dir`
pub fn init_in(log_dir: PathBuf) -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("pickwheel_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log("=== pickwheel started ===");

    Ok(log_path)
}

/// Log a message with timestamp. No-op until `init` has run.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log a gesture step (drag, release, settle frame)
pub fn log_gesture(kind: &str, offset: f32, velocity: Option<f32>) {
    match velocity {
        Some(v) => log(&format!("[GESTURE] {} offset={:.2} velocity={:.2}", kind, offset, v)),
        None => log(&format!("[GESTURE] {} offset={:.2}", kind, offset)),
    }
}

/// Log an event
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Install a panic hook that records the panic before the default handler runs
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log(&format!("[PANIC] {}", info));
        default_hook(info);
    }));
}
