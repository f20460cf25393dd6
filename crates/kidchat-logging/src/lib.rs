// Logging module - subscriber setup and log-friendly helpers
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "kidchat=info,kidchat_llm_api=info,tower_http=info";

/// Longest message preview written to the logs
pub const PREVIEW_CHARS: usize = 80;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over [`DEFAULT_LOG_FILTER`]. Returns `false` when a global
/// subscriber was already installed; the existing one is kept.
pub fn init_tracing(json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    match installed {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Tracing subscriber already installed, keeping it");
            false
        }
    }
}

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Preview of user text suitable for a single log line
pub fn preview(s: &str) -> String {
    safe_truncate(s, PREVIEW_CHARS).replace('\n', " ")
}
