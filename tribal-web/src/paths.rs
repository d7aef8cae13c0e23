//! URLs for static assets and the router, honouring the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (for example `/trti` when the site is
//! served from a subdirectory). Without it everything is root-anchored.

#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

/// Base path for the router, or `None` when the site lives at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    normalize_base(base).map_or_else(|| format!("/{rel}"), |base| format!("{base}/{rel}"))
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}
