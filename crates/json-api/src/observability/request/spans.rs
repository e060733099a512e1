//! Route labels for spans and metrics.

use uuid::Uuid;

/// Paths served without request logging or metrics.
const UNLOGGED_PATHS: [&str; 2] = ["/metrics", "/healthcheck"];

pub(super) fn is_unlogged_path(path: &str) -> bool {
    UNLOGGED_PATHS.contains(&path.trim_end_matches('/'))
}

/// Collapse identifiers in `path` so every request to one route shares a label.
pub(super) fn route_label(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    trimmed
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .fold(String::new(), |mut label, segment| {
            label.push('/');
            label.push_str(segment);
            label
        })
}
