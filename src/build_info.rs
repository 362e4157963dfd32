//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version string shown in report headers, e.g. `0.1.0 (abc1234, 2026-10-19)`.
pub fn version_string() -> String {
    format!(
        "{} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_string_contains_parts() {
        let v = version_string();
        assert!(v.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(v.contains(BUILD_COMMIT));
        assert!(v.contains(BUILD_DATE));
    }
}
