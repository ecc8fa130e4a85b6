//! Static status page sink
//!
//! Writes a self-contained HTML page keeping the original dashboard's
//! DOM contract: every builder gets an element with id
//! `buildbot-{slug}-status` carrying `buildbot-happy` or `buildbot-sad`,
//! and the body carries `build-broken` unless the board is all green.

use std::path::PathBuf;

use tracing::{debug, error};

use buildwatch_core::domain::{BuilderName, StatusBoard};

use crate::render::StatusSink;

/// Sink that rewrites a status page on every publish
pub struct HtmlSink {
    path: PathBuf,
}

impl HtmlSink {
    /// Creates a sink writing to the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StatusSink for HtmlSink {
    fn publish(&self, builders: &[BuilderName], board: &StatusBoard) {
        let page = render_page(builders, board);
        match std::fs::write(&self.path, page) {
            Ok(()) => debug!("Wrote status page to {}", self.path.display()),
            // Sinks must not fail the cycle
            Err(e) => error!("Failed to write status page to {}: {}", self.path.display(), e),
        }
    }
}

/// Renders the status page for one board snapshot
///
/// Builders the board has never resolved render without a status class.
pub fn render_page(builders: &[BuilderName], board: &StatusBoard) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>Build status</title>\n</head>\n");

    if board.all_green() {
        page.push_str("<body>\n");
    } else {
        page.push_str("<body class=\"build-broken\">\n");
    }

    page.push_str("<ul class=\"buildbot-list\">\n");
    for builder in builders {
        let entry = match board.get(builder) {
            Some(true) => format!(
                "  <li id=\"{}\" class=\"buildbot-happy\">{}</li>\n",
                builder.element_id(),
                builder
            ),
            Some(false) => format!(
                "  <li id=\"{}\" class=\"buildbot-sad\">{}</li>\n",
                builder.element_id(),
                builder
            ),
            None => format!("  <li id=\"{}\">{}</li>\n", builder.element_id(), builder),
        };
        page.push_str(&entry);
    }
    page.push_str("</ul>\n</body>\n</html>\n");

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builders(names: &[&str]) -> Vec<BuilderName> {
        names.iter().map(|n| BuilderName::new(*n)).collect()
    }

    #[test]
    fn test_happy_and_sad_classes() {
        let list = builders(&["Linux", "Mac Engine"]);
        let mut board = StatusBoard::new();
        board.record(BuilderName::new("Linux"), true);
        board.record(BuilderName::new("Mac Engine"), false);

        let page = render_page(&list, &board);
        assert!(page.contains("<li id=\"buildbot-linux-status\" class=\"buildbot-happy\">Linux</li>"));
        assert!(page.contains(
            "<li id=\"buildbot-mac-engine-status\" class=\"buildbot-sad\">Mac Engine</li>"
        ));
    }

    #[test]
    fn test_body_carries_build_broken_unless_all_green() {
        let list = builders(&["Linux"]);
        let mut board = StatusBoard::new();

        board.record(BuilderName::new("Linux"), false);
        assert!(render_page(&list, &board).contains("<body class=\"build-broken\">"));

        board.record(BuilderName::new("Linux"), true);
        assert!(!render_page(&list, &board).contains("build-broken"));
    }

    #[test]
    fn test_unfetched_builder_has_no_status_class() {
        let list = builders(&["Linux"]);
        let board = StatusBoard::new();

        let page = render_page(&list, &board);
        assert!(page.contains("<li id=\"buildbot-linux-status\">Linux</li>"));
        assert!(!page.contains("buildbot-happy"));
        assert!(!page.contains("buildbot-sad"));
        // Empty board is vacuously green
        assert!(!page.contains("build-broken"));
    }

    #[test]
    fn test_sink_writes_page_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.html");

        let list = builders(&["Linux"]);
        let mut board = StatusBoard::new();
        board.record(BuilderName::new("Linux"), true);

        let sink = HtmlSink::new(path.clone());
        sink.publish(&list, &board);

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("buildbot-happy"));
    }
}
