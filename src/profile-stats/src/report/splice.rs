//! Replacing the owned region of a document.

/// Start/end sentinel lines delimiting the generated section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: "<!-- STATS:START -->".to_string(),
            end: "<!-- STATS:END -->".to_string(),
        }
    }
}

/// Replaces everything between the markers with `fragment`.
///
/// The block used is the last start marker that has an end marker after
/// it, closed by the first such end marker. Without one, a new block is
/// appended to the end of the document; since that block is then the last
/// complete one, later runs replace it instead of pairing an orphan marker
/// with it. Content outside the chosen block is preserved verbatim.
#[must_use]
pub fn splice_section(document: &str, fragment: &str, markers: &Markers) -> String {
    let bounds = document
        .rmatch_indices(markers.start.as_str())
        .find_map(|(start, _)| {
            let body_start = start + markers.start.len();
            document[body_start..]
                .find(&markers.end)
                .map(|offset| (body_start, body_start + offset))
        });

    match bounds {
        Some((body_start, body_end)) => format!(
            "{}\n{fragment}\n{}",
            &document[..body_start],
            &document[body_end..]
        ),
        None => {
            let mut out = document.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&format!("\n{}\n{fragment}\n{}\n", markers.start, markers.end));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_between_markers() {
        let doc = "# Me\n<!-- STATS:START -->\nold\n<!-- STATS:END -->\nfooter\n";
        let out = splice_section(doc, "new", &Markers::default());

        assert_eq!(out, "# Me\n<!-- STATS:START -->\nnew\n<!-- STATS:END -->\nfooter\n");
    }

    #[test]
    fn splice_is_idempotent() {
        let doc = "intro\n<!-- STATS:START -->\n<!-- STATS:END -->\n";
        let once = splice_section(doc, "## Stats\n\nbody", &Markers::default());
        let twice = splice_section(&once, "## Stats\n\nbody", &Markers::default());

        assert_eq!(once, twice);
    }

    #[test]
    fn appends_block_when_markers_missing() {
        let markers = Markers::default();
        let out = splice_section("# Hello", "stats", &markers);

        assert_eq!(out, "# Hello\n\n<!-- STATS:START -->\nstats\n<!-- STATS:END -->\n");
        assert_eq!(out.matches(&markers.start).count(), 1);

        let again = splice_section(&out, "stats", &markers);
        assert_eq!(again, out);
    }

    #[test]
    fn end_before_start_counts_as_missing() {
        let markers = Markers::default();
        let doc = "<!-- STATS:END -->\n<!-- STATS:START -->\n";
        let out = splice_section(doc, "x", &markers);

        assert!(out.starts_with(doc));
        assert!(out.ends_with("<!-- STATS:START -->\nx\n<!-- STATS:END -->\n"));

        let again = splice_section(&out, "x", &markers);
        assert_eq!(again, out);
    }

    #[test]
    fn orphan_start_marker_keeps_user_text() {
        let markers = Markers::default();
        let doc = "# Me\n<!-- STATS:START -->\nhand-written bio\n";

        let once = splice_section(doc, "frag", &markers);
        let twice = splice_section(&once, "frag", &markers);

        assert_eq!(once, twice);
        assert!(twice.starts_with(doc));
        assert!(twice.contains("hand-written bio"));
        assert_eq!(twice.matches(&markers.end).count(), 1);
    }

    #[test]
    fn stray_end_marker_after_block_is_kept() {
        let markers = Markers::default();
        let doc = "<!-- STATS:START -->\nold\n<!-- STATS:END -->\nfooter <!-- STATS:END -->\n";

        let out = splice_section(doc, "new", &markers);

        assert_eq!(
            out,
            "<!-- STATS:START -->\nnew\n<!-- STATS:END -->\nfooter <!-- STATS:END -->\n"
        );
    }

    #[test]
    fn orphan_start_after_block_does_not_append() {
        let markers = Markers::default();
        let doc = "<!-- STATS:START -->\nold\n<!-- STATS:END -->\nnotes <!-- STATS:START -->\n";

        let out = splice_section(doc, "new", &markers);

        assert_eq!(
            out,
            "<!-- STATS:START -->\nnew\n<!-- STATS:END -->\nnotes <!-- STATS:START -->\n"
        );
        assert_eq!(splice_section(&out, "new", &markers), out);
    }

    #[test]
    fn custom_markers() {
        let markers = Markers {
            start: "<!-- A -->".to_string(),
            end: "<!-- B -->".to_string(),
        };
        let out = splice_section("<!-- A --><!-- B -->", "mid", &markers);
        assert_eq!(out, "<!-- A -->\nmid\n<!-- B -->");
    }
}
