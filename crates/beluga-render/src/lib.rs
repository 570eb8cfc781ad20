#![forbid(unsafe_code)]

//! Headless SVG renderer for bubble layout snapshots.
//!
//! Hosts embedding the engine in a UI draw their own circles; this crate
//! serves the batch/debug path, turning one [`Bubble`] snapshot into a
//! standalone SVG document string.

use beluga::Bubble;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the container viewBox.
    pub viewbox_padding: f64,
    /// When true, draw each bubble's display name at its center.
    pub include_labels: bool,
    /// Optional canvas background fill.
    pub background: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            include_labels: true,
            background: None,
        }
    }
}

/// Renders a snapshot as a standalone SVG document.
///
/// `width`/`height` are the engine's container dimensions; bubble colors and
/// names are emitted as-is (escaped), matching the engine's opaque-payload
/// contract.
pub fn render_snapshot_svg(
    bubbles: &[Bubble],
    width: f64,
    height: f64,
    options: &SvgRenderOptions,
) -> String {
    let pad = options.viewbox_padding;
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{width}" height="{height}">"#,
        -pad,
        -pad,
        width + 2.0 * pad,
        height + 2.0 * pad,
    );
    if let Some(background) = &options.background {
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
            escape_attr(background),
        );
    }
    let _ = write!(svg, r#"<g class="bubbles">"#);
    for b in bubbles {
        let fill = if b.color.is_empty() {
            "#999"
        } else {
            b.color.as_str()
        };
        let _ = write!(
            svg,
            r#"<circle id="{}" cx="{}" cy="{}" r="{}" fill="{}">"#,
            escape_attr(&b.id),
            b.x,
            b.y,
            b.radius,
            escape_attr(fill),
        );
        let _ = write!(svg, "<title>{}</title></circle>", escape_text(&b.display_name));
    }
    if options.include_labels {
        for b in bubbles {
            if b.display_name.is_empty() {
                continue;
            }
            let _ = write!(
                svg,
                r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                b.x,
                b.y,
                escape_text(&b.display_name),
            );
        }
    }
    let _ = write!(svg, "</g></svg>");
    svg
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderOptions, render_snapshot_svg};
    use beluga::Bubble;

    fn bubble(id: &str, name: &str) -> Bubble {
        Bubble {
            id: id.to_string(),
            x: 100.0,
            y: 80.0,
            radius: 25.0,
            color: "#88c0d0".to_string(),
            display_name: name.to_string(),
        }
    }

    #[test]
    fn renders_one_circle_per_bubble() {
        let bubbles = vec![bubble("a", "Calm"), bubble("b", "Joy")];
        let svg = render_snapshot_svg(&bubbles, 400.0, 300.0, &SvgRenderOptions::default());
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"viewBox="-8 -8 416 316""#));
        assert!(svg.contains(r##"fill="#88c0d0""##));
        assert!(svg.contains("<text"));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn labels_can_be_turned_off() {
        let options = SvgRenderOptions {
            include_labels: false,
            ..Default::default()
        };
        let svg = render_snapshot_svg(&[bubble("a", "Calm")], 400.0, 300.0, &options);
        assert!(!svg.contains("<text"));
        // The hover title stays.
        assert!(svg.contains("<title>Calm</title>"));
    }

    #[test]
    fn display_payload_is_escaped() {
        let svg = render_snapshot_svg(
            &[bubble("a", "<Anger & \"Rage\">")],
            400.0,
            300.0,
            &SvgRenderOptions::default(),
        );
        assert!(svg.contains("&lt;Anger &amp; \"Rage\"&gt;"));
        assert!(!svg.contains("<Anger"));
    }

    #[test]
    fn background_rect_is_optional() {
        let without = render_snapshot_svg(&[], 400.0, 300.0, &SvgRenderOptions::default());
        assert!(!without.contains("<rect"));
        let options = SvgRenderOptions {
            background: Some("#2e3440".to_string()),
            ..Default::default()
        };
        let with = render_snapshot_svg(&[], 400.0, 300.0, &options);
        assert!(with.contains(r##"<rect x="0" y="0" width="400" height="300" fill="#2e3440"/>"##));
    }
}
