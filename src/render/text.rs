// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::LayoutKind;

use super::ansi::strip_ansi;
use super::Canvas;

const TAB_WIDTH: usize = 4;

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = Vec::<String>::with_capacity(canvas.height());
    for y in 0..canvas.height() {
        lines.push(canvas.row(y).trim_end_matches(' ').to_owned());
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

fn is_blank(line: &str) -> bool {
    strip_ansi(line).trim().is_empty()
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|ch| *ch == ' ').count()
}

/// Render-time copy of a slide body, one entry per screen line.
///
/// - tabs become spaces and `\r` line endings are dropped
/// - blank lines at either end are removed
/// - the indentation shared by all non-blank lines is removed
/// - trailing whitespace is removed; `center` lines are trimmed on both sides
pub(crate) fn prepare_lines(body: &str, kind: LayoutKind) -> Vec<String> {
    let expanded = body.replace('\t', &" ".repeat(TAB_WIDTH));
    let raw = expanded.split('\n').map(|line| line.trim_end_matches('\r')).collect::<Vec<_>>();

    let Some(first) = raw.iter().position(|line| !is_blank(line)) else {
        return Vec::new();
    };
    let last = raw.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    let raw = &raw[first..=last];

    let indent = raw
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_spaces(line))
        .min()
        .unwrap_or(0);

    raw.iter()
        .map(|line| {
            if is_blank(line) {
                return String::new();
            }
            let dedented: String = line.chars().skip(indent).collect();
            if kind.is_preformatted() {
                dedented.trim_end().to_owned()
            } else {
                dedented.trim().to_owned()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{canvas_to_string_trimmed, prepare_lines, text_len, truncate_with_ellipsis};
    use crate::model::LayoutKind;
    use crate::render::Canvas;

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
    }

    #[test]
    fn truncate_with_ellipsis_counts_chars_not_bytes() {
        assert_eq!(text_len("“quote”"), 7);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
    }

    #[test]
    fn canvas_to_string_trimmed_removes_trailing_spaces_and_empty_lines() {
        let mut canvas = Canvas::new(3, 2).expect("canvas");
        canvas.set(0, 0, 'A').expect("set");
        assert_eq!(canvas_to_string_trimmed(&canvas), "A");
    }

    #[test]
    fn prepare_lines_dedents_shared_indentation() {
        let body = "\n  class HttpRequest\n    attr_reader :req\n\n  end\n";
        assert_eq!(
            prepare_lines(body, LayoutKind::Code),
            ["class HttpRequest", "  attr_reader :req", "", "end"]
        );
    }

    #[test]
    fn prepare_lines_trims_center_lines() {
        let body = "  Questions?\n\n      mike@subelsky.com  ";
        assert_eq!(
            prepare_lines(body, LayoutKind::Center),
            ["Questions?", "", "mike@subelsky.com"]
        );
    }

    #[test]
    fn prepare_lines_of_blank_body_is_empty() {
        assert!(prepare_lines("\n  \n", LayoutKind::Block).is_empty());
        assert!(prepare_lines("", LayoutKind::Center).is_empty());
    }

    #[test]
    fn prepare_lines_expands_tabs() {
        assert_eq!(prepare_lines("a\n\tb", LayoutKind::Code), ["a", "    b"]);
    }
}
