use crate::morph::{SwapEvent, SwapPlan};
use serde::Deserialize;
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

/// How a swap plan is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// One line per swap, with markers under the characters that moved.
    #[default]
    Text,

    /// The whole plan as a JSON document.
    Json,
}

/// Render a plan in the given format.
pub fn render(plan: &SwapPlan, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(plan)),
        OutputFormat::Json => serde_json::to_string_pretty(plan),
    }
}

fn render_text(plan: &SwapPlan) -> String {
    let mut output = format!("{} -> {}\n", plan.start, plan.end);
    for (index, event) in plan.events.iter().enumerate() {
        render_event(&mut output, index + 1, event);
    }
    output
}

fn render_event(output: &mut String, number: usize, event: &SwapEvent) {
    let Some(swap) = event.swap else {
        let _ = writeln!(output, "done: {}", event.resulting);
        return;
    };
    let prefix = format!("step {number}: {} <-> {}  ", swap.jump, swap.duck);
    let _ = writeln!(output, "{prefix}{}", event.resulting);

    // Wide characters take more than one column so markers need to account for display widths.
    let mut markers = " ".repeat(prefix.len());
    let mut last_column = None;
    for (position, c) in event.resulting.chars().enumerate() {
        let marked = position == swap.jump || position == swap.duck;
        let width = c.width().unwrap_or(0);
        if width == 0 {
            // zero width characters are drawn on top of the one before them
            if let (true, Some(column)) = (marked, last_column) {
                markers.replace_range(column..column + 1, "^");
            }
            continue;
        }
        last_column = Some(markers.len());
        markers.push(if marked { '^' } else { ' ' });
        markers.push_str(&" ".repeat(width - 1));
    }
    let _ = writeln!(output, "{}", markers.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::plan;
    use std::str::FromStr;

    #[test]
    fn text() {
        let plan = plan("abc", "cab").expect("plan failed");
        let expected = "\
abc -> cab
step 1: 0 <-> 2  cba
                 ^ ^
step 2: 1 <-> 2  cab
                  ^^
done: cab
";
        assert_eq!(render(&plan, OutputFormat::Text).expect("render failed"), expected);
    }

    #[test]
    fn text_wide_characters() {
        let plan = plan("日本a", "a本日").expect("plan failed");
        let expected = "\
日本a -> a本日
step 1: 0 <-> 2  a本日
                 ^  ^
done: a本日
";
        assert_eq!(render(&plan, OutputFormat::Text).expect("render failed"), expected);
    }

    #[test]
    fn text_marked_wide_character() {
        let plan = plan("日ab", "b日a").expect("plan failed");
        let expected = "\
日ab -> b日a
step 1: 0 <-> 2  ba日
                 ^ ^
step 2: 1 <-> 2  b日a
                  ^ ^
done: b日a
";
        assert_eq!(render(&plan, OutputFormat::Text).expect("render failed"), expected);
    }

    #[test]
    fn text_zero_width_characters() {
        let plan = plan("a\u{301}b", "ba\u{301}").expect("plan failed");
        let expected = "\
a\u{301}b -> ba\u{301}
step 1: 0 <-> 2  b\u{301}a
                 ^^
step 2: 1 <-> 2  ba\u{301}
                  ^
done: ba\u{301}
";
        assert_eq!(render(&plan, OutputFormat::Text).expect("render failed"), expected);
    }

    #[test]
    fn json() {
        let plan = plan("ab", "ba").expect("plan failed");
        let rendered = render(&plan, OutputFormat::Json).expect("render failed");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("invalid json");
        let expected = serde_json::json!({
            "start": "ab",
            "end": "ba",
            "events": [
                { "swap": { "jump": 0, "duck": 1 }, "resulting": "ba" },
                { "swap": null, "resulting": "ba" },
            ],
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::from_str("json").expect("parse failed"), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
