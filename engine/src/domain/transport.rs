//! Parsing of raw transport descriptor strings.
//!
//! Transport legs arrive as display strings of the form
//! `KTX | 서울역 → 부산역 | 0630 → 0930 | 59800원`
//! (mode, endpoints, departure/arrival clock, cost). The two queries here
//! are deliberately independent: display parsing and cost parsing are
//! invoked by different callers at different times. Both degrade instead of
//! failing — display parsing falls back to the original string, cost
//! parsing falls back to 0 — so any input, including a missing one,
//! produces a usable value.

/// Mode and time window extracted from a leg descriptor for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportInfo {
    pub mode: String,
    /// `"06:30 - 09:30"`, or empty when the descriptor carries no clock pair.
    pub time: String,
}

/// Split a descriptor into mode and formatted time window.
///
/// Descriptors with fewer than three `|` segments, or whose time segment has
/// no `→`-separated clock pair, come back unsplit in `mode` with an empty
/// `time`.
pub fn parse_info(raw: Option<&str>) -> TransportInfo {
    let Some(raw) = raw else {
        return TransportInfo::default();
    };
    let segments: Vec<&str> = raw.split('|').map(str::trim).collect();
    if segments.len() >= 3 {
        if let Some((departure, arrival)) = split_clock_pair(segments[2]) {
            return TransportInfo {
                mode: segments[0].to_string(),
                time: format!("{} - {}", format_hhmm(departure), format_hhmm(arrival)),
            };
        }
    }
    TransportInfo {
        mode: raw.to_string(),
        time: String::new(),
    }
}

/// Extract the integer cost from the fourth segment; 0 when the segment is
/// absent or unparseable. A trailing `원` currency marker is stripped first.
/// A negative integer passes through untouched.
pub fn parse_cost(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let segments: Vec<&str> = raw.split('|').map(str::trim).collect();
    if segments.len() < 4 {
        return 0;
    }
    let cost = segments[3].strip_suffix('원').unwrap_or(segments[3]).trim();
    cost.parse().unwrap_or(0)
}

fn split_clock_pair(segment: &str) -> Option<(&str, &str)> {
    let (departure, arrival) = segment.split_once('→')?;
    let departure = departure.trim();
    let arrival = arrival.trim();
    if departure.is_empty() || arrival.is_empty() {
        return None;
    }
    Some((departure, arrival))
}

/// Reformat a 4-digit 24h clock token (`0630`) as `06:30`. Tokens of any
/// other shape pass through unchanged.
fn format_hhmm(token: &str) -> String {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &token[..2], &token[2..])
    } else {
        token.to_string()
    }
}
