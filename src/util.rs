/// Countdown clock face, zero padded on both sides: `MM:SS`
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Summary duration, minutes unpadded: `M:SS`
pub fn format_total(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
