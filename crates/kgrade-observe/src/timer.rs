use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 timestamps in UTC.
///
/// Cluster log collectors stamp their own local time; the server always logs UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcRfc3339;

impl FormatTime for UtcRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => write!(w, "{} ", ts),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rfc3339_utc_followed_by_space() {
        let mut out = String::new();
        UtcRfc3339.format_time(&mut Writer::new(&mut out)).unwrap();

        assert!(out.ends_with(' '));
        let ts = out.trim_end();
        assert!(ts.ends_with('Z'), "expected UTC suffix in {ts}");
        assert!(OffsetDateTime::parse(ts, &Rfc3339).is_ok());
    }
}
