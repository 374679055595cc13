use dnslookup_application::ports::TraceEvent;
use dnslookup_domain::{LookupKey, ResourceRecord};
use std::fmt::Write;

/// Result lines for `key`: one per record, or a single sentinel line.
pub fn render_results(key: &LookupKey, records: &[ResourceRecord]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        let _ = writeln!(
            out,
            "{:<30} {:<5} {:<8} {}",
            key.host_name, key.record_type, -1, "0.0.0.0"
        );
    }
    for record in records {
        let _ = writeln!(
            out,
            "{:<30} {:<5} {:<8} {}",
            key.host_name, key.record_type, record.ttl, record.data
        );
    }
    out
}

pub fn render_trace(event: &TraceEvent) -> String {
    let mut out = String::new();
    match event {
        TraceEvent::QuerySent {
            id,
            host,
            record_type,
            server,
            ..
        } => {
            let _ = writeln!(
                out,
                "\n\nQuery ID     {} {}  {} --> {}",
                id, host, record_type, server
            );
        }
        TraceEvent::ResponseReceived {
            id,
            authoritative,
            answers,
            authority,
            additional,
        } => {
            let _ = writeln!(out, "Response ID: {} Authoritative = {}", id, authoritative);
            render_section(&mut out, "Answers", answers);
            render_section(&mut out, "Nameservers", authority);
            render_section(&mut out, "Additional Information", additional);
        }
        TraceEvent::IndirectionLimitReached { host, limit } => {
            let _ = writeln!(
                out,
                "Indirection limit ({}) reached while resolving {}",
                limit, host
            );
        }
    }
    out
}

fn render_section(out: &mut String, title: &str, records: &[ResourceRecord]) {
    let _ = writeln!(out, "  {} ({})", title, records.len());
    for record in records {
        let _ = writeln!(
            out,
            "       {:<30} {:<10} {:<4} {}",
            record.name, record.ttl, record.record_type, record.data
        );
    }
}
