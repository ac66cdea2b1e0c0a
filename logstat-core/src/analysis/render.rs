use crate::analysis::report::AnalysisReport;
use owo_colors::OwoColorize;

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Human-readable summary of a report, for terminals.
pub fn render_report(report: &AnalysisReport, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&heading("Access Log Report", color));
    out.push_str(&format!(
        "\n=================\n\
         requests: {} | processed: {} | dropped: {} | error rate: {:.2}%\n\n",
        report.total_requests,
        report.processed_requests,
        report.dropped_requests,
        report.error_rate_percentage
    ));

    let (mut ok, mut redirect, mut client, mut server) = (0u64, 0u64, 0u64, 0u64);
    for (status, count) in &report.status_code_distribution {
        match status {
            200..=299 => ok += count,
            300..=399 => redirect += count,
            400..=499 => client += count,
            500..=599 => server += count,
            _ => {}
        }
    }
    out.push_str(&format!(
        "Status: 2xx={ok} 3xx={redirect} 4xx={client} 5xx={server}\n"
    ));

    if !report.status_code_distribution.is_empty() {
        out.push_str("Codes: ");
        for (status, count) in &report.status_code_distribution {
            out.push_str(&format!("{status}={count} "));
        }
        out.push('\n');
    }

    if !report.method_distribution.is_empty() {
        out.push_str("Methods: ");
        for (method, count) in &report.method_distribution {
            out.push_str(&format!("{method}={count} "));
        }
        out.push('\n');
    }
    out.push('\n');

    if !report.top_endpoints.is_empty() {
        out.push_str(&heading("Top endpoints:", color));
        out.push('\n');
        for endpoint in &report.top_endpoints {
            let methods: Vec<String> = endpoint
                .methods
                .iter()
                .map(|(m, c)| format!("{m}={c}"))
                .collect();
            out.push_str(&format!(
                "  {:<32} {:>6}  ({})\n",
                endpoint.path,
                endpoint.count,
                methods.join(" ")
            ));
        }
        out.push('\n');
    }

    if !report.top_errors.is_empty() {
        out.push_str(&heading("Top errors:", color));
        out.push('\n');
        for error in &report.top_errors {
            out.push_str(&format!("  {:>6}  {}\n", error.count, error.message));
        }
        out.push('\n');
    }

    let stats = &report.response_time_stats;
    if !stats.available {
        out.push_str("Latency: <no samples>\n");
        return out;
    }

    out.push_str(&format!(
        "Latency mean {:.2}ms | p50 {:.2}ms | p95 {:.2}ms | p99 {:.2}ms | min {:.2}ms | max {:.2}ms\n\n",
        stats.mean_ms, stats.p50_ms, stats.p95_ms, stats.p99_ms, stats.min_ms, stats.max_ms
    ));

    for bucket in &stats.histogram {
        let pct = (bucket.count as f64 / stats.sample_count as f64) * 100.0;
        let bars = if bucket.count > 0 {
            ((pct / 5.0).floor() as usize).max(1)
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<12} {:<20} {:>5.1}%\n",
            bucket.label,
            "█".repeat(bars),
            pct
        ));
    }

    out
}
