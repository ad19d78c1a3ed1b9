//! Output formatting for solver results

use aoc_solver::{DynSolver, FactoryInfo, SolveResult};
use chrono::TimeDelta;

/// `Part N: <answer>`
pub fn format_answer(part: u8, result: &SolveResult) -> String {
    format!("Part {part}: {}", result.answer)
}

/// Parse time and per-part solve times, one line
pub fn format_timings(solver: &dyn DynSolver, results: &[(u8, SolveResult)]) -> String {
    let mut line = format!(
        "{}/{:02} parse: {}",
        solver.year(),
        solver.day(),
        format_duration(solver.parse_duration())
    );
    for (part, result) in results {
        line.push_str(&format!(", part {part}: {}", format_duration(result.duration())));
    }
    line
}

/// `2020/03 [grid]`
pub fn format_info(info: &FactoryInfo) -> String {
    if info.tags.is_empty() {
        format!("{}/{:02}", info.year, info.day)
    } else {
        format!("{}/{:02} [{}]", info.year, info.day, info.tags.join(", "))
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
