//! Text parsing for the system statistics collaborator.
//!
//! The device build feeds these from /proc and shell output; keeping
//! the parsing pure keeps it testable on any host. Every function
//! returns `None` for input it cannot make sense of - stats failures
//! are rendered as absent fields, never propagated.

/// One /proc/stat CPU reading. Percentages come from the delta between
/// two readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuSample {
    pub idle: u64,
    pub total: u64,
}

/// Parse the aggregate `cpu` line of /proc/stat.
pub fn parse_cpu_sample(proc_stat: &str) -> Option<CpuSample> {
    let line = proc_stat
        .lines()
        .find(|l| l.starts_with("cpu ") || l.starts_with("cpu\t"))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map_while(|v| v.parse().ok())
        .collect();
    if fields.len() < 4 {
        return None;
    }
    // idle + iowait count as idle time when present.
    let idle = fields[3] + fields.get(4).copied().unwrap_or(0);
    Some(CpuSample {
        idle,
        total: fields.iter().sum(),
    })
}

/// CPU usage percentage over the interval between two samples.
pub fn cpu_percent(prev: CpuSample, curr: CpuSample) -> Option<f32> {
    let total = curr.total.checked_sub(prev.total)?;
    let idle = curr.idle.checked_sub(prev.idle)?;
    if total == 0 {
        return None;
    }
    Some(100.0 * (total - idle) as f32 / total as f32)
}

/// Memory usage percentage from /proc/meminfo (MemTotal vs
/// MemAvailable).
pub fn parse_mem_percent(meminfo: &str) -> Option<f32> {
    let field = |name: &str| {
        meminfo
            .lines()
            .find(|l| l.starts_with(name))?
            .split_whitespace()
            .nth(1)?
            .parse::<u64>()
            .ok()
    };
    let total = field("MemTotal:")?;
    let available = field("MemAvailable:")?;
    if total == 0 {
        return None;
    }
    Some(100.0 * (total.saturating_sub(available)) as f32 / total as f32)
}

/// Compress `uptime -p` output ("up 3 days, 2 hours, 5 minutes") into
/// the short form shown on the 21-character display ("3d 2h 5m").
pub fn abbreviate_uptime(uptime_p: &str) -> String {
    let mut text = uptime_p.trim().to_string();
    for (long, short) in [
        ("up ", ""),
        (" weeks,", "w"),
        (" week,", "w"),
        (" days,", "d"),
        (" day,", "d"),
        (" hours,", "h"),
        (" hour,", "h"),
        (" minutes", "m"),
        (" minute", "m"),
    ] {
        text = text.replace(long, short);
    }
    text.trim().to_string()
}

/// Extract the three load averages from full `uptime` output.
pub fn parse_load(uptime: &str) -> Option<String> {
    let (_, tail) = uptime.split_once("load average:")?;
    Some(tail.replace(',', " ").split_whitespace().collect::<Vec<_>>().join(" "))
}
