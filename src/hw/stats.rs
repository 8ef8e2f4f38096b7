//! Shell- and /proc-backed system statistics.
//!
//! Matches what the info screens show: hostname, first IP, CPU and
//! memory percentages, abbreviated uptime, load averages, kernel
//! release. Every field degrades to `None` on failure; gathering is
//! allowed to be slow but never fatal.

use std::fs;
use std::process::Command;

use crate::hal::{StatsSnapshot, SystemStats};
use crate::stats::{
    abbreviate_uptime, cpu_percent, parse_cpu_sample, parse_load, parse_mem_percent, CpuSample,
};

/// Stateful because CPU usage is a delta between successive /proc/stat
/// readings; the first snapshot has no CPU figure yet.
#[derive(Default)]
pub struct ShellStats {
    prev_cpu: Option<CpuSample>,
}

impl ShellStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn cpu(&mut self) -> Option<f32> {
        let sample = parse_cpu_sample(&fs::read_to_string("/proc/stat").ok()?)?;
        let prev = self.prev_cpu.replace(sample);
        cpu_percent(prev?, sample)
    }
}

impl SystemStats for ShellStats {
    fn snapshot(&mut self) -> StatsSnapshot {
        StatsSnapshot {
            hostname: command_output("hostname", &[]),
            ip: command_output("hostname", &["-I"])
                .and_then(|out| out.split_whitespace().next().map(str::to_string)),
            cpu_pct: self.cpu(),
            mem_pct: fs::read_to_string("/proc/meminfo")
                .ok()
                .as_deref()
                .and_then(parse_mem_percent),
            uptime_text: command_output("uptime", &["-p"]).map(|out| abbreviate_uptime(&out)),
            load_text: command_output("uptime", &[]).as_deref().and_then(parse_load),
            kernel_version: command_output("uname", &["-r"]),
        }
    }
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
