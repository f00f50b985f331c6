//! Hardware scoring.
//!
//! Weights: memory 35, CPU cores 25, display 25, OS version 15. The tier
//! thresholds sit at 70 (high) and 40 (mid).

use crate::model::{DeviceTier, DisplayMetrics};

const HIGH_TIER_THRESHOLD: u32 = 70;
const MID_TIER_THRESHOLD: u32 = 40;

/// Total hardware score for the collected details.
pub(crate) fn hardware_score(
    total_memory_gb: f64,
    cpu_cores: u32,
    display: Option<&DisplayMetrics>,
    os: &str,
    os_version: &str,
) -> u32 {
    memory_score(total_memory_gb)
        + cpu_score(cpu_cores)
        + display_score(display)
        + os_score(os, os_version)
}

pub(crate) fn tier_for_score(score: u32) -> DeviceTier {
    if score >= HIGH_TIER_THRESHOLD {
        DeviceTier::High
    } else if score >= MID_TIER_THRESHOLD {
        DeviceTier::Mid
    } else {
        DeviceTier::Low
    }
}

fn memory_score(total_gb: f64) -> u32 {
    if total_gb >= 12.0 {
        35
    } else if total_gb >= 8.0 {
        30
    } else if total_gb >= 6.0 {
        23
    } else if total_gb >= 4.0 {
        16
    } else if total_gb >= 3.0 {
        10
    } else if total_gb >= 2.0 {
        5
    } else {
        0
    }
}

fn cpu_score(cores: u32) -> u32 {
    if cores >= 8 {
        25
    } else if cores >= 6 {
        18
    } else if cores >= 4 {
        10
    } else {
        3
    }
}

fn display_score(display: Option<&DisplayMetrics>) -> u32 {
    // No display, no points: headless hosts score on memory, CPU and OS only
    let Some(display) = display else { return 0 };

    let density_score = if display.pixel_density >= 3.0 {
        13
    } else if display.pixel_density >= 2.0 {
        8
    } else {
        4
    };

    let size_score = if display.screen_size_inches >= 6.5 || display.is_tablet {
        12
    } else if display.screen_size_inches >= 6.0 {
        8
    } else {
        4
    };

    density_score + size_score
}

fn os_score(os: &str, version: &str) -> u32 {
    match os {
        "android" => match leading_integer(version) {
            Some(v) if v >= 14 => 15,
            Some(v) if v >= 13 => 12,
            Some(v) if v >= 11 => 8,
            Some(v) if v >= 9 => 4,
            _ => 0,
        },
        "ios" => match leading_float(version) {
            Some(v) if v >= 17.0 => 15,
            Some(v) if v >= 16.0 => 12,
            Some(v) if v >= 14.0 => 8,
            Some(v) if v >= 12.0 => 4,
            _ => 0,
        },
        _ => 0,
    }
}

/// Leading integer of a version string ("14.1" -> 14).
fn leading_integer(version: &str) -> Option<u32> {
    let digits: String = version.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Leading major.minor of a version string ("17.5.1" -> 17.5).
fn leading_float(version: &str) -> Option<f64> {
    let numeric: String = version
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = numeric.split('.');
    let major = parts.next().filter(|part| !part.is_empty())?;
    match parts.next() {
        Some(minor) if !minor.is_empty() => format!("{major}.{minor}").parse().ok(),
        _ => major.parse().ok(),
    }
}
