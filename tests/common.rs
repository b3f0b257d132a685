#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rworktime::WorkDurationCalculator;
use rworktime::core::clock::FixedClock;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, mi, 0).expect("valid time")
}

/// Calculator whose "now" is 10:00 on the given day
pub fn calculator_on(y: i32, m: u32, d: u32) -> WorkDurationCalculator<FixedClock> {
    WorkDurationCalculator::new(FixedClock::new(at(y, m, d, 10, 0)))
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp config file and return its path
pub fn config_with(name: &str, content: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, content).expect("write config");
    p
}
