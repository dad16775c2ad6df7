use dealwatch::infrastructure::config::scan::ScanConfig;

/// Scan settings with no pause between stores and short timeouts.
pub fn fast_scan_config() -> ScanConfig {
    ScanConfig {
        sweep_delay_ms: 0,
        check_timeout_secs: 2,
        sweep_timeout_secs: 2,
        ..ScanConfig::default()
    }
}
