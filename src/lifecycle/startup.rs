//! Startup orchestration helpers.
//!
//! # Responsibilities
//! - Make internal faults fatal (log, then exit)
//! - Report which relays are degraded by missing configuration

use crate::config::RelayConfig;
use crate::relay::RelayKind;

/// Turn any panic into a logged, process-terminating fault.
pub fn install_fatal_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());

        tracing::error!(location = %location, panic = %payload, "Fatal internal fault, terminating");
        std::process::exit(1);
    }));
}

/// Relays that will answer 500 because their flow ID or the base URL is unset.
pub fn unconfigured_relays(config: &RelayConfig) -> Vec<RelayKind> {
    if !has_base_url(config) {
        return RelayKind::ALL.to_vec();
    }
    RelayKind::ALL
        .into_iter()
        .filter(|kind| config.flows.flow_id(*kind).is_none())
        .collect()
}

fn has_base_url(config: &RelayConfig) -> bool {
    config
        .upstream
        .base_url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty())
}

/// Log a warning per degraded relay.
pub fn report_configuration(config: &RelayConfig) {
    if !has_base_url(config) {
        tracing::warn!("Upstream base URL not configured; every relay will answer 500");
    }
    for kind in unconfigured_relays(config) {
        tracing::warn!(route = %kind, "{} ID not configured; relay degraded", kind.label());
    }
}
