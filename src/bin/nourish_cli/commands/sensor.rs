// ABOUTME: Heart-rate command for nourish-cli
// ABOUTME: Decodes a captured measurement payload or reports the fallback reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

use nourish::errors::{AppError, AppResult};
use nourish::sensors::{HeartRateMonitor, StaticHeartRateSource};

use super::Context;
use crate::helpers::display::display_heart_rate;

const MANUAL_DEVICE_NAME: &str = "Captured payload";
const MANUAL_DEVICE_ADDRESS: &str = "manual";

/// Read the resting heart rate
pub async fn heart_rate(ctx: &Context, payload: Option<&str>) -> AppResult<()> {
    let source = match payload {
        Some(hex) => StaticHeartRateSource::empty().with_device(
            MANUAL_DEVICE_NAME,
            MANUAL_DEVICE_ADDRESS,
            parse_hex_payload(hex)?,
        ),
        None => StaticHeartRateSource::empty(),
    };
    let monitor = HeartRateMonitor::new(source, ctx.app.heart_rate);
    let reading = monitor.read_first_available().await;
    ctx.emit(&reading, display_heart_rate)
}

fn parse_hex_payload(hex: &str) -> AppResult<Vec<u8>> {
    let digits: String = hex
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.is_empty() || digits.len() % 2 != 0 {
        return Err(AppError::invalid_input(
            "Payload must be an even number of hex digits",
        ));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| AppError::invalid_input(format!("Invalid hex payload: {e}")))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_payload_accepts_separators() {
        assert_eq!(parse_hex_payload("01 2c:01").unwrap(), vec![0x01, 0x2C, 0x01]);
        assert!(parse_hex_payload("0").is_err());
        assert!(parse_hex_payload("zz").is_err());
    }
}
