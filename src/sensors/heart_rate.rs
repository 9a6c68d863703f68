// ABOUTME: Heart-rate collaborator: sensor discovery, GATT payload parsing, and fallback reading
// ABOUTME: Transport sits behind an async trait so scoring never waits on a missing sensor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Heart-rate collaborator
//!
//! Payloads follow the Heart Rate Measurement characteristic
//! (`00002a37-0000-1000-8000-00805f9b34fb`): bit 0 of the flags byte selects an
//! 8-bit value at byte 1 or a little-endian 16-bit value at bytes 1..3.
//!
//! [`HeartRateMonitor::read_or_fallback`] never fails. When discovery times out,
//! the device cannot be reached, or the payload is unusable, the reading is the
//! configured fallback (70 bpm) and the failure is kept in `error`.

use crate::config::HeartRateConfig;
use async_trait::async_trait;
use nourish_core::constants::{heart_rate, service_names};
use nourish_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Device seen during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Advertised name, "Unknown" when the device has none
    pub name: String,
    /// Transport address
    pub address: String,
}

/// Whether the device could be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Connection established
    Connected,
    /// Device unreachable or never found
    Disconnected,
}

/// Where the reported rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSource {
    /// Measured by the sensor
    Sensor,
    /// Configured default
    Fallback,
}

/// Heart-rate reading with the context needed to explain it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateReading {
    /// Beats per minute
    pub bpm: u16,
    /// Address of the device read, if any
    pub device: Option<String>,
    /// Connection outcome
    pub status: ConnectionStatus,
    /// Measured or fallback
    pub source: ReadingSource,
    /// Failure captured along the way
    pub error: Option<String>,
}

/// Transport for heart-rate sensors
#[async_trait]
pub trait HeartRateSource: Send + Sync {
    /// Discover nearby sensors for at most `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot scan
    async fn scan(&self, timeout: Duration) -> AppResult<Vec<DiscoveredDevice>>;

    /// Read the current rate from a device; `Ok(None)` when connected but no usable value arrived
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be reached
    async fn read_heart_rate(&self, address: &str) -> AppResult<Option<u16>>;
}

/// Decode a Heart Rate Measurement payload
#[must_use]
pub fn parse_heart_rate_measurement(payload: &[u8]) -> Option<u16> {
    let flags = *payload.first()?;
    if flags & heart_rate::FLAG_VALUE_FORMAT_U16 == 0 {
        payload.get(1).map(|&bpm| u16::from(bpm))
    } else {
        let bytes = payload.get(1..3)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

/// Heart-rate access bounded by a timeout and backed by a fallback value
pub struct HeartRateMonitor<S> {
    source: S,
    config: HeartRateConfig,
}

impl<S: HeartRateSource> HeartRateMonitor<S> {
    /// Monitor over `source`
    #[must_use]
    pub const fn new(source: S, config: HeartRateConfig) -> Self {
        Self { source, config }
    }

    /// Discover sensors within the configured timeout
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` if discovery fails or does not finish in time
    pub async fn discover(&self) -> AppResult<Vec<DiscoveredDevice>> {
        let limit = self.config.discovery_timeout();
        match timeout(limit, self.source.scan(limit)).await {
            Ok(result) => {
                let devices = result?;
                debug!(count = devices.len(), "Heart-rate discovery finished");
                Ok(devices)
            }
            Err(_) => Err(AppError::external_service(
                service_names::HEART_RATE_SENSOR,
                format!("discovery timed out after {limit:?}"),
            )),
        }
    }

    /// Read a device, substituting the fallback rate on any failure
    pub async fn read_or_fallback(&self, address: &str) -> HeartRateReading {
        let limit = self.config.discovery_timeout();
        let outcome = match timeout(limit, self.source.read_heart_rate(address)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::external_service(
                service_names::HEART_RATE_SENSOR,
                format!("read from {address} timed out after {limit:?}"),
            )),
        };

        match outcome {
            Ok(Some(bpm)) if bpm > 0 => HeartRateReading {
                bpm,
                device: Some(address.to_owned()),
                status: ConnectionStatus::Connected,
                source: ReadingSource::Sensor,
                error: None,
            },
            Ok(_) => {
                debug!(address, "Sensor connected without a usable reading");
                self.fallback(Some(address), ConnectionStatus::Connected, None)
            }
            Err(e) => {
                warn!(address, error = %e, "Heart-rate read failed, using fallback");
                self.fallback(Some(address), ConnectionStatus::Disconnected, Some(e.to_string()))
            }
        }
    }

    /// Read the first discovered sensor, or fall back when none answers
    pub async fn read_first_available(&self) -> HeartRateReading {
        match self.discover().await {
            Ok(devices) => match devices.first() {
                Some(device) => self.read_or_fallback(&device.address).await,
                None => self.fallback(
                    None,
                    ConnectionStatus::Disconnected,
                    Some("no heart-rate sensor found".to_owned()),
                ),
            },
            Err(e) => {
                warn!(error = %e, "Heart-rate discovery failed, using fallback");
                self.fallback(None, ConnectionStatus::Disconnected, Some(e.to_string()))
            }
        }
    }

    fn fallback(
        &self,
        address: Option<&str>,
        status: ConnectionStatus,
        error: Option<String>,
    ) -> HeartRateReading {
        HeartRateReading {
            bpm: self.config.fallback_bpm,
            device: address.map(str::to_owned),
            status,
            source: ReadingSource::Fallback,
            error,
        }
    }
}

/// Fixed devices and payloads, for offline use and tests
#[derive(Debug, Clone, Default)]
pub struct StaticHeartRateSource {
    devices: Vec<DiscoveredDevice>,
    payloads: HashMap<String, Vec<u8>>,
    scan_delay: Option<Duration>,
}

impl StaticHeartRateSource {
    /// Source that finds nothing
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a device answering with a raw measurement payload
    #[must_use]
    pub fn with_device(mut self, name: &str, address: &str, payload: Vec<u8>) -> Self {
        self.devices.push(DiscoveredDevice {
            name: name.to_owned(),
            address: address.to_owned(),
        });
        self.payloads.insert(address.to_owned(), payload);
        self
    }

    /// Make every scan take `delay`
    #[must_use]
    pub fn with_scan_delay(mut self, delay: Duration) -> Self {
        self.scan_delay = Some(delay);
        self
    }
}

#[async_trait]
impl HeartRateSource for StaticHeartRateSource {
    async fn scan(&self, _timeout: Duration) -> AppResult<Vec<DiscoveredDevice>> {
        if let Some(delay) = self.scan_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.devices.clone())
    }

    async fn read_heart_rate(&self, address: &str) -> AppResult<Option<u16>> {
        self.payloads
            .get(address)
            .map(|payload| parse_heart_rate_measurement(payload))
            .ok_or_else(|| {
                AppError::external_service(
                    service_names::HEART_RATE_SENSOR,
                    format!("device {address} is not reachable"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eight_bit_value() {
        assert_eq!(parse_heart_rate_measurement(&[0x00, 72]), Some(72));
    }

    #[test]
    fn test_parse_sixteen_bit_value() {
        assert_eq!(parse_heart_rate_measurement(&[0x01, 0x2C, 0x01]), Some(300));
    }

    #[test]
    fn test_parse_short_payloads() {
        assert_eq!(parse_heart_rate_measurement(&[]), None);
        assert_eq!(parse_heart_rate_measurement(&[0x00]), None);
        assert_eq!(parse_heart_rate_measurement(&[0x01, 0x50]), None);
    }
}
