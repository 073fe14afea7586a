// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculator configuration.
//!
//! With the `serde` feature a [`CalculatorConfig`] can be read from any serde
//! format.  The method is either a built-in key or an inline parameter set:
//!
//! ```json
//! { "method": "hanafi", "clock_format": "12h" }
//! { "method": { "name": "Local", "asr_factor": 1.0, "fajr_angle": 15.0, "isha_angle": 15.0 } }
//! ```

use std::sync::Arc;

use crate::error::MethodError;
use crate::format::ClockFormat;
use crate::method::{CalculationMethod, CustomMethod, MethodKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calculation method selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MethodConfig {
    /// Key of a built-in method, matched case-insensitively.
    Named(String),
    /// Caller-supplied parameters, validated by [`CustomMethod::new`].
    Custom {
        name: String,
        asr_factor: f64,
        fajr_angle: f64,
        isha_angle: f64,
    },
}

impl MethodConfig {
    pub fn resolve(&self) -> Result<Arc<dyn CalculationMethod>, MethodError> {
        match self {
            MethodConfig::Named(key) => Ok(key.parse::<MethodKind>()?.shared()),
            MethodConfig::Custom {
                name,
                asr_factor,
                fajr_angle,
                isha_angle,
            } => Ok(Arc::new(CustomMethod::new(
                name.clone(),
                *asr_factor,
                *fajr_angle,
                *isha_angle,
            )?)),
        }
    }
}

impl Default for MethodConfig {
    fn default() -> Self {
        MethodConfig::Named(MethodKind::Standard.key().to_owned())
    }
}

impl From<MethodKind> for MethodConfig {
    fn from(kind: MethodKind) -> Self {
        MethodConfig::Named(kind.key().to_owned())
    }
}

/// Settings of a [`PrayerCalculator`](crate::PrayerCalculator).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    pub method: MethodConfig,
    pub clock_format: ClockFormat,
}
