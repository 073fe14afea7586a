// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Juristic calculation methods.
//!
//! A method is the set of angle parameters that distinguishes one school's
//! prayer times from another's:
//!
//! | Method | Key | Asr factor | Fajr | Isha |
//! |--------|-----|-----------:|-----:|-----:|
//! | [`Standard`] (Shafi'i, Maliki, Hanbali) | `standard` | 1.0 | 18.0° | 17.0° |
//! | [`Hanafi`] | `hanafi` | 2.0 | 18.0° | 18.0° |
//!
//! Further schools are added by implementing [`CalculationMethod`], or at
//! runtime through [`CustomMethod`].

use crate::error::MethodError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Capability set of a calculation method.
pub trait CalculationMethod: fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Shadow-length multiplier defining Asr (1 for Standard, 2 for Hanafi).
    fn asr_factor(&self) -> f64;

    /// Sun depression below the horizon at Fajr, in degrees.
    fn fajr_angle(&self) -> f64;

    /// Sun depression below the horizon at Isha, in degrees.
    fn isha_angle(&self) -> f64;
}

/// Shafi'i, Maliki and Hanbali method.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Standard;

impl CalculationMethod for Standard {
    fn name(&self) -> &str {
        "Standard (Shafi'i, Maliki, Hanbali)"
    }

    fn asr_factor(&self) -> f64 {
        1.0
    }

    fn fajr_angle(&self) -> f64 {
        18.0
    }

    fn isha_angle(&self) -> f64 {
        17.0
    }
}

/// Hanafi method.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Hanafi;

impl CalculationMethod for Hanafi {
    fn name(&self) -> &str {
        "Hanafi"
    }

    fn asr_factor(&self) -> f64 {
        2.0
    }

    fn fajr_angle(&self) -> f64 {
        18.0
    }

    fn isha_angle(&self) -> f64 {
        18.0
    }
}

/// Method with caller-supplied parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMethod {
    name: String,
    asr_factor: f64,
    fajr_angle: f64,
    isha_angle: f64,
}

impl CustomMethod {
    /// Build a method, rejecting a non-positive asr factor and depression
    /// angles outside `(0, 90)` degrees.
    pub fn new(
        name: impl Into<String>,
        asr_factor: f64,
        fajr_angle: f64,
        isha_angle: f64,
    ) -> Result<Self, MethodError> {
        if !(asr_factor.is_finite() && asr_factor > 0.0) {
            return Err(MethodError::InvalidParameter {
                parameter: "asr factor",
                value: asr_factor,
            });
        }
        for (parameter, value) in [("fajr angle", fajr_angle), ("isha angle", isha_angle)] {
            if !(value > 0.0 && value < 90.0) {
                return Err(MethodError::InvalidParameter { parameter, value });
            }
        }
        Ok(Self {
            name: name.into(),
            asr_factor,
            fajr_angle,
            isha_angle,
        })
    }
}

impl CalculationMethod for CustomMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn asr_factor(&self) -> f64 {
        self.asr_factor
    }

    fn fajr_angle(&self) -> f64 {
        self.fajr_angle
    }

    fn isha_angle(&self) -> f64 {
        self.isha_angle
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Built-in registry
// ═══════════════════════════════════════════════════════════════════════════

static STANDARD: Standard = Standard;
static HANAFI: Hanafi = Hanafi;

/// Built-in methods, selectable by key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Standard,
    Hanafi,
}

impl MethodKind {
    /// Every built-in method, in registry order.
    pub const ALL: [MethodKind; 2] = [MethodKind::Standard, MethodKind::Hanafi];

    /// Lower-case lookup key.
    pub const fn key(self) -> &'static str {
        match self {
            MethodKind::Standard => "standard",
            MethodKind::Hanafi => "hanafi",
        }
    }

    /// The stateless method value.
    pub fn method(self) -> &'static dyn CalculationMethod {
        match self {
            MethodKind::Standard => &STANDARD,
            MethodKind::Hanafi => &HANAFI,
        }
    }

    /// The method as a shareable trait object.
    pub fn shared(self) -> Arc<dyn CalculationMethod> {
        match self {
            MethodKind::Standard => Arc::new(Standard),
            MethodKind::Hanafi => Arc::new(Hanafi),
        }
    }

    /// Comma-separated list of valid keys.
    pub fn choices() -> String {
        Self::ALL.map(MethodKind::key).join(", ")
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MethodKind {
    type Err = MethodError;

    /// Case-insensitive lookup by key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| MethodError::Unsupported {
                requested: s.to_owned(),
                choices: Self::choices(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_parameters() {
        assert_eq!(Standard.asr_factor(), 1.0);
        assert_eq!(Standard.fajr_angle(), 18.0);
        assert_eq!(Standard.isha_angle(), 17.0);
        assert_eq!(Hanafi.asr_factor(), 2.0);
        assert_eq!(Hanafi.fajr_angle(), 18.0);
        assert_eq!(Hanafi.isha_angle(), 18.0);
        assert_eq!(Hanafi.name(), "Hanafi");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!("Hanafi".parse::<MethodKind>(), Ok(MethodKind::Hanafi));
        assert_eq!(" STANDARD ".parse::<MethodKind>(), Ok(MethodKind::Standard));
        assert_eq!(MethodKind::Hanafi.method().isha_angle(), 18.0);
        assert_eq!(MethodKind::Standard.shared().name(), Standard.name());
    }

    #[test]
    fn unknown_key_lists_choices() {
        let err = "jafari".parse::<MethodKind>().unwrap_err();
        assert_eq!(
            err,
            MethodError::Unsupported {
                requested: "jafari".into(),
                choices: "standard, hanafi".into(),
            }
        );
    }

    #[test]
    fn custom_method_validates_parameters() {
        let isna = CustomMethod::new("ISNA", 1.0, 15.0, 15.0).unwrap();
        assert_eq!(isna.name(), "ISNA");
        assert_eq!(isna.fajr_angle(), 15.0);

        assert!(matches!(
            CustomMethod::new("bad", 0.0, 18.0, 17.0),
            Err(MethodError::InvalidParameter { parameter: "asr factor", .. })
        ));
        assert!(matches!(
            CustomMethod::new("bad", 1.0, 95.0, 17.0),
            Err(MethodError::InvalidParameter { parameter: "fajr angle", .. })
        ));
        assert!(CustomMethod::new("bad", 1.0, 18.0, f64::NAN).is_err());
    }
}
