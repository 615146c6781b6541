use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::{ParrotError, Result};

/// Unloaded flight speed shared by every variant.
pub const BASE_SPEED: f64 = 12.0;

/// Speed lost per coconut carried by an African parrot.
pub const LOAD_FACTOR: f64 = 9.0;

/// Top speed of an unnailed Norwegian Blue.
pub const MAX_SPEED: f64 = 24.0;

/// A parrot, tagged by species.
///
/// Fields are fixed at construction; there is no way to mutate a parrot
/// after the fact, only to build a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Parrot {
    European,
    African {
        #[serde(default)]
        number_of_coconuts: u32,
    },
    NorwegianBlue {
        voltage: f64,
        #[serde(default)]
        is_nailed: bool,
    },
}

/// The species of a [`Parrot`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    European,
    African,
    NorwegianBlue,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::European => "European",
            Variant::African => "African",
            Variant::NorwegianBlue => "Norwegian Blue",
        };
        f.write_str(name)
    }
}

impl Parrot {
    pub const fn european() -> Self {
        Parrot::European
    }

    pub const fn african(number_of_coconuts: u32) -> Self {
        Parrot::African { number_of_coconuts }
    }

    pub const fn norwegian_blue(voltage: f64, is_nailed: bool) -> Self {
        Parrot::NorwegianBlue { voltage, is_nailed }
    }

    pub const fn variant(&self) -> Variant {
        match self {
            Parrot::European => Variant::European,
            Parrot::African { .. } => Variant::African,
            Parrot::NorwegianBlue { .. } => Variant::NorwegianBlue,
        }
    }

    /// See [`speed`].
    pub fn speed(&self) -> f64 {
        speed(self)
    }

    /// See [`cry`].
    pub fn cry(&self) -> &'static str {
        cry(self)
    }

    /// Reject a Norwegian Blue whose voltage is negative or not a number.
    ///
    /// The constructors accept any value and [`speed`] stays computable for
    /// it; this check is applied when a flock is loaded from a file.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Parrot::NorwegianBlue { voltage, .. } if !voltage.is_finite() => Err(
                ParrotError::Validation(format!("voltage must be finite, got {voltage}")),
            ),
            Parrot::NorwegianBlue { voltage, .. } if voltage < 0.0 => Err(
                ParrotError::Validation(format!("voltage must not be negative, got {voltage}")),
            ),
            _ => Ok(()),
        }
    }
}

impl Display for Parrot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} parrot: speed={}, cry={}",
            self.variant(),
            self.speed(),
            self.cry()
        )
    }
}

/// Flight speed of a parrot.
pub fn speed(parrot: &Parrot) -> f64 {
    match *parrot {
        Parrot::European => BASE_SPEED,
        Parrot::African { number_of_coconuts } => {
            (BASE_SPEED - LOAD_FACTOR * f64::from(number_of_coconuts)).max(0.0)
        }
        Parrot::NorwegianBlue { is_nailed: true, .. } => 0.0,
        Parrot::NorwegianBlue { voltage, .. } => {
            // NaN voltage propagates to a NaN speed.
            let charged = voltage * BASE_SPEED;
            if charged > MAX_SPEED {
                MAX_SPEED
            } else {
                charged
            }
        }
    }
}

/// The sound a parrot makes.
pub fn cry(parrot: &Parrot) -> &'static str {
    match *parrot {
        Parrot::European => "Sqoork!",
        Parrot::African { .. } => "Sqaark!",
        Parrot::NorwegianBlue { voltage, .. } if voltage > 0.0 => "Bzzzzzz",
        Parrot::NorwegianBlue { .. } => "...",
    }
}
