/*
A flock is an ordered list of parrots, stored as JSON or CBOR.

{ "parrots": [ { "variant": "african", "number_of_coconuts": 1 } ] }
*/

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ParrotError, Result};
use crate::parrot::Parrot;

/// An ordered list of parrots, the crate's configuration input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flock {
    #[serde(default)]
    pub parrots: Vec<Parrot>,
}

impl Flock {
    /// Wrap parrots in the given order. No validation is applied.
    pub fn new(parrots: Vec<Parrot>) -> Self {
        Self { parrots }
    }

    /// Build a flock of `len` parrots with randomly chosen variants and fields.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let parrots = (0..len)
            .map(|_| match rng.gen_range(0..3) {
                0 => Parrot::european(),
                1 => Parrot::african(rng.gen_range(0..4)),
                _ => Parrot::norwegian_blue(rng.gen_range(0.0..4.0), rng.gen_bool(0.5)),
            })
            .collect();
        Self { parrots }
    }

    /// Number of parrots in the flock.
    pub fn len(&self) -> usize {
        self.parrots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parrots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parrot> {
        self.parrots.iter()
    }

    /// The first parrot with the highest speed, if any.
    pub fn fastest(&self) -> Option<&Parrot> {
        self.parrots.iter().fold(None, |best, parrot| match best {
            Some(b) if b.speed() >= parrot.speed() => Some(b),
            _ => Some(parrot),
        })
    }

    /// Check every parrot, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        for (index, parrot) in self.parrots.iter().enumerate() {
            parrot.validate().map_err(|err| match err {
                ParrotError::Validation(reason) => {
                    warn!(index, %reason, "rejecting parrot in flock");
                    ParrotError::Validation(format!("parrot {index}: {reason}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Parse and validate a flock from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let flock: Flock = serde_json::from_str(data)?;
        flock.validate()?;
        debug!(parrots = flock.len(), "loaded flock from JSON");
        Ok(flock)
    }

    /// Pretty-printed JSON for this flock.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the flock to `path` as CBOR, creating or truncating the file.
    pub fn write_cbor(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_cbor::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!(parrots = self.len(), path = %path.display(), "wrote flock to CBOR");
        Ok(())
    }

    /// Read and validate a flock from a CBOR file.
    pub fn read_cbor(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let flock: Flock = serde_cbor::from_reader(reader)?;
        flock.validate()?;
        info!(parrots = flock.len(), path = %path.display(), "read flock from CBOR");
        Ok(flock)
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Parrot;
    type IntoIter = std::slice::Iter<'a, Parrot>;

    fn into_iter(self) -> Self::IntoIter {
        self.parrots.iter()
    }
}

impl FromIterator<Parrot> for Flock {
    fn from_iter<I: IntoIterator<Item = Parrot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
