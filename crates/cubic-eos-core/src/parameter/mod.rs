//! Critical constants of pure substances and their JSON representation.
//!
//! Records are stored as a JSON array in which every entry combines the
//! identifiers of a substance with its critical data:
//!
//! ```json
//! [
//!     {
//!         "identifier": {"cas": "74-82-8", "name": "methane", "formula": "CH4"},
//!         "molarweight": 16.043,
//!         "tc": 190.564,
//!         "pc": 4599200.0,
//!         "acentric_factor": 0.011
//!     }
//! ]
//! ```
use crate::errors::{EosError, EosResult};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::ops::Deref;
use std::path::Path;

mod identifier;
pub use identifier::{Identifier, IdentifierOption};

/// Critical data of a pure substance.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct CriticalRecord {
    /// critical temperature in Kelvin
    pub tc: f64,
    /// critical pressure in Pascal
    pub pc: f64,
    /// acentric factor
    #[serde(default)]
    pub acentric_factor: f64,
}

impl CriticalRecord {
    pub fn new(tc: f64, pc: f64, acentric_factor: f64) -> Self {
        Self {
            tc,
            pc,
            acentric_factor,
        }
    }
}

impl fmt::Display for CriticalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CriticalRecord(tc={} K", self.tc)?;
        write!(f, ", pc={} Pa", self.pc)?;
        write!(f, ", acentric factor={})", self.acentric_factor)
    }
}

/// Critical data of a pure substance together with its identifiers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PureRecord {
    pub identifier: Identifier,
    #[serde(skip_serializing_if = "f64::is_zero")]
    #[serde(default)]
    pub molarweight: f64,
    #[serde(flatten)]
    pub model_record: CriticalRecord,
}

impl PureRecord {
    pub fn new(identifier: Identifier, molarweight: f64, model_record: CriticalRecord) -> Self {
        Self {
            identifier,
            molarweight,
            model_record,
        }
    }

    /// Read the records of the given substances from a json file.
    ///
    /// The records are returned in the order of `substances`.
    pub fn from_json<P, S>(
        substances: &[S],
        file: P,
        identifier_option: IdentifierOption,
    ) -> EosResult<Vec<Self>>
    where
        P: AsRef<Path>,
        S: Deref<Target = str>,
    {
        let file_records: Vec<Self> = serde_json::from_reader(BufReader::new(File::open(file)?))?;
        Self::from_records(substances, file_records, identifier_option)
    }

    /// Select the records of the given substances from a list of records.
    pub fn from_records<S>(
        substances: &[S],
        records: Vec<Self>,
        identifier_option: IdentifierOption,
    ) -> EosResult<Vec<Self>>
    where
        S: Deref<Target = str>,
    {
        let mut queried: HashSet<&str> = substances.iter().map(|s| s.deref()).collect();
        if queried.len() != substances.len() {
            return Err(EosError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        let mut found: HashMap<&str, Self> = HashMap::with_capacity(substances.len());
        for record in records {
            if let Some(id) = record.identifier.as_str(identifier_option) {
                if let Some(id) = queried.take(id) {
                    found.insert(id, record);
                }
            }
            if queried.is_empty() {
                break;
            }
        }

        if !queried.is_empty() {
            let mut missing: Vec<_> = queried.into_iter().collect();
            missing.sort_unstable();
            return Err(EosError::ComponentsNotFound(missing.join(", ")));
        }

        Ok(substances
            .iter()
            .filter_map(|s| found.remove(s.deref()))
            .collect())
    }
}

impl fmt::Display for PureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PureRecord({}", self.identifier)?;
        if !self.molarweight.is_zero() {
            write!(f, ", molarweight={} g/mol", self.molarweight)?;
        }
        write!(f, ", {})", self.model_record)
    }
}
