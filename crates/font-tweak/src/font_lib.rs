//! Font lib edits

use std::str::FromStr;

use log::debug;
use norad::Plist;
use plist::Value;

use crate::{Error, Result};

/// A single `key=value` lib edit. A `None` value removes the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibAssignment {
    pub key: String,
    pub value: Option<String>,
}

impl LibAssignment {
    pub fn parse(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').ok_or_else(|| Error::InvalidAssignment(s.into()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidAssignment(s.into()));
        }
        let value = (!value.is_empty()).then(|| value.to_owned());
        Ok(Self { key: key.to_owned(), value })
    }
}

impl FromStr for LibAssignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Apply lib assignments in order. Values are stored as strings.
pub fn apply_lib(lib: &mut Plist, assignments: &[LibAssignment]) {
    for assignment in assignments {
        match &assignment.value {
            Some(value) => {
                debug!("lib {} = {value:?}", assignment.key);
                lib.insert(assignment.key.clone(), Value::String(value.clone()));
            }
            None => {
                if lib.remove(&assignment.key).is_some() {
                    debug!("lib {} removed", assignment.key);
                }
            }
        }
    }
}
