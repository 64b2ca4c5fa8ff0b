use crate::collector::{LineTally, OwnershipMap};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// One directory attributed to one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRecord {
    pub path: String,
    pub lines_of_code: u64,
}

/// Owner -> package records, serialized with owners in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    owners: BTreeMap<String, Vec<PackageRecord>>,
}

impl Report {
    /// Join owners with the tally. Every directory listing an owner yields one
    /// record for that owner; directories without source files report zero.
    pub fn build(tally: &LineTally, owners: &OwnershipMap) -> Self {
        let owners = owners
            .iter()
            .map(|(owner, dirs)| {
                let packages = dirs
                    .iter()
                    .map(|dir| PackageRecord {
                        path: dir.clone(),
                        lines_of_code: tally.lines_in(dir),
                    })
                    .collect();
                (owner.to_string(), packages)
            })
            .collect();
        Self { owners }
    }

    pub fn packages(&self, owner: &str) -> Option<&[PackageRecord]> {
        self.owners.get(owner).map(Vec::as_slice)
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Four-space indented JSON document.
    ///
    /// # Errors
    /// Returns [`crate::error::EngineError::Json`] if serialization fails.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}
