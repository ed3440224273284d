use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Simple,
    Intersection,
    Between,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddressKind::Simple => "simple",
            AddressKind::Intersection => "intersection",
            AddressKind::Between => "between",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoorNumber {
    pub unit: Option<String>,
    pub value: String,
}

/// Extracted address components. `kind` is `None` for anything that could
/// not be read as an address, in which case every other field is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressData {
    pub kind: Option<AddressKind>,
    pub street_names: Vec<String>,
    pub door_number: Option<DoorNumber>,
    pub floor: Option<String>,
}

impl AddressData {
    pub(crate) fn unknown() -> Self {
        AddressData {
            kind: None,
            street_names: Vec::new(),
            door_number: None,
            floor: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind.is_none()
    }
}
