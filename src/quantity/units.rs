//! Static unit tables.
//!
//! Every unit system is a row in a fixed table: suffixes ordered from the
//! smallest to the largest magnitude, the divisor between neighbouring
//! suffixes, and whether a space separates number and suffix on display.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

#[derive(Debug, PartialEq)]
pub struct UnitSystem {
    pub name: &'static str,
    pub units: &'static [&'static str],
    pub divisor: f64,
    pub spaced: bool,
}

impl UnitSystem {
    /// Position of `unit` in the ascending suffix list.
    pub fn position(&self, unit: &str) -> Option<usize> {
        self.units.iter().position(|u| *u == unit)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.position(unit).is_some()
    }

    pub(crate) fn last_index(&self) -> usize {
        self.units.len() - 1
    }
}

static NUMERIC: UnitSystem = UnitSystem {
    name: "numeric",
    units: &["", "k", "m", "b"],
    divisor: 1000.0,
    spaced: false,
};

static PERCENTAGE: UnitSystem = UnitSystem {
    name: "percentage",
    units: &["%"],
    divisor: 1000.0,
    spaced: false,
};

static DECIMAL_BYTES: UnitSystem = UnitSystem {
    name: "decimalBytes",
    units: &["B", "KB", "MB", "GB", "TB", "PB", "EB"],
    divisor: 1000.0,
    spaced: true,
};

static DECIMAL_BYTES_WITHOUT_B: UnitSystem = UnitSystem {
    name: "decimalBytesWithoutB",
    units: &["", "k", "M", "G", "T", "P", "E"],
    divisor: 1000.0,
    spaced: true,
};

static BINARY_BYTES: UnitSystem = UnitSystem {
    name: "binaryBytes",
    units: &["B", "KiB", "MiB", "GiB", "TiB", "PiB"],
    divisor: 1024.0,
    spaced: true,
};

static BINARY_BYTES_WITHOUT_B: UnitSystem = UnitSystem {
    name: "binaryBytesWithoutB",
    units: &["i", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"],
    divisor: 1024.0,
    spaced: true,
};

static SI: UnitSystem = UnitSystem {
    name: "SI",
    units: &["", "k", "M", "G", "T", "P", "E"],
    divisor: 1000.0,
    spaced: false,
};

/// Used for names that match no table row.
pub static FALLBACK: UnitSystem = UnitSystem {
    name: "",
    units: &[""],
    divisor: 1000.0,
    spaced: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystemName {
    Numeric,
    Percentage,
    DecimalBytes,
    DecimalBytesWithoutB,
    BinaryBytes,
    BinaryBytesWithoutB,
    Si,
}

impl UnitSystemName {
    pub const ALL: [UnitSystemName; 7] = [
        UnitSystemName::Numeric,
        UnitSystemName::Percentage,
        UnitSystemName::DecimalBytes,
        UnitSystemName::DecimalBytesWithoutB,
        UnitSystemName::BinaryBytes,
        UnitSystemName::BinaryBytesWithoutB,
        UnitSystemName::Si,
    ];

    pub fn system(self) -> &'static UnitSystem {
        match self {
            UnitSystemName::Numeric => &NUMERIC,
            UnitSystemName::Percentage => &PERCENTAGE,
            UnitSystemName::DecimalBytes => &DECIMAL_BYTES,
            UnitSystemName::DecimalBytesWithoutB => &DECIMAL_BYTES_WITHOUT_B,
            UnitSystemName::BinaryBytes => &BINARY_BYTES,
            UnitSystemName::BinaryBytesWithoutB => &BINARY_BYTES_WITHOUT_B,
            UnitSystemName::Si => &SI,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.system().name
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }
}

impl fmt::Display for UnitSystemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystemName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown unit system: {}", s))
    }
}

impl From<UnitSystemName> for &'static UnitSystem {
    fn from(name: UnitSystemName) -> Self {
        name.system()
    }
}

/// Look up a unit system by its table name, degrading to [`FALLBACK`].
pub fn unit_system(name: &str) -> &'static UnitSystem {
    match UnitSystemName::from_name(name) {
        Some(n) => n.system(),
        None => {
            debug!("unknown unit system {:?}, using fallback", name);
            &FALLBACK
        }
    }
}
