//! Static department directory.
//!
//! The department taxonomy is fixed at compile time and the directory is
//! loaded once per process; nothing here is mutated at runtime. The registry
//! is what classification results are routed against and what the
//! presentation layer reads to render routing cards.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational unit eligible to receive a classified document.
///
/// Serialized as its lowercase ID (`"operations"`, `"maintenance"`, ...),
/// matching the wire format of the reasoning service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Operations,
    Maintenance,
    Safety,
    Finance,
    It,
}

impl Department {
    /// All departments, in directory order.
    pub const ALL: [Department; 5] = [
        Department::Operations,
        Department::Maintenance,
        Department::Safety,
        Department::Finance,
        Department::It,
    ];

    /// The department documents are routed to when the reasoning service
    /// returns an absent or unrecognized department.
    pub const fn fallback() -> Self {
        Department::Operations
    }

    /// Stable lowercase identifier used on the wire and as registry key.
    pub const fn id(self) -> &'static str {
        match self {
            Department::Operations => "operations",
            Department::Maintenance => "maintenance",
            Department::Safety => "safety",
            Department::Finance => "finance",
            Department::It => "it",
        }
    }

    /// Parse an ID, tolerating surrounding whitespace and case. Unknown IDs
    /// are data, not errors: the caller decides whether to fall back.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "operations" => Some(Department::Operations),
            "maintenance" => Some(Department::Maintenance),
            "safety" => Some(Department::Safety),
            "finance" => Some(Department::Finance),
            "it" => Some(Department::It),
            _ => None,
        }
    }

    /// Directory entry for this department.
    pub fn info(self) -> &'static DepartmentInfo {
        &DEPARTMENTS[&self]
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Directory record for a department.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentInfo {
    pub display_name: &'static str,
    pub manager: &'static str,
    pub contact_email: &'static str,
    pub theme_color: &'static str,
}

/// Process-wide department directory, loaded once and never mutated.
pub static DEPARTMENTS: Lazy<IndexMap<Department, DepartmentInfo>> = Lazy::new(|| {
    IndexMap::from([
        (
            Department::Operations,
            DepartmentInfo {
                display_name: "Operations",
                manager: "Rajesh Kumar",
                contact_email: "operations@example.com",
                theme_color: "#FF6B6B",
            },
        ),
        (
            Department::Maintenance,
            DepartmentInfo {
                display_name: "Maintenance",
                manager: "Priya Sharma",
                contact_email: "maintenance@example.com",
                theme_color: "#4ECDC4",
            },
        ),
        (
            Department::Safety,
            DepartmentInfo {
                display_name: "Safety",
                manager: "Amit Patel",
                contact_email: "safety@example.com",
                theme_color: "#45B7D1",
            },
        ),
        (
            Department::Finance,
            DepartmentInfo {
                display_name: "Finance",
                manager: "Anjali Nair",
                contact_email: "finance@example.com",
                theme_color: "#96CEB4",
            },
        ),
        (
            Department::It,
            DepartmentInfo {
                display_name: "IT",
                manager: "Sanjay Menon",
                contact_email: "it.support@example.com",
                theme_color: "#FFEAA7",
            },
        ),
    ])
});
