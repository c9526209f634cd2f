use serde::Serialize;

use super::color::Rgb;

/// Placeholder drawn for a record that lacks one of its category's columns.
pub const MISSING_VALUE: &str = "N/A";

/// The three record categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Routes,
    Devices,
    Conduit,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Routes, Category::Devices, Category::Conduit];

    /// Submitted form field carrying this category's records.
    pub fn field_name(self) -> &'static str {
        self.layout().field
    }

    pub fn layout(self) -> &'static CategoryLayout {
        match self {
            Category::Routes => &CATEGORY_LAYOUTS[0],
            Category::Devices => &CATEGORY_LAYOUTS[1],
            Category::Conduit => &CATEGORY_LAYOUTS[2],
        }
    }
}

/// One table column: the record key it reads and the header it prints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

/// How a category is submitted and rendered.
#[derive(Debug, Serialize)]
pub struct CategoryLayout {
    pub category: Category,
    pub field: &'static str,
    pub title: &'static str,
    pub summary_label: &'static str,
    pub accent: Rgb,
    pub columns: &'static [Column],
    pub placeholder: &'static str,
}

pub static CATEGORY_LAYOUTS: [CategoryLayout; 3] = [
    CategoryLayout {
        category: Category::Routes,
        field: "routes",
        title: "Routes",
        summary_label: "Routes",
        accent: Rgb::hex(0x0066CC),
        columns: &[
            Column { key: "type", header: "Type" },
            Column { key: "length", header: "Length" },
            Column { key: "conduit", header: "Conduit" },
        ],
        placeholder: MISSING_VALUE,
    },
    CategoryLayout {
        category: Category::Devices,
        field: "devices",
        title: "Devices",
        summary_label: "Devices",
        accent: Rgb::hex(0xFF9800),
        columns: &[
            Column { key: "type", header: "Type" },
            Column { key: "quantity", header: "Quantity" },
            Column { key: "voltage", header: "Voltage" },
        ],
        placeholder: MISSING_VALUE,
    },
    CategoryLayout {
        category: Category::Conduit,
        field: "conduit",
        title: "Conduit Specifications",
        summary_label: "Conduit entries",
        accent: Rgb::hex(0x2E7D32),
        columns: &[
            Column { key: "size", header: "Size" },
            Column { key: "type", header: "Type" },
            Column { key: "length", header: "Length" },
        ],
        placeholder: MISSING_VALUE,
    },
];
