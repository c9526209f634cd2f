use serde::Serialize;

use super::color::Rgb;

/// Trade the report is white-labelled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trade {
    #[default]
    Electrical,
    Hvac,
    Plumbing,
    Flooring,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TradeBranding {
    pub name: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
}

impl Trade {
    pub const ALL: [Trade; 4] = [Trade::Electrical, Trade::Hvac, Trade::Plumbing, Trade::Flooring];

    /// Resolve a submitted trade name. Unknown or empty names fall back to
    /// [`Trade::Electrical`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "hvac" => Trade::Hvac,
            "plumbing" => Trade::Plumbing,
            "flooring" => Trade::Flooring,
            _ => Trade::Electrical,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Trade::Electrical => "electrical",
            Trade::Hvac => "hvac",
            Trade::Plumbing => "plumbing",
            Trade::Flooring => "flooring",
        }
    }

    pub fn branding(self) -> TradeBranding {
        match self {
            Trade::Electrical => TradeBranding {
                name: "Electrical",
                primary: Rgb::hex(0x0066CC),
                secondary: Rgb::hex(0x003366),
                accent: Rgb::hex(0xFF9800),
            },
            Trade::Hvac => TradeBranding {
                name: "HVAC",
                primary: Rgb::hex(0xFF6B00),
                secondary: Rgb::hex(0xCC5500),
                accent: Rgb::hex(0xFFB84D),
            },
            Trade::Plumbing => TradeBranding {
                name: "Plumbing",
                primary: Rgb::hex(0x2196F3),
                secondary: Rgb::hex(0x1565C0),
                accent: Rgb::hex(0x64B5F6),
            },
            Trade::Flooring => TradeBranding {
                name: "Flooring",
                primary: Rgb::hex(0x8B4513),
                secondary: Rgb::hex(0x654321),
                accent: Rgb::hex(0xCD853F),
            },
        }
    }
}

/// Names printed in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    pub trade: Trade,
    pub project_name: String,
    pub company_name: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            trade: Trade::Electrical,
            project_name: "Project".to_string(),
            company_name: "AMPED".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_names_are_case_insensitive() {
        assert_eq!(Trade::from_name("HVAC"), Trade::Hvac);
        assert_eq!(Trade::from_name(" Plumbing "), Trade::Plumbing);
    }

    #[test]
    fn unknown_trade_defaults_to_electrical() {
        assert_eq!(Trade::from_name("roofing"), Trade::Electrical);
        assert_eq!(Trade::from_name(""), Trade::Electrical);
    }

    #[test]
    fn keys_round_trip_through_from_name() {
        for trade in Trade::ALL {
            assert_eq!(Trade::from_name(trade.key()), trade);
        }
    }
}
