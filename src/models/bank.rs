/// The account whose deposits feed the savings series on the growth chart.
pub const SAVINGS_BANK: Bank = Bank::Boc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Commercial,
    Dfcc,
    Sampath,
    Boc,
}

impl Bank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "Commercial Bank",
            Self::Dfcc => "DFCC Bank",
            Self::Sampath => "Sampath Bank",
            Self::Boc => "BOC",
        }
    }

    /// Parse a bank label. Unknown names return `None` so downstream
    /// calculations can ignore them instead of guessing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "commercial bank" | "commercial" => Some(Self::Commercial),
            "dfcc bank" | "dfcc" => Some(Self::Dfcc),
            "sampath bank" | "sampath" => Some(Self::Sampath),
            "boc" => Some(Self::Boc),
            _ => None,
        }
    }

    pub fn all() -> &'static [Bank] {
        &[Self::Commercial, Self::Dfcc, Self::Sampath, Self::Boc]
    }
}

impl std::fmt::Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
