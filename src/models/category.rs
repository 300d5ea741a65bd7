#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Villa,
    Personal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Villa => "Villa",
            Self::Personal => "Personal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "villa" => Some(Self::Villa),
            "personal" => Some(Self::Personal),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[Self::Villa, Self::Personal]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
