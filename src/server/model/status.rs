/// Decision state of a recruitment application or competition registration.
///
/// Persisted as lowercase strings. Only `Pending` rows can transition; `Accepted` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceStatus {
    Pending,
    Accepted,
    Rejected,
}

impl AcceptanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a persisted status, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for AcceptanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a decision on a pending application or registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Status a pending row moves to when this decision is applied.
    pub fn status(&self) -> AcceptanceStatus {
        match self {
            Self::Accept => AcceptanceStatus::Accepted,
            Self::Reject => AcceptanceStatus::Rejected,
        }
    }
}
