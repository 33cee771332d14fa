use cosmwasm_schema::cw_serde;

#[cw_serde]
#[derive(Copy)]
pub enum Resolution {
    /// Voting is open or has closed but nobody has resolved the
    /// proposal yet.
    Unresolved,
    /// The proposal reached quorum and a strict yes majority. Its
    /// action was executed as part of resolution.
    Passed,
    /// The proposal missed quorum or did not get a strict yes
    /// majority.
    NotPassed,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Unresolved => write!(f, "unresolved"),
            Resolution::Passed => write!(f, "passed"),
            Resolution::NotPassed => write!(f, "not_passed"),
        }
    }
}
