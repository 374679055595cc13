use std::net::IpAddr;

/// Where the previous response said to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Referral {
    /// Glue address taken from the additional section.
    Address(IpAddr),
    /// Name server whose address still has to be looked up.
    NameServer(String),
}

/// Mutable state of one resolution. Nested name server lookups get their own
/// context so they never disturb the outer one.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    pub current_server: IpAddr,
    pub root_server: IpAddr,
    pub pending_referral: Option<Referral>,
}

impl ResolutionContext {
    pub fn new(root_server: IpAddr) -> Self {
        Self {
            current_server: root_server,
            root_server,
            pending_referral: None,
        }
    }

    pub fn reset_to_root(&mut self) {
        self.current_server = self.root_server;
    }

    pub fn take_referral(&mut self) -> Option<Referral> {
        self.pending_referral.take()
    }
}

/// Query rounds left for a top-level lookup, shared with its nested lookups.
#[derive(Debug)]
pub struct QueryBudget {
    remaining: u32,
}

impl QueryBudget {
    pub fn new(rounds: u32) -> Self {
        Self { remaining: rounds }
    }

    /// Spends one round; false once the budget is gone.
    pub fn try_spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
