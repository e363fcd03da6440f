//! Destination routing: (sender, mode) -> ledger + asset-storage targets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::session::SessionMode;

/// The fixed sets of known sender identities, loaded from config at startup.
#[derive(Debug, Clone)]
pub struct Directory {
    admins: HashSet<String>,
    restricted: HashSet<String>,
    rental_authorized: String,
}

impl Directory {
    pub fn new(admins: Vec<String>, restricted: Vec<String>, rental_authorized: String) -> Self {
        Self {
            admins: admins.into_iter().collect(),
            restricted: restricted.into_iter().collect(),
            rental_authorized,
        }
    }

    pub fn is_admin(&self, sender: &str) -> bool {
        self.admins.contains(sender)
    }

    /// Members of the restricted group are hard-routed regardless of mode.
    pub fn is_restricted(&self, sender: &str) -> bool {
        self.restricted.contains(sender)
    }

    /// The single identity allowed to produce rental receipt records.
    pub fn is_rental_authorized(&self, sender: &str) -> bool {
        self.rental_authorized == sender
    }

    pub fn admins(&self) -> impl Iterator<Item = &String> {
        self.admins.iter()
    }
}

/// Destination table for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerTarget {
    Personal,
    Partnership,
    Restricted,
    Rentals,
}

impl LedgerTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerTarget::Personal => "personal",
            LedgerTarget::Partnership => "partnership",
            LedgerTarget::Restricted => "restricted",
            LedgerTarget::Rentals => "rentals",
        }
    }
}

/// Destination folder for an uploaded attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetTarget {
    Expenses,
    Rentals,
}

/// Where a sender lands when they are neither restricted, admin, nor
/// rental-authorized. The original deployment dumped strangers into the
/// restricted ledger; some variants prefer the personal one, so it is a
/// config knob rather than a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultRoute {
    #[default]
    Restricted,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub ledger: LedgerTarget,
    pub assets: AssetTarget,
}

/// Pure decision function; first matching rule wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingPolicy {
    pub default_route: DefaultRoute,
}

impl RoutingPolicy {
    pub fn new(default_route: DefaultRoute) -> Self {
        Self { default_route }
    }

    pub fn route(&self, sender: &str, mode: SessionMode, directory: &Directory) -> Route {
        if directory.is_restricted(sender) {
            return Route {
                ledger: LedgerTarget::Restricted,
                assets: AssetTarget::Expenses,
            };
        }
        if directory.is_admin(sender) {
            return match mode {
                SessionMode::Personal => Route {
                    ledger: LedgerTarget::Personal,
                    assets: AssetTarget::Expenses,
                },
                SessionMode::Partnership => Route {
                    ledger: LedgerTarget::Partnership,
                    assets: AssetTarget::Expenses,
                },
                SessionMode::RentalIncome => Route {
                    ledger: LedgerTarget::Rentals,
                    assets: AssetTarget::Rentals,
                },
            };
        }
        let ledger = match self.default_route {
            DefaultRoute::Restricted => LedgerTarget::Restricted,
            DefaultRoute::Personal => LedgerTarget::Personal,
        };
        Route {
            ledger,
            assets: AssetTarget::Expenses,
        }
    }
}
