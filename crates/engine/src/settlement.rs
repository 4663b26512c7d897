//! Equal-share settlement.
//!
//! [`settle`] turns a [`Ledger`] snapshot into the list of [`Transfer`]s that
//! brings every participant to the same per-person cost:
//!
//! 1. sum what each participant paid (participants are exact trimmed names);
//! 2. compute the equal share `total / participants`;
//! 3. split participants into debtors (paid less than the share) and creditors
//!    (paid more), keeping first-appearance order and ignoring anyone within
//!    [`EPSILON`] of the share;
//! 4. repeatedly match the *first* debtor with the *first* creditor for the
//!    smaller of the two outstanding amounts, dropping whoever is discharged.
//!
//! Matching is FIFO greedy: it never searches for the minimum number of
//! transfers, and the emitted order is part of the contract. At most
//! `debtors + creditors - 1` transfers are produced.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::{Ledger, Money};

/// Tolerance under which a net position or a remaining debt counts as zero.
pub const EPSILON: Money = Money::CENT;

/// A single payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    /// Exact amount; round with [`Money::round_cents`] for display.
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettlementResult {
    /// Empty ledger, or every participant already within [`EPSILON`] of the
    /// equal share.
    NoTransactionsNeeded { equal_share: Money },
    Plan {
        equal_share: Money,
        transfers: Vec<Transfer>,
    },
}

impl SettlementResult {
    #[must_use]
    pub fn equal_share(&self) -> Money {
        match self {
            Self::NoTransactionsNeeded { equal_share } | Self::Plan { equal_share, .. } => {
                *equal_share
            }
        }
    }

    /// Transfers to execute, empty when nothing is owed.
    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        match self {
            Self::NoTransactionsNeeded { .. } => &[],
            Self::Plan { transfers, .. } => transfers,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    /// Paid more than the equal share and is owed money.
    Creditor,
    /// Paid less than the equal share and owes money.
    Debtor,
    Settled,
}

/// What a participant paid and where that leaves them against the equal share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub name: String,
    pub paid: Money,
    /// `paid - equal_share`: positive for creditors, negative for debtors.
    pub net: Money,
}

impl Position {
    #[must_use]
    pub fn standing(&self) -> Standing {
        if self.net < -EPSILON {
            Standing::Debtor
        } else if self.net > EPSILON {
            Standing::Creditor
        } else {
            Standing::Settled
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Positions {
    pub equal_share: Money,
    /// One entry per participant, in order of first appearance.
    pub entries: Vec<Position>,
}

/// Sum paid by each participant, in order of first appearance.
#[must_use]
pub fn balances(ledger: &Ledger) -> Vec<(&str, Money)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut balances: Vec<(&str, Money)> = Vec::new();

    for expense in ledger {
        let name = expense.payer().trim();
        match index.get(name) {
            Some(&slot) => balances[slot].1 += expense.amount(),
            None => {
                index.insert(name, balances.len());
                balances.push((name, expense.amount()));
            }
        }
    }

    balances
}

/// Net position of every participant, `None` for an empty ledger.
#[must_use]
pub fn positions(ledger: &Ledger) -> Option<Positions> {
    let balances = balances(ledger);
    let equal_share = ledger.total_amount().split(balances.len())?;

    let entries = balances
        .into_iter()
        .map(|(name, paid)| Position {
            name: name.to_string(),
            paid,
            net: paid - equal_share,
        })
        .collect();

    Some(Positions {
        equal_share,
        entries,
    })
}

/// Outstanding amount of a debtor or creditor while matching.
struct Party {
    name: String,
    owed: Money,
}

/// Computes the transfers settling `ledger` to an equal share.
///
/// Deterministic: the same ledger always yields the same result, transfers
/// included.
#[must_use]
pub fn settle(ledger: &Ledger) -> SettlementResult {
    let Some(positions) = positions(ledger) else {
        return SettlementResult::NoTransactionsNeeded {
            equal_share: Money::ZERO,
        };
    };
    let equal_share = positions.equal_share;

    let mut debtors = VecDeque::new();
    let mut creditors = VecDeque::new();
    for position in positions.entries {
        match position.standing() {
            Standing::Debtor => debtors.push_back(Party {
                name: position.name,
                owed: position.net.abs(),
            }),
            Standing::Creditor => creditors.push_back(Party {
                name: position.name,
                owed: position.net,
            }),
            Standing::Settled => {}
        }
    }

    if debtors.is_empty() {
        return SettlementResult::NoTransactionsNeeded { equal_share };
    }

    let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
    while let (Some(debtor), Some(creditor)) = (debtors.front_mut(), creditors.front_mut()) {
        let amount = debtor.owed.min(creditor.owed);
        transfers.push(Transfer {
            from: debtor.name.clone(),
            to: creditor.name.clone(),
            amount,
        });

        debtor.owed -= amount;
        creditor.owed -= amount;
        let debtor_done = debtor.owed < EPSILON;
        let creditor_done = creditor.owed < EPSILON;

        if debtor_done {
            debtors.pop_front();
        }
        if creditor_done {
            creditors.pop_front();
        }
    }

    SettlementResult::Plan {
        equal_share,
        transfers,
    }
}
