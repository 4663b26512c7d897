//! Shared-expense ledger and equal-share settlement.
//!
//! The engine holds the expense [`Ledger`] and computes, on demand, the
//! [`Transfer`]s that settle it so every participant ends up paying the same
//! amount. It performs no I/O: loading, saving and rendering are left to the
//! caller.
//!
//! ```rust
//! use engine::{Ledger, Money, settle};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Alice", Money::from_minor(30_00), None).unwrap();
//! ledger.add("Bob", Money::from_minor(10_00), Some("taxi")).unwrap();
//!
//! let result = settle(&ledger);
//! assert_eq!(result.equal_share(), Money::from_minor(20_00));
//! assert_eq!(result.transfers()[0].from, "Bob");
//! assert_eq!(result.transfers()[0].to, "Alice");
//! ```

pub use currency::Currency;
pub use error::EngineError;
pub use expense::Expense;
pub use ledger::Ledger;
pub use money::Money;
pub use settlement::{
    EPSILON, Position, Positions, SettlementResult, Standing, Transfer, balances, positions,
    settle,
};

mod currency;
mod error;
mod expense;
mod ledger;
mod money;
mod settlement;

type ResultEngine<T> = Result<T, EngineError>;
