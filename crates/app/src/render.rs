//! Text views of the ledger and of a settlement.
//!
//! Amounts are rounded to two decimals only here; the engine keeps them exact.

use std::io::Write;

use engine::{Currency, Ledger, Positions, SettlementResult};
use serde::Serialize;

use crate::{error::Result, i18n::Language};

/// Numbered expense list followed by the total and the participant count.
pub fn expense_list(ledger: &Ledger, language: Language, currency: Currency) -> String {
    let t = language.labels();
    let mut lines = vec![format!("{}:", t.recorded_expenses)];

    for (index, expense) in ledger.iter().enumerate() {
        lines.push(format!(
            "  {index}. {} {} {}",
            expense.payer(),
            t.paid,
            currency.format(expense.amount())
        ));
        if let Some(note) = expense.note() {
            lines.push(format!("     {note}"));
        }
    }

    lines.push(format!("{}: {}", t.total, currency.format(ledger.total_amount())));
    lines.push(format!(
        "{}: {}",
        t.participants,
        ledger.display_participant_count()
    ));
    lines.join("\n")
}

/// Equal share and the transfer list, or the "nothing to do" message.
pub fn settlement(result: &SettlementResult, language: Language, currency: Currency) -> String {
    let t = language.labels();
    let mut lines = vec![
        t.settle_title.to_string(),
        format!("{}: {}", t.equal_split, currency.format(result.equal_share())),
    ];

    match result {
        SettlementResult::NoTransactionsNeeded { .. } => lines.push(t.no_transactions.to_string()),
        SettlementResult::Plan { transfers, .. } => {
            lines.push(format!("{}:", t.transactions));
            for transfer in transfers {
                lines.push(format!(
                    "  {} {} {} {}",
                    transfer.from,
                    t.pays,
                    transfer.to,
                    currency.format(transfer.amount)
                ));
            }
        }
    }

    lines.join("\n")
}

/// What each participant paid and their distance from the equal share.
pub fn positions(positions: &Positions, language: Language, currency: Currency) -> String {
    let t = language.labels();
    let mut lines = vec![format!(
        "{}: {}",
        t.equal_split,
        currency.format(positions.equal_share)
    )];

    for position in &positions.entries {
        let net = position.net.round_cents();
        let sign = if net.is_positive() { "+" } else { "" };
        lines.push(format!(
            "  {} {} {} ({sign}{net})",
            position.name,
            t.paid,
            currency.format(position.paid)
        ));
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct TransferRow<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Writes the transfers as `from,to,amount` CSV rows.
pub fn transfers_csv<W: Write>(result: &SettlementResult, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if result.transfers().is_empty() {
        csv.write_record(["from", "to", "amount"])?;
    }
    for transfer in result.transfers() {
        csv.serialize(TransferRow {
            from: &transfer.from,
            to: &transfer.to,
            amount: transfer.amount.to_string(),
        })?;
    }
    csv.flush()?;
    Ok(())
}
