use std::{fs::File, io};

use clap::Parser;

use crate::{
    book::Book,
    cli::{Cli, Command},
    error::Result,
    settings::AppConfig,
    store::JsonStore,
};

mod book;
mod cli;
mod error;
mod i18n;
mod legacy;
mod render;
mod settings;
mod store;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(&cli.global)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "splitsafe={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(io::stderr)
        .init();

    let store = JsonStore::new(&settings.state_path);
    tracing::info!(
        "using {} (language {}, currency {})",
        store.path().display(),
        settings.language.code(),
        settings.currency
    );

    run(cli.command, store, &settings)
}

fn run(command: Command, store: JsonStore, settings: &AppConfig) -> Result<()> {
    let mut book = Book::open(store)?;
    let (language, currency) = (settings.language, settings.currency);

    match command {
        Command::Add(args) => {
            book.add(&args.payer, args.amount, args.note.as_deref())?;
            println!("{}", render::expense_list(book.ledger(), language, currency));
        }
        Command::Remove { index } => {
            book.remove(index)?;
            println!("{}", render::expense_list(book.ledger(), language, currency));
        }
        Command::Clear => {
            book.clear()?;
            println!("{}", render::expense_list(book.ledger(), language, currency));
        }
        Command::List => {
            println!("{}", render::expense_list(book.ledger(), language, currency));
        }
        Command::Settle => {
            println!("{}", render::settlement(&book.settle(), language, currency));
        }
        Command::Balances => match engine::positions(book.ledger()) {
            Some(positions) => println!("{}", render::positions(&positions, language, currency)),
            None => println!("{}", language.labels().no_transactions),
        },
        Command::Export { output } => {
            let result = book.settle();
            match output {
                Some(path) => {
                    render::transfers_csv(&result, File::create(&path)?)?;
                    tracing::info!(
                        "exported {} transfers to {}",
                        result.transfers().len(),
                        path.display()
                    );
                }
                None => render::transfers_csv(&result, io::stdout().lock())?,
            }
        }
        Command::Import { path } => {
            let imported = legacy::read(&path)?;
            if imported.skipped > 0 {
                tracing::warn!("{} records skipped", imported.skipped);
            }
            let count = book.extend(imported.expenses)?;
            tracing::info!("imported {count} expenses from {}", path.display());
            println!("{}", render::expense_list(book.ledger(), language, currency));
        }
    }

    Ok(())
}
