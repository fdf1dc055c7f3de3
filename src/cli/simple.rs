//! Interactive shell for the flat-file (CSV) ledger
//!
//! Menu-driven loop over the append-only store. The ledger lives in
//! memory for the session; each recorded transaction is appended to the
//! file immediately, with no batching.

use crate::config::ContasPaths;
use crate::error::ContasResult;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::reports::{format_statement, FinancialSummary};
use crate::storage::CsvLedgerStore;

use super::input;

fn print_menu() {
    println!();
    println!("--- PERSONAL FINANCE LEDGER ---");
    println!("1. Add salary");
    println!("2. Add other income");
    println!("3. Add expense");
    println!("4. Financial summary");
    println!("5. Detailed statement");
    println!("6. Exit");
    println!("-------------------------------");
}

/// Run the CSV-variant shell until the operator chooses to exit
pub fn run_simple_shell(paths: &ContasPaths) -> ContasResult<()> {
    paths.ensure_directories()?;
    let store = CsvLedgerStore::new(paths.csv_file());

    // An absent file is a fresh start; any other load failure aborts here.
    let mut ledger = Ledger::from_transactions(store.load_all()?);
    if ledger.is_empty() {
        println!("Welcome! No previous data found, starting a fresh ledger.");
    } else {
        println!("Loaded {} previous transactions.", ledger.len());
    }

    loop {
        print_menu();
        let choice = input::prompt_line("Choose an option: ")?;
        match choice.as_str() {
            "1" => add_salary(&store, &mut ledger)?,
            "2" => add_income(&store, &mut ledger)?,
            "3" => add_expense(&store, &mut ledger)?,
            "4" => println!("\n{}", FinancialSummary::from_ledger(&ledger).format_terminal()),
            "5" => println!("\n{}", format_statement(&ledger)),
            "6" => break,
            _ => println!("Invalid option, try again."),
        }
    }

    println!("Thanks for using contas. See you!");
    Ok(())
}

/// Record the transaction and persist it, keeping it in memory on failure
fn record(store: &CsvLedgerStore, ledger: &mut Ledger, txn: Transaction) {
    if let Err(e) = store.append(&txn) {
        eprintln!("warning: {}; the record is kept in memory but was not saved", e);
    }
    ledger.record(txn);
}

fn add_salary(store: &CsvLedgerStore, ledger: &mut Ledger) -> ContasResult<()> {
    let amount = input::prompt_magnitude("Salary amount: ")?;
    let txn = Transaction::income("Salário", amount)?;
    record(store, ledger, txn);
    println!("Salary of {} recorded.", amount);
    Ok(())
}

fn add_income(store: &CsvLedgerStore, ledger: &mut Ledger) -> ContasResult<()> {
    let description = input::prompt_nonempty("Income description (e.g. Freelance, Venda): ")?;
    let amount = input::prompt_magnitude("Income amount: ")?;
    let txn = Transaction::income(description, amount)?;
    record(store, ledger, txn);
    println!("Income of {} recorded.", amount);
    Ok(())
}

fn add_expense(store: &CsvLedgerStore, ledger: &mut Ledger) -> ContasResult<()> {
    let description = input::prompt_nonempty("Expense description (e.g. Almoço, Uber): ")?;
    let amount = input::prompt_magnitude("Expense amount: ")?;
    // The CSV variant carries no category
    let txn = Transaction::expense(description, amount, None)?;
    record(store, ledger, txn);
    println!("Expense of {} recorded.", amount);
    Ok(())
}
