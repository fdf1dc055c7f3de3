//! Interactive shell for the SQLite ledger
//!
//! The richer variant: expenses carry a category, records can be edited
//! and deleted by id, the statement accepts a month/year filter, and
//! spending can be broken down per category.

use crate::config::ContasPaths;
use crate::error::{ContasError, ContasResult};
use crate::models::{Money, StoredTransaction, Transaction, TransactionId};
use crate::reports::{format_stored_statement, CategoryReport};
use crate::storage::{MonthFilter, SqliteStore, TransactionUpdate};

use super::input;

/// Fixed set of expense categories offered by the shell
pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Alimentação",
    "Moradia",
    "Transporte",
    "Saúde",
    "Educação",
    "Lazer",
    "Vestuário",
    "Assinaturas",
    "Outros",
];

fn print_menu() {
    println!();
    println!("--- FINANCE LEDGER PRO ---");
    println!("1. Add expense");
    println!("2. Add income");
    println!("3. Edit transaction");
    println!("4. Delete transaction");
    println!("5. Statement (full or filtered)");
    println!("6. Category report");
    println!("7. Exit");
    println!("--------------------------");
}

/// Run the SQLite-variant shell until the operator chooses to exit
pub fn run_pro_shell(paths: &ContasPaths) -> ContasResult<()> {
    paths.ensure_directories()?;
    let store = SqliteStore::new(paths.db_file());
    store.ensure_schema()?;

    loop {
        print_menu();
        let choice = input::prompt_line("Choose an option: ")?;
        match choice.as_str() {
            "1" => add_expense(&store)?,
            "2" => add_income(&store)?,
            "3" => edit_transaction(&store)?,
            "4" => delete_transaction(&store)?,
            "5" => show_statement(&store)?,
            "6" => show_category_report(&store)?,
            "7" => break,
            _ => println!("Invalid option, try again."),
        }
    }

    println!("Thanks for using contas. See you!");
    Ok(())
}

fn add_expense(store: &SqliteStore) -> ContasResult<()> {
    let description = input::prompt_nonempty("Expense description (e.g. Almoço): ")?;
    let amount = input::prompt_magnitude("Expense amount: ")?;

    println!("\nSelect a category:");
    for (i, category) in EXPENSE_CATEGORIES.iter().enumerate() {
        println!("{}. {}", i + 1, category);
    }
    let choice = input::prompt_choice_in_range("Category number: ", EXPENSE_CATEGORIES.len())?;
    let category = EXPENSE_CATEGORIES[choice - 1].to_string();

    let txn = Transaction::expense(description, amount, Some(category))?;
    let id = store.insert(&txn)?;
    println!("Expense recorded with ID {}.", id);
    Ok(())
}

fn add_income(store: &SqliteStore) -> ContasResult<()> {
    let description = input::prompt_nonempty("Income description (e.g. Salário): ")?;
    let amount = input::prompt_magnitude("Income amount: ")?;

    let txn = Transaction::income(description, amount)?;
    let id = store.insert(&txn)?;
    println!("Income recorded with ID {}.", id);
    Ok(())
}

/// List all records and prompt until the operator picks an existing id
fn prompt_existing_id(rows: &[StoredTransaction]) -> ContasResult<TransactionId> {
    loop {
        let line = input::prompt_line("Enter the transaction ID: ")?;
        match line.parse::<i64>() {
            Ok(raw) => {
                let id = TransactionId::new(raw);
                if rows.iter().any(|r| r.id == id) {
                    return Ok(id);
                }
                println!("Invalid ID, try again.");
            }
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn edit_transaction(store: &SqliteStore) -> ContasResult<()> {
    let rows = store.query(None)?;
    if rows.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    print!("\n{}", format_stored_statement(&rows));

    let id = prompt_existing_id(&rows)?;
    let is_expense = rows
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.record.is_expense())
        .unwrap_or(false);

    let description = input::prompt_line("New description (blank to keep): ")?;
    let amount = prompt_optional_magnitude("New amount (blank to keep): ")?;
    // Category applies to expenses only; the kind itself is not editable
    let category = if is_expense {
        input::prompt_line("New category (blank to keep): ")?
    } else {
        String::new()
    };

    let update = TransactionUpdate {
        description: if description.is_empty() {
            None
        } else {
            Some(description)
        },
        amount,
        category: if category.is_empty() {
            None
        } else {
            Some(category)
        },
    };

    if update.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    match store.update(id, update) {
        Ok(()) => println!("Transaction {} updated.", id),
        Err(e) if e.is_not_found() => println!("{}", e),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Blank keeps the current amount; anything else must be a positive value
fn prompt_optional_magnitude(prompt: &str) -> ContasResult<Option<Money>> {
    loop {
        let line = input::prompt_line(prompt)?;
        if line.is_empty() {
            return Ok(None);
        }
        match input::parse_positive_amount(&line) {
            Ok(amount) => return Ok(Some(amount)),
            Err(e) => eprintln!("{}. Please enter a positive number or leave blank.", e),
        }
    }
}

fn delete_transaction(store: &SqliteStore) -> ContasResult<()> {
    let rows = store.query(None)?;
    if rows.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    print!("\n{}", format_stored_statement(&rows));

    let id = prompt_existing_id(&rows)?;
    if !input::confirm(&format!("Really delete transaction {}? (y/n): ", id))? {
        println!("Operation cancelled.");
        return Ok(());
    }

    match store.delete(id) {
        Ok(()) => println!("Transaction {} deleted.", id),
        Err(e) if e.is_not_found() => println!("{}", e),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn show_statement(store: &SqliteStore) -> ContasResult<()> {
    let filter = if input::confirm("Filter by month/year? (y/n): ")? {
        match prompt_month_filter() {
            Ok(filter) => Some(filter),
            Err(e) if e.is_parse() => {
                // Bad filter input falls back to the full statement
                println!("Invalid year or month, showing the full statement.");
                None
            }
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    let rows = store.query(filter)?;
    print!("\n{}", format_stored_statement(&rows));
    Ok(())
}

fn prompt_month_filter() -> ContasResult<MonthFilter> {
    let year = input::prompt_line("Year (e.g. 2025): ")?
        .parse::<i32>()
        .map_err(|e| ContasError::Parse(e.to_string()))?;
    let month = input::prompt_line("Month (e.g. 5): ")?
        .parse::<u32>()
        .map_err(|e| ContasError::Parse(e.to_string()))?;
    MonthFilter::new(year, month)
}

fn show_category_report(store: &SqliteStore) -> ContasResult<()> {
    let report = CategoryReport::from_totals(store.category_summary()?);
    print!("\n{}", report.format_terminal());
    Ok(())
}
