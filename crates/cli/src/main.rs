//! Minimal command-line shell over the toolcrib core.
//!
//! The core returns typed errors; this boundary maps each kind to its
//! own message and always prints the regression warning next to the
//! update confirmation, never instead of it.

use anyhow::bail;
use chrono::Utc;

use toolcrib_core::{CoreError, DataPaths};
use toolcrib_credentials::CredentialStore;
use toolcrib_inventory::InventoryStore;
use toolcrib_report::ReportGenerator;

const USAGE: &str = "\
usage: toolcrib <command> [args]

commands:
  init                                              seed data files on first run
  register <teacher> <branch> <username> <password> create an account
  login <username> <password>                       verify credentials
  list                                              show the inventory snapshot
  update <component> <qty> <working> <not-working> [reason]
                                                    save new counts for a component
  report <username> <password>                      export an inventory report

The data directory is taken from TOOLCRIB_DATA_DIR (default: current directory).";

fn main() {
    toolcrib_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let paths = DataPaths::from_env();

    let Some(command) = args.first() else {
        bail!("{USAGE}");
    };

    match (command.as_str(), &args[1..]) {
        ("init", []) => init(&paths),
        ("register", [teacher, branch, username, password]) => {
            register(&paths, teacher, branch, username, password)
        }
        ("login", [username, password]) => login(&paths, username, password),
        ("list", []) => list(&paths),
        ("update", [component, qty, working, not_working, rest @ ..]) => {
            let reason = rest.join(" ");
            update(&paths, component, qty, working, not_working, &reason)
        }
        ("report", [username, password]) => report(&paths, username, password),
        _ => bail!("{USAGE}"),
    }
}

fn init(paths: &DataPaths) -> anyhow::Result<()> {
    let seeded_users = CredentialStore::open(paths)
        .initialize()
        .map_err(describe)?;
    let seeded_inventory = InventoryStore::open(paths).seed_default().map_err(describe)?;

    if seeded_users || seeded_inventory {
        println!("Data files created in {}", paths.data_dir().display());
    } else {
        println!("Data files already present, nothing to do");
    }
    Ok(())
}

fn register(
    paths: &DataPaths,
    teacher: &str,
    branch: &str,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    CredentialStore::open(paths)
        .register(teacher, branch, username, password)
        .map_err(describe)?;
    println!("Registration successful! Please login.");
    Ok(())
}

fn login(paths: &DataPaths, username: &str, password: &str) -> anyhow::Result<()> {
    let account = CredentialStore::open(paths)
        .login(username, password)
        .map_err(describe)?;
    println!(
        "Welcome, {} ({} branch)",
        account.teacher_name, account.branch_name
    );
    Ok(())
}

fn list(paths: &DataPaths) -> anyhow::Result<()> {
    let records = InventoryStore::open(paths).list().map_err(describe)?;
    for (name, record) in &records {
        println!(
            "{name}: {} in hand, {} working, {} not working{}",
            record.quantity_in_hand,
            record.number_working,
            record.number_not_working,
            if record.reason.is_empty() {
                String::new()
            } else {
                format!(" ({})", record.reason)
            }
        );
    }
    println!("{} components", records.len());
    Ok(())
}

fn update(
    paths: &DataPaths,
    component: &str,
    qty: &str,
    working: &str,
    not_working: &str,
    reason: &str,
) -> anyhow::Result<()> {
    let outcome = InventoryStore::open(paths)
        .update(component, qty, working, not_working, reason)
        .map_err(describe)?;

    // The warning accompanies the confirmation; neither replaces the
    // other.
    if let Some(regression) = outcome.regression {
        println!(
            "Warning: number of non-working {} increased from {} to {}!",
            outcome.component_name, regression.previous, regression.current
        );
    }
    println!("Data saved successfully for {}!", outcome.component_name);
    Ok(())
}

fn report(paths: &DataPaths, username: &str, password: &str) -> anyhow::Result<()> {
    let store = CredentialStore::open(paths);
    let account = store.login(username, password).map_err(describe)?;

    let records = InventoryStore::open(paths).list().map_err(describe)?;
    let artifact = ReportGenerator::open(paths)
        .generate(&account.teacher_name, &records, Utc::now())
        .map_err(describe)?;

    println!(
        "Inventory report exported successfully! Saved as: {}",
        artifact.path.display()
    );
    Ok(())
}

/// One distinct, user-facing message per error kind.
fn describe(err: CoreError) -> anyhow::Error {
    let message = match &err {
        CoreError::Validation(detail) => format!("Please check your input: {detail}"),
        CoreError::DuplicateUser(username) => {
            format!("Username '{username}' already exists, pick another")
        }
        CoreError::Authentication => "Invalid username or password".to_string(),
        CoreError::NotFound(component) => {
            format!("No component named '{component}' in the inventory")
        }
        CoreError::Storage { path, message } => {
            format!("Could not access data file {path}: {message}")
        }
    };
    anyhow::anyhow!(message)
}
