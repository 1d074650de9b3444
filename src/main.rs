use aptledger::application::{self, init, ConfigService, DuesChange, Ledger};
use aptledger::cli::{format_json, format_read_map, format_summary, Cli, Commands};
use aptledger::domain::month::current_month;
use aptledger::domain::{keys, ContentKind, RecordFamily};
use aptledger::error::LedgerError;
use aptledger::infrastructure::logging::init_logging;
use aptledger::infrastructure::{FileBackend, FileSystemRepository};
use clap::Parser;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the ledger and install logging from its config
fn open_ledger() -> Result<Ledger<FileBackend>, LedgerError> {
    let repo = FileSystemRepository::discover()?;
    let (config, ledger) = application::open(&repo)?;
    init_logging(&config.log_filter());
    Ok(ledger)
}

fn run(cli: Cli) -> Result<(), LedgerError> {
    match cli.command {
        Some(Commands::Init { path, quota }) => {
            init_logging(&std::env::var("APTLEDGER_LOG").unwrap_or_else(|_| "warn".to_string()));
            let config = init::init(&path, quota)?;
            println!("Initialized aptledger at {}", path.display());
            println!("Quota: {} bytes", config.quota_bytes);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("quota_bytes = {}", config.quota_bytes);
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: aptledger config [--list | <key> [<value>]]");
                println!("Valid keys: quota_bytes, log_level, created");
                Ok(())
            }
        }
        Some(Commands::Dues {
            tenant,
            fee,
            start,
            pay,
            amount,
        }) => {
            let ledger = open_ledger()?;
            let change = DuesChange {
                monthly_fee: fee,
                start_month: start,
                payment: pay.zip(amount),
            };

            let dues = if change == DuesChange::default() {
                ledger.load_dues(&tenant)
            } else {
                ledger.update_dues(&tenant, &current_month(), &change)?
            };
            println!("{}", format_json(&dues));
            Ok(())
        }
        Some(Commands::Balance { tenant, value }) => {
            let ledger = open_ledger()?;
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(LedgerError::InvalidAmount(v.to_string()));
                }
                if !ledger.save_opening_balance(&tenant, v) {
                    return Err(LedgerError::WriteRejected(keys::opening_balance(&tenant)));
                }
            }
            println!("{}", ledger.load_opening_balance(&tenant));
            Ok(())
        }
        Some(Commands::Read { tenant, kind, mark }) => {
            let kind = ContentKind::from_str(&kind)?;
            let ledger = open_ledger()?;
            if let Some(item) = mark {
                if !ledger.mark_read(&tenant, kind, &item) {
                    return Err(LedgerError::WriteRejected(keys::read_map(kind, &tenant)));
                }
            }
            let map = ledger.load_read_map(&tenant, kind);
            println!("{}", format_read_map(&map).trim_end());
            Ok(())
        }
        Some(Commands::Show { family, tenant }) => {
            let parsed = RecordFamily::from_str(&family)?;
            let tenant = match (parsed.is_tenant_scoped(), tenant) {
                (true, None) => return Err(LedgerError::MissingTenant(family)),
                (_, tenant) => tenant.unwrap_or_default(),
            };
            let ledger = open_ledger()?;
            println!("{}", format_json(&ledger.load_family(parsed, &tenant)));
            Ok(())
        }
        Some(Commands::Summary { tenant }) => {
            let ledger = open_ledger()?;
            print!("{}", format_summary(&ledger.balance_summary(&tenant)));
            Ok(())
        }
        None => {
            println!("aptledger - Per-building record store");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
