//! Command line interface.
//!
//! Commands return their output lines so `main` stays a thin printer.

use crate::codec::{decode, encode, parse_with, SuffixPolicy};
use crate::config::Config;
use crate::models::StoredRange;
use crate::output::{csv_rows, table_rows};
use crate::store::{load, load_or_new, save};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "allowlist-range", version, about = "Encode and manage allow-list IP ranges")]
pub struct Cli {
    /// Allow-list file, overrides ALLOWLIST_FILE.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Discard text after a second '/' instead of rejecting it.
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse addresses or CIDR blocks and show their storage encoding.
    Parse {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Decode a stored tuple back into a range.
    Decode {
        ip_size: u8,
        #[arg(allow_negative_numbers = true)]
        start_suffix: i64,
        #[arg(allow_negative_numbers = true)]
        start_ip: i64,
        #[arg(allow_negative_numbers = true)]
        end_suffix: i64,
        #[arg(allow_negative_numbers = true)]
        end_ip: i64,
    },
    /// List the allow-list entries that contain an address.
    Check { ip: IpAddr },
    /// Add an address or CIDR block to the allow-list file.
    Add {
        value: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long)]
        expires_in_days: Option<i64>,
    },
    /// Remove an entry from the allow-list file.
    Remove { value: String },
    /// Print the allow-list file.
    List {
        #[arg(long)]
        csv: bool,
    },
}

/// Run a parsed command line against `config`, returning the lines to print.
pub fn run(cli: Cli, mut config: Config) -> Result<Vec<String>, Box<dyn Error>> {
    if let Some(file) = cli.file {
        config.file = file;
    }
    if cli.lenient {
        config.suffix_policy = SuffixPolicy::Lenient;
    }
    let options = config.parse_options();
    log::debug!("run({:?}) file={}", cli.command, config.file.display());

    let lines = match cli.command {
        Command::Parse { values } => {
            let mut lines = Vec::new();
            for value in values {
                let range = parse_with(&value, &options)
                    .map_err(|e| format!("{}: {e}", value.trim()))?;
                let stored = encode(&range);
                lines.push(format!(
                    "{value} {family} {range} ip_size={ip_size} start_suffix={start_suffix} start_ip={start_ip} end_suffix={end_suffix} end_ip={end_ip}",
                    value = value.trim().bold(),
                    family = range.family(),
                    ip_size = stored.ip_size,
                    start_suffix = stored.start_high,
                    start_ip = stored.start_low,
                    end_suffix = stored.end_high,
                    end_ip = stored.end_low,
                ));
            }
            lines
        }
        Command::Decode {
            ip_size,
            start_suffix,
            start_ip,
            end_suffix,
            end_ip,
        } => {
            let range = decode(&StoredRange {
                ip_size,
                start_high: start_suffix,
                start_low: start_ip,
                end_high: end_suffix,
                end_low: end_ip,
            })?;
            vec![format!("{} {range} size={}", range.family(), range.size())]
        }
        Command::Check { ip } => {
            let list = load(&config.file)?;
            let matches = list.matches(ip, Utc::now());
            if matches.is_empty() {
                vec![format!("{ip} is {} by '{}'", "not allowed".red(), list.name)]
            } else {
                let mut lines = vec![format!("{ip} is {} by '{}'", "allowed".green(), list.name)];
                lines.extend(
                    matches
                        .iter()
                        .map(|r| format!("  matched {} ({})", r.value, r.description)),
                );
                lines
            }
        }
        Command::Add {
            value,
            description,
            expires_in_days,
        } => {
            let mut list = load_or_new(&config.file, &config.name)?;
            list.set_options(options);
            let expires_at = match expires_in_days {
                Some(days) => Some(
                    Duration::try_days(days)
                        .and_then(|d| Utc::now().checked_add_signed(d))
                        .ok_or_else(|| format!("--expires-in-days {days} is out of range"))?,
                ),
                None => None,
            };
            let added = list.add(&value, &description, expires_at)?.value.clone();
            save(&list, &config.file)?;
            vec![format!("added {added} to '{}'", list.name)]
        }
        Command::Remove { value } => {
            let mut list = load(&config.file)?;
            let record = list.remove(&value)?;
            save(&list, &config.file)?;
            vec![format!("removed {} from '{}'", record.value, list.name)]
        }
        Command::List { csv } => {
            let list = load(&config.file)?;
            if csv {
                csv_rows(&list)
            } else {
                table_rows(&list, Utc::now())
            }
        }
    };
    Ok(lines)
}
