//! Reading the store's data files and running its commands
use crate::error::LoadError;
use crate::manager::{StoreManager, Summary};
use crate::parse;
use log::{info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Where the store's data files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// One customer per line
    pub customers: PathBuf,
    /// One stocked item per line
    pub inventory: PathBuf,
    /// One command per line, run in order
    pub commands: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            customers: PathBuf::from("customers.txt"),
            inventory: PathBuf::from("inventory.txt"),
            commands: PathBuf::from("commands.txt"),
        }
    }
}

/// Load every data file into a fresh store, then run the queued commands
///
/// Reports are written to `out`. Lines that fail to parse, and commands the store refuses, are
/// logged and skipped.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(StoreManager, Summary), LoadError> {
    let mut store = StoreManager::new();
    load_inventory(&mut store, open(&config.inventory)?, &config.inventory)?;
    load_transactions(&mut store, open(&config.commands)?, &config.commands)?;
    load_customers(&mut store, open(&config.customers)?, &config.customers)?;
    let summary = store.process_transactions(out)?;
    info!(
        "processed {} commands, {} rejected",
        summary.executed + summary.rejected,
        summary.rejected
    );
    Ok((store, summary))
}

/// Register every customer in `reader`, returning how many were added
///
/// `path` only labels log messages and errors.
pub fn load_customers<R: BufRead>(
    store: &mut StoreManager,
    reader: R,
    path: &Path,
) -> Result<usize, LoadError> {
    let loaded = each_line(reader, path, |line| {
        store.add_customer(parse::customer(line)?)?;
        Ok(())
    })?;
    info!("loaded {} customers from {}", loaded, path.display());
    Ok(loaded)
}

/// Stock every item in `reader`, returning how many lines were stocked
pub fn load_inventory<R: BufRead>(
    store: &mut StoreManager,
    reader: R,
    path: &Path,
) -> Result<usize, LoadError> {
    let loaded = each_line(reader, path, |line| {
        let (item, count) = parse::stock(line)?;
        store.add_item(item, count)?;
        Ok(())
    })?;
    info!("loaded {} inventory lines from {}", loaded, path.display());
    Ok(loaded)
}

/// Queue every command in `reader`, returning how many were queued
pub fn load_transactions<R: BufRead>(
    store: &mut StoreManager,
    reader: R,
    path: &Path,
) -> Result<usize, LoadError> {
    let loaded = each_line(reader, path, |line| {
        store.add_transaction(parse::transaction(line)?);
        Ok(())
    })?;
    info!("queued {} commands from {}", loaded, path.display());
    Ok(loaded)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Feed every non-blank line to `apply`, counting the lines it accepts
fn each_line<R, F>(reader: R, path: &Path, mut apply: F) -> Result<usize, LoadError>
where
    R: BufRead,
    F: FnMut(&str) -> Result<(), Box<dyn Error>>,
{
    let mut accepted = 0;
    for (num, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match apply(&line) {
            Ok(()) => accepted += 1,
            Err(err) => warn!("{}:{}: skipping line: {}", path.display(), num + 1, err),
        }
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::{load_customers, load_inventory, load_transactions, run, Config};
    use crate::customer::CustomerId;
    use crate::error::LoadError;
    use crate::item::{Item, Rock};
    use crate::manager::StoreManager;
    use std::path::{Path, PathBuf};

    #[test]
    fn skips_bad_lines() {
        let mut store = StoreManager::new();
        let customers = "1000, Mouse, Mickey\n\nnot a customer\n1001, Duck, Donald\n1000, Again\n";
        let loaded = load_customers(&mut store, customers.as_bytes(), Path::new("c")).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(
            store.account(CustomerId(1000)).unwrap().customer().name(),
            "Mouse, Mickey"
        );
    }

    #[test]
    fn stocks_counts() {
        let mut store = StoreManager::new();
        let inventory = "R, 3, Queen, Jazz, 1978\nX, 1, Nope, Nope, 2000\nR, Queen, Jazz, 1978\n\
                         R, 0, Queen, Jazz, 1978\nD, 0, Ridley Scott, Alien, 1979\n";
        let loaded = load_inventory(&mut store, inventory.as_bytes(), Path::new("i")).unwrap();
        assert_eq!(loaded, 2);
        assert!(store.inventory().dvd().is_empty());
        let jazz: Item = Rock::new("Queen", "Jazz", 1978).into();
        assert_eq!(store.inventory().on_hand(&jazz), 4);
    }

    #[test]
    fn queues_commands() {
        let mut store = StoreManager::new();
        let commands = "I\nH, 1000\nQ, 1\nA\n";
        let loaded = load_transactions(&mut store, commands.as_bytes(), Path::new("t")).unwrap();
        assert_eq!(loaded, 3);
        assert_eq!(store.pending(), 3);
    }

    #[test]
    fn missing_file() {
        let config = Config {
            customers: PathBuf::from("does/not/exist.txt"),
            ..Config::default()
        };
        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
