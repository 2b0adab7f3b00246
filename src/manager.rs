//! The store itself: catalogs, customers, and the command queue
use crate::customer::{Customer, CustomerId};
use crate::error::StoreError;
use crate::item::{Category, Classical, Dvd, Item, Rock};
use crate::transaction::Transaction;
use crate::tree::OrderedStore;
use log::{debug, warn};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

const BANNER_WIDTH: usize = 94;

/// Every catalog of the store, one [OrderedStore] per category
///
/// The number of copies on hand is each record's occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    rock: OrderedStore<Rock>,
    classical: OrderedStore<Classical>,
    dvd: OrderedStore<Dvd>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of an item to its catalog
    ///
    /// Returns false if `count` is zero.
    pub fn stock(&mut self, item: Item, count: usize) -> bool {
        match item {
            Item::Rock(rock) => self.rock.insert_many(rock, count),
            Item::Classical(classical) => self.classical.insert_many(classical, count),
            Item::Dvd(dvd) => self.dvd.insert_many(dvd, count),
        }
    }

    /// Take one copy of an item off the shelf
    ///
    /// Returns false if the item isn't in stock.
    pub fn take(&mut self, item: &Item) -> bool {
        match item {
            Item::Rock(rock) => self.rock.remove(rock),
            Item::Classical(classical) => self.classical.remove(classical),
            Item::Dvd(dvd) => self.dvd.remove(dvd),
        }
    }

    /// How many copies of an item are on hand
    pub fn on_hand(&self, item: &Item) -> usize {
        match item {
            Item::Rock(rock) => self.rock.occurrence(rock),
            Item::Classical(classical) => self.classical.occurrence(classical),
            Item::Dvd(dvd) => self.dvd.occurrence(dvd),
        }
    }

    /// The rock CD catalog
    pub fn rock(&self) -> &OrderedStore<Rock> {
        &self.rock
    }

    /// The classical CD catalog
    pub fn classical(&self) -> &OrderedStore<Classical> {
        &self.classical
    }

    /// The DVD catalog
    pub fn dvd(&self) -> &OrderedStore<Dvd> {
        &self.dvd
    }

    fn write_catalog<T: Display>(
        out: &mut Formatter<'_>,
        category: Category,
        catalog: &OrderedStore<T>,
    ) -> Result<(), fmt::Error> {
        writeln!(out, "{}", category)?;
        for (item, count) in catalog {
            writeln!(out, "{:>4}  {}", count, item)?;
        }
        writeln!(out)
    }
}

/// Lists each catalog in category order with the count on hand before every item
impl Display for Inventory {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for category in Category::ALL {
            match category {
                Category::Rock => Self::write_catalog(out, category, &self.rock)?,
                Category::Classical => Self::write_catalog(out, category, &self.classical)?,
                Category::Dvd => Self::write_catalog(out, category, &self.dvd)?,
            }
        }
        Ok(())
    }
}

/// A customer together with their completed purchases and trades
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    customer: Customer,
    history: Vec<Transaction>,
}

impl Account {
    fn new(customer: Customer) -> Self {
        Account {
            customer,
            history: Vec::new(),
        }
    }

    /// The account holder
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Completed transactions, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }
}

impl Display for Account {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        writeln!(out, "Customer Name       : {}", self.customer.name())?;
        writeln!(out, "Customer ID         : {}", self.customer.id())?;
        writeln!(out, "Transaction History :")?;
        for (num, transaction) in self.history.iter().enumerate() {
            writeln!(out, "{}.) {}", num + 1, transaction)?;
        }
        Ok(())
    }
}

/// What happened while draining the command queue
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Summary {
    /// Commands carried out
    pub executed: usize,
    /// Commands refused and skipped
    pub rejected: usize,
}

/// The store: its inventory, its customers, and the commands waiting to run
///
/// Customers live in an [OrderedStore] for listing by name and in an id index that also holds
/// each customer's history.
#[derive(Debug, Default)]
pub struct StoreManager {
    inventory: Inventory,
    customers: OrderedStore<Customer>,
    accounts: HashMap<CustomerId, Account>,
    pending: VecDeque<Transaction>,
}

impl StoreManager {
    /// Create a store with no stock, customers, or commands
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), StoreError> {
        match self.accounts.entry(customer.id()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateCustomer(customer.id())),
            Entry::Vacant(ent) => {
                debug!("registering customer {}", customer);
                self.customers.insert(customer.clone());
                ent.insert(Account::new(customer));
                Ok(())
            }
        }
    }

    /// Stock `count` copies of an item
    ///
    /// A count of zero stocks nothing and is refused.
    pub fn add_item(&mut self, item: Item, count: usize) -> Result<(), StoreError> {
        if count == 0 {
            return Err(StoreError::ZeroQuantity(item));
        }
        debug!("stocking {} x{}", item, count);
        self.inventory.stock(item, count);
        Ok(())
    }

    /// Queue a command to run later
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.pending.push_back(transaction);
    }

    /// The number of queued commands
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The store's inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Every registered customer, ordered by name
    pub fn customers(&self) -> &OrderedStore<Customer> {
        &self.customers
    }

    /// A customer's account, if they are registered
    pub fn account(&self, id: CustomerId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Run every queued command in order, writing reports to `out`
    ///
    /// A refused command is logged and skipped. Only a failure to write a report stops
    /// processing.
    pub fn process_transactions<W: Write>(&mut self, out: &mut W) -> Result<Summary, StoreError> {
        let mut summary = Summary::default();
        while let Some(transaction) = self.pending.pop_front() {
            match self.execute(transaction, out) {
                Ok(()) => summary.executed += 1,
                Err(StoreError::Io(err)) => return Err(StoreError::Io(err)),
                Err(err) => {
                    warn!("{}", err);
                    summary.rejected += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Run a single command immediately
    pub fn execute<W: Write>(
        &mut self,
        transaction: Transaction,
        out: &mut W,
    ) -> Result<(), StoreError> {
        debug!("executing {}", transaction);
        match transaction {
            Transaction::Purchase { customer, item } => {
                let account = self
                    .accounts
                    .get_mut(&customer)
                    .ok_or(StoreError::UnknownCustomer(customer))?;
                if !self.inventory.take(&item) {
                    return Err(StoreError::OutOfStock(item));
                }
                account
                    .history
                    .push(Transaction::Purchase { customer, item });
            }
            Transaction::Trade { customer, item } => {
                let account = self
                    .accounts
                    .get_mut(&customer)
                    .ok_or(StoreError::UnknownCustomer(customer))?;
                let stocked = self.inventory.stock(item.clone(), 1);
                debug_assert!(stocked);
                account.history.push(Transaction::Trade { customer, item });
            }
            Transaction::History { customer } => {
                let account = self
                    .accounts
                    .get(&customer)
                    .ok_or(StoreError::UnknownCustomer(customer))?;
                write_banner(out, "Customer History")?;
                writeln!(out, "{}", account)?;
            }
            Transaction::AllHistory => {
                write_banner(out, "All Customer History")?;
                writeln!(out)?;
                for (customer, _) in &self.customers {
                    if let Some(account) = self.accounts.get(&customer.id()) {
                        writeln!(out, "{}", account)?;
                    }
                }
            }
            Transaction::Inventory => {
                write_banner(out, "Inventory")?;
                write!(out, "{}", self.inventory)?;
            }
        }
        Ok(())
    }
}

fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(
        out,
        "{:>width$}",
        title,
        width = (BANNER_WIDTH + title.len()) / 2
    )?;
    writeln!(out, "{}", banner)
}
