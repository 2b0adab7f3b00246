//! Inventory and customer bookkeeping for a small media store
//!
//! The store keeps rock CDs, classical CDs, and DVDs in stock, knows its customers, and works
//! through a queue of purchases, trades, and report requests read from flat text files.
//!
//! Every catalog and the customer directory is an [OrderedStore]: an unbalanced binary search
//! tree that keeps one node per distinct record and counts how many copies of it are stored.
//! Stock on hand is simply a record's occurrence count.
//!
//! # Example
//!
//! ```
//! # use stockroom::{Customer, CustomerId, Rock, StoreManager, Transaction};
//! let mut store = StoreManager::new();
//! store.add_customer(Customer::new(CustomerId(1000), "Mouse, Mickey")).unwrap();
//! store.add_item(Rock::new("Queen", "Jazz", 1978).into(), 2).unwrap();
//!
//! let purchase = Transaction::Purchase {
//!     customer: CustomerId(1000),
//!     item: Rock::new("Queen", "Jazz", 1978).into(),
//! };
//! let mut report = Vec::new();
//! store.execute(purchase, &mut report).unwrap();
//! assert_eq!(store.inventory().rock().total(), 1);
//! ```
#![warn(missing_docs)]

mod customer;
mod error;
mod item;
pub mod loader;
mod manager;
pub mod parse;
mod transaction;
mod tree;

pub use customer::{Customer, CustomerId};
pub use error::{LoadError, ParseError, StoreError};
pub use item::{Category, Classical, Dvd, Item, Rock};
pub use loader::Config;
pub use manager::{Account, Inventory, StoreManager, Summary};
pub use transaction::Transaction;
pub use tree::{Iter, OrderedStore};
