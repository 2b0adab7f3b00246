//! Commands processed against the store
use crate::customer::CustomerId;
use crate::item::Item;
use std::fmt::{self, Display, Formatter};

/// A single store command
///
/// Purchases and trades are kept in the customer's history once they succeed, so they own their
/// item. The reporting commands only carry what they print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// A customer buys one copy of an item, code `P`
    Purchase {
        /// The buyer
        customer: CustomerId,
        /// The item bought
        item: Item,
    },
    /// A customer trades one copy of an item in to the store, code `T`
    Trade {
        /// The seller
        customer: CustomerId,
        /// The item traded in
        item: Item,
    },
    /// Print one customer's history, code `H`
    History {
        /// The customer to report on
        customer: CustomerId,
    },
    /// Print every customer's history, code `A`
    AllHistory,
    /// Print the full inventory, code `I`
    Inventory,
}

impl Transaction {
    /// The single letter used for this command in data files
    pub fn code(&self) -> char {
        match self {
            Transaction::Purchase { .. } => 'P',
            Transaction::Trade { .. } => 'T',
            Transaction::History { .. } => 'H',
            Transaction::AllHistory => 'A',
            Transaction::Inventory => 'I',
        }
    }

    /// The customer this command is about, if any
    pub fn customer(&self) -> Option<CustomerId> {
        match self {
            Transaction::Purchase { customer, .. }
            | Transaction::Trade { customer, .. }
            | Transaction::History { customer } => Some(*customer),
            Transaction::AllHistory | Transaction::Inventory => None,
        }
    }
}

impl Display for Transaction {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Transaction::Purchase { item, .. } => write!(out, "Purchase - {}", item),
            Transaction::Trade { item, .. } => write!(out, "Trade    - {}", item),
            Transaction::History { customer } => write!(out, "History {}", customer),
            Transaction::AllHistory => write!(out, "All History"),
            Transaction::Inventory => write!(out, "Inventory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;
    use crate::customer::CustomerId;
    use crate::item::Rock;

    #[test]
    fn display_and_codes() {
        let purchase = Transaction::Purchase {
            customer: CustomerId(7),
            item: Rock::new("Metallica", "Master of Puppets", 1986).into(),
        };
        assert_eq!(
            purchase.to_string(),
            "Purchase - Rock CD: Metallica, Master of Puppets, 1986"
        );
        assert_eq!(purchase.code(), 'P');
        assert_eq!(purchase.customer(), Some(CustomerId(7)));
        assert_eq!(Transaction::Inventory.customer(), None);
        assert_eq!(Transaction::AllHistory.code(), 'A');
    }
}
