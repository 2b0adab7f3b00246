//! Store customers
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A customer's numeric id as it appears in data files
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct CustomerId(pub u32);

impl Display for CustomerId {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(out, "{}", self.0)
    }
}

/// A registered customer
///
/// Customers are ordered by name, with the id breaking ties so that two people sharing a name are
/// still listed separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }

    /// The customer's id
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// The customer's name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialOrd for Customer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Customer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Display for Customer {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(out, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerId};

    #[test]
    fn ordered_by_name_then_id() {
        let ann = Customer::new(CustomerId(900), "Ann");
        let bob = Customer::new(CustomerId(100), "Bob");
        let other_ann = Customer::new(CustomerId(901), "Ann");
        assert!(ann < bob);
        assert!(ann < other_ann);
        assert_ne!(ann, other_ann);
    }

    #[test]
    fn display() {
        let customer = Customer::new(CustomerId(123), "Mouse, Mickey");
        assert_eq!(customer.to_string(), "Mouse, Mickey (123)");
    }
}
