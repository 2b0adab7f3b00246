//! Parsers for the customer, inventory, and command files
//!
//! Every file is line oriented with comma separated fields. Whitespace around a field is
//! ignored. Items are written as a category code followed by the category's fields:
//!
//! ```text
//! R, <artist>, <title>, <year>
//! C, <artist>, <title>, <year>, <composer>
//! D, <director>, <title>, <year>
//! ```
//!
//! Inventory lines may put a stock count between the code and the fields.
use crate::customer::{Customer, CustomerId};
use crate::error::ParseError;
use crate::item::{Category, Classical, Dvd, Item, Rock};
use crate::transaction::Transaction;
use nom::{
    bytes::complete::is_not,
    character::complete::{anychar, char, not_line_ending, space0, u16, u32},
    combinator::{all_consuming, map, opt, verify},
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

/// Parse a customer line, `<id>, <name>`
pub fn customer(line: &str) -> Result<Customer, ParseError> {
    let (_, (id, name)) = all_consuming(tuple((
        preceded(space0, customer_id),
        preceded(sep, tail),
    )))(line)?;
    Ok(Customer::new(id, name))
}

/// Parse an inventory line into the item and the number of copies on hand
///
/// A line without a count stocks a single copy.
pub fn stock(line: &str) -> Result<(Item, usize), ParseError> {
    let (input, category) = category(line)?;
    let (input, count) = preceded(sep, opt(terminated(u32, sep)))(input)?;
    let (_, item) = all_consuming(terminated(|input| fields(input, category), space0))(input)?;
    Ok((item, count.map_or(1, |count| count as usize)))
}

/// Parse an item written without a stock count
pub fn item(line: &str) -> Result<Item, ParseError> {
    let (input, category) = category(line)?;
    let (_, item) = all_consuming(delimited(sep, |input| fields(input, category), space0))(input)?;
    Ok(item)
}

/// Parse a command line
///
/// Purchases and trades are `P|T, <id>, <item>`, a history request is `H, <id>`, and `A` and `I`
/// stand alone. Anything following `A` or `I` is ignored.
pub fn transaction(line: &str) -> Result<Transaction, ParseError> {
    let (input, code) = code(line)?;
    match code {
        'P' | 'T' => {
            let (input, customer) = preceded(sep, customer_id)(input)?;
            let (input, _) = sep(input)?;
            let item = item(input)?;
            Ok(if code == 'P' {
                Transaction::Purchase { customer, item }
            } else {
                Transaction::Trade { customer, item }
            })
        }
        'H' => {
            let (_, customer) = all_consuming(delimited(sep, customer_id, space0))(input)?;
            Ok(Transaction::History { customer })
        }
        'A' => Ok(Transaction::AllHistory),
        'I' => Ok(Transaction::Inventory),
        other => Err(ParseError::UnknownCode(other)),
    }
}

fn category(input: &str) -> Result<(&str, Category), ParseError> {
    let (input, code) = code(input)?;
    let category = Category::from_code(code).ok_or(ParseError::UnknownCode(code))?;
    Ok((input, category))
}

fn fields(input: &str, category: Category) -> IResult<&str, Item> {
    match category {
        Category::Rock => map(
            tuple((text, preceded(sep, text), preceded(sep, u16))),
            |(artist, title, year)| Rock::new(artist, title, year).into(),
        )(input),
        Category::Classical => map(
            tuple((
                text,
                preceded(sep, text),
                preceded(sep, u16),
                preceded(sep, tail),
            )),
            |(artist, title, year, composer)| Classical::new(composer, artist, title, year).into(),
        )(input),
        Category::Dvd => map(
            tuple((text, preceded(sep, text), preceded(sep, u16))),
            |(director, title, year)| Dvd::new(director, title, year).into(),
        )(input),
    }
}

fn code(input: &str) -> IResult<&str, char> {
    preceded(space0, anychar)(input)
}

fn customer_id(input: &str) -> IResult<&str, CustomerId> {
    map(u32, CustomerId)(input)
}

fn sep(input: &str) -> IResult<&str, char> {
    delimited(space0, char(','), space0)(input)
}

/// A non-empty field that stops at the next comma
fn text(input: &str) -> IResult<&str, &str> {
    verify(map(is_not(",\r\n"), str::trim), |field: &str| !field.is_empty())(input)
}

/// A non-empty field that runs to the end of the line, commas included
fn tail(input: &str) -> IResult<&str, &str> {
    verify(map(not_line_ending, str::trim), |field: &str| !field.is_empty())(input)
}

#[cfg(test)]
mod tests {
    use super::{customer, item, stock, transaction};
    use crate::customer::{Customer, CustomerId};
    use crate::error::ParseError;
    use crate::item::{Classical, Dvd, Item, Rock};
    use crate::transaction::Transaction;

    #[test]
    fn test_customer() {
        assert_eq!(
            customer("123, Mouse, Mickey").unwrap(),
            Customer::new(CustomerId(123), "Mouse, Mickey")
        );
        assert_eq!(
            customer("  7 ,Ann  ").unwrap(),
            Customer::new(CustomerId(7), "Ann")
        );
        assert!(matches!(customer("abc, Ann"), Err(ParseError::Malformed(_))));
        assert!(matches!(customer("12,"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_stock_with_count() {
        let (item, count) = stock("R, 3, Metallica, Master of Puppets, 1986").unwrap();
        assert_eq!(
            item,
            Item::Rock(Rock::new("Metallica", "Master of Puppets", 1986))
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_stock_without_count() {
        let (item, count) = stock("D, Ridley Scott, Alien, 1979").unwrap();
        assert_eq!(item, Item::Dvd(Dvd::new("Ridley Scott", "Alien", 1979)));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_stock_classical() {
        let (item, count) =
            stock("C, 10, Glenn Gould, Goldberg Variations, 1981, Bach, Johann Sebastian")
                .unwrap();
        assert_eq!(
            item,
            Item::Classical(Classical::new(
                "Bach, Johann Sebastian",
                "Glenn Gould",
                "Goldberg Variations",
                1981
            ))
        );
        assert_eq!(count, 10);
    }

    #[test]
    fn test_stock_errors() {
        assert_eq!(
            stock("X, 1, Nobody, Nothing, 2000"),
            Err(ParseError::UnknownCode('X'))
        );
        assert!(matches!(
            stock("R, 1, Metallica, Master of Puppets"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            stock("R, 1, Metallica, Master of Puppets, 1986 bonus"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_item() {
        assert_eq!(
            item("R, Queen, Jazz, 1978").unwrap(),
            Item::Rock(Rock::new("Queen", "Jazz", 1978))
        );
    }

    #[test]
    fn test_transactions() {
        assert_eq!(
            transaction("P, 123, R, Metallica, Master of Puppets, 1986").unwrap(),
            Transaction::Purchase {
                customer: CustomerId(123),
                item: Rock::new("Metallica", "Master of Puppets", 1986).into(),
            }
        );
        assert_eq!(
            transaction("T, 9, D, Ridley Scott, Alien, 1979").unwrap(),
            Transaction::Trade {
                customer: CustomerId(9),
                item: Dvd::new("Ridley Scott", "Alien", 1979).into(),
            }
        );
        assert_eq!(
            transaction("H, 45").unwrap(),
            Transaction::History {
                customer: CustomerId(45)
            }
        );
        assert_eq!(transaction("A").unwrap(), Transaction::AllHistory);
        assert_eq!(transaction("I ").unwrap(), Transaction::Inventory);
    }

    #[test]
    fn test_transaction_errors() {
        assert_eq!(transaction("Z, 1"), Err(ParseError::UnknownCode('Z')));
        assert_eq!(
            transaction("P, 1, Q, Nobody, Nothing, 2000"),
            Err(ParseError::UnknownCode('Q'))
        );
        assert!(matches!(transaction("H"), Err(ParseError::Malformed(_))));
        assert!(matches!(transaction("P, x"), Err(ParseError::Malformed(_))));
    }
}
