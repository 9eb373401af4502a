// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the reading of knapsack instances from text files.
//!
//! The first meaningful line of a file gives the number of items and the
//! capacity of the sack. Each of the following lines describes one item with
//! its weight, its value and (optionally) the number of available copies.
//! Empty lines and lines starting with a '#' are ignored.
//!
//! ```plain
//! # weight value count
//! 3 10
//! 2 3 2
//! 3 4 3
//! 4 5 1
//! ```

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use knapsack::{BoundedItem, Instance, Item};

/// This enumeration simply groups the kind of errors that might occur when parsing a
/// knapsack instance from file. There can be io errors (file unavailable ?), format error
/// (e.g. the file is not an instance but contains the text of your next paper),
/// or parse int errors (which are actually a variant of the format error since it tells
/// you that the parser expected an integer number but got ... something else).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The file was not properly formatted.
    #[error("ill formed instance: {0}")]
    Format(String),
}

/// The content of an instance file. Items whose count was not specified
/// are available in one single copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInstance {
    pub capacity: usize,
    pub items: Vec<BoundedItem>,
    /// True iff every item line specified a count
    pub counted: bool,
}
impl RawInstance {
    /// Returns the instance seen as a 0-1 or unbounded instance.
    pub fn items(&self) -> Instance<Item> {
        Instance::new(self.items.iter().map(|i| i.unit()).collect(), self.capacity)
    }
    /// Returns the instance seen as a bounded instance.
    pub fn bounded(&self) -> Instance<BoundedItem> {
        Instance::new(self.items.clone(), self.capacity)
    }
}

/// This function is used to read a knapsack instance from file. It returns either a
/// knapsack instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<RawInstance, Error> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Parses a knapsack instance from any buffered reader.
pub fn parse_instance<R: BufRead>(reader: R) -> Result<RawInstance, Error> {
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push(line.to_string());
    }
    let mut lines = lines.iter();

    let header = lines.next().ok_or_else(|| Error::Format("missing header".to_string()))?;
    let header = parse_numbers(header)?;
    if header.len() != 2 {
        return Err(Error::Format(format!("expected '<nb_items> <capacity>', got {} fields", header.len())));
    }
    let nb_items = non_negative(header[0], "number of items")?;
    let capacity = non_negative(header[1], "capacity")?;

    let mut items = Vec::with_capacity(nb_items);
    let mut counted = true;
    for (i, line) in lines.enumerate() {
        let data = parse_numbers(line)?;
        let (weight, value, count) = match data[..] {
            [weight, value]        => { counted = false; (weight, value, 1) },
            [weight, value, count] => (weight, value, count),
            _ => return Err(Error::Format(format!("item {i}: expected '<weight> <value> [<count>]'"))),
        };
        let weight = non_negative(weight, "weight")?;
        let count  = non_negative(count, "count")?;
        items.push(BoundedItem::new(weight, value as isize, count));
    }
    if items.len() != nb_items {
        return Err(Error::Format(format!("expected {nb_items} items, got {}", items.len())));
    }

    Ok(RawInstance { capacity, items, counted })
}

/// Negative values are left for the solver to reject, all other fields must
/// be non negative.
fn parse_numbers(line: &str) -> Result<Vec<i64>, Error> {
    let mut numbers = vec![];
    for token in line.split_whitespace() {
        numbers.push(token.parse::<i64>()?);
    }
    Ok(numbers)
}

fn non_negative(x: i64, what: &str) -> Result<usize, Error> {
    usize::try_from(x).map_err(|_| Error::Format(format!("{what} must be non negative, got {x}")))
}
