//! Module for printing rows of columns as an aligned text table.
//!
//! Call [TabularPrinter::row] once for each row, supplying every column as a separate element.
//! With all rows queued, call [TabularPrinter::output] (or [TabularPrinter::print]) to write the
//! table. Column widths are sized to the widest cell seen in each column over all rows, so
//! output only happens once every row has been added.
//!
//! ```
//! use esadmin::TabularPrinter;
//!
//! let mut table = TabularPrinter::new();
//! table.row(&[&"foo", &"bar"]);
//! table.row(&[&"bazinga"]);
//! assert_eq!(table.to_string(), "    foo      bar  \n    bazinga  \n");
//! ```
//!
mod structs;
mod functions;

pub use structs::*;
