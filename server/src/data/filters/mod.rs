//! Employee filter compiler
//!
//! Turns the client-supplied filter list (`field` / `operator` / `value`
//! triples plus an AND/OR logic mode) into a SQL `WHERE` fragment with
//! ordered bind parameters.
//!
//! ## Usage
//!
//! ```no_run
//! use staffdir_server::data::filters::{FilterLogic, compile, parse_filters};
//!
//! let json_str = r#"[{"field": "department", "operator": "inList", "value": "Sales, HR"}]"#;
//! let filters = parse_filters(json_str).unwrap();
//! let predicate = compile(&filters, FilterLogic::And).unwrap();
//! assert_eq!(predicate.sql, "(department IN (?, ?))");
//! ```

mod builder;
mod error;
mod fields;
mod parser;
mod types;

pub use builder::compile;
pub use error::FilterError;
pub use fields::{EmployeeField, FieldKind};
pub use parser::{MAX_FILTER_JSON_SIZE, MAX_FILTERS, parse_filters};
pub use types::{Filter, FilterLogic, FilterOp, Predicate, SqlParams, SqlValue};
