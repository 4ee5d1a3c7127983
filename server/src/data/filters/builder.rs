//! Predicate builder
//!
//! Combines per-filter conditions into a single parenthesised `WHERE`
//! fragment.

use super::error::FilterError;
use super::types::{Filter, FilterLogic, Predicate, SqlParams};

/// Compile a filter list into a predicate.
///
/// Conditions are joined with `AND` or `OR` per `logic`. An empty list
/// matches every row. The first invalid filter aborts compilation.
pub fn compile(filters: &[Filter], logic: FilterLogic) -> Result<Predicate, FilterError> {
    if filters.is_empty() {
        return Ok(Predicate::match_all());
    }

    let mut params = SqlParams::default();
    let conditions = filters
        .iter()
        .map(|f| f.to_sql(&mut params).map(|sql| format!("({})", sql)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Predicate {
        sql: conditions.join(logic.sql_joiner()),
        params: params.values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::SqlValue;

    #[test]
    fn empty_filters_match_all() {
        for logic in [FilterLogic::And, FilterLogic::Or] {
            let predicate = compile(&[], logic).unwrap();
            assert_eq!(predicate.sql, "1=1");
            assert!(predicate.params.is_empty());
        }
    }

    #[test]
    fn single_filter_is_parenthesised() {
        let predicate = compile(
            &[Filter::new("department", "inList", "Sales, HR")],
            FilterLogic::And,
        )
        .unwrap();
        assert_eq!(predicate.sql, "(department IN (?, ?))");
    }

    #[test]
    fn and_joins_conditions_in_order() {
        let filters = vec![
            Filter::new("salary", "between", "40000,80000"),
            Filter::new("status", "equals", "Active"),
        ];
        let predicate = compile(&filters, FilterLogic::And).unwrap();
        assert_eq!(
            predicate.sql,
            "(salary >= ? AND salary <= ?) AND (status = ?)"
        );
        assert_eq!(
            predicate.params,
            vec![
                SqlValue::Real(40000.0),
                SqlValue::Real(80000.0),
                SqlValue::Text("Active".into())
            ]
        );
    }

    #[test]
    fn or_joins_conditions() {
        let filters = vec![
            Filter::new("department", "equals", "Sales"),
            Filter::new("age", "lessThan", "30"),
        ];
        let predicate = compile(&filters, FilterLogic::Or).unwrap();
        assert_eq!(predicate.sql, "(department = ?) OR (age < ?)");
    }

    #[test]
    fn compile_is_deterministic() {
        let filters = vec![
            Filter::new("email", "contains", "example"),
            Filter::new("hireDate", "greaterThan", "2020-01-01"),
        ];
        assert_eq!(
            compile(&filters, FilterLogic::Or).unwrap(),
            compile(&filters, FilterLogic::Or).unwrap()
        );
    }

    #[test]
    fn first_error_aborts() {
        let filters = vec![
            Filter::new("status", "equals", "Active"),
            Filter::new("ssn", "equals", "123"),
        ];
        assert_eq!(
            compile(&filters, FilterLogic::And),
            Err(FilterError::UnknownField("ssn".into()))
        );
    }
}
