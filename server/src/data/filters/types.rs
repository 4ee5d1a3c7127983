//! Filter type definitions
//!
//! A filter is a `{field, operator, value}` triple as sent by the client and
//! stored in presets. Field and operator stay as raw strings here so presets
//! round-trip exactly what was saved; they are resolved on compile.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::error::FilterError;
use super::fields::{EmployeeField, FieldKind};
use crate::utils::sql::{escape_like_pattern, placeholders};
use crate::utils::time::{DateValue, parse_date_value};

/// A single client filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Filter {
    /// Employee field name, e.g. `department` or `hireDate`
    pub field: String,
    /// Operator name, e.g. `contains` or `between`
    pub operator: String,
    /// Raw value; numbers and booleans are accepted and kept as text
    #[serde(default, deserialize_with = "value_as_string")]
    pub value: String,
}

fn value_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    InList,
}

impl FilterOp {
    /// Resolve an operator name. Unrecognized names behave as `equals`.
    pub fn parse(name: &str) -> Self {
        match name {
            "contains" => Self::Contains,
            "startsWith" => Self::StartsWith,
            "endsWith" => Self::EndsWith,
            "greaterThan" => Self::GreaterThan,
            "lessThan" => Self::LessThan,
            "greaterThanOrEqual" => Self::GreaterThanOrEqual,
            "lessThanOrEqual" => Self::LessThanOrEqual,
            "between" => Self::Between,
            "inList" => Self::InList,
            _ => Self::Equals,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::LessThanOrEqual => "lessThanOrEqual",
            Self::Between => "between",
            Self::InList => "inList",
        }
    }

    fn comparison_sql(&self) -> Option<&'static str> {
        match self {
            Self::Equals => Some("="),
            Self::GreaterThan => Some(">"),
            Self::LessThan => Some("<"),
            Self::GreaterThanOrEqual => Some(">="),
            Self::LessThanOrEqual => Some("<="),
            _ => None,
        }
    }
}

/// How conditions are combined
///
/// Only the exact string `OR` selects disjunction; anything else is `AND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterLogic {
    #[default]
    And,
    Or,
}

impl FilterLogic {
    pub fn parse(s: &str) -> Self {
        if s == "OR" { Self::Or } else { Self::And }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    pub(super) fn sql_joiner(&self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

impl From<String> for FilterLogic {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<FilterLogic> for String {
    fn from(logic: FilterLogic) -> Self {
        logic.as_str().to_string()
    }
}

/// A typed bind parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Real(f64),
    Integer(i64),
}

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<SqlValue>,
}

impl SqlParams {
    fn push(&mut self, value: SqlValue) {
        self.values.push(value);
    }
}

/// A compiled `WHERE` fragment with `?` placeholders and their values
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Predicate {
    pub fn match_all() -> Self {
        Self {
            sql: "1=1".to_string(),
            params: Vec::new(),
        }
    }
}

impl Filter {
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    /// Generate the SQL condition for this filter.
    /// Returns the clause with ? placeholders and appends to params.
    pub fn to_sql(&self, params: &mut SqlParams) -> Result<String, FilterError> {
        let field = EmployeeField::parse(&self.field)
            .ok_or_else(|| FilterError::UnknownField(self.field.clone()))?;
        let op = FilterOp::parse(&self.operator);
        match field.kind() {
            FieldKind::Text => self.text_sql(field.column(), op, params),
            FieldKind::Number => self.number_sql(field.column(), op, params),
            FieldKind::Date => self.date_sql(field.column(), op, params),
        }
    }

    /// Pattern operators use SQLite `LIKE`, which folds case for ASCII letters
    /// only: `engin` matches `Engineering` but `é` does not match `É`.
    fn text_sql(
        &self,
        col: &str,
        op: FilterOp,
        params: &mut SqlParams,
    ) -> Result<String, FilterError> {
        let like = |pattern: String, params: &mut SqlParams| {
            params.push(SqlValue::Text(pattern));
            format!("{} LIKE ? ESCAPE '\\'", col)
        };
        match op {
            FilterOp::Equals => {
                params.push(SqlValue::Text(self.value.clone()));
                Ok(format!("{} = ?", col))
            }
            FilterOp::Contains => Ok(like(format!("%{}%", escape_like_pattern(&self.value)), params)),
            FilterOp::StartsWith => Ok(like(format!("{}%", escape_like_pattern(&self.value)), params)),
            FilterOp::EndsWith => Ok(like(format!("%{}", escape_like_pattern(&self.value)), params)),
            FilterOp::InList => {
                let tokens = self.list_tokens()?;
                let sql = format!("{} IN ({})", col, placeholders(tokens.len()));
                for token in tokens {
                    params.push(SqlValue::Text(token.to_string()));
                }
                Ok(sql)
            }
            _ => Err(self.unsupported()),
        }
    }

    fn number_sql(
        &self,
        col: &str,
        op: FilterOp,
        params: &mut SqlParams,
    ) -> Result<String, FilterError> {
        if let Some(cmp) = op.comparison_sql() {
            let value = self.parse_number(&self.value)?;
            params.push(SqlValue::Real(value));
            return Ok(format!("{} {} ?", col, cmp));
        }
        match op {
            FilterOp::Between => {
                let (min, max) = self.range_tokens()?;
                let (min, max) = (self.parse_number(min)?, self.parse_number(max)?);
                params.push(SqlValue::Real(min));
                params.push(SqlValue::Real(max));
                Ok(format!("{} >= ? AND {} <= ?", col, col))
            }
            FilterOp::InList => {
                let values = self
                    .list_tokens()?
                    .into_iter()
                    .map(|t| self.parse_number(t))
                    .collect::<Result<Vec<_>, _>>()?;
                let sql = format!("{} IN ({})", col, placeholders(values.len()));
                params.values.extend(values.into_iter().map(SqlValue::Real));
                Ok(sql)
            }
            _ => Err(self.unsupported()),
        }
    }

    fn date_sql(
        &self,
        col: &str,
        op: FilterOp,
        params: &mut SqlParams,
    ) -> Result<String, FilterError> {
        match op {
            FilterOp::Equals => {
                let date = self.parse_date(&self.value)?;
                if date.start() == date.end() {
                    params.push(SqlValue::Integer(date.start()));
                    Ok(format!("{} = ?", col))
                } else {
                    params.push(SqlValue::Integer(date.start()));
                    params.push(SqlValue::Integer(date.end()));
                    Ok(format!("{} >= ? AND {} <= ?", col, col))
                }
            }
            // A bare day is a range: strict bounds exclude it, inclusive ones cover it
            FilterOp::GreaterThan => {
                let date = self.parse_date(&self.value)?;
                params.push(SqlValue::Integer(date.end()));
                Ok(format!("{} > ?", col))
            }
            FilterOp::GreaterThanOrEqual => {
                let date = self.parse_date(&self.value)?;
                params.push(SqlValue::Integer(date.start()));
                Ok(format!("{} >= ?", col))
            }
            FilterOp::LessThan => {
                let date = self.parse_date(&self.value)?;
                params.push(SqlValue::Integer(date.start()));
                Ok(format!("{} < ?", col))
            }
            FilterOp::LessThanOrEqual => {
                let date = self.parse_date(&self.value)?;
                params.push(SqlValue::Integer(date.end()));
                Ok(format!("{} <= ?", col))
            }
            FilterOp::Between => {
                let (min, max) = self.range_tokens()?;
                let (min, max) = (self.parse_date(min)?, self.parse_date(max)?);
                params.push(SqlValue::Integer(min.start()));
                params.push(SqlValue::Integer(max.end()));
                Ok(format!("{} >= ? AND {} <= ?", col, col))
            }
            _ => Err(self.unsupported()),
        }
    }

    /// Comma separated tokens, trimmed, empties dropped
    fn list_tokens(&self) -> Result<Vec<&str>, FilterError> {
        let tokens: Vec<&str> = self
            .value
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(self.invalid("expected at least one comma-separated value"));
        }
        Ok(tokens)
    }

    fn range_tokens(&self) -> Result<(&str, &str), FilterError> {
        let mut parts = self.value.split(',').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(min), Some(max), None) if !min.is_empty() && !max.is_empty() => Ok((min, max)),
            _ => Err(self.invalid("expected two comma-separated values")),
        }
    }

    fn parse_number(&self, token: &str) -> Result<f64, FilterError> {
        token
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.invalid("expected a number"))
    }

    fn parse_date(&self, token: &str) -> Result<DateValue, FilterError> {
        parse_date_value(token).ok_or_else(|| self.invalid("expected YYYY-MM-DD or RFC 3339 date"))
    }

    fn invalid(&self, reason: &'static str) -> FilterError {
        FilterError::InvalidValue {
            field: self.field.clone(),
            operator: self.operator.clone(),
            value: self.value.clone(),
            reason,
        }
    }

    fn unsupported(&self) -> FilterError {
        FilterError::UnsupportedOperator {
            field: self.field.clone(),
            operator: self.operator.clone(),
        }
    }
}
