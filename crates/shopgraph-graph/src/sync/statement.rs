//! Batched Cypher statements.
//!
//! Rows are kept as plain Rust values until execution so that a load can be
//! planned and inspected without a server.

use neo4rs::{BoltList, BoltMap, BoltString, BoltType, Query};

/// A single value bound into a batch row.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Param> for BoltType {
    fn from(param: Param) -> Self {
        match param {
            Param::Int(v) => BoltType::from(v),
            Param::Float(v) => BoltType::from(v),
            Param::Text(v) => BoltType::from(v),
        }
    }
}

/// One `UNWIND $rows` entry. Absent keys read as null in Cypher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamRow(Vec<(&'static str, Param)>);

impl ParamRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<Param>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    /// Like `with`, but a `None` leaves the key out so the property stays unset.
    pub fn with_opt<T: Into<Param>>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn into_bolt(self) -> BoltType {
        let mut map = BoltMap::new();
        for (key, value) in self.0 {
            map.put(BoltString::from(key), value.into());
        }
        BoltType::Map(map)
    }
}

/// A named Cypher statement, optionally fed a batch of rows as `$rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub name: String,
    pub cypher: String,
    pub rows: Option<Vec<ParamRow>>,
}

impl Statement {
    /// A statement with no parameters.
    pub fn plain(name: impl Into<String>, cypher: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cypher: cypher.into(),
            rows: None,
        }
    }

    /// An `UNWIND $rows AS r ...` batch.
    pub fn batch(name: impl Into<String>, cypher: impl Into<String>, rows: Vec<ParamRow>) -> Self {
        Self {
            name: name.into(),
            cypher: cypher.into(),
            rows: Some(rows),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.as_ref().map_or(0, Vec::len)
    }

    /// A batch with nothing to unwind is a no-op and can be skipped.
    pub fn is_empty_batch(&self) -> bool {
        matches!(&self.rows, Some(rows) if rows.is_empty())
    }

    /// Build the driver query, binding rows as a list of maps.
    pub fn to_query(&self) -> Query {
        let query = Query::new(self.cypher.clone());
        match &self.rows {
            Some(rows) => {
                let mut list = BoltList::with_capacity(rows.len());
                for row in rows {
                    list.push(row.clone().into_bolt());
                }
                query.param("rows", BoltType::List(list))
            }
            None => query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_row_lookup() {
        let row = ParamRow::new().with("id", 7i64).with("name", "Mug").with("price", 9.5);
        assert_eq!(row.get("id"), Some(&Param::Int(7)));
        assert_eq!(row.get("name"), Some(&Param::Text("Mug".to_string())));
        assert_eq!(row.get("price"), Some(&Param::Float(9.5)));
        assert_eq!(row.get("category_id"), None);
    }

    #[test]
    fn test_missing_optional_value_omits_key() {
        let row = ParamRow::new()
            .with("id", 4i64)
            .with_opt("name", None::<&str>)
            .with_opt("join_date", Some("2024-05-01"));
        assert_eq!(row.get("name"), None);
        assert_eq!(row.get("join_date"), Some(&Param::Text("2024-05-01".to_string())));
        assert_eq!(row.0.len(), 2);
    }

    #[test]
    fn test_empty_batch_detection() {
        let wipe = Statement::plain("wipe", "MATCH (n) DETACH DELETE n");
        assert!(!wipe.is_empty_batch());
        assert_eq!(wipe.row_count(), 0);

        let empty = Statement::batch("orders", "UNWIND $rows AS r RETURN r", Vec::new());
        assert!(empty.is_empty_batch());

        let full = Statement::batch("orders", "UNWIND $rows AS r RETURN r", vec![ParamRow::new().with("id", 1i64)]);
        assert!(!full.is_empty_batch());
        assert_eq!(full.row_count(), 1);
    }

    #[test]
    fn test_to_query_binds_rows() {
        let stmt = Statement::batch("customers", "UNWIND $rows AS r RETURN r", vec![ParamRow::new().with("id", 1i64)]);
        assert!(stmt.to_query().has_param_key("rows"));

        let wipe = Statement::plain("wipe", "MATCH (n) DETACH DELETE n");
        assert!(!wipe.to_query().has_param_key("rows"));
    }
}
