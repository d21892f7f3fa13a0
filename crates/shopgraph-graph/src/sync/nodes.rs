//! Node batches.
//!
//! Creates nodes (merged by id):
//! - (:Customer {id, name, join_date})
//! - (:Category {id, name})
//! - (:Product {id, name, price})-[:IN_CATEGORY]->(:Category)
//! - (:Order {id, ts})

use shopgraph_db::queries::catalog::{CategoryRow, ProductRow};
use shopgraph_db::queries::customers::CustomerRow;
use shopgraph_db::queries::orders::OrderRow;

use super::statement::{ParamRow, Statement};

pub(crate) const MERGE_CUSTOMERS: &str = "UNWIND $rows AS r
     MERGE (c:Customer {id: r.id})
     SET c.name = r.name,
         c.join_date = r.join_date";

pub(crate) const MERGE_CATEGORIES: &str = "UNWIND $rows AS r
     MERGE (c:Category {id: r.id})
     SET c.name = r.name";

// Rows without a matching category drop out at the MATCH, after their
// Product node has been merged.
pub(crate) const MERGE_PRODUCTS: &str = "UNWIND $rows AS r
     MERGE (p:Product {id: r.id})
     SET p.name = r.name,
         p.price = r.price
     WITH p, r
     MATCH (c:Category {id: r.category_id})
     MERGE (p)-[:IN_CATEGORY]->(c)";

pub(crate) const MERGE_ORDERS: &str = "UNWIND $rows AS r
     MERGE (o:Order {id: r.id})
     SET o.ts = r.ts";

pub fn customers(rows: &[CustomerRow]) -> Statement {
    let rows = rows
        .iter()
        .map(|c| {
            ParamRow::new()
                .with("id", c.id)
                .with_opt("name", c.name.as_deref())
                .with_opt("join_date", c.join_date.as_deref())
        })
        .collect();
    Statement::batch("customers", MERGE_CUSTOMERS, rows)
}

pub fn categories(rows: &[CategoryRow]) -> Statement {
    let rows = rows
        .iter()
        .map(|c| ParamRow::new().with("id", c.id).with_opt("name", c.name.as_deref()))
        .collect();
    Statement::batch("categories", MERGE_CATEGORIES, rows)
}

pub fn products(rows: &[ProductRow]) -> Statement {
    let rows = rows
        .iter()
        .map(|p| {
            ParamRow::new()
                .with("id", p.id)
                .with_opt("name", p.name.as_deref())
                .with_opt("price", p.price)
                .with_opt("category_id", p.category_id)
        })
        .collect();
    Statement::batch("products", MERGE_PRODUCTS, rows)
}

pub fn orders(rows: &[OrderRow]) -> Statement {
    let rows = rows
        .iter()
        .map(|o| ParamRow::new().with("id", o.id).with_opt("ts", o.ts.as_deref()))
        .collect();
    Statement::batch("orders", MERGE_ORDERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::statement::Param;

    #[test]
    fn test_products_without_category_omit_the_key() {
        let stmt = products(&[
            ProductRow { id: 1, name: Some("Kettle".to_string()), price: Some(24.5), category_id: Some(3) },
            ProductRow { id: 2, name: Some("Loose".to_string()), price: None, category_id: None },
        ]);

        let rows = stmt.rows.as_ref().unwrap();
        assert_eq!(rows[0].get("category_id"), Some(&Param::Int(3)));
        assert_eq!(rows[0].get("price"), Some(&Param::Float(24.5)));
        assert_eq!(rows[1].get("category_id"), None);
        assert_eq!(rows[1].get("price"), None);
    }

    #[test]
    fn test_nodes_merge_on_id_only() {
        for cypher in [MERGE_CUSTOMERS, MERGE_CATEGORIES, MERGE_PRODUCTS, MERGE_ORDERS] {
            assert!(cypher.contains("{id: r.id})"), "{}", cypher);
        }
    }

    #[test]
    fn test_customer_rows_carry_all_properties() {
        let stmt = customers(&[CustomerRow {
            id: 1,
            name: Some("A".to_string()),
            join_date: Some("2024-01-01".to_string()),
        }]);

        let row = &stmt.rows.as_ref().unwrap()[0];
        assert_eq!(row.get("id"), Some(&Param::Int(1)));
        assert_eq!(row.get("name"), Some(&Param::Text("A".to_string())));
        assert_eq!(row.get("join_date"), Some(&Param::Text("2024-01-01".to_string())));
    }

    #[test]
    fn test_null_columns_still_produce_nodes() {
        let stmt = customers(&[CustomerRow { id: 4, name: None, join_date: None }]);
        let row = &stmt.rows.as_ref().unwrap()[0];
        assert_eq!(row.get("id"), Some(&Param::Int(4)));
        assert_eq!(row.get("name"), None);
        assert_eq!(row.get("join_date"), None);

        let stmt = orders(&[OrderRow { id: 10, customer_id: None, ts: None }]);
        assert_eq!(stmt.row_count(), 1);
        assert_eq!(stmt.rows.as_ref().unwrap()[0].get("ts"), None);
    }
}
