//! Co-occurrence recommendations.
//!
//! Products that appear in orders alongside anything the customer already
//! bought, ranked by how many such paths lead to them.

use anyhow::Result;
use neo4rs::{Query, Row};
use shopgraph_core::{Recommendation, RecommendationList};

use crate::GraphClient;

/// Number of recommendations returned when the caller gives no limit.
pub const DEFAULT_LIMIT: i64 = 5;

// count(*) counts traversal instances, not distinct orders. Ties fall back
// to product id so results are deterministic.
pub(crate) const RECOMMEND_CYPHER: &str = "MATCH (c:Customer {id: $customer_id})-[:PLACED]->(:Order)-[:CONTAINS]->(p:Product)
     MATCH (p)<-[:CONTAINS]-(:Order)-[:CONTAINS]->(rec:Product)
     WHERE NOT (c)-[:PLACED]->(:Order)-[:CONTAINS]->(rec)
     RETURN rec.id AS product_id, rec.name AS name, count(*) AS score
     ORDER BY score DESC, product_id ASC
     LIMIT $limit";

/// Recommend products for a customer.
///
/// An unknown customer, or one without orders, gets an empty list.
/// `limit` is forwarded to Cypher's LIMIT as given.
pub async fn recommend(client: &GraphClient, customer_id: i64, limit: i64) -> Result<RecommendationList> {
    let query = Query::new(RECOMMEND_CYPHER.to_string())
        .param("customer_id", customer_id)
        .param("limit", limit);

    let rows = client.query(query).await?;
    let recommendations = rows.iter().map(parse_recommendation).collect::<Result<Vec<_>>>()?;

    Ok(RecommendationList::new(customer_id, recommendations))
}

/// A product without a name property reads as an empty name; a name of the
/// wrong type is an error.
fn parse_recommendation(row: &Row) -> Result<Recommendation> {
    let product_id: i64 = row
        .get("product_id")
        .map_err(|e| anyhow::anyhow!("Failed to get field 'product_id': {:?}", e))?;
    let name: Option<String> = row
        .get("name")
        .map_err(|e| anyhow::anyhow!("Failed to get field 'name': {:?}", e))?;
    let score: i64 = row
        .get("score")
        .map_err(|e| anyhow::anyhow!("Failed to get field 'score': {:?}", e))?;

    Ok(Recommendation {
        product_id,
        name: name.unwrap_or_default(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo4rs::{BoltList, BoltNull, BoltType};

    fn row(name: BoltType) -> Row {
        let fields = BoltList::from(vec![
            BoltType::from("product_id"),
            BoltType::from("name"),
            BoltType::from("score"),
        ]);
        let data = BoltList::from(vec![BoltType::from(101i64), name, BoltType::from(5i64)]);
        Row::new(fields, data)
    }

    #[test]
    fn test_parses_recommendation_row() {
        let rec = parse_recommendation(&row(BoltType::from("Y"))).unwrap();
        assert_eq!(rec, Recommendation { product_id: 101, name: "Y".to_string(), score: 5 });
    }

    #[test]
    fn test_missing_name_reads_as_empty() {
        let rec = parse_recommendation(&row(BoltType::Null(BoltNull))).unwrap();
        assert_eq!(rec.name, "");
    }

    #[test]
    fn test_mistyped_name_is_an_error() {
        let err = parse_recommendation(&row(BoltType::from(42i64))).unwrap_err();
        assert!(err.to_string().contains("'name'"), "{}", err);
    }

    #[test]
    fn test_excludes_products_already_ordered() {
        assert!(RECOMMEND_CYPHER.contains("WHERE NOT (c)-[:PLACED]->(:Order)-[:CONTAINS]->(rec)"));
    }

    #[test]
    fn test_ranks_by_path_count_with_id_tiebreak() {
        assert!(RECOMMEND_CYPHER.contains("count(*) AS score"));
        assert!(RECOMMEND_CYPHER.contains("ORDER BY score DESC, product_id ASC"));
        assert!(RECOMMEND_CYPHER.trim_end().ends_with("LIMIT $limit"));
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(DEFAULT_LIMIT, 5);
    }
}
