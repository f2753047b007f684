use super::exchange::CurrencyRecord;

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Keeps the records whose id or name contains `query`, in input order.
pub fn filter_currencies(currencies: &[CurrencyRecord], query: &str) -> Vec<CurrencyRecord> {
    currencies
        .iter()
        .filter(|c| matches_query(&c.id, query) || matches_query(&c.name, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, min_size: &str) -> CurrencyRecord {
        CurrencyRecord {
            id: id.to_string(),
            name: name.to_string(),
            min_size: min_size.to_string(),
        }
    }

    fn sample() -> Vec<CurrencyRecord> {
        vec![
            record("BTC", "Bitcoin", "0.0001"),
            record("ETH", "Ethereum", "0.001"),
            record("USD", "United States Dollar", "0.01"),
            record("EUR", "Euro", "0.01"),
        ]
    }

    #[test]
    fn test_empty_query_returns_input() {
        let currencies = sample();
        assert_eq!(filter_currencies(&currencies, ""), currencies);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(filter_currencies(&[], "btc").is_empty());
        assert!(filter_currencies(&[], "").is_empty());
    }

    #[test]
    fn test_query_matches_id_or_name_case_insensitively() {
        let currencies = sample();

        let by_id = filter_currencies(&currencies, "eth");
        assert_eq!(by_id, vec![record("ETH", "Ethereum", "0.001")]);

        let by_name = filter_currencies(&currencies, "COIN");
        assert_eq!(by_name, vec![record("BTC", "Bitcoin", "0.0001")]);

        // "eu" hits "Ethereum" by name and "EUR" by id
        let ids: Vec<String> = filter_currencies(&currencies, "eu")
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["ETH", "EUR"]);
    }

    #[test]
    fn test_query_matching_nothing_returns_empty() {
        assert!(filter_currencies(&sample(), "doge").is_empty());
    }

    #[test]
    fn test_every_result_contains_query() {
        let currencies = sample();
        for query in ["", "e", "U", "st", "0.01", "Dollar", "zz"] {
            for c in filter_currencies(&currencies, query) {
                assert!(
                    matches_query(&c.id, query) || matches_query(&c.name, query),
                    "{c:?} does not match {query:?}"
                );
            }
        }
    }
}
