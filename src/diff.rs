//! Comparison of two perft listings, "mine" versus a trusted "stock" run.

use crate::listing::Record;
use serde::Serialize;
use std::collections::HashMap;

/// A token whose value differs between the two listings.
///
/// `stock: None` means the token never appeared in the stock listing. A
/// token present only in stock arrives with `mine` as the empty string;
/// the text rendering keeps this asymmetry (`(S)None` versus an empty `(M)`
/// side) because downstream tooling matches on the legacy format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub token: String,
    pub mine: String,
    pub stock: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DiffReport {
    /// Distinct tokens seen across both listings.
    pub total: usize,
    /// Tokens whose values agreed.
    pub matching: usize,
    pub discrepancies: Vec<Discrepancy>,
}

impl DiffReport {
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Legacy report lines, one per discrepancy, in first-seen token order.
    pub fn lines(&self) -> Vec<String> {
        self.discrepancies
            .iter()
            .map(|d| match &d.stock {
                Some(s) => format!("{}: (M){} -> (S){}", d.token, d.mine, s),
                None => format!("{}: (M){} -> (S)None", d.token, d.mine),
            })
            .collect()
    }
}

/// Compares the two listings token by token.
///
/// Report order is first-seen order: all of `mine` in sequence, then any
/// stock-only tokens in the order stock introduces them. An unordered map
/// here would scramble the report against reference output.
pub fn diff(mine: &[Record], stock: &[Record]) -> DiffReport {
    let mut entries: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in mine {
        match index.get(r.token.as_str()) {
            // Duplicate token in mine: the later value wins, position stays.
            Some(&i) => entries[i].1 = vec![r.value.as_str()],
            None => {
                index.insert(&r.token, entries.len());
                entries.push((r.token.as_str(), vec![r.value.as_str()]));
            }
        }
    }

    for r in stock {
        match index.get(r.token.as_str()) {
            Some(&i) => entries[i].1.push(r.value.as_str()),
            None => {
                index.insert(&r.token, entries.len());
                entries.push((r.token.as_str(), vec!["", r.value.as_str()]));
            }
        }
    }

    let mut discrepancies = Vec::new();
    let mut matching = 0usize;
    for (token, values) in &entries {
        match values.as_slice() {
            [only] => discrepancies.push(Discrepancy {
                token: token.to_string(),
                mine: only.to_string(),
                stock: None,
            }),
            [m, s, ..] if m != s => discrepancies.push(Discrepancy {
                token: token.to_string(),
                mine: m.to_string(),
                stock: Some(s.to_string()),
            }),
            _ => matching += 1,
        }
    }

    DiffReport {
        total: entries.len(),
        matching,
        discrepancies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(token: &str, value: &str) -> Record {
        Record {
            token: token.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn equal_values_are_suppressed() {
        let report = diff(&[rec("e2e4", "20")], &[rec("e2e4", "20")]);
        assert!(report.is_clean());
        assert_eq!(report.total, 1);
        assert_eq!(report.matching, 1);
    }

    #[test]
    fn mismatched_value() {
        let report = diff(&[rec("e2e4", "20")], &[rec("e2e4", "21")]);
        assert_eq!(report.lines(), vec!["e2e4: (M)20 -> (S)21"]);
    }

    #[test]
    fn token_only_in_mine() {
        let report = diff(&[rec("e2e4", "20")], &[]);
        assert_eq!(report.lines(), vec!["e2e4: (M)20 -> (S)None"]);
    }

    #[test]
    fn token_only_in_stock_keeps_empty_mine_side() {
        let report = diff(&[], &[rec("d7d5", "14")]);
        assert_eq!(report.lines(), vec!["d7d5: (M) -> (S)14"]);
    }

    #[test]
    fn report_order_is_first_seen_across_both_inputs() {
        let mine = [rec("a2a3", "1"), rec("b2b3", "2")];
        let stock = [rec("c2c3", "3"), rec("b2b3", "9"), rec("d2d3", "4")];
        let report = diff(&mine, &stock);
        let tokens: Vec<&str> = report
            .discrepancies
            .iter()
            .map(|d| d.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["a2a3", "b2b3", "c2c3", "d2d3"]);
    }
}
