//! Recursive vote aggregation over nested region trees.

use serde::{Deserialize, Serialize};

/// One node of an externally supplied region tree. `sub_regions` may be
/// absent in the source JSON; it deserializes to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionNode {
    pub name: String,
    pub votes: i64,
    #[serde(default)]
    pub sub_regions: Vec<RegionNode>,
}

/// Sum the votes of a region and everything nested below it. An absent tree
/// counts as zero. The input is never stored or mutated; each call walks the
/// tree it was given and nothing else.
pub fn count_votes_in_regions(tree: Option<&RegionNode>) -> i64 {
    let tree = match tree {
        Some(tree) => tree,
        None => return 0,
    };

    let mut total = tree.votes;
    for sub in &tree.sub_regions {
        total += count_votes_in_regions(Some(sub));
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, votes: i64) -> RegionNode {
        RegionNode {
            name: name.to_string(),
            votes,
            sub_regions: Vec::new(),
        }
    }

    #[test]
    fn absent_tree_counts_zero() {
        assert_eq!(count_votes_in_regions(None), 0);
    }

    #[test]
    fn single_region_counts_its_own_votes() {
        assert_eq!(count_votes_in_regions(Some(&leaf("Rampur", 42))), 42);
    }

    #[test]
    fn nested_regions_sum_recursively() {
        let district = RegionNode {
            name: "District".to_string(),
            votes: 5,
            sub_regions: vec![leaf("Block A", 3), leaf("Block B", 2)],
        };

        assert_eq!(count_votes_in_regions(Some(&district)), 10);
    }

    #[test]
    fn deep_trees_reach_every_level() {
        let tree = RegionNode {
            name: "State".to_string(),
            votes: 1,
            sub_regions: vec![RegionNode {
                name: "District".to_string(),
                votes: 2,
                sub_regions: vec![RegionNode {
                    name: "Block".to_string(),
                    votes: 3,
                    sub_regions: vec![leaf("Village", 4)],
                }],
            }],
        };

        assert_eq!(count_votes_in_regions(Some(&tree)), 10);
    }

    #[test]
    fn missing_sub_regions_deserialize_as_empty() {
        let tree: RegionNode =
            serde_json::from_str(r#"{"name": "Solo", "votes": 7}"#).unwrap();
        assert!(tree.sub_regions.is_empty());
        assert_eq!(count_votes_in_regions(Some(&tree)), 7);
    }

    #[test]
    fn aggregation_leaves_the_input_untouched() {
        let tree = RegionNode {
            name: "District".to_string(),
            votes: 5,
            sub_regions: vec![leaf("Block A", 3)],
        };
        let before = tree.clone();

        let _ = count_votes_in_regions(Some(&tree));
        assert_eq!(tree, before);
    }
}
