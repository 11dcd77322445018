use std::collections::BTreeMap;

/// A troop type in a culture's upgrade tree. Upgrade targets form a DAG;
/// a unit may be reachable along more than one branch.
#[derive(Debug, Clone, PartialEq)]
pub struct TroopType {
    pub id: u64,
    pub name: String,
    pub upgrade_targets: Vec<u64>,
}

impl TroopType {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            upgrade_targets: Vec::new(),
        }
    }
}

/// Fraction of the seed count granted at each upgrade tier past the root.
const TIER_SEED_DIVISORS: [u32; 4] = [2, 2, 4, 8];

/// Expand a troop line into roster counts: the root unit at the full seed
/// count, then every branch of the upgrade tree to depth 4, each tier taking
/// a fixed fraction of the *seed* (not of its parent's count). Counts for a
/// unit reachable along several branches accumulate.
pub fn expand_cohort(
    troops: &BTreeMap<u64, TroopType>,
    root: u64,
    seed: u32,
) -> BTreeMap<u64, u32> {
    let mut counts = BTreeMap::new();
    *counts.entry(root).or_insert(0) += seed;
    expand_branch(troops, root, seed, 0, &mut counts);
    counts
}

fn expand_branch(
    troops: &BTreeMap<u64, TroopType>,
    unit: u64,
    seed: u32,
    depth: usize,
    counts: &mut BTreeMap<u64, u32>,
) {
    if depth >= TIER_SEED_DIVISORS.len() {
        return;
    }
    let Some(troop) = troops.get(&unit) else {
        return;
    };
    for &upgrade in &troop.upgrade_targets {
        *counts.entry(upgrade).or_insert(0) += seed / TIER_SEED_DIVISORS[depth];
        expand_branch(troops, upgrade, seed, depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(tiers: usize) -> (BTreeMap<u64, TroopType>, Vec<u64>) {
        let mut troops = BTreeMap::new();
        let ids: Vec<u64> = (1..=tiers as u64).collect();
        for (i, &id) in ids.iter().enumerate() {
            let mut t = TroopType::new(id, format!("tier{i}"));
            if let Some(&next) = ids.get(i + 1) {
                t.upgrade_targets.push(next);
            }
            troops.insert(id, t);
        }
        (troops, ids)
    }

    #[test]
    fn linear_chain_counts_per_tier() {
        let (troops, ids) = chain(5);
        let counts = expand_cohort(&troops, ids[0], 128);
        let got: Vec<u32> = ids.iter().map(|id| counts[id]).collect();
        assert_eq!(got, vec![128, 64, 64, 32, 16]);
    }

    #[test]
    fn expansion_stops_at_depth_four() {
        let (troops, ids) = chain(7);
        let counts = expand_cohort(&troops, ids[0], 128);
        assert_eq!(counts.len(), 5);
        assert!(!counts.contains_key(&ids[5]));
    }

    #[test]
    fn branches_expand_independently() {
        // Root upgrades into two tier-1 units; each gets seed/2, not a split.
        let mut troops = BTreeMap::new();
        let mut root = TroopType::new(1, "recruit");
        root.upgrade_targets = vec![2, 3];
        troops.insert(1, root);
        troops.insert(2, TroopType::new(2, "spearman"));
        troops.insert(3, TroopType::new(3, "archer"));

        let counts = expand_cohort(&troops, 1, 128);
        assert_eq!(counts[&1], 128);
        assert_eq!(counts[&2], 64);
        assert_eq!(counts[&3], 64);
    }

    #[test]
    fn shared_upgrade_target_accumulates() {
        let mut troops = BTreeMap::new();
        let mut root = TroopType::new(1, "recruit");
        root.upgrade_targets = vec![2, 3];
        troops.insert(1, root);
        for id in [2, 3] {
            let mut t = TroopType::new(id, "mid");
            t.upgrade_targets = vec![4];
            troops.insert(id, t);
        }
        troops.insert(4, TroopType::new(4, "veteran"));

        let counts = expand_cohort(&troops, 1, 128);
        // Reached from both tier-1 branches at tier 2: 64 + 64.
        assert_eq!(counts[&4], 128);
    }

    #[test]
    fn integer_division_never_goes_fractional() {
        let (troops, ids) = chain(5);
        let counts = expand_cohort(&troops, ids[0], 10);
        let got: Vec<u32> = ids.iter().map(|id| counts[id]).collect();
        assert_eq!(got, vec![10, 5, 5, 2, 1]);
    }

    #[test]
    fn unknown_root_yields_root_only() {
        let troops = BTreeMap::new();
        let counts = expand_cohort(&troops, 99, 64);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&99], 64);
    }
}
