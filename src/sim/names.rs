use rand::{Rng, RngCore};

const PREFIXES: &[&str] = &[
    "Ald", "Ber", "Bran", "Cad", "Der", "Ed", "Fen", "Gar", "Hal", "Ing",
    "Jor", "Kel", "Leof", "Mar", "Nor", "Os", "Rag", "Sig", "Thur", "Ulf",
    "Vald", "Wil", "Yor", "Aeth", "Brom", "Cor", "Dun", "Ear", "Fal", "Grim",
];

const SUFFIXES: &[&str] = &[
    "ald", "ar", "bert", "frid", "gar", "helm", "mar", "mund", "ric", "stan",
    "ulf", "var", "wald", "win", "wyn",
];

/// Generate a first name for a spawned rebel leader.
pub fn generate_first_name(rng: &mut dyn RngCore) -> String {
    let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
    let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
    format!("{prefix}{suffix}")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn generates_nonempty_single_word() {
        let mut rng = SmallRng::seed_from_u64(42);
        let name = generate_first_name(&mut rng);
        assert!(!name.is_empty());
        assert!(!name.contains(' '), "first name only: {name}");
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        assert_eq!(
            generate_first_name(&mut rng1),
            generate_first_name(&mut rng2)
        );
    }
}
