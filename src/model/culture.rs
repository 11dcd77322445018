/// A culture groups settlements, characters and troop lines. The two troop
/// line roots are the seeds for army genesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Culture {
    pub id: u64,
    pub name: String,
    /// Root of the basic troop upgrade tree.
    pub basic_troop: u64,
    /// Root of the elite (noble) troop upgrade tree.
    pub elite_troop: u64,
}

impl Culture {
    pub fn new(id: u64, name: impl Into<String>, basic_troop: u64, elite_troop: u64) -> Self {
        Self {
            id,
            name: name.into(),
            basic_troop,
            elite_troop,
        }
    }
}

/// A stockable item. Armies only care whether it is food.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub is_food: bool,
}
