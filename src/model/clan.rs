/// A mid-level group holding settlements inside a faction. Settlement
/// ownership is derived by scanning settlements, never cached here.
#[derive(Debug, Clone, PartialEq)]
pub struct Clan {
    pub id: u64,
    pub name: String,
    pub culture_id: u64,
    pub leader: Option<u64>,
    /// Parent faction. A clan with no kingdom is landless drift waiting for
    /// the cleanup pass.
    pub kingdom: Option<u64>,
    pub renown: u32,
    pub tier: u32,
    pub is_minor: bool,
    pub is_mercenary: bool,
    pub is_outlaw: bool,
}

impl Clan {
    pub fn new(id: u64, name: impl Into<String>, culture_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            culture_id,
            leader: None,
            kingdom: None,
            renown: 0,
            tier: 0,
            is_minor: false,
            is_mercenary: false,
            is_outlaw: false,
        }
    }

    pub fn add_renown(&mut self, amount: u32) {
        self.renown += amount;
    }
}
