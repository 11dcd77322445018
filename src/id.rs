/// Monotonic ID generator shared by every entity store in the world.
///
/// One counter for all kinds, so a character and a troop type can never
/// collide — which lets an army roster carry its leader's character ID
/// alongside troop type IDs.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
