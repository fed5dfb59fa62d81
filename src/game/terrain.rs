//! Obstacles surrounding a town and the item needed to cross them.

use rand::Rng;

use super::hunter::Hunter;
use super::narration::{Narration, Tone};
use super::types::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terrain {
    name: &'static str,
    needed: ItemKind,
}

/// The six terrains a town can be built on, all equally likely.
pub const TERRAINS: [Terrain; 6] = [
    Terrain::new("Mountains", ItemKind::Rope),
    Terrain::new("Ocean", ItemKind::Boat),
    Terrain::new("Plains", ItemKind::Horse),
    Terrain::new("Desert", ItemKind::Water),
    Terrain::new("Jungle", ItemKind::Machete),
    Terrain::new("Marsh", ItemKind::Boots),
];

impl Terrain {
    pub const fn new(name: &'static str, needed: ItemKind) -> Self {
        Terrain { name, needed }
    }

    /// Pick one of [`TERRAINS`] from a single uniform roll.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f64 = rng.gen();
        let idx = ((roll * TERRAINS.len() as f64) as usize).min(TERRAINS.len() - 1);
        TERRAINS[idx]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn needed_item(&self) -> ItemKind {
        self.needed
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed)
    }

    /// Description shown when exploring the surroundings.
    pub fn info_string(&self) -> Narration {
        let mut n = Narration::new();
        n.say("You scout the ")
            .tint(self.name, Tone::Cyan)
            .say(". You'll need a ")
            .tint(self.needed.name(), Tone::Purple)
            .say(" to get across.");
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_terrain_shows_up() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let t = Terrain::random(&mut rng);
            let idx = TERRAINS.iter().position(|c| *c == t).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "seen: {:?}", seen);
    }

    #[test]
    fn crossing_needs_the_item() {
        let marsh = Terrain::new("Marsh", ItemKind::Boots);
        let mut h = Hunter::new("ada", 20);
        assert!(!marsh.can_cross(&h));
        h.buy_item(ItemKind::Boots, 16);
        assert!(marsh.can_cross(&h));
        assert!(marsh.info_string().plain_text().contains("boots"));
    }
}
