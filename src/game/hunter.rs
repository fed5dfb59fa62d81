//! The player character: purse, kit and treasure collection.

use log::debug;

use super::narration::{Narration, Tone};
use super::types::{ItemKind, Treasure, TreasureOutcome};

/// Default number of kit slots.
pub const DEFAULT_KIT_CAPACITY: usize = 7;
/// Number of distinct treasures needed to win.
pub const TREASURE_SLOTS: usize = 3;

/// Kit handed out by test mode.
const TEST_KIT: [ItemKind; 7] = [
    ItemKind::Water,
    ItemKind::Rope,
    ItemKind::Machete,
    ItemKind::Horse,
    ItemKind::Boat,
    ItemKind::Boots,
    ItemKind::Shovel,
];

#[derive(Debug, Clone)]
pub struct Hunter {
    name: String,
    gold: u32,
    kit: Vec<ItemKind>,
    capacity: usize,
    treasures: [Option<Treasure>; TREASURE_SLOTS],
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: u32) -> Self {
        Self::with_capacity(name, starting_gold, DEFAULT_KIT_CAPACITY)
    }

    pub fn with_capacity(name: impl Into<String>, starting_gold: u32, capacity: usize) -> Self {
        Hunter {
            name: name.into(),
            gold: starting_gold,
            kit: Vec::with_capacity(capacity),
            capacity,
            treasures: [None; TREASURE_SLOTS],
        }
    }

    /// Replace the kit with the full test-mode loadout and set the purse.
    pub fn stock_test_kit(&mut self, gold: u32) {
        self.gold = gold;
        self.kit = TEST_KIT.to_vec();
        self.capacity = self.capacity.max(TEST_KIT.len());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn kit(&self) -> &[ItemKind] {
        &self.kit
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Collected treasures in slot order.
    pub fn treasures(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.treasures.iter().flatten().copied()
    }

    /// Add `delta` to the purse; the purse never drops below zero.
    pub fn change_gold(&mut self, delta: i32) {
        let next = (i64::from(self.gold) + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        self.gold = next as u32;
    }

    /// Buy `item` for `cost` gold.
    ///
    /// Anyone carrying a sword pays nothing. Fails without touching the purse or
    /// kit when the cost is negative, the purse is short, the item is already
    /// held, or the kit has no free slot.
    pub fn buy_item(&mut self, item: ItemKind, cost: i32) -> bool {
        let cost = if self.has_item(ItemKind::Sword) { 0 } else { cost };
        if cost < 0 || i64::from(self.gold) < i64::from(cost) || self.has_item(item) {
            return false;
        }
        if self.kit_is_full() {
            return false;
        }
        self.gold -= cost as u32;
        self.kit.push(item);
        debug!("{} bought {} for {} gold", self.name, item, cost);
        true
    }

    /// Sell `item` back for `price` gold. Requires a positive price and the item in the kit.
    pub fn sell_item(&mut self, item: ItemKind, price: i32) -> bool {
        if price <= 0 || !self.has_item(item) {
            return false;
        }
        self.change_gold(price);
        self.remove_item(item);
        debug!("{} sold {} for {} gold", self.name, item, price);
        true
    }

    /// Drop an item from the kit. Returns whether it was held.
    pub fn remove_item(&mut self, item: ItemKind) -> bool {
        match self.kit.iter().position(|held| *held == item) {
            Some(idx) => {
                self.kit.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, item: ItemKind) -> bool {
        self.kit.contains(&item)
    }

    pub fn kit_is_full(&self) -> bool {
        self.kit.len() >= self.capacity
    }

    /// Scan slots left to right: the first empty slot takes the treasure, unless
    /// an identical treasure shows up first.
    pub fn add_treasure(&mut self, treasure: Treasure) -> TreasureOutcome {
        for slot in self.treasures.iter_mut() {
            match *slot {
                None => {
                    *slot = Some(treasure);
                    return TreasureOutcome::Added;
                }
                Some(held) if held == treasure => return TreasureOutcome::AlreadyHeld,
                Some(_) => {}
            }
        }
        TreasureOutcome::Full
    }

    pub fn treasures_full(&self) -> bool {
        self.treasures.iter().all(Option::is_some)
    }

    /// Kit contents, one purple word per item.
    pub fn inventory(&self) -> Narration {
        let mut n = Narration::new();
        for item in &self.kit {
            n.tint(format!("{} ", item), Tone::Purple);
        }
        n
    }

    /// Status block shown above the menu.
    pub fn info_string(&self) -> Narration {
        let mut n = Narration::new();
        n.tint(format!("{} has ", self.name), Tone::Cyan)
            .tint(format!("{} gold", self.gold), Tone::Yellow);
        if !self.kit.is_empty() {
            n.say(" and ").append(self.inventory());
        }
        n.say("\n").say(self.collected_treasures());
        n
    }

    fn collected_treasures(&self) -> String {
        let mut out = String::from("Treasures found: ");
        if self.treasures().next().is_none() {
            out.push_str("none");
        } else {
            for treasure in self.treasures() {
                out.push_str(&format!("a {} ", treasure));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_deducts_and_stores() {
        let mut h = Hunter::new("ada", 20);
        assert!(h.buy_item(ItemKind::Rope, 4));
        assert_eq!(h.gold(), 16);
        assert!(h.has_item(ItemKind::Rope));
    }

    #[test]
    fn buy_refusals_leave_no_trace() {
        let mut h = Hunter::new("ada", 10);
        assert!(h.buy_item(ItemKind::Water, 2));
        // negative cost, too expensive, duplicate
        for (item, cost) in [(ItemKind::Rope, -1), (ItemKind::Boat, 20), (ItemKind::Water, 1)] {
            assert!(!h.buy_item(item, cost), "{:?} for {} should fail", item, cost);
            assert_eq!(h.gold(), 8);
            assert_eq!(h.kit(), &[ItemKind::Water]);
        }
    }

    #[test]
    fn buy_refused_when_kit_full() {
        let mut h = Hunter::with_capacity("ada", 100, 2);
        assert!(h.buy_item(ItemKind::Water, 2));
        assert!(h.buy_item(ItemKind::Rope, 4));
        assert!(!h.buy_item(ItemKind::Boat, 20));
        assert_eq!(h.gold(), 94);
        assert_eq!(h.kit().len(), 2);
    }

    #[test]
    fn sword_makes_everything_free() {
        let mut h = Hunter::with_capacity("musashi", 5, 8);
        assert!(h.buy_item(ItemKind::Sword, 0));
        assert!(h.buy_item(ItemKind::Boat, 20));
        assert!(h.buy_item(ItemKind::Horse, 999));
        assert_eq!(h.gold(), 5);
    }

    #[test]
    fn sell_requires_item_and_positive_price() {
        let mut h = Hunter::new("ada", 0);
        assert!(!h.sell_item(ItemKind::Rope, 2));
        assert!(h.buy_item(ItemKind::Rope, 0));
        assert!(!h.sell_item(ItemKind::Rope, 0));
        assert!(h.sell_item(ItemKind::Rope, 2));
        assert_eq!(h.gold(), 2);
        assert!(!h.has_item(ItemKind::Rope));
    }

    #[test]
    fn gold_floors_at_zero() {
        let mut h = Hunter::new("ada", 3);
        h.change_gold(-10);
        assert_eq!(h.gold(), 0);
        h.change_gold(7);
        assert_eq!(h.gold(), 7);
    }

    #[test]
    fn treasure_slots_fill_then_report_full() {
        let mut h = Hunter::new("ada", 0);
        assert_eq!(h.add_treasure(Treasure::Gem), TreasureOutcome::Added);
        assert_eq!(h.add_treasure(Treasure::Gem), TreasureOutcome::AlreadyHeld);
        assert_eq!(h.treasures().count(), 1);
        assert!(!h.treasures_full());
        assert_eq!(h.add_treasure(Treasure::Crown), TreasureOutcome::Added);
        assert_eq!(h.add_treasure(Treasure::Trophy), TreasureOutcome::Added);
        assert!(h.treasures_full());
        assert_eq!(h.add_treasure(Treasure::Dust), TreasureOutcome::Full);
        assert_eq!(
            h.treasures().collect::<Vec<_>>(),
            vec![Treasure::Gem, Treasure::Crown, Treasure::Trophy]
        );
    }

    #[test]
    fn info_string_lists_kit_and_treasures() {
        let mut h = Hunter::new("ada", 12);
        assert_eq!(
            h.info_string().plain_text(),
            "ada has 12 gold\nTreasures found: none"
        );
        h.buy_item(ItemKind::Shovel, 8);
        h.add_treasure(Treasure::Crown);
        let text = h.info_string().plain_text();
        assert_eq!(text, "ada has 4 gold and shovel \nTreasures found: a crown ");
    }

    #[test]
    fn test_kit_is_fully_stocked() {
        let mut h = Hunter::new("dev", 20);
        h.stock_test_kit(100);
        assert_eq!(h.gold(), 100);
        assert_eq!(h.kit().len(), 7);
        assert!(h.has_item(ItemKind::Shovel));
        assert!(!h.has_item(ItemKind::Sword));
        assert!(h.kit_is_full());
    }
}
