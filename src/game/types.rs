//! Item and treasure identities.
//!
//! Player input is canonicalized into these enums once, at the prompt; past
//! that point no code compares item names as strings.

use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

/// Everything a hunter can carry in the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Water,
    Rope,
    Machete,
    Shovel,
    Horse,
    Boots,
    Boat,
    Sword,
}

impl ItemKind {
    /// Catalog order, as listed by the shop.
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Water,
        ItemKind::Rope,
        ItemKind::Machete,
        ItemKind::Shovel,
        ItemKind::Horse,
        ItemKind::Boots,
        ItemKind::Boat,
        ItemKind::Sword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Water => "water",
            ItemKind::Rope => "rope",
            ItemKind::Machete => "machete",
            ItemKind::Shovel => "shovel",
            ItemKind::Horse => "horse",
            ItemKind::Boots => "boots",
            ItemKind::Boat => "boat",
            ItemKind::Sword => "sword",
        }
    }

    /// Capitalized label used in the shop listing.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Water => "Water",
            ItemKind::Rope => "Rope",
            ItemKind::Machete => "Machete",
            ItemKind::Shovel => "Shovel",
            ItemKind::Horse => "Horse",
            ItemKind::Boots => "Boots",
            ItemKind::Boat => "Boat",
            ItemKind::Sword => "Sword",
        }
    }

    /// Items that snap when worn out; the rest are simply lost.
    pub fn breaks_on_wear(self) -> bool {
        matches!(self, ItemKind::Rope | ItemKind::Machete | ItemKind::Boat)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ItemKind::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownItem(wanted.to_string()))
    }
}

/// Treasures hidden in towns. Dust is found but never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    Dust,
}

impl Treasure {
    pub const ALL: [Treasure; 4] = [
        Treasure::Crown,
        Treasure::Trophy,
        Treasure::Gem,
        Treasure::Dust,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
            Treasure::Dust => "dust",
        }
    }

    pub fn is_collectible(self) -> bool {
        self != Treasure::Dust
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of offering a treasure to the hunter's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureOutcome {
    /// Stored in the first empty slot.
    Added,
    /// An identical treasure is already in the collection.
    AlreadyHeld,
    /// No empty slot remains.
    Full,
}
