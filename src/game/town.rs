//! One visit to one town.
//!
//! A town is built with its terrain, toughness and hidden treasure already
//! rolled. The treasure hunt and the gold dig can each happen once per town;
//! both flags die with the town when the hunter moves on.

use log::{debug, info};
use rand::Rng;

use super::errors::GameError;
use super::hunter::Hunter;
use super::narration::{Narration, Tone};
use super::session::Session;
use super::shop::{Shop, Trade};
use super::terrain::Terrain;
use super::types::{ItemKind, Treasure, TreasureOutcome};
use crate::console::{Console, LineSource, TextSink};

/// Chance of finding no fight in a tough town.
pub const TOUGH_NO_TROUBLE: f64 = 0.66;
/// Chance of finding no fight in a sleepy town.
pub const CALM_NO_TROUBLE: f64 = 0.33;
/// Chance that the crossing item wears out.
pub const ITEM_WEAR_CHANCE: f64 = 0.5;
/// Chance that digging turns up gold.
pub const DIG_SUCCESS_CHANCE: f64 = 0.5;
pub const MAX_BRAWL_STAKE: u32 = 10;
pub const MAX_DIG_GOLD: u32 = 20;
/// Upper bound (in percent) of the losing threshold re-rolled in easy mode.
const EASY_LOSS_CEILING: u32 = 25;

/// Outcome of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brawl {
    /// Nobody wanted to fight.
    Quiet,
    Won { gold: u32 },
    Lost { gold: u32 },
    /// Lost a fight the hunter cannot pay for; the game is over.
    Ruined { owed: u32 },
}

/// Outcome of searching the town for its treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hunt {
    AlreadySearched,
    /// Found dust, which nobody keeps.
    Dust,
    Found(Treasure, TreasureOutcome),
}

impl Hunt {
    /// True when the collection grew.
    pub fn collected(self) -> bool {
        matches!(self, Hunt::Found(_, TreasureOutcome::Added))
    }
}

/// Outcome of digging for gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dig {
    NoShovel,
    AlreadyDug,
    Nothing,
    Struck { gold: u32 },
}

#[derive(Debug, Clone)]
pub struct Town {
    terrain: Terrain,
    tough: bool,
    treasure: Treasure,
    searched: bool,
    dug: bool,
    easy: bool,
}

fn roll<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen()
}

/// Uniform integer in `1..=max` from a single roll.
fn roll_upto<R: Rng + ?Sized>(rng: &mut R, max: u32) -> u32 {
    ((roll(rng) * f64::from(max)) as u32).min(max - 1) + 1
}

impl Town {
    /// Roll a fresh town: terrain, then toughness, then treasure.
    pub fn new<R: Rng + ?Sized>(session: &Session, rng: &mut R) -> Self {
        let terrain = Terrain::random(rng);
        let tough = roll(rng) < session.toughness;
        let idx = ((roll(rng) * Treasure::ALL.len() as f64) as usize).min(Treasure::ALL.len() - 1);
        let town = Self::with_layout(session, terrain, tough, Treasure::ALL[idx]);
        info!(
            "new town: terrain={} tough={}",
            town.terrain.name(),
            town.tough
        );
        debug!("town treasure: {}", town.treasure);
        town
    }

    /// Build a town with everything already decided.
    pub fn with_layout(session: &Session, terrain: Terrain, tough: bool, treasure: Treasure) -> Self {
        Town {
            terrain,
            tough,
            treasure,
            searched: false,
            dug: false,
            easy: session.easy,
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    pub fn is_searched(&self) -> bool {
        self.searched
    }

    pub fn is_dug(&self) -> bool {
        self.dug
    }

    /// Greeting for a hunter walking into town.
    pub fn hunter_arrives(&self, hunter: &Hunter) -> Narration {
        let mut n = Narration::new();
        n.say(format!("Welcome to town, {}.", hunter.name()));
        if self.tough {
            n.tint("\nIt's pretty rough around here, so watch yourself.", Tone::Red);
        } else {
            n.tint(
                "\nWe're just a sleepy little town with mild mannered folk.",
                Tone::Green,
            );
        }
        n
    }

    /// Try to cross the surrounding terrain. Returns whether the hunter got out.
    pub fn leave_town<R: Rng + ?Sized>(&self, hunter: &mut Hunter, rng: &mut R) -> (bool, Narration) {
        let item = self.terrain.needed_item();
        if !self.terrain.can_cross(hunter) {
            let n = Narration::plain(format!(
                "You can't leave town, {}. You don't have a {}.",
                hunter.name(),
                item
            ));
            return (false, n);
        }

        let mut n = Narration::new();
        n.say(format!("You used your {} to cross the ", item))
            .tint(self.terrain.name(), Tone::Cyan)
            .say(".");
        if !self.easy && roll(rng) < ITEM_WEAR_CHANCE {
            hunter.remove_item(item);
            if item.breaks_on_wear() {
                n.say(format!("\nUnfortunately, your {} broke.", item));
            } else {
                n.say(format!("\nUnfortunately, you lost your {}.", item));
            }
            info!("{} wore out crossing the {}", item, self.terrain.name());
        }
        (true, n)
    }

    /// Hand the hunter over to the session shop.
    pub fn enter_shop<I: LineSource, O: TextSink>(
        &self,
        shop: &Shop,
        hunter: &mut Hunter,
        trade: Trade,
        console: &mut Console<I, O>,
    ) -> Result<Narration, GameError> {
        shop.enter(hunter, trade, console)
    }

    /// Pick a fight for gold. Tough towns find fights more easily.
    pub fn look_for_trouble<R: Rng + ?Sized>(
        &self,
        hunter: &mut Hunter,
        rng: &mut R,
    ) -> (Brawl, Narration) {
        let no_trouble = if self.tough {
            TOUGH_NO_TROUBLE
        } else {
            CALM_NO_TROUBLE
        };
        if roll(rng) > no_trouble {
            return (Brawl::Quiet, Narration::plain("You couldn't find any trouble"));
        }

        let mut n = Narration::new();
        n.tint(
            "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n",
            Tone::Red,
        );
        let stake = roll_upto(rng, MAX_BRAWL_STAKE);
        let wins = if hunter.has_item(ItemKind::Sword) {
            n.tint("*Your sword flashes and the brawl is over before it began.*\n", Tone::Purple);
            true
        } else {
            let threshold = if self.easy {
                f64::from(roll_upto(rng, EASY_LOSS_CEILING)) / 100.0
            } else {
                no_trouble
            };
            roll(rng) > threshold
        };

        if wins {
            n.say("Okay, stranger! You proved yer mettle. Here, take my gold.")
                .say("\nYou won the brawl and receive ")
                .tint(stake.to_string(), Tone::Yellow)
                .say(" gold.");
            hunter.change_gold(stake as i32);
            info!("{} won a brawl for {} gold", hunter.name(), stake);
            return (Brawl::Won { gold: stake }, n);
        }

        n.tint(
            "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
            Tone::Red,
        );
        if hunter.gold() < stake {
            info!(
                "{} lost a brawl owing {} with only {} gold",
                hunter.name(),
                stake,
                hunter.gold()
            );
            return (Brawl::Ruined { owed: stake }, n);
        }
        n.say("\nYou lost the brawl and pay ")
            .tint(stake.to_string(), Tone::Red)
            .say(" gold.");
        hunter.change_gold(-(stake as i32));
        info!("{} lost a brawl and paid {} gold", hunter.name(), stake);
        (Brawl::Lost { gold: stake }, n)
    }

    /// Search for this town's treasure. Only the first search counts.
    pub fn hunt_for_treasure(&mut self, hunter: &mut Hunter) -> (Hunt, Narration) {
        if self.searched {
            return (
                Hunt::AlreadySearched,
                Narration::plain("You have already searched this town for treasure."),
            );
        }
        self.searched = true;

        let mut n = Narration::new();
        n.say("You found a ")
            .tint(self.treasure.name(), Tone::Yellow)
            .say("!");
        if !self.treasure.is_collectible() {
            n.say("\nBut you don't need that...");
            return (Hunt::Dust, n);
        }

        let outcome = hunter.add_treasure(self.treasure);
        match outcome {
            TreasureOutcome::Added => n.say("\nWhat a neat thing to find!"),
            TreasureOutcome::AlreadyHeld => n.say("\nBut you already have one."),
            TreasureOutcome::Full => n.say("\nBut there's not enough space to keep that."),
        };
        info!("{} found a {}: {:?}", hunter.name(), self.treasure, outcome);
        (Hunt::Found(self.treasure, outcome), n)
    }

    /// Dig for gold with a shovel, once per town.
    pub fn dig_for_gold<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> (Dig, Narration) {
        if !hunter.has_item(ItemKind::Shovel) {
            return (
                Dig::NoShovel,
                Narration::plain("You can't dig for gold without a shovel."),
            );
        }
        if self.dug {
            return (
                Dig::AlreadyDug,
                Narration::plain("You already dug for gold in this town."),
            );
        }
        self.dug = true;

        if roll(rng) < DIG_SUCCESS_CHANCE {
            let gold = roll_upto(rng, MAX_DIG_GOLD);
            hunter.change_gold(gold as i32);
            let mut n = Narration::new();
            n.say("You dug up ")
                .tint(gold.to_string(), Tone::Yellow)
                .say(" gold!");
            info!("{} dug up {} gold", hunter.name(), gold);
            (Dig::Struck { gold }, n)
        } else {
            (Dig::Nothing, Narration::plain("You dug but only found dirt."))
        }
    }

    /// Short description of the town's surroundings.
    pub fn info_string(&self) -> Narration {
        let mut n = Narration::new();
        n.say("This nice little town is surrounded by ")
            .tint(self.terrain.name(), Tone::Cyan)
            .say(".");
        n
    }
}
