//! The general store: one fixed catalog shared by every town.
//!
//! The shop is built once per session and reused as the hunter moves from
//! town to town. Its prices never change; the only per-session knobs are the
//! markdown applied when buying back, whether swords are stocked, and the
//! easy-mode rule that buys items back at full catalog price.

use log::info;

use super::errors::GameError;
use super::hunter::Hunter;
use super::narration::{Narration, Tone};
use super::session::Session;
use super::types::ItemKind;
use crate::console::{Console, LineSource, TextSink};

/// Which side of the counter the hunter is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trade {
    Buy,
    Sell,
}

impl Trade {
    /// `b` buys, `s` sells.
    pub fn from_command(cmd: &str) -> Option<Self> {
        match cmd {
            "b" => Some(Trade::Buy),
            "s" => Some(Trade::Sell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    markdown: f64,
    sword_enabled: bool,
    easy_sell: bool,
}

impl Shop {
    pub fn new(markdown: f64, sword_enabled: bool, easy_sell: bool) -> Self {
        Shop {
            markdown,
            sword_enabled,
            easy_sell,
        }
    }

    pub fn for_session(session: &Session) -> Self {
        Self::new(session.markdown, session.sword_enabled, session.easy)
    }

    /// Catalog price, or `None` when the item is not stocked.
    pub fn catalog_price(&self, item: ItemKind) -> Option<u32> {
        match item {
            ItemKind::Water => Some(2),
            ItemKind::Rope => Some(4),
            ItemKind::Machete => Some(6),
            ItemKind::Shovel => Some(8),
            ItemKind::Horse => Some(12),
            ItemKind::Boots => Some(16),
            ItemKind::Boat => Some(20),
            ItemKind::Sword if self.sword_enabled => Some(0),
            ItemKind::Sword => None,
        }
    }

    /// Price to buy (catalog) or to sell (catalog times markdown, rounded down).
    pub fn price_of(&self, item: ItemKind, trade: Trade) -> Option<u32> {
        let base = self.catalog_price(item)?;
        match trade {
            Trade::Buy => Some(base),
            Trade::Sell => Some((f64::from(base) * self.markdown).floor() as u32),
        }
    }

    /// What the shop actually pays for `item`, honoring the easy-mode rule.
    pub fn buy_back_price(&self, item: ItemKind) -> Option<u32> {
        if self.easy_sell {
            self.price_of(item, Trade::Buy)
        } else {
            self.price_of(item, Trade::Sell)
        }
    }

    /// Catalog listing with prices.
    pub fn inventory(&self) -> Narration {
        let mut n = Narration::new();
        n.say("\n");
        for item in ItemKind::ALL {
            let Some(price) = self.catalog_price(item) else {
                continue;
            };
            if item == ItemKind::Sword {
                n.tint(format!("{}: ", item.label()), Tone::Red);
            } else {
                n.say(format!("{}: ", item.label()));
            }
            n.tint(format!("{} gold\n", price), Tone::Yellow);
        }
        n
    }

    /// Ring up a purchase at catalog price.
    pub fn buy_item(&self, hunter: &mut Hunter, item: ItemKind) -> Narration {
        let cost = self.price_of(item, Trade::Buy).map_or(-1, |p| p as i32);
        if hunter.buy_item(item, cost) {
            info!("{} bought a {} ({} gold left)", hunter.name(), item, hunter.gold());
            Narration::plain(format!("\nYe' got yerself a {}. Come again soon.", item))
        } else {
            Narration::plain(
                "\nHmm, either you don't have enough gold or you've already got one of those!",
            )
        }
    }

    /// Buy an item back from the hunter.
    pub fn sell_item(&self, hunter: &mut Hunter, item: ItemKind) -> Narration {
        let price = self.buy_back_price(item).map_or(-1, |p| p as i32);
        if hunter.sell_item(item, price) {
            info!("{} sold a {} ({} gold now)", hunter.name(), item, hunter.gold());
            Narration::plain("\nPleasure doin' business with you.")
        } else {
            Narration::plain("\nStop stringin' me along!")
        }
    }

    /// Walk the hunter through one transaction at the counter.
    pub fn enter<I: LineSource, O: TextSink>(
        &self,
        hunter: &mut Hunter,
        trade: Trade,
        console: &mut Console<I, O>,
    ) -> Result<Narration, GameError> {
        let mut result = match trade {
            Trade::Buy => self.buying(hunter, console)?,
            Trade::Sell => self.selling(hunter, console)?,
        };
        result.say("\nYou left the shop");
        Ok(result)
    }

    fn buying<I: LineSource, O: TextSink>(
        &self,
        hunter: &mut Hunter,
        console: &mut Console<I, O>,
    ) -> Result<Narration, GameError> {
        let mut greeting = Narration::new();
        greeting
            .say("\nWelcome to the shop! We have the finest wares in town.")
            .say("\nCurrently we have the following items:")
            .append(self.inventory());
        greeting.say("What're you lookin' to buy? ");
        let answer = console.ask(&greeting)?;

        let quoted = answer
            .parse::<ItemKind>()
            .ok()
            .and_then(|item| self.price_of(item, Trade::Buy).map(|p| (item, p)));
        let Some((item, mut cost)) = quoted else {
            return Ok(Narration::plain("\nWe ain't got none of those."));
        };

        let mut quote = Narration::new();
        if item == ItemKind::Sword {
            quote
                .tint(
                    "\n\nStrange, where'd that little thing come from... That sword's givin' me the creeps.",
                    Tone::Purple,
                )
                .say("\nI'm feelin' polite. Have it for free.\n");
        }
        if hunter.has_item(ItemKind::Sword) {
            quote
                .tint("\n*The shopkeeper seems intimidated by your sword.*", Tone::Red)
                .say("\nYe' can have it fer free. It's on the house.\n");
            cost = 0;
        }
        quote.say(format!("It'll cost you {} gold. Buy it (y/n)? ", cost));
        if console.ask(&quote)? == "y" {
            Ok(self.buy_item(hunter, item))
        } else {
            Ok(Narration::new())
        }
    }

    fn selling<I: LineSource, O: TextSink>(
        &self,
        hunter: &mut Hunter,
        console: &mut Console<I, O>,
    ) -> Result<Narration, GameError> {
        let mut greeting = Narration::new();
        greeting
            .say("\nWhat're you lookin' to sell? ")
            .say("You currently have the following items: ")
            .append(hunter.inventory());
        greeting.say("\n");
        let answer = console.ask(&greeting)?;

        let quoted = answer
            .parse::<ItemKind>()
            .ok()
            .and_then(|item| self.buy_back_price(item).map(|p| (item, p)));
        let Some((item, price)) = quoted else {
            return Ok(Narration::plain("\nWe don't want none of those."));
        };

        let quote = Narration::plain(format!("\nIt'll get you {} gold. Sell it (y/n)? ", price));
        if console.ask(&quote)? == "y" {
            Ok(self.sell_item(hunter, item))
        } else {
            Ok(Narration::new())
        }
    }
}
