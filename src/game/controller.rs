//! Game loop: welcome screen, town menu and the win/lose check.
//!
//! The controller owns everything that lives for the whole game (hunter,
//! session shop, current town and the RNG) and turns one menu choice at a time
//! into a [`TurnOutcome`]. Nothing here prints directly; every message goes
//! through the [`Console`].

use log::{info, warn};
use rand::Rng;

use super::errors::GameError;
use super::hunter::Hunter;
use super::narration::{Narration, Tone};
use super::session::{Mode, Session};
use super::shop::{Shop, Trade};
use super::town::{Brawl, Town};
use crate::config::RulesConfig;
use crate::console::{Console, LineSource, TextSink};

/// Name used when the player just presses enter.
pub const DEFAULT_HUNTER_NAME: &str = "hunter";

/// Result of a single turn. Anything but `Continue` ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Win,
    Loss,
    Quit,
}

impl TurnOutcome {
    pub fn is_terminal(self) -> bool {
        self != TurnOutcome::Continue
    }
}

/// Menu commands, one letter each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shop(Trade),
    Explore,
    Move,
    Trouble,
    Hunt,
    Dig,
    Exit,
}

impl Command {
    /// Parse a normalized menu token.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(trade) = Trade::from_command(token) {
            return Some(Command::Shop(trade));
        }
        match token {
            "e" => Some(Command::Explore),
            "m" => Some(Command::Move),
            "l" => Some(Command::Trouble),
            "h" => Some(Command::Hunt),
            "d" => Some(Command::Dig),
            "x" => Some(Command::Exit),
            _ => None,
        }
    }
}

const MENU: [(&str, Option<Tone>); 8] = [
    ("(B)uy something at the shop.", Some(Tone::Purple)),
    ("(S)ell something at the shop.", Some(Tone::Green)),
    ("(E)xplore surrounding terrain.", Some(Tone::Blue)),
    ("(M)ove on to a different town.", Some(Tone::Cyan)),
    ("(L)ook for trouble!", Some(Tone::Red)),
    ("(H)unt for treasure!", Some(Tone::Yellow)),
    ("(D)ig for gold", Some(Tone::BrightYellow)),
    ("Give up the hunt and e(X)it.", None),
];

pub struct GameController<R: Rng> {
    session: Session,
    hunter: Hunter,
    shop: Shop,
    town: Town,
    rng: R,
    news: Narration,
}

impl<R: Rng> GameController<R> {
    /// Start a game for `hunter`: build the session shop and the first town.
    pub fn new(hunter: Hunter, session: Session, mut rng: R) -> Self {
        let shop = Shop::for_session(&session);
        let town = Town::new(&session, &mut rng);
        let news = town.hunter_arrives(&hunter);
        info!(
            "game started: hunter={} mode={:?} gold={}",
            hunter.name(),
            session.mode,
            hunter.gold()
        );
        GameController {
            session,
            hunter,
            shop,
            town,
            rng,
            news,
        }
    }

    /// Run the welcome screen: ask for a name and a mode, then set up the game.
    pub fn welcome<I: LineSource, O: TextSink>(
        console: &mut Console<I, O>,
        rules: &RulesConfig,
        rng: R,
    ) -> Result<Self, GameError> {
        let mut banner = Narration::new();
        banner
            .say("Welcome to TREASURE HUNTER!\n")
            .say("Going hunting for the big treasure, eh?\n")
            .say("What's your name, Hunter? ");
        let mut name = console.ask(&banner)?;
        if name.is_empty() {
            name = DEFAULT_HUNTER_NAME.to_string();
        }

        let token = console.ask(&Narration::plain("Select game mode (e/n/h/s): "))?;
        let mode = Mode::from_token(&token);
        if mode == Mode::Samurai {
            let mut activated = Narration::new();
            activated.tint("\nSamurai mode has been activated...\n", Tone::Red);
            console.show(&activated)?;
        }

        let session = Session::from_mode(mode, rules);
        let mut hunter = Hunter::with_capacity(name, session.starting_gold, session.kit_capacity);
        if session.stocks_test_kit() {
            hunter.stock_test_kit(session.starting_gold);
        }
        Ok(Self::new(hunter, session, rng))
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Message shown at the top of the next menu.
    pub fn news(&self) -> &Narration {
        &self.news
    }

    /// Put the hunter in `town` and greet them there.
    pub fn relocate(&mut self, town: Town) {
        self.town = town;
        self.news = self.town.hunter_arrives(&self.hunter);
    }

    /// News, hunter status, town info and the menu, ending with the prompt.
    pub fn status_screen(&self) -> Narration {
        let mut screen = Narration::plain("\n");
        screen.append(self.news.clone());
        screen.say("\n***\n");
        screen.append(self.hunter.info_string());
        screen.say("\n");
        screen.append(self.town.info_string());
        screen.say("\n");
        for (line, tone) in MENU {
            match tone {
                Some(tone) => screen.tint(format!("{}\n", line), tone),
                None => screen.say(format!("{}\n", line)),
            };
        }
        screen.say("\nWhat's your next move? ");
        screen
    }

    /// Carry out one menu choice. Unknown choices change nothing.
    pub fn process_choice<I: LineSource, O: TextSink>(
        &mut self,
        choice: &str,
        console: &mut Console<I, O>,
    ) -> Result<TurnOutcome, GameError> {
        let Some(command) = Command::parse(choice) else {
            self.news = Narration::plain("Yikes! That's an invalid option! Try again.");
            return Ok(TurnOutcome::Continue);
        };

        match command {
            Command::Shop(trade) => {
                self.news = self
                    .town
                    .enter_shop(&self.shop, &mut self.hunter, trade, console)?;
            }
            Command::Explore => {
                self.news = self.town.terrain().info_string();
            }
            Command::Move => {
                let (left, mut report) = self.town.leave_town(&mut self.hunter, &mut self.rng);
                if left {
                    let next = Town::new(&self.session, &mut self.rng);
                    self.relocate(next);
                    report.say("\n").append(std::mem::take(&mut self.news));
                }
                self.news = report;
            }
            Command::Trouble => {
                let (brawl, report) = self.town.look_for_trouble(&mut self.hunter, &mut self.rng);
                self.news = report;
                if let Brawl::Ruined { owed } = brawl {
                    info!("{} could not pay {} gold", self.hunter.name(), owed);
                    return Ok(TurnOutcome::Loss);
                }
            }
            Command::Hunt => {
                let (_, report) = self.town.hunt_for_treasure(&mut self.hunter);
                self.news = report;
                if self.hunter.treasures_full() {
                    return Ok(TurnOutcome::Win);
                }
            }
            Command::Dig => {
                let (_, report) = self.town.dig_for_gold(&mut self.hunter, &mut self.rng);
                self.news = report;
            }
            Command::Exit => {
                self.news = Narration::new();
                return Ok(TurnOutcome::Quit);
            }
        }
        Ok(TurnOutcome::Continue)
    }

    /// Closing narration for a terminal outcome.
    pub fn ending(&self, outcome: TurnOutcome) -> Narration {
        let mut n = Narration::new();
        match outcome {
            TurnOutcome::Win => {
                n.say("\nWow, you've found every treasure in this realm!\n\n")
                    .tint(
                        "You return home, riches and treasure in hand. You leave your trusty shovel by the door, curling up into your chair by the fireplace.\n\
                         But one day, perhaps more treasures will arise, waiting to be found by a brave adventurer...\n",
                        Tone::Cyan,
                    )
                    .tint("\n\nTHE END\n", Tone::White);
            }
            TurnOutcome::Loss => {
                n.tint(
                    "\nYou didn't have enough gold to pay off your losses, and you lose the game.\n",
                    Tone::Red,
                );
            }
            TurnOutcome::Quit => {
                n.say(format!("\nFare thee well, {}!\n", self.hunter.name()));
            }
            TurnOutcome::Continue => {}
        }
        n
    }

    /// Loop over menu turns until the game ends. Closed input ends it as a quit.
    pub fn run<I: LineSource, O: TextSink>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<TurnOutcome, GameError> {
        let outcome = match self.turns(console) {
            Err(GameError::InputClosed) => {
                warn!("input closed; ending the game");
                TurnOutcome::Quit
            }
            other => other?,
        };
        console.show(&self.ending(outcome))?;
        info!(
            "game over: {:?} hunter={} gold={} treasures={}",
            outcome,
            self.hunter.name(),
            self.hunter.gold(),
            self.hunter.treasures().count()
        );
        Ok(outcome)
    }

    fn turns<I: LineSource, O: TextSink>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<TurnOutcome, GameError> {
        loop {
            let choice = console.ask(&self.status_screen())?;
            let outcome = self.process_choice(&choice, console)?;
            if outcome.is_terminal() {
                console.show(&self.news)?;
                return Ok(outcome);
            }
        }
    }
}

/// Play one full game on `console`, from the welcome screen to the end.
pub fn play<I, O, R>(
    console: &mut Console<I, O>,
    rules: &RulesConfig,
    rng: R,
) -> Result<TurnOutcome, GameError>
where
    I: LineSource,
    O: TextSink,
    R: Rng,
{
    let mut game = match GameController::welcome(console, rules, rng) {
        Ok(game) => game,
        Err(GameError::InputClosed) => {
            warn!("input closed during the welcome screen");
            return Ok(TurnOutcome::Quit);
        }
        Err(e) => return Err(e),
    };
    game.run(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Recorder, ScriptedInput};
    use crate::game::terrain::Terrain;
    use crate::game::types::{ItemKind, Treasure};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn console(lines: &[&str]) -> Console<ScriptedInput, Recorder> {
        Console::new(ScriptedInput::new(lines.iter().copied()), Recorder::new())
    }

    fn normal_game(gold: u32) -> GameController<StdRng> {
        let session = Session::from_mode(Mode::Normal, &RulesConfig::default());
        GameController::new(Hunter::new("ada", gold), session, StdRng::seed_from_u64(7))
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Command::parse("b"), Some(Command::Shop(Trade::Buy)));
        assert_eq!(Command::parse("s"), Some(Command::Shop(Trade::Sell)));
        assert_eq!(Command::parse("d"), Some(Command::Dig));
        assert_eq!(Command::parse("x"), Some(Command::Exit));
        assert_eq!(Command::parse("q"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn invalid_choice_changes_nothing() {
        let mut game = normal_game(20);
        let mut c = console(&[]);
        let outcome = game.process_choice("zz", &mut c).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue);
        assert_eq!(game.hunter().gold(), 20);
        assert!(game.news().plain_text().contains("invalid option"));
    }

    #[test]
    fn exit_quits_with_farewell() {
        let mut game = normal_game(20);
        let mut c = console(&["x"]);
        assert_eq!(game.run(&mut c).unwrap(), TurnOutcome::Quit);
        assert!(c.output().text().contains("Fare thee well, ada!"));
    }

    #[test]
    fn status_screen_lists_menu() {
        let game = normal_game(20);
        let text = game.status_screen().plain_text();
        assert!(text.contains("Welcome to town, ada."));
        assert!(text.contains("***"));
        assert!(text.contains("ada has 20 gold"));
        assert!(text.contains("(D)ig for gold"));
        assert!(text.ends_with("What's your next move? "));
    }

    #[test]
    fn hunting_the_last_treasure_wins() {
        let mut game = normal_game(20);
        let session = game.session().clone();
        let gem_town = Town::with_layout(&session, Terrain::new("Plains", ItemKind::Horse), false, Treasure::Gem);
        game.relocate(gem_town);
        let mut c = console(&[]);
        for treasure in [Treasure::Crown, Treasure::Trophy] {
            game.hunter.add_treasure(treasure);
        }
        assert_eq!(game.process_choice("h", &mut c).unwrap(), TurnOutcome::Win);
        assert!(game.ending(TurnOutcome::Win).plain_text().contains("THE END"));
    }

    #[test]
    fn welcome_reads_name_and_mode() {
        let mut c = console(&["  Musashi ", "S"]);
        let game = GameController::welcome(&mut c, &RulesConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.hunter().name(), "musashi");
        assert_eq!(game.session().mode, Mode::Samurai);
        assert_eq!(game.hunter().capacity(), 8);
        assert!(c.output().text().contains("Samurai mode has been activated"));
    }

    #[test]
    fn blank_name_falls_back() {
        let mut c = console(&["", "n"]);
        let game = GameController::welcome(&mut c, &RulesConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.hunter().name(), DEFAULT_HUNTER_NAME);
        assert_eq!(game.hunter().gold(), 20);
    }
}
