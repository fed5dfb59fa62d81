mod common;

use common::{scripted_console, ScriptedRng};
use rand::rngs::StdRng;
use rand::SeedableRng;
use treasure_hunter::config::RulesConfig;
use treasure_hunter::game::{
    play, GameController, Hunter, ItemKind, Mode, Session, Terrain, Town, Treasure, TurnOutcome,
};

fn rules() -> RulesConfig {
    RulesConfig::default()
}

#[test]
fn test_mode_session_digs_then_quits() {
    let mut console = scripted_console(&["Ada", "test", "e", "d", "d", "q?", "x"]);
    let outcome = play(&mut console, &rules(), StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(outcome, TurnOutcome::Quit);

    let out = console.output().text();
    assert!(out.contains("Welcome to TREASURE HUNTER!"));
    assert!(out.contains("ada has 100 gold"));
    assert!(out.contains("You scout the"));
    assert!(out.contains("You already dug for gold in this town."));
    assert!(out.contains("Yikes! That's an invalid option! Try again."));
    assert!(out.trim_end().ends_with("Fare thee well, ada!"));
    assert_eq!(console.input().remaining(), 0);
}

#[test]
fn closed_input_is_a_quit() {
    let mut console = scripted_console(&[]);
    assert_eq!(
        play(&mut console, &rules(), StdRng::seed_from_u64(1)).unwrap(),
        TurnOutcome::Quit
    );

    let mut console = scripted_console(&["ada", "n", "b"]);
    assert_eq!(
        play(&mut console, &rules(), StdRng::seed_from_u64(1)).unwrap(),
        TurnOutcome::Quit
    );
    assert!(console.output().text().contains("What're you lookin' to buy?"));
}

#[test]
fn shop_round_trip_through_the_menu() {
    let mut console = scripted_console(&["ada", "n", "b", "rope", "y", "s", "rope", "y", "x"]);
    let mut game =
        GameController::welcome(&mut console, &rules(), StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(game.run(&mut console).unwrap(), TurnOutcome::Quit);
    assert_eq!(game.hunter().gold(), 18);
    assert!(!game.hunter().has_item(ItemKind::Rope));
    let out = console.output().text();
    assert!(out.contains("Ye' got yerself a rope. Come again soon."));
    assert!(out.contains("It'll get you 2 gold. Sell it (y/n)? "));
}

#[test]
fn unpayable_brawl_loses_the_game() {
    let session = Session::from_mode(Mode::Normal, &rules());
    // first town: Desert, tough, gem; then trouble, stake 5, lost
    let rng = ScriptedRng::new(&[0.5, 0.1, 0.5, 0.5, 0.45, 0.6]);
    let mut game = GameController::new(Hunter::new("ada", 3), session, rng);
    assert_eq!(game.town().terrain().name(), "Desert");
    assert!(game.town().is_tough());

    let mut console = scripted_console(&["l"]);
    assert_eq!(game.run(&mut console).unwrap(), TurnOutcome::Loss);
    assert_eq!(game.hunter().gold(), 3);
    assert!(console
        .output()
        .text()
        .contains("You didn't have enough gold to pay off your losses, and you lose the game."));
}

#[test]
fn third_treasure_wins() {
    let session = Session::from_mode(Mode::Normal, &rules());
    let mut game = GameController::new(Hunter::new("ada", 20), session.clone(), StdRng::seed_from_u64(3));
    let mut console = scripted_console(&[]);
    for treasure in [Treasure::Crown, Treasure::Trophy] {
        game.relocate(Town::with_layout(&session, Terrain::new("Plains", ItemKind::Horse), false, treasure));
        assert_eq!(game.process_choice("h", &mut console).unwrap(), TurnOutcome::Continue);
    }
    game.relocate(Town::with_layout(&session, Terrain::new("Ocean", ItemKind::Boat), false, Treasure::Gem));

    let mut console = scripted_console(&["h"]);
    assert_eq!(game.run(&mut console).unwrap(), TurnOutcome::Win);
    assert!(game.hunter().treasures_full());
    let out = console.output().text();
    assert!(out.contains("Wow, you've found every treasure in this realm!"));
    assert!(out.contains("THE END"));
}

#[test]
fn moving_builds_a_fresh_town() {
    let session = Session::from_mode(Mode::Normal, &rules());
    // Mountains, calm, crown; crossing keeps the rope; Ocean, calm, gem
    let rng = ScriptedRng::new(&[0.0, 0.9, 0.0, 0.9, 0.2, 0.9, 0.5]);
    let mut hunter = Hunter::new("ada", 20);
    hunter.buy_item(ItemKind::Rope, 4);
    let mut game = GameController::new(hunter, session, rng);
    assert_eq!(game.town().terrain().name(), "Mountains");

    let mut console = scripted_console(&[]);
    game.process_choice("m", &mut console).unwrap();
    assert_eq!(game.town().terrain().name(), "Ocean");
    assert!(!game.town().is_searched());
    assert!(game.hunter().has_item(ItemKind::Rope));
    let news = game.news().plain_text();
    assert!(news.contains("You used your rope to cross the Mountains."));
    assert!(news.contains("Welcome to town, ada."));
}

#[test]
fn leaving_without_the_item_stays_put() {
    let session = Session::from_mode(Mode::Normal, &rules());
    let rng = ScriptedRng::new(&[0.0, 0.9, 0.0]);
    let mut game = GameController::new(Hunter::new("ada", 20), session, rng);
    let mut console = scripted_console(&[]);
    game.process_choice("m", &mut console).unwrap();
    assert_eq!(game.town().terrain().name(), "Mountains");
    assert!(game.news().plain_text().contains("You don't have a rope."));
}
