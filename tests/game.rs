//! Game integration tests.

use std::collections::HashSet;

use bjsolo::{
    Card, DECK_SIZE, Deck, Game, Narration, Outcome, Rank, RoundPhase, RoundRecord, Seat,
    Suit, TableOptions, Termination,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Options that leave the deck in the order it was stacked.
fn unshuffled() -> TableOptions {
    TableOptions::default().with_max_shuffle_count(0)
}

fn stacked_game(options: TableOptions, wallet: i64, draws: &[Card]) -> Game {
    Game::with_deck(
        options,
        wallet,
        Deck::from_cards(draws.to_vec()),
        ChaCha8Rng::seed_from_u64(0),
    )
}

#[test]
fn player_blackjack_beats_dealer_seventeen() {
    let mut game = stacked_game(
        unshuffled(),
        10,
        &[
            card(Rank::Ten, Suit::Clubs),     // player
            card(Rank::Queen, Suit::Clubs),   // dealer
            card(Rank::Ace, Suit::Clubs),     // player
            card(Rank::Seven, Suit::Diamonds), // dealer
            card(Rank::Two, Suit::Hearts),
        ],
    );

    let mut records: Vec<RoundRecord> = Vec::new();
    let summary = game.play_rounds(1, 15, &mut records).unwrap();

    assert_eq!(
        game.log(),
        "Round 1 of Blackjack!\n\
         wallet: 10\n\
         bet: 5\n\
         Player Cards: (10, clubs) (A, clubs)\n\
         Dealer Cards: (Q, clubs) (?, ?)\n\
         Dealer Cards Revealed: (7, diamonds) (Q, clubs)\n\
         Player won with a score of 21. Dealer lost with a score of 17.\n"
    );
    assert_eq!(summary.termination, Termination::Completed);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(game.wallet(), 15);
    assert_eq!(game.bet(), 10);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.phase(), RoundPhase::Idle);

    let record = &records[0];
    assert_eq!(record.round, 1);
    assert_eq!(record.outcome, Outcome::PlayerWin);
    assert_eq!(record.player_score, 21);
    assert_eq!(record.dealer_score, 17);
    assert!(record.dealer_hand.iter().all(Card::is_visible));
}

#[test]
fn loss_leaves_wallet_short_of_bet() {
    let options = unshuffled().with_bet_increment(1);
    let mut game = stacked_game(
        options,
        7,
        &[
            card(Rank::Two, Suit::Clubs),     // player
            card(Rank::Two, Suit::Diamonds),  // dealer
            card(Rank::Two, Suit::Hearts),    // player
            card(Rank::Two, Suit::Spades),    // dealer
            card(Rank::Three, Suit::Clubs),   // player draws
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Four, Suit::Hearts),   // dealer draws
            card(Rank::Four, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds), // left in the deck
            card(Rank::Five, Suit::Hearts),
            card(Rank::Five, Suit::Spades),
            card(Rank::Six, Suit::Clubs),
        ],
    );

    let summary = game.play_rounds(3, 21, ()).unwrap();

    assert_eq!(
        game.log(),
        "Round 1 of Blackjack!\n\
         wallet: 7\n\
         bet: 5\n\
         Player Cards: (2, clubs) (2, hearts)\n\
         Dealer Cards: (2, diamonds) (?, ?)\n\
         Player pulled a (3, clubs)\n\
         Player pulled a (3, diamonds)\n\
         Player pulled a (3, hearts)\n\
         Player pulled a (3, spades)\n\
         Player pulled a (4, clubs)\n\
         Player pulled a (4, diamonds)\n\
         Dealer Cards Revealed: (2, diamonds) (2, spades)\n\
         Dealer pulled a (4, hearts)\n\
         Dealer pulled a (4, spades)\n\
         Dealer pulled a (5, clubs)\n\
         Player lost with a score of 24. Dealer won with a score of 17.\n\
         Wallet amount $2 is less than bet amount $4."
    );
    assert_eq!(summary.termination, Termination::BetExhausted);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.wallet, 2);
    assert_eq!(summary.bet, 5);
    assert_eq!(game.bet(), 5);
    assert_eq!(summary.cards_remaining, 4);
}

#[test]
fn wallet_below_base_bet_never_deals() {
    let mut game = Game::new(TableOptions::default(), 3, 1);
    let summary = game.play_rounds(2, 15, ()).unwrap();

    assert_eq!(summary.termination, Termination::BetExhausted);
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.log(), "Wallet amount $3 is less than bet amount $5.");
}

#[test]
fn empty_deck_stops_dealer_draw_and_next_round() {
    let mut game = stacked_game(
        unshuffled(),
        10,
        &[
            card(Rank::Ten, Suit::Clubs),   // player
            card(Rank::Nine, Suit::Clubs),  // dealer
            card(Rank::Eight, Suit::Clubs), // player
            card(Rank::Seven, Suit::Clubs), // dealer
        ],
    );

    let summary = game.play_rounds(2, 15, ()).unwrap();

    // Dealer sits on 16 because the deck ran dry.
    assert!(game.journal().events().contains(&Narration::Resolution {
        player: 18,
        dealer: 16,
        outcome: Outcome::PlayerWin,
    }));
    assert_eq!(summary.termination, Termination::DeckExhausted);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(game.wallet(), 15);
    assert_eq!(game.bet(), 5);
    assert!(game.log().ends_with("Not enough cards for a game."));
}

#[test]
fn low_min_cards_still_needs_opening_deal() {
    let options = unshuffled().with_min_cards(0);
    let mut game = stacked_game(
        options,
        10,
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Eight, Suit::Clubs),
        ],
    );

    let summary = game.play_rounds(1, 15, ()).unwrap();

    assert_eq!(summary.termination, Termination::DeckExhausted);
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(game.log(), "Not enough cards for a game.");
    assert_eq!(game.phase(), RoundPhase::Idle);
    assert_eq!(game.cards_remaining(), 3);
    assert_eq!(game.wallet(), 10);
}

#[test]
fn single_round_from_full_deck() {
    let mut game = Game::new(TableOptions::default(), 10, 20);
    let mut records: Vec<RoundRecord> = Vec::new();
    let summary = game.play_rounds(1, 15, &mut records).unwrap();

    let record = &records[0];
    let dealt = record.player_hand.len() + record.dealer_hand.len();
    assert_eq!(game.cards_remaining(), DECK_SIZE - dealt);
    assert_eq!(summary.rounds_played, 1);

    match record.outcome {
        Outcome::PlayerWin => {
            assert_eq!(game.wallet(), 15);
            assert_eq!(game.bet(), 10);
        }
        Outcome::DealerWin => {
            assert_eq!(game.wallet(), 5);
            assert_eq!(game.bet(), 0);
        }
        Outcome::Tie => {
            assert_eq!(game.wallet(), 10);
            assert_eq!(game.bet(), 5);
        }
    }
}

#[test]
fn playing_out_the_deck_conserves_cards() {
    let mut game = Game::new(TableOptions::default(), 500, 42);
    let mut records: Vec<RoundRecord> = Vec::new();
    let summary = game.play_rounds(13, 21, &mut records).unwrap();

    assert!(game.cards_remaining() < 4);
    assert_eq!(summary.rounds_played as usize, records.len());

    let mut seen: HashSet<Card> = HashSet::new();
    for record in &records {
        for card in record.player_hand.iter().chain(&record.dealer_hand) {
            assert!(seen.insert(*card), "{card} dealt twice");
        }
    }
    for card in game.deck().cards() {
        assert!(seen.insert(*card), "{card} both dealt and in the deck");
    }
    assert_eq!(seen.len(), DECK_SIZE);

    let wallet = game.wallet();
    game.reset_log();
    let summary = game.play_rounds(1, 17, ()).unwrap();
    assert_eq!(summary.termination, Termination::DeckExhausted);
    assert_eq!(game.log(), "Not enough cards for a game.");
    assert_eq!(game.wallet(), wallet);
    assert_eq!(game.bet(), 5);
}

#[test]
fn round_numbers_continue_across_calls() {
    let mut game = Game::new(TableOptions::default(), 1_000, 3);
    let mut records: Vec<RoundRecord> = Vec::new();
    game.play_rounds(1, 15, &mut records).unwrap();
    game.play_rounds(2, 15, &mut records).unwrap();

    let rounds: Vec<u32> = records.iter().map(|r| r.round).collect();
    assert_eq!(rounds, [1, 2, 3]);
    assert_eq!(game.rounds_played(), 3);
    assert!(game.log().contains("Round 3 of Blackjack!"));
}

#[test]
fn same_seed_replays_same_game() {
    let run = |seed| {
        let mut game = Game::new(TableOptions::default(), 100, seed);
        game.play_rounds(5, 16, ()).unwrap();
        game.log().to_owned()
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn determine_winner_narrates_each_decision() {
    let mut game = Game::new(TableOptions::default(), 10, 1);

    assert_eq!(game.determine_winner(10, 12), Outcome::DealerWin);
    assert_eq!(game.determine_winner(21, 21), Outcome::Tie);
    assert_eq!(game.determine_winner(22, 23), Outcome::Tie);
    assert_eq!(game.determine_winner(12, 2), Outcome::PlayerWin);
    assert_eq!(game.determine_winner(22, 2), Outcome::DealerWin);
    assert_eq!(game.determine_winner(2, 22), Outcome::PlayerWin);
    assert_eq!(game.determine_winner(21, 25), Outcome::PlayerWin);
    assert_eq!(game.determine_winner(20, 21), Outcome::DealerWin);
    assert_eq!(game.determine_winner(21, 20), Outcome::PlayerWin);

    assert_eq!(
        game.log(),
        "Player lost with a score of 10. Dealer won with a score of 12.\n\
         Player and Dealer tie.\n\
         Player and Dealer tie.\n\
         Player won with a score of 12. Dealer lost with a score of 2.\n\
         Player lost with a score of 22. Dealer won with a score of 2.\n\
         Player won with a score of 2. Dealer lost with a score of 22.\n\
         Player won with a score of 21. Dealer lost with a score of 25.\n\
         Player lost with a score of 20. Dealer won with a score of 21.\n\
         Player won with a score of 21. Dealer lost with a score of 20.\n"
    );

    game.reset_log();
    assert!(game.log().is_empty());
}

#[test]
fn draws_are_narrated_per_seat() {
    let mut game = stacked_game(
        unshuffled(),
        10,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Five, Suit::Clubs),
            card(Rank::King, Suit::Hearts),   // player
            card(Rank::Nine, Suit::Hearts),   // dealer
        ],
    );

    game.play_rounds(1, 15, ()).unwrap();

    let draws: Vec<&Narration> = game
        .journal()
        .events()
        .iter()
        .filter(|e| matches!(e, Narration::Draw { .. }))
        .collect();
    assert_eq!(
        draws,
        [
            &Narration::Draw {
                seat: Seat::Player,
                card: "(K, hearts)".to_owned(),
            },
            &Narration::Draw {
                seat: Seat::Dealer,
                card: "(9, hearts)".to_owned(),
            },
        ]
    );
}
