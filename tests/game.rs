//! Match engine integration tests.

use std::collections::HashSet;

use truco::{
    Card, DealError, Match, MatchOptions, MatchResult, MatchState, MatchWinner, PlayError,
    ResultError, RoundOutcome, Scores, Side, deck,
};

fn card(label: &str) -> Card {
    label.parse().unwrap()
}

fn cards(labels: &[&str]) -> Vec<Card> {
    labels.iter().map(|label| card(label)).collect()
}

/// Player holds 4♣ (top manilha), 3♠ and 4♦ (weakest card); the computer
/// holds three middling cards, so every outcome is fixed by the player's
/// choice alone.
fn arranged_match(seed: u64) -> Match {
    let mut game = Match::new(MatchOptions::default(), seed);
    game.start_match_with_deck(&cards(&["4♣", "3♠", "4♦", "5♠", "6♥", "Q♣", "K♦"]))
        .unwrap();
    game
}

#[test]
fn start_match_deals_three_hidden_cards() {
    let mut game = Match::new(MatchOptions::default(), 1);
    assert_eq!(game.state(), MatchState::AwaitingRoundStart);

    let start = game.start_match().unwrap();
    assert_eq!(start.player_hand.len(), 3);
    assert_eq!(game.player_hand().cards(), start.player_hand);
    assert_eq!(game.computer_cards_remaining(), 3);
    assert_eq!(game.state(), MatchState::RoundInProgress);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.rounds_per_match(), 3);
    assert_eq!(game.scores(), Scores::default());
    assert!(!game.is_match_complete());
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = Match::new(MatchOptions::default(), 1234);
    let mut b = Match::new(MatchOptions::default(), 1234);
    assert_eq!(a.start_match().unwrap(), b.start_match().unwrap());

    for index in 0..3 {
        assert_eq!(a.play_round(index).unwrap(), b.play_round(index).unwrap());
    }
}

#[test]
fn manilha_wins_against_any_other_card() {
    for seed in 0..20 {
        let mut game = arranged_match(seed);
        let round = game.play_round(0).unwrap();
        assert_eq!(round.player_card, card("4♣"));
        assert_eq!(round.outcome, RoundOutcome::PlayerWins);
        assert_eq!(round.outcome.winner(), Some(Side::Player));
        assert_eq!(round.scores, Scores { player: 1, computer: 0 });
    }
}

#[test]
fn weakest_card_loses_every_round() {
    let mut game = arranged_match(3);
    let round = game.play_round(2).unwrap();
    assert_eq!(round.player_card, card("4♦"));
    assert_eq!(round.outcome, RoundOutcome::ComputerWins);
    assert_eq!(game.scores(), Scores { player: 0, computer: 1 });
}

#[test]
fn full_match_flow() {
    let mut game = arranged_match(42);

    let first = game.play_round(1).unwrap();
    assert_eq!(first.round, 1);
    assert_eq!(first.outcome, RoundOutcome::PlayerWins);
    assert_eq!(game.match_result().unwrap_err(), ResultError::MatchNotComplete);

    let second = game.play_round(2).unwrap();
    assert_eq!(second.outcome, RoundOutcome::ComputerWins);
    assert!(!game.is_match_complete());

    let third = game.play_round(0).unwrap();
    assert_eq!(third.outcome, RoundOutcome::PlayerWins);
    assert_eq!(third.rounds_played, 3);
    assert_eq!(game.state(), MatchState::MatchComplete);
    assert!(game.is_match_complete());

    let result = game.match_result().unwrap();
    assert_eq!(result.winner, MatchWinner::Player);
    assert_eq!(result.scores, Scores { player: 2, computer: 1 });

    let computer_cards: HashSet<Card> = game.history().iter().map(|r| r.computer_card).collect();
    let dealt: HashSet<Card> = cards(&["5♠", "6♥", "Q♣"]).into_iter().collect();
    assert_eq!(computer_cards, dealt);
    assert_eq!(game.computer_cards_remaining(), 0);
    assert!(game.player_hand().is_empty());
}

#[test]
fn computer_sweep_wins_the_match() {
    let mut game = Match::new(MatchOptions::default(), 8);
    game.start_match_with_deck(&cards(&["4♦", "4♥", "4♠", "3♠", "2♠", "A♦"]))
        .unwrap();

    for index in 0..3 {
        let round = game.play_round(index).unwrap();
        assert_eq!(round.outcome, RoundOutcome::ComputerWins);
    }

    let result = game.match_result().unwrap();
    assert_eq!(result.winner, MatchWinner::Computer);
    assert_eq!(result.scores, Scores { player: 0, computer: 3 });
}

#[test]
fn equal_round_wins_draw() {
    let options = MatchOptions::default().with_hand_size(2);
    let mut game = Match::new(options, 21);
    game.start_match_with_deck(&cards(&["4♣", "4♦", "5♠", "6♥"]))
        .unwrap();
    assert_eq!(game.rounds_per_match(), 2);

    game.play_round(0).unwrap();
    assert!(!game.is_match_complete());
    game.play_round(1).unwrap();
    assert!(game.is_match_complete());

    let result = game.match_result().unwrap();
    assert_eq!(result.winner, MatchWinner::Draw);
    assert_eq!(result.scores, Scores { player: 1, computer: 1 });
}

#[test]
fn result_follows_score_comparison() {
    let cases = [
        (Scores { player: 2, computer: 1 }, MatchWinner::Player),
        (Scores { player: 0, computer: 3 }, MatchWinner::Computer),
        (Scores { player: 1, computer: 1 }, MatchWinner::Draw),
        (Scores { player: 0, computer: 0 }, MatchWinner::Draw),
    ];
    for (scores, winner) in cases {
        assert_eq!(MatchResult::from_scores(scores).winner, winner);
    }
}

#[test]
fn tie_awards_no_point() {
    let mut scores = Scores::default();
    scores.record(RoundOutcome::Tie);
    assert_eq!(scores, Scores::default());
    assert_eq!(RoundOutcome::Tie.winner(), None);

    scores.record(RoundOutcome::ComputerWins);
    assert_eq!(scores, Scores { player: 0, computer: 1 });
}

#[test]
fn random_matches_complete_after_exactly_three_rounds() {
    for seed in 0..50 {
        let mut game = Match::new(MatchOptions::default(), seed);
        game.start_match().unwrap();

        let mut player_wins = 0;
        let mut computer_wins = 0;
        for round in 1..=3 {
            assert!(!game.is_match_complete());
            let index = game.player_hand().playable_indices()[0];
            let result = game.play_round(index).unwrap();
            assert_eq!(result.rounds_played, round);
            match result.outcome {
                RoundOutcome::PlayerWins => player_wins += 1,
                RoundOutcome::ComputerWins => computer_wins += 1,
                RoundOutcome::Tie => panic!("distinct cards cannot tie"),
            }
        }
        assert!(game.is_match_complete());

        let history = game.history();
        assert_eq!(history.len(), 3);
        let played: HashSet<Card> = history
            .iter()
            .flat_map(|r| [r.player_card, r.computer_card])
            .collect();
        assert_eq!(played.len(), 6);

        let result = game.match_result().unwrap();
        assert_eq!(
            result.scores,
            Scores {
                player: player_wins,
                computer: computer_wins
            }
        );
        let expected = if player_wins > computer_wins {
            MatchWinner::Player
        } else {
            MatchWinner::Computer
        };
        assert_eq!(result.winner, expected);
    }
}

#[test]
fn replaying_a_used_slot_is_rejected() {
    let mut game = arranged_match(4);
    game.play_round(0).unwrap();

    let before = game.scores();
    assert_eq!(game.play_round(0).unwrap_err(), PlayError::InvalidCardIndex);
    assert_eq!(game.play_round(3).unwrap_err(), PlayError::InvalidCardIndex);
    assert_eq!(game.scores(), before);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.computer_cards_remaining(), 2);
}

#[test]
fn playing_after_completion_is_rejected() {
    let mut game = arranged_match(5);
    for index in 0..3 {
        game.play_round(index).unwrap();
    }
    assert!(game.is_match_complete());
    assert_eq!(
        game.play_round(0).unwrap_err(),
        PlayError::MatchAlreadyComplete
    );
    assert_eq!(game.history().len(), 3);
}

#[test]
fn playing_before_start_is_rejected() {
    let mut game = Match::new(MatchOptions::default(), 6);
    assert_eq!(game.play_round(0).unwrap_err(), PlayError::MatchNotStarted);
    assert_eq!(game.match_result().unwrap_err(), ResultError::MatchNotStarted);
}

#[test]
fn reset_requires_a_new_deal() {
    let mut game = arranged_match(7);
    for index in 0..3 {
        game.play_round(index).unwrap();
    }

    game.reset();
    assert_eq!(game.state(), MatchState::AwaitingRoundStart);
    assert_eq!(game.scores(), Scores::default());
    assert_eq!(game.rounds_played(), 0);
    assert!(game.history().is_empty());
    assert!(game.player_hand().is_empty());
    assert_eq!(game.computer_cards_remaining(), 0);
    assert_eq!(game.play_round(0).unwrap_err(), PlayError::MatchNotStarted);

    game.start_match().unwrap();
    assert_eq!(game.state(), MatchState::RoundInProgress);
    assert!(game.play_round(0).is_ok());
}

#[test]
fn starting_again_mid_match_redeals() {
    let mut game = arranged_match(9);
    game.play_round(0).unwrap();

    game.start_match().unwrap();
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.scores(), Scores::default());
    assert_eq!(game.player_hand().len(), 3);
    assert!(game.history().is_empty());
}

#[test]
fn invalid_deals_leave_current_match_untouched() {
    let mut game = arranged_match(10);
    game.play_round(0).unwrap();

    assert_eq!(
        game.start_match_with_deck(&cards(&["4♣", "3♠", "4♦", "4♣", "6♥", "Q♣"]))
            .unwrap_err(),
        DealError::DuplicateCard
    );
    assert_eq!(
        game.start_match_with_deck(&cards(&["4♣", "3♠"])).unwrap_err(),
        DealError::NotEnoughCards
    );
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.state(), MatchState::RoundInProgress);
}

#[test]
fn hand_size_is_configurable() {
    let mut game = Match::new(MatchOptions::default().with_hand_size(5), 12);
    assert_eq!(game.start_match().unwrap().player_hand.len(), 5);
    assert_eq!(game.rounds_per_match(), 5);

    let mut empty = Match::new(MatchOptions::default().with_hand_size(0), 12);
    assert_eq!(empty.start_match().unwrap_err(), DealError::EmptyHand);

    let mut oversized = Match::new(MatchOptions::default().with_hand_size(21), 12);
    assert_eq!(oversized.start_match().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(oversized.state(), MatchState::AwaitingRoundStart);

    let full = deck::build_deck();
    let mut largest = Match::new(MatchOptions::default().with_hand_size(20), 12);
    assert!(largest.start_match_with_deck(&full).is_ok());
}

#[test]
fn independent_matches_do_not_share_state() {
    let mut a = arranged_match(1);
    let mut b = arranged_match(2);

    a.play_round(0).unwrap();
    assert_eq!(a.rounds_played(), 1);
    assert_eq!(b.rounds_played(), 0);
    assert!(b.play_round(0).is_ok());
}
