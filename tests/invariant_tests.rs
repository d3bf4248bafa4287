//! Property tests: invariants that must hold in every reachable state.
//!
//! Games are driven by proptest-chosen indices into the legal set, with
//! arbitrary (often illegal) actions mixed in to exercise rejection.

use proptest::prelude::*;

use camel_race::core::{
    Action, GameState, HazardDirection, ParticipantId, RaceConfig, RacerId, WagerKind,
};
use camel_race::rules::{apply_action, legal_actions};

/// A step of a driven game: either pick from the legal set or try anything.
#[derive(Clone, Debug)]
enum Step {
    Legal(usize),
    Arbitrary(Action),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::RollAndMove),
        (any::<bool>(), 0usize..20).prop_map(|(forward, cell)| Action::PlaceHazard {
            direction: if forward { HazardDirection::Forward } else { HazardDirection::Backward },
            cell,
        }),
        (0u8..6).prop_map(|r| Action::RoundWager(RacerId(r))),
        (any::<bool>(), 0u8..6).prop_map(|(winner, r)| Action::GameWager {
            kind: if winner { WagerKind::Winner } else { WagerKind::Loser },
            racer: RacerId(r),
        }),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => any::<usize>().prop_map(Step::Legal),
        1 => arb_action().prop_map(Step::Arbitrary),
    ]
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    let config = state.config();

    // Conservation.
    prop_assert!(state.check_racers().is_ok(), "{:?}", state.check_racers());

    // Hazard exclusivity.
    prop_assert!(state.check_hazards().is_ok(), "{:?}", state.check_hazards());
    let hazards: Vec<_> = state.track().hazards().collect();
    for owner in ParticipantId::all(config.participant_count()) {
        prop_assert!(hazards.iter().filter(|(_, h)| h.owner == owner).count() <= 1);
    }
    for pair in hazards.windows(2) {
        prop_assert!(pair[1].0 - pair[0].0 > 1, "adjacent hazards {:?}", pair);
    }
    for (cell, _) in &hazards {
        prop_assert!(!state.track().has_racer(*cell), "racer on hazard cell {}", cell);
    }

    // Wager caps.
    for racer in RacerId::all(config.racer_count()) {
        prop_assert!(state.wagers().round_count(racer) <= config.round_wager_slots());
    }
    let mut game_wagers: Vec<(ParticipantId, RacerId)> = WagerKind::ALL
        .iter()
        .flat_map(|&kind| state.wagers().game(kind).iter())
        .map(|w| (w.owner, w.racer.reveal()))
        .collect();
    let total = game_wagers.len();
    game_wagers.sort();
    game_wagers.dedup();
    prop_assert_eq!(game_wagers.len(), total);

    // Termination bookkeeping.
    prop_assert_eq!(state.is_active(), state.winners().is_empty());
    Ok(())
}

fn fingerprint(state: &GameState) -> impl PartialEq + std::fmt::Debug {
    (
        state.track().clone(),
        state.wagers().clone(),
        state.balances().clone(),
        state.unmoved_racers(),
        state.turn(),
        state.is_active(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_invariants_hold_every_step(seed in any::<u64>(), steps in prop::collection::vec(arb_step(), 1..300)) {
        let mut state = GameState::new(RaceConfig::standard(), seed);
        check_invariants(&state)?;

        for step in steps {
            if !state.is_active() {
                break;
            }
            let seat = state.active_participant();
            let action = match step {
                Step::Legal(pick) => {
                    let legal = legal_actions(&state, seat).unwrap();
                    legal[pick % legal.len()]
                }
                Step::Arbitrary(action) => action,
            };

            let before = fingerprint(&state);
            match apply_action(&mut state, seat, action) {
                Ok(_) => {}
                Err(err) => {
                    prop_assert!(!err.is_fatal(), "{err}");
                    prop_assert_eq!(fingerprint(&state), before);
                }
            }
            check_invariants(&state)?;
        }
    }

    #[test]
    fn prop_legal_actions_always_execute(seed in any::<u64>(), picks in prop::collection::vec(any::<usize>(), 1..120)) {
        let mut state = GameState::new(RaceConfig::standard(), seed);

        for pick in picks {
            if !state.is_active() {
                break;
            }
            let seat = state.active_participant();
            let legal = legal_actions(&state, seat).unwrap();
            prop_assert!(legal.contains(&Action::RollAndMove));

            let action = legal[pick % legal.len()];
            prop_assert!(apply_action(&mut state, seat, action).is_ok(), "{action} rejected");
        }
    }

    #[test]
    fn prop_rounds_settle_when_every_racer_moved(seed in any::<u64>()) {
        let mut state = GameState::new(RaceConfig::standard(), seed);
        let mut rolls = 0u32;

        while state.is_active() {
            let seat = state.active_participant();
            apply_action(&mut state, seat, Action::RollAndMove).unwrap();
            rolls += 1;
            if state.is_active() {
                prop_assert_eq!(state.rounds_settled(), rolls / 5);
            }
        }
        prop_assert!(state.rounds_settled() >= rolls / 5);
        prop_assert!(state.rounds_settled() <= rolls / 5 + 1);
    }
}
