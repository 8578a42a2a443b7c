use crate::primitives::*;
use crate::util::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use rand::prelude::*;
use std::fmt;

pub type SDevCardDeck = ArrayVec<EDevCard, {EDevCard::deck_size()}>;

/// Sole owner of the global resource supply and the development card deck.
/// Supply only ever leaves the bank; returning cards or resources is left to
/// a future trading/discard subsystem.
#[derive(Clone, Debug)]
pub struct SBank {
    an_resource: EnumMap<EResource, usize>,
    vecdevcard: SDevCardDeck,
}

impl SBank {
    pub fn new(rng: &mut impl Rng) -> SBank {
        let bank = SBank {
            an_resource: EResource::map_from_fn(|resource| resource.initial_supply()),
            vecdevcard: {
                let mut vecdevcard = SDevCardDeck::new();
                for devcard in EDevCard::values() {
                    for _i in 0..devcard.frequency() {
                        vecdevcard.push(devcard);
                    }
                }
                assert_eq!(vecdevcard.len(), EDevCard::deck_size());
                vecdevcard.shuffle(rng);
                vecdevcard
            },
        };
        #[cfg(debug_assertions)]bank.assert_invariant();
        bank
    }

    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        assert_eq!(self.an_resource[EResource::Desert], 0);
        for resource in EResource::values() {
            assert!(self.an_resource[resource] <= resource.initial_supply());
        }
        assert!(self.vecdevcard.len() <= EDevCard::deck_size());
    }

    /// Removes a uniformly chosen card from the remaining deck, or None once
    /// the deck is exhausted. Any remaining position is equally eligible,
    /// not just the top.
    pub fn draw_dev_card(&mut self, rng: &mut impl Rng) -> Option<EDevCard> {
        if_then_some!(!self.vecdevcard.is_empty(), {
            let i_devcard = rng.random_range(0..self.vecdevcard.len());
            let devcard = self.vecdevcard.swap_remove(i_devcard);
            #[cfg(debug_assertions)]self.assert_invariant();
            devcard
        })
    }

    /// Check-then-decrement in one step. False leaves the pool untouched:
    /// on insufficient supply, and always for Desert, which is never banked.
    /// Requesting zero of a tradable resource trivially succeeds.
    pub fn take_resources(&mut self, resource: EResource, n_amount: usize) -> bool {
        if !resource.is_tradable() || self.an_resource[resource]<n_amount {
            return false;
        }
        self.an_resource[resource] -= n_amount;
        #[cfg(debug_assertions)]self.assert_invariant();
        true
    }

    pub fn resources_left(&self, resource: EResource) -> usize {
        self.an_resource[resource]
    }

    pub fn dev_cards_left(&self) -> usize {
        self.vecdevcard.len()
    }
}

impl fmt::Display for SBank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} | {} dev cards",
            EResource::values_tradable()
                .map(|resource| format!("{}:{}", resource, self.an_resource[resource]))
                .join(" "),
            self.vecdevcard.len(),
        )
    }
}

#[cfg(test)]
fn bank_for_test(n_seed: u64) -> (SBank, rand::rngs::StdRng) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(n_seed);
    let bank = SBank::new(&mut rng);
    (bank, rng)
}

#[test]
fn test_take_resources() {
    let (mut bank, _rng) = bank_for_test(0);
    for resource in EResource::values_tradable() {
        assert_eq!(bank.resources_left(resource), 19);
        assert!(bank.take_resources(resource, 0));
        assert_eq!(bank.resources_left(resource), 19);
        assert!(!bank.take_resources(resource, 20));
        assert_eq!(bank.resources_left(resource), 19);
    }
    assert!(bank.take_resources(EResource::Wood, 19));
    assert_eq!(bank.resources_left(EResource::Wood), 0);
    assert!(!bank.take_resources(EResource::Wood, 1));
    assert_eq!(bank.resources_left(EResource::Wood), 0);
    assert!(bank.take_resources(EResource::Wood, 0));
}

#[test]
fn test_take_resources_desert() {
    let (mut bank, _rng) = bank_for_test(1);
    assert!(!bank.take_resources(EResource::Desert, 0));
    assert!(!bank.take_resources(EResource::Desert, 1));
    assert_eq!(bank.resources_left(EResource::Desert), 0);
}

#[test]
fn test_take_resources_conservation() {
    // No sequence of takes hands out more than the initial 19 per kind.
    let (mut bank, mut rng) = bank_for_test(2);
    for resource in EResource::values_tradable() {
        let mut n_taken_total = 0;
        for _i in 0..100 {
            let n_amount = rng.random_range(0..=3);
            if bank.take_resources(resource, n_amount) {
                n_taken_total += n_amount;
            }
        }
        assert!(n_taken_total <= resource.initial_supply());
        assert_eq!(bank.resources_left(resource), resource.initial_supply()-n_taken_total);
    }
}

#[test]
fn test_draw_dev_card_until_exhaustion() {
    let (mut bank, mut rng) = bank_for_test(3);
    let mut an_drawn = EDevCard::map_from_fn(|_devcard| 0);
    let mut n_drawn_total = 0;
    while let Some(devcard) = bank.draw_dev_card(&mut rng) {
        an_drawn[devcard] += 1;
        n_drawn_total += 1;
        assert!(n_drawn_total <= EDevCard::deck_size());
    }
    assert_eq!(n_drawn_total, EDevCard::deck_size());
    for devcard in EDevCard::values() {
        assert_eq!(an_drawn[devcard], devcard.frequency());
    }
    assert_eq!(bank.dev_cards_left(), 0);
    assert_eq!(bank.draw_dev_card(&mut rng), None); // 26th draw
}

#[test]
fn test_draw_dev_card_deterministic_with_seed() {
    let vecdevcard_first = {
        let (mut bank, mut rng) = bank_for_test(4);
        (0..EDevCard::deck_size()).map(|_i| unwrap!(bank.draw_dev_card(&mut rng))).collect::<Vec<_>>()
    };
    let vecdevcard_second = {
        let (mut bank, mut rng) = bank_for_test(4);
        (0..EDevCard::deck_size()).map(|_i| unwrap!(bank.draw_dev_card(&mut rng))).collect::<Vec<_>>()
    };
    assert_eq!(vecdevcard_first, vecdevcard_second);
}
