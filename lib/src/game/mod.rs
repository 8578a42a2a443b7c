use crate::primitives::*;
use crate::util::*;
use rand::prelude::*;
use rand::rngs::StdRng;

pub mod bank;
pub mod ledger;
pub use self::{bank::*, ledger::*};

/// Explicit per-game context: one bank, the joined players' ledgers, and the
/// session RNG. Created at game start, torn down at game end; never a
/// process-wide singleton.
pub struct SGameSession {
    bank: SBank,
    vecledger: Vec<SPlayerLedger>,
    rng: StdRng,
}

impl SGameSession {
    pub fn new() -> SGameSession {
        Self::new_with_rng(StdRng::from_os_rng())
    }

    pub fn new_from_seed(n_seed: u64) -> SGameSession {
        Self::new_with_rng(StdRng::seed_from_u64(n_seed))
    }

    fn new_with_rng(mut rng: StdRng) -> SGameSession {
        let bank = SBank::new(&mut rng);
        info!("Session started: {}", bank);
        SGameSession {
            bank,
            vecledger: Vec::new(),
            rng,
        }
    }

    pub fn add_player(&mut self, b_bot: bool) -> usize {
        let n_id = self.vecledger.len();
        self.vecledger.push(SPlayerLedger::new(n_id, b_bot));
        info!("Player {} joined (bot: {})", n_id, b_bot);
        n_id
    }

    pub fn bank(&self) -> &SBank {
        &self.bank
    }

    forward_to_field!(self.bank,
        pub fn resources_left(&self, resource: EResource) -> usize;
        pub fn dev_cards_left(&self) -> usize;
    );

    pub fn ledger(&self, n_id: usize) -> Option<&SPlayerLedger> {
        self.vecledger.get(n_id)
    }

    pub fn ledger_mut(&mut self, n_id: usize) -> Option<&mut SPlayerLedger> {
        self.vecledger.get_mut(n_id)
    }

    pub fn ledgers(&self) -> &[SPlayerLedger] {
        &self.vecledger
    }

    pub fn take_resources(&mut self, resource: EResource, n_amount: usize) -> bool {
        self.bank.take_resources(resource, n_amount)
    }

    pub fn draw_dev_card(&mut self) -> Option<EDevCard> {
        self.bank.draw_dev_card(&mut self.rng)
    }

    /// Bank-to-player grant as an atomic decrement-then-increment pair.
    /// Failure leaves bank and ledger untouched.
    pub fn grant_resources(&mut self, n_id: usize, resource: EResource, n_amount: usize) -> Result<(), Error> {
        let ledger = match self.vecledger.get_mut(n_id) {
            None => bail!("No player with id {}", n_id),
            Some(ledger) => ledger,
        };
        if !self.bank.take_resources(resource, n_amount) {
            bail!("Bank cannot satisfy {} {}", n_amount, resource);
        }
        ledger.an_resource[resource] += n_amount;
        Ok(())
    }

    /// Deck-to-player draw; the drawn kind is also reported to the caller.
    pub fn draw_dev_card_for(&mut self, n_id: usize) -> Result<EDevCard, Error> {
        if self.vecledger.get(n_id).is_none() {
            bail!("No player with id {}", n_id);
        }
        let devcard = match self.bank.draw_dev_card(&mut self.rng) {
            None => bail!("No development cards remain"),
            Some(devcard) => devcard,
        };
        self.vecledger[n_id].an_devcard[devcard] += 1;
        Ok(devcard)
    }

    pub fn teardown(self) {
        info!("Session ended: {}", self.bank);
    }
}

#[test]
fn test_session_players() {
    let mut session = SGameSession::new_from_seed(0);
    let n_id_human = session.add_player(/*b_bot*/false);
    let n_id_bot = session.add_player(/*b_bot*/true);
    assert_eq!(n_id_human, 0);
    assert_eq!(n_id_bot, 1);
    assert!(!unwrap!(session.ledger(n_id_human)).b_bot);
    assert!(unwrap!(session.ledger(n_id_bot)).b_bot);
    assert!(session.ledger(2).is_none());
    session.teardown();
}

#[test]
fn test_grant_resources() {
    let mut session = SGameSession::new_from_seed(1);
    let n_id = session.add_player(/*b_bot*/false);
    unwrap!(session.grant_resources(n_id, EResource::Brick, 4));
    assert_eq!(unwrap!(session.ledger(n_id)).an_resource[EResource::Brick], 4);
    assert_eq!(session.resources_left(EResource::Brick), 15);
    // failed grants leave both sides untouched
    assert!(session.grant_resources(n_id, EResource::Brick, 16).is_err());
    assert!(session.grant_resources(/*n_id*/7, EResource::Brick, 1).is_err());
    assert!(session.grant_resources(n_id, EResource::Desert, 1).is_err());
    assert_eq!(unwrap!(session.ledger(n_id)).an_resource[EResource::Brick], 4);
    assert_eq!(session.resources_left(EResource::Brick), 15);
    // every unit is owned by exactly one of bank and ledgers
    for resource in EResource::values_tradable() {
        assert_eq!(
            session.resources_left(resource)
                + session.ledgers().iter().map(|ledger| ledger.an_resource[resource]).sum::<usize>(),
            resource.initial_supply(),
        );
    }
}

#[test]
fn test_draw_dev_card_for() {
    let mut session = SGameSession::new_from_seed(2);
    let n_id = session.add_player(/*b_bot*/true);
    assert!(session.draw_dev_card_for(/*n_id*/5).is_err());
    assert_eq!(session.dev_cards_left(), EDevCard::deck_size());
    for i_draw in 0..EDevCard::deck_size() {
        let devcard = unwrap!(session.draw_dev_card_for(n_id));
        assert!(0 < unwrap!(session.ledger(n_id)).an_devcard[devcard]);
        assert_eq!(session.dev_cards_left(), EDevCard::deck_size()-i_draw-1);
    }
    assert!(session.draw_dev_card_for(n_id).is_err()); // deck exhausted
    let ledger = unwrap!(session.ledger(n_id));
    for devcard in EDevCard::values() {
        assert_eq!(ledger.an_devcard[devcard], devcard.frequency());
    }
}
