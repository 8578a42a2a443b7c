use crate::primitives::*;
use crate::util::*;
use std::fmt;

/// One player's private holdings and remaining building allowance. Knows
/// nothing about the bank; the orchestrator mediates every transfer and
/// mutates `an_resource`/`an_devcard` directly.
#[derive(new)]
pub struct SPlayerLedger {
    pub n_id: usize,
    pub b_bot: bool,
    #[new(value="EResource::map_from_fn(|_resource| 0)")]
    pub an_resource: EnumMap<EResource, usize>,
    #[new(value="EDevCard::map_from_fn(|_devcard| 0)")]
    pub an_devcard: EnumMap<EDevCard, usize>,
    #[new(value="EBuilding::map_from_fn(|ebuilding| ebuilding.initial_stock())")]
    an_building: EnumMap<EBuilding, usize>,
    #[new(default)]
    n_victorypoints: usize,
    // Placed settlement vertices; positions are owned by the board layout,
    // we only track identity and order of placement.
    #[new(default)]
    pub vecn_vertex_settlement: Vec<usize>,
    // Transient per-turn staging buffers for the trading/discard workflows.
    #[new(value="EResource::map_from_fn(|_resource| 0)")]
    pub an_resource_selected_trade: EnumMap<EResource, usize>,
    #[new(value="EResource::map_from_fn(|_resource| 0)")]
    pub an_resource_selected_bank: EnumMap<EResource, usize>,
    #[new(value="EResource::map_from_fn(|_resource| 0)")]
    pub an_resource_selected_discard: EnumMap<EResource, usize>,
    #[new(default)]
    veclistener_victorypoints: Vec<Box<dyn FnMut()>>,
}

impl fmt::Debug for SPlayerLedger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SPlayerLedger")
            .field("n_id", &self.n_id)
            .field("b_bot", &self.b_bot)
            .field("an_resource", &self.an_resource)
            .field("an_devcard", &self.an_devcard)
            .field("an_building", &self.an_building)
            .field("n_victorypoints", &self.n_victorypoints)
            .field("vecn_vertex_settlement", &self.vecn_vertex_settlement)
            .finish_non_exhaustive()
    }
}

impl SPlayerLedger {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        for ebuilding in EBuilding::values() {
            assert!(self.an_building[ebuilding] <= ebuilding.initial_stock());
        }
    }

    pub fn can_build(&self, ebuilding: EBuilding) -> bool {
        0 < self.an_building[ebuilding]
    }

    /// Callers must have checked `can_build`; payment or other logic may
    /// happen between check and commit. Calling with exhausted stock is a
    /// caller bug and fails loudly instead of clamping.
    pub fn deduct_building(&mut self, ebuilding: EBuilding) {
        assert!(self.can_build(ebuilding), "deduct_building({ebuilding}) with empty stock");
        self.an_building[ebuilding] -= 1;
        #[cfg(debug_assertions)]self.assert_invariant();
    }

    pub fn building_stock(&self, ebuilding: EBuilding) -> usize {
        self.an_building[ebuilding]
    }

    pub fn victorypoints(&self) -> usize {
        self.n_victorypoints
    }

    /// Every write notifies each subscriber exactly once, after the value is
    /// updated, no-op writes included. Notifications carry no payload;
    /// listeners re-read the state they care about.
    pub fn set_victorypoints(&mut self, n_victorypoints: usize) {
        self.n_victorypoints = n_victorypoints;
        for fn_listener in self.veclistener_victorypoints.iter_mut() {
            fn_listener();
        }
    }

    pub fn add_victorypoints(&mut self, n_victorypoints_add: usize) {
        self.set_victorypoints(self.n_victorypoints + n_victorypoints_add);
    }

    pub fn subscribe_victorypoints(&mut self, fn_listener: impl FnMut() + 'static) {
        self.veclistener_victorypoints.push(Box::new(fn_listener));
    }
}

#[test]
fn test_ledger_initial_state() {
    let ledger = SPlayerLedger::new(/*n_id*/0, /*b_bot*/false);
    for resource in EResource::values() {
        assert_eq!(ledger.an_resource[resource], 0);
        assert_eq!(ledger.an_resource_selected_trade[resource], 0);
        assert_eq!(ledger.an_resource_selected_bank[resource], 0);
        assert_eq!(ledger.an_resource_selected_discard[resource], 0);
    }
    for devcard in EDevCard::values() {
        assert_eq!(ledger.an_devcard[devcard], 0);
    }
    for ebuilding in EBuilding::values() {
        assert_eq!(ledger.building_stock(ebuilding), ebuilding.initial_stock());
        assert!(ledger.can_build(ebuilding));
    }
    assert_eq!(ledger.victorypoints(), 0);
    assert!(ledger.vecn_vertex_settlement.is_empty());
}

#[test]
fn test_selection_buffers_independent() {
    let mut ledger = SPlayerLedger::new(/*n_id*/0, /*b_bot*/true);
    ledger.an_resource[EResource::Wood] = 3;
    assert_eq!(ledger.an_resource_selected_trade[EResource::Wood], 0);
    ledger.an_resource_selected_discard[EResource::Wood] = 2;
    assert_eq!(ledger.an_resource[EResource::Wood], 3);
}

#[test]
fn test_building_stock() {
    let mut ledger = SPlayerLedger::new(/*n_id*/1, /*b_bot*/false);
    for _i in 0..EBuilding::Settlement.initial_stock() {
        assert!(ledger.can_build(EBuilding::Settlement));
        ledger.deduct_building(EBuilding::Settlement);
    }
    assert!(!ledger.can_build(EBuilding::Settlement));
    assert_eq!(ledger.building_stock(EBuilding::Settlement), 0);
    // other stocks are untouched
    assert_eq!(ledger.building_stock(EBuilding::Road), 15);
    assert_eq!(ledger.building_stock(EBuilding::City), 4);
}

#[test]
#[should_panic]
fn test_deduct_building_empty_stock() {
    let mut ledger = SPlayerLedger::new(/*n_id*/1, /*b_bot*/false);
    for _i in 0..EBuilding::City.initial_stock() {
        ledger.deduct_building(EBuilding::City);
    }
    ledger.deduct_building(EBuilding::City); // contract violation
}

#[test]
fn test_victorypoints_notification() {
    use std::{cell::RefCell, rc::Rc};
    let mut ledger = SPlayerLedger::new(/*n_id*/2, /*b_bot*/false);
    let n_notified = Rc::new(RefCell::new(0));
    ledger.subscribe_victorypoints({
        let n_notified = Rc::clone(&n_notified);
        move || *n_notified.borrow_mut() += 1
    });
    ledger.set_victorypoints(1);
    assert_eq!(ledger.victorypoints(), 1);
    ledger.set_victorypoints(1); // no-op write still notifies
    ledger.set_victorypoints(3);
    ledger.add_victorypoints(2);
    assert_eq!(ledger.victorypoints(), 5);
    assert_eq!(*n_notified.borrow(), 4); // exactly one notification per write
}
