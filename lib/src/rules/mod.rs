use crate::primitives::*;
use crate::util::*;

// Purchase prices in resources. The orchestrator pays them by adjusting the
// paying ledger; the bank itself only ever hands resources out.

pub fn an_resource_cost(ebuilding: EBuilding) -> EnumMap<EResource, usize> {
    EResource::map_from_fn(|resource| match ebuilding {
        EBuilding::Road => match resource {
            EResource::Wood | EResource::Brick => 1,
            _ => 0,
        },
        EBuilding::Settlement => match resource {
            EResource::Wood | EResource::Brick | EResource::Sheep | EResource::Wheat => 1,
            _ => 0,
        },
        EBuilding::City => match resource {
            EResource::Wheat => 2,
            EResource::Ore => 3,
            _ => 0,
        },
    })
}

pub fn an_resource_cost_devcard() -> EnumMap<EResource, usize> {
    EResource::map_from_fn(|resource| match resource {
        EResource::Sheep | EResource::Wheat | EResource::Ore => 1,
        _ => 0,
    })
}

pub fn points_building(ebuilding: EBuilding) -> usize {
    match ebuilding {
        EBuilding::Road => 0,
        EBuilding::Settlement => 1,
        EBuilding::City => 2,
    }
}

#[test]
fn test_costs() {
    for ebuilding in EBuilding::values() {
        let an_resource_cost = an_resource_cost(ebuilding);
        assert_eq!(an_resource_cost[EResource::Desert], 0);
        assert!(0 < EResource::values().map(|resource| an_resource_cost[resource]).sum::<usize>());
    }
    assert_eq!(
        EResource::values().map(|resource| an_resource_cost(EBuilding::City)[resource]).sum::<usize>(),
        5,
    );
    assert_eq!(
        EResource::values().map(|resource| an_resource_cost_devcard()[resource]).sum::<usize>(),
        3,
    );
    assert_eq!(points_building(EBuilding::Settlement), 1);
    assert_eq!(points_building(EBuilding::City), 2);
}
