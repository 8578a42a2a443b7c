use crate::util::*;
use serde::Serializer;
use std::{fmt, str::FromStr};

plain_enum_mod!(moderesource, derive(Hash,), map_derive(), EResource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
    Desert, // tile label only, never banked or held
});

impl EResource {
    pub fn is_tradable(self) -> bool {
        self != EResource::Desert
    }

    pub const fn initial_supply(self) -> usize {
        match self {
            Self::Desert => 0,
            Self::Wood | Self::Brick | Self::Sheep | Self::Wheat | Self::Ore => 19,
        }
    }

    pub fn values_tradable() -> impl Iterator<Item=EResource> {
        Self::values().filter(|resource| resource.is_tradable())
    }
}

impl fmt::Display for EResource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Wood => "wood",
            Self::Brick => "brick",
            Self::Sheep => "sheep",
            Self::Wheat => "wheat",
            Self::Ore => "ore",
            Self::Desert => "desert",
        })
    }
}

impl FromStr for EResource {
    type Err = &'static str;
    fn from_str(str_resource: &str) -> Result<Self, Self::Err> {
        match str_resource {
            "wood" => Ok(Self::Wood),
            "brick" => Ok(Self::Brick),
            "sheep" => Ok(Self::Sheep),
            "wheat" => Ok(Self::Wheat),
            "ore" => Ok(Self::Ore),
            "desert" => Ok(Self::Desert),
            _ => Err("Could not convert to EResource"),
        }
    }
}

impl serde::Serialize for EResource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EResource {
    fn deserialize<D>(deserializer: D) -> Result<EResource, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[test]
fn test_resource_serialization() {
    macro_rules! test_resource(($(($resource:ident, $str_resource:expr),)*) => {
        $(
            serde_test::assert_tokens(&EResource::$resource, &[
                serde_test::Token::Str($str_resource),
            ]);
            assert_eq!(unwrap!($str_resource.parse::<EResource>()), EResource::$resource);
        )*
    });
    test_resource!(
        (Wood, "wood"),
        (Brick, "brick"),
        (Sheep, "sheep"),
        (Wheat, "wheat"),
        (Ore, "ore"),
        (Desert, "desert"),
    );
    assert!("gold".parse::<EResource>().is_err());
}

#[test]
fn test_resource_supply() {
    assert_eq!(EResource::values_tradable().count(), 5);
    for resource in EResource::values_tradable() {
        assert_eq!(resource.initial_supply(), 19);
    }
    assert!(!EResource::Desert.is_tradable());
    assert_eq!(EResource::Desert.initial_supply(), 0);
}
