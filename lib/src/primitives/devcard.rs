use crate::util::*;
use serde::Serializer;
use std::{fmt, str::FromStr};

plain_enum_mod!(modedevcard, derive(Hash,), map_derive(), EDevCard {
    Knight,
    RoadBuilding,
    YearOfPlenty,
    Monopoly,
    VictoryPoint,
});

impl EDevCard {
    // Number of copies of this card in a freshly built deck.
    pub const fn frequency(self) -> usize {
        match self {
            Self::Knight => 14,
            Self::RoadBuilding | Self::YearOfPlenty | Self::Monopoly => 2,
            Self::VictoryPoint => 5,
        }
    }

    pub const fn deck_size() -> usize {
        25 // TODO could we compute this via EDevCard::values().map(frequency)?
    }
}

impl fmt::Display for EDevCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Knight => "knight",
            Self::RoadBuilding => "road_building",
            Self::YearOfPlenty => "year_of_plenty",
            Self::Monopoly => "monopoly",
            Self::VictoryPoint => "victory_point",
        })
    }
}

impl FromStr for EDevCard {
    type Err = &'static str;
    fn from_str(str_devcard: &str) -> Result<Self, Self::Err> {
        match str_devcard {
            "knight" => Ok(Self::Knight),
            "road_building" => Ok(Self::RoadBuilding),
            "year_of_plenty" => Ok(Self::YearOfPlenty),
            "monopoly" => Ok(Self::Monopoly),
            "victory_point" => Ok(Self::VictoryPoint),
            _ => Err("Could not convert to EDevCard"),
        }
    }
}

impl serde::Serialize for EDevCard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EDevCard {
    fn deserialize<D>(deserializer: D) -> Result<EDevCard, D::Error>
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
fn test_devcard_frequencies() {
    assert_eq!(
        EDevCard::values().map(EDevCard::frequency).sum::<usize>(),
        EDevCard::deck_size(),
    );
    assert_eq!(EDevCard::Knight.frequency(), 14);
    assert_eq!(EDevCard::VictoryPoint.frequency(), 5);
}

#[test]
fn test_devcard_serialization() {
    for devcard in EDevCard::values() {
        assert_eq!(unwrap!(devcard.to_string().parse::<EDevCard>()), devcard);
    }
    serde_test::assert_tokens(&EDevCard::RoadBuilding, &[
        serde_test::Token::Str("road_building"),
    ]);
}
