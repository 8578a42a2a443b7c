use crate::util::*;
use serde::Serializer;
use std::{fmt, str::FromStr};

plain_enum_mod!(modebuilding, derive(Hash,), map_derive(), EBuilding {
    Road,
    Settlement,
    City,
});

impl EBuilding {
    // Physical pieces each player starts with.
    pub const fn initial_stock(self) -> usize {
        match self {
            Self::Road => 15,
            Self::Settlement => 5,
            Self::City => 4,
        }
    }
}

impl fmt::Display for EBuilding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Road => "road",
            Self::Settlement => "settlement",
            Self::City => "city",
        })
    }
}

impl FromStr for EBuilding {
    type Err = &'static str;
    fn from_str(str_building: &str) -> Result<Self, Self::Err> {
        match str_building {
            "road" => Ok(Self::Road),
            "settlement" => Ok(Self::Settlement),
            "city" => Ok(Self::City),
            _ => Err("Could not convert to EBuilding"),
        }
    }
}

impl serde::Serialize for EBuilding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EBuilding {
    fn deserialize<D>(deserializer: D) -> Result<EBuilding, D::Error>
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
fn test_building() {
    assert_eq!(EBuilding::Road.initial_stock(), 15);
    assert_eq!(EBuilding::Settlement.initial_stock(), 5);
    assert_eq!(EBuilding::City.initial_stock(), 4);
    for ebuilding in EBuilding::values() {
        assert_eq!(unwrap!(ebuilding.to_string().parse::<EBuilding>()), ebuilding);
    }
}
