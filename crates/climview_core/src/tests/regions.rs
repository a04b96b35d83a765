//! Tests for the closed region set and its factor table

use std::collections::HashSet;

use crate::model::Region;

#[test]
fn test_all_regions_unique() {
    let unique: HashSet<Region> = Region::ALL.iter().copied().collect();
    assert_eq!(unique.len(), 7);
    assert_eq!(Region::ALL.len(), 7);
}

#[test]
fn test_index_matches_position() {
    for (idx, region) in Region::ALL.iter().enumerate() {
        assert_eq!(region.index(), idx);
        assert_eq!(Region::from_index(idx), Some(*region));
    }
    assert_eq!(Region::from_index(7), None);
}

#[test]
fn test_every_factor_is_positive() {
    for region in Region::ALL {
        let f = region.factors();
        for (label, value) in [
            ("temperature", f.temperature),
            ("precipitation", f.precipitation),
            ("sea_level", f.sea_level),
            ("extreme_events", f.extreme_events),
        ] {
            assert!(
                value > 0.0 && value.is_finite(),
                "{region} {label} factor must be positive, got {value}"
            );
        }
    }
}

#[test]
fn test_global_factors_are_identity() {
    let f = Region::Global.factors();
    assert_eq!(f.temperature, 1.0);
    assert_eq!(f.precipitation, 1.0);
    assert_eq!(f.sea_level, 1.0);
    assert_eq!(f.extreme_events, 1.0);
}

#[test]
fn test_asia_temperature_factor() {
    assert_eq!(Region::Asia.factors().temperature, 1.3);
}

#[test]
fn test_next_prev_wrap() {
    assert_eq!(Region::Global.next(), Region::NorthAmerica);
    assert_eq!(Region::Oceania.next(), Region::Global);
    assert_eq!(Region::Global.prev(), Region::Oceania);

    let mut region = Region::Asia;
    for _ in 0..Region::ALL.len() {
        region = region.next();
    }
    assert_eq!(region, Region::Asia);
}

#[test]
fn test_parse_region_names() {
    assert_eq!("Global".parse::<Region>().unwrap(), Region::Global);
    assert_eq!("north america".parse::<Region>().unwrap(), Region::NorthAmerica);
    assert_eq!("South_America".parse::<Region>().unwrap(), Region::SouthAmerica);
    assert_eq!(" ASIA ".parse::<Region>().unwrap(), Region::Asia);
    assert_eq!("oceania".parse::<Region>().unwrap(), Region::Oceania);

    for region in Region::ALL {
        assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
    }
}

#[test]
fn test_parse_unknown_region() {
    let err = "Atlantis".parse::<Region>().unwrap_err();
    assert_eq!(err.input(), "Atlantis");
    assert!(err.to_string().contains("Atlantis"));
}

#[test]
fn test_region_deserializes_from_display_name() {
    use serde::de::IntoDeserializer;
    use serde::de::value::{Error as ValueError, StrDeserializer};

    let de: StrDeserializer<'_, ValueError> = "North America".into_deserializer();
    let region: Region = serde::Deserialize::deserialize(de).unwrap();
    assert_eq!(region, Region::NorthAmerica);
}

#[test]
fn test_region_deserializes_leniently() {
    use serde::de::IntoDeserializer;
    use serde::de::value::{Error as ValueError, StrDeserializer};

    let parse = |s: &str| -> Result<Region, ValueError> {
        let de: StrDeserializer<'_, ValueError> = s.into_deserializer();
        serde::Deserialize::deserialize(de)
    };
    assert_eq!(parse("asia").unwrap(), Region::Asia);
    assert_eq!(parse("north_america").unwrap(), Region::NorthAmerica);
    assert_eq!(parse("SOUTH AMERICA").unwrap(), Region::SouthAmerica);

    let err = parse("Atlantis").unwrap_err();
    assert!(err.to_string().contains("Atlantis"));
}
