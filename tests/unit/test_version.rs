use quadver::{Version, VersionError};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

const SAMPLES: [i16; 9] = [i16::MIN, -1000, -1, 0, 1, 2, 255, 4096, i16::MAX];

fn hash_of(version: &Version) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let version = Version::parse("1.2.3.4").unwrap();
        assert_eq!(version, Version::new(1, 2, 3, 4));
        assert_eq!(version.to_string(), "1.2.3.4");
    }

    #[test]
    fn test_parse_missing_parts_default_to_zero() {
        assert_eq!(Version::parse("1.2").unwrap(), Version::new(1, 2, 0, 0));
        assert_eq!(Version::parse("7").unwrap(), Version::new(7, 0, 0, 0));
        assert_eq!(Version::parse("1.2").unwrap().to_string(), "1.2.0.0");
    }

    #[test]
    fn test_parse_invalid_segment() {
        let err = Version::parse("abc").unwrap_err();
        assert!(matches!(err, VersionError::InvalidFormat { .. }));
        assert!(err.to_string().contains("'abc'"));

        assert!(Version::parse("1.x.3").unwrap_err().is_invalid_format());
        assert!(Version::parse("1.2.3.4.5.6").is_ok());
    }

    #[test]
    fn test_parse_through_from_str() {
        let version: Version = "10.20.30.40".parse().unwrap();
        assert_eq!(version.major(), 10);
        assert_eq!(version.minor(), 20);
        assert_eq!(version.build(), 30);
        assert_eq!(version.name(), 40);
    }

    #[test]
    fn test_string_round_trip() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let version = Version::from_parts(a, b, b, a);
                assert_eq!(Version::parse(&version.to_string()).unwrap(), version);
            }
        }
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_new_truncates_to_16_bits() {
        assert_eq!(Version::new(65_537, 0, 0, 0), Version::new(1, 0, 0, 0));
        assert_eq!(Version::new(32_768, 0, 0, 0).major(), i16::MIN);
        assert_eq!(Version::new(-1, 0x1_FFFF, 0, 0).minor(), -1);
    }

    #[test]
    fn test_default_is_all_zero() {
        assert_eq!(Version::default(), Version::new(0, 0, 0, 0));
        assert_eq!(Version::default().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_packed_round_trip() {
        let values = [
            0_i64,
            1,
            -1,
            i64::MIN,
            i64::MAX,
            0x0001_0002_0003_0004,
            0x7FFF_8000_0000_FFFF,
            -0x0123_4567_89AB_CDEF,
        ];
        for value in values {
            assert_eq!(Version::from_packed(value).to_packed(), value);
            assert_eq!(i64::from(Version::from(value)), value);
        }
    }

    #[test]
    fn test_packed_field_order() {
        let version = Version::from_packed(0x0001_0002_0003_0004);
        assert_eq!(version, Version::new(1, 2, 3, 4));
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_equal_versions_hash_equal() {
        let a = Version::parse("3.1.4.1").unwrap();
        let b = Version::new(3, 1, 4, 1);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let set: HashSet<Version> = [a, b, Version::new(3, 1, 4, 2)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sort_order() {
        let mut versions = vec![
            Version::new(1, 2, 3, 5),
            Version::new(0, 9, 9, 9),
            Version::new(1, 2, 3, 4),
            Version::new(1, -1, 0, 0),
            Version::new(2, 0, 0, 0),
        ];
        versions.sort();
        assert_eq!(
            versions,
            vec![
                Version::new(0, 9, 9, 9),
                Version::new(1, -1, 0, 0),
                Version::new(1, 2, 3, 4),
                Version::new(1, 2, 3, 5),
                Version::new(2, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn test_compare_to_matches_ord_sign() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let left = Version::from_parts(1, a, 0, b);
                let right = Version::from_parts(1, b, 0, a);
                assert_eq!(left.compare_to(&right).signum(), left.cmp(&right) as i32);
            }
        }
    }
}
