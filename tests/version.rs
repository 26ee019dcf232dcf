use std::cmp::Ordering;

use semver200::{IdentifierKind, ParseError, Semver200, Version, VersionScheme, compare, parse};

#[test]
fn parse_prerelease_and_build_scenario() {
    let data = parse("1.0.0-prerel.123+build.1.2.3").unwrap();

    assert_eq!(data.major(), 1);
    assert_eq!(data.minor(), 0);
    assert_eq!(data.patch(), 0);

    let prerelease: Vec<(&str, IdentifierKind)> = data
        .prerelease()
        .iter()
        .map(|id| (id.as_str(), id.kind()))
        .collect();
    assert_eq!(
        prerelease,
        [
            ("prerel", IdentifierKind::Alphanumeric),
            ("123", IdentifierKind::Numeric)
        ]
    );
    assert_eq!(data.build(), ["build", "1", "2", "3"]);
}

#[test]
fn leading_zeros_are_rejected() {
    for input in ["01.0.0", "1.00.0", "1.0.00", "1.0.0-prerel.01"] {
        assert!(
            matches!(parse(input), Err(ParseError::LeadingZero { .. })),
            "{input} should be rejected"
        );
    }
    assert!(parse("1.0.0-prerel.0").is_ok());
}

#[test]
fn empty_identifiers_are_rejected() {
    for input in [
        "1.0.0-prerel..test",
        "1.0.0+build..test",
        "1.1.",
        "1..0",
        ".0.0",
    ] {
        assert!(parse(input).is_err(), "{input} should be rejected");
    }
}

#[test]
fn precedence_chain_is_strictly_increasing() {
    let chain: Vec<Version> = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    for (i, lower) in chain.iter().enumerate() {
        for higher in &chain[i + 1..] {
            assert!(lower < higher, "{lower} < {higher}");
            assert!(higher > lower, "{higher} > {lower}");
        }
        assert_eq!(lower.cmp(lower), Ordering::Equal);
    }
}

#[test]
fn build_metadata_never_affects_ordering() {
    let a = parse("1.0.0+a").unwrap();
    let b = parse("1.0.0+b").unwrap();

    assert_eq!(compare(&a, &b), Ordering::Equal);
    assert_ne!(a, b); // structural equality still sees the build
}

#[test]
fn scheme_and_free_functions_agree() {
    let scheme = Semver200;
    let pairs = [
        ("1.0.0", "1.0.1"),
        ("1.0.0-rc.1", "1.0.0"),
        ("1.0.0-alpha.beta", "1.0.0-alpha.1"),
    ];

    for (a, b) in pairs {
        let (da, db) = (parse(a).unwrap(), parse(b).unwrap());
        assert_eq!(
            scheme.compare(&scheme.parse(a).unwrap(), &scheme.parse(b).unwrap()),
            compare(&da, &db)
        );
    }
}

#[test]
fn facade_sorts_mixed_versions() {
    let mut versions: Vec<Version> = ["1.10.0", "1.2.0", "1.2.0-rc.1", "0.0.1", "1.2.0-beta"]
        .iter()
        .map(|s| Version::parse(s).unwrap())
        .collect();

    versions.sort();

    let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["0.0.1", "1.2.0-beta", "1.2.0-rc.1", "1.2.0", "1.10.0"]
    );
}

#[test]
fn facade_max_picks_release_over_prerelease() {
    let latest = ["2.0.0-rc.2", "2.0.0", "2.0.0-rc.10"]
        .iter()
        .filter_map(|s| Version::parse(s).ok())
        .max()
        .unwrap();

    assert_eq!(latest.to_string(), "2.0.0");
}
