//! Tests for repository reference parsing and formatting

use cog_client::{Error, RepoReference};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_parse_with_host() {
    let repo: RepoReference = "replicate.com/acme/widget".parse().unwrap();
    assert_eq!(repo.host(), Some("replicate.com"));
    assert_eq!(repo.owner(), "acme");
    assert_eq!(repo.name(), "widget");
    assert_eq!(repo.to_string(), "replicate.com/acme/widget");
}

#[test]
fn test_parse_without_host() {
    let repo: RepoReference = "acme/widget".parse().unwrap();
    assert_eq!(repo.host(), None);
    assert_eq!(repo.owner(), "acme");
    assert_eq!(repo.name(), "widget");
    assert_eq!(repo.to_string(), "acme/widget");
}

#[test]
fn test_host_with_port() {
    let repo: RepoReference = "localhost:8080/acme/widget".parse().unwrap();
    assert_eq!(repo.host(), Some("localhost:8080"));
}

#[rstest]
#[case("", 1)]
#[case("widget", 1)]
#[case("acme/", 2)]
#[case("/widget", 2)]
#[case("host//widget", 3)]
#[case("a/b/c/d", 4)]
#[case("a/b/c/d/e", 5)]
fn test_parse_invalid(#[case] input: &str, #[case] segments: usize) {
    assert_eq!(
        input.parse::<RepoReference>(),
        Err(Error::InvalidFormat {
            input: input.to_string(),
            segments,
        })
    );
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9.:-]{0,12}"
}

proptest! {
    #[test]
    fn test_two_segment_round_trip(owner in segment(), name in segment()) {
        let text = format!("{owner}/{name}");
        let repo: RepoReference = text.parse().unwrap();
        prop_assert_eq!(repo.to_string(), text.clone());
        prop_assert_eq!(repo.to_string().parse::<RepoReference>().unwrap(), repo);
    }

    #[test]
    fn test_three_segment_round_trip(host in segment(), owner in segment(), name in segment()) {
        let text = format!("{host}/{owner}/{name}");
        let repo: RepoReference = text.parse().unwrap();
        prop_assert_eq!(repo.host(), Some(host.as_str()));
        prop_assert_eq!(repo.to_string(), text);
    }

    #[test]
    fn test_too_many_segments_rejected(parts in prop::collection::vec(segment(), 4..8)) {
        let text = parts.join("/");
        let is_invalid_format = matches!(
            text.parse::<RepoReference>(),
            Err(Error::InvalidFormat { .. })
        );
        prop_assert!(is_invalid_format);
    }
}
