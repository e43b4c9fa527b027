//! End-to-end command pipeline tests.

use pretty_assertions::assert_eq;
use raidscout::blizzard::{MockFetcher, StaticTokenSource};
use raidscout::error::BotError;

use super::common::{character_payload, harness, harness_with_tokens, raid_payload, TOKEN};

/// Scenario: Character lookup
/// Given a fetcher that returns a character profile
/// When `!char asmongold us area-52` is handled
/// Then the reply is the formatted character paragraph
/// And exactly one fetch was issued to the character endpoint
#[tokio::test]
async fn test_character_search_end_to_end() {
    let h = harness(MockFetcher::new().with_response("/character/", character_payload()));

    let reply = h.dispatcher.handle("!char asmongold us area-52").await;

    assert_eq!(
        reply.as_deref(),
        Some(
            "**Character:** Asmongold 120 Horde Orc Protection Warrior \n\
             **Guild:** OTK \n\
             **Item level:** 445\n"
        )
    );
    assert_eq!(
        h.fetcher.calls(),
        vec![format!(
            "https://us.api.blizzard.com/profile/wow/character/area-52/asmongold\
             ?namespace=profile-us&locale=en_US&access_token={TOKEN}"
        )]
    );
    assert_eq!(h.tokens.calls(), vec!["us".to_string()]);
}

/// Scenario: Mixed-case input with a quoted realm
/// Given a realm name with spaces and an apostrophe
/// When the command is typed in mixed case
/// Then the request uses the lowercased, hyphenated slug
#[tokio::test]
async fn test_character_search_quoted_realm() {
    let h = harness(MockFetcher::new().with_response("/character/", character_payload()));

    let reply = h
        .dispatcher
        .handle("!CHAR Asmongold EU \"Quel'Thalas Prime\"")
        .await;

    assert!(reply.unwrap().starts_with("**Character:** Asmongold"));
    let calls = h.fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with(
        "https://eu.api.blizzard.com/profile/wow/character/quelthalas-prime/asmongold?"
    ));
}

/// Scenario: Raid lookup for an expansion the character raided in
#[tokio::test]
async fn test_raid_search_end_to_end() {
    let h = harness(MockFetcher::new().with_response("/encounters/raids", raid_payload()));

    let reply = h
        .dispatcher
        .handle("!raid \"lich king\" asmongold us kel'thuzad")
        .await;

    assert_eq!(
        reply.as_deref(),
        Some(
            "**Naxxramas**\n\
             • 10 Player 15/15\n\
             • 25 Player 4/15\n\
             \n\
             **Icecrown Citadel**\n\
             • 25 Player (Heroic) 12/12\n\
             \n"
        )
    );
    let calls = h.fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("/character/kelthuzad/asmongold/encounters/raids?"));
}

/// Scenario: Raid lookup beyond the character's recorded expansions
/// Given a raid payload with 3 expansions
/// When raid progress for Battle for Azeroth (ordinal 7) is requested
/// Then the reply is the no-progress message, not a transport error
#[tokio::test]
async fn test_raid_search_no_progress() {
    let h = harness(MockFetcher::new().with_response("/encounters/raids", raid_payload()));

    let reply = h.dispatcher.handle("!raid bfa asmongold us kel'thuzad").await;

    assert_eq!(reply, Some(BotError::NoProgress.to_string()));
    assert_eq!(h.fetcher.calls().len(), 1);
}

/// Scenario: Unknown region
/// Then no token is requested and nothing is fetched
#[tokio::test]
async fn test_unknown_region_never_fetches() {
    let h = harness(MockFetcher::new().with_response("/character/", character_payload()));

    let char_reply = h.dispatcher.handle("!char asmongold zz area-52").await;
    let raid_reply = h.dispatcher.handle("!raid bfa asmongold zz area-52").await;

    assert_eq!(char_reply.as_deref(), Some("could not find server region"));
    assert_eq!(raid_reply.as_deref(), Some("could not find server region"));
    assert!(h.fetcher.calls().is_empty());
    assert!(h.tokens.calls().is_empty());
}

/// Scenario: Upstream returns an error status
/// Then the status text is the reply and the request is not retried
#[tokio::test]
async fn test_fetch_failure_is_reply() {
    let h = harness(
        MockFetcher::new().with_error("/character/", BotError::transport("404 Not Found")),
    );

    let reply = h.dispatcher.handle("!char nobody us area-52").await;

    assert_eq!(reply.as_deref(), Some("404 Not Found"));
    assert_eq!(h.fetcher.calls().len(), 1);
}

/// Scenario: Token acquisition fails
/// Given a token source that rejects the credentials
/// When a character or raid lookup is handled
/// Then the token error text is the reply
/// And nothing is fetched
#[tokio::test]
async fn test_token_failure_short_circuits() {
    let h = harness_with_tokens(
        MockFetcher::new()
            .with_response("/encounters/raids", raid_payload())
            .with_response("/character/", character_payload()),
        StaticTokenSource::failing(BotError::transport("401 Unauthorized")),
    );

    let char_reply = h.dispatcher.handle("!char asmongold us area-52").await;
    let raid_reply = h.dispatcher.handle("!raid wrath asmongold kr area-52").await;

    assert_eq!(char_reply.as_deref(), Some("401 Unauthorized"));
    assert_eq!(raid_reply.as_deref(), Some("401 Unauthorized"));
    assert_eq!(h.tokens.calls(), vec!["us".to_string(), "kr".to_string()]);
    assert!(h.fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_wrong_arity_is_parse_error() {
    let h = harness(MockFetcher::new());

    for line in ["!char asmongold us", "!raid bfa asmongold us", "!char", "!raid"] {
        assert_eq!(
            h.dispatcher.handle(line).await.as_deref(),
            Some("could not parse user input"),
            "line: {line}"
        );
    }
    assert!(h.fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_help_and_ignored_lines() {
    let h = harness(MockFetcher::new());

    let help = h.dispatcher.handle("!Help").await.unwrap();
    assert!(help.contains("!raid bfa asmongold us kel'thuzad"));

    assert_eq!(h.dispatcher.handle("anyone up for a raid?").await, None);
    assert_eq!(h.dispatcher.handle("!dance").await, None);
    assert!(h.fetcher.calls().is_empty());
}

#[test]
fn test_same_profile_renders_identically() {
    let h = harness(MockFetcher::new().with_response("/character/", character_payload()));

    let first = tokio_test::block_on(h.dispatcher.handle("!char asmongold us area-52"));
    let second = tokio_test::block_on(h.dispatcher.handle("!char asmongold us area-52"));

    assert_eq!(first, second);
}
