//! Shared fixtures for pipeline tests.

use std::sync::Arc;

use raidscout::blizzard::{MockFetcher, StaticTokenSource};
use raidscout::commands::Dispatcher;
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token";

pub struct Harness {
    pub dispatcher: Dispatcher,
    pub fetcher: Arc<MockFetcher>,
    pub tokens: Arc<StaticTokenSource>,
}

pub fn harness(fetcher: MockFetcher) -> Harness {
    harness_with_tokens(fetcher, StaticTokenSource::new(TOKEN))
}

pub fn harness_with_tokens(fetcher: MockFetcher, tokens: StaticTokenSource) -> Harness {
    let fetcher = Arc::new(fetcher);
    let tokens = Arc::new(tokens);
    let dispatcher = Dispatcher::new(fetcher.clone(), tokens.clone());
    Harness {
        dispatcher,
        fetcher,
        tokens,
    }
}

pub fn character_payload() -> Value {
    json!({
        "_links": { "self": { "href": "https://us.api.blizzard.com/..." } },
        "id": 1234,
        "name": "Asmongold",
        "gender": { "type": "MALE", "name": "Male" },
        "faction": { "type": "HORDE", "name": "Horde" },
        "race": { "key": { "href": "..." }, "name": "Orc", "id": 2 },
        "character_class": { "key": { "href": "..." }, "name": "Warrior", "id": 1 },
        "active_spec": { "key": { "href": "..." }, "name": "Protection", "id": 73 },
        "realm": { "name": "Area 52", "slug": "area-52" },
        "guild": { "name": "OTK", "id": 99 },
        "level": 120,
        "average_item_level": 445,
        "equipped_item_level": 443
    })
}

pub fn raid_payload() -> Value {
    json!({
        "character": { "name": "Asmongold", "realm": { "slug": "kelthuzad" } },
        "expansions": [
            {
                "expansion": { "name": "Classic", "id": 68 },
                "instances": [{
                    "instance": { "name": "Molten Core", "id": 741 },
                    "modes": [{
                        "difficulty": { "type": "LEGACY_40_MAN", "name": "Legacy 40 Player" },
                        "status": { "type": "COMPLETE", "name": "Complete" },
                        "progress": { "completed_count": 10, "total_count": 10, "encounters": [] }
                    }]
                }]
            },
            {
                "expansion": { "name": "Burning Crusade", "id": 70 },
                "instances": []
            },
            {
                "expansion": { "name": "Wrath of the Lich King", "id": 72 },
                "instances": [
                    {
                        "instance": { "name": "Naxxramas", "id": 754 },
                        "modes": [
                            {
                                "difficulty": { "type": "LEGACY_10_MAN", "name": "10 Player" },
                                "progress": { "completed_count": 15, "total_count": 15 }
                            },
                            {
                                "difficulty": { "type": "LEGACY_25_MAN", "name": "25 Player" },
                                "progress": { "completed_count": 4, "total_count": 15 }
                            }
                        ]
                    },
                    {
                        "instance": { "name": "Icecrown Citadel", "id": 758 },
                        "modes": [{
                            "difficulty": { "type": "LEGACY_25_MAN_HEROIC", "name": "25 Player (Heroic)" },
                            "progress": { "completed_count": 12, "total_count": 12 }
                        }]
                    }
                ]
            }
        ]
    })
}
