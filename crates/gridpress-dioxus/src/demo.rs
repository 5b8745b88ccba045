//! Built-in sample content used when no library or reference data exists yet,
//! so a first launch shows a working article instead of an empty window.

use gridpress_engine::blocks::patch::{
    BlockPatch, DriverCardPatch, HeadingPatch, ImagePatch, ParagraphPatch, QuotePatch,
    RaceResultPatch,
};
use gridpress_engine::models::refdata::{
    Driver, Race, ReferenceStore, ResultRow, SessionKind, SessionResult, Team,
};
use gridpress_engine::{Article, BlockKind};

pub fn demo_reference_store() -> ReferenceStore {
    let mut store = ReferenceStore::new();

    store.add_team(Team {
        id: "red-bull".into(),
        name: "Red Bull Racing".to_string(),
        base: "Milton Keynes".to_string(),
        principal: "Laurent Mekies".to_string(),
        points: 412.0,
    });
    store.add_team(Team {
        id: "mclaren".into(),
        name: "McLaren".to_string(),
        base: "Woking".to_string(),
        principal: "Andrea Stella".to_string(),
        points: 531.0,
    });
    store.add_team(Team {
        id: "ferrari".into(),
        name: "Ferrari".to_string(),
        base: "Maranello".to_string(),
        principal: "Fred Vasseur".to_string(),
        points: 356.0,
    });

    store.add_driver(Driver {
        id: "verstappen".into(),
        name: "Max Verstappen".to_string(),
        number: 1,
        team_id: "red-bull".into(),
        country: "Netherlands".to_string(),
        points: 255.0,
        wins: 6,
        podiums: 10,
    });
    store.add_driver(Driver {
        id: "norris".into(),
        name: "Lando Norris".to_string(),
        number: 4,
        team_id: "mclaren".into(),
        country: "United Kingdom".to_string(),
        points: 279.0,
        wins: 5,
        podiums: 12,
    });
    store.add_driver(Driver {
        id: "piastri".into(),
        name: "Oscar Piastri".to_string(),
        number: 81,
        team_id: "mclaren".into(),
        country: "Australia".to_string(),
        points: 252.0,
        wins: 4,
        podiums: 11,
    });
    store.add_driver(Driver {
        id: "leclerc".into(),
        name: "Charles Leclerc".to_string(),
        number: 16,
        team_id: "ferrari".into(),
        country: "Monaco".to_string(),
        points: 198.0,
        wins: 2,
        podiums: 8,
    });

    store.add_race(Race {
        id: "monza-2026".into(),
        name: "Italian Grand Prix".to_string(),
        circuit: "Autodromo Nazionale Monza".to_string(),
        country: "Italy".to_string(),
        round: 16,
        date: "2026-09-06".to_string(),
    });

    store.add_session_result(SessionResult {
        race_id: "monza-2026".into(),
        session: SessionKind::Race,
        rows: vec![
            ResultRow {
                position: 1,
                driver_id: "norris".into(),
                gap: "1:12:08.442".to_string(),
                points: 25.0,
            },
            ResultRow {
                position: 2,
                driver_id: "verstappen".into(),
                gap: "+2.664s".to_string(),
                points: 18.0,
            },
            ResultRow {
                position: 3,
                driver_id: "leclerc".into(),
                gap: "+14.132s".to_string(),
                points: 15.0,
            },
            ResultRow {
                position: 4,
                driver_id: "piastri".into(),
                gap: "+20.518s".to_string(),
                points: 12.0,
            },
        ],
    });

    store
}

pub fn demo_article() -> Article {
    let mut article = Article::new("Norris wins a Monza thriller");
    article.standfirst =
        "McLaren edge Red Bull in a race decided by one brave call at the second safety car."
            .to_string();
    let body = &mut article.body;

    // Seeding goes through the normal insert/update path. Inserting the
    // built-in kinds cannot fail, so the Result is safe to ignore.
    if let Ok(id) = body.insert(&BlockKind::Heading, None) {
        body.update(
            id,
            &BlockPatch::Heading(HeadingPatch {
                content: Some("A slipstream masterclass".to_string()),
                ..Default::default()
            }),
        );
    }
    if let Ok(id) = body.insert(&BlockKind::Paragraph, None) {
        body.update(
            id,
            &BlockPatch::Paragraph(ParagraphPatch {
                content: Some(
                    "Lando Norris took his fifth win of the season at Monza, holding off \
                     Max Verstappen by under three seconds after staying out through the \
                     late safety car."
                        .to_string(),
                ),
                drop_cap: Some(true),
                ..Default::default()
            }),
        );
    }
    if let Ok(id) = body.insert(&BlockKind::Image, None) {
        body.update(
            id,
            &BlockPatch::Image(ImagePatch {
                url: Some("https://example.com/monza-podium.jpg".to_string()),
                alt: Some("Podium celebrations at Monza".to_string()),
                credits: Some("Gridpress / Sample data".to_string()),
                ..Default::default()
            }),
        );
    }
    if let Ok(id) = body.insert(&BlockKind::Quote, None) {
        body.update(
            id,
            &BlockPatch::Quote(QuotePatch {
                content: Some("We rolled the dice on the hards and it paid off.".to_string()),
                attribution: Some("Lando Norris".to_string()),
                ..Default::default()
            }),
        );
    }
    if let Ok(id) = body.insert(&BlockKind::DriverCard, None) {
        body.update(
            id,
            &BlockPatch::DriverCard(DriverCardPatch {
                id: Some("norris".to_string()),
                ..Default::default()
            }),
        );
    }
    if let Ok(id) = body.insert(&BlockKind::RaceResult, None) {
        body.update(
            id,
            &BlockPatch::RaceResult(RaceResultPatch {
                id: Some("monza-2026".to_string()),
                ..Default::default()
            }),
        );
    }
    let _ = body.insert(&BlockKind::Standings, None);

    article
}
