// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{BuildError, DeckBuilder};
use crate::model::{DeckItem, InvalidLayoutKind, LayoutKind};

#[fixture]
fn builder() -> DeckBuilder {
    DeckBuilder::new().with_title("Test deck")
}

fn bodies_and_kinds(items: &[DeckItem]) -> Vec<(String, LayoutKind)> {
    items
        .iter()
        .filter_map(|item| match item {
            DeckItem::Slide(slide) => Some((slide.body().to_owned(), slide.kind())),
            DeckItem::Section(_) => None,
        })
        .collect()
}

#[rstest]
fn deck_without_sections_is_flat(mut builder: DeckBuilder) {
    builder.slide("one", ":center").unwrap();
    builder.slide("two", "code").unwrap();
    builder.slide("three", ":block").unwrap();
    let deck = builder.finish();

    assert_eq!(deck.title(), Some("Test deck"));
    assert_eq!(deck.sections().count(), 0);
    assert_eq!(
        bodies_and_kinds(deck.items()),
        [
            ("one".to_owned(), LayoutKind::Center),
            ("two".to_owned(), LayoutKind::Code),
            ("three".to_owned(), LayoutKind::Block),
        ]
    );
}

#[rstest]
fn slide_bodies_are_stored_verbatim(mut builder: DeckBuilder) {
    let body = "  class HttpRequest\n    attr_reader :typhoeus_request\n  end\n\n";
    builder.slide(body, ":code").unwrap();
    let deck = builder.finish();

    let slide = deck.slide_at(0).expect("slide").slide;
    assert_eq!(slide.body(), body);
    assert_eq!(slide.kind(), LayoutKind::Code);
}

#[rstest]
fn unknown_kind_fails_and_appends_nothing(mut builder: DeckBuilder) {
    builder.slide("kept", ":center").unwrap();

    let err = builder.slide("dropped", ":bullets").unwrap_err();
    assert_eq!(err, BuildError::InvalidLayoutKind(InvalidLayoutKind::new(":bullets")));
    assert_eq!(builder.len(), 1);

    let deck = builder.finish();
    assert_eq!(deck.slide_count(), 1);
}

#[rstest]
fn section_contains_its_slides_in_order(mut builder: DeckBuilder) {
    builder.slide("before", ":center").unwrap();
    builder
        .section("Conclusion", |s| {
            s.slide("Questions?", ":center")?;
            s.slide("PS ...", ":center")?;
            Ok(())
        })
        .unwrap();
    builder.slide("after", ":center").unwrap();
    let deck = builder.finish();

    assert_eq!(deck.items().len(), 3);
    let sections = deck.sections().collect::<Vec<_>>();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name(), "Conclusion");
    let slides = sections[0]
        .slides()
        .iter()
        .map(|slide| (slide.body(), slide.kind()))
        .collect::<Vec<_>>();
    assert_eq!(slides, [("Questions?", LayoutKind::Center), ("PS ...", LayoutKind::Center)]);

    // Not duplicated at the top level.
    assert_eq!(
        bodies_and_kinds(deck.items()),
        [("before".to_owned(), LayoutKind::Center), ("after".to_owned(), LayoutKind::Center)]
    );

    let order = deck.slides().map(|s| s.slide.body()).collect::<Vec<_>>();
    assert_eq!(order, ["before", "Questions?", "PS ...", "after"]);
}

#[rstest]
fn failing_section_is_discarded(mut builder: DeckBuilder) {
    builder.slide("before", ":center").unwrap();
    let err = builder
        .section("Broken", |s| {
            s.slide("fine", ":block")?;
            s.slide("bad", ":image")?;
            s.slide("never", ":block")?;
            Ok(())
        })
        .unwrap_err();

    assert_eq!(err, BuildError::InvalidLayoutKind(InvalidLayoutKind::new(":image")));
    assert_eq!(builder.len(), 1);
    assert_eq!(builder.finish().sections().count(), 0);
}

#[rstest]
fn handled_bad_kind_inside_section_appends_nothing(mut builder: DeckBuilder) {
    builder
        .section("Recovering", |s| {
            let err = s.slide("x", ":bad").unwrap_err();
            assert_eq!(err, BuildError::InvalidLayoutKind(InvalidLayoutKind::new(":bad")));
            assert_eq!(s.len(), 0);

            s.slide("y", ":code")?;
            Ok(())
        })
        .unwrap();

    let deck = builder.finish();
    let sections = deck.sections().collect::<Vec<_>>();
    assert_eq!(sections.len(), 1);
    let bodies = sections[0].slides().iter().map(|slide| slide.body()).collect::<Vec<_>>();
    assert_eq!(bodies, ["y"]);
}

#[rstest]
fn empty_section_is_kept(mut builder: DeckBuilder) {
    builder.section("Placeholder", |_| Ok(())).unwrap();
    let deck = builder.finish();

    let sections = deck.sections().collect::<Vec<_>>();
    assert_eq!(sections.len(), 1);
    assert!(sections[0].is_empty());
    assert_eq!(deck.slide_count(), 0);
}

#[rstest]
fn open_section_appends_on_drop(mut builder: DeckBuilder) {
    {
        let mut scope = builder.open_section("Scoped");
        scope.slide("inside", "block").unwrap();
        assert_eq!(scope.name(), "Scoped");
        assert_eq!(scope.len(), 1);
    }
    builder.slide("outside", "center").unwrap();

    let deck = builder.finish();
    let order = deck.slides().map(|s| (s.section, s.slide.body())).collect::<Vec<_>>();
    assert_eq!(order, [(Some("Scoped"), "inside"), (None, "outside")]);
}

#[rstest]
fn abandoned_scope_appends_nothing(mut builder: DeckBuilder) {
    let mut scope = builder.open_section("Gone");
    scope.slide("inside", "block").unwrap();
    scope.abandon();

    assert!(builder.is_empty());
}

#[test]
fn slides_can_be_chained() {
    let mut builder = DeckBuilder::new();
    builder.slide("a", "center").and_then(|b| b.slide("b", "code")).unwrap();
    assert_eq!(builder.finish().slide_count(), 2);
}
