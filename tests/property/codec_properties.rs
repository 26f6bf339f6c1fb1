use noteblob::codec::{add_link, format, merge, parse, remove_link};
use noteblob::domain::NoteComponents;
use proptest::prelude::*;

/// A content line: no leading/trailing whitespace, never a header.
fn content_line() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .!?-]{0,30}[A-Za-z0-9.]"
}

fn content() -> impl Strategy<Value = String> {
    prop::collection::vec(content_line(), 1..5).prop_map(|lines| lines.join("\n"))
}

fn critical() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,20}[A-Za-z0-9]"
}

fn link_id() -> impl Strategy<Value = String> {
    "[A-Z0-9]{1,8}"
}

fn link_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(link_id(), 0..6)
}

fn components() -> impl Strategy<Value = NoteComponents> {
    (
        prop::option::of(content()),
        prop::option::of(critical()),
        link_ids(),
    )
        .prop_map(|(content, critical, links)| {
            let mut note = NoteComponents::new().with_links(links);
            note.set_content(content);
            note.set_critical(critical);
            note
        })
}

/// Whitespace-only values, which decode as absent.
fn blank() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// Like `components()`, but critical and ids may also be blank.
fn components_with_blanks() -> impl Strategy<Value = NoteComponents> {
    (
        prop::option::of(content()),
        prop::option::of(prop_oneof![critical(), blank()]),
        prop::collection::vec(prop_oneof![link_id(), blank()], 0..6),
    )
        .prop_map(|(content, critical, links)| {
            let mut note = NoteComponents::new().with_links(links);
            note.set_content(content);
            note.set_critical(critical);
            note
        })
}

proptest! {
    #[test]
    fn parse_inverts_format(note in components()) {
        prop_assert_eq!(parse(Some(format(&note).as_str())), note);
    }

    #[test]
    fn format_is_idempotent(note in components_with_blanks()) {
        let once = format(&note);
        let twice = format(&parse(Some(once.as_str())));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn parse_arbitrary_text_keeps_invariants(text in "(?s).{0,200}") {
        let note = parse(Some(text.as_str()));

        prop_assert!(note.links().is_none_or(|links| !links.is_empty()));
        let links_well_formed = note.links().is_none_or(|links| links.iter().all(|id| {
            !id.is_empty() && !id.contains(',') && id.trim() == id
        }));
        prop_assert!(links_well_formed);
        if let Some(critical) = note.critical() {
            prop_assert!(!critical.is_empty());
            prop_assert!(!critical.contains('\n'));
            prop_assert_eq!(critical.trim(), critical);
        }
    }

    #[test]
    fn merge_links_are_existing_then_new(existing in link_ids(), updates in link_ids()) {
        let merged = merge(
            &NoteComponents::new().with_links(existing.clone()),
            &NoteComponents::new().with_links(updates.clone()),
        );

        let mut expected: Vec<String> = Vec::new();
        for id in existing.into_iter().chain(updates) {
            if !expected.contains(&id) {
                expected.push(id);
            }
        }

        let actual: Vec<String> = merged
            .links()
            .map(|links| links.iter().cloned().collect())
            .unwrap_or_default();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn add_then_remove_restores_links(note in components(), id in "X[a-z]{1,4}") {
        // Ids from link_id() are uppercase/digits, so `id` is never already present
        let text = format(&note);
        let restored = remove_link(Some(add_link(Some(text.as_str()), &id).as_str()), &id);
        prop_assert_eq!(parse(Some(restored.as_str())), parse(Some(text.as_str())));
    }

    #[test]
    fn add_link_is_idempotent(
        note in components(),
        id in prop_oneof![link_id(), blank()]
    ) {
        let text = format(&note);
        let once = add_link(Some(text.as_str()), &id);
        prop_assert_eq!(add_link(Some(once.as_str()), &id), once);
    }
}
