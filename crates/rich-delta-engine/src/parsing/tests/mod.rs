//! Behaviour tests for the parse entry points.


use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::parsing::{
    blots::{Blot, BlotVariant, OpWindow},
    delta::Operation,
    parse, parse_into_test_data, parse_mention_usernames,
    registry::Registry,
    snapshot::{self, BlotSnap},
};

fn text(s: &str) -> Operation {
    Operation::text(s)
}

fn end(attr: &str, value: Value) -> Operation {
    Operation::text("\n").with_attr(attr, value)
}

fn test_data(ops: &[Operation]) -> Vec<Vec<BlotSnap>> {
    parse_into_test_data(&Registry::builtin(), ops)
}

fn snap(kind: &str, content: &str) -> BlotSnap {
    BlotSnap::new(kind, content)
}

#[test]
fn empty_input_no_groups() {
    assert!(parse(&Registry::builtin(), &[]).is_empty());
}

#[test]
fn single_paragraph() {
    assert_eq!(
        test_data(&[text("Hello world\n")]),
        vec![vec![snap("text", "Hello world")]]
    );
}

#[test]
fn each_line_is_a_group() {
    assert_eq!(
        test_data(&[text("Line1\nLine2\n")]),
        vec![vec![snap("text", "Line1")], vec![snap("text", "Line2")]]
    );
}

#[test]
fn blank_line_is_its_own_group() {
    assert_eq!(
        test_data(&[text("A\n\nB\n")]),
        vec![
            vec![snap("text", "A")],
            vec![snap("text", "\n")],
            vec![snap("text", "B")]
        ]
    );
}

#[test]
fn lone_newline_document_is_empty() {
    assert!(test_data(&[text("\n")]).is_empty());
}

#[test]
fn mention_usernames() {
    let ops = [text("@alice ").with_attr("mention", json!({ "name": "alice" }))];
    assert_eq!(parse_mention_usernames(&Registry::builtin(), &ops), vec!["alice"]);
}

#[test]
fn mention_usernames_without_mention_variant() {
    let ops = [text("@alice ").with_attr("mention", json!({ "name": "alice" }))];
    let registry = Registry::builder()
        .with_blot(BlotVariant::builtin("text").unwrap())
        .build();
    assert!(parse_mention_usernames(&registry, &ops).is_empty());
    assert!(parse_mention_usernames(&Registry::empty(), &ops).is_empty());
}

#[test]
fn mention_usernames_across_groups_in_order() {
    let ops = [
        text("@bob").with_attr("mention", json!({ "name": "bob" })),
        text(" said hi\n"),
        Operation::embed(json!({ "mention": { "name": "carol" } })),
        text(" and "),
        text("@dave").with_attr("mention", json!({ "name": "dave" })),
        text("\n"),
    ];
    assert_eq!(
        parse_mention_usernames(&Registry::builtin(), &ops),
        vec!["bob", "carol", "dave"]
    );
    assert_eq!(parse(&Registry::builtin(), &ops).len(), 2);
}

#[derive(Debug)]
struct Named(&'static str);

impl Blot for Named {
    fn kind(&self) -> &str {
        self.0
    }

    fn content(&self) -> String {
        String::new()
    }
}

fn greedy(current: &Operation, _next: Option<&Operation>) -> bool {
    current.text_insert().is_some()
}

fn build_early(_: OpWindow<'_>) -> Box<dyn Blot> {
    Box::new(Named("early"))
}

fn build_late(_: OpWindow<'_>) -> Box<dyn Blot> {
    Box::new(Named("late"))
}

#[test]
fn earlier_registration_wins() {
    let registry = Registry::builder()
        .with_blot(BlotVariant::new("early", greedy, build_early))
        .with_blot(BlotVariant::new("late", greedy, build_late))
        .build();
    let data = parse_into_test_data(&registry, &[text("anything")]);
    assert_eq!(data, vec![vec![snap("early", "")]]);

    let reversed = Registry::builder()
        .with_blot(BlotVariant::new("late", greedy, build_late))
        .with_blot(BlotVariant::new("early", greedy, build_early))
        .build();
    let data = parse_into_test_data(&reversed, &[text("anything")]);
    assert_eq!(data, vec![vec![snap("late", "")]]);
}

#[test]
fn heading_is_isolated() {
    let ops = [
        text("Before\n"),
        text("Title"),
        end("header", json!(1)),
        text("After\n"),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![snap("text", "Before")],
            vec![snap("heading", "Title")],
            vec![snap("text", "After")]
        ]
    );
}

#[test]
fn consumed_terminator_is_not_reprocessed() {
    let ops = [text("item"), end("list", json!("bullet"))];
    let data = test_data(&ops);
    let blots: usize = data.iter().map(Vec::len).sum();
    assert_eq!(blots, ops.len() - 1);
    assert_eq!(data, vec![vec![snap("list", "item")]]);
}

#[test]
fn list_items_share_a_group() {
    let ops = [
        text("Groceries\n"),
        text("Milk"),
        end("list", json!("bullet")),
        text("Eggs"),
        end("list", json!("bullet")),
        text("Done\n"),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![snap("text", "Groceries")],
            vec![snap("list", "Milk"), snap("list", "Eggs")],
            vec![snap("text", "Done")]
        ]
    );
}

#[test]
fn different_line_structures_split() {
    let ops = [
        text("quoted"),
        end("blockquote-line", json!(true)),
        text("listed"),
        end("list", json!("ordered")),
        text("hidden"),
        end("spoiler-line", json!(true)),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![snap("blockquote", "quoted")],
            vec![snap("list", "listed")],
            vec![snap("spoiler", "hidden")]
        ]
    );
}

#[test]
fn list_style_change_splits() {
    let ops = [
        text("one"),
        end("list", json!("bullet")),
        text("two"),
        end("list", json!("ordered")),
    ];
    assert_eq!(parse(&Registry::builtin(), &ops).len(), 2);
}

#[test]
fn inline_content_of_a_line_joins_its_group() {
    let ops = [
        text("Hello "),
        text("world").with_attr("bold", json!(true)),
        end("blockquote-line", json!(true)),
        text("Second"),
        end("blockquote-line", json!(true)),
    ];
    assert_eq!(
        test_data(&ops),
        vec![vec![
            snap("text", "Hello "),
            snap("blockquote", "world").with_formats(["bold"]),
            snap("blockquote", "Second")
        ]]
    );
}

#[test]
fn formatted_run_inside_second_list_item() {
    let ops = [
        text("Milk"),
        end("list", json!("bullet")),
        text("Fresh "),
        text("eggs").with_attr("bold", json!(true)),
        end("list", json!("bullet")),
    ];
    assert_eq!(
        test_data(&ops),
        vec![vec![
            snap("list", "Milk"),
            snap("text", "Fresh "),
            snap("list", "eggs").with_formats(["bold"])
        ]]
    );
}

#[test]
fn quote_line_starting_with_mention() {
    let ops = [
        text("a"),
        end("blockquote-line", json!(true)),
        text("@bob").with_attr("mention", json!({ "name": "bob" })),
        text(" said"),
        end("blockquote-line", json!(true)),
    ];
    let groups = parse(&Registry::builtin(), &ops);
    assert_eq!(
        groups.iter().map(|g| g.snapshot()).collect::<Vec<_>>(),
        vec![vec![
            snap("blockquote", "a"),
            snap("mention", "@bob"),
            snap("blockquote", " said")
        ]]
    );
    assert_eq!(groups[0].mention_usernames(), vec!["bob"]);
}

#[test]
fn multi_run_line_of_another_kind_splits() {
    let ops = [
        text("a"),
        end("list", json!("bullet")),
        text("b").with_attr("bold", json!(true)),
        text("c"),
        end("blockquote-line", json!(true)),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![snap("list", "a")],
            vec![
                snap("text", "b").with_formats(["bold"]),
                snap("blockquote", "c")
            ]
        ]
    );
}

/// Inline run that opens a line.
#[derive(Debug, Clone, Copy)]
enum Lead {
    Bold,
    Mention,
    Emoji,
}

impl Lead {
    fn op(self) -> Operation {
        match self {
            Lead::Bold => text("Fresh").with_attr("bold", json!(true)),
            Lead::Mention => text("@bob").with_attr("mention", json!({ "name": "bob" })),
            Lead::Emoji => Operation::embed(json!({ "emoji": { "emojiChar": "🙂" } })),
        }
    }

    fn snap(self) -> BlotSnap {
        match self {
            Lead::Bold => snap("text", "Fresh").with_formats(["bold"]),
            Lead::Mention => snap("mention", "@bob"),
            Lead::Emoji => snap("emoji", "🙂"),
        }
    }
}

#[rstest]
fn later_line_opening_with_inline_run_stays_in_group(
    #[values(
        ("list", "list"),
        ("blockquote-line", "blockquote"),
        ("spoiler-line", "spoiler"),
        ("code-block", "code-block")
    )]
    line: (&str, &str),
    #[values(Lead::Bold, Lead::Mention, Lead::Emoji)] lead: Lead,
) {
    let (attr, kind) = line;
    let value = if attr == "list" {
        json!("bullet")
    } else {
        json!(true)
    };
    let ops = [
        text("first"),
        end(attr, value.clone()),
        lead.op(),
        text(" tail"),
        end(attr, value),
    ];
    assert_eq!(
        test_data(&ops),
        vec![vec![snap(kind, "first"), lead.snap(), snap(kind, " tail")]]
    );
}

#[test]
fn embed_at_end_of_list_item() {
    let ops = [
        text("Hi "),
        text("@alice").with_attr("mention", json!({ "name": "alice" })),
        end("list", json!("bullet")),
    ];
    let groups = parse(&Registry::builtin(), &ops);
    assert_eq!(
        groups.iter().map(|g| g.snapshot()).collect::<Vec<_>>(),
        vec![vec![
            snap("text", "Hi "),
            snap("mention", "@alice"),
            snap("list", "")
        ]]
    );
    assert_eq!(groups[0].mention_usernames(), vec!["alice"]);
}

#[test]
fn code_block_does_not_mix_with_following_text() {
    let ops = [
        text("fn main() {}"),
        end("code-block", json!(true)),
        text("let x = 1;"),
        end("code-block", json!(true)),
        text("after").with_attr("italic", json!(true)),
        text("\n"),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![
                snap("code-block", "fn main() {}"),
                snap("code-block", "let x = 1;")
            ],
            vec![snap("text", "after").with_formats(["italic"])]
        ]
    );
}

#[test]
fn formatted_text_after_quote_starts_new_group() {
    let ops = [
        text("q"),
        end("blockquote-line", json!(true)),
        text("tail").with_attr("italic", json!(true)),
        text("\n"),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![snap("blockquote", "q")],
            vec![snap("text", "tail").with_formats(["italic"])]
        ]
    );
}

#[test]
fn external_embed_is_isolated() {
    let ops = [
        text("before"),
        Operation::embed(json!({
            "embed-external": { "data": { "url": "https://example.com", "type": "link" } }
        })),
        text("after\n"),
    ];
    assert_eq!(
        test_data(&ops),
        vec![
            vec![snap("text", "before")],
            vec![snap("external", "https://example.com")],
            vec![snap("text", "after")]
        ]
    );
}

#[test]
fn unknown_embed_renders_as_null() {
    let ops = [Operation::embed(json!({ "video": { "src": "clip.mp4" } }))];
    assert_eq!(test_data(&ops), vec![vec![snap("null", "")]]);
}

#[test]
fn link_and_bold_attach_together() {
    let ops = [
        text("docs")
            .with_attr("link", json!("https://example.com"))
            .with_attr("bold", json!(true)),
        text("\n"),
    ];
    assert_eq!(
        test_data(&ops),
        vec![vec![snap("text", "docs").with_formats(["link", "bold"])]]
    );
}

#[test]
fn parsing_is_thread_safe() {
    let registry = Registry::shared();
    let ops = vec![text("a\nb\n"), text("item"), end("list", json!("bullet"))];
    let expected = parse_into_test_data(registry, &ops);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| parse_into_test_data(registry, &ops)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn invariants_hold_for_mixed_document() {
    let ops = [
        text("Title"),
        end("header", json!(2)),
        text("Intro with "),
        Operation::embed(json!({ "emoji": { "emojiChar": "🙂" } })),
        text("\n\n"),
        text("one"),
        end("list", json!("ordered")),
        end("list", json!("ordered")),
        text("\n"),
    ];
    let groups = parse(&Registry::builtin(), &ops);
    snapshot::invariants(&groups);
    // heading, intro paragraph, blank line, list, blank line
    assert_eq!(groups.len(), 5);
}
