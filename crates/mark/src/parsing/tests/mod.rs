//! Behavioural tests for the block parser.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{invariants, parse};
use crate::tree::{Block, Delimiter, ListItem, ListStyle};

fn blocks(text: &str) -> Vec<Block> {
    let doc = parse(text);
    invariants::check(&doc);
    doc.into_blocks()
}

fn p(lines: &[&str]) -> Block {
    Block::paragraph(lines.iter().copied())
}

fn item(children: Vec<Block>) -> ListItem {
    ListItem::new(children)
}

fn list(style: ListStyle, delimiter: Delimiter, start: u32, items: Vec<ListItem>) -> Block {
    Block::List {
        ordered: style.is_ordered(),
        style,
        delimiter,
        start,
        items,
    }
}

fn quote(children: Vec<Block>) -> Block {
    Block::Blockquote { children }
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n   \n\t\n").is_empty());
}

#[test]
fn paragraph_lines_merge_and_trim() {
    assert_eq!(blocks("  hello  \n world"), vec![p(&["hello", "world"])]);
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(blocks("one\n\ntwo"), vec![p(&["one"]), p(&["two"])]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(blocks("a\r\nb\r\n"), vec![p(&["a", "b"])]);
}

// Thematic breaks

#[rstest]
fn repeated_break_characters_are_one_break(
    #[values('-', '*', '_')] ch: char,
    #[values(3, 4, 7, 20)] n: usize,
) {
    let input = ch.to_string().repeat(n);
    assert_eq!(blocks(&input), vec![Block::ThematicBreak]);
}

#[test]
fn break_closes_paragraph() {
    assert_eq!(
        blocks("a\n***\nb"),
        vec![p(&["a"]), Block::ThematicBreak, p(&["b"])]
    );
}

#[test]
fn spaced_break_is_not_a_list() {
    assert_eq!(blocks("- - -"), vec![Block::ThematicBreak]);
}

// Setext headers

#[test]
fn equals_underline_is_level_one() {
    assert_eq!(blocks("Title\n==="), vec![Block::header(1, "Title")]);
}

#[test]
fn dash_underline_is_level_two() {
    assert_eq!(blocks("Title\n---"), vec![Block::header(2, "Title")]);
}

#[test]
fn dashes_without_paragraph_are_a_break() {
    assert_eq!(
        blocks("Title\n\n---"),
        vec![p(&["Title"]), Block::ThematicBreak]
    );
}

#[test]
fn only_last_paragraph_line_becomes_header() {
    assert_eq!(
        blocks("Intro line\nTitle\n====="),
        vec![p(&["Intro line"]), Block::header(1, "Title")]
    );
}

#[test]
fn equals_without_paragraph_are_text() {
    assert_eq!(blocks("==="), vec![p(&["==="])]);
}

#[test]
fn short_underline_continues_paragraph() {
    assert_eq!(blocks("Title\n=="), vec![p(&["Title", "=="])]);
}

// Blockquotes

#[test]
fn quote_lines_merge_into_one_paragraph() {
    assert_eq!(
        blocks("> line one\n> line two"),
        vec![quote(vec![p(&["line one", "line two"])])]
    );
}

#[test]
fn blank_line_inside_quote_splits_paragraphs() {
    assert_eq!(
        blocks("> line one\n\n> line two"),
        vec![quote(vec![p(&["line one"]), p(&["line two"])])]
    );
}

#[test]
fn bare_marker_is_a_blank_quote_line() {
    assert_eq!(
        blocks("> one\n>\n> two"),
        vec![quote(vec![p(&["one"]), p(&["two"])])]
    );
}

#[test]
fn nested_quotes() {
    assert_eq!(
        blocks("> a\n> > b"),
        vec![quote(vec![p(&["a"]), quote(vec![p(&["b"])])])]
    );
}

#[test]
fn unquoted_line_ends_quote() {
    assert_eq!(
        blocks("> a\nb"),
        vec![quote(vec![p(&["a"])]), p(&["b"])]
    );
}

#[test]
fn quote_interrupts_paragraph() {
    assert_eq!(
        blocks("a\n> b"),
        vec![p(&["a"]), quote(vec![p(&["b"])])]
    );
}

#[test]
fn setext_header_inside_quote() {
    assert_eq!(
        blocks("> Title\n> ---"),
        vec![quote(vec![Block::header(2, "Title")])]
    );
}

#[test]
fn list_inside_quote() {
    assert_eq!(
        blocks("> - a\n> - b"),
        vec![quote(vec![list(
            ListStyle::None,
            Delimiter::Dash,
            1,
            vec![item(vec![p(&["a"])]), item(vec![p(&["b"])])]
        )])]
    );
}

// Lists

#[test]
fn alpha_markers_make_lower_alpha_list() {
    assert_eq!(
        blocks("a. one\nb. two\nc. three"),
        vec![list(
            ListStyle::LowerAlpha,
            Delimiter::Period,
            1,
            vec![
                item(vec![p(&["one"])]),
                item(vec![p(&["two"])]),
                item(vec![p(&["three"])]),
            ]
        )]
    );
}

#[rstest]
#[case("- a\n- b", ListStyle::None, Delimiter::Dash, 1)]
#[case("* a\n* b", ListStyle::None, Delimiter::Star, 1)]
#[case("+ a\n+ b", ListStyle::None, Delimiter::Plus, 1)]
#[case("1. a\n2. b", ListStyle::Decimal, Delimiter::Period, 1)]
#[case("3) a\n4) b", ListStyle::Decimal, Delimiter::Paren, 3)]
#[case("A. a\nB. b", ListStyle::UpperAlpha, Delimiter::Period, 1)]
#[case("ii. a\niii. b", ListStyle::LowerRoman, Delimiter::Period, 2)]
#[case("I) a\nII) b", ListStyle::UpperRoman, Delimiter::Paren, 1)]
fn list_styles(
    #[case] input: &str,
    #[case] style: ListStyle,
    #[case] delimiter: Delimiter,
    #[case] start: u32,
) {
    assert_eq!(
        blocks(input),
        vec![list(
            style,
            delimiter,
            start,
            vec![item(vec![p(&["a"])]), item(vec![p(&["b"])])]
        )]
    );
}

#[test]
fn roman_list_from_ambiguous_first_item() {
    assert_eq!(
        blocks("i. one\nii. two\niii. three"),
        vec![list(
            ListStyle::LowerRoman,
            Delimiter::Period,
            1,
            vec![
                item(vec![p(&["one"])]),
                item(vec![p(&["two"])]),
                item(vec![p(&["three"])]),
            ]
        )]
    );
}

#[test]
fn lone_ambiguous_item_is_alphabetic() {
    assert_eq!(
        blocks("i. one"),
        vec![list(
            ListStyle::LowerAlpha,
            Delimiter::Period,
            9,
            vec![item(vec![p(&["one"])])]
        )]
    );
}

#[test]
fn later_letter_confirms_alphabetic() {
    assert_eq!(
        blocks("I. nine\nJ. ten"),
        vec![list(
            ListStyle::UpperAlpha,
            Delimiter::Period,
            9,
            vec![item(vec![p(&["nine"])]), item(vec![p(&["ten"])])]
        )]
    );
}

#[test]
fn alpha_list_accepts_roman_letters() {
    let doc = blocks("h. eight\ni. nine");
    assert!(matches!(
        doc.as_slice(),
        [Block::List { style: ListStyle::LowerAlpha, items, .. }] if items.len() == 2
    ));
}

#[test]
fn style_change_starts_new_list() {
    assert_eq!(
        blocks("1. one\n2. two\na. three"),
        vec![
            list(
                ListStyle::Decimal,
                Delimiter::Period,
                1,
                vec![item(vec![p(&["one"])]), item(vec![p(&["two"])])]
            ),
            list(
                ListStyle::LowerAlpha,
                Delimiter::Period,
                1,
                vec![item(vec![p(&["three"])])]
            ),
        ]
    );
}

#[test]
fn decided_alpha_list_splits_at_roman_marker() {
    let doc = blocks("i. one\nj. two\nii. three");
    let styles: Vec<_> = doc
        .iter()
        .map(|b| match b {
            Block::List { style, items, .. } => (*style, items.len()),
            other => panic!("unexpected block {other:?}"),
        })
        .collect();
    assert_eq!(
        styles,
        vec![(ListStyle::LowerAlpha, 2), (ListStyle::LowerRoman, 1)]
    );
}

#[test]
fn delimiter_change_starts_new_list() {
    assert_eq!(blocks("1. one\n1) two").len(), 2);
}

#[test]
fn bullet_change_starts_new_list() {
    assert_eq!(
        blocks("- a\n* b"),
        vec![
            list(ListStyle::None, Delimiter::Dash, 1, vec![item(vec![p(&["a"])])]),
            list(ListStyle::None, Delimiter::Star, 1, vec![item(vec![p(&["b"])])]),
        ]
    );
}

#[test]
fn nested_list() {
    assert_eq!(
        blocks("- a\n  - b\n- c"),
        vec![list(
            ListStyle::None,
            Delimiter::Dash,
            1,
            vec![
                item(vec![
                    p(&["a"]),
                    list(ListStyle::None, Delimiter::Dash, 1, vec![item(vec![p(&["b"])])]),
                ]),
                item(vec![p(&["c"])]),
            ]
        )]
    );
}

#[test]
fn loose_item_holds_several_paragraphs() {
    let doc = blocks("- a\n\n  b\n- c");
    let [Block::List { items, .. }] = doc.as_slice() else {
        panic!("expected one list, got {doc:?}");
    };
    assert_eq!(items[0].children, vec![p(&["a"]), p(&["b"])]);
    assert!(!items[0].is_tight());
    assert!(items[1].is_tight());
}

#[test]
fn blank_lines_between_items_keep_one_list() {
    let doc = blocks("- a\n\n\n- b");
    assert!(matches!(doc.as_slice(), [Block::List { items, .. }] if items.len() == 2));
}

#[test]
fn unindented_text_ends_list() {
    assert_eq!(
        blocks("- a\n\nb"),
        vec![
            list(ListStyle::None, Delimiter::Dash, 1, vec![item(vec![p(&["a"])])]),
            p(&["b"]),
        ]
    );
}

#[test]
fn empty_items() {
    assert_eq!(
        blocks("-\n- b"),
        vec![list(
            ListStyle::None,
            Delimiter::Dash,
            1,
            vec![item(vec![]), item(vec![p(&["b"])])]
        )]
    );
}

#[test]
fn late_ordered_marker_continues_paragraph() {
    assert_eq!(blocks("text\n2. two"), vec![p(&["text", "2. two"])]);
}

#[test]
fn empty_marker_continues_paragraph() {
    assert_eq!(blocks("text\n-"), vec![p(&["text", "-"])]);
}

#[test]
fn bullet_interrupts_paragraph() {
    assert_eq!(
        blocks("text\n- item"),
        vec![
            p(&["text"]),
            list(ListStyle::None, Delimiter::Dash, 1, vec![item(vec![p(&["item"])])]),
        ]
    );
}

#[test]
fn break_ends_list() {
    assert_eq!(
        blocks("- a\n* * *"),
        vec![
            list(ListStyle::None, Delimiter::Dash, 1, vec![item(vec![p(&["a"])])]),
            Block::ThematicBreak,
        ]
    );
}

// Fenced code

#[test]
fn fenced_code_with_language() {
    assert_eq!(
        blocks("```lang\ncode here\n```"),
        vec![Block::code(Some("lang"), ["code here"])]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        blocks("```lang\ncode here\nmore"),
        vec![Block::code(Some("lang"), ["code here", "more"])]
    );
}

#[test]
fn code_is_verbatim() {
    let input = "```\n- item\n> quote\n---\nTitle\n===\n\n  indented  \n```";
    assert_eq!(
        blocks(input),
        vec![Block::code(
            None,
            ["- item", "> quote", "---", "Title", "===", "", "  indented  "]
        )]
    );
}

#[test]
fn closing_fence_needs_same_char_and_length() {
    assert_eq!(
        blocks("~~~~\n~~~\n```\n~~~~~"),
        vec![Block::code(None, ["~~~", "```"])]
    );
}

#[test]
fn fence_indent_is_stripped_from_content() {
    assert_eq!(
        blocks("  ```\n    x\n y\n  ```"),
        vec![Block::code(None, ["  x", "y"])]
    );
}

#[test]
fn fence_interrupts_paragraph() {
    assert_eq!(
        blocks("text\n```\ncode\n```"),
        vec![p(&["text"]), Block::code(None, ["code"])]
    );
}

#[test]
fn fence_inside_list_item() {
    assert_eq!(
        blocks("- ```sh\n  ls\n\n  pwd\n  ```"),
        vec![list(
            ListStyle::None,
            Delimiter::Dash,
            1,
            vec![item(vec![Block::code(Some("sh"), ["ls", "", "pwd"])])]
        )]
    );
}

#[test]
fn fence_inside_quote() {
    assert_eq!(
        blocks("> ```\n>\n> x\n> ```"),
        vec![quote(vec![Block::code(None, ["", "x"])])]
    );
}

#[test]
fn unterminated_fence_in_quote_closes_with_quote() {
    assert_eq!(
        blocks("> ```\n> x\nafter"),
        vec![quote(vec![Block::code(None, ["x"])]), p(&["after"])]
    );
}

// Graceful degradation

#[rstest]
#[case("\t- \t")]
#[case("1.")]
#[case(">")]
#[case("```")]
#[case("~~~ a`b")]
#[case("- > - > x")]
#[case("é- x\n\u{a0}\n- é")]
#[case("mix. words\n===\n***\n> ```\n")]
#[case("- a\n  ```\n-\n\n  b")]
fn odd_input_still_parses(#[case] input: &str) {
    let doc = parse(input);
    invariants::check(&doc);
}

#[test]
fn deep_nesting_is_bounded() {
    fn depth(blocks: &[Block]) -> usize {
        blocks
            .iter()
            .map(|b| match b {
                Block::Blockquote { children } => 1 + depth(children),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }

    let input = format!("{} deep", ">".repeat(500));
    let doc = parse(&input);
    invariants::check(&doc);
    assert_eq!(depth(doc.blocks()), 64);
}

#[test]
fn raw_html_is_plain_text() {
    assert_eq!(blocks("<div>\nhi\n</div>"), vec![p(&["<div>", "hi", "</div>"])]);
}

#[test]
fn rope_and_str_entry_points_agree() {
    let text = "Title\n===\n\n- a\n  > b\r\n";
    let rope = xi_rope::Rope::from(text);
    assert_eq!(crate::parsing::parse_rope(&rope), parse(text));
}
