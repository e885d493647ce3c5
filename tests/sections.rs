#[macro_use]
mod cases;

use indoc::indoc;
use whisker::MissingKey;

render_case!(
    loop_over_sequence,
    context: r#"{"people": [{"name": "Ann"}, {"name": "Ben"}]}"#,
    template: "{{#people}}<{{name}}>{{/people}}",
    rendered: Ok("<Ann><Ben>"),
);

render_case!(
    loop_over_primitives_repeats_body,
    context: r#"{"items": [1, 2, 3], "mark": "x"}"#,
    template: "{{#items}}{{mark}}{{/items}}",
    rendered: Ok("xxx"),
);

render_case!(
    mapping_element_does_not_see_outer_names,
    context: r#"{"greeting": "Hi", "people": [{"name": "Ann"}]}"#,
    template: "{{#people}}[{{greeting}}] {{name}}{{/people}}",
    rendered: Ok("[] Ann"),
);

render_case!(
    mapping_element_sees_outer_names_with_fall_through,
    missing_key: MissingKey::FallThrough,
    context: r#"{"greeting": "Hi", "people": [{"name": "Ann"}, {"name": "Ben"}]}"#,
    template: "{{#people}}{{greeting}} {{name}}. {{/people}}",
    rendered: Ok("Hi Ann. Hi Ben. "),
);

render_case!(
    inner_key_wins_over_outer_key,
    missing_key: MissingKey::FallThrough,
    context: r#"{"title": "Outer", "items": [{"title": "Inner"}, {"other": 1}]}"#,
    template: "{{#items}}[{{title}}]{{/items}}",
    rendered: Ok("[Inner][Outer]"),
);

render_case!(
    nested_loops,
    context: indoc! {r#"
        {
            "groups": [
                {"name": "A", "members": [{"id": 1}, {"id": 2}]},
                {"name": "B", "members": []}
            ]
        }"#},
    template: "{{#groups}}{{name}}:{{#members}}{{id}}{{/members}};{{/groups}}",
    rendered: Ok("A:12;B:;"),
);

render_case!(
    empty_sequence_skips_section,
    context: r#"{"items": []}"#,
    template: "({{#items}}never{{/items}})",
    rendered: Ok("()"),
);

render_case!(
    inverted_section_on_empty_values,
    context: r#"{"items": [], "text": "", "object": {}}"#,
    template: "{{^items}}a{{/items}}{{^text}}b{{/text}}{{^object}}c{{/object}}",
    rendered: Ok("abc"),
);

render_case!(
    inverted_section_on_missing_and_false,
    context: r#"{"flag": false}"#,
    template: "{{^flag}}off{{/flag}} {{^nothing}}none{{/nothing}}",
    rendered: Ok("off none"),
);

render_case!(
    inverted_section_on_present_values,
    context: r#"{"items": [0], "text": "t", "zero": 0}"#,
    template: "[{{^items}}a{{/items}}{{^text}}b{{/text}}{{^zero}}c{{/zero}}]",
    rendered: Ok("[]"),
);

render_case!(
    sequence_root_exposes_members,
    context: r#"["x", "y", "z"]"#,
    template: "{{first}}{{last}}{{size}} {{0}}{{-1}}{{7}}",
    rendered: Ok("xz3 xz"),
);
