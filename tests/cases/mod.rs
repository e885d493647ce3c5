//! A minimal section renderer used to drive resolution end to end.
//!
//! Supports `{{name}}`, `{{#name}}..{{/name}}` and `{{^name}}..{{/name}}`.
//! Falsy values are absent names, null, `false` and anything empty.

use bumpalo::Bump;
use whisker::{ContextBuilder, ContextResolver, Error, MissingKey, Resolved, ResolverOptions};

#[derive(Debug)]
enum Node<'t> {
    Text(&'t str),
    Var(&'t str),
    Section {
        name: &'t str,
        inverted: bool,
        body: Vec<Node<'t>>,
    },
}

fn parse(template: &str) -> Vec<Node<'_>> {
    let mut rest = template;
    parse_until(&mut rest, None)
}

fn parse_until<'t>(rest: &mut &'t str, closing: Option<&str>) -> Vec<Node<'t>> {
    let mut nodes = Vec::new();
    while let Some(start) = rest.find("{{") {
        if start > 0 {
            nodes.push(Node::Text(&rest[..start]));
        }
        let end = start + rest[start..].find("}}").expect("unclosed tag");
        let tag = rest[start + 2..end].trim();
        *rest = &rest[end + 2..];

        if let Some(name) = tag.strip_prefix('/') {
            assert_eq!(Some(name), closing, "mismatched section end");
            return nodes;
        } else if let Some(name) = tag.strip_prefix('#') {
            let body = parse_until(rest, Some(name));
            nodes.push(Node::Section {
                name,
                inverted: false,
                body,
            });
        } else if let Some(name) = tag.strip_prefix('^') {
            let body = parse_until(rest, Some(name));
            nodes.push(Node::Section {
                name,
                inverted: true,
                body,
            });
        } else {
            nodes.push(Node::Var(tag));
        }
    }
    assert!(closing.is_none(), "unclosed section {:?}", closing);
    if !rest.is_empty() {
        nodes.push(Node::Text(rest));
        *rest = "";
    }
    nodes
}

fn is_falsy(found: Option<&Resolved<'_>>) -> bool {
    found.is_none_or(Resolved::is_falsy)
}

fn render_nodes<'a>(
    scope: &'a ContextResolver<'a>,
    nodes: &[Node<'_>],
    out: &mut String,
) -> Result<(), Error> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(name) => {
                if let Some(found) = scope.lookup(name)? {
                    out.push_str(&found.to_display_string());
                }
            }
            Node::Section {
                name,
                inverted: true,
                body,
            } => {
                if is_falsy(scope.lookup(name)?.as_ref()) {
                    render_nodes(scope, body, out)?;
                }
            }
            Node::Section {
                name,
                inverted: false,
                body,
            } => {
                let found = scope.lookup(name)?;
                if is_falsy(found.as_ref()) {
                    continue;
                }
                match found {
                    Some(Resolved::List(items)) => {
                        for item in items {
                            render_item(scope, item, body, out)?;
                        }
                    }
                    Some(other) => render_item(scope, &other, body, out)?,
                    None => {}
                }
            }
        }
    }
    Ok(())
}

fn render_item<'a>(
    scope: &'a ContextResolver<'a>,
    item: &Resolved<'a>,
    body: &[Node<'_>],
    out: &mut String,
) -> Result<(), Error> {
    match item {
        Resolved::Scope(inner) => render_nodes(inner, body, out),
        _ => render_nodes(scope, body, out),
    }
}

pub fn render_with(
    missing_key: MissingKey,
    context: &str,
    template: &str,
) -> Result<String, Error> {
    let arena = Bump::new();
    let builder = ContextBuilder::new(&arena);
    let value = whisker::parse_context(&builder, context)?;
    let root = ContextResolver::with_options(&arena, value, ResolverOptions { missing_key });

    let mut out = String::new();
    render_nodes(root, &parse(template), &mut out)?;
    Ok(out)
}

macro_rules! render_case {
    (
        $name:ident,
        context: $context:expr,
        template: $template:expr,
        rendered: $expected:expr $(,)?
    ) => {
        render_case!(
            $name,
            missing_key: whisker::MissingKey::Yield,
            context: $context,
            template: $template,
            rendered: $expected,
        );
    };
    (
        $name:ident,
        missing_key: $missing_key:expr,
        context: $context:expr,
        template: $template:expr,
        rendered: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let rendered = crate::cases::render_with($missing_key, $context, $template)
                .map_err(|e| e.to_string());
            pretty_assertions::assert_eq!(rendered.as_deref().map_err(String::as_str), $expected);
        }
    };
}
