mod highlighter;
mod path;

use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, IdeMenu,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;
use whisker::{ContextBuilder, ContextResolver, MissingKey, ResolverOptions, Value};

use crate::highlighter::Highlighter;
use crate::path::{PathError, Query, walk};

/// Whisker - resolve template variables against a JSON context
#[derive(Parser, Debug)]
#[command(name = "whisker")]
#[command(about = "Resolve template variable paths against a JSON context", long_about = None)]
struct Args {
    /// Print the scope chain the last segment was resolved in (for debugging)
    #[arg(long)]
    debug_scope: bool,

    /// Let mappings that lack a key defer to the enclosing scope
    #[arg(long)]
    fall_through: bool,

    /// JSON file holding the context
    context: PathBuf,

    /// Dotted path to resolve, e.g. `people.0.name` or `^items` (if not provided, reads from stdin)
    path: Option<String>,
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline(names: Vec<String>) -> (Reedline, DefaultPrompt) {
    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['-', '_', '.', '^']);
        completions.insert(names);
        completions
    });

    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_correct_cursor_pos(false);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("whisker".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Top-level names offered for completion.
fn top_level_names(context: Value<'_>) -> Vec<String> {
    match context {
        Value::Map(map) => map.keys().map(str::to_string).collect(),
        Value::Record(record) => record.fields().iter().map(|(name, _)| name.to_string()).collect(),
        _ => Vec::new(),
    }
}

fn interpret_input<'a>(
    root: &'a ContextResolver<'a>,
    input: &str,
    debug_scope: bool,
) -> Result<(), PathError> {
    let query = Query::parse(input)?;
    let walk = walk(root, &query)?;

    if debug_scope {
        println!("=== Scope chain ===");
        for scope in walk.scope.ancestors() {
            println!("{}: {}", scope.depth(), scope.value().type_name());
        }
        println!();
    }

    if query.inverted {
        println!("{}", walk.is_empty());
        return Ok(());
    }

    match walk.found {
        Some(found) => println!("{}", found.to_display_string()),
        None => {
            debug!(path = input.trim(), "Path not found");
            eprintln!("'{}' not found", input.trim());
        }
    }
    Ok(())
}

fn report(err: PathError) {
    eprintln!("{:?}", miette::Report::new(err));
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use WHISKER_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("WHISKER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = std::fs::read_to_string(&args.context)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.context.display()))?;

    let arena = Bump::new();
    let builder = ContextBuilder::new(&arena);
    let context = whisker::parse_context(&builder, &source)?;

    let options = ResolverOptions {
        missing_key: if args.fall_through {
            MissingKey::FallThrough
        } else {
            MissingKey::Yield
        },
    };
    let root = ContextResolver::with_options(&arena, context, options);

    // Check if we have a direct path argument
    if let Some(path) = &args.path {
        interpret_input(root, path, args.debug_scope)?;
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(top_level_names(context));

        println!("Whisker REPL - Type paths to resolve (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    if let Err(err) = interpret_input(root, &buffer, args.debug_scope) {
                        report(err);
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Err(err) = interpret_input(root, &line, args.debug_scope) {
                report(err);
            }
        }
    }

    Ok(())
}
