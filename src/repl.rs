use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::report;
use crate::scanner;

/// Run the interactive mode: every entered line is scanned on its own and
/// its tokens and errors printed.
pub fn run_repl() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => return Err(e),
        };

        if line.trim().is_empty() {
            continue;
        }
        editor.add_history_entry(line.as_str())?;

        print!("{}", render_line(&line));
    }
    Ok(())
}

fn render_line(line: &str) -> String {
    let (tokens, errors) = scanner::scan(line).into_parts();
    let mut buf = String::new();
    if !tokens.is_empty() {
        buf.push_str(&report::token_table(&tokens));
    }
    buf.push_str(&report::error_list(&errors));
    buf
}
