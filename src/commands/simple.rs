//! Simple interactive CLI mode
//!
//! Text-based building loop without TUI

use crate::core::Word;
use crate::output::formatters::{comma_letters, spaced_letters};
use crate::session::{Action, Event, Session};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive loop handles every command inline
pub fn run_simple() -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Letterforge - Interactive Builder                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Pour letters into the pool, forge them into words, and watch");
    println!("every permutation of your words unfold.\n");
    print_help();

    let mut session = Session::new();
    let mut undo_stack: Vec<Session> = Vec::new();

    loop {
        let input = get_user_input("\nEnter command ('help' for the list)")?;

        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((head, tail)) => (head.to_lowercase(), tail.trim().to_string()),
            None => (input.to_lowercase(), String::new()),
        };

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Happy forging!\n");
                return Ok(());
            }
            "help" | "h" | "?" => print_help(),
            "show" | "s" => print_status(&session),
            "perms" | "p" => print_expansions(&session),
            "undo" | "u" => {
                if let Some(prior) = undo_stack.pop() {
                    session = prior;
                    println!("✓ Undone!");
                    print_status(&session);
                } else {
                    println!("Nothing to undo!");
                }
            }
            "new" | "n" => apply(&mut session, &mut undo_stack, Action::Reset),
            "letters" | "l" => {
                if arg.is_empty() {
                    println!("Usage: letters <text>");
                } else {
                    apply(&mut session, &mut undo_stack, Action::AddLetters(arg));
                }
            }
            "word" | "w" => {
                if arg.is_empty() {
                    println!("Usage: word <text>");
                } else {
                    apply(&mut session, &mut undo_stack, Action::SubmitWord(arg));
                }
            }
            "remove" | "r" => {
                if session.words().is_empty() {
                    println!("No words to remove!");
                } else {
                    match parse_index(&arg, session.words().len()) {
                        Ok(index) => {
                            apply(&mut session, &mut undo_stack, Action::RemoveWord(index));
                        }
                        Err(message) => println!("❌ {message}"),
                    }
                }
            }
            "discard" | "d" => {
                if session.pool().is_empty() {
                    println!("The pool is already empty!");
                } else {
                    match parse_index(&arg, session.pool().len()) {
                        Ok(index) => {
                            apply(&mut session, &mut undo_stack, Action::DiscardLetter(index));
                        }
                        Err(message) => println!("❌ {message}"),
                    }
                }
            }
            "check" | "c" => {
                if arg.is_empty() {
                    println!("Usage: check <word>");
                } else {
                    print_check(&session, &arg);
                }
            }
            other => println!("❓ Unknown command '{other}'. Type 'help' for the list."),
        }
    }
}

/// Apply an action, keeping the undo stack in step with real changes
fn apply(session: &mut Session, undo_stack: &mut Vec<Session>, action: Action) {
    let (next, event) = session.apply(action);

    let changed = !matches!(
        event,
        Event::NothingToAdd | Event::WordRejected { .. } | Event::InvalidWord { .. }
    );

    if changed {
        undo_stack.push(session.clone());
        *session = next;
        println!("✓ {event}");
        print_status(session);
    } else {
        println!("❌ {event}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  letters <text>   pour the letters found in <text> into the pool  (l)");
    println!("  word <text>      forge a word out of pool letters                (w)");
    println!("  remove <n>       break up word #n, returning its letters         (r)");
    println!("  discard <n>      throw away pool letter #n, counting from left   (d)");
    println!("  check <text>     ask whether the pool could form <text>          (c)");
    println!("  show             show the pool, words, and expansion count       (s)");
    println!("  perms            list every expansion                            (p)");
    println!("  undo             take back the last change                       (u)");
    println!("  new              start over                                      (n)");
    println!("  help             show this list                                  (h)");
    println!("  quit             leave                                           (q)");
}

fn print_status(session: &Session) {
    println!("────────────────────────────────────────────────────────────");

    let pool = session.pool();
    if pool.is_empty() {
        println!("Pool: (empty)");
    } else {
        println!("Pool ({}): {}", pool.len(), spaced_letters(&pool.to_string()));
    }

    let words = session.words();
    if words.is_empty() {
        println!("Words: (none)");
    } else {
        println!("Words ({}):", words.len());
        for (i, word) in words.words().iter().enumerate() {
            println!("  {}. {word}", i + 1);
        }
    }

    println!("Expansions: {}", session.expansions().len());
    println!("────────────────────────────────────────────────────────────");
}

fn print_expansions(session: &Session) {
    let expansions = session.expansions();
    if expansions.is_empty() {
        println!("No expansions yet: forge a word first.");
        return;
    }

    println!("Expansions ({}):", expansions.len());
    for expansion in expansions {
        println!("  {expansion}");
    }
}

fn print_check(session: &Session, raw: &str) {
    match Word::new(raw) {
        Ok(word) => {
            if session.pool().can_form(&word) {
                println!("✓ '{word}' can be forged from the pool");
            } else {
                let missing = comma_letters(&session.pool().missing_for(&word));
                println!("❌ '{word}' is short of: {missing}");
            }
        }
        Err(e) => println!("❌ '{raw}' is not a usable word: {e}"),
    }
}

/// Parse a 1-based list position into a 0-based index
fn parse_index(arg: &str, len: usize) -> Result<usize, String> {
    let position: usize = arg
        .trim()
        .parse()
        .map_err(|_| format!("'{arg}' is not a number"))?;

    if position == 0 || position > len {
        return Err(format!("pick a number between 1 and {len}"));
    }
    Ok(position - 1)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_pushes_the_prior_session_on_real_changes() {
        let mut session = Session::new();
        let mut undo_stack = Vec::new();

        apply(&mut session, &mut undo_stack, Action::AddLetters("cat".into()));
        let poured = session.clone();

        apply(&mut session, &mut undo_stack, Action::SubmitWord("cat".into()));
        assert_eq!(undo_stack.len(), 2);

        // Popping the stack is exactly what the undo command does
        session = undo_stack.pop().unwrap();
        assert_eq!(session, poured);

        session = undo_stack.pop().unwrap();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn apply_pushes_nothing_for_rejected_actions() {
        let mut session = Session::new();
        let mut undo_stack = Vec::new();

        apply(&mut session, &mut undo_stack, Action::AddLetters("ab".into()));
        let depth = undo_stack.len();
        let snapshot = session.clone();

        apply(&mut session, &mut undo_stack, Action::AddLetters("42 !?".into()));
        apply(&mut session, &mut undo_stack, Action::SubmitWord("abc".into()));
        apply(&mut session, &mut undo_stack, Action::SubmitWord("a4b".into()));

        assert_eq!(undo_stack.len(), depth);
        assert_eq!(session, snapshot);
    }

    #[test]
    fn parse_index_accepts_one_based_positions() {
        assert_eq!(parse_index("1", 3), Ok(0));
        assert_eq!(parse_index("3", 3), Ok(2));
        assert_eq!(parse_index(" 2 ", 3), Ok(1));
    }

    #[test]
    fn parse_index_rejects_out_of_range_and_garbage() {
        assert!(parse_index("0", 3).is_err());
        assert!(parse_index("4", 3).is_err());
        assert!(parse_index("two", 3).is_err());
        assert!(parse_index("", 3).is_err());
    }
}
