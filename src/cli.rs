use crate::libpanelik::cards::Catalog;
use crate::libpanelik::editor::{EditorAction, QuizBoard, SaveSink};
use crate::libpanelik::quizzes::{Quiz, QuizStatus};
use colored::{ColoredString, Colorize};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    Cards,
    Quizzes,
    Editor(EditorAction),
    Help,
    Quit,
}

/// Question numbers typed by the user start at 1.
fn position(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(num) => Some(num - 1),
    }
}

pub(crate) fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, Some(rest.trim())),
        None => (line, None),
    };

    match (head, rest) {
        ("k", None) => Some(Command::Cards),
        ("l", None) => Some(Command::Quizzes),
        ("?", None) | ("h", None) => Some(Command::Help),
        ("q", None) => Some(Command::Quit),
        ("a", None) => Some(Command::Editor(EditorAction::AddQuestion)),
        ("s", None) => Some(Command::Editor(EditorAction::Save)),
        ("c", None) => Some(Command::Editor(EditorAction::Cancel)),
        ("o", Some(id)) if !id.is_empty() => Some(Command::Editor(EditorAction::Open(id.to_string()))),
        ("t", rest) => Some(Command::Editor(EditorAction::EditTitle(
            rest.unwrap_or_default().to_string(),
        ))),
        ("e", Some(rest)) => {
            let (num, text) = rest.split_once(' ').unwrap_or((rest, ""));
            position(num).map(|idx| Command::Editor(EditorAction::EditQuestion(idx, text.to_string())))
        }
        ("r", Some(num)) => position(num).map(|idx| Command::Editor(EditorAction::RemoveQuestion(idx))),
        _ => None,
    }
}

fn status_colored(status: QuizStatus) -> ColoredString {
    match status {
        QuizStatus::Published => status.label().bright_green(),
        QuizStatus::Draft => status.label().yellow(),
        QuizStatus::Archived => status.label().dimmed(),
    }
}

pub(crate) fn print_cards(catalog: &Catalog) {
    println!("{}", format!("==========> Karty ({}) <==========", catalog.len()).cyan());
    for card in catalog.cards() {
        println!("{} {}", format!("[{}]", card.id).dimmed(), card.title.black().bold().on_white());
        println!("     {}", card.description);
        println!("     {}", card.image_url.blue().underline());
    }
    println!("{}", "[+ Dodaj kartę] [Edytuj] [Usuń]".dimmed());
}

pub(crate) fn print_quizzes<S: SaveSink>(board: &QuizBoard<S>) {
    println!("{}", format!("==========> Quizy ({}) <==========", board.quizzes().len()).cyan());
    println!(
        "{}",
        format!("{:<6} {:<32} {:>7}  {:<15} {}", "ID", "Tytuł", "Pytania", "Status", "Utworzono").bold()
    );
    for row in board.rows() {
        println!(
            "{:<6} {:<32} {:>7}  {:<15} {}",
            row.id,
            row.title,
            row.question_count,
            status_colored(row.status),
            row.created_at
        );
    }
}

pub(crate) fn print_draft(draft: &Quiz) {
    println!("{}", format!("----- Edycja quizu {} -----", draft.id).magenta());
    println!("{} {}", "Tytuł:".bold(), draft.title);
    for (i, question) in draft.questions.iter().enumerate() {
        let text = if question.is_empty() { "(puste)".dimmed() } else { question.normal() };
        println!("  {}. {}", format!("{}", i + 1).bold(), text);
    }
    println!("{}", "t <tytuł> | e <nr> <tekst> | a | r <nr> | s (zapisz) | c (anuluj)".dimmed());
}

fn print_help() {
    println!("{}", "k             pokaż karty".cyan());
    println!("{}", "l             pokaż quizy".cyan());
    println!("{}", "o <id>        edytuj quiz".cyan());
    println!("{}", "t <tytuł>     zmień tytuł".cyan());
    println!("{}", "e <nr> <tekst> zmień pytanie".cyan());
    println!("{}", "a             dodaj pytanie".cyan());
    println!("{}", "r <nr>        usuń pytanie".cyan());
    println!("{}", "s / c         zapisz / anuluj".cyan());
    println!("{}", "q             wyjdź".cyan());
}

/// Runs one parsed command. Returns `false` once the user asked to quit.
pub(crate) fn handle<S: SaveSink>(command: Command, catalog: &Catalog, board: &mut QuizBoard<S>) -> bool {
    match command {
        Command::Cards => print_cards(catalog),
        Command::Quizzes => print_quizzes(board),
        Command::Help => print_help(),
        Command::Quit => {
            println!("{}", "Do zobaczenia!".cyan());
            return false;
        }
        Command::Editor(action) => {
            let closing = matches!(action, EditorAction::Save | EditorAction::Cancel);
            match board.apply(action) {
                Ok(()) => match board.draft() {
                    Some(draft) => print_draft(draft),
                    None if closing => print_quizzes(board),
                    None => {}
                },
                Err(err) => {
                    warn!("[Cli] {}", err);
                    println!("{}", format!("Błąd: {}", err).bright_red());
                }
            }
        }
    }
    true
}

/// Reads commands from `input` until `q` or the end of input.
pub fn cli_loop<R: BufRead, S: SaveSink>(mut input: R, catalog: &Catalog, board: &mut QuizBoard<S>) {
    print_cards(catalog);
    print_quizzes(board);
    print_help();

    let mut line = String::new();
    loop {
        print!("{} ", ">".cyan());
        let _ = io::stdout().flush();
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                debug!("[Cli] Input closed.");
                return;
            }
            Ok(_) => {}
            Err(err) => {
                warn!("[Cli] Cannot read input: {}", err);
                return;
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(command) => {
                debug!("command: {:?}", command);
                if !handle(command, catalog, board) {
                    return;
                }
            }
            None => println!("{}", "Nie rozumiem. Wpisz ? aby zobaczyć pomoc.".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libpanelik::fixtures;
    use std::io::Cursor;

    fn board() -> (Catalog, QuizBoard<Vec<Quiz>>) {
        let dataset = fixtures::seeded(fixtures::DEFAULT_SEED);
        (
            Catalog::new(dataset.cards),
            QuizBoard::new(dataset.quizzes, Vec::new()),
        )
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("k"), Some(Command::Cards));
        assert_eq!(parse_command(" l "), Some(Command::Quizzes));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("a"), Some(Command::Editor(EditorAction::AddQuestion)));
        assert_eq!(parse_command("s"), Some(Command::Editor(EditorAction::Save)));
        assert_eq!(parse_command("c"), Some(Command::Editor(EditorAction::Cancel)));
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("o q1"),
            Some(Command::Editor(EditorAction::Open("q1".into())))
        );
        assert_eq!(
            parse_command("t Nowy tytuł"),
            Some(Command::Editor(EditorAction::EditTitle("Nowy tytuł".into())))
        );
        assert_eq!(
            parse_command("e 1 Nowe pytanie"),
            Some(Command::Editor(EditorAction::EditQuestion(0, "Nowe pytanie".into())))
        );
        assert_eq!(
            parse_command("e 2"),
            Some(Command::Editor(EditorAction::EditQuestion(1, String::new())))
        );
        assert_eq!(
            parse_command("r 3"),
            Some(Command::Editor(EditorAction::RemoveQuestion(2)))
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("o"), None);
        assert_eq!(parse_command("r 0"), None);
        assert_eq!(parse_command("r x"), None);
        assert_eq!(parse_command("e zero text"), None);
        assert_eq!(parse_command("k extra"), None);
        assert_eq!(parse_command("zzz"), None);
    }

    #[test]
    fn handle_applies_editor_commands() {
        let (catalog, mut board) = board();

        assert!(handle(Command::Editor(EditorAction::Open("q1".into())), &catalog, &mut board));
        assert!(handle(Command::Editor(EditorAction::AddQuestion), &catalog, &mut board));
        let len = board.draft().unwrap().questions.len();
        assert_eq!(len, board.quiz("q1").unwrap().questions.len() + 1);

        // errors are reported, the loop keeps going
        assert!(handle(Command::Editor(EditorAction::RemoveQuestion(99)), &catalog, &mut board));
        assert!(handle(Command::Editor(EditorAction::Save), &catalog, &mut board));
        assert!(!board.is_open());
        assert_eq!(board.sink().len(), 1);

        assert!(!handle(Command::Quit, &catalog, &mut board));
    }

    #[test]
    fn loop_stops_at_end_of_input() {
        let (catalog, mut board) = board();
        cli_loop(Cursor::new("o q1\na\ns\n"), &catalog, &mut board);

        assert!(!board.is_open());
        assert_eq!(board.sink().len(), 1);
        let canonical = board.quiz("q1").unwrap().questions.len();
        assert_eq!(board.sink()[0].questions.len(), canonical + 1);
    }

    #[test]
    fn loop_skips_blank_lines_and_quits() {
        let (catalog, mut board) = board();
        cli_loop(Cursor::new("\n   \nzzz\no q2\nq\no q1\ns\n"), &catalog, &mut board);

        // nothing after `q` runs
        assert_eq!(board.draft().map(|d| d.id.as_str()), Some("q2"));
        assert!(board.sink().is_empty());
    }

    #[test]
    fn loop_returns_on_empty_input() {
        let (catalog, mut board) = board();
        cli_loop(Cursor::new(""), &catalog, &mut board);
        assert!(!board.is_open());
    }
}
