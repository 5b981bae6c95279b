//! Terminal front-end over `taskpad_core`.
//!
//! # Responsibility
//! - Print the core linkage probe (`ping`, `version`).
//! - Drive one in-memory task session from stdin commands.
//!
//! Commands: `add <text>`, `toggle <n>`, `delete <n>`, `list`, `stats`,
//! `help`, `quit`. `n` is the 1-based position shown by `list`.

use std::io::{self, BufRead, Write};
use taskpad_core::{can_submit, TaskChange, TaskService, TaskStats};

const EMPTY_STATE: &str = "Ready to be productive? Add your first task.";
const HELP: &str = "commands: add <text> | toggle <n> | delete <n> | list | stats | help | quit";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Add(&'a str),
    Toggle(Option<usize>),
    Delete(Option<usize>),
    List,
    Stats,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match head {
        "add" | "a" => Command::Add(rest),
        "toggle" | "t" => Command::Toggle(rest.trim().parse().ok()),
        "delete" | "d" => Command::Delete(rest.trim().parse().ok()),
        "list" | "ls" | "" => Command::List,
        "stats" | "s" => Command::Stats,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other),
    }
}

fn render_list(service: &TaskService) -> String {
    let snapshot = service.snapshot();
    if snapshot.is_empty() {
        return EMPTY_STATE.to_string();
    }
    snapshot
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let mark = if task.is_completed() { 'x' } else { ' ' };
            format!("{:>3}. [{mark}] {}", i + 1, task.text())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_stats(stats: &TaskStats) -> String {
    let mut out = format!(
        "total={} done={} left={}",
        stats.total, stats.completed, stats.remaining
    );
    if let (Some(summary), Some(progress)) = (stats.remaining_summary(), stats.progress_label()) {
        out.push_str(&format!("\n{summary} | {progress}"));
    }
    out
}

/// Runs one command; returns `None` when the session should end.
fn execute(service: &mut TaskService, command: Command<'_>) -> Option<String> {
    let reply = match command {
        Command::Add(text) if !can_submit(text) => "nothing to add".to_string(),
        Command::Add(text) => match service.submit_change(text) {
            TaskChange::Added(task) => format!("added: {}", task.text()),
            _ => "nothing to add".to_string(),
        },
        Command::Toggle(position) => {
            match position.and_then(|n| service.id_at(n)) {
                Some(id) => match service.toggle_complete(id) {
                    TaskChange::Toggled { completed: true, .. } => "completed".to_string(),
                    TaskChange::Toggled { .. } => "reopened".to_string(),
                    _ => "no such task".to_string(),
                },
                None => "no such task".to_string(),
            }
        }
        Command::Delete(position) => match position.and_then(|n| service.id_at(n)) {
            Some(id) if service.delete(id).is_change() => "deleted".to_string(),
            _ => "no such task".to_string(),
        },
        Command::List => render_list(service),
        Command::Stats => render_stats(&service.stats()),
        Command::Help => HELP.to_string(),
        Command::Quit => return None,
        Command::Unknown(word) => format!("unknown command `{word}`; {HELP}"),
    };
    Some(reply)
}

fn main() -> io::Result<()> {
    println!("taskpad_core ping={}", taskpad_core::ping());
    println!("taskpad_core version={}", taskpad_core::core_version());

    if let Err(err) = taskpad_core::init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }
    log::info!("event=cli_start module=cli status=ok");

    let mut service = TaskService::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{HELP}");

    for line in stdin.lock().lines() {
        let line = line?;
        match execute(&mut service, parse_command(&line)) {
            Some(reply) => writeln!(stdout, "{reply}")?,
            None => break,
        }
        stdout.flush()?;
    }

    log::info!(
        "event=cli_exit module=cli status=ok total={}",
        service.stats().total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute, parse_command, render_list, Command, EMPTY_STATE};
    use taskpad_core::TaskService;

    fn run(service: &mut TaskService, line: &str) -> String {
        execute(service, parse_command(line)).expect("command should not quit")
    }

    #[test]
    fn parse_command_splits_head_and_argument() {
        assert_eq!(parse_command("add  Buy milk"), Command::Add(" Buy milk"));
        assert_eq!(parse_command("toggle 2"), Command::Toggle(Some(2)));
        assert_eq!(parse_command("delete x"), Command::Delete(None));
        assert_eq!(parse_command("  "), Command::List);
        assert_eq!(parse_command("frobnicate"), Command::Unknown("frobnicate"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        assert_eq!(render_list(&TaskService::new()), EMPTY_STATE);
    }

    #[test]
    fn session_runs_the_buy_milk_scenario() {
        let mut service = TaskService::new();
        assert_eq!(run(&mut service, "add Buy milk"), "added: Buy milk");
        assert_eq!(run(&mut service, "add   "), "nothing to add");
        run(&mut service, "add Walk dog");

        assert_eq!(run(&mut service, "toggle 1"), "completed");
        assert_eq!(run(&mut service, "delete 2"), "deleted");
        assert_eq!(run(&mut service, "delete 9"), "no such task");
        assert_eq!(run(&mut service, "list"), "  1. [x] Buy milk");
        assert_eq!(
            run(&mut service, "stats"),
            "total=1 done=1 left=0\n0 of 1 left | 100% Complete"
        );
    }

    #[test]
    fn quit_ends_the_session() {
        let mut service = TaskService::new();
        assert_eq!(execute(&mut service, Command::Quit), None);
    }
}
