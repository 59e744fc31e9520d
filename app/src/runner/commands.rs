//! Selector routing: turns a message line into an `App` operation.

use crate::app::App;
use crate::errors::CommandError;
use crate::input::Message;

/// Operations an `App` understands. Several selectors share one verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Cd,
    GetDir,
    PostDir,
    Rename,
    Delete,
    Command,
    Verbose,
    ErrReport,
}

impl Verb {
    pub fn from_selector(selector: &str) -> Option<Verb> {
        let verb = match selector {
            "cd" => Verb::Cd,
            "getdir" | "bang" => Verb::GetDir,
            "postdir" | "post" => Verb::PostDir,
            "rename" | "ren" | "mv" => Verb::Rename,
            "delete" | "del" | "rm" => Verb::Delete,
            "command" | "cmd" => Verb::Command,
            "verbose" => Verb::Verbose,
            "err_report" => Verb::ErrReport,
            _ => return None,
        };
        Some(verb)
    }

    /// Minimum number of arguments the verb needs.
    pub fn min_args(self) -> usize {
        match self {
            Verb::GetDir | Verb::PostDir => 0,
            Verb::Cd | Verb::Delete | Verb::Command | Verb::Verbose | Verb::ErrReport => 1,
            Verb::Rename => 2,
        }
    }

    /// Maximum number of arguments, `None` when the rest of the line is
    /// passed through (`command`).
    pub fn max_args(self) -> Option<usize> {
        match self {
            Verb::Command => None,
            other => Some(other.min_args()),
        }
    }
}

fn parse_flag(selector: &str, value: &str) -> Result<bool, CommandError> {
    match value {
        "1" | "on" | "true" => Ok(true),
        "0" | "off" | "false" => Ok(false),
        _ => Err(CommandError::InvalidFlag {
            selector: selector.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse and run one message line.
///
/// Returns `Ok(true)` when a selector was recognised and handled, `Ok(false)`
/// for blank lines and unknown selectors (the latter also emit a warning).
/// Argument errors are returned before anything touches the filesystem.
pub fn execute_command(app: &mut App, line: &str) -> Result<bool, CommandError> {
    match Message::parse(line) {
        Some(msg) => dispatch(app, &msg),
        None => Ok(false),
    }
}

/// Run an already-parsed message.
pub fn dispatch(app: &mut App, msg: &Message) -> Result<bool, CommandError> {
    let Some(verb) = Verb::from_selector(&msg.selector) else {
        tracing::warn!("unrecognised message `{}`", msg.selector);
        app.outlets
            .warn(format!("The message \"{}\" is not recognized.", msg.selector));
        return Ok(false);
    };

    let args = &msg.args;
    if args.len() < verb.min_args() {
        return Err(CommandError::MissingArguments {
            selector: msg.selector.clone(),
            expected: verb.min_args(),
            got: args.len(),
        });
    }
    if let Some(max) = verb.max_args().filter(|&max| args.len() > max) {
        return Err(CommandError::TooManyArguments {
            selector: msg.selector.clone(),
            expected: max,
            got: args.len(),
        });
    }

    match verb {
        Verb::Cd => {
            app.cd(&args[0]);
        }
        Verb::GetDir => app.getdir(),
        Verb::PostDir => app.postdir(),
        Verb::Rename => app.rename_deferred(&args[0], &args[1])?,
        Verb::Delete => app.delete_deferred(&args[0])?,
        Verb::Command => app.command_deferred(args)?,
        Verb::Verbose => app.set_verbose(parse_flag(&msg.selector, &args[0])?),
        Verb::ErrReport => app.set_err_report(parse_flag(&msg.selector, &args[0])?),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::{OutletEvent, StartOptions};
    use crate::fs_op::path::{Origin, Platform};
    use std::sync::mpsc;

    fn posix_app() -> (App, mpsc::Receiver<OutletEvent>) {
        let (tx, rx) = mpsc::channel();
        let opts = StartOptions {
            origin: Origin::new(Some("/home/user/project/patch.file".into()), None),
            platform: Some(Platform::Posix),
            ..Default::default()
        };
        (App::with_options(&opts, tx).expect("with_options"), rx)
    }

    #[test]
    fn aliases_map_to_the_same_verb() {
        for s in ["rename", "ren", "mv"] {
            assert_eq!(Verb::from_selector(s), Some(Verb::Rename));
        }
        for s in ["delete", "del", "rm"] {
            assert_eq!(Verb::from_selector(s), Some(Verb::Delete));
        }
        assert_eq!(Verb::from_selector("bang"), Some(Verb::GetDir));
        assert_eq!(Verb::from_selector("cmd"), Some(Verb::Command));
        assert_eq!(Verb::from_selector("copy"), None);
    }

    #[test]
    fn rename_with_one_argument_is_a_usage_error() {
        let (mut app, rx) = posix_app();
        let err = execute_command(&mut app, "rename a.txt").unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingArguments { selector: "rename".into(), expected: 2, got: 1 }
        );
        app.flush().expect("flush");
        assert!(rx.try_iter().next().is_none(), "no status for rejected command");
    }

    #[test]
    fn rename_with_three_arguments_is_a_usage_error() {
        let (mut app, rx) = posix_app();
        let err = execute_command(&mut app, "mv a.txt b.txt c.txt").unwrap_err();
        assert_eq!(
            err,
            CommandError::TooManyArguments { selector: "mv".into(), expected: 2, got: 3 }
        );
        assert_eq!(err.to_string(), "mv:  Expected 2 argument(s), got 3");
        app.flush().expect("flush");
        assert!(rx.try_iter().next().is_none(), "no status for rejected command");
    }

    #[test]
    fn command_takes_any_number_of_arguments() {
        assert_eq!(Verb::Command.max_args(), None);
        assert_eq!(Verb::Cd.max_args(), Some(1));
        assert_eq!(Verb::GetDir.max_args(), Some(0));
    }

    #[test]
    fn delete_without_argument_is_a_usage_error() {
        let (mut app, _rx) = posix_app();
        assert!(matches!(
            execute_command(&mut app, "rm"),
            Err(CommandError::MissingArguments { expected: 1, got: 0, .. })
        ));
    }

    #[test]
    fn unknown_selector_warns_once_and_changes_nothing() {
        let (mut app, rx) = posix_app();
        assert_eq!(execute_command(&mut app, "frobnicate x"), Ok(false));
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![OutletEvent::Warn("The message \"frobnicate\" is not recognized.".into())]
        );
        assert_eq!(app.resolver.base_dir(), "/home/user/project/");
    }

    #[test]
    fn cd_then_getdir() {
        let (mut app, rx) = posix_app();
        assert_eq!(execute_command(&mut app, "cd .."), Ok(true));
        assert_eq!(execute_command(&mut app, "getdir"), Ok(true));
        assert_eq!(rx.try_recv().unwrap(), OutletEvent::Dir("/home/user/".into()));
        execute_command(&mut app, "cd ~").unwrap();
        assert_eq!(app.resolver.base_dir(), "/home/user/project/");
    }

    #[test]
    fn flags_toggle() {
        let (mut app, _rx) = posix_app();
        execute_command(&mut app, "verbose 1").unwrap();
        execute_command(&mut app, "err_report on").unwrap();
        assert!(app.settings.verbose && app.settings.err_report);
        execute_command(&mut app, "verbose 0").unwrap();
        assert!(!app.settings.verbose);
        assert!(matches!(
            execute_command(&mut app, "verbose maybe"),
            Err(CommandError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn blank_line_is_not_handled() {
        let (mut app, rx) = posix_app();
        assert_eq!(execute_command(&mut app, "   "), Ok(false));
        assert!(rx.try_iter().next().is_none());
    }
}
