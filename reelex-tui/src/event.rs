use std::{fs::File, io::Write, path::PathBuf, time::{Duration, Instant}};

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Source of key/input events so tests can drive the TUI without a real tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

#[derive(Debug)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Scripted event source driven by a simple line-oriented DSL:
///   down|up|left|right|tab|backtab|backspace|enter|space|esc|ctrl-c|type:<text>
/// Lines beginning with # are ignored. Blank lines are skipped.
/// When events are exhausted, we fail fast to avoid hangs.
#[derive(Debug)]
pub struct ScriptEventSource {
    events: Vec<Event>,
    cursor: usize,
    exhausted_at: Option<Instant>,
    trace: Option<File>,
}

impl ScriptEventSource {
    pub fn from_path(
        path: PathBuf,
        trace_path: Option<PathBuf>,
    ) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .context("read scripted TUI input")?;
        let mut source = Self::from_str(&contents)?;

        source.trace = trace_path
            .map(|p| File::create(p).context("create tui trace file"))
            .transpose()?;

        Ok(source)
    }

    pub fn from_str(contents: &str) -> Result<Self> {
        let mut events = Vec::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut push_key = |code: KeyCode, modifiers: KeyModifiers| {
                events.push(Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: event::KeyEventKind::Press,
                    state: event::KeyEventState::NONE,
                }));
            };

            match line {
                "down" | "j" => push_key(KeyCode::Down, KeyModifiers::NONE),
                "up" | "k" => push_key(KeyCode::Up, KeyModifiers::NONE),
                "left" => push_key(KeyCode::Left, KeyModifiers::NONE),
                "right" => push_key(KeyCode::Right, KeyModifiers::NONE),
                "tab" => push_key(KeyCode::Tab, KeyModifiers::NONE),
                "backtab" => push_key(KeyCode::BackTab, KeyModifiers::SHIFT),
                "backspace" => {
                    push_key(KeyCode::Backspace, KeyModifiers::NONE)
                }
                "enter" => push_key(KeyCode::Enter, KeyModifiers::NONE),
                "space" => push_key(KeyCode::Char(' '), KeyModifiers::NONE),
                "esc" | "quit" => push_key(KeyCode::Esc, KeyModifiers::NONE),
                "ctrl-c" => {
                    push_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
                }
                _ => {
                    if let Some(rest) = line.strip_prefix("type:") {
                        for ch in rest.chars() {
                            push_key(KeyCode::Char(ch), KeyModifiers::NONE);
                        }
                    } else {
                        return Err(anyhow!(
                            "unrecognized TUI script token at line {}: {}",
                            idx + 1,
                            line
                        ));
                    }
                }
            }
        }

        Ok(Self {
            events,
            cursor: 0,
            exhausted_at: None,
            trace: None,
        })
    }
}

impl EventSource for ScriptEventSource {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if self.cursor >= self.events.len() {
            // Allow a short grace period before failing to avoid tight loop.
            match self.exhausted_at {
                Some(ea) => {
                    if ea.elapsed() > Duration::from_secs(1) {
                        return Err(anyhow!(
                            "scripted TUI input exhausted before quit"
                        ));
                    }
                }
                None => self.exhausted_at = Some(Instant::now()),
            }
            std::thread::sleep(Duration::from_millis(25));
            return Ok(None);
        }

        let ev = self.events[self.cursor].clone();
        self.cursor += 1;

        if let Some(trace) = self.trace.as_mut() {
            let _ = writeln!(trace, "{:?}", ev);
        }

        Ok(Some(ev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_tokens_in_order() {
        let script = "# warm up\ntype:batman\ntab\nright\nleft\nesc\n";
        let mut source = ScriptEventSource::from_str(script).unwrap();

        let mut codes = Vec::new();
        while let Ok(Some(Event::Key(key))) =
            source.next(Duration::from_millis(1))
        {
            codes.push(key.code);
            if key.code == KeyCode::Esc {
                break;
            }
        }

        assert_eq!(codes.len(), "batman".len() + 4);
        assert_eq!(codes[0], KeyCode::Char('b'));
        assert_eq!(codes["batman".len()], KeyCode::Tab);
        assert_eq!(*codes.last().unwrap(), KeyCode::Esc);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(ScriptEventSource::from_str("warp9").is_err());
    }

    #[test]
    fn reads_script_from_disk_and_traces_consumed_events() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("drive.txt");
        let trace_path = dir.path().join("trace.log");
        std::fs::write(&script_path, "type:up\nesc\n").unwrap();

        let mut source = ScriptEventSource::from_path(
            script_path,
            Some(trace_path.clone()),
        )
        .unwrap();
        while let Ok(Some(Event::Key(key))) =
            source.next(Duration::from_millis(1))
        {
            if key.code == KeyCode::Esc {
                break;
            }
        }

        let trace = std::fs::read_to_string(trace_path).unwrap();
        assert_eq!(trace.lines().count(), 3);
    }

    #[test]
    fn exhausted_script_eventually_errors() {
        let mut source = ScriptEventSource::from_str("").unwrap();
        assert!(source.next(Duration::from_millis(1)).unwrap().is_none());
    }
}
