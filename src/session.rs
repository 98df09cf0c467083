//! The command session state machine. Pure and DOM-free: every operation is
//! a total function over the state, driven synchronously from user input
//! events by the controller in `terminal.rs`.

use crate::commands::{self, Command, Output};
use crate::theme::{Theme, ThemeHost};

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: Output,
}

#[derive(Debug, Clone, Copy)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// What the presentation layer needs to do after a submit, beyond drawing
/// the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEffect {
    /// A transcript entry was appended; nothing else changed.
    Rendered,
    /// The transcript was emptied.
    Cleared,
    /// The particle toggle flipped; carries the new state.
    ParticlesToggled(bool),
    /// The theme flipped through the theming collaborator.
    ThemeSwitched(Theme),
}

/// Full mutable state of one interactive run. Exactly one per active view;
/// destroyed on reload, never persisted.
#[derive(Debug, Default)]
pub struct Session {
    pub transcript: Vec<TranscriptEntry>,
    pub input_buffer: String,
    pub history: Vec<String>,
    /// Offset into `history` counted from the most recent entry, or `None`
    /// when the prompt holds fresh input.
    pub history_cursor: Option<usize>,
    pub suggestion: String,
    pub particles_enabled: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the current input. The raw (non-normalized) text is what
    /// lands in history and in the transcript echo; matching is trimmed and
    /// case-insensitive.
    pub fn submit(&mut self, raw: &str, theme: &mut dyn ThemeHost) -> SubmitEffect {
        match Command::parse(raw) {
            Some(Command::Clear) => {
                self.transcript.clear();
                self.input_buffer.clear();
                self.suggestion.clear();
                self.history_cursor = None;
                SubmitEffect::Cleared
            }
            Some(Command::Particles) => {
                self.particles_enabled = !self.particles_enabled;
                let enabled = self.particles_enabled;
                self.append(raw, commands::particles_report(enabled));
                SubmitEffect::ParticlesToggled(enabled)
            }
            Some(Command::Theme) => {
                let next = theme.current().flipped();
                theme.set(next);
                self.append(raw, commands::theme_report(next));
                SubmitEffect::ThemeSwitched(next)
            }
            Some(command) => {
                // Clear/theme/particles are handled above; the rest carry
                // pre-authored output.
                let output = commands::static_output(command).unwrap_or_else(commands::not_found);
                self.append(raw, output);
                SubmitEffect::Rendered
            }
            None => {
                self.append(raw, commands::not_found());
                SubmitEffect::Rendered
            }
        }
    }

    /// Replaces the input buffer and recomputes the completion suggestion
    /// from the full text.
    pub fn update_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.refresh_suggestion();
    }

    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if self.history.is_empty() {
            return;
        }
        let len = self.history.len();

        match direction {
            HistoryDirection::Older => {
                let next = match self.history_cursor {
                    None => Some(0),
                    Some(offset) if offset + 1 < len => Some(offset + 1),
                    Some(offset) => Some(offset),
                };
                self.history_cursor = next;
                if let Some(offset) = next {
                    self.input_buffer = self.history[len - 1 - offset].clone();
                }
            }
            HistoryDirection::Newer => match self.history_cursor {
                None => return,
                Some(0) => {
                    self.history_cursor = None;
                    self.input_buffer.clear();
                }
                Some(offset) => {
                    let next = offset - 1;
                    self.history_cursor = Some(next);
                    self.input_buffer = self.history[len - 1 - next].clone();
                }
            },
        }
        self.refresh_suggestion();
    }

    /// Completes the buffer from the pending suggestion, if any.
    pub fn accept_suggestion(&mut self) {
        if self.suggestion.is_empty() {
            return;
        }
        self.input_buffer = std::mem::take(&mut self.suggestion);
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.suggestion.clear();
        self.history_cursor = None;
    }

    fn append(&mut self, raw: &str, output: Output) {
        self.transcript.push(TranscriptEntry {
            command: raw.to_string(),
            output,
        });
        self.history.push(raw.to_string());
        self.history_cursor = None;
        self.input_buffer.clear();
        self.suggestion.clear();
    }

    fn refresh_suggestion(&mut self) {
        self.suggestion = commands::suggestion_for(&self.input_buffer)
            .map(|command| command.name().to_string())
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestTheme(Theme);

    impl ThemeHost for TestTheme {
        fn current(&self) -> Theme {
            self.0
        }

        fn set(&mut self, theme: Theme) {
            self.0 = theme;
        }
    }

    fn session() -> (Session, TestTheme) {
        (Session::new(), TestTheme(Theme::Dark))
    }

    #[test]
    fn repeated_content_commands_render_identically() {
        let (mut session, mut theme) = session();
        session.submit("skills", &mut theme);
        session.submit("skills", &mut theme);
        assert_eq!(session.transcript.len(), 2);
        assert_eq!(session.transcript[0].output, session.transcript[1].output);
    }

    #[test]
    fn submit_echoes_raw_input_and_normalizes_matching() {
        let (mut session, mut theme) = session();
        let effect = session.submit("HELP", &mut theme);
        assert_eq!(effect, SubmitEffect::Rendered);
        assert_eq!(session.history, vec!["HELP".to_string()]);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].command, "HELP");
        let Output::Text(text) = &session.transcript[0].output else {
            panic!("help should render as text");
        };
        for command in commands::COMMANDS {
            assert!(text.contains(command.name()));
        }
    }

    #[test]
    fn clear_empties_transcript_and_skips_history() {
        let (mut session, mut theme) = session();
        session.submit("help", &mut theme);
        session.submit("about", &mut theme);
        assert_eq!(session.transcript.len(), 2);

        let effect = session.submit("clear", &mut theme);
        assert_eq!(effect, SubmitEffect::Cleared);
        assert!(session.transcript.is_empty());
        assert_eq!(session.history, vec!["help".to_string(), "about".to_string()]);
        assert!(session.input_buffer.is_empty());
        assert!(session.suggestion.is_empty());
        assert_eq!(session.history_cursor, None);
    }

    #[test]
    fn particles_toggle_reports_complementary_states() {
        let (mut session, mut theme) = session();
        let first = session.submit("particles", &mut theme);
        assert_eq!(first, SubmitEffect::ParticlesToggled(true));
        assert!(session.particles_enabled);

        let second = session.submit("particles", &mut theme);
        assert_eq!(second, SubmitEffect::ParticlesToggled(false));
        assert!(!session.particles_enabled);

        assert_eq!(
            session.transcript[0].output,
            Output::Text("Particles enabled".to_string())
        );
        assert_eq!(
            session.transcript[1].output,
            Output::Text("Particles disabled".to_string())
        );
    }

    #[test]
    fn theme_flips_through_the_collaborator() {
        let (mut session, mut theme) = session();
        let effect = session.submit("theme", &mut theme);
        assert_eq!(effect, SubmitEffect::ThemeSwitched(Theme::Light));
        assert_eq!(theme.0, Theme::Light);
        assert_eq!(
            session.transcript[0].output,
            Output::Text("Theme switched to light".to_string())
        );

        let effect = session.submit("theme", &mut theme);
        assert_eq!(effect, SubmitEffect::ThemeSwitched(Theme::Dark));
        assert_eq!(theme.0, Theme::Dark);
    }

    #[test]
    fn unknown_and_empty_inputs_render_not_found() {
        let (mut session, mut theme) = session();
        session.submit("made-up", &mut theme);
        session.submit("", &mut theme);
        assert_eq!(session.transcript.len(), 2);
        for entry in &session.transcript {
            assert_eq!(entry.output, commands::not_found());
        }
        assert_eq!(session.history, vec!["made-up".to_string(), String::new()]);
    }

    #[test]
    fn update_input_computes_exact_match_suggestions() {
        let (mut session, _) = session();
        session.update_input("pro");
        assert_eq!(session.suggestion, "projects");
        session.update_input("xyz");
        assert_eq!(session.suggestion, "");
    }

    #[test]
    fn accept_suggestion_completes_or_does_nothing() {
        let (mut session, _) = session();
        session.update_input("pro");
        session.accept_suggestion();
        assert_eq!(session.input_buffer, "projects");
        assert!(session.suggestion.is_empty());

        session.update_input("zzz");
        session.accept_suggestion();
        assert_eq!(session.input_buffer, "zzz");
    }

    #[test]
    fn history_walks_older_and_clamps_at_the_oldest_entry() {
        let (mut session, mut theme) = session();
        session.submit("help", &mut theme);
        session.submit("projects", &mut theme);

        session.navigate_history(HistoryDirection::Older);
        assert_eq!(session.input_buffer, "projects");
        assert_eq!(session.history_cursor, Some(0));

        session.navigate_history(HistoryDirection::Older);
        assert_eq!(session.input_buffer, "help");
        assert_eq!(session.history_cursor, Some(1));

        // Already at the oldest entry.
        session.navigate_history(HistoryDirection::Older);
        assert_eq!(session.input_buffer, "help");
        assert_eq!(session.history_cursor, Some(1));
    }

    #[test]
    fn history_round_trip_returns_to_an_empty_prompt() {
        let (mut session, mut theme) = session();
        for command in ["help", "about", "skills"] {
            session.submit(command, &mut theme);
        }
        let len = session.history.len();
        for _ in 0..len {
            session.navigate_history(HistoryDirection::Older);
        }
        for _ in 0..len {
            session.navigate_history(HistoryDirection::Newer);
        }
        assert_eq!(session.input_buffer, "");
        assert_eq!(session.history_cursor, None);
    }

    #[test]
    fn newer_without_a_cursor_is_a_no_op() {
        let (mut session, mut theme) = session();
        session.submit("help", &mut theme);
        session.update_input("draft");
        session.navigate_history(HistoryDirection::Newer);
        assert_eq!(session.input_buffer, "draft");
        assert_eq!(session.history_cursor, None);
    }

    #[test]
    fn submit_resets_cursor_and_prompt() {
        let (mut session, mut theme) = session();
        session.submit("help", &mut theme);
        session.navigate_history(HistoryDirection::Older);
        assert_eq!(session.history_cursor, Some(0));

        session.submit("about", &mut theme);
        assert_eq!(session.history_cursor, None);
        assert!(session.input_buffer.is_empty());
        assert!(session.suggestion.is_empty());
    }
}
