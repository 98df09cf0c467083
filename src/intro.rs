//! Intro sequencer: plays the scripted boot log with a character-by-character
//! typewriter effect, then fires a completion callback exactly once. The
//! whole sequence is one self-rescheduling timer chain guarded by a shared
//! cancellation flag, so tearing the handle down stops the chain before its
//! next step.

use crate::content::IntroLine;
use crate::renderer::Renderer;
use crate::utils::{self, CancelFlag};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

const TYPE_DELAY_MS: u32 = 50;
const LINE_PAUSE_MS: u32 = 500;
const COMPLETE_PAUSE_MS: u32 = 2000;

pub struct IntroSequencer {
    cancel: CancelFlag,
}

impl IntroSequencer {
    /// Starts the sequence. An empty script completes immediately; otherwise
    /// the callback fires once, after the final pause, unless the handle is
    /// cancelled first.
    pub fn play(
        renderer: Rc<Renderer>,
        script: &'static [IntroLine],
        on_complete: Box<dyn FnOnce()>,
    ) -> Self {
        let cancel = CancelFlag::new();

        if script.is_empty() {
            on_complete();
            return Self { cancel };
        }

        let chain_cancel = cancel.clone();
        spawn_local(async move {
            for (index, line) in script.iter().enumerate() {
                if chain_cancel.is_cancelled() {
                    return;
                }
                let slot = match renderer.intro_append_line(line.severity) {
                    Ok(slot) => slot,
                    Err(err) => {
                        utils::log(&format!("Failed to append intro line: {err:?}"));
                        return;
                    }
                };

                let mut shown = String::new();
                for ch in line.message.chars() {
                    if chain_cancel.is_cancelled() {
                        return;
                    }
                    shown.push(ch);
                    slot.set_text_content(Some(&shown));
                    TimeoutFuture::new(TYPE_DELAY_MS).await;
                }

                if index + 1 < script.len() {
                    TimeoutFuture::new(LINE_PAUSE_MS).await;
                }
            }

            TimeoutFuture::new(COMPLETE_PAUSE_MS).await;
            if chain_cancel.is_cancelled() {
                return;
            }
            on_complete();
        });

        Self { cancel }
    }

    /// Tears the sequence down; no timer fires and the completion callback
    /// is never invoked after this returns.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::INTRO_SCRIPT;

    #[test]
    fn script_pacing_constants_match_the_boot_sequence() {
        assert_eq!(TYPE_DELAY_MS, 50);
        assert_eq!(LINE_PAUSE_MS, 500);
        assert_eq!(COMPLETE_PAUSE_MS, 2000);
        assert_eq!(INTRO_SCRIPT.len(), 9);
    }

    #[test]
    fn cancel_flag_is_observable_before_playback() {
        let sequencer = IntroSequencer {
            cancel: CancelFlag::new(),
        };
        assert!(!sequencer.cancel.is_cancelled());
        sequencer.cancel();
        assert!(sequencer.cancel.is_cancelled());
    }
}
