//! Interactive call console
//!
//! The presentation surface: two call-control actions gate the speak/type
//! actions, the transcript renders as ordered (role, text) lines, and the
//! static emergency footer is always shown. One action runs to completion
//! before the next is accepted.

use dialoguer::{Input, Select};

use crate::agent::SupportAgent;
use crate::chat::{CallSession, Role, Turn};
use crate::persona::Persona;
use crate::voice::{CaptureOutcome, VoicePipeline};
use crate::{Error, Result};

/// Notice for a capture window with nothing but ambient noise
const NO_SPEECH_NOTICE: &str = "No speech detected. Please try again.";
/// Notice for audio the recognizer could not transcribe
const NOT_RECOGNIZED_NOTICE: &str = "Could not understand audio.";
/// Notice for a failed recognition request
const RECOGNITION_FAILED_NOTICE: &str =
    "Could not request results; check your internet connection.";

/// Terminal front end for the call-center assistant
pub struct Console {
    agent: SupportAgent,
    call: CallSession,
    persona: Persona,
    voice: Option<VoicePipeline>,
}

impl Console {
    /// Create the console; `voice` is `None` in text-only mode
    #[must_use]
    pub fn new(agent: SupportAgent, persona: Persona, voice: Option<VoicePipeline>) -> Self {
        Self {
            agent,
            call: CallSession::new(),
            persona,
            voice,
        }
    }

    /// Run the call loop until the user quits
    ///
    /// # Errors
    ///
    /// Returns error when the terminal cannot be read
    pub async fn run(mut self) -> Result<()> {
        println!("{} Customer Service", self.persona.operator);
        println!("24/7 Virtual Call Center");
        println!("{}", self.persona.footer());
        println!();

        loop {
            if self.call.is_active() {
                self.active_menu().await?;
            } else if !self.idle_menu().await? {
                break;
            }
        }

        println!("{}", self.persona.footer());
        Ok(())
    }

    /// Menu shown between calls; returns false to quit
    async fn idle_menu(&mut self) -> Result<bool> {
        let choice = Select::new()
            .with_prompt("Call center")
            .items(&["Start Call", "Quit"])
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        if choice == 1 {
            return Ok(false);
        }

        let welcome = self.persona.welcome.clone();
        if self.call.start(&welcome) {
            self.render(Role::Assistant, &welcome);
            self.speak(&welcome).await;
        }

        Ok(true)
    }

    /// Menu shown during a call
    async fn active_menu(&mut self) -> Result<()> {
        let mut items = vec!["Type a question", "End Call"];
        if self.voice.is_some() {
            items.insert(0, "Speak");
        }

        let choice = Select::new()
            .with_prompt("Call in progress")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        match items[choice] {
            "Speak" => self.speak_action().await,
            "Type a question" => self.type_action().await?,
            _ => {
                let farewell = self.persona.farewell.clone();
                self.render(Role::Assistant, &farewell);
                self.speak(&farewell).await;
                if self.call.end() {
                    self.agent.reset();
                }
            }
        }

        Ok(())
    }

    /// Capture one utterance and answer it
    async fn speak_action(&mut self) {
        println!("Listening...");

        let outcome = match self.voice.as_mut() {
            Some(voice) => voice.listen().await,
            None => return,
        };

        match outcome {
            Ok(CaptureOutcome::Utterance(text)) => self.answer(&text).await,
            Ok(CaptureOutcome::NoSpeech) => println!("{NO_SPEECH_NOTICE}"),
            Ok(CaptureOutcome::NotRecognized) => println!("{NOT_RECOGNIZED_NOTICE}"),
            Err(e) => {
                tracing::warn!(error = %e, "speech recognition failed");
                println!("{RECOGNITION_FAILED_NOTICE}");
            }
        }
    }

    /// Read a typed question and answer it
    async fn type_action(&mut self) -> Result<()> {
        let text: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let text = text.trim().to_string();
        if !text.is_empty() {
            self.answer(&text).await;
        }

        Ok(())
    }

    /// Run one enrich-and-reply turn and update the transcript
    async fn answer(&mut self, raw_text: &str) {
        self.call.push_user(raw_text);
        self.render(Role::User, raw_text);

        let reply = self.agent.handle(raw_text).await;

        self.call.push_assistant(&reply);
        self.render(Role::Assistant, &reply);
        self.speak(&reply).await;
    }

    /// Print one transcript line
    fn render(&self, role: Role, text: &str) {
        match role {
            Role::User => println!("  Customer: {text}"),
            Role::Assistant => println!("  {}: {text}", self.persona.name),
            Role::System => {}
        }
    }

    /// Speak a line best-effort when voice is available
    async fn speak(&mut self, text: &str) {
        if let Some(voice) = self.voice.as_mut() {
            voice.speak(text).await;
        }
    }

    /// The current transcript, for inspection
    #[must_use]
    pub fn transcript(&self) -> &[Turn] {
        self.call.transcript()
    }
}

/// Convert a prompt error into the crate error type
fn prompt_err(e: dialoguer::Error) -> Error {
    Error::Io(std::io::Error::other(e))
}
