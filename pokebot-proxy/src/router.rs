//! Command dispatch: maps each chat command to emulator calls and builds the reply.
//!
//! Every recognized command produces exactly one reply. Bad arguments become a "bad usage" reply;
//! any other failure (network, decode, payload) becomes a generic failure reply and is logged.

use crate::emulator::EmulatorApi;
use pokebot_common::{
    chat::{
        Attachment, Embed, EmbedImage, Interaction, Reply, SPAM_AMOUNT_OPTION, SPAM_BUTTON_OPTION,
        SPAM_MAX, SPAM_MIN,
    },
    game::{self, Resource, Summary},
    screen::{decode_screen, PixelFormat, SCREEN_FILENAME},
    BridgeError, BridgeResult,
};
use std::collections::HashMap;

mod button;
pub use button::Button;

pub const BAD_USAGE_MESSAGE: &str = "Bad usage of command! >:(";
pub const FAILURE_MESSAGE: &str = "Something went wrong talking to the emulator :(";
pub const HELP_DESCRIPTION: &str = "Check out the github for help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Press(Button),
    Screen,
    Party,
    Balls,
    Trainer,
    Help,
    Spam,
}

fn dispatch_table() -> HashMap<&'static str, Handler> {
    let mut table: HashMap<_, _> = Button::ALL
        .into_iter()
        .map(|b| (b.action(), Handler::Press(b)))
        .collect();
    table.insert("screen", Handler::Screen);
    table.insert("party-count", Handler::Party);
    table.insert("ball-count", Handler::Balls);
    table.insert("trainer", Handler::Trainer);
    table.insert("help", Handler::Help);
    table.insert("spam", Handler::Spam);
    table
}

pub struct CommandRouter<E> {
    emulator: E,
    pixel_format: PixelFormat,
    project_url: String,
    table: HashMap<&'static str, Handler>,
}

impl<E: EmulatorApi> CommandRouter<E> {
    pub fn new(emulator: E, pixel_format: PixelFormat, project_url: impl Into<String>) -> Self {
        Self {
            emulator,
            pixel_format,
            project_url: project_url.into(),
            table: dispatch_table(),
        }
    }

    pub fn emulator(&self) -> &E {
        &self.emulator
    }

    /// Run a command. Returns `None` only when the command name is not recognized.
    pub async fn dispatch(&self, interaction: &Interaction) -> Option<Reply> {
        let name = interaction.name();
        let Some(&handler) = self.table.get(name) else {
            log::debug!("ignoring unknown command {name:?}");
            return None;
        };

        let result = match handler {
            Handler::Press(button) => self.press(button).await,
            Handler::Screen => self.screen().await,
            Handler::Party => {
                self.state(Resource::Party, game::parse_party, game::render_party)
                    .await
            }
            Handler::Balls => {
                self.state(Resource::Balls, game::parse_balls, game::render_balls)
                    .await
            }
            Handler::Trainer => {
                self.state(Resource::Trainer, game::parse_trainer, game::render_trainer)
                    .await
            }
            Handler::Help => Ok(self.help()),
            Handler::Spam => self.spam(interaction).await,
        };

        Some(result.unwrap_or_else(|e| match e {
            BridgeError::Validation(reason) => {
                log::info!("bad usage of /{name}: {reason}");
                Reply::text(BAD_USAGE_MESSAGE)
            }
            e => {
                log::error!("command /{name} failed: {e}");
                Reply::text(FAILURE_MESSAGE)
            }
        }))
    }

    async fn press(&self, button: Button) -> BridgeResult<Reply> {
        self.emulator.send_action(button.action(), None).await?;
        self.screen().await
    }

    async fn screen(&self) -> BridgeResult<Reply> {
        let hex = self.emulator.fetch_screen().await?;
        let screen = decode_screen(&hex, self.pixel_format)?;
        let attachment = Attachment {
            filename: SCREEN_FILENAME.to_string(),
            data: screen.to_png()?,
        };
        Ok(Reply::Embed(Embed {
            image: Some(EmbedImage {
                url: attachment.url(),
                width: screen.width(),
                height: screen.height(),
            }),
            footer: Some(self.project_url.clone()),
            attachment: Some(attachment),
            ..Default::default()
        }))
    }

    async fn state<T>(
        &self,
        resource: Resource,
        parse: fn(&[u8]) -> BridgeResult<T>,
        render: fn(&T) -> Summary,
    ) -> BridgeResult<Reply> {
        let body = self.emulator.fetch_state(resource).await?;
        let Summary { title, body } = render(&parse(&body)?);
        Ok(Reply::Embed(Embed {
            title: Some(title),
            description: Some(body),
            ..Default::default()
        }))
    }

    fn help(&self) -> Reply {
        Reply::Embed(Embed {
            title: Some("Help".to_string()),
            url: Some(self.project_url.clone()),
            description: Some(HELP_DESCRIPTION.to_string()),
            ..Default::default()
        })
    }

    async fn spam(&self, interaction: &Interaction) -> BridgeResult<Reply> {
        let (button, amount) = spam_arguments(interaction)?;
        for _ in 0..amount {
            self.emulator.send_action(button.action(), None).await?;
        }
        self.screen().await
    }
}

fn spam_arguments(interaction: &Interaction) -> BridgeResult<(Button, i64)> {
    let button = interaction
        .string_option(SPAM_BUTTON_OPTION)
        .ok_or_else(|| BridgeError::Validation(format!("missing {SPAM_BUTTON_OPTION}")))?
        .parse::<Button>()?;
    let amount = interaction
        .integer_option(SPAM_AMOUNT_OPTION)
        .ok_or_else(|| BridgeError::Validation(format!("missing {SPAM_AMOUNT_OPTION}")))?;
    if !(SPAM_MIN..=SPAM_MAX).contains(&amount) {
        return Err(BridgeError::Validation(format!(
            "{SPAM_AMOUNT_OPTION} must be within {SPAM_MIN}..={SPAM_MAX}, got {amount}"
        )));
    }
    Ok((button, amount))
}
