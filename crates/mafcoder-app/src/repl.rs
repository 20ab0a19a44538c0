//! The interactive loop: read a line, stream the agent's answer, repeat.

use mafcoder_ai::{AiClient, Session};
use mafcoder_common::{new_turn_id, MafError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use crate::console::{parse_menu_choice, Console};

/// Run until `input` is exhausted.
///
/// An empty line opens the sample menu. Model failures are shown and the
/// loop carries on with the next line.
pub async fn run<R>(
    session: &mut Session,
    client: &dyn AiClient,
    console: &Console,
    samples: &[String],
    input: R,
) -> Result<(), MafError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        console.prompt();
        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            return Ok(());
        };

        let message = if line.trim().is_empty() {
            let Some(sample) = choose_sample(&mut lines, console, samples).await? else {
                debug!("Input closed at sample menu");
                return Ok(());
            };
            console.sample_echo(&sample);
            sample
        } else {
            line.trim_end_matches('\r').to_string()
        };

        let turn = new_turn_id();
        debug!(turn = %turn, chars = message.len(), "Turn started");

        let sink = console.clone();
        let on_chunk = move |chunk: String| sink.stream(&chunk);
        match session.chat_streaming(client, message, &on_chunk).await {
            Ok(reply) => debug!(turn = %turn, chars = reply.len(), "Turn finished"),
            Err(e) => {
                warn!(turn = %turn, error = %e, "Turn failed");
                console.error(&e.to_string());
            }
        }
    }
}

/// Show the menu until a valid number is entered. `None` on end of input.
async fn choose_sample<R>(
    lines: &mut Lines<R>,
    console: &Console,
    samples: &[String],
) -> Result<Option<String>, MafError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        console.sample_menu(samples);
        let Some(answer) = lines.next_line().await? else {
            return Ok(None);
        };
        match parse_menu_choice(&answer, samples.len()) {
            Some(i) => return Ok(Some(samples[i].clone())),
            None => console.error(&format!(
                "Please enter a number between 1 and {}.",
                samples.len()
            )),
        }
    }
}
