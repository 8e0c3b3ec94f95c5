use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Leave the converter. Bare `quit` / `exit` work too since they can never
/// be a temperature.
pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["/q", "quit", "exit"]
    }

    fn description(&self) -> &str {
        "leave the converter"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Quit
    }
}
