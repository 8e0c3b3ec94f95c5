use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "clear the input text"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::StateChanged(StateChange::Input(String::new()))
    }
}
