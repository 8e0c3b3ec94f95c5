use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct ToggleCommand;

#[async_trait]
impl Command for ToggleCommand {
    fn name(&self) -> &str {
        "/toggle"
    }

    fn aliases(&self) -> &[&str] {
        &["/t"]
    }

    fn description(&self) -> &str {
        "switch conversion direction"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let next = info.session.direction().toggled();
        CommandResult::StateChanged(StateChange::Direction(next))
    }
}
