use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::engine::Direction;

/// `/c2f` and `/f2c`: move the toggle to a fixed position.
pub struct SetDirectionCommand(pub Direction);

#[async_trait]
impl Command for SetDirectionCommand {
    fn name(&self) -> &str {
        match self.0 {
            Direction::CelsiusToFahrenheit => "/c2f",
            Direction::FahrenheitToCelsius => "/f2c",
        }
    }

    fn description(&self) -> &str {
        match self.0 {
            Direction::CelsiusToFahrenheit => "convert celsius to fahrenheit",
            Direction::FahrenheitToCelsius => "convert fahrenheit to celsius",
        }
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::StateChanged(StateChange::Direction(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[test]
    fn names() {
        assert_eq!(
            SetDirectionCommand(Direction::CelsiusToFahrenheit).name(),
            "/c2f"
        );
        assert_eq!(
            SetDirectionCommand(Direction::FahrenheitToCelsius).name(),
            "/f2c"
        );
    }

    #[tokio::test]
    async fn sets_direction_even_when_already_active() {
        let cmd = SetDirectionCommand(Direction::FahrenheitToCelsius);
        assert_eq!(
            cmd.execute(&test_info()).await,
            CommandResult::StateChanged(StateChange::Direction(
                Direction::FahrenheitToCelsius
            ))
        );
    }
}
