use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct StatusCommand;

impl StatusCommand {
    fn lines(info: &SessionInfo<'_>) -> Vec<String> {
        let session = info.session;
        let display = session.display();
        vec![
            format!("  direction  {}", session.direction()),
            format!("  input      {:?}", session.raw()),
            format!("  hint       {}", display.hint.as_deref().unwrap_or("—")),
            format!("  display    {}", display.text),
        ]
    }
}

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn description(&self) -> &str {
        "show direction, input, and display"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        for line in Self::lines(info) {
            println!("{line}");
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;
    use crate::session::Session;

    #[tokio::test]
    async fn is_handled() {
        assert_eq!(
            StatusCommand.execute(&test_info()).await,
            CommandResult::Handled
        );
    }

    #[test]
    fn lines_show_session_state() {
        let mut session = Session::default();
        session.on_text_changed("212");
        let lines = StatusCommand::lines(&SessionInfo { session: &session });
        assert_eq!(lines[0], "  direction  Fahrenheit -> Celsius");
        assert_eq!(lines[1], "  input      \"212\"");
        assert_eq!(lines[2], "  hint       —");
        assert_eq!(lines[3], "  display    100.0 degrees celsius");
    }
}
