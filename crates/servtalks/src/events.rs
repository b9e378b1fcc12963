use talkdeck::command::Command;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Command(Command),
    ConfigReload,
}
