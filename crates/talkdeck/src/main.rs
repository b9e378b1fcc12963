use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;
use talkdeck::SOCKET_PATH;
use talkdeck::catalog::{DepartmentCatalog, DepartmentId};
use talkdeck::command::Command;

#[derive(Parser, Debug)]
#[command(name = "talkdeck", version, about = "Remote control for a running ServTalks deck", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Advance to the next slide
    Next,
    /// Go back one slide
    Prev,
    /// Jump to a slide by the number shown on the counter (starting at 1)
    Goto { slide: usize },
    /// Open the modal for a department
    Open { department: String },
    /// Close the department modal
    Close,
    /// List the departments the deck knows about
    Departments,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Next => Command::Next,
        Commands::Prev => Command::Previous,
        Commands::Goto { slide } => {
            if slide == 0 {
                anyhow::bail!("Slide numbers start at 1");
            }
            Command::GoTo(slide - 1)
        }
        Commands::Open { department } => {
            if DepartmentCatalog::builtin().get(&department).is_none() {
                log::warn!("'{}' is not a built-in department", department);
            }
            Command::Open(DepartmentId::new(department))
        }
        Commands::Close => Command::Close,
        Commands::Departments => {
            for dept in DepartmentCatalog::builtin().iter() {
                println!("{:<12} {} {}", dept.id.as_str(), dept.icon, dept.title);
            }
            return Ok(());
        }
    };

    send_command(&command)
}

fn send_command(command: &Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to the presentation at {}: {}. Is servtalks running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    log::debug!("sent '{}'", command);
    Ok(())
}
