//! Interactive stopwatch demo.
//!
//! Keys: `s` start, `x` stop, `r` reset, `space` start/stop, `q` quit.
//! Logs go to `stopwatch-demo.log` in the log directory, filtered by `RUST_LOG`.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use bubbletea_stopwatch::prelude::*;
use bubbletea_stopwatch::stopwatch::{with_help, with_labels, StopwatchOption};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
struct Arguments {
    /// Directory the log file is written to.
    #[arg(short, long, env = "STOPWATCH_LOG_DIR", default_value = ".")]
    log_dir: PathBuf,

    /// Labels for the start, stop and reset controls.
    #[arg(long, num_args = 3, value_names = ["START", "STOP", "RESET"])]
    labels: Option<Vec<String>>,

    /// Hide the key help line.
    #[arg(long)]
    no_help: bool,
}

static ARGUMENTS: OnceCell<Arguments> = OnceCell::new();

fn options() -> Vec<StopwatchOption> {
    let mut opts = Vec::new();
    if let Some(args) = ARGUMENTS.get() {
        if let Some([start, stop, reset]) = args.labels.as_deref() {
            opts.push(with_labels(start.as_str(), stop.as_str(), reset.as_str()));
        }
        opts.push(with_help(!args.no_help));
    }
    opts
}

struct App {
    stopwatch: Stopwatch,
    error: Option<String>,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let (mut stopwatch, error) = match stopwatch_try_new(options()) {
            Ok(sw) => (sw, None),
            Err(err) => (stopwatch_new(), Some(err.to_string())),
        };
        stopwatch.focus();
        (Self { stopwatch, error }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let is_quit = key_msg.key == KeyCode::Char('q')
                || (key_msg.key == KeyCode::Char('c')
                    && key_msg.modifiers.contains(KeyModifiers::CONTROL));
            if is_quit {
                self.stopwatch.teardown();
                return Some(quit());
            }
        }

        self.stopwatch.update(msg)
    }

    fn view(&self) -> String {
        let hint = Style::new()
            .foreground(Color::from("#626262"))
            .render("q quit");

        let mut out = format!("\n{}\n{}\n", self.stopwatch.view(), hint);
        if let Some(err) = &self.error {
            let warning = Style::new()
                .foreground(Color::from("#B60C00"))
                .render(&format!("using defaults: {}", err));
            out.push_str(&warning);
            out.push('\n');
        }
        out
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let arguments = Arguments::parse();

    let appender = tracing_appender::rolling::never(&arguments.log_dir, "stopwatch-demo.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let _ = ARGUMENTS.set(arguments);
    tracing::info!("Starting stopwatch demo");

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    program.run().await?;

    tracing::info!("Stopwatch demo finished");
    Ok(())
}
