//! toast - show a Windows toast notification from the command line

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};

use toast::config::{self, Config};
use toast::{Action, ActivationType, Audio, Duration, Notification, Notifier, PowerShell, ToastError};

/// Show a Windows toast notification
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// App name shown in the Action Center
    #[arg(long)]
    app_id: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    message: Option<String>,

    #[arg(long)]
    attribution: Option<String>,

    /// Absolute path to an icon shown next to the title
    #[arg(long)]
    icon: Option<String>,

    /// Absolute path to a banner image
    #[arg(long = "hero")]
    hero_image: Option<String>,

    /// Inline image path or URL
    #[arg(long)]
    image: Option<String>,

    /// foreground, background, protocol or system
    #[arg(long)]
    activation_type: Option<String>,

    /// Launched when the toast is clicked, e.g. a URL
    #[arg(long = "activation-arg")]
    activation_arguments: Option<String>,

    /// Add a button; repeat for more
    #[arg(
        long = "action",
        num_args = 3,
        value_names = ["TYPE", "LABEL", "ARGS"],
        action = ArgAction::Append
    )]
    actions: Vec<String>,

    /// default, im, mail, reminder, sms, loopingalarm[2-10], loopingcall[2-10] or silent
    #[arg(long)]
    audio: Option<String>,

    /// Loop the audio
    #[arg(long = "loop", overrides_with = "no_loop")]
    looping: bool,

    /// Don't loop the audio, even if the JSON file asks for it
    #[arg(long = "no-loop", overrides_with = "looping")]
    no_loop: bool,

    /// short or long
    #[arg(long)]
    duration: Option<String>,

    /// Read the notification from a JSON file; flags override its fields
    #[arg(long)]
    json: Option<PathBuf>,

    /// Config file (default: <config dir>/toast/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the toast XML instead of showing it
    #[arg(long)]
    dry_run: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = config::load(args.config.as_deref())?;
    let base = match &args.json {
        Some(path) => read_json(path)?,
        None => Notification::new(),
    };
    let notification = build_notification(&args, &config, base);

    let mut shell = PowerShell::new();
    if let Some(program) = &config.powershell {
        shell = shell.program(program);
    }
    let notifier = Notifier::with_delivery(shell)?;

    if args.dry_run {
        print!("{}", notifier.render(notification)?);
        return Ok(());
    }

    notifier
        .push(notification)
        .context("Failed to show notification")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json(path: &Path) -> anyhow::Result<Notification> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid notification in {}", path.display()))
}

/// Layers flags over `base`, then falls back to the config file.
fn build_notification(args: &Args, config: &Config, base: Notification) -> Notification {
    let mut n = base;

    override_field(&mut n.app_id, &args.app_id);
    override_field(&mut n.title, &args.title);
    override_field(&mut n.message, &args.message);
    override_field(&mut n.attribution, &args.attribution);
    override_field(&mut n.icon, &args.icon);
    override_field(&mut n.hero_image, &args.hero_image);
    override_field(&mut n.image, &args.image);
    override_field(&mut n.activation_arguments, &args.activation_arguments);

    if let Some(name) = &args.activation_type {
        n.activation_type = Some(resolve(name, ActivationType::lookup));
    }
    if let Some(name) = &args.audio {
        n.audio = Some(resolve(name, Audio::lookup));
    }
    if let Some(name) = &args.duration {
        n.duration = Some(resolve(name, Duration::lookup));
    }
    if args.looping {
        n.looping = true;
    } else if args.no_loop {
        n.looping = false;
    }

    for chunk in args.actions.chunks_exact(3) {
        let kind = resolve(&chunk[0], ActivationType::lookup);
        n.actions.push(Action::new(kind, &chunk[1], &chunk[2]));
    }

    if n.app_id.is_none() {
        n.app_id = config.app_id.clone();
    }
    if n.icon.is_none() {
        n.icon = config.icon.clone();
    }
    if n.audio.is_none() {
        n.audio = config.audio.as_deref().map(|name| resolve(name, Audio::lookup));
    }
    if n.duration.is_none() {
        n.duration = config
            .duration
            .as_deref()
            .map(|name| resolve(name, Duration::lookup));
    }

    n
}

fn override_field(field: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *field = Some(value.clone());
    }
}

/// Warn about an unknown name and carry on with the fallback.
fn resolve<T, F>(name: &str, lookup: F) -> T
where
    T: Display,
    F: Fn(&str) -> (T, Option<ToastError>),
{
    let (value, err) = lookup(name);
    if let Some(e) = err {
        tracing::warn!("{}, using {}", e, value);
    }
    value
}
