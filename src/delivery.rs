//! Handing a rendered document to Windows
//!
//! The default collaborator writes a short PowerShell script that loads the
//! document into the WinRT notification manager, then runs it and waits.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tempfile::TempPath;

use crate::error::{Result, ToastError};

/// Something that can show a toast document under an app identity.
pub trait Deliver {
    fn deliver(&self, document: &str, app_id: &str) -> Result<()>;
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Shows toasts by running a temporary PowerShell script.
#[derive(Debug, Clone)]
pub struct PowerShell {
    program: OsString,
    temp_dir: Option<PathBuf>,
}

impl Default for PowerShell {
    fn default() -> Self {
        PowerShell {
            program: OsString::from("powershell"),
            temp_dir: None,
        }
    }
}

impl PowerShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpreter to run, e.g. `pwsh` or a full path.
    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Directory for the transient script. Defaults to the OS temp dir.
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "-NoProfile",
            "-NonInteractive",
            "-WindowStyle",
            "Hidden",
            "-ExecutionPolicy",
            "Bypass",
            "-File",
        ]);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd
    }

    /// Writes the script as UTF-8 with a BOM so Windows PowerShell reads
    /// non-ASCII text correctly. The file is removed when the path drops.
    fn write_script(&self, document: &str, app_id: &str) -> Result<TempPath> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("toast-").suffix(".ps1");
        let mut file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(UTF8_BOM)?;
        file.write_all(script(document, app_id).as_bytes())?;
        file.flush()?;

        // Close our handle so the interpreter can open the file
        Ok(file.into_temp_path())
    }
}

impl Deliver for PowerShell {
    fn deliver(&self, document: &str, app_id: &str) -> Result<()> {
        let script_path = self.write_script(document, app_id)?;

        tracing::debug!(
            "Running {} on {}",
            self.program.to_string_lossy(),
            script_path.display()
        );

        let output = self
            .command()
            .arg(script_path.as_os_str())
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(ToastError::Delivery {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::info!("Toast delivered for {}", app_id);
        Ok(())
    }
}

/// Builds the PowerShell script that shows `document` as `app_id`.
///
/// The document is embedded as base64 and decoded by the script, so nothing
/// in user text can end up parsed as PowerShell.
pub fn script(document: &str, app_id: &str) -> String {
    format!(
        r#"[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.UI.Notifications.ToastNotification, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null

$APP_ID = '{app_id}'

$template = [System.Text.Encoding]::UTF8.GetString([System.Convert]::FromBase64String('{document}'))

$xml = New-Object Windows.Data.Xml.Dom.XmlDocument
$xml.LoadXml($template)
$toast = New-Object Windows.UI.Notifications.ToastNotification $xml
[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier($APP_ID).Show($toast)
"#,
        app_id = escape_single_quoted(app_id),
        document = STANDARD.encode(document),
    )
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', "''")
}
